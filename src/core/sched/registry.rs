//! Task registry - priority-ordered arena of task descriptors
//!
//! A fixed-capacity vector kept sorted by priority rank at insertion time.
//! Equal-priority tasks stay in registration order, so a full traversal
//! visits tasks highest priority first and FIFO within a priority band.

use crate::config::CFG_TASK_MAX;
use crate::error::{SchedError, SchedResult};
use crate::task::Task;
use crate::types::{TaskId, Tick};

const EMPTY_SLOT: Option<Task> = None;

/// Priority-ordered task registry
///
/// Occupied slots form a contiguous prefix of the arena. The registry owns
/// its descriptors exclusively; callers interact by id.
pub struct TaskRegistry {
    slots: [Option<Task>; CFG_TASK_MAX],
    count: usize,
}

impl TaskRegistry {
    /// Create a new empty registry
    pub const fn new() -> Self {
        TaskRegistry {
            slots: [EMPTY_SLOT; CFG_TASK_MAX],
            count: 0,
        }
    }

    /// Remove all tasks
    pub fn reset(&mut self) {
        self.slots = [EMPTY_SLOT; CFG_TASK_MAX];
        self.count = 0;
    }

    /// Number of registered tasks
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if the registry has no tasks
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Check if every slot is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == CFG_TASK_MAX
    }

    /// Insert a task at its priority position.
    ///
    /// The new task lands after every task of equal or higher priority and
    /// before the first task of strictly lower priority; the last occupied
    /// slot is compared like any other. Ties therefore break FIFO by
    /// registration order.
    pub fn insert(&mut self, task: Task) -> SchedResult<()> {
        if self.is_full() {
            return Err(SchedError::RegistryFull);
        }

        let idx = self
            .iter()
            .position(|t| t.priority.rank() > task.priority.rank())
            .unwrap_or(self.count);

        // Shift lower-priority tasks toward the tail to open the slot
        for i in (idx..self.count).rev() {
            self.slots[i + 1] = self.slots[i];
        }
        self.slots[idx] = Some(task);
        self.count += 1;

        Ok(())
    }

    /// Remove the first task with the given id.
    ///
    /// Returns whether a match was found.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let Some(idx) = self.iter().position(|t| t.id == id) else {
            return false;
        };

        for i in idx..self.count - 1 {
            self.slots[i] = self.slots[i + 1];
        }
        self.slots[self.count - 1] = None;
        self.count -= 1;

        true
    }

    /// Iterate tasks in priority order
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.slots[..self.count].iter().flatten()
    }

    /// Iterate tasks mutably in priority order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Task> {
        self.slots[..self.count].iter_mut().flatten()
    }

    /// Find the first task with the given id
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.iter().find(|t| t.id == id)
    }

    /// Find the first task with the given id, mutably
    pub fn find_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.iter_mut().find(|t| t.id == id)
    }

    /// Flip the enable flag of the first task with the given id.
    ///
    /// Returns whether a match was found.
    pub fn set_enabled(&mut self, id: TaskId, enabled: bool) -> bool {
        match self.find_mut(id) {
            Some(task) => {
                task.enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// Elapsed time of the first task with the given id
    pub fn elapsed(&self, id: TaskId) -> Option<Tick> {
        self.find(id).map(|t| t.elapsed)
    }
}

impl Default for TaskRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Runnable;
    use crate::types::Priority;

    struct Nop;

    impl Runnable for Nop {
        fn run(&self) {}
    }

    static NOP: Nop = Nop;

    fn mk(id: TaskId, priority: Priority) -> Task {
        Task::new(id, 10, &NOP, priority, true)
    }

    fn assert_order(reg: &TaskRegistry, expected: &[TaskId]) {
        assert_eq!(reg.len(), expected.len());
        for (task, want) in reg.iter().zip(expected) {
            assert_eq!(task.id, *want);
        }
    }

    #[test]
    fn test_empty_registry() {
        let reg = TaskRegistry::new();
        assert!(reg.is_empty());
        assert!(!reg.is_full());
        assert_eq!(reg.len(), 0);
        assert!(reg.find(1).is_none());
    }

    #[test]
    fn test_insert_orders_by_priority() {
        let mut reg = TaskRegistry::new();

        reg.insert(mk(1, Priority::Low)).unwrap();
        reg.insert(mk(2, Priority::VeryHigh)).unwrap();
        reg.insert(mk(3, Priority::Medium)).unwrap();
        reg.insert(mk(4, Priority::VeryLow)).unwrap();
        reg.insert(mk(5, Priority::High)).unwrap();

        assert_order(&reg, &[2, 5, 3, 1, 4]);
    }

    #[test]
    fn test_equal_priority_is_fifo() {
        let mut reg = TaskRegistry::new();

        reg.insert(mk(1, Priority::Medium)).unwrap();
        reg.insert(mk(2, Priority::Medium)).unwrap();
        reg.insert(mk(3, Priority::High)).unwrap();
        reg.insert(mk(4, Priority::Medium)).unwrap();

        assert_order(&reg, &[3, 1, 2, 4]);
    }

    #[test]
    fn test_insert_before_lower_priority_tail() {
        // The tail slot's priority takes part in the comparison, so a
        // higher-priority task lands in front of a lone lower-priority one.
        let mut reg = TaskRegistry::new();

        reg.insert(mk(1, Priority::Low)).unwrap();
        reg.insert(mk(2, Priority::VeryHigh)).unwrap();

        assert_order(&reg, &[2, 1]);
    }

    #[test]
    fn test_full_registry_rejects() {
        let mut reg = TaskRegistry::new();

        for i in 0..CFG_TASK_MAX {
            reg.insert(mk(i as TaskId, Priority::Medium)).unwrap();
        }
        assert!(reg.is_full());

        assert_eq!(
            reg.insert(mk(99, Priority::VeryHigh)),
            Err(SchedError::RegistryFull)
        );
        assert_eq!(reg.len(), CFG_TASK_MAX);
    }

    #[test]
    fn test_duplicate_id_first_match_wins() {
        let mut reg = TaskRegistry::new();

        reg.insert(mk(7, Priority::High)).unwrap();
        reg.insert(mk(7, Priority::Low)).unwrap();

        assert!(reg.set_enabled(7, false));
        let mut seen = 0;
        for task in reg.iter().filter(|t| t.id == 7) {
            match task.priority {
                Priority::High => assert!(!task.enabled),
                _ => assert!(task.enabled),
            }
            seen += 1;
        }
        assert_eq!(seen, 2);
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut reg = TaskRegistry::new();

        reg.insert(mk(1, Priority::High)).unwrap();
        reg.insert(mk(2, Priority::Medium)).unwrap();
        reg.insert(mk(2, Priority::Low)).unwrap();

        assert!(reg.remove(2));
        assert_order(&reg, &[1, 2]);
        assert_eq!(reg.find(2).map(|t| t.priority), Some(Priority::Low));

        assert!(!reg.remove(42));
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn test_lookup_not_found() {
        let mut reg = TaskRegistry::new();
        reg.insert(mk(1, Priority::Medium)).unwrap();

        assert!(!reg.set_enabled(9, true));
        assert_eq!(reg.elapsed(9), None);
        assert_eq!(reg.elapsed(1), Some(0));
    }

    #[test]
    fn test_reset_empties() {
        let mut reg = TaskRegistry::new();
        reg.insert(mk(1, Priority::Medium)).unwrap();
        reg.insert(mk(2, Priority::Low)).unwrap();

        reg.reset();
        assert!(reg.is_empty());
        assert!(reg.find(1).is_none());
    }
}
