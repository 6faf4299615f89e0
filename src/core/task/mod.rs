//! Task management module
//!
//! Provides the task factory and the registration, removal, enable/disable,
//! and query operations. Every operation that touches the registry runs
//! inside a critical section so it cannot interleave with a dispatch pass.

mod descriptor;

pub use descriptor::{Runnable, Task};

use crate::critical::{critical_section, is_isr_context};
use crate::error::{SchedError, SchedResult};
use crate::kernel::{KERNEL, SCHED};
use crate::types::{Priority, TaskId, Tick};

/// Create a task descriptor.
///
/// A pure factory: the descriptor is not scheduled until handed to
/// [`os_task_schedule`]. `elapsed` starts at zero. `id` and `period` are
/// accepted verbatim; the scheduler neither enforces id uniqueness nor
/// rejects a zero period.
///
/// # Example
/// ```ignore
/// struct Blink;
///
/// impl Runnable for Blink {
///     fn run(&self) { /* toggle a pin */ }
/// }
///
/// static BLINK: Blink = Blink;
///
/// let task = os_task_create(1, 500, &BLINK, Priority::High, true);
/// os_task_schedule(task)?;
/// ```
pub fn os_task_create(
    id: TaskId,
    period: Tick,
    runnable: &'static dyn Runnable,
    priority: Priority,
    enabled: bool,
) -> Task {
    Task::new(id, period, runnable, priority, enabled)
}

/// Register a task with the scheduler.
///
/// The descriptor moves into the registry at its priority position; tasks
/// of equal priority keep their registration order.
///
/// # Returns
/// * `Ok(())` - Task registered
/// * `Err(SchedError::NotInit)` - `os_init` has not been called
/// * `Err(SchedError::RegistryFull)` - No free registry slot
/// * `Err(SchedError::ScheduleIsr)` - Called from interrupt context
pub fn os_task_schedule(task: Task) -> SchedResult<()> {
    if is_isr_context() {
        return Err(SchedError::ScheduleIsr);
    }

    if !KERNEL.is_initialized() {
        return Err(SchedError::NotInit);
    }

    critical_section(|cs| SCHED.get(cs).insert(task))
}

/// Remove the first task with the given id from the scheduler.
///
/// Runs inside a critical section, so it cannot interleave with an
/// in-progress dispatch pass.
///
/// # Returns
/// * `Ok(())` - Task removed
/// * `Err(SchedError::TaskNotFound)` - No task with that id
/// * `Err(SchedError::UnscheduleIsr)` - Called from interrupt context
pub fn os_task_unschedule(id: TaskId) -> SchedResult<()> {
    if is_isr_context() {
        return Err(SchedError::UnscheduleIsr);
    }

    critical_section(|cs| {
        if SCHED.get(cs).remove(id) {
            Ok(())
        } else {
            Err(SchedError::TaskNotFound)
        }
    })
}

/// Enable the first task with the given id.
///
/// Elapsed-time accumulation resumes from where it was frozen, not from
/// zero.
pub fn os_task_enable(id: TaskId) -> SchedResult<()> {
    set_enabled(id, true)
}

/// Disable the first task with the given id.
///
/// The task is skipped by the dispatcher and its elapsed time freezes.
pub fn os_task_disable(id: TaskId) -> SchedResult<()> {
    set_enabled(id, false)
}

fn set_enabled(id: TaskId, enabled: bool) -> SchedResult<()> {
    critical_section(|cs| {
        if SCHED.get(cs).set_enabled(id, enabled) {
            Ok(())
        } else {
            Err(SchedError::TaskNotFound)
        }
    })
}

/// Elapsed time of the first task with the given id.
///
/// # Returns
/// * `Ok(elapsed)` - Time accumulated since the task last ran
/// * `Err(SchedError::TaskNotFound)` - No task with that id
pub fn os_task_elapsed(id: TaskId) -> SchedResult<Tick> {
    critical_section(|cs| {
        SCHED
            .get(cs)
            .elapsed(id)
            .ok_or(SchedError::TaskNotFound)
    })
}

/// Number of registered tasks
pub fn os_task_count() -> usize {
    critical_section(|cs| SCHED.get(cs).len())
}

/// Visit `(id, period)` of every registered task in priority order.
///
/// Diagnostic hook for inspection or logging. The visitor runs with
/// interrupts masked; keep it short.
pub fn os_task_snapshot<F>(mut f: F)
where
    F: FnMut(TaskId, Tick),
{
    critical_section(|cs| {
        for task in SCHED.get(cs).iter() {
            f(task.id, task.period);
        }
    });
}
