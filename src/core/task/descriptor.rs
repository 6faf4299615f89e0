//! Task descriptor definition
//!
//! A descriptor carries the identity, timing, priority, and enable state of
//! one schedulable unit of work.

use crate::types::{Priority, TaskId, Tick};

/// A unit of periodic work
///
/// Replaces a bare `fn()` callback so tasks can carry their own state.
/// Implementations must use interior mutability (atomics, `CsCell`) since
/// `run` is called with a shared reference from interrupt context.
///
/// Any `Fn() + Sync` closure or function pointer is a `Runnable`.
pub trait Runnable: Sync {
    /// Execute one iteration of the task's work.
    ///
    /// Runs synchronously inside the timer interrupt; keep it short and
    /// avoid long I/O. The dispatcher holds the registry for the whole
    /// pass, so the callback must not register, remove, or reconfigure
    /// tasks.
    fn run(&self);
}

impl<F> Runnable for F
where
    F: Fn() + Sync,
{
    fn run(&self) {
        self()
    }
}

/// Task descriptor
///
/// Created through [`os_task_create`](crate::task::os_task_create) and
/// transferred into the registry by
/// [`os_task_schedule`](crate::task::os_task_schedule), which owns it for
/// the rest of the process lifetime (unless unscheduled).
#[derive(Clone, Copy)]
pub struct Task {
    /// Caller-assigned id; duplicates are accepted, first match wins on lookup
    pub id: TaskId,
    /// Minimum accumulated time between runs, in tick units
    pub period: Tick,
    /// Time accumulated since the last run; mutated only by the dispatcher
    pub elapsed: Tick,
    /// The work itself
    pub runnable: &'static dyn Runnable,
    /// Execution priority
    pub priority: Priority,
    /// Disabled tasks are skipped and their elapsed time is frozen
    pub enabled: bool,
}

impl Task {
    /// Create a fully-initialized descriptor with zero elapsed time.
    ///
    /// `id` and `period` are accepted verbatim: no uniqueness or positivity
    /// checks. A task with `period` 0 runs on every tick.
    pub fn new(
        id: TaskId,
        period: Tick,
        runnable: &'static dyn Runnable,
        priority: Priority,
        enabled: bool,
    ) -> Self {
        Task {
            id,
            period,
            elapsed: 0,
            runnable,
            priority,
            enabled,
        }
    }

    /// Check whether the task's timer has reached its period
    #[inline]
    pub fn is_due(&self) -> bool {
        self.elapsed >= self.period
    }
}
