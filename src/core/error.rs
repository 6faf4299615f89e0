//! Error types for the scheduler
//!
//! Uses Rust's Result pattern instead of boolean/sentinel returns.

/// Scheduler error type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum SchedError {
    // ============ Lifecycle errors ============
    /// `os_init` has not been called yet
    NotInit = 101,
    /// Scheduler is currently running; stop it first
    Running = 102,

    // ============ Registry errors ============
    /// No free slot left in the task registry
    RegistryFull = 201,
    /// No registered task has the given id
    TaskNotFound = 202,

    // ============ ISR errors ============
    /// Cannot register a task from interrupt context
    ScheduleIsr = 301,
    /// Cannot remove a task from interrupt context
    UnscheduleIsr = 302,
}

/// Result type alias for scheduler operations
pub type SchedResult<T> = Result<T, SchedError>;
