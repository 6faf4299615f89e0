//! Compile-time configuration for the scheduler
//!
//! These constants control the resource limits of the scheduler.

/// Maximum number of registered tasks
///
/// The task registry is a fixed-capacity arena; registration fails with
/// `SchedError::RegistryFull` once this many tasks are scheduled.
pub const CFG_TASK_MAX: usize = 16;

/// Number of priority levels
pub const CFG_PRIO_LEVELS: usize = 5;
