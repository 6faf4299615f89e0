//! Core type definitions for the scheduler
//!
//! These types provide strong typing for scheduler primitives.

/// Caller-assigned task identifier
///
/// The scheduler does not enforce uniqueness; lookups return the first
/// registered task with a matching id.
pub type TaskId = i32;

/// Tick time type
///
/// Periods and elapsed times are expressed in the same unit as the timer
/// interrupt interval handed to `os_init`.
pub type Tick = u32;

/// Task priority level
///
/// Five fixed levels. A smaller rank means a higher execution priority,
/// so `VeryHigh < VeryLow` under the derived ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Priority {
    VeryHigh = 0,
    High = 1,
    Medium = 2,
    Low = 3,
    VeryLow = 4,
}

impl Priority {
    /// Numeric rank (0 = highest priority)
    #[inline]
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Recover a priority from its stored rank
    ///
    /// Ranks beyond the last level clamp to `VeryLow`.
    pub fn from_rank(rank: u8) -> Self {
        match rank {
            0 => Priority::VeryHigh,
            1 => Priority::High,
            2 => Priority::Medium,
            3 => Priority::Low,
            _ => Priority::VeryLow,
        }
    }
}

/// Scheduler lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SchedStatus {
    /// `os_init` has not been called yet
    Uninitialized = 0,
    /// Initialized, timer source disarmed
    Stopped = 1,
    /// Timer source armed and ticking
    Running = 2,
}
