//! Port layer - timer source abstraction
//!
//! The scheduler never touches a timer peripheral directly. It is handed a
//! [`TimerSource`] at init time and expects the source's interrupt to call
//! [`os_dispatch`](crate::sched::os_dispatch) once per armed interval.

use crate::types::Tick;

/// Contract for the periodic interrupt source that drives dispatch.
///
/// `start` and `stop` must be idempotent. Implementations use interior
/// mutability (or direct peripheral access) since the scheduler holds the
/// source behind a shared `'static` reference.
pub trait TimerSource: Sync {
    /// Configure the interrupt interval, in tick units
    fn arm(&self, interval: Tick);

    /// Begin firing interrupts at the armed interval
    fn start(&self);

    /// Cease firing interrupts; the armed interval is retained
    fn stop(&self);
}

#[cfg(target_arch = "arm")]
pub mod systick;

#[cfg(target_arch = "arm")]
pub use systick::SysTickSource;

/// Inert timer source for host-side testing.
///
/// Never fires; tests drive dispatch manually through
/// [`os_dispatch`](crate::sched::os_dispatch).
pub struct NullTimer;

impl TimerSource for NullTimer {
    fn arm(&self, _interval: Tick) {}

    fn start(&self) {}

    fn stop(&self) {}
}
