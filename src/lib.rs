//! Non-preemptive cooperative task scheduler
//!
//! A priority-ordered scheduler for single-core microcontrollers, driven by
//! one periodic hardware timer interrupt. It provides:
//! - A fixed-capacity task registry kept sorted by priority
//! - A per-tick dispatch pass that runs due tasks, highest priority first
//! - A reentrancy guard that drops overlapping ticks
//! - Per-task enable/disable with frozen elapsed time while disabled
//!
//! Task callbacks run synchronously in interrupt context and must be short
//! and non-blocking.

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]

// ============ Critical Section ============

#[cfg(target_arch = "arm")]
mod cs_impl {
    use cortex_m::interrupt;
    use cortex_m::register::primask;
    use critical_section::{set_impl, Impl, RawRestoreState};

    struct SingleCoreCriticalSection;
    set_impl!(SingleCoreCriticalSection);

    unsafe impl Impl for SingleCoreCriticalSection {
        unsafe fn acquire() -> RawRestoreState {
            let was_active = primask::read().is_active();
            interrupt::disable();
            was_active
        }

        unsafe fn release(was_active: RawRestoreState) {
            if was_active {
                unsafe { interrupt::enable() }
            }
        }
    }
}

// ============ Modules ============

pub mod log;
mod lang_items;

pub mod core;
pub mod port;

// ============ Re-exports ============

pub use core::config;
pub use core::critical;
pub use core::error;
pub use core::error::{SchedError, SchedResult};
pub use core::kernel;
pub use core::kernel::{
    os_current_priority, os_init, os_pass_count, os_start, os_status, os_stop,
};
pub use core::sched;
pub use core::sched::{dispatch_pass, os_dispatch, TaskRegistry};
pub use core::task;
pub use core::task::{
    os_task_count, os_task_create, os_task_disable, os_task_elapsed, os_task_enable,
    os_task_schedule, os_task_snapshot, os_task_unschedule, Runnable, Task,
};
pub use core::types;
pub use core::types::*;

pub use port::{NullTimer, TimerSource};
