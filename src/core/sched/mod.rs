//! Dispatcher module
//!
//! One dispatch pass runs per timer tick: walk the registry in priority
//! order, run every enabled task whose timer has reached its period, and
//! advance the timers of enabled tasks by the tick interval.

mod registry;

pub use registry::TaskRegistry;

use crate::kernel;
use crate::types::{Priority, Tick};

/// Run one dispatch pass over a registry.
///
/// For each enabled task, front to back: advance its elapsed time by
/// `tick_period`, and if it has reached its period, run its callback
/// synchronously and reset the elapsed time to zero. Disabled tasks are
/// skipped entirely, so their elapsed time freezes until re-enabled.
///
/// Returns the priority of the last task executed, if any ran.
pub fn dispatch_pass(registry: &mut TaskRegistry, tick_period: Tick) -> Option<Priority> {
    let mut executed: Option<Priority> = None;

    for task in registry.iter_mut() {
        if !task.enabled {
            continue;
        }

        task.elapsed = task.elapsed.saturating_add(tick_period);

        if task.is_due() {
            task.runnable.run();
            executed = Some(task.priority);
            task.elapsed = 0;
        }
    }

    executed
}

/// Timer tick entry point.
///
/// Invoked by the timer source once per interval, from interrupt context.
/// If the previous tick's pass is still in progress the tick is silently
/// dropped; there is no queuing or coalescing of missed ticks.
pub fn os_dispatch() {
    if !kernel::KERNEL.is_running() {
        return;
    }

    // Reentrancy guard: a slow callback must not cause a second concurrent
    // traversal of the registry.
    if !kernel::KERNEL.try_begin_dispatch() {
        return;
    }

    let tick_period = kernel::KERNEL.tick_period();

    // SAFETY: foreground registry access masks this interrupt, and the
    // dispatch guard above excludes a second pass, so this borrow is
    // exclusive for the duration of the traversal.
    let registry = unsafe { kernel::SCHED.get_unchecked() };

    if let Some(prio) = dispatch_pass(registry, tick_period) {
        kernel::KERNEL.set_current_prio(prio);
    }

    kernel::KERNEL.pass_increment();
    kernel::KERNEL.end_dispatch();
}
