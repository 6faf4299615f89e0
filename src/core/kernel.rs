//! Global scheduler state and lifecycle control
//!
//! This module owns the process-wide scheduler instance: the task registry,
//! the atomic kernel flags (including the dispatch reentrancy guard), the
//! bound timer source, and the initialize/start/stop operations.

use portable_atomic::{AtomicBool, AtomicU32, AtomicU8, Ordering};

use crate::core::cs_cell::CsCell;
use crate::critical::critical_section;
use crate::error::{SchedError, SchedResult};
use crate::port::TimerSource;
use crate::sched::TaskRegistry;
use crate::types::{Priority, SchedStatus, Tick};

// ============ Kernel State ============

/// Atomic kernel flags
pub struct KernelFlags {
    initialized: AtomicBool,
    running: AtomicBool,
    /// Reentrancy guard: set while a dispatch pass is in progress
    dispatching: AtomicBool,
    /// Configured timer interrupt interval
    tick_period: AtomicU32,
    /// Rank of the most recently executed task (diagnostic only)
    current_prio: AtomicU8,
    /// Completed dispatch passes
    pass_counter: AtomicU32,
}

impl KernelFlags {
    const fn new() -> Self {
        Self {
            initialized: AtomicBool::new(false),
            running: AtomicBool::new(false),
            dispatching: AtomicBool::new(false),
            tick_period: AtomicU32::new(0),
            current_prio: AtomicU8::new(0),
            pass_counter: AtomicU32::new(0),
        }
    }

    pub(crate) fn reset(&self) {
        self.initialized.store(false, Ordering::SeqCst);
        self.running.store(false, Ordering::SeqCst);
        self.dispatching.store(false, Ordering::SeqCst);
        self.tick_period.store(0, Ordering::SeqCst);
        self.current_prio.store(0, Ordering::SeqCst);
        self.pass_counter.store(0, Ordering::SeqCst);
    }

    /// Check if the scheduler is initialized
    #[inline(always)]
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Check if the scheduler is running
    #[inline(always)]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Check if a dispatch pass is in progress
    #[inline(always)]
    pub fn is_dispatching(&self) -> bool {
        self.dispatching.load(Ordering::Acquire)
    }

    /// Get the configured tick interval
    #[inline(always)]
    pub fn tick_period(&self) -> Tick {
        self.tick_period.load(Ordering::Relaxed)
    }

    /// Get the number of completed dispatch passes
    #[inline(always)]
    pub fn pass_count(&self) -> u32 {
        self.pass_counter.load(Ordering::Relaxed)
    }

    /// Get the rank of the most recently executed task
    #[inline(always)]
    pub fn current_prio(&self) -> u8 {
        self.current_prio.load(Ordering::Relaxed)
    }

    /// Set initialized flag
    #[inline(always)]
    pub(crate) fn set_initialized(&self, val: bool) {
        self.initialized.store(val, Ordering::SeqCst);
    }

    /// Set running flag
    #[inline(always)]
    pub(crate) fn set_running(&self, val: bool) {
        self.running.store(val, Ordering::SeqCst);
    }

    /// Store the tick interval
    #[inline(always)]
    pub(crate) fn set_tick_period(&self, period: Tick) {
        self.tick_period.store(period, Ordering::SeqCst);
    }

    /// Record the priority of an executed task
    #[inline(always)]
    pub(crate) fn set_current_prio(&self, prio: Priority) {
        self.current_prio.store(prio.rank(), Ordering::Relaxed);
    }

    /// Count a completed dispatch pass
    #[inline(always)]
    pub(crate) fn pass_increment(&self) {
        self.pass_counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Try to take the dispatch guard.
    ///
    /// Fails if a pass is already in progress; the caller must then drop
    /// the tick.
    #[inline(always)]
    pub(crate) fn try_begin_dispatch(&self) -> bool {
        self.dispatching
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }

    /// Release the dispatch guard
    #[inline(always)]
    pub(crate) fn end_dispatch(&self) {
        self.dispatching.store(false, Ordering::Release);
    }
}

// ============ Global Instances ============

/// Global kernel flags instance
pub(crate) static KERNEL: KernelFlags = KernelFlags::new();

/// Global task registry instance
pub(crate) static SCHED: CsCell<TaskRegistry> = CsCell::new(TaskRegistry::new());

/// Bound timer source, set by `os_init`
static TIMER: CsCell<Option<&'static dyn TimerSource>> = CsCell::new(None);

// ============ Public API ============

/// Initialize the scheduler.
///
/// Must be called before any other scheduler operation. Empties the task
/// registry, clears the dispatch guard, stores the tick interval, and arms
/// `timer` at that interval while leaving it stopped. Re-initializing a
/// stopped scheduler resets all state; initializing a running scheduler is
/// rejected.
///
/// # Returns
/// * `Ok(())` - Scheduler ready for task registration
/// * `Err(SchedError::Running)` - Scheduler is running; call `os_stop` first
pub fn os_init(timer: &'static dyn TimerSource, tick_period: Tick) -> SchedResult<()> {
    if KERNEL.is_running() {
        return Err(SchedError::Running);
    }

    critical_section(|cs| {
        SCHED.get(cs).reset();
        KERNEL.reset();
        KERNEL.set_tick_period(tick_period);

        timer.arm(tick_period);
        timer.stop();
        *TIMER.get(cs) = Some(timer);

        KERNEL.set_initialized(true);
    });

    Ok(())
}

/// Start dispatching.
///
/// Arms the timer source; ticks begin invoking the dispatcher. Idempotent.
/// Registry contents and task state are not affected.
///
/// # Returns
/// * `Ok(())` - Scheduler running
/// * `Err(SchedError::NotInit)` - `os_init` has not been called
pub fn os_start() -> SchedResult<()> {
    if !KERNEL.is_initialized() {
        return Err(SchedError::NotInit);
    }

    critical_section(|cs| {
        if let Some(timer) = *TIMER.get(cs) {
            timer.start();
        }
        KERNEL.set_running(true);
    });

    Ok(())
}

/// Stop dispatching.
///
/// Disarms the timer source; registry contents and task state persist and
/// `os_start` resumes where things left off. Idempotent.
///
/// # Returns
/// * `Ok(())` - Scheduler stopped
/// * `Err(SchedError::NotInit)` - `os_init` has not been called
pub fn os_stop() -> SchedResult<()> {
    if !KERNEL.is_initialized() {
        return Err(SchedError::NotInit);
    }

    critical_section(|cs| {
        if let Some(timer) = *TIMER.get(cs) {
            timer.stop();
        }
        KERNEL.set_running(false);
    });

    Ok(())
}

/// Current lifecycle state of the scheduler
pub fn os_status() -> SchedStatus {
    if !KERNEL.is_initialized() {
        SchedStatus::Uninitialized
    } else if KERNEL.is_running() {
        SchedStatus::Running
    } else {
        SchedStatus::Stopped
    }
}

/// Priority of the most recently executed task.
///
/// Diagnostic value only; defaults to `VeryHigh` before any task has run.
pub fn os_current_priority() -> Priority {
    Priority::from_rank(KERNEL.current_prio())
}

/// Number of dispatch passes completed since `os_init`.
///
/// Dropped ticks are not counted.
pub fn os_pass_count() -> u32 {
    KERNEL.pass_count()
}
