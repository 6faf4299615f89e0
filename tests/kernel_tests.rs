//! Lifecycle tests for the global scheduler instance
//!
//! The scheduler state is process-wide, so everything lives in a single
//! test function that walks the whole lifecycle in order: uninitialized,
//! initialized, running, stopped, re-initialized.

use std::sync::atomic::{AtomicU32, Ordering};

use coopsched::{
    os_current_priority, os_dispatch, os_init, os_pass_count, os_start, os_status, os_stop,
    os_task_count, os_task_create, os_task_disable, os_task_elapsed, os_task_enable,
    os_task_schedule, os_task_snapshot, os_task_unschedule, NullTimer, Priority, Runnable,
    SchedError, SchedStatus,
};

static NULL_TIMER: NullTimer = NullTimer;

static HIGH_RUNS: AtomicU32 = AtomicU32::new(0);
static LOW_RUNS: AtomicU32 = AtomicU32::new(0);
static NESTED_RUNS: AtomicU32 = AtomicU32::new(0);

struct HighTask;

impl Runnable for HighTask {
    fn run(&self) {
        HIGH_RUNS.fetch_add(1, Ordering::SeqCst);
    }
}

struct LowTask;

impl Runnable for LowTask {
    fn run(&self) {
        LOW_RUNS.fetch_add(1, Ordering::SeqCst);
    }
}

/// Invokes the dispatcher from inside a dispatch pass; the nested tick
/// must be dropped by the reentrancy guard.
struct NestedTick;

impl Runnable for NestedTick {
    fn run(&self) {
        os_dispatch();
        NESTED_RUNS.fetch_add(1, Ordering::SeqCst);
    }
}

static HIGH_TASK: HighTask = HighTask;
static LOW_TASK: LowTask = LowTask;
static NESTED_TICK: NestedTick = NestedTick;

#[test]
fn test_full_lifecycle() {
    // ============ Uninitialized ============

    assert_eq!(os_status(), SchedStatus::Uninitialized);
    assert_eq!(os_start(), Err(SchedError::NotInit));
    assert_eq!(os_stop(), Err(SchedError::NotInit));

    let early = os_task_create(1, 2, &HIGH_TASK, Priority::High, true);
    assert_eq!(os_task_schedule(early), Err(SchedError::NotInit));

    // ============ Initialized, stopped ============

    os_init(&NULL_TIMER, 1).unwrap();
    assert_eq!(os_status(), SchedStatus::Stopped);
    assert_eq!(os_task_count(), 0);

    os_task_schedule(os_task_create(1, 2, &HIGH_TASK, Priority::High, true)).unwrap();
    os_task_schedule(os_task_create(2, 1, &LOW_TASK, Priority::Low, true)).unwrap();
    assert_eq!(os_task_count(), 2);

    // Snapshot visits (id, period) in priority order
    let mut seen = Vec::new();
    os_task_snapshot(|id, period| seen.push((id, period)));
    assert_eq!(seen, vec![(1, 2), (2, 1)]);

    // Ticks while stopped are ignored entirely
    os_dispatch();
    assert_eq!(os_pass_count(), 0);
    assert_eq!(os_task_elapsed(1), Ok(0));

    // ============ Running ============

    os_start().unwrap();
    os_start().unwrap(); // idempotent
    assert_eq!(os_status(), SchedStatus::Running);
    assert_eq!(os_init(&NULL_TIMER, 1), Err(SchedError::Running));

    // Tick 1: only the period-1 task is due
    os_dispatch();
    assert_eq!(HIGH_RUNS.load(Ordering::SeqCst), 0);
    assert_eq!(LOW_RUNS.load(Ordering::SeqCst), 1);
    assert_eq!(os_task_elapsed(1), Ok(1));
    assert_eq!(os_task_elapsed(2), Ok(0));

    // Tick 2: both run; the low-priority task runs last
    os_dispatch();
    assert_eq!(HIGH_RUNS.load(Ordering::SeqCst), 1);
    assert_eq!(LOW_RUNS.load(Ordering::SeqCst), 2);
    assert_eq!(os_current_priority(), Priority::Low);
    assert_eq!(os_pass_count(), 2);

    // ============ Enable / disable ============

    os_task_disable(1).unwrap();
    os_dispatch();
    assert_eq!(HIGH_RUNS.load(Ordering::SeqCst), 1);
    assert_eq!(os_task_elapsed(1), Ok(0)); // frozen where the run left it

    os_task_enable(1).unwrap();
    assert_eq!(os_task_disable(42), Err(SchedError::TaskNotFound));
    assert_eq!(os_task_enable(42), Err(SchedError::TaskNotFound));
    assert_eq!(os_task_elapsed(42), Err(SchedError::TaskNotFound));

    // ============ Reentrancy guard ============

    os_task_schedule(os_task_create(3, 1, &NESTED_TICK, Priority::VeryHigh, true)).unwrap();

    let passes_before = os_pass_count();
    let low_before = LOW_RUNS.load(Ordering::SeqCst);
    os_dispatch();

    // The nested invocation ran zero tasks and counted zero passes
    assert_eq!(NESTED_RUNS.load(Ordering::SeqCst), 1);
    assert_eq!(os_pass_count(), passes_before + 1);
    assert_eq!(LOW_RUNS.load(Ordering::SeqCst), low_before + 1);

    // ============ Unschedule ============

    os_task_unschedule(3).unwrap();
    assert_eq!(os_task_unschedule(3), Err(SchedError::TaskNotFound));
    assert_eq!(os_task_count(), 2);

    os_dispatch();
    assert_eq!(NESTED_RUNS.load(Ordering::SeqCst), 1);

    // ============ Stopped again ============

    os_stop().unwrap();
    os_stop().unwrap(); // idempotent
    assert_eq!(os_status(), SchedStatus::Stopped);

    let low_at_stop = LOW_RUNS.load(Ordering::SeqCst);
    os_dispatch();
    assert_eq!(LOW_RUNS.load(Ordering::SeqCst), low_at_stop);

    // ============ Re-initialize while stopped ============

    os_init(&NULL_TIMER, 5).unwrap();
    assert_eq!(os_task_count(), 0);
    assert_eq!(os_pass_count(), 0);
    assert_eq!(os_status(), SchedStatus::Stopped);
}
