//! Heartbeat demo
//!
//! Two periodic tasks on a Cortex-M target: a half-second heartbeat and a
//! slower watchdog kick, both driven by the SysTick timer source. Builds as
//! an empty stub on the host.

#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]

#[cfg(target_arch = "arm")]
mod demo {
    use cortex_m_rt::entry;
    use portable_atomic::{AtomicU32, Ordering};

    use coopsched::port::SysTickSource;
    use coopsched::{info, os_init, os_start, os_task_create, os_task_schedule, Priority, Runnable};

    // 16 MHz core clock, microsecond tick units
    static TIMER: SysTickSource = SysTickSource::new(16);

    static BEATS: AtomicU32 = AtomicU32::new(0);

    struct Heartbeat;

    impl Runnable for Heartbeat {
        fn run(&self) {
            let n = BEATS.fetch_add(1, Ordering::Relaxed) + 1;
            info!("beat #{}", n);
        }
    }

    struct Watchdog;

    impl Runnable for Watchdog {
        fn run(&self) {
            info!("watchdog kick");
        }
    }

    static HEARTBEAT: Heartbeat = Heartbeat;
    static WATCHDOG: Watchdog = Watchdog;

    #[entry]
    fn main() -> ! {
        // 1 ms timer interrupt
        os_init(&TIMER, 1_000).expect("scheduler init failed");

        os_task_schedule(os_task_create(1, 500_000, &HEARTBEAT, Priority::High, true))
            .expect("heartbeat registration failed");
        os_task_schedule(os_task_create(2, 2_000_000, &WATCHDOG, Priority::Low, true))
            .expect("watchdog registration failed");

        info!("starting scheduler");
        os_start().expect("scheduler start failed");

        loop {
            cortex_m::asm::wfi();
        }
    }
}

#[cfg(not(target_arch = "arm"))]
fn main() {}
