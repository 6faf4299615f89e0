//! SysTick-backed timer source for Cortex-M targets

use cortex_m::peripheral::syst::SystClkSource;

use crate::port::TimerSource;
use crate::types::Tick;

/// SysTick reload register width
const SYST_RELOAD_MAX: u32 = 0x00FF_FFFF;

/// Timer source driven by the Cortex-M SysTick peripheral.
///
/// `cycles_per_unit` is the number of core clock cycles per tick-time
/// unit; a 16 MHz core with microsecond units uses 16. The product of
/// `cycles_per_unit` and the armed interval must fit the 24-bit SysTick
/// reload register; larger values are clamped.
pub struct SysTickSource {
    cycles_per_unit: u32,
}

impl SysTickSource {
    pub const fn new(cycles_per_unit: u32) -> Self {
        SysTickSource { cycles_per_unit }
    }
}

impl TimerSource for SysTickSource {
    fn arm(&self, interval: Tick) {
        let reload = self
            .cycles_per_unit
            .saturating_mul(interval)
            .saturating_sub(1)
            .min(SYST_RELOAD_MAX);

        let mut p = unsafe { cortex_m::Peripherals::steal() };
        p.SYST.set_reload(reload);
        p.SYST.clear_current();
        p.SYST.set_clock_source(SystClkSource::Core);
    }

    fn start(&self) {
        let mut p = unsafe { cortex_m::Peripherals::steal() };
        p.SYST.enable_interrupt();
        p.SYST.enable_counter();
    }

    fn stop(&self) {
        let mut p = unsafe { cortex_m::Peripherals::steal() };
        p.SYST.disable_counter();
        p.SYST.disable_interrupt();
    }
}

/// SysTick interrupt handler - each tick drives one dispatch pass
#[no_mangle]
pub extern "C" fn SysTick() {
    crate::sched::os_dispatch();
}
