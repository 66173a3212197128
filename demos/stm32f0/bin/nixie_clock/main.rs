#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;
use rtt_target::{rprintln, rtt_init_print};

use nixie_clock::WallTime;
use stm32f0_nixie::time_source::HalTimeSource;

mod app_state;
mod button;
mod hardware_setup;

use app_state::AppState;

/// SysTick interrupt handler - called every 1ms
#[cortex_m_rt::exception]
fn SysTick() {
    stm32f0_nixie::time_source::tick();
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== Nixie Clock ===");
    rprintln!("Starting initialization...");

    let hw = hardware_setup::init_hardware();
    rprintln!("Hardware initialized successfully");

    let time_source = HalTimeSource::new();

    // No RTC on this board: start at noon
    let start = WallTime::new(12, 0, 0).unwrap();
    let mut app = AppState::new(hw, &time_source, start);

    rprintln!("=== System Ready ===");
    rprintln!("  A (PC13): temperature / clock, alarm hour; hold: back to clock");
    rprintln!("  B (PA0):  alarm screen, alarm on/off; hold: silence alarm");
    rprintln!("  C (PA1):  12h/24h, alarm minute");

    app.run()
}
