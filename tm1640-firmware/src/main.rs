//! TM1640 display demo firmware
//!
//! Drives a 16-digit TM1640 board from an RP2040. Wiring, brightness and
//! bus timing come from display.toml at build time.
//!
//! Sequence: lamp test, "HELLO", then a decimal counter on digits 0-7 and
//! the same value in hex on digits 8-15, stepping brightness every 8 counts.

#![no_std]
#![no_main]

use defmt::{debug, info};
use embassy_executor::Spawner;
use embassy_rp::gpio::Flex;
use embassy_time::{Duration, Ticker, Timer};
use {defmt_rtt as _, panic_probe as _};

use tm1640_drivers::{SpinDelay, Tm1640};

#[macro_use]
mod config;
mod backend;

use crate::backend::FlexBackend;
use crate::config::{CLOCK_GPIO, DATA_GPIO, DRIVER_CONFIG};

/// Counter update interval
const COUNT_INTERVAL_MS: u64 = 1000;

/// Counts between brightness steps
const BRIGHTNESS_STEP_EVERY: u32 = 8;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("TM1640 demo starting...");

    let p = embassy_rp::init(Default::default());

    let clk = Flex::new(clock_pin!(p));
    let dio = Flex::new(data_pin!(p));
    let backend = FlexBackend::new(clk, dio, DRIVER_CONFIG.line_polarity);
    let delay = SpinDelay::from_core_clock_hz(embassy_rp::clocks::clk_sys_freq());
    info!(
        "Display on gpio{} (clk) / gpio{} (dio), {} ns pulses",
        CLOCK_GPIO, DATA_GPIO, DRIVER_CONFIG.timing.pulse_ns
    );

    let mut display = Tm1640::new(backend, delay, DRIVER_CONFIG);
    display.init();

    display.test();
    Timer::after(Duration::from_secs(1)).await;

    display.clear();
    display.display_text(0, "HELLO");
    Timer::after(Duration::from_secs(2)).await;

    display.clear();
    let mut ticker = Ticker::every(Duration::from_millis(COUNT_INTERVAL_MS));
    let mut count: u32 = 0;

    loop {
        display.display_decimal(0, 8, count as i32);
        display.display_hex(8, 8, count);

        if count > 0 && count % BRIGHTNESS_STEP_EVERY == 0 {
            let brightness = display.brightness().next();
            display.set_brightness(brightness);
            debug!("Brightness {}", brightness);
        }

        ticker.next().await;
        count = count.wrapping_add(1) % 100_000_000;
    }
}

