//! Signal backend over RP2040 flex pins
//!
//! Unlike `PinBackend`, releasing the bus switches both GPIOs to inputs so
//! the board's pull-ups own the lines after `deinit()`.

use embassy_rp::gpio::{Flex, Level};
use tm1640_hal::{LinePolarity, SignalBackend};

/// Clock and data lines on two RP2040 GPIOs
pub struct FlexBackend<'d> {
    clk: Flex<'d>,
    dio: Flex<'d>,
    polarity: LinePolarity,
}

impl<'d> FlexBackend<'d> {
    /// Drive both lines to logical high, then enable the outputs
    pub fn new(mut clk: Flex<'d>, mut dio: Flex<'d>, polarity: LinePolarity) -> Self {
        let idle = level(polarity, true);
        clk.set_level(idle);
        dio.set_level(idle);
        clk.set_as_output();
        dio.set_as_output();

        Self { clk, dio, polarity }
    }
}

fn level(polarity: LinePolarity, logical_high: bool) -> Level {
    if polarity.pin_level(logical_high) {
        Level::High
    } else {
        Level::Low
    }
}

impl SignalBackend for FlexBackend<'_> {
    fn clock_high(&mut self) {
        self.clk.set_level(level(self.polarity, true));
    }

    fn clock_low(&mut self) {
        self.clk.set_level(level(self.polarity, false));
    }

    fn data_high(&mut self) {
        self.dio.set_level(level(self.polarity, true));
    }

    fn data_low(&mut self) {
        self.dio.set_level(level(self.polarity, false));
    }

    fn release(&mut self) {
        self.clk.set_as_input();
        self.dio.set_as_input();
    }
}
