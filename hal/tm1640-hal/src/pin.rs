//! `embedded-hal` pin adapter
//!
//! Drives the bus through any two push-pull output pins. Wiring inversion
//! (e.g. a ULN2003 between MCU and TM1640) is applied here, so the protocol
//! engine always speaks logical levels.

use embedded_hal::digital::OutputPin;

use crate::signal::{LinePolarity, SignalBackend};

/// Signal backend over two `embedded-hal` output pins
pub struct PinBackend<CLK, DIO> {
    clk: CLK,
    dio: DIO,
    polarity: LinePolarity,
}

impl<CLK: OutputPin, DIO: OutputPin> PinBackend<CLK, DIO> {
    /// Create a new backend and park both lines at the idle (high) level
    ///
    /// # Arguments
    /// - `clk`: Pin wired to the TM1640 CLK input
    /// - `dio`: Pin wired to the TM1640 DIN input
    /// - `polarity`: Whether the lines pass through an inverting buffer
    pub fn new(clk: CLK, dio: DIO, polarity: LinePolarity) -> Self {
        let mut backend = Self { clk, dio, polarity };
        backend.clock_high();
        backend.data_high();
        backend
    }

    /// Create a backend for pins wired straight to the TM1640
    pub fn direct(clk: CLK, dio: DIO) -> Self {
        Self::new(clk, dio, LinePolarity::Direct)
    }

    /// Create a backend for pins driving the TM1640 through an inverter
    pub fn inverted(clk: CLK, dio: DIO) -> Self {
        Self::new(clk, dio, LinePolarity::Inverted)
    }

    /// Configured line polarity
    pub fn polarity(&self) -> LinePolarity {
        self.polarity
    }

    /// Give the pins back so the caller can reconfigure them
    pub fn into_pins(self) -> (CLK, DIO) {
        (self.clk, self.dio)
    }

    // The bus is open-loop: a failed pin write has nowhere to be reported.
    fn drive<P: OutputPin>(pin: &mut P, polarity: LinePolarity, logical_high: bool) {
        let _ = if polarity.pin_level(logical_high) {
            pin.set_high()
        } else {
            pin.set_low()
        };
    }
}

impl<CLK: OutputPin, DIO: OutputPin> SignalBackend for PinBackend<CLK, DIO> {
    fn clock_high(&mut self) {
        Self::drive(&mut self.clk, self.polarity, true);
    }

    fn clock_low(&mut self) {
        Self::drive(&mut self.clk, self.polarity, false);
    }

    fn data_high(&mut self) {
        Self::drive(&mut self.dio, self.polarity, true);
    }

    fn data_low(&mut self) {
        Self::drive(&mut self.dio, self.polarity, false);
    }

    /// Output pins cannot become inputs through `embedded-hal`, so both
    /// lines are parked at the idle level. Use [`PinBackend::into_pins`] to
    /// reconfigure them afterwards.
    fn release(&mut self) {
        self.clock_high();
        self.data_high();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
        writes: usize,
    }

    impl MockPin {
        fn new() -> Self {
            Self {
                high: false,
                writes: 0,
            }
        }
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            self.writes += 1;
            Ok(())
        }

        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_direct_levels() {
        let mut backend = PinBackend::direct(MockPin::new(), MockPin::new());

        // Idle high after construction
        assert!(backend.clk.high);
        assert!(backend.dio.high);

        backend.clock_low();
        backend.data_low();
        assert!(!backend.clk.high);
        assert!(!backend.dio.high);

        backend.set_data(true);
        assert!(backend.dio.high);
    }

    #[test]
    fn test_inverted_levels() {
        let mut backend = PinBackend::inverted(MockPin::new(), MockPin::new());

        // Logical idle high means physical low through the inverter
        assert!(!backend.clk.high);
        assert!(!backend.dio.high);

        backend.clock_low();
        backend.data_low();
        assert!(backend.clk.high);
        assert!(backend.dio.high);

        backend.data_high();
        assert!(!backend.dio.high);
        assert_eq!(backend.polarity(), LinePolarity::Inverted);
    }

    #[test]
    fn test_release_parks_idle() {
        let mut backend = PinBackend::direct(MockPin::new(), MockPin::new());
        backend.clock_low();
        backend.data_low();

        backend.release();

        let (clk, dio) = backend.into_pins();
        assert!(clk.high);
        assert!(dio.high);
        assert_eq!(clk.writes, 3);
        assert_eq!(dio.writes, 3);
    }
}
