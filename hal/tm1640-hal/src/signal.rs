//! Signal line abstractions
//!
//! Provides the trait the bus protocol uses to drive the clock and data
//! lines. Levels are always *logical*: wiring inversion is handled by the
//! implementation, never by the protocol engine.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Two-line output capability (clock + data)
///
/// Implementations handle the actual pin manipulation for the board. The
/// bus is write-only, so there is no way to read a line back.
pub trait SignalBackend {
    /// Drive the clock line to logical high
    fn clock_high(&mut self);

    /// Drive the clock line to logical low
    fn clock_low(&mut self);

    /// Drive the data line to logical high
    fn data_high(&mut self);

    /// Drive the data line to logical low
    fn data_low(&mut self);

    /// Drive the data line to a specific logical level
    fn set_data(&mut self, high: bool) {
        if high {
            self.data_high();
        } else {
            self.data_low();
        }
    }

    /// Return both lines to an inert state
    ///
    /// Called once when the driver is torn down. Backends that can switch
    /// their pins to inputs should do so here.
    fn release(&mut self) {}
}

/// How the logical bus level maps onto the physical pin level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LinePolarity {
    /// Pins connect straight to the TM1640 (logical high = pin high)
    #[default]
    Direct,
    /// Signals pass through an inverting buffer such as a ULN2003
    /// (logical high = pin low)
    Inverted,
}

impl LinePolarity {
    /// Physical pin level for a logical bus level
    pub const fn pin_level(self, logical_high: bool) -> bool {
        match self {
            LinePolarity::Direct => logical_high,
            LinePolarity::Inverted => !logical_high,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Lines {
        clk: bool,
        dio: bool,
    }

    impl SignalBackend for Lines {
        fn clock_high(&mut self) {
            self.clk = true;
        }

        fn clock_low(&mut self) {
            self.clk = false;
        }

        fn data_high(&mut self) {
            self.dio = true;
        }

        fn data_low(&mut self) {
            self.dio = false;
        }
    }

    #[test]
    fn test_set_data_dispatches() {
        let mut lines = Lines {
            clk: false,
            dio: false,
        };

        lines.set_data(true);
        assert!(lines.dio);
        lines.set_data(false);
        assert!(!lines.dio);
        assert!(!lines.clk);
    }

    #[test]
    fn test_default_release_is_noop() {
        let mut lines = Lines {
            clk: true,
            dio: true,
        };
        lines.release();
        assert!(lines.clk && lines.dio);
    }

    #[test]
    fn test_pin_level() {
        assert!(LinePolarity::Direct.pin_level(true));
        assert!(!LinePolarity::Direct.pin_level(false));
        assert!(!LinePolarity::Inverted.pin_level(true));
        assert!(LinePolarity::Inverted.pin_level(false));
        assert_eq!(LinePolarity::default(), LinePolarity::Direct);
    }
}
