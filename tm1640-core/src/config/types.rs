//! Configuration type definitions
//!
//! With the `serde` feature these deserialize from the firmware's
//! `display.toml`:
//!
//! ```toml
//! [display]
//! line_polarity = "inverted"
//! polarity = "common_anode"
//! brightness = 7
//!
//! [display.timing]
//! pulse_ns = 1000
//! ```

pub use tm1640_hal::LinePolarity;
pub use tm1640_protocol::{BusTiming, DEFAULT_PULSE_NS};

pub use crate::layout::DisplayPolarity;
use crate::state::Brightness;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct DriverConfig {
    /// Direct or inverted-through-buffer signal lines
    pub line_polarity: LinePolarity,
    /// Common-cathode or common-anode digits
    pub polarity: DisplayPolarity,
    /// Bus pulse width
    pub timing: BusTiming,
    /// Brightness applied by `init()`
    pub brightness: Brightness,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            line_polarity: LinePolarity::Direct,
            polarity: DisplayPolarity::CommonCathode,
            timing: BusTiming::default(),
            brightness: Brightness::Level14_16,
        }
    }
}

impl DriverConfig {
    /// Configuration for a board with an inverting line buffer
    pub fn inverted() -> Self {
        Self {
            line_polarity: LinePolarity::Inverted,
            ..Self::default()
        }
    }

    /// Builder-style polarity override
    pub fn with_polarity(mut self, polarity: DisplayPolarity) -> Self {
        self.polarity = polarity;
        self
    }

    /// Builder-style brightness override
    pub fn with_brightness(mut self, brightness: Brightness) -> Self {
        self.brightness = brightness;
        self
    }

    /// Builder-style pulse width override
    pub fn with_pulse_ns(mut self, pulse_ns: u32) -> Self {
        self.timing = BusTiming::with_pulse_ns(pulse_ns);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DriverConfig::default();
        assert_eq!(config.line_polarity, LinePolarity::Direct);
        assert_eq!(config.polarity, DisplayPolarity::CommonCathode);
        assert_eq!(config.timing.pulse_ns, DEFAULT_PULSE_NS);
        assert_eq!(config.brightness, Brightness::Level14_16);
    }

    #[test]
    fn test_builders() {
        let config = DriverConfig::inverted()
            .with_polarity(DisplayPolarity::CommonAnode)
            .with_brightness(Brightness::Level4_16)
            .with_pulse_ns(400);

        assert_eq!(config.line_polarity, LinePolarity::Inverted);
        assert_eq!(config.polarity, DisplayPolarity::CommonAnode);
        assert_eq!(config.brightness, Brightness::Level4_16);
        assert_eq!(config.timing, BusTiming::with_pulse_ns(400));
    }
}
