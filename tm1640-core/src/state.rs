//! Display state: on/off and brightness

use core::fmt;

use tm1640_protocol::Command;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Brightness level (display control pulse width)
///
/// Named after the duty cycle each level selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
#[repr(u8)]
pub enum Brightness {
    /// Pulse width 1/16
    Level1_16 = 0,
    /// Pulse width 2/16
    Level2_16 = 1,
    /// Pulse width 4/16
    Level4_16 = 2,
    /// Pulse width 10/16
    Level10_16 = 3,
    /// Pulse width 11/16
    Level11_16 = 4,
    /// Pulse width 12/16
    Level12_16 = 5,
    /// Pulse width 13/16
    Level13_16 = 6,
    /// Pulse width 14/16
    #[default]
    Level14_16 = 7,
}

impl Brightness {
    /// All levels, dimmest first
    pub const ALL: [Brightness; 8] = [
        Brightness::Level1_16,
        Brightness::Level2_16,
        Brightness::Level4_16,
        Brightness::Level10_16,
        Brightness::Level11_16,
        Brightness::Level12_16,
        Brightness::Level13_16,
        Brightness::Level14_16,
    ];

    /// Brightness from the low three bits of `bits`
    pub const fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & 0x07) as usize]
    }

    /// The 3-bit level carried in the display control command
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Next brighter level, wrapping to the dimmest
    pub const fn next(self) -> Self {
        Self::from_bits(self.bits().wrapping_add(1))
    }
}

/// Brightness value outside 0-7
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidBrightness(pub u8);

impl fmt::Display for InvalidBrightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "brightness {} out of range (0-7)", self.0)
    }
}

impl TryFrom<u8> for Brightness {
    type Error = InvalidBrightness;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 7 {
            return Err(InvalidBrightness(value));
        }
        Ok(Self::from_bits(value))
    }
}

impl From<Brightness> for u8 {
    fn from(brightness: Brightness) -> u8 {
        brightness.bits()
    }
}

/// On/off and brightness as last sent to the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayState {
    /// Display output enabled
    pub enabled: bool,
    /// Brightness (kept while the display is off)
    pub brightness: Brightness,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            enabled: false,
            brightness: Brightness::default(),
        }
    }
}

impl DisplayState {
    /// The display control command reflecting this state
    pub const fn command(&self) -> Command {
        Command::DisplayControl {
            enabled: self.enabled,
            brightness: self.brightness.bits(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = DisplayState::default();
        assert!(!state.enabled);
        assert_eq!(state.brightness, Brightness::Level14_16);
    }

    #[test]
    fn test_from_bits_masks() {
        assert_eq!(Brightness::from_bits(5), Brightness::Level12_16);
        assert_eq!(Brightness::from_bits(0x0D), Brightness::Level12_16);
        for (i, level) in Brightness::ALL.iter().enumerate() {
            assert_eq!(level.bits() as usize, i);
        }
    }

    #[test]
    fn test_try_from() {
        assert_eq!(Brightness::try_from(0), Ok(Brightness::Level1_16));
        assert_eq!(Brightness::try_from(7), Ok(Brightness::Level14_16));
        assert_eq!(Brightness::try_from(8), Err(InvalidBrightness(8)));
        assert_eq!(u8::from(Brightness::Level4_16), 2);
    }

    #[test]
    fn test_next_wraps() {
        assert_eq!(Brightness::Level1_16.next(), Brightness::Level2_16);
        assert_eq!(Brightness::Level14_16.next(), Brightness::Level1_16);
    }

    #[test]
    fn test_state_command() {
        let on = DisplayState {
            enabled: true,
            brightness: Brightness::Level12_16,
        };
        assert_eq!(on.command().encode(), 0x8D);

        let off = DisplayState {
            enabled: false,
            brightness: Brightness::Level12_16,
        };
        assert_eq!(off.command().encode(), 0x80);
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            InvalidBrightness(9).to_string(),
            "brightness 9 out of range (0-7)"
        );
    }
}
