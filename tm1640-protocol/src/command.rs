//! Command encoding for the TM1640
//!
//! The device understands three command types, distinguished by the top two
//! bits of the first byte after a start condition:
//! - Data command (0b01xx_xxxx): write mode and address increment
//! - Display control (0b10xx_xxxx): on/off and pulse width (brightness)
//! - Address command (0b11xx_xxxx): grid address for the following data bytes

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of addressable grids (GRID1-GRID16)
pub const GRID_COUNT: usize = 16;

/// TM1640 command bits
pub mod cmd {
    /// Data command base
    pub const DATA: u8 = 0x40;
    /// Display control base
    pub const DISPLAY: u8 = 0x80;
    /// Address command base
    pub const ADDRESS: u8 = 0xC0;

    /// Write data to display register (the only mode the TM1640 has)
    pub const DATA_WRITE: u8 = 0x00;
    /// Address increments after each data byte
    pub const DATA_AUTO_INC: u8 = 0x00;
    /// Address stays fixed; resent before each byte
    pub const DATA_FIXED: u8 = 0x04;

    /// Display off
    pub const DISPLAY_OFF: u8 = 0x00;
    /// Display on
    pub const DISPLAY_ON: u8 = 0x08;
    /// Pulse width bits of the display control command
    pub const BRIGHTNESS_MASK: u8 = 0x07;
    /// Grid bits of the address command
    pub const ADDRESS_MASK: u8 = 0x0F;
}

/// Address increment mode selected by the data command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Addressing {
    /// Successive data bytes land on successive grids
    #[default]
    AutoIncrement,
    /// Every data byte needs its own address command
    Fixed,
}

/// A single TM1640 command byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Data command: write mode with the given addressing
    Data { addressing: Addressing },
    /// Display control: on/off plus 3-bit brightness
    DisplayControl { enabled: bool, brightness: u8 },
    /// Address command: grid 0-15
    Address { value: u8 },
}

impl Command {
    /// Encode the command into its wire byte
    pub const fn encode(self) -> u8 {
        match self {
            Command::Data { addressing } => build_data_command(addressing),
            Command::DisplayControl {
                enabled,
                brightness,
            } => build_display_control(enabled, brightness),
            Command::Address { value } => build_address(value),
        }
    }
}

impl From<Command> for u8 {
    fn from(command: Command) -> u8 {
        command.encode()
    }
}

/// Build a data command byte
pub const fn build_data_command(addressing: Addressing) -> u8 {
    let mode = match addressing {
        Addressing::AutoIncrement => cmd::DATA_AUTO_INC,
        Addressing::Fixed => cmd::DATA_FIXED,
    };
    cmd::DATA | cmd::DATA_WRITE | mode
}

/// Build a display control byte
///
/// Brightness is ignored when the display is off, so the byte is the same
/// for every brightness in that case.
pub const fn build_display_control(enabled: bool, brightness: u8) -> u8 {
    if enabled {
        cmd::DISPLAY | cmd::DISPLAY_ON | (brightness & cmd::BRIGHTNESS_MASK)
    } else {
        cmd::DISPLAY | cmd::DISPLAY_OFF
    }
}

/// Build an address command byte for grid `address` (0-15)
pub const fn build_address(address: u8) -> u8 {
    cmd::ADDRESS | (address & cmd::ADDRESS_MASK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_data_command() {
        assert_eq!(build_data_command(Addressing::AutoIncrement), 0x40);
        assert_eq!(build_data_command(Addressing::Fixed), 0x44);
    }

    #[test]
    fn test_display_control() {
        assert_eq!(build_display_control(true, 5), 0x8D);
        assert_eq!(build_display_control(true, 0), 0x88);
        assert_eq!(build_display_control(true, 7), 0x8F);
        // Only the low three bits carry brightness
        assert_eq!(build_display_control(true, 0x0F), 0x8F);
    }

    #[test]
    fn test_address() {
        assert_eq!(build_address(0), 0xC0);
        assert_eq!(build_address(15), 0xCF);
    }

    #[test]
    fn test_command_encode() {
        assert_eq!(
            Command::Data {
                addressing: Addressing::Fixed
            }
            .encode(),
            0x44
        );
        assert_eq!(
            u8::from(Command::DisplayControl {
                enabled: true,
                brightness: 7
            }),
            0x8F
        );
        assert_eq!(Command::Address { value: 3 }.encode(), 0xC3);
    }

    proptest! {
        #[test]
        fn display_off_ignores_brightness(brightness in any::<u8>()) {
            prop_assert_eq!(build_display_control(false, brightness), 0x80);
        }

        #[test]
        fn address_stays_in_address_space(address in any::<u8>()) {
            prop_assert_eq!(build_address(address) & 0xF0, cmd::ADDRESS);
        }
    }
}
