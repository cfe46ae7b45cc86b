//! TM1640 Bus Protocol
//!
//! The TM1640 listens on a two-wire, write-only serial bus that looks like
//! I2C without addresses or acknowledgements. The MCU emulates it in
//! software by toggling two output lines.
//!
//! # Protocol Overview
//!
//! ```text
//!        start          bit 0 (LSB)   bit 1    ...   bit 7         stop
//! CLK ‾‾‾‾‾‾‾‾‾‾\_____/‾‾‾‾‾‾\_____/‾‾‾‾‾‾\ ... _____/‾‾‾‾‾‾\_____/‾‾‾‾‾‾‾‾‾‾
//! DIN ‾‾‾‾‾\________X  b0   X    b1   X     ...   b7   X______/‾‾‾‾‾‾‾‾‾‾‾
//! ```
//!
//! - Start: data falls while clock is high
//! - Stop: data rises while clock is high
//! - Data is sampled on the rising clock edge, least-significant bit first
//!
//! Every single-byte command is framed on its own. Address + data bytes
//! share one start/stop pair.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

pub mod bus;
pub mod command;
#[cfg(any(test, feature = "std"))]
pub mod sim;

pub use bus::{Bus, BusTiming, DEFAULT_PULSE_NS};
pub use command::{
    build_address, build_data_command, build_display_control, Addressing, Command, GRID_COUNT,
};
