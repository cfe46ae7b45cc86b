//! Board-agnostic display model for TM1640 segment displays
//!
//! This crate contains everything about the display that does not touch
//! the bus:
//!
//! - Segment pattern tables (digits, hex, letters)
//! - The 16-byte mirror of device display memory
//! - Display state (on/off, brightness)
//! - Grid layout for common-cathode and common-anode wiring
//! - Text and number rendering into segment bytes
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod layout;
pub mod patterns;
pub mod state;
pub mod text;

pub use buffer::DisplayBuffer;
pub use config::DriverConfig;
pub use layout::DisplayPolarity;
pub use state::{Brightness, DisplayState, InvalidBrightness};
