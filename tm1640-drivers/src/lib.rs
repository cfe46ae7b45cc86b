//! TM1640 display driver
//!
//! Composes the bus engine, command encoder and display model into the
//! driver API firmware calls to put digits, hex values and text on a
//! 16-grid segment display.
//!
//! Out-of-range addresses and oversized writes are clamped or ignored by
//! default. The `try_*` methods report them instead.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod error;
pub mod tm1640;

pub use error::Tm1640Error;
pub use tm1640::Tm1640;

pub use tm1640_core::{Brightness, DisplayPolarity, DisplayState, DriverConfig};
pub use tm1640_hal::{LinePolarity, PinBackend, SignalBackend, SpinDelay};
