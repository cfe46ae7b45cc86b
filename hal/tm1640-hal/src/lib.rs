//! Signal-line abstraction layer for the TM1640 bus
//!
//! The TM1640 is driven over two plain output lines (CLK and DIN). This
//! crate defines the capability the protocol engine needs from the board,
//! so the same bus code runs against real pins, inverting line buffers,
//! or a host-side simulator.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  tm1640-drivers (display driver)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tm1640-protocol (framing, commands)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tm1640-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  PinBackend   │       │  BusRecorder  │
//! │ (embedded-hal)│       │   (host sim)  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Contents
//!
//! - [`SignalBackend`] - the two-line output capability
//! - [`LinePolarity`] - direct or inverted-through-buffer wiring
//! - [`PinBackend`] - adapter over `embedded-hal` output pins
//! - [`SpinDelay`] - calibrated busy-wait implementing `DelayNs`

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod delay;
pub mod pin;
pub mod signal;

// Re-export key types at crate root for convenience
pub use delay::SpinDelay;
pub use pin::PinBackend;
pub use signal::{LinePolarity, SignalBackend};
