//! Configuration types
//!
//! Startup-time driver settings. None of them change the wire protocol.

pub mod types;

pub use types::*;
