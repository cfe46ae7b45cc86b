//! Build-time display configuration
//!
//! `build.rs` validates display.toml and turns it into `DRIVER_CONFIG`
//! plus the `clock_pin!` and `data_pin!` macros.

use tm1640_core::config::{BusTiming, DisplayPolarity, DriverConfig, LinePolarity};
use tm1640_core::Brightness;

include!(concat!(env!("OUT_DIR"), "/config.rs"));
