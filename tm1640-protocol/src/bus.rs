//! Bus framing and byte serialization
//!
//! Bit-banged over a [`SignalBackend`], paced by an injected
//! [`DelayNs`] source. Every transaction runs to completion before the call
//! returns; there is no acknowledgement and no failure path.

use embedded_hal::delay::DelayNs;
use tm1640_hal::SignalBackend;

use crate::command::{build_address, Command};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default minimum pulse width in nanoseconds
///
/// The TM1640 needs roughly 400 ns of clock pulse width; 1 us leaves margin
/// for slow edges through an inverting buffer.
pub const DEFAULT_PULSE_NS: u32 = 1_000;

/// Bus timing parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct BusTiming {
    /// Minimum time each line level is held (ns)
    pub pulse_ns: u32,
}

impl Default for BusTiming {
    fn default() -> Self {
        Self {
            pulse_ns: DEFAULT_PULSE_NS,
        }
    }
}

impl BusTiming {
    /// Timing with the given pulse width
    pub const fn with_pulse_ns(pulse_ns: u32) -> Self {
        Self { pulse_ns }
    }
}

/// Write-only TM1640 bus master
pub struct Bus<S, D> {
    backend: S,
    delay: D,
    timing: BusTiming,
}

impl<S: SignalBackend, D: DelayNs> Bus<S, D> {
    /// Create a new bus over a signal backend and delay source
    pub fn new(backend: S, delay: D, timing: BusTiming) -> Self {
        Self {
            backend,
            delay,
            timing,
        }
    }

    /// Current timing
    pub fn timing(&self) -> BusTiming {
        self.timing
    }

    /// Retune the pulse width (e.g. after a core clock change)
    pub fn set_timing(&mut self, timing: BusTiming) {
        self.timing = timing;
    }

    /// Borrow the signal backend
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Mutably borrow the signal backend
    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    /// Release the signal lines and give back the backend and delay
    pub fn into_parts(mut self) -> (S, D) {
        self.backend.release();
        (self.backend, self.delay)
    }

    /// Hold the current line levels for one pulse width
    pub fn delay(&mut self) {
        self.delay.delay_ns(self.timing.pulse_ns);
    }

    /// Start condition: data falls while clock is high
    pub fn start(&mut self) {
        self.backend.data_high();
        self.backend.clock_high();
        self.delay();
        self.backend.data_low();
        self.delay();
        self.backend.clock_low();
        self.delay();
    }

    /// Stop condition: data rises while clock is high
    pub fn stop(&mut self) {
        self.backend.clock_low();
        self.backend.data_low();
        self.delay();
        self.backend.clock_high();
        self.delay();
        self.backend.data_high();
        self.delay();
    }

    /// Shift out one byte, least-significant bit first
    pub fn write_byte(&mut self, byte: u8) {
        let mut data = byte;
        for _ in 0..8 {
            self.backend.clock_low();
            self.delay();
            self.backend.set_data(data & 0x01 != 0);
            self.delay();
            self.backend.clock_high();
            self.delay();
            data >>= 1;
        }
    }

    /// Send a single command in its own start/stop frame
    pub fn send_command(&mut self, command: Command) {
        self.start();
        self.write_byte(command.encode());
        self.stop();
    }

    /// Write data bytes starting at a grid address in one frame
    ///
    /// The address command and all data bytes share a single start/stop
    /// pair. The caller selects the addressing mode beforehand.
    pub fn write_at(&mut self, address: u8, data: &[u8]) {
        self.start();
        self.write_byte(build_address(address));
        for &byte in data {
            self.write_byte(byte);
        }
        self.stop();
    }
}
