//! Host-side bus simulator
//!
//! [`BusRecorder`] stands in for the board and decodes the waveform the
//! protocol engine drives back into framed transactions, the same way the
//! TM1640 samples it. [`CountingDelay`] records waits instead of spending
//! them.

use embedded_hal::delay::DelayNs;
use tm1640_hal::SignalBackend;

/// Signal backend that decodes start/stop framing and LSB-first bytes
///
/// - Data falling while clock is high opens a frame
/// - Each clock rising edge inside a frame samples one bit
/// - Data rising while clock is high closes the frame
///
/// Bits that do not complete a byte before the stop condition are dropped.
#[derive(Debug, Clone, Default)]
pub struct BusRecorder {
    clk: bool,
    dio: bool,
    in_frame: bool,
    shift: u8,
    bits: u8,
    current: Vec<u8>,
    frames: Vec<Vec<u8>>,
    edges: usize,
    released: bool,
}

impl BusRecorder {
    /// Create a recorder with both lines low
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed transactions, oldest first
    pub fn frames(&self) -> &[Vec<u8>] {
        &self.frames
    }

    /// Remove and return the completed transactions
    pub fn take_frames(&mut self) -> Vec<Vec<u8>> {
        core::mem::take(&mut self.frames)
    }

    /// Number of line transitions seen so far
    pub fn edges(&self) -> usize {
        self.edges
    }

    /// Whether a start condition has been seen without a matching stop
    pub fn in_frame(&self) -> bool {
        self.in_frame
    }

    /// Current logical (clock, data) levels
    pub fn lines(&self) -> (bool, bool) {
        (self.clk, self.dio)
    }

    /// Whether [`SignalBackend::release`] was called
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Forget recorded frames and counters, keep line levels
    pub fn clear(&mut self) {
        self.frames.clear();
        self.current.clear();
        self.in_frame = false;
        self.shift = 0;
        self.bits = 0;
        self.edges = 0;
    }

    fn on_clock(&mut self, high: bool) {
        if high == self.clk {
            return;
        }
        self.edges += 1;
        self.clk = high;

        if high && self.in_frame {
            if self.dio {
                self.shift |= 1 << self.bits;
            }
            self.bits += 1;
            if self.bits == 8 {
                self.current.push(self.shift);
                self.shift = 0;
                self.bits = 0;
            }
        }
    }

    fn on_data(&mut self, high: bool) {
        if high == self.dio {
            return;
        }
        self.edges += 1;
        self.dio = high;

        if !self.clk {
            return;
        }

        if high {
            // Stop condition
            if self.in_frame {
                self.frames.push(core::mem::take(&mut self.current));
                self.in_frame = false;
            }
        } else {
            // Start condition
            self.in_frame = true;
            self.current.clear();
            self.shift = 0;
            self.bits = 0;
        }
    }
}

impl SignalBackend for BusRecorder {
    fn clock_high(&mut self) {
        self.on_clock(true);
    }

    fn clock_low(&mut self) {
        self.on_clock(false);
    }

    fn data_high(&mut self) {
        self.on_data(true);
    }

    fn data_low(&mut self) {
        self.on_data(false);
    }

    fn release(&mut self) {
        self.released = true;
    }
}

/// Delay source that counts requested waits instead of spending them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountingDelay {
    /// Number of `delay_ns` calls
    pub calls: usize,
    /// Sum of all requested nanoseconds
    pub total_ns: u64,
    /// Shortest single wait requested
    pub min_ns: Option<u32>,
}

impl CountingDelay {
    /// Create a delay with zeroed counters
    pub fn new() -> Self {
        Self::default()
    }
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.total_ns += ns as u64;
        self.min_ns = Some(self.min_ns.map_or(ns, |min| min.min(ns)));
    }
}
