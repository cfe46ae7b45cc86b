//! Calibrated busy-wait delay
//!
//! For targets without a free-running timer. The loop counter passes
//! through `black_box` on every iteration, so the optimizer cannot collapse
//! the wait.

use embedded_hal::delay::DelayNs;

/// Conservative cost of one loop iteration in core clock cycles
///
/// Underestimating the cost makes the wait longer, never shorter.
pub const CYCLES_PER_ITERATION: u32 = 3;

/// Busy-wait delay calibrated to the core clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpinDelay {
    cycles_per_us: u32,
}

impl SpinDelay {
    /// Create a delay for a core running `cycles_per_us` cycles per microsecond
    pub const fn new(cycles_per_us: u32) -> Self {
        Self {
            cycles_per_us: if cycles_per_us == 0 { 1 } else { cycles_per_us },
        }
    }

    /// Create a delay from the core clock frequency in Hz
    pub const fn from_core_clock_hz(hz: u32) -> Self {
        Self::new(hz.div_ceil(1_000_000))
    }

    /// Calibrated cycles per microsecond
    pub const fn cycles_per_us(&self) -> u32 {
        self.cycles_per_us
    }

    /// Number of loop iterations spent for a wait of `ns` nanoseconds
    pub fn iterations_for(&self, ns: u32) -> u32 {
        let cycles = (ns as u64 * self.cycles_per_us as u64).div_ceil(1000);
        let iterations = cycles.div_ceil(CYCLES_PER_ITERATION as u64);
        iterations.min(u32::MAX as u64) as u32
    }
}

impl DelayNs for SpinDelay {
    fn delay_ns(&mut self, ns: u32) {
        let mut remaining = self.iterations_for(ns);
        while core::hint::black_box(remaining) > 0 {
            remaining -= 1;
            core::hint::spin_loop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_iterations_scale_with_clock() {
        // 125 MHz RP2040: 1 us = 125 cycles = 42 iterations (rounded up)
        let rp2040 = SpinDelay::from_core_clock_hz(125_000_000);
        assert_eq!(rp2040.cycles_per_us(), 125);
        assert_eq!(rp2040.iterations_for(1_000), 42);

        // 48 MHz part needs fewer iterations for the same wait
        let slow = SpinDelay::from_core_clock_hz(48_000_000);
        assert!(slow.iterations_for(1_000) < rp2040.iterations_for(1_000));
    }

    #[test]
    fn test_zero_wait() {
        let mut delay = SpinDelay::new(125);
        assert_eq!(delay.iterations_for(0), 0);
        delay.delay_ns(0);
    }

    #[test]
    fn test_zero_clock_is_clamped() {
        assert_eq!(SpinDelay::new(0).cycles_per_us(), 1);
        assert_eq!(SpinDelay::from_core_clock_hz(0).cycles_per_us(), 1);
    }

    #[test]
    fn test_short_wait_runs() {
        let mut delay = SpinDelay::new(16);
        delay.delay_us(2);
        delay.delay_ns(500);
    }

    proptest! {
        #[test]
        fn nonzero_wait_never_rounds_to_zero(ns in 1u32..1_000_000, mhz in 1u32..500) {
            let delay = SpinDelay::new(mhz);
            prop_assert!(delay.iterations_for(ns) >= 1);
        }

        #[test]
        fn longer_waits_spin_longer(ns in 0u32..1_000_000, extra in 1_000u32..1_000_000) {
            let delay = SpinDelay::new(125);
            prop_assert!(delay.iterations_for(ns + extra) >= delay.iterations_for(ns));
        }
    }
}
