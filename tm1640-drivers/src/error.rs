//! Strict-mode errors
//!
//! Only the `try_*` driver methods return these. A rejected call changes
//! nothing in the buffer and sends nothing on the bus.

/// Boundary violations reported by strict-mode driver methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tm1640Error {
    /// Grid address is 16 or above
    AddressOutOfRange { address: u8 },
    /// Array write would run past the last grid
    Truncated {
        /// First grid of the write
        start: u8,
        /// Bytes the caller passed
        requested: usize,
        /// Grids available from `start` onwards
        available: usize,
    },
}
