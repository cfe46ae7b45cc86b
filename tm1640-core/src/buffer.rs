//! In-memory mirror of the TM1640 display registers
//!
//! One byte per grid, indexed by grid address. The mirror holds whatever
//! was last set through it; it only matches the device after the driver
//! writes it out.

use tm1640_protocol::GRID_COUNT;

/// 16-byte display memory mirror
///
/// All accessors are bounds-checked and fail silently: reads outside the
/// grid range return 0, writes outside it are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayBuffer {
    grids: [u8; GRID_COUNT],
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayBuffer {
    /// Create a zeroed buffer
    pub const fn new() -> Self {
        Self {
            grids: [0; GRID_COUNT],
        }
    }

    /// Whether `address` names a grid
    pub const fn contains(address: u8) -> bool {
        (address as usize) < GRID_COUNT
    }

    /// Number of bytes a write of `len` bytes at `start` actually covers
    ///
    /// Returns 0 when `start` is outside the grid range.
    pub const fn clamped_len(start: u8, len: usize) -> usize {
        if !Self::contains(start) {
            return 0;
        }
        let room = GRID_COUNT - start as usize;
        if len < room {
            len
        } else {
            room
        }
    }

    /// Segment byte at `address` (0 outside the grid range)
    pub fn get(&self, address: u8) -> u8 {
        self.grids.get(address as usize).copied().unwrap_or(0)
    }

    /// Set the segment byte at `address`
    pub fn set(&mut self, address: u8, data: u8) {
        if let Some(grid) = self.grids.get_mut(address as usize) {
            *grid = data;
        }
    }

    /// Set or clear the bits of `mask` at `address`, leaving other bits alone
    pub fn set_bits(&mut self, address: u8, mask: u8, set: bool) {
        if let Some(grid) = self.grids.get_mut(address as usize) {
            if set {
                *grid |= mask;
            } else {
                *grid &= !mask;
            }
        }
    }

    /// Copy `data` into the grids starting at `start`
    ///
    /// Bytes that would land past the last grid are dropped. Returns the
    /// number of bytes copied.
    pub fn write_slice(&mut self, start: u8, data: &[u8]) -> usize {
        let len = Self::clamped_len(start, data.len());
        let start = start as usize;
        self.grids[start..start + len].copy_from_slice(&data[..len]);
        len
    }

    /// Set every grid to `value`
    pub fn fill(&mut self, value: u8) {
        self.grids.fill(value);
    }

    /// Zero every grid
    pub fn clear(&mut self) {
        self.fill(0);
    }

    /// The whole mirror, grid 0 first
    pub fn as_bytes(&self) -> &[u8; GRID_COUNT] {
        &self.grids
    }

    /// Grids `[start, start + len)`, clamped to the grid range
    pub fn span(&self, start: u8, len: usize) -> &[u8] {
        let len = Self::clamped_len(start, len);
        let start = (start as usize).min(GRID_COUNT);
        &self.grids[start..start + len]
    }
}

impl From<[u8; GRID_COUNT]> for DisplayBuffer {
    fn from(grids: [u8; GRID_COUNT]) -> Self {
        Self { grids }
    }
}
