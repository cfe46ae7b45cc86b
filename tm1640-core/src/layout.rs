//! Digit position to grid mapping
//!
//! With common-cathode digits each TM1640 grid drives one digit and the
//! segment outputs drive segments A-DP, so position `i` is grid `i`.
//!
//! With common-anode digits the roles swap: digit commons hang off the
//! segment outputs and the segments off the grids. Each bank of 8 grids
//! then holds the transpose of 8 digit patterns:
//!
//! ```text
//! position d, segment s  ──►  grid (bank*8 + s), bit d
//! ```
//!
//! The transpose is its own inverse, so the same routine converts both ways.
//! The wire protocol is identical for both wirings.

use tm1640_protocol::GRID_COUNT;

use crate::patterns::SEGMENT_COUNT;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How digits are wired to the TM1640 outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DisplayPolarity {
    /// Grids drive digit cathodes, segment outputs drive segments
    #[default]
    CommonCathode,
    /// Segment outputs drive digit anodes, grids drive segments
    CommonAnode,
}

impl DisplayPolarity {
    /// Convert digit-position patterns into grid bytes
    pub fn to_grids(self, positions: &[u8; GRID_COUNT]) -> [u8; GRID_COUNT] {
        match self {
            DisplayPolarity::CommonCathode => *positions,
            DisplayPolarity::CommonAnode => transpose_banks(positions),
        }
    }

    /// Convert grid bytes back into digit-position patterns
    pub fn to_positions(self, grids: &[u8; GRID_COUNT]) -> [u8; GRID_COUNT] {
        // Both mappings are involutions
        self.to_grids(grids)
    }
}

/// Transpose each 8x8 bit block (grids 0-7 and 8-15)
fn transpose_banks(input: &[u8; GRID_COUNT]) -> [u8; GRID_COUNT] {
    let mut out = [0u8; GRID_COUNT];
    for bank in (0..GRID_COUNT).step_by(SEGMENT_COUNT) {
        for row in 0..SEGMENT_COUNT {
            let byte = input[bank + row];
            for bit in 0..SEGMENT_COUNT {
                if byte & (1 << bit) != 0 {
                    out[bank + bit] |= 1 << row;
                }
            }
        }
    }
    out
}
