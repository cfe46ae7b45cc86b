//! Segment pattern tables
//!
//! Bit 0 is segment A, bit 6 segment G, bit 7 the decimal point:
//!
//! ```text
//!    -A-
//!   F   B
//!    -G-
//!   E   C
//!    -D-  .DP
//! ```
//!
//! Lookups never fail: out-of-range input is clamped or rendered blank.

/// Segment A (top)
pub const SEG_A: u8 = 0x01;
/// Segment B (top right)
pub const SEG_B: u8 = 0x02;
/// Segment C (bottom right)
pub const SEG_C: u8 = 0x04;
/// Segment D (bottom)
pub const SEG_D: u8 = 0x08;
/// Segment E (bottom left)
pub const SEG_E: u8 = 0x10;
/// Segment F (top left)
pub const SEG_F: u8 = 0x20;
/// Segment G (middle)
pub const SEG_G: u8 = 0x40;
/// Decimal point
pub const SEG_DP: u8 = 0x80;

/// Number of segment outputs per grid (SEG1-SEG8)
pub const SEGMENT_COUNT: usize = 8;

/// All segments off
pub const BLANK: u8 = 0x00;

/// All segments and the decimal point on
pub const ALL_ON: u8 = 0xFF;

/// Digits 0-9
const DIGITS: [u8; 10] = [
    0x3F, // 0: a,b,c,d,e,f
    0x06, // 1: b,c
    0x5B, // 2: a,b,d,e,g
    0x4F, // 3: a,b,c,d,g
    0x66, // 4: b,c,f,g
    0x6D, // 5: a,c,d,f,g
    0x7D, // 6: a,c,d,e,f,g
    0x07, // 7: a,b,c
    0x7F, // 8: a,b,c,d,e,f,g
    0x6F, // 9: a,b,c,d,f,g
];

/// Hex letters A-F (A, b, C, d, E, F)
const HEX_LETTERS: [u8; 6] = [0x77, 0x7C, 0x39, 0x5E, 0x79, 0x71];

/// Letters A-Z
///
/// U, V and W share one glyph; the table carries them as they shipped.
const LETTERS: [u8; 26] = [
    0x77, 0x7C, 0x39, 0x5E, 0x79, 0x71, 0x3D, 0x76, // A-H
    0x06, 0x1E, 0x76, 0x38, 0x37, 0x54, 0x3F, 0x73, // I-P
    0x67, 0x50, 0x6D, 0x78, 0x3E, 0x3E, 0x3E, 0x76, // Q-X
    0x6E, 0x5B, // Y-Z
];

/// Segment pattern for a decimal digit; values above 9 show 9
pub const fn digit_pattern(digit: u8) -> u8 {
    let digit = if digit > 9 { 9 } else { digit };
    DIGITS[digit as usize]
}

/// Segment pattern for a hex nibble; values above 15 are blank
pub const fn hex_pattern(nibble: u8) -> u8 {
    match nibble {
        0..=9 => DIGITS[nibble as usize],
        10..=15 => HEX_LETTERS[(nibble - 10) as usize],
        _ => BLANK,
    }
}

/// Segment pattern for a character
///
/// Digits and letters (either case) map through the tables, `-` lights
/// segment G, `_` lights segment D, anything else is blank.
pub const fn char_pattern(ch: char) -> u8 {
    match ch {
        '0'..='9' => DIGITS[(ch as u8 - b'0') as usize],
        'A'..='Z' => LETTERS[(ch as u8 - b'A') as usize],
        'a'..='z' => LETTERS[(ch as u8 - b'a') as usize],
        '-' => SEG_G,
        '_' => SEG_D,
        _ => BLANK,
    }
}
