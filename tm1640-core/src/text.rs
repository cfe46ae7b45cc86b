//! Text and number rendering
//!
//! Renders into a caller-supplied slice of digit positions (one segment byte
//! per position). Nothing here touches the bus; the driver maps positions to
//! grids and writes them out.

use crate::patterns::{char_pattern, digit_pattern, hex_pattern, BLANK, SEG_DP, SEG_G};

/// Render a string, one character per position
///
/// A `.` following a glyph lights that glyph's decimal point instead of
/// taking a position of its own. Rendering stops when `out` is full.
/// Returns the number of positions written.
pub fn render_text(out: &mut [u8], text: &str) -> usize {
    let mut written = 0;
    // Whether the previous glyph can still take a decimal point
    let mut dot_free = false;

    for ch in text.chars() {
        if ch == '.' && dot_free {
            out[written - 1] |= SEG_DP;
            dot_free = false;
            continue;
        }
        if written == out.len() {
            break;
        }
        out[written] = if ch == '.' { SEG_DP } else { char_pattern(ch) };
        written += 1;
        dot_free = ch != '.';
    }

    written
}

/// Render a signed integer right-aligned, blank-padded
///
/// Negative values get a leading `-`. A value too wide for `out` shows
/// `-` on every position.
pub fn render_decimal(out: &mut [u8], value: i32) {
    let mut digits = [0u8; 10];
    let mut count = 0;
    let mut magnitude = value.unsigned_abs();
    loop {
        digits[count] = (magnitude % 10) as u8;
        count += 1;
        magnitude /= 10;
        if magnitude == 0 {
            break;
        }
    }

    let negative = value < 0;
    let needed = count + negative as usize;
    if needed > out.len() {
        out.fill(SEG_G);
        return;
    }

    out.fill(BLANK);
    let len = out.len();
    for (i, &digit) in digits[..count].iter().enumerate() {
        out[len - 1 - i] = digit_pattern(digit);
    }
    if negative {
        out[len - needed] = SEG_G;
    }
}

/// Render an unsigned value in hex, right-aligned, blank-padded
///
/// When the value needs more nibbles than there are positions, the least
/// significant nibbles are shown.
pub fn render_hex(out: &mut [u8], value: u32) {
    let needed = if value == 0 {
        1
    } else {
        (32 - value.leading_zeros() as usize).div_ceil(4)
    };

    out.fill(BLANK);
    let len = out.len();
    for i in 0..needed.min(len) {
        let nibble = ((value >> (4 * i)) & 0x0F) as u8;
        out[len - 1 - i] = hex_pattern(nibble);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_render_text() {
        let mut out = [0u8; 8];
        let n = render_text(&mut out, "HELLO");
        assert_eq!(n, 5);
        assert_eq!(&out[..5], &[0x76, 0x79, 0x38, 0x38, 0x3F]);
        assert_eq!(&out[5..], &[0, 0, 0]);
    }

    #[test]
    fn test_render_text_decimal_points() {
        let mut out = [0u8; 4];
        let n = render_text(&mut out, "1.2");
        assert_eq!(n, 2);
        assert_eq!(&out[..2], &[0x06 | SEG_DP, 0x5B]);

        // Leading dot and double dot take their own position
        let mut out = [0u8; 4];
        let n = render_text(&mut out, ".5..");
        assert_eq!(n, 3);
        assert_eq!(&out[..3], &[SEG_DP, 0x6D | SEG_DP, SEG_DP]);
    }

    #[test]
    fn test_render_text_truncates() {
        let mut out = [0u8; 3];
        let n = render_text(&mut out, "12.5.6");
        assert_eq!(n, 3);
        assert_eq!(out, [0x06, 0x5B | SEG_DP, 0x6D | SEG_DP]);
    }

    #[test]
    fn test_render_decimal() {
        let mut out = [0xFFu8; 4];
        render_decimal(&mut out, -42);
        assert_eq!(out, [BLANK, SEG_G, 0x66, 0x5B]);

        render_decimal(&mut out, 0);
        assert_eq!(out, [BLANK, BLANK, BLANK, 0x3F]);

        render_decimal(&mut out, 1234);
        assert_eq!(out, [0x06, 0x5B, 0x4F, 0x66]);
    }

    #[test]
    fn test_render_decimal_overflow() {
        let mut out = [0u8; 4];
        render_decimal(&mut out, 12345);
        assert_eq!(out, [SEG_G; 4]);

        render_decimal(&mut out, -1234);
        assert_eq!(out, [SEG_G; 4]);

        let mut wide = [0u8; 11];
        render_decimal(&mut wide, i32::MIN);
        assert_eq!(wide[0], SEG_G);
        assert_eq!(wide[1], digit_pattern(2));
    }

    #[test]
    fn test_render_hex() {
        let mut out = [0u8; 4];
        render_hex(&mut out, 0xBEEF);
        assert_eq!(out, [0x7C, 0x79, 0x79, 0x71]);

        render_hex(&mut out, 0x1F);
        assert_eq!(out, [BLANK, BLANK, 0x06, 0x71]);

        render_hex(&mut out, 0);
        assert_eq!(out, [BLANK, BLANK, BLANK, 0x3F]);

        // Only the low nibbles fit
        render_hex(&mut out, 0x12345);
        assert_eq!(out, [0x5B, 0x4F, 0x66, 0x6D]);
    }

    proptest! {
        #[test]
        fn decimal_fills_every_position(value in any::<i32>(), width in 0usize..12) {
            let mut out = [0xAAu8; 12];
            render_decimal(&mut out[..width], value);
            prop_assert!(out[..width].iter().all(|&b| b != 0xAA));
            prop_assert!(out[width..].iter().all(|&b| b == 0xAA));
        }

        #[test]
        fn text_never_writes_past_output(text in ".{0,24}", width in 0usize..8) {
            let mut out = [0u8; 8];
            let n = render_text(&mut out[..width], &text);
            prop_assert!(n <= width);
            prop_assert!(out[width..].iter().all(|&b| b == 0));
        }
    }
}
