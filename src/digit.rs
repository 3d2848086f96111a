//! Digit renderer
//!
//! Turns a glyph mask and per-segment colors into the 21 wire bytes of one
//! digit.

use crate::color::{OFF, Rgb};
use crate::error::{Error, Result};
use crate::segment::{DIGIT_BYTES, SEGMENT_COUNT};

/// Render one digit
///
/// Lit segments take their color in R, G, B order; unlit segments are
/// written as zeros. Both inputs must hold exactly seven entries.
pub fn render(mask: &[bool], colors: &[Rgb]) -> Result<[u8; DIGIT_BYTES]> {
    if mask.len() != SEGMENT_COUNT || colors.len() != SEGMENT_COUNT {
        return Err(Error::InvalidSegmentCount {
            mask: mask.len(),
            colors: colors.len(),
        });
    }

    let mut bytes = [0; DIGIT_BYTES];
    for ((lit, color), out) in mask.iter().zip(colors).zip(bytes.chunks_exact_mut(3)) {
        let color = if *lit { *color } else { OFF };
        out.copy_from_slice(&[color.r, color.g, color.b]);
    }
    Ok(bytes)
}
