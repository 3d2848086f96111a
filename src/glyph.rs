//! Glyph table
//!
//! Maps displayable symbols to the segments they light. Masks follow the
//! wiring order described in [`crate::segment`].

use crate::error::{Error, Result};
use crate::segment::SegmentMask;

/// Build a glyph table from `symbol => [0/1; 7]` rows
macro_rules! glyph_table {
    ($($symbol:literal => [$($bit:literal),*]),* $(,)?) => {
        [
            $(($symbol, [$($bit != 0),*])),*
        ]
    };
}

/// Mask with every segment off
pub const BLANK: SegmentMask = [false; 7];

/// Digit glyphs, indexed by value
const DIGITS: [SegmentMask; 10] = [
    [false, true, true, true, true, true, true],
    [false, true, false, false, false, false, true],
    [true, true, true, false, true, true, false],
    [true, true, true, false, false, true, true],
    [true, true, false, true, false, false, true],
    [true, false, true, true, false, true, true],
    [true, false, false, true, true, true, true],
    [false, true, true, false, false, false, true],
    [true, true, true, true, true, true, true],
    [true, true, true, true, false, true, true],
];

// Letters and symbols that read well on seven segments
const SYMBOLS: [(char, SegmentMask); 28] = glyph_table![
    'a' => [1, 1, 1, 1, 1, 0, 1],
    'b' => [1, 0, 0, 1, 1, 1, 1],
    'c' => [1, 0, 0, 0, 1, 1, 0],
    'd' => [1, 1, 0, 0, 1, 1, 1],
    'e' => [1, 0, 1, 1, 1, 1, 0],
    'f' => [1, 0, 1, 1, 1, 0, 0],
    'g' => [1, 1, 1, 1, 0, 1, 1],
    'h' => [1, 1, 0, 1, 1, 0, 1],
    'i' => [0, 0, 0, 1, 1, 0, 0],
    'j' => [0, 1, 0, 0, 0, 1, 1],
    'l' => [0, 0, 0, 1, 1, 1, 0],
    'n' => [1, 0, 0, 0, 1, 0, 1],
    'o' => [1, 0, 0, 0, 1, 1, 1],
    'p' => [1, 1, 1, 1, 1, 0, 0],
    'q' => [1, 1, 1, 1, 0, 0, 0],
    'r' => [1, 0, 0, 0, 1, 0, 0],
    's' => [1, 0, 1, 1, 0, 1, 1],
    't' => [1, 0, 0, 1, 1, 1, 0],
    'u' => [0, 0, 0, 0, 1, 1, 1],
    '@' => [1, 1, 1, 1, 1, 1, 0],
    '"' => [0, 1, 0, 1, 0, 0, 0],
    '\'' => [0, 1, 0, 0, 0, 0, 0],
    '[' => [0, 0, 1, 1, 1, 1, 0],
    ']' => [0, 1, 1, 0, 0, 1, 1],
    '|' => [0, 1, 0, 0, 0, 0, 1],
    '-' => [1, 0, 0, 0, 0, 0, 0],
    '_' => [0, 0, 0, 0, 0, 1, 0],
    ' ' => [0, 0, 0, 0, 0, 0, 0],
];

/// Look up the glyph for a digit value
///
/// Fails with [`Error::UnknownGlyph`] for values above 9.
pub fn digit(value: u8) -> Result<SegmentMask> {
    DIGITS
        .get(usize::from(value))
        .copied()
        .ok_or(Error::UnknownGlyph(char::from(b'0'.wrapping_add(value))))
}

/// Look up the glyph for a symbol
///
/// Uppercase ASCII letters resolve to their lowercase glyph.
#[allow(clippy::cast_possible_truncation)]
pub fn lookup(symbol: char) -> Result<SegmentMask> {
    if let Some(value) = symbol.to_digit(10) {
        return digit(value as u8);
    }

    let folded = symbol.to_ascii_lowercase();
    SYMBOLS
        .iter()
        .find(|(candidate, _)| *candidate == folded)
        .map(|(_, mask)| *mask)
        .ok_or(Error::UnknownGlyph(symbol))
}

/// Every symbol the table can display
pub fn symbols() -> impl Iterator<Item = char> {
    ('0'..='9').chain(SYMBOLS.iter().map(|(symbol, _)| *symbol))
}
