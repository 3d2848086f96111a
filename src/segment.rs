//! Segment ring of a single digit
//!
//! Segments are chained through each digit in a fixed ring order, which is
//! also the order their colors appear on the wire:
//!
//! ```text
//!   ---2---   ---2---
//!  |       | |
//!  3       1 3
//!  |       | |
//!   ---0---   ---0---  ...
//!  |       | |
//!  4       6 4
//!  |       | |
//!   ---5---   ---5---
//! ```

/// Number of segments in one digit.
pub const SEGMENT_COUNT: usize = 7;

/// Number of bytes one digit occupies in a frame.
pub const DIGIT_BYTES: usize = SEGMENT_COUNT * 3;

/// Lit/unlit state of each segment, indexed by wiring position.
pub type SegmentMask = [bool; SEGMENT_COUNT];

/// Segment position in wiring order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Segment {
    Middle = 0,
    UpperRight = 1,
    Top = 2,
    UpperLeft = 3,
    LowerLeft = 4,
    Bottom = 5,
    LowerRight = 6,
}

/// How close a segment sits to each corner of the digit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerWeights {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_left: f32,
    pub bottom_right: f32,
}

const fn weights(
    top_left: f32,
    top_right: f32,
    bottom_left: f32,
    bottom_right: f32,
) -> CornerWeights {
    CornerWeights {
        top_left,
        top_right,
        bottom_left,
        bottom_right,
    }
}

const PROXIMITY: [CornerWeights; SEGMENT_COUNT] = [
    weights(0.25, 0.25, 0.25, 0.25),
    weights(0.0, 1.0, 0.0, 0.0),
    weights(0.5, 0.5, 0.0, 0.0),
    weights(1.0, 0.0, 0.0, 0.0),
    weights(0.0, 0.0, 1.0, 0.0),
    weights(0.0, 0.0, 0.5, 0.5),
    weights(0.0, 0.0, 0.0, 1.0),
];

impl Segment {
    /// All segments in wiring order
    pub const ALL: [Self; SEGMENT_COUNT] = [
        Self::Middle,
        Self::UpperRight,
        Self::Top,
        Self::UpperLeft,
        Self::LowerLeft,
        Self::Bottom,
        Self::LowerRight,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Corner proximity of the segment.
    pub const fn proximity(self) -> CornerWeights {
        PROXIMITY[self as usize]
    }
}

impl CornerWeights {
    pub const fn total(self) -> f32 {
        self.top_left + self.top_right + self.bottom_left + self.bottom_right
    }
}
