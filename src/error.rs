use derive_more::derive::{Display, Error};
use embedded_hal::spi::ErrorKind;

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors produced while building or delivering a frame.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The symbol has no seven-segment glyph.
    #[display("no glyph for symbol {_0:?}")]
    UnknownGlyph(#[error(not(source))] char),

    /// A digit was rendered from a mask and a color set of different sizes.
    #[display("segment count mismatch: {mask} mask entries, {colors} colors")]
    InvalidSegmentCount { mask: usize, colors: usize },

    /// The topology does not fit into a frame buffer.
    #[display("topology of {digits} digits and {dots} dots exceeds the frame buffer")]
    TopologyTooLarge { digits: usize, dots: usize },

    /// The clock source could not be read.
    #[display("clock source unavailable")]
    ClockUnavailable,

    /// The transport rejected the frame.
    #[display("frame transmission failed: {_0:?}")]
    TransmissionFault(#[error(not(source))] ErrorKind),
}
