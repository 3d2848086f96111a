//! Frame assembly
//!
//! A frame is the complete byte payload for one tick: every digit's seven
//! segments followed by the separator dots, three bytes each, in wiring
//! order. Brightness is applied last, to the whole payload.

use heapless::Vec;

use crate::color::{ColorWave, DOT_LIT, OFF, Rgb};
use crate::digit;
use crate::error::{Error, Result};
use crate::filter::DayNightBrightness;
use crate::glyph::{self, BLANK};
use crate::phase::ScrollPhase;
use crate::segment::{DIGIT_BYTES, SEGMENT_COUNT, SegmentMask};
use crate::time::{BlinkRule, TimeOfDay};

/// Largest supported digit count.
pub const MAX_DIGITS: usize = 8;

/// Largest supported separator-dot count.
pub const MAX_DOTS: usize = 8;

/// Size of the frame buffer.
pub const MAX_FRAME_BYTES: usize = MAX_DIGITS * DIGIT_BYTES + MAX_DOTS * 3;

/// Frame payload
pub type Frame = Vec<u8, MAX_FRAME_BYTES>;

/// Number of digits and dots on the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topology {
    digits: usize,
    dots: usize,
}

/// Six-digit `HH:MM:SS` clock with four separator dots
pub const CLOCK_TOPOLOGY: Topology = Topology { digits: 6, dots: 4 };

impl Default for Topology {
    fn default() -> Self {
        CLOCK_TOPOLOGY
    }
}

impl Topology {
    pub const fn new(digits: usize, dots: usize) -> Result<Self> {
        if digits > MAX_DIGITS || dots > MAX_DOTS {
            return Err(Error::TopologyTooLarge { digits, dots });
        }
        Ok(Self { digits, dots })
    }

    pub const fn digits(self) -> usize {
        self.digits
    }

    pub const fn dots(self) -> usize {
        self.dots
    }

    /// Byte length of every frame for this topology
    pub const fn frame_len(self) -> usize {
        self.digits * DIGIT_BYTES + self.dots * 3
    }
}

/// All-dark frame for the topology
pub fn blank_frame(topology: Topology) -> Frame {
    core::iter::repeat_n(0, topology.frame_len()).collect()
}

/// Builds frames from the time of day or from text
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameAssembler {
    topology: Topology,
    brightness: DayNightBrightness,
    blink: BlinkRule,
}

impl FrameAssembler {
    pub fn new(topology: Topology) -> Self {
        Self {
            topology,
            ..Self::default()
        }
    }

    /// Set the day/night brightness rule
    #[must_use]
    pub fn with_brightness(mut self, brightness: DayNightBrightness) -> Self {
        self.brightness = brightness;
        self
    }

    /// Set the dot blink rule
    #[must_use]
    pub fn with_blink(mut self, blink: BlinkRule) -> Self {
        self.blink = blink;
        self
    }

    pub const fn topology(&self) -> Topology {
        self.topology
    }

    /// Assemble the clock face for `now`
    ///
    /// Digits beyond `HH MM SS` are left blank.
    pub fn assemble<const N: usize>(
        &self,
        now: TimeOfDay,
        phase: ScrollPhase,
        wave: &ColorWave<N>,
    ) -> Result<Frame> {
        let values = now.digits();
        let mut frame = Frame::new();

        for position in 0..self.topology.digits {
            let mask = match values.get(position) {
                Some(value) => glyph::digit(*value)?,
                None => BLANK,
            };
            self.push_digit(&mut frame, position, &mask, phase, wave)?;
        }
        self.push_dots(&mut frame, self.blink.dots_lit(now))?;

        self.brightness.at(now.hour()).apply(&mut frame);
        Ok(frame)
    }

    /// Assemble a text face
    ///
    /// Text is left-aligned, padded with blanks and cut at the digit count.
    /// Dots stay dark. `now` only selects the brightness.
    pub fn assemble_text<const N: usize>(
        &self,
        text: &str,
        now: TimeOfDay,
        phase: ScrollPhase,
        wave: &ColorWave<N>,
    ) -> Result<Frame> {
        let mut symbols = text.chars();
        let mut frame = Frame::new();

        for position in 0..self.topology.digits {
            let mask = match symbols.next() {
                Some(symbol) => glyph::lookup(symbol)?,
                None => BLANK,
            };
            self.push_digit(&mut frame, position, &mask, phase, wave)?;
        }
        self.push_dots(&mut frame, false)?;

        self.brightness.at(now.hour()).apply(&mut frame);
        Ok(frame)
    }

    fn push_digit<const N: usize>(
        &self,
        frame: &mut Frame,
        position: usize,
        mask: &SegmentMask,
        phase: ScrollPhase,
        wave: &ColorWave<N>,
    ) -> Result<()> {
        let mut colors = [OFF; SEGMENT_COUNT];
        for (segment, color) in colors.iter_mut().enumerate() {
            *color = wave.sample(phase.wave_index(position, segment));
        }

        let bytes = digit::render(mask, &colors)?;
        frame
            .extend_from_slice(&bytes)
            .map_err(|()| self.overflow())
    }

    fn push_dots(&self, frame: &mut Frame, lit: bool) -> Result<()> {
        let color: Rgb = if lit { DOT_LIT } else { OFF };
        for _ in 0..self.topology.dots {
            frame
                .extend_from_slice(&[color.r, color.g, color.b])
                .map_err(|()| self.overflow())?;
        }
        Ok(())
    }

    const fn overflow(&self) -> Error {
        Error::TopologyTooLarge {
            digits: self.topology.digits,
            dots: self.topology.dots,
        }
    }
}
