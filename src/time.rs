//! Time of day as seen by the display

use crate::error::{Error, Result};

const MICROS_PER_SECOND: u32 = 1_000_000;

/// Wall-clock time with sub-second resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
    micros: u32,
}

impl TimeOfDay {
    /// Create a time of day
    ///
    /// A reading outside the 24-hour range means the clock source is not
    /// usable, so it fails with [`Error::ClockUnavailable`].
    pub const fn new(hour: u8, minute: u8, second: u8, micros: u32) -> Result<Self> {
        if hour > 23 || minute > 59 || second > 59 || micros >= MICROS_PER_SECOND {
            return Err(Error::ClockUnavailable);
        }
        Ok(Self {
            hour,
            minute,
            second,
            micros,
        })
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }

    pub const fn second(self) -> u8 {
        self.second
    }

    /// Microseconds into the current second
    pub const fn micros(self) -> u32 {
        self.micros
    }

    /// `HH MM SS` split into tens and ones
    pub const fn digits(self) -> [u8; 6] {
        [
            self.hour / 10,
            self.hour % 10,
            self.minute / 10,
            self.minute % 10,
            self.second / 10,
            self.second % 10,
        ]
    }
}

/// Decides whether the separator dots are lit
#[derive(Debug, Clone, Copy)]
pub struct BlinkRule {
    /// Dots stay dark until this many microseconds into each second
    pub dark_until_micros: u32,
}

impl Default for BlinkRule {
    fn default() -> Self {
        Self {
            dark_until_micros: MICROS_PER_SECOND / 2,
        }
    }
}

impl BlinkRule {
    pub const fn dots_lit(&self, now: TimeOfDay) -> bool {
        now.micros >= self.dark_until_micros
    }
}

/// Source of the current time of day
pub trait ClockSource {
    /// Read the current time
    fn now(&mut self) -> Result<TimeOfDay>;
}
