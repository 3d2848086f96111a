//! Day/night brightness
//!
//! The whole frame is dimmed outside daytime hours. The decision is made on
//! the hour alone.

/// Brightness factor in `(0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Brightness(f32);

/// Full brightness
pub const FULL: Brightness = Brightness(1.0);

/// Night-time brightness
pub const NIGHT: Brightness = Brightness(0.25);

impl Brightness {
    /// Create a brightness factor
    ///
    /// Returns `None` unless `factor` is in `(0, 1]`.
    pub fn new(factor: f32) -> Option<Self> {
        (factor > 0.0 && factor <= 1.0).then_some(Self(factor))
    }

    pub const fn factor(self) -> f32 {
        self.0
    }

    /// Scale a single byte, truncating toward zero
    #[inline]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn scale(self, value: u8) -> u8 {
        (f32::from(value) * self.0) as u8
    }

    /// Scale every byte of a frame in place
    pub fn apply(self, frame: &mut [u8]) {
        if self.0 >= 1.0 {
            return;
        }
        for byte in frame.iter_mut() {
            *byte = self.scale(*byte);
        }
    }
}

/// Picks a brightness from the hour of day
#[derive(Debug, Clone, Copy)]
pub struct DayNightBrightness {
    /// First daytime hour
    pub day_start: u8,
    /// Last daytime hour
    pub day_end: u8,
    /// Brightness outside daytime
    pub night: Brightness,
}

impl Default for DayNightBrightness {
    fn default() -> Self {
        Self {
            day_start: 7,
            day_end: 16,
            night: NIGHT,
        }
    }
}

impl DayNightBrightness {
    pub const fn is_daytime(&self, hour: u8) -> bool {
        hour >= self.day_start && hour <= self.day_end
    }

    /// Brightness for the given hour (0-23)
    pub const fn at(&self, hour: u8) -> Brightness {
        if self.is_daytime(hour) {
            FULL
        } else {
            self.night
        }
    }
}
