/// Amount the scroll phase moves each tick.
pub const PHASE_STEP: f32 = 0.1;

/// Offset into the color wave, wrapping at the wave length
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPhase {
    value: f32,
    length: f32,
}

impl ScrollPhase {
    /// Start at zero for a wave of `length` samples
    #[allow(clippy::cast_precision_loss)]
    pub fn new(length: usize) -> Self {
        Self {
            value: 0.0,
            length: length as f32,
        }
    }

    pub const fn value(self) -> f32 {
        self.value
    }

    /// Move forward by [`PHASE_STEP`], returning to zero at the wave length
    #[must_use]
    pub fn advanced(self) -> Self {
        self.advanced_by(PHASE_STEP)
    }

    #[must_use]
    pub fn advanced_by(self, step: f32) -> Self {
        let mut value = self.value + step;
        if value >= self.length {
            value = 0.0;
        }
        Self { value, ..self }
    }

    /// Wave index for a digit position and segment
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn wave_index(self, position: usize, segment: usize) -> usize {
        let base = libm::floorf(self.value) as usize;
        base + position + segment
    }
}
