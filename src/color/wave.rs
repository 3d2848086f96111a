//! Three-phase color wave
//!
//! A precomputed ring of colors where red, green and blue follow the same
//! sine, each shifted by a third of a turn. Walking the ring produces a
//! smooth hue cycle.

use core::f64::consts::PI;

use crate::color::Rgb;

/// Default number of samples in the wave.
pub const DEFAULT_WAVE_LEN: usize = 100;

/// Default angular step between neighbouring samples (radians).
pub const DEFAULT_FREQUENCY: f64 = 0.08;

const GREEN_PHASE: f64 = 2.0 * PI / 3.0;
const BLUE_PHASE: f64 = 4.0 * PI / 3.0;

const AMPLITUDE: f64 = 127.0;
const OFFSET: f64 = 64.0;

/// Wave generation parameters
#[derive(Debug, Clone, Copy)]
pub struct WaveConfig {
    /// Angular step between samples (radians)
    pub frequency: f64,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY,
        }
    }
}

/// Precomputed color wave of `N` samples
#[derive(Debug, Clone)]
pub struct ColorWave<const N: usize> {
    samples: [Rgb; N],
}

/// Wave with the default sample count
pub type DefaultColorWave = ColorWave<DEFAULT_WAVE_LEN>;

impl<const N: usize> ColorWave<N> {
    /// Generate the wave
    pub fn build(config: &WaveConfig) -> Self {
        let mut samples = [Rgb::default(); N];
        for (index, sample) in samples.iter_mut().enumerate() {
            *sample = Rgb {
                r: wave_channel(config.frequency, index, 0.0),
                g: wave_channel(config.frequency, index, GREEN_PHASE),
                b: wave_channel(config.frequency, index, BLUE_PHASE),
            };
        }
        Self { samples }
    }

    /// Sample at `index`, wrapped to the wave length
    pub fn sample(&self, index: usize) -> Rgb {
        self.samples[index % N]
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn samples(&self) -> &[Rgb] {
        &self.samples
    }
}

impl<const N: usize> Default for ColorWave<N> {
    fn default() -> Self {
        Self::build(&WaveConfig::default())
    }
}

/// Single channel value at `index`
///
/// The scaled sine dips below zero near its trough; the value is truncated
/// toward zero and only its low byte is kept, so those samples wrap into the
/// upper range.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn wave_channel(frequency: f64, index: usize, phase: f64) -> u8 {
    let value = libm::sin(frequency * index as f64 + phase) * AMPLITUDE + OFFSET;
    ((value as i32) & 0xFF) as u8
}
