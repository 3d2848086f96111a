mod wave;

use smart_leds::RGB8;
pub use wave::{
    ColorWave, DEFAULT_FREQUENCY, DEFAULT_WAVE_LEN, DefaultColorWave, WaveConfig, wave_channel,
};

pub type Rgb = RGB8;

/// Unlit segment or dot
pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Lit separator dot
pub const DOT_LIT: Rgb = Rgb {
    r: 128,
    g: 128,
    b: 128,
};
