//! Post-processing applied to finished frames

mod brightness;

pub use brightness::{Brightness, DayNightBrightness, FULL, NIGHT};
