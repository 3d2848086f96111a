use chrono::{Local, Timelike};
use segment_clock_composer::{ClockSource, Result, TimeOfDay};

/// Local wall-clock time
pub struct LocalClock;

impl ClockSource for LocalClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now(&mut self) -> Result<TimeOfDay> {
        let now = Local::now().time();
        // a leap second reports more than a second of nanoseconds
        let micros = (now.nanosecond() / 1_000).min(999_999);
        TimeOfDay::new(
            now.hour() as u8,
            now.minute() as u8,
            now.second() as u8,
            micros,
        )
    }
}
