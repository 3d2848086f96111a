#![no_std]

pub mod channel;
pub mod color;
pub mod digit;
pub mod error;
pub mod filter;
pub mod frame;
pub mod frame_scheduler;
pub mod glyph;
pub mod intent;
pub mod phase;
pub mod segment;
pub mod time;
pub mod transport;

pub use error::{Error, Result};
pub use filter::{Brightness, DayNightBrightness};
pub use frame::{CLOCK_TOPOLOGY, Frame, FrameAssembler, Topology, blank_frame};
pub use frame_scheduler::{FrameResult, FrameScheduler, SchedulerConfig, TICK_INTERVAL};
pub use intent::{
    DisplayIntent, Face, IntentChannel, IntentProcessor, IntentReceiver, IntentSender, Text,
};
pub use phase::{PHASE_STEP, ScrollPhase};
pub use segment::{Segment, SegmentMask};
pub use time::{BlinkRule, ClockSource, TimeOfDay};
pub use transport::{BusConfig, FrameSink, SpiDeviceSink};

pub use color::{ColorWave, Rgb, WaveConfig};
pub use embassy_time::Duration;
