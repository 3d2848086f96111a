//! Render loop step
//!
//! One [`FrameScheduler::tick`] is one iteration of the display loop. The
//! caller owns the loop and does the sleeping, which keeps the scheduler free
//! of platform timers.

use embassy_time::Duration;

#[cfg(feature = "log")]
use log::debug;

use crate::color::{ColorWave, WaveConfig};
use crate::error::Result;
use crate::frame::{Frame, FrameAssembler, blank_frame};
use crate::intent::{Face, IntentProcessor, IntentReceiver};
use crate::phase::ScrollPhase;
use crate::time::ClockSource;
use crate::transport::FrameSink;

/// Pause between ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Result of a frame tick
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// How long to wait before the next tick
    pub sleep_duration: Duration,
    /// A stop was requested and the display has been blanked
    pub stopped: bool,
}

/// Scheduler configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct SchedulerConfig {
    pub assembler: FrameAssembler,
    pub wave: WaveConfig,
}

/// Drives the assembler and the sink once per tick
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(sink, clock, intents, &config);
///
/// loop {
///     match scheduler.tick() {
///         Ok(result) if result.stopped => break,
///         Ok(result) => sleep(result.sleep_duration),
///         Err(_) => sleep(TICK_INTERVAL),
///     }
/// }
/// ```
pub struct FrameScheduler<'a, S, C, const N: usize, const INTENT_CHANNEL_SIZE: usize> {
    sink: S,
    clock: C,
    intent_processor: IntentProcessor<'a, INTENT_CHANNEL_SIZE>,
    assembler: FrameAssembler,
    wave: ColorWave<N>,
    phase: ScrollPhase,
    face: Face,
}

impl<'a, S, C, const N: usize, const INTENT_CHANNEL_SIZE: usize>
    FrameScheduler<'a, S, C, N, INTENT_CHANNEL_SIZE>
where
    S: FrameSink,
    C: ClockSource,
{
    /// Create a scheduler showing the time, with the wave built once here
    pub fn new(
        sink: S,
        clock: C,
        intents: IntentReceiver<'a, INTENT_CHANNEL_SIZE>,
        config: &SchedulerConfig,
    ) -> Self {
        Self {
            sink,
            clock,
            intent_processor: IntentProcessor::new(intents),
            assembler: config.assembler,
            wave: ColorWave::build(&config.wave),
            phase: ScrollPhase::new(N),
            face: Face::Time,
        }
    }

    /// Run one tick
    ///
    /// Applies pending intents, builds the frame for the current face and
    /// transmits it. The scroll phase only advances after a successful
    /// transmission, so a failed tick leaves the animation where it was.
    pub fn tick(&mut self) -> Result<FrameResult> {
        if self.intent_processor.process_pending(&mut self.face) {
            self.sink.transmit(&blank_frame(self.assembler.topology()))?;
            return Ok(FrameResult {
                sleep_duration: Duration::from_ticks(0),
                stopped: true,
            });
        }

        let frame = self.render()?;
        self.sink.transmit(&frame)?;
        self.phase = self.phase.advanced();

        #[cfg(feature = "log")]
        debug!("frame sent, phase {}", self.phase.value());

        Ok(FrameResult {
            sleep_duration: TICK_INTERVAL,
            stopped: false,
        })
    }

    fn render(&mut self) -> Result<Frame> {
        match &self.face {
            Face::Time => {
                let now = self.clock.now()?;
                self.assembler.assemble(now, self.phase, &self.wave)
            }
            Face::Text(text) => {
                let now = self.clock.now()?;
                self.assembler
                    .assemble_text(text, now, self.phase, &self.wave)
            }
            Face::Blank => Ok(blank_frame(self.assembler.topology())),
        }
    }

    pub const fn phase(&self) -> ScrollPhase {
        self.phase
    }

    pub const fn face(&self) -> &Face {
        &self.face
    }

    pub const fn wave(&self) -> &ColorWave<N> {
        &self.wave
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
