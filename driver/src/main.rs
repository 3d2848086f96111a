//! Drives an RGB seven-segment clock chain from a Linux SPI device.

mod bus;
mod clock;

use std::path::PathBuf;
use std::thread::sleep;

use anyhow::anyhow;
use clap::Parser;
use log::{info, warn};
use segment_clock_composer::{
    BusConfig, CLOCK_TOPOLOGY, DisplayIntent, Duration, FrameScheduler, FrameSink, IntentChannel,
    SchedulerConfig, SpiDeviceSink, TICK_INTERVAL, blank_frame, color::DEFAULT_WAVE_LEN,
};

use crate::clock::LocalClock;

/// Intent channel size
const INTENT_CHANNEL_SIZE: usize = 4;

/// Intents for the render loop
static INTENTS: IntentChannel<INTENT_CHANNEL_SIZE> = IntentChannel::new();

#[derive(Debug, Parser)]
#[command(about = "Show the time on an SPI chain of RGB seven-segment digits")]
struct Args {
    /// spidev node the chain is attached to
    #[arg(long, default_value = "/dev/spidev0.0")]
    device: PathBuf,

    /// Turn every segment off and exit
    #[arg(long)]
    blank: bool,

    /// Show fixed text instead of the time
    #[arg(long, conflicts_with = "blank")]
    text: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let bus = BusConfig::DEFAULT;
    let device = bus::open(&args.device, &bus)?;
    let mut sink = SpiDeviceSink::new(device, &bus);

    if args.blank {
        sink.transmit(&blank_frame(CLOCK_TOPOLOGY))?;
        info!("display blanked");
        return Ok(());
    }

    if let Some(text) = &args.text {
        INTENTS
            .sender()
            .try_send(DisplayIntent::text(text)?)
            .map_err(|_| anyhow!("intent channel full"))?;
    }

    let mut scheduler: FrameScheduler<'_, _, _, DEFAULT_WAVE_LEN, INTENT_CHANNEL_SIZE> =
        FrameScheduler::new(sink, LocalClock, INTENTS.receiver(), &SchedulerConfig::default());

    info!("rendering {} digits", CLOCK_TOPOLOGY.digits());
    loop {
        match scheduler.tick() {
            Ok(result) if result.stopped => break,
            Ok(result) => pause(result.sleep_duration),
            Err(err) => {
                warn!("tick skipped: {err}");
                pause(TICK_INTERVAL);
            }
        }
    }
    Ok(())
}

fn pause(duration: Duration) {
    sleep(std::time::Duration::from_micros(duration.as_micros()));
}
