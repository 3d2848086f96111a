//! Linux spidev setup

use std::path::Path;

use anyhow::{Context, anyhow};
use embedded_hal::spi::{Mode, Phase, Polarity};
use linux_embedded_hal::SpidevDevice;
use linux_embedded_hal::spidev::{SpiModeFlags, SpidevOptions};
use log::info;
use segment_clock_composer::BusConfig;

/// Open the spidev node and apply the chain's bus settings
pub fn open(path: &Path, config: &BusConfig) -> anyhow::Result<SpidevDevice> {
    let mut device = SpidevDevice::open(path)
        .map_err(|err| anyhow!("cannot open {}: {err:?}", path.display()))?;

    let options = SpidevOptions::new()
        .bits_per_word(config.bits_per_word)
        .max_speed_hz(config.clock_speed_hz)
        .lsb_first(config.lsb_first)
        .mode(mode_flags(config.mode))
        .build();
    device
        .configure(&options)
        .with_context(|| format!("cannot configure {}", path.display()))?;

    info!(
        "opened {} at {} Hz, {} bits per word, chip select delay {} us",
        path.display(),
        config.clock_speed_hz,
        config.bits_per_word,
        config.chip_select_delay.as_micros()
    );
    Ok(device)
}

fn mode_flags(mode: Mode) -> SpiModeFlags {
    match (mode.polarity, mode.phase) {
        (Polarity::IdleLow, Phase::CaptureOnFirstTransition) => SpiModeFlags::SPI_MODE_0,
        (Polarity::IdleLow, Phase::CaptureOnSecondTransition) => SpiModeFlags::SPI_MODE_1,
        (Polarity::IdleHigh, Phase::CaptureOnFirstTransition) => SpiModeFlags::SPI_MODE_2,
        (Polarity::IdleHigh, Phase::CaptureOnSecondTransition) => SpiModeFlags::SPI_MODE_3,
    }
}
