//! Frame delivery
//!
//! The crate never opens a bus itself. [`BusConfig`] describes how the
//! chain expects to be clocked and [`FrameSink`] is where finished frames
//! go.

use embassy_time::Duration;
use embedded_hal::spi::{Error as _, MODE_0, Mode, Operation, SpiDevice};

use crate::error::{Error, Result};

/// Fixed bus settings of the display chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusConfig {
    /// SPI clock in Hz
    pub clock_speed_hz: u32,
    pub bits_per_word: u8,
    /// Send the least significant bit first
    pub lsb_first: bool,
    pub mode: Mode,
    /// Time chip select stays asserted after the payload
    pub chip_select_delay: Duration,
}

impl BusConfig {
    pub const DEFAULT: Self = Self {
        clock_speed_hz: 1_000_000,
        bits_per_word: 8,
        lsb_first: false,
        mode: MODE_0,
        chip_select_delay: Duration::from_micros(500),
    };
}

impl Default for BusConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Destination for finished frames
///
/// Implement this trait to support different transports. A call must not
/// return before the frame is on the wire.
pub trait FrameSink {
    /// Transmit one frame
    fn transmit(&mut self, frame: &[u8]) -> Result<()>;
}

/// [`FrameSink`] over an `embedded-hal` SPI device
pub struct SpiDeviceSink<D> {
    device: D,
    chip_select_delay_ns: u32,
}

impl<D: SpiDevice> SpiDeviceSink<D> {
    /// Wrap a device that is already configured according to `config`
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(device: D, config: &BusConfig) -> Self {
        let delay_ns = config.chip_select_delay.as_micros().saturating_mul(1_000);
        Self {
            device,
            chip_select_delay_ns: delay_ns.min(u64::from(u32::MAX)) as u32,
        }
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn into_inner(self) -> D {
        self.device
    }
}

impl<D: SpiDevice> FrameSink for SpiDeviceSink<D> {
    fn transmit(&mut self, frame: &[u8]) -> Result<()> {
        self.device
            .transaction(&mut [
                Operation::Write(frame),
                Operation::DelayNs(self.chip_select_delay_ns),
            ])
            .map_err(|err| Error::TransmissionFault(err.kind()))
    }
}
