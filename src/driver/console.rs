use std::io::Write;

use crate::config::ChannelConfig;
use crate::pixel_order::frame_bytes;

use super::{status, DriverError, StripDriver};

/// Dry-run driver: prints what would be sent instead of touching hardware
pub struct ConsoleDriver<W: Write> {
    out: W,
    acquired: bool,
}

impl<W: Write> ConsoleDriver<W> {
    pub fn new(out: W) -> Self {
        ConsoleDriver { out, acquired: false }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StripDriver for ConsoleDriver<W> {
    fn acquire(&mut self, config: &ChannelConfig) -> Result<(), DriverError> {
        writeln!(
            self.out,
            "[DRY RUN] GPIO {} / DMA {} ({} LEDs, {:?} @ {} Hz, brightness {}{})",
            config.gpio_pin,
            config.dma,
            config.led_count,
            config.strip_type,
            config.freq,
            config.brightness,
            if config.invert { ", inverted" } else { "" },
        )
        .map_err(|_| DriverError::new(status::GENERIC))?;

        self.acquired = true;
        Ok(())
    }

    fn render(&mut self, config: &ChannelConfig, leds: &[u32]) -> Result<(), DriverError> {
        if !self.acquired {
            return Err(DriverError::new(status::GENERIC));
        }

        let stride = config.strip_type.stride();
        let frame = frame_bytes(leds, config.strip_type, config.brightness);

        // Hex dump, one line per LED
        for (i, pixel) in frame.chunks(stride).enumerate() {
            let hex = pixel.iter().map(|b| format!("{:02x}", b)).collect::<Vec<_>>().join(" ");
            writeln!(self.out, "[DRY RUN] LED {:2}: {}", i, hex)
                .map_err(|_| DriverError::new(status::GENERIC))?;
        }

        self.out.flush().map_err(|_| DriverError::new(status::GENERIC))
    }

    fn release(&mut self) {
        if self.acquired {
            let _ = writeln!(self.out, "[DRY RUN] released");
            let _ = self.out.flush();
            self.acquired = false;
        }
    }
}
