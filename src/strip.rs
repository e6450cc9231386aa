use crate::config::{ChannelConfig, LED_COUNT};
use crate::driver::{status, DriverError, StripDriver};
use crate::error::SetlightError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripState {
    Uninitialized,
    Acquired,
    Rendered,
    Released,
}

/// One LED strip: channel configuration, frame buffer, and the driver that
/// owns the hardware while acquired.
///
/// Resources are released at most once, either by `release()` or on drop.
pub struct Strip {
    config: ChannelConfig,
    leds: [u32; LED_COUNT],
    driver: Box<dyn StripDriver>,
    state: StripState,
    debug: bool,
}

impl Strip {
    pub fn new(config: ChannelConfig, driver: Box<dyn StripDriver>, debug: bool) -> Self {
        Strip {
            config,
            leds: [0; LED_COUNT],
            driver,
            state: StripState::Uninitialized,
            debug,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> StripState {
        self.state
    }

    #[cfg(test)]
    pub fn leds(&self) -> &[u32; LED_COUNT] {
        &self.leds
    }

    /// Set every LED in the frame buffer to `color`
    pub fn fill(&mut self, color: u32) {
        self.leds.fill(color);
    }

    pub fn acquire(&mut self) -> Result<(), DriverError> {
        self.driver.acquire(&self.config)?;
        self.state = StripState::Acquired;
        Ok(())
    }

    pub fn render(&mut self) -> Result<(), DriverError> {
        if self.state != StripState::Acquired {
            return Err(DriverError::new(status::GENERIC));
        }

        self.driver.render(&self.config, &self.leds)?;
        self.state = StripState::Rendered;
        Ok(())
    }

    pub fn release(&mut self) {
        if matches!(self.state, StripState::Acquired | StripState::Rendered) {
            self.driver.release();
            self.state = StripState::Released;
        }
    }

    /// Acquire, fill with `color`, render, release
    pub fn show(&mut self, color: u32) -> Result<(), SetlightError> {
        self.acquire().map_err(SetlightError::Acquire)?;
        if self.debug {
            println!("✓ Acquired GPIO {} / DMA {}", self.config.gpio_pin, self.config.dma);
        }

        self.fill(color);
        let rendered = self.render().map_err(SetlightError::Render);
        if self.debug && rendered.is_ok() {
            println!("✓ Rendered {:#010x} to {} LEDs", color, LED_COUNT);
        }

        // Release even when render failed
        self.release();
        if self.debug {
            println!("✓ Released");
        }

        rendered
    }
}

impl Drop for Strip {
    fn drop(&mut self) {
        self.release();
    }
}
