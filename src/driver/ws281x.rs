use rs_ws281x::{ChannelBuilder, Controller, ControllerBuilder, StripType as HwStripType, WS2811Error};

use crate::config::ChannelConfig;
use crate::pixel_order::StripType;

use super::{status, DriverError, StripDriver};

/// Raspberry Pi PWM/DMA output through rpi_ws281x
pub struct Ws281xDriver {
    controller: Option<Controller>,
    debug: bool,
}

impl Ws281xDriver {
    pub fn new(debug: bool) -> Self {
        Ws281xDriver { controller: None, debug }
    }
}

impl StripDriver for Ws281xDriver {
    fn acquire(&mut self, config: &ChannelConfig) -> Result<(), DriverError> {
        let channel = ChannelBuilder::new()
            .pin(config.gpio_pin)
            .count(config.led_count as i32)
            .strip_type(hw_strip_type(config.strip_type))
            .invert(config.invert)
            .brightness(config.brightness)
            .build();

        let controller = ControllerBuilder::new()
            .freq(config.freq)
            .dma(config.dma)
            .channel(0, channel)
            .build()
            .map_err(to_driver_error)?;

        if self.debug {
            println!("✓ ws2811 initialized on GPIO {} (DMA {})", config.gpio_pin, config.dma);
        }

        self.controller = Some(controller);
        Ok(())
    }

    fn render(&mut self, _config: &ChannelConfig, leds: &[u32]) -> Result<(), DriverError> {
        let controller = self
            .controller
            .as_mut()
            .ok_or(DriverError::new(status::GENERIC))?;

        // ws2811_led_t is 0xWWRRGGBB stored little-endian
        for (slot, &color) in controller.leds_mut(0).iter_mut().zip(leds) {
            *slot = color.to_le_bytes();
        }

        controller.render().map_err(to_driver_error)?;
        controller.wait().map_err(to_driver_error)
    }

    fn release(&mut self) {
        // Dropping the controller calls ws2811_fini
        if self.controller.take().is_some() && self.debug {
            println!("✓ ws2811 released");
        }
    }
}

fn hw_strip_type(strip_type: StripType) -> HwStripType {
    match strip_type {
        StripType::Rgb => HwStripType::Ws2811Rgb,
        StripType::Rbg => HwStripType::Ws2811Rbg,
        StripType::Grb => HwStripType::Ws2811Grb,
        StripType::Gbr => HwStripType::Ws2811Gbr,
        StripType::Brg => HwStripType::Ws2811Brg,
        StripType::Bgr => HwStripType::Ws2811Bgr,
        StripType::Rgbw => HwStripType::Sk6812Rgbw,
        StripType::Grbw => HwStripType::Sk6812Grbw,
    }
}

fn to_driver_error(err: WS2811Error) -> DriverError {
    let code = match err {
        WS2811Error::Generic => status::GENERIC,
        WS2811Error::OutOfMemory => status::OUT_OF_MEMORY,
        WS2811Error::HwNotSupported => status::HW_NOT_SUPPORTED,
        WS2811Error::MemLock => status::MEM_LOCK,
        WS2811Error::Mmap => status::MMAP,
        WS2811Error::MapRegisters => status::MAP_REGISTERS,
        WS2811Error::GpioInit => status::GPIO_INIT,
        WS2811Error::PwmSetup => status::PWM_SETUP,
        WS2811Error::MailboxDevice => status::MAILBOX_DEVICE,
        WS2811Error::Dma => status::DMA,
        WS2811Error::IllegalGpio => status::ILLEGAL_GPIO,
        WS2811Error::PcmSetup => status::PCM_SETUP,
        WS2811Error::SpiSetup => status::SPI_SETUP,
        WS2811Error::SpiTransfer => status::SPI_TRANSFER,
        #[allow(unreachable_patterns)]
        _ => status::GENERIC,
    };
    DriverError::new(code)
}
