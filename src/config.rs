use serde::{Deserialize, Serialize};

use crate::pixel_order::StripType;

/// Number of LEDs on the strip
pub const LED_COUNT: usize = 12;

const TARGET_FREQ: u32 = 800_000;
const GPIO_PIN: i32 = 12;
const DMA: i32 = 10;

/// Hardware description of the single output channel
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChannelConfig {
    /// Data line signal frequency in Hz
    pub freq: u32,
    pub gpio_pin: i32,
    pub dma: i32,
    pub led_count: usize,
    pub strip_type: StripType,
    /// Invert the data line (for inverting level shifters)
    pub invert: bool,
    pub brightness: u8,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        ChannelConfig {
            freq: TARGET_FREQ,
            gpio_pin: GPIO_PIN,
            dma: DMA,
            led_count: LED_COUNT,
            strip_type: StripType::Grb,
            invert: false,
            brightness: 255,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_channel() {
        let config = ChannelConfig::default();
        assert_eq!(config.gpio_pin, 12);
        assert_eq!(config.dma, 10);
        assert_eq!(config.led_count, LED_COUNT);
        assert_eq!(config.strip_type, StripType::Grb);
        assert!(!config.invert);
        assert_eq!(config.brightness, 255);
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(ChannelConfig::default()).unwrap();
        assert_eq!(json["gpio_pin"], 12);
        assert_eq!(json["strip_type"], "GRB");
        assert_eq!(json["freq"], 800_000);
    }
}
