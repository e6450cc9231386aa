use serde::{Deserialize, Serialize};

/// Color component order expected by the strip on the data line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StripType {
    Rgb,
    Rbg,
    Grb,
    Gbr,
    Brg,
    Bgr,
    Rgbw,
    Grbw,
}

impl StripType {
    /// Bytes sent per LED
    pub fn stride(self) -> usize {
        match self {
            StripType::Rgbw | StripType::Grbw => 4,
            _ => 3,
        }
    }

    /// Component order as shifts into a 0xWWRRGGBB color
    fn shifts(self) -> &'static [u32] {
        const R: u32 = 16;
        const G: u32 = 8;
        const B: u32 = 0;
        const W: u32 = 24;

        match self {
            StripType::Rgb => &[R, G, B],
            StripType::Rbg => &[R, B, G],
            StripType::Grb => &[G, R, B],
            StripType::Gbr => &[G, B, R],
            StripType::Brg => &[B, R, G],
            StripType::Bgr => &[B, G, R],
            StripType::Rgbw => &[R, G, B, W],
            StripType::Grbw => &[G, R, B, W],
        }
    }
}

/// Scale one component the way the ws2811 driver applies brightness
fn scale(component: u8, brightness: u8) -> u8 {
    ((component as u16 * (brightness as u16 + 1)) >> 8) as u8
}

/// Bytes for a single LED, in strip order, after brightness scaling
pub fn wire_bytes(color: u32, strip_type: StripType, brightness: u8) -> Vec<u8> {
    strip_type
        .shifts()
        .iter()
        .map(|&shift| scale((color >> shift) as u8, brightness))
        .collect()
}

/// Bytes for a whole frame
pub fn frame_bytes(leds: &[u32], strip_type: StripType, brightness: u8) -> Vec<u8> {
    let mut data = Vec::with_capacity(leds.len() * strip_type.stride());

    for &color in leds {
        data.extend(wire_bytes(color, strip_type, brightness));
    }

    data
}
