use std::fmt;

use crate::config::ChannelConfig;

pub mod console;
#[cfg(feature = "ws281x")]
pub mod ws281x;

/// Status codes reported by the ws2811 driver
pub mod status {
    pub const GENERIC: i32 = -1;
    pub const OUT_OF_MEMORY: i32 = -2;
    pub const HW_NOT_SUPPORTED: i32 = -3;
    pub const MEM_LOCK: i32 = -4;
    pub const MMAP: i32 = -5;
    pub const MAP_REGISTERS: i32 = -6;
    pub const GPIO_INIT: i32 = -7;
    pub const PWM_SETUP: i32 = -8;
    pub const MAILBOX_DEVICE: i32 = -9;
    pub const DMA: i32 = -10;
    pub const ILLEGAL_GPIO: i32 = -11;
    pub const PCM_SETUP: i32 = -12;
    pub const SPI_SETUP: i32 = -13;
    pub const SPI_TRANSFER: i32 = -14;
}

/// Non-success status returned by a driver call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverError {
    pub status: i32,
}

impl DriverError {
    pub fn new(status: i32) -> Self {
        DriverError { status }
    }

    pub fn description(&self) -> &'static str {
        match self.status {
            status::GENERIC => "Generic failure",
            status::OUT_OF_MEMORY => "Out of memory",
            status::HW_NOT_SUPPORTED => "Hardware revision is not supported",
            status::MEM_LOCK => "Memory lock failed",
            status::MMAP => "mmap() failed",
            status::MAP_REGISTERS => "Unable to map registers into userspace",
            status::GPIO_INIT => "Unable to initialize GPIO",
            status::PWM_SETUP => "Unable to initialize PWM",
            status::MAILBOX_DEVICE => "Failed to create mailbox device",
            status::DMA => "DMA error",
            status::ILLEGAL_GPIO => "Selected GPIO not possible",
            status::PCM_SETUP => "Unable to initialize PCM",
            status::SPI_SETUP => "Unable to initialize SPI",
            status::SPI_TRANSFER => "SPI transfer error",
            _ => "Unknown driver status",
        }
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (status {})", self.description(), self.status)
    }
}

impl std::error::Error for DriverError {}

/// Hardware collaborator that turns a frame buffer into light
pub trait StripDriver {
    /// Claim GPIO and DMA resources for the channel
    fn acquire(&mut self, config: &ChannelConfig) -> Result<(), DriverError>;

    /// Push one frame to the strip and wait for it to go out
    fn render(&mut self, config: &ChannelConfig, leds: &[u32]) -> Result<(), DriverError>;

    /// Give the resources back. Best effort, never fails.
    fn release(&mut self);
}

/// Stand-in used when the binary was built without hardware support
#[cfg_attr(feature = "ws281x", allow(dead_code))]
pub struct Unsupported;

impl StripDriver for Unsupported {
    fn acquire(&mut self, _config: &ChannelConfig) -> Result<(), DriverError> {
        Err(DriverError::new(status::HW_NOT_SUPPORTED))
    }

    fn render(&mut self, _config: &ChannelConfig, _leds: &[u32]) -> Result<(), DriverError> {
        Err(DriverError::new(status::GENERIC))
    }

    fn release(&mut self) {}
}

/// Driver for the real strip, if this build has one
pub fn hardware(debug: bool) -> Box<dyn StripDriver> {
    #[cfg(feature = "ws281x")]
    {
        Box::new(ws281x::Ws281xDriver::new(debug))
    }
    #[cfg(not(feature = "ws281x"))]
    {
        if debug {
            eprintln!("Warning: built without the ws281x feature, no hardware output available");
        }
        Box::new(Unsupported)
    }
}

#[cfg(test)]
pub mod mock {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        Acquire,
        Render(Vec<u32>),
        Release,
    }

    /// Records lifecycle calls; can be told to fail acquire or render
    pub struct RecordingDriver {
        pub calls: Rc<RefCell<Vec<Call>>>,
        pub fail_acquire: Option<i32>,
        pub fail_render: Option<i32>,
    }

    impl RecordingDriver {
        pub fn new() -> (Self, Rc<RefCell<Vec<Call>>>) {
            let calls = Rc::new(RefCell::new(Vec::new()));
            let driver = RecordingDriver {
                calls: Rc::clone(&calls),
                fail_acquire: None,
                fail_render: None,
            };
            (driver, calls)
        }
    }

    impl StripDriver for RecordingDriver {
        fn acquire(&mut self, _config: &ChannelConfig) -> Result<(), DriverError> {
            self.calls.borrow_mut().push(Call::Acquire);
            match self.fail_acquire {
                Some(status) => Err(DriverError::new(status)),
                None => Ok(()),
            }
        }

        fn render(&mut self, _config: &ChannelConfig, leds: &[u32]) -> Result<(), DriverError> {
            self.calls.borrow_mut().push(Call::Render(leds.to_vec()));
            match self.fail_render {
                Some(status) => Err(DriverError::new(status)),
                None => Ok(()),
            }
        }

        fn release(&mut self) {
            self.calls.borrow_mut().push(Call::Release);
        }
    }
}
