use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

mod color;
mod config;
mod driver;
mod error;
mod pixel_order;
mod strip;

use color::parse_color;
use config::ChannelConfig;
use driver::console::ConsoleDriver;
use driver::StripDriver;
use error::SetlightError;
use strip::Strip;

#[derive(Parser, Debug)]
#[command(name = "setlight", version)]
#[command(about = "setlight - set every LED on the strip to one color\n\nExit codes: 0 ok, 1 usage, 2 bad color, 3 color out of range, otherwise the ws2811 driver status.", long_about = None)]
struct Cli {
    /// Color as hexadecimal 0xWWRRGGBB (e.g. ff0000 for red)
    #[arg(allow_negative_numbers = true)]
    color: String,

    /// Print progress and failure reasons
    #[arg(long)]
    debug: bool,

    /// Print the frame instead of driving the hardware
    #[arg(long)]
    dry_run: bool,
}

/// Usage error for a failed parse, or `None` for --help/--version
fn usage_error(err: &clap::Error) -> Option<SetlightError> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
        _ => Some(SetlightError::Usage),
    }
}

/// Channel configuration as JSON, for debug output
fn describe_config(config: &ChannelConfig) -> Result<String> {
    serde_json::to_string(config).context("Failed to serialize channel configuration")
}

/// Keep SIGINT from killing the process between acquire and release
fn install_interrupt_guard(interrupted: Arc<AtomicBool>) -> Result<()> {
    ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::Relaxed);
    })
    .context("Could not set Ctrl-C handler")
}

/// Parse the color and push it to the strip
fn run(cli: &Cli, driver: Box<dyn StripDriver>) -> Result<(), SetlightError> {
    let color = parse_color(&cli.color)?;

    let config = ChannelConfig::default();
    if cli.debug {
        match describe_config(&config) {
            Ok(json) => println!("Channel: {}", json),
            Err(e) => eprintln!("Warning: {:#}", e),
        }
    }

    let mut strip = Strip::new(config, driver, cli.debug);
    strip.show(color)
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            return match usage_error(&e) {
                Some(err) => err.into(),
                None => {
                    let _ = e.print();
                    ExitCode::SUCCESS
                }
            };
        }
    };

    let interrupted = Arc::new(AtomicBool::new(false));
    if let Err(e) = install_interrupt_guard(Arc::clone(&interrupted)) {
        if cli.debug {
            eprintln!("Warning: {:#}", e);
        }
    }

    let driver: Box<dyn StripDriver> = if cli.dry_run {
        Box::new(ConsoleDriver::new(io::stdout()))
    } else {
        driver::hardware(cli.debug)
    };

    let result = run(&cli, driver);

    if cli.debug && interrupted.load(Ordering::Relaxed) {
        eprintln!("Interrupted, LED driver was released before exit");
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.debug {
                eprintln!("✗ {}", e);
            }
            e.into()
        }
    }
}
