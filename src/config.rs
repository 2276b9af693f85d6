//! Window constants and command line options.

use crate::error::Error;
use crate::timer::{parse_duration, DEFAULT_TARGET};
use clap::Parser;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

/// Fixed window layout. Not user configurable.
#[derive(Debug, Clone, Copy)]
pub struct WindowConfig {
    /// Heading drawn at the top.
    pub title: &'static str,
    /// Width in terminal cells.
    pub width: u16,
    /// Height in terminal cells.
    pub height: u16,
}

/// The one window layout.
pub const WINDOW: WindowConfig = WindowConfig {
    title: "Egg timer",
    width: 40,
    height: 12,
};

/// Command line options.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Countdown length, e.g. `3s`, `90`, `1m30s`
    #[arg(short, long, default_value = "3s", value_parser = parse_target)]
    pub duration: Duration,

    /// Frames drawn per second while the timer runs
    #[arg(long, default_value_t = 60, value_parser = parse_fps)]
    pub fps: u32,

    /// Write logs to this file (level from RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duration: DEFAULT_TARGET,
            fps: 60,
            log_file: None,
        }
    }
}

impl Config {
    /// Time between two frames while the timer runs.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.fps.max(1)))
    }
}

fn parse_target(s: &str) -> Result<Duration, String> {
    let d = parse_duration(s).map_err(|e| e.to_string())?;
    if d.is_zero() {
        return Err(Error::ZeroTarget.to_string());
    }
    Ok(d)
}

fn parse_fps(s: &str) -> Result<u32, String> {
    match s.trim().parse::<u32>() {
        Ok(0) => Err(Error::ZeroFps.to_string()),
        Ok(fps) => Ok(fps),
        Err(e) => Err(e.to_string()),
    }
}

static CURRENT: OnceLock<Config> = OnceLock::new();

/// Hands the options to the program model, whose `init` takes no arguments.
///
/// Only the first call wins; later calls are ignored and return `false`.
pub fn install(config: Config) -> bool {
    CURRENT.set(config).is_ok()
}

/// The installed options, or the defaults if none were installed.
pub fn current() -> Config {
    CURRENT.get().cloned().unwrap_or_default()
}
