//! Error type shared by the timer, the CLI and the program shell.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong in egg-timer.
///
/// The countdown itself never fails once built. Errors come from
/// construction (a zero target), from parsing command line durations, and
/// from the terminal program that hosts the event loop.
#[derive(Debug, Error)]
pub enum Error {
    /// A timer was asked to count down from zero.
    #[error("target duration must be greater than zero")]
    ZeroTarget,

    /// A duration string could not be parsed.
    #[error("invalid duration `{0}`")]
    InvalidDuration(String),

    /// The frame rate was zero.
    #[error("frames per second must be greater than zero")]
    ZeroFps,

    /// The shell reported an error while tearing the window down.
    #[error("shell closed with error: {0}")]
    Shell(String),

    /// The terminal program failed.
    #[error(transparent)]
    Program(#[from] bubbletea_rs::Error),

    /// Opening the log file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
