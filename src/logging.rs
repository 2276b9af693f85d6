//! Logger setup.
//!
//! The terminal belongs to the UI while the program runs, so log records
//! never go to stderr. They are written to a file when one is given and
//! dropped otherwise.

use crate::error::Result;
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::path::Path;

/// Installs an `env_logger` writing to `path`, filtered by `RUST_LOG`
/// (default `info`). Does nothing without a path.
pub fn init(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .init();

    log::info!("logging to {}", path.display());
    Ok(())
}
