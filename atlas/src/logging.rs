//! Logger setup for hosts and demos.
//!
//! The library only logs through the `log` facade and never installs a
//! logger on its own.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use crate::error::Result;

/// Send all records at or above `level` to the file at `path`.
///
/// Fails if the file cannot be created or a logger is already installed.
pub fn init_file_logger(path: impl AsRef<Path>, level: LevelFilter) -> Result<()> {
    let log_file = File::create(path)?;
    WriteLogger::init(level, Config::default(), log_file)?;
    Ok(())
}
