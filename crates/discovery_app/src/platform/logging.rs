//! Platform logging initialization for the dashboard.
//!
//! The terminal belongs to the TUI, so records go to a file only.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::WriteLogger;

pub const DEFAULT_LOG_PATH: &str = "./discovery.log";

/// Installs the global file logger. Failure to create the file is reported on
/// stderr and leaves logging disabled.
pub fn initialize(path: &Path, level: Option<LevelFilter>) {
    let level = level.unwrap_or_else(discovery_logging::default_level);

    match File::create(path) {
        Ok(file) => {
            let _ = WriteLogger::init(level, discovery_logging::workspace_config(), file);
        }
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
        }
    }
}
