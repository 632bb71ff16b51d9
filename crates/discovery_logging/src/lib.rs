#![deny(missing_docs)]
//! Shared logging utilities for the discovery workspace.
//!
//! All crates log through the `discovery_*` macros below so that every record
//! carries the [`TARGET`] target. The app's file logger and the test logger
//! both filter on it, which keeps `reqwest`/`hyper` chatter out of the log.

use std::sync::Once;

use log::LevelFilter;

/// Log target shared by every `discovery_*` macro.
pub const TARGET: &str = "discovery";

/// Environment variable that overrides the level used by [`initialize_for_tests`].
pub const TEST_LEVEL_ENV: &str = "DISCOVERY_TEST_LOG";

/// Logs a trace-level message under the workspace target.
#[macro_export]
macro_rules! discovery_trace {
    ($($arg:tt)*) => {{
        log::trace!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs a debug-level message under the workspace target.
#[macro_export]
macro_rules! discovery_debug {
    ($($arg:tt)*) => {{
        log::debug!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs an info-level message under the workspace target.
#[macro_export]
macro_rules! discovery_info {
    ($($arg:tt)*) => {{
        log::info!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs a warn-level message under the workspace target.
#[macro_export]
macro_rules! discovery_warn {
    ($($arg:tt)*) => {{
        log::warn!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Logs an error-level message under the workspace target.
#[macro_export]
macro_rules! discovery_error {
    ($($arg:tt)*) => {{
        log::error!(target: $crate::TARGET, $($arg)*);
    }};
}

/// Parses a level name (`off`, `error`, `warn`, `info`, `debug`, `trace`).
///
/// Unknown or empty names yield `None`.
pub fn parse_level(raw: &str) -> Option<LevelFilter> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

/// Level used when neither the caller nor the environment picks one.
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Builds the simplelog config shared by the test and app loggers.
pub fn workspace_config() -> simplelog::Config {
    simplelog::ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .add_filter_allow_str(TARGET)
        .build()
}

/// Initializes a terminal logger for tests, once per process.
///
/// Safe to call from every test; later calls are no-ops, as is a call made
/// after some other logger was installed.
pub fn initialize_for_tests() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        use simplelog::{ColorChoice, TermLogger, TerminalMode};

        let level = std::env::var(TEST_LEVEL_ENV)
            .ok()
            .and_then(|raw| parse_level(&raw))
            .unwrap_or_else(default_level);

        let _ = TermLogger::init(
            level,
            workspace_config(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        );
    });
}
