mod platform;

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Terminal dashboard for exploring and enriching marketing data.
#[derive(Debug, Parser)]
#[command(name = "discovery", version, about)]
pub struct Cli {
    /// RON configuration file; a missing file means built-in defaults
    #[arg(long, default_value = platform::config::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Overrides the query endpoint base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Where log records are written
    #[arg(long, default_value = platform::logging::DEFAULT_LOG_PATH)]
    pub log_file: PathBuf,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, value_parser = parse_log_level)]
    pub log_level: Option<LevelFilter>,
}

fn parse_log_level(raw: &str) -> Result<LevelFilter, String> {
    discovery_logging::parse_level(raw).ok_or_else(|| {
        format!("unknown log level '{raw}' (expected off, error, warn, info, debug or trace)")
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    platform::run_app(cli)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_flag_accepts_known_names() {
        let cli = Cli::try_parse_from(["discovery", "--log-level", "Debug"]).unwrap();
        assert_eq!(cli.log_level, Some(LevelFilter::Debug));
        let cli = Cli::try_parse_from(["discovery"]).unwrap();
        assert_eq!(cli.log_level, None);
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let err = Cli::try_parse_from(["discovery", "--log-level", "verbose"]).unwrap_err();
        assert!(err.to_string().contains("unknown log level 'verbose'"));
    }
}
