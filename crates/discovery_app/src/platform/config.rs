//! Application configuration: RON file, environment overrides, CLI flags.
//!
//! Precedence is flag > environment > file > built-in default.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use discovery_core::DEFAULT_NOTICE_TICKS;
use discovery_engine::{DispatchSettings, EngineSettings};
use discovery_logging::discovery_info;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "./discovery.ron";
pub const ENV_BASE_URL: &str = "DISCOVERY_API_BASE_URL";
pub const ENV_TOKEN: &str = "DISCOVERY_API_TOKEN";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub pipeline: PipelineConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub query_path: String,
    pub timeout_ms: u64,
    pub headers: BTreeMap<String, String>,
    pub bearer_token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        let dispatch = DispatchSettings::default();
        Self {
            base_url: dispatch.base_url,
            query_path: dispatch.query_path,
            timeout_ms: dispatch.timeout.as_millis() as u64,
            headers: BTreeMap::new(),
            bearer_token: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub tick_interval_ms: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Period of `Msg::Tick`, which also drives redraw throttling.
    pub tick_rate_ms: u64,
    pub notice_ticks: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            notice_ticks: DEFAULT_NOTICE_TICKS,
        }
    }
}

impl AppConfig {
    /// Reads `path`. A missing file yields defaults; unreadable or malformed files are errors.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                discovery_info!("No config at {:?}; using defaults", path);
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("read config {}", path.display()));
            }
        };

        let config: AppConfig = ron::from_str(&content)
            .with_context(|| format!("parse config {}", path.display()))?;
        discovery_info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Applies environment overrides through `lookup` (normally `std::env::var`).
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url;
        }
        if let Some(token) = lookup(ENV_TOKEN).filter(|v| !v.trim().is_empty()) {
            self.api.bearer_token = Some(token);
        }
    }

    pub fn apply_flags(&mut self, base_url: Option<&str>) {
        if let Some(url) = base_url {
            self.api.base_url = url.to_string();
        }
    }

    /// File, then environment, then flags.
    pub fn resolve(path: &Path, base_url_flag: Option<&str>) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env(|key| std::env::var(key).ok());
        config.apply_flags(base_url_flag);
        Ok(config)
    }

    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            dispatch: DispatchSettings {
                base_url: self.api.base_url.clone(),
                query_path: self.api.query_path.clone(),
                timeout: Duration::from_millis(self.api.timeout_ms),
                headers: self
                    .api
                    .headers
                    .iter()
                    .map(|(name, value)| (name.clone(), value.clone()))
                    .collect(),
                bearer_token: self.api.bearer_token.clone(),
            },
            tick_interval: Duration::from_millis(self.pipeline.tick_interval_ms.max(1)),
        }
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("absent.ron")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.base_url, "https://Testserver:5001");
        assert_eq!(config.api.timeout_ms, 30_000);
        assert_eq!(config.pipeline.tick_interval_ms, 1_000);
        assert_eq!(config.ui.notice_ticks, 40);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let file = write_config(
            r#"(
                api: (
                    base_url: "http://localhost:8080",
                    headers: { "X-Team": "marketing" },
                    bearer_token: Some("abc"),
                ),
                pipeline: (tick_interval_ms: 250),
            )"#,
        );
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.query_path, "/api/query");
        assert_eq!(config.api.bearer_token.as_deref(), Some("abc"));
        assert_eq!(config.pipeline.tick_interval_ms, 250);
        assert_eq!(config.ui, UiConfig::default());

        let settings = config.engine_settings();
        assert_eq!(settings.tick_interval, Duration::from_millis(250));
        assert_eq!(
            settings.dispatch.headers,
            vec![("X-Team".to_string(), "marketing".to_string())]
        );
        assert_eq!(settings.dispatch.endpoint(), "http://localhost:8080/api/query");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = write_config("(api: (timeout_ms: \"soon\"))");
        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parse config"));
    }

    #[test]
    fn flag_beats_env_beats_file() {
        let file = write_config(r#"(api: (base_url: "http://from-file"))"#);
        let mut config = AppConfig::load(file.path()).unwrap();

        config.apply_env(|key| match key {
            ENV_BASE_URL => Some("http://from-env".to_string()),
            ENV_TOKEN => Some("env-token".to_string()),
            _ => None,
        });
        assert_eq!(config.api.base_url, "http://from-env");
        assert_eq!(config.api.bearer_token.as_deref(), Some("env-token"));

        config.apply_flags(Some("http://from-flag"));
        assert_eq!(config.api.base_url, "http://from-flag");
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let mut config = AppConfig::default();
        config.apply_env(|_| Some("  ".to_string()));
        assert_eq!(config, AppConfig::default());
    }
}
