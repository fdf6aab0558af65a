use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use miner_core::ViewMode;
use miner_engine::{resolve_base_url, ClientSettings, ExecutorSettings, PollSettings};
use miner_logging::{miner_info, miner_warn};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILENAME: &str = "miner.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid preferences: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("could not serialize preferences: {0}")]
    Serialize(#[from] ron::Error),
}

/// User preferences persisted between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: Option<String>,
    /// Search API credentials, sent in this order.
    pub api_keys: Vec<String>,
    pub auto_search_on_navigation: bool,
    pub view_mode: ViewMode,
    pub poll_interval_ms: u64,
    pub search_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            api_keys: Vec::new(),
            auto_search_on_navigation: true,
            view_mode: ViewMode::default(),
            poll_interval_ms: PollSettings::default().interval.as_millis() as u64,
            search_delay_ms: ExecutorSettings::default().warmup_delay.as_millis() as u64,
        }
    }
}

impl AppConfig {
    /// Reads preferences; a missing or broken file yields defaults.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(Some(config)) => {
                miner_info!("Loaded preferences from {:?}", path);
                config
            }
            Ok(None) => Self::default(),
            Err(err) => {
                miner_warn!("Ignoring preferences at {:?}: {}", path, err);
                Self::default()
            }
        }
    }

    pub fn try_load(path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(ron::from_str(&content)?))
    }

    /// Writes a temp file next to `path` and renames it into place.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let pretty = ron::ser::PrettyConfig::new();
        let content = ron::ser::to_string_pretty(self, pretty)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;
        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;
        tmp.persist(path).map_err(|err| ConfigError::Io(err.error))?;
        Ok(())
    }

    pub fn client_settings(&self, base_url_override: Option<&str>, host: &str) -> ClientSettings {
        let configured = base_url_override.or(self.api_base_url.as_deref());
        ClientSettings::with_base_url(resolve_base_url(configured, host))
    }

    pub fn executor_settings(&self) -> ExecutorSettings {
        ExecutorSettings {
            warmup_delay: Duration::from_millis(self.search_delay_ms),
        }
    }

    pub fn poll_settings(&self) -> PollSettings {
        PollSettings {
            // Never poll more often than every 100 ms.
            interval: Duration::from_millis(self.poll_interval_ms.max(100)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(DEFAULT_CONFIG_FILENAME);
        assert!(AppConfig::try_load(&path).expect("load").is_none());
        assert_eq!(AppConfig::load(&path), AppConfig::default());
    }

    #[test]
    fn save_then_load_keeps_key_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join(DEFAULT_CONFIG_FILENAME);
        let config = AppConfig {
            api_base_url: Some("https://api.example.com/api".to_string()),
            api_keys: vec!["second".to_string(), "first".to_string()],
            auto_search_on_navigation: false,
            view_mode: ViewMode::List,
            poll_interval_ms: 2000,
            search_delay_ms: 0,
        };

        config.save(&path).expect("save");
        config.save(&path).expect("overwrite");
        assert_eq!(AppConfig::try_load(&path).expect("load"), Some(config));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(DEFAULT_CONFIG_FILENAME);
        fs::write(&path, "(api_keys: [\"k1\"], view_mode: list)").expect("write");

        let config = AppConfig::load(&path);
        assert_eq!(config.api_keys, vec!["k1".to_string()]);
        assert_eq!(config.view_mode, ViewMode::List);
        assert_eq!(config.poll_interval_ms, 1200);
        assert!(config.auto_search_on_navigation);
    }

    #[test]
    fn broken_file_is_reported_and_ignored() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(DEFAULT_CONFIG_FILENAME);
        fs::write(&path, "(api_keys: ").expect("write");

        assert!(matches!(AppConfig::try_load(&path), Err(ConfigError::Parse(_))));
        assert_eq!(AppConfig::load(&path), AppConfig::default());
    }

    #[test]
    fn override_beats_configured_base_url() {
        let config = AppConfig {
            api_base_url: Some("https://configured.example/api".to_string()),
            ..AppConfig::default()
        };
        assert_eq!(
            config.client_settings(Some("http://override/api/"), "localhost").base_url,
            "http://override/api"
        );
        assert_eq!(
            config.client_settings(None, "localhost").base_url,
            "https://configured.example/api"
        );
    }
}
