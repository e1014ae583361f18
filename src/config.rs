//! Client configuration loaded from `~/.config/simple-social/config.toml`.
//!
//! ```toml
//! api_url = "https://social.example.com"
//! timeout_secs = 60
//! ```
//!
//! `SOCIAL_API_URL` overrides the file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Default API location (the development server).
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable overriding `api_url`.
pub const API_URL_ENV: &str = "SOCIAL_API_URL";

/// Directory name under the user's config dir.
pub const APP_DIR: &str = "simple-social";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Base URL of the REST API.
    pub api_url: String,
    /// Per-request timeout.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load from the default location, then apply the environment override.
    ///
    /// A missing file is not an error.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&config_path())?;
        config.apply_env(std::env::var(API_URL_ENV).ok());
        Ok(config)
    }

    /// Load from an explicit path. Returns defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("invalid TOML in {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("invalid settings in {}", path.display()))?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be at least 1");
        }
        Ok(())
    }

    fn apply_env(&mut self, api_url: Option<String>) {
        if let Some(url) = api_url.filter(|u| !u.is_empty()) {
            self.api_url = url;
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Per-user directory holding config and session files.
pub fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Return the path to the config file.
pub fn config_path() -> PathBuf {
    app_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api_url, "http://localhost:8000");
    }

    #[test]
    fn parse_partial_config() {
        let config: Config = toml::from_str(r#"api_url = "https://api.example.com""#).unwrap();
        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_url = [").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("invalid TOML"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "timeout_secs = 0\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("invalid settings"));
        assert!(format!("{err:#}").contains("timeout_secs must be at least 1"));
    }

    #[test]
    fn timeout_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "timeout_secs = 5\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn env_override_wins_unless_empty() {
        let mut config = Config::default();
        config.apply_env(Some(String::new()));
        assert_eq!(config.api_url, DEFAULT_API_URL);
        config.apply_env(Some("https://other.example".to_string()));
        assert_eq!(config.api_url, "https://other.example");
    }
}
