//! Configuration handling for the client

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default backend address (the Android emulator's alias for the host machine)
pub const DEFAULT_API_BASE_URL: &str = "http://10.0.2.2:8080/api/";

/// Environment variable overriding the backend address
pub const API_URL_ENV: &str = "ZONALIBROS_API_URL";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User configuration for the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ClientConfig {
    /// Base URL of the REST backend
    pub api_base_url: Option<String>,
    /// Per-request timeout applied by the HTTP gateway
    pub request_timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("cl", "duoc", "zonalibros")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let config = Self::load_from(Self::config_path().as_deref())?;
        let config = config.with_env_override(std::env::var(API_URL_ENV).ok());
        tracing::debug!("Loaded config: {config:?}");
        Ok(config)
    }

    /// Read the config file at `path`; a missing file yields the defaults
    fn load_from(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(path)?;
                Ok(serde_json::from_str(&content)?)
            }
            _ => Ok(Self::default()),
        }
    }

    fn with_env_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.api_base_url = Some(url);
        }
        self
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    pub fn base_url(&self) -> &str {
        self.api_base_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}
