//! Configuration for the status board
//!
//! Settings load from `~/.config/upwatch/config.toml`. The API key can
//! also come from the `UPWATCH_API_KEY` environment variable (a `.env`
//! file works too; the binary loads it on startup).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::client::DEFAULT_API_URL;

/// Environment variable consulted when the config file has no API key
const API_KEY_ENV: &str = "UPWATCH_API_KEY";

/// Tool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// UptimeRobot API key
    pub api_key: Option<String>,

    /// Endpoint for the `getMonitors` call
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Start in the all-monitors view instead of problems only (default: false)
    #[serde(default)]
    pub show_all: bool,

    /// Bypass the cache on the first load (default: false)
    #[serde(default)]
    pub force_refresh: bool,

    /// Cache freshness window in seconds (default: 60)
    #[serde(default = "default_cache_seconds")]
    pub cache_seconds: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_cache_seconds() -> u64 {
    60
}

impl Config {
    /// Load configuration from file, or use defaults if no file exists
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(|p| p.to_path_buf()).or_else(|| {
            // Try the default location
            let home = dirs::home_dir()?;
            let default_path = home.join(".config/upwatch/config.toml");
            if default_path.exists() {
                Some(default_path)
            } else {
                None
            }
        });

        if let Some(path) = config_path {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;

            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    /// The API key from the config, or the environment as a fallback
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: default_api_url(),
            show_all: false,
            force_refresh: false,
            cache_seconds: default_cache_seconds(),
        }
    }
}
