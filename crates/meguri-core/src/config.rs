use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::MeguriError;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub wheel: WheelConfig,
    pub audio: AudioConfig,
    pub api: ApiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelConfig {
    pub spin_duration_ms: u64,
    /// Degrees every spin turns at least.
    pub min_rotation: f64,
    /// Most entries placed on the wheel; larger selections are sampled.
    pub candidate_limit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioConfig {
    pub play_clicks: bool,
    pub play_fanfare: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub anilist_url: String,
    pub animethemes_url: String,
}

impl AppConfig {
    /// Load config: the user file if it exists, otherwise built-in defaults.
    pub fn load() -> Result<Self, MeguriError> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, falling back to defaults when it is missing.
    pub fn load_from(path: &Path) -> Result<Self, MeguriError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No user config, using defaults");
            return Self::defaults();
        }
        let user_str = std::fs::read_to_string(path)?;
        toml::from_str(&user_str).map_err(|e| MeguriError::Config(e.to_string()))
    }

    /// Save current config to `path`.
    pub fn save_to(&self, path: &Path) -> Result<(), MeguriError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| MeguriError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("", "", "meguri")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    fn defaults() -> Result<Self, MeguriError> {
        toml::from_str(DEFAULT_CONFIG).map_err(|e| MeguriError::Config(e.to_string()))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}
