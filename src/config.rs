//! Configuration management
//!
//! Loads user preferences from `<config dir>/name-roulette/config.json`.
//! The name list itself is never persisted.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to write config: {0}")]
    Write(#[source] std::io::Error),
}

/// User configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Milliseconds between animation frames
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,

    /// Longest wedge label drawn on the wheel, in characters
    #[serde(default = "default_label_width")]
    pub label_width: usize,

    /// Where the SVG snapshot is written
    #[serde(default = "default_export_path")]
    pub export_path: PathBuf,
}

fn default_frame_interval_ms() -> u64 {
    16
}

fn default_label_width() -> usize {
    12
}

fn default_export_path() -> PathBuf {
    PathBuf::from("roulette.svg")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_interval_ms: default_frame_interval_ms(),
            label_width: default_label_width(),
            export_path: default_export_path(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> PathBuf {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("name-roulette").join("config.json"))
            .unwrap_or_else(|| std::env::temp_dir().join("name-roulette-config.json"))
    }

    /// Frame interval as a duration, never shorter than 1ms
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }

    /// Load configuration, falling back to defaults on any error.
    ///
    /// A default file is written on first run so it can be edited.
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            let config = Self::default();
            if let Err(e) = config.save_to(&path) {
                log::warn!("{} ({})", e, path.display());
            }
            return config;
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{} ({}), using defaults", e, path.display());
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("No config at {}", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(ConfigError::Read)?;
        let config = serde_json::from_str(&contents)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::Write)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).map_err(ConfigError::Write)
    }
}
