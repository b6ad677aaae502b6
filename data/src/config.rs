pub mod theme;

use std::path::{Path, PathBuf};

use iced_core::Color;
use serde::{Deserialize, Serialize};

use crate::chart::DataRange;
use crate::util::ok_or_default;

pub const CONFIG_FILE: &str = "config.json";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Look-and-feel knobs of a graph. Plain values, no behavior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    #[serde(deserialize_with = "ok_or_default")]
    pub show_dividers: bool,
    pub divider_color: Color,
    #[serde(deserialize_with = "ok_or_default")]
    pub drag_enabled: bool,
    pub tracking_color: Color,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            show_dividers: true,
            divider_color: Color::from_rgb8(211, 211, 211),
            drag_enabled: true,
            tracking_color: Color::from_rgb8(128, 128, 128),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FeedCfg {
    #[serde(deserialize_with = "ok_or_default")]
    pub enabled: bool,
    pub interval_ms: u64,
    /// Data-x advance per tick.
    pub step: f32,
}

impl Default for FeedCfg {
    fn default() -> Self {
        FeedCfg {
            enabled: true,
            interval_ms: 500,
            step: 1.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub range: DataRange,
    pub graph: GraphConfig,
    #[serde(deserialize_with = "ok_or_default")]
    pub feed: FeedCfg,
}

pub fn config_path() -> PathBuf {
    crate::data_path(Some(CONFIG_FILE))
}

/// Reads the config at `path`. A missing file yields the defaults.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let config = serde_json::from_str(&contents)?;
            log::info!("Loaded config from {}", path.display());
            Ok(config)
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            log::info!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
        Err(err) => Err(err.into()),
    }
}
