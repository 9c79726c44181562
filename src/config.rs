//! Configuration management
//!
//! Configuration lives in `<config dir>/chapterbar/config.toml`. Every field
//! has a default, so a missing file or a partial file both load. Set
//! `CHAPTERBAR_CONFIG` to point at a different file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "CHAPTERBAR_CONFIG";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player: PlayerConfig,
    pub timeline: TimelineConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

/// Seek behaviour and event loop cadence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Seek step for arrow keys and double-tap, in seconds
    pub seek_step_secs: f64,
    /// Maximum gap between the two taps of a double-tap, in milliseconds
    pub double_tap_ms: u64,
    /// Resume playback after clicking a timeline marker or segment
    pub resume_on_timeline_click: bool,
    /// Time update interval, in milliseconds
    pub tick_ms: u64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            seek_step_secs: 10.0,
            double_tap_ms: 300,
            resume_on_timeline_click: false,
            tick_ms: 100,
        }
    }
}

/// Timeline layout tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Distance markers keep from the track edges, in percent
    pub safe_edge_percent: f64,
    /// Minimum segment width, in track cells
    pub min_segment_width: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            safe_edge_percent: 0.6,
            min_segment_width: 1.0,
        }
    }
}

/// Appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme name: "default", "classic" or "ocean"
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
        }
    }
}

/// Logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    /// Log file; defaults to the user data directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LogConfig {
    /// Resolved log file path.
    pub fn file_path(&self) -> Option<PathBuf> {
        self.file.clone().or_else(|| {
            dirs::data_local_dir().map(|dir| dir.join("chapterbar").join("chapterbar.log"))
        })
    }
}

impl Config {
    /// Path of the configuration file.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("chapterbar").join("config.toml"))
    }

    /// Load the configuration, falling back to defaults if the file is missing.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load the configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config.sanitized())
    }

    /// Save the configuration to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save the configuration to a specific file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Replace out-of-range values with their defaults.
    fn sanitized(mut self) -> Self {
        let defaults = Config::default();

        if !(self.player.seek_step_secs.is_finite() && self.player.seek_step_secs > 0.0) {
            warn!(value = self.player.seek_step_secs, "invalid player.seek_step_secs, using default");
            self.player.seek_step_secs = defaults.player.seek_step_secs;
        }
        if self.player.tick_ms == 0 {
            warn!("player.tick_ms must be positive, using default");
            self.player.tick_ms = defaults.player.tick_ms;
        }
        let edge = self.timeline.safe_edge_percent;
        if !(edge.is_finite() && (0.0..50.0).contains(&edge)) {
            warn!(value = edge, "invalid timeline.safe_edge_percent, using default");
            self.timeline.safe_edge_percent = defaults.timeline.safe_edge_percent;
        }
        let min_width = self.timeline.min_segment_width;
        if !(min_width.is_finite() && min_width >= 0.0) {
            warn!(value = min_width, "invalid timeline.min_segment_width, using default");
            self.timeline.min_segment_width = defaults.timeline.min_segment_width;
        }

        self
    }
}
