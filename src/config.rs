//! Configuration management for scriptcut
//!
//! Settings live in `<config dir>/scriptcut/config.toml`. Every field has a
//! default, so a missing file or a partial one is fine.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Slowest playback speed multiplier.
pub const MIN_SPEED: f64 = 0.1;
/// Fastest playback speed multiplier.
pub const MAX_SPEED: f64 = 16.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub capture: CaptureConfig,
    #[serde(default)]
    pub playback: PlaybackConfig,
}

/// How capture files are named and written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// First line written to saved session files
    pub header: String,
    pub session_extension: String,
    pub timing_extension: String,
    /// Appended to the file name of the previous version on save
    pub backup_suffix: String,
    pub keep_backups: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            header: "Script edited by scriptcut".to_string(),
            session_extension: "session".to_string(),
            timing_extension: "timing".to_string(),
            backup_suffix: ".bak".to_string(),
            keep_backups: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Longest pause between two frames, in milliseconds
    pub max_sleep_ms: u64,
    pub speed: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            max_sleep_ms: 250,
            speed: 1.0,
        }
    }
}

impl PlaybackConfig {
    pub fn max_sleep(&self) -> Duration {
        Duration::from_millis(self.max_sleep_ms)
    }

    /// Configured speed, clamped to the supported range.
    pub fn speed(&self) -> f64 {
        clamp_speed(self.speed)
    }
}

/// Clamp a speed multiplier to `[MIN_SPEED, MAX_SPEED]`.
///
/// Non-finite values fall back to normal speed.
pub fn clamp_speed(speed: f64) -> f64 {
    if speed.is_finite() {
        speed.clamp(MIN_SPEED, MAX_SPEED)
    } else {
        1.0
    }
}

impl Config {
    /// `<config dir>/scriptcut/config.toml`
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("scriptcut").join("config.toml"))
    }

    /// Load from the default location, or defaults if there is no file.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {}", dir.display()))?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        // Write to a temp file then rename over the target
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, &contents)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path)
            .with_context(|| format!("Failed to rename config file to {}", path.display()))?;

        Ok(())
    }
}
