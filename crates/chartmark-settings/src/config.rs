//! Configuration for the annotation engine.
//!
//! A config carries the theme used for unstyled shapes and the pointer
//! tolerances used while picking and resizing. Files may be JSON or TOML,
//! chosen by extension, and every field is defaulted so partial files load.

use std::path::{Path, PathBuf};

use chartmark_core::constants::{HANDLE_TOLERANCE, HIT_TOLERANCE, MIN_SIZE};
use chartmark_core::Theme;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Pointer tolerances, in surface pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Pick radius for hit testing and erasing.
    pub hit_tolerance: f64,
    /// Pick radius for selection resize handles.
    pub handle_tolerance: f64,
    /// Smallest width/height a resize drag may produce.
    pub min_size: f64,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            hit_tolerance: HIT_TOLERANCE,
            handle_tolerance: HANDLE_TOLERANCE,
            min_size: MIN_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn for_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: Theme,
    pub interaction: InteractionSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<platform config dir>/chartmark/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform config directory".to_string())
        })?;
        Ok(dir.join("chartmark").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::for_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        if let Err(e) = config.validate() {
            warn!("Rejected config {}: {}", path.display(), e);
            return Err(e.into());
        }
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads `path`, or returns the defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Save config to file (JSON or TOML), creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = Format::for_path(path)?;

        let content = match format {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let i = &self.interaction;
        for (key, value) in [
            ("interaction.hit_tolerance", i.hit_tolerance),
            ("interaction.handle_tolerance", i.handle_tolerance),
            ("interaction.min_size", i.min_size),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValueOutOfRange {
                    key: key.to_string(),
                    value: value.to_string(),
                });
            }
        }

        let t = &self.theme;
        for (key, color) in [
            ("theme.stroke", &t.stroke),
            ("theme.fill", &t.fill),
            ("theme.text", &t.text),
            ("theme.projection", &t.projection),
            ("theme.selection", &t.selection),
        ] {
            if color.trim().is_empty() {
                return Err(ConfigError::EmptyColor(key.to_string()));
            }
        }

        Ok(())
    }
}
