//! Configuration management for Scanwedge
//!
//! Provides persistent configuration that is automatically saved to and loaded
//! from a platform-specific config file.
//!
//! ## Config File Locations
//!
//! | Platform | Path |
//! |----------|------|
//! | Linux | `~/.config/scanwedge/config.toml` |
//! | macOS | `~/Library/Application Support/scanwedge/config.toml` |
//! | Windows | `%APPDATA%\scanwedge\config.toml` |
//!
//! ## Example
//!
//! ```no_run
//! use scanwedge::Config;
//!
//! // Load existing config or use defaults
//! let mut config = Config::load().unwrap_or_default();
//!
//! // Modify settings
//! config.decoder.min_length = 8;
//!
//! // Save to disk
//! config.save().expect("Failed to save config");
//! ```

use crate::scanner::DecoderOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Error type for configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to determine config directory
    #[error("Could not determine config directory")]
    NoConfigDir,
    /// IO error reading or writing config file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Failed to parse config file
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize config
    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Returns the path to the config file.
///
/// Creates the config directory if it doesn't exist.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    let app_dir = config_dir.join("scanwedge");

    if !app_dir.exists() {
        fs::create_dir_all(&app_dir)?;
    }

    Ok(app_dir.join("config.toml"))
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Scan decoder settings
    pub decoder: DecoderConfig,
    /// UI settings
    pub ui: UiConfig,
}

/// Scan decoder configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Silence gap in ms that ends a scan
    pub timeout_ms: u64,
    /// Minimum accepted token length in characters
    pub min_length: usize,
    /// Suppress the default effect of keystrokes the decoder buffers
    pub prevent_default: bool,
    /// Master on/off switch
    pub enabled: bool,
    /// Suppress decoding while a text-entry control is focused
    pub pause_on_input_focus: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 50,
            min_length: 4,
            prevent_default: true,
            enabled: true,
            pause_on_input_focus: true,
        }
    }
}

impl DecoderConfig {
    /// Bridge to the decoder's runtime options
    pub fn options(&self) -> DecoderOptions {
        DecoderOptions {
            timeout: Duration::from_millis(self.timeout_ms),
            min_length: self.min_length,
            prevent_default: self.prevent_default,
            enabled: self.enabled,
            pause_on_input_focus: self.pause_on_input_focus,
        }
    }
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Refresh rate for UI updates (in Hz)
    pub refresh_rate_hz: u32,
    /// Maximum number of scans kept in the on-screen history
    pub history_limit: usize,
    /// Color theme (dark/light)
    pub theme: Theme,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_rate_hz: 60,
            history_limit: 100,
            theme: Theme::Dark,
        }
    }
}

/// Color theme options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Config {
    /// Load configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a specific path.
    ///
    /// Useful for testing or using custom config locations.
    pub fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to the default config file.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = config_path()?;
        self.save_to(&path)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Get UI refresh interval as Duration
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.ui.refresh_rate_hz as u64)
    }
}
