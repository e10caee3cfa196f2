//! Configuration for the editor shell.
//!
//! This module provides TOML-based configuration file loading. The default
//! path is `~/.config/vellum/config.toml`. Only presentation settings live
//! here; trust grants are session-scoped and never written to disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("window dimensions must be positive, got {width}x{height}")]
    InvalidWindowSize { width: f64, height: f64 },

    #[error("background must be a #rrggbb color, got {0}")]
    InvalidBackground(String),

    #[error("log_level must be one of: trace, debug, info, warn, error; got {0}")]
    InvalidLogLevel(String),
}

/// Valid log level values for tracing configuration.
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Main configuration structure for the editor shell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ShellConfig {
    /// Main window appearance and geometry.
    pub window: WindowConfig,

    /// Logging configuration.
    pub log: LogConfig,
}

/// Window appearance and geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial window width in logical pixels.
    pub width: f64,

    /// Initial window height in logical pixels.
    pub height: f64,

    /// Background color painted before the entry document loads.
    pub background: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Logging level (trace, debug, info, warn, error).
    pub level: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            background: "#1e1e1e".to_string(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Returns the default configuration file path.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("vellum")
        .join("config.toml")
}

impl ShellConfig {
    /// Load configuration from the default path, falling back to defaults
    /// if no file exists.
    pub fn load_or_default() -> Result<Self> {
        let path = default_config_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            tracing::debug!("no config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Load and validate configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(ConfigError::InvalidWindowSize {
                width: self.window.width,
                height: self.window.height,
            });
        }

        if self.window.background_rgb().is_none() {
            return Err(ConfigError::InvalidBackground(
                self.window.background.clone(),
            ));
        }

        if !VALID_LOG_LEVELS.contains(&self.log.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(self.log.level.clone()));
        }

        Ok(())
    }
}

impl WindowConfig {
    /// Parse the configured background into RGB components.
    pub fn background_rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.background.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((r, g, b))
    }
}
