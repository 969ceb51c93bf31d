// SPDX-License-Identifier: MPL-2.0
//! This module handles the library's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_element::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.message.duration_ms = Some(5000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.message.duration_ms, Some(5000));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedElement";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub message: MessageConfig,
    #[serde(default)]
    pub z_index: ZIndexConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Defaults applied to every message that does not override them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageConfig {
    #[serde(default)]
    pub duration_ms: Option<u64>,
    #[serde(default)]
    pub offset: Option<f32>,
    #[serde(default)]
    pub show_close: Option<bool>,
    #[serde(default)]
    pub transition: Option<String>,
}

impl MessageConfig {
    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
            .unwrap_or(DEFAULT_MESSAGE_DURATION_MS)
            .clamp(MIN_MESSAGE_DURATION_MS, MAX_MESSAGE_DURATION_MS)
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
            .filter(|offset| offset.is_finite() && *offset >= 0.0)
            .unwrap_or(DEFAULT_MESSAGE_OFFSET)
    }

    #[must_use]
    pub fn show_close(&self) -> bool {
        self.show_close.unwrap_or(false)
    }

    #[must_use]
    pub fn transition(&self) -> &str {
        self.transition.as_deref().unwrap_or(DEFAULT_TRANSITION_NAME)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZIndexConfig {
    #[serde(default)]
    pub base: Option<u32>,
}

impl ZIndexConfig {
    #[must_use]
    pub fn base(&self) -> u32 {
        self.base
            .unwrap_or(DEFAULT_Z_INDEX_BASE)
            .min(MAX_Z_INDEX_BASE)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
