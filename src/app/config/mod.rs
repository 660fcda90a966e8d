// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[toast]` - Toast animation, drag and stacking tuning
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `TOAST_STACK_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use toast_stack::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.general.language = Some("ru".to_string());
//! config.toast.animate_duration_ms = Some(300);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Notification key shown when the settings file exists but cannot be read.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "ru").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Toast presentation tuning.
///
/// Every field is optional; missing values fall back to [`defaults`] and
/// out-of-range values are clamped when converted to
/// [`crate::ui::toasts::Settings`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Duration of show, hide, recede and spring-back animations.
    #[serde(
        default = "default_animate_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub animate_duration_ms: Option<u64>,

    /// Drag divisor when moving toward the dismiss edge.
    #[serde(
        default = "default_toward_dismiss_damping",
        skip_serializing_if = "Option::is_none"
    )]
    pub toward_dismiss_damping: Option<f32>,

    /// Drag divisor when moving back past neutral.
    #[serde(
        default = "default_toward_neutral_damping",
        skip_serializing_if = "Option::is_none"
    )]
    pub toward_neutral_damping: Option<f32>,

    /// Fraction of the toast height a release must pass to dismiss.
    #[serde(
        default = "default_dismiss_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub dismiss_threshold: Option<f32>,

    /// Vertical offset of receded toasts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receded_offset: Option<f32>,

    /// Width removed from receded toasts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receded_inset: Option<f32>,

    /// Scale stack-enabled toasts enter from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entering_scale: Option<f32>,

    /// Scale stack-enabled toasts leave to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exiting_scale: Option<f32>,

    /// Opacity toasts fade to while leaving.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exiting_alpha: Option<f32>,

    /// Auto-dismiss deadline used by presets when none is given.
    #[serde(
        default = "default_preset_deadline_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub preset_deadline_secs: Option<u32>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            animate_duration_ms: default_animate_duration_ms(),
            toward_dismiss_damping: default_toward_dismiss_damping(),
            toward_neutral_damping: default_toward_neutral_damping(),
            dismiss_threshold: default_dismiss_threshold(),
            receded_offset: Some(DEFAULT_RECEDED_OFFSET),
            receded_inset: Some(DEFAULT_RECEDED_INSET),
            entering_scale: Some(DEFAULT_ENTERING_SCALE),
            exiting_scale: Some(DEFAULT_EXITING_SCALE),
            exiting_alpha: Some(DEFAULT_EXITING_ALPHA),
            preset_deadline_secs: default_preset_deadline_secs(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Toast presentation settings.
    #[serde(default)]
    pub toast: ToastConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_animate_duration_ms() -> Option<u64> {
    Some(DEFAULT_ANIMATE_DURATION_MS)
}

fn default_toward_dismiss_damping() -> Option<f32> {
    Some(DEFAULT_TOWARD_DISMISS_DAMPING)
}

fn default_toward_neutral_damping() -> Option<f32> {
    Some(DEFAULT_TOWARD_NEUTRAL_DAMPING)
}

fn default_dismiss_threshold() -> Option<f32> {
    Some(DEFAULT_DISMISS_THRESHOLD)
}

fn default_preset_deadline_secs() -> Option<u32> {
    Some(DEFAULT_PRESET_DEADLINE_SECS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
