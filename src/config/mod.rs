// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[viewport]` - Mobile/desktop breakpoint
//! - `[gesture]` - Swipe and tap thresholds
//! - `[reviews]`, `[app_screens]`, `[feature_cards]` - Per-carousel timing and geometry
//! - `[diagnostics]` - Event buffer capacity
//!
//! Every field is optional. Missing values fall back to the constants in
//! [`defaults`] when the carousels are built, and out-of-range values are
//! clamped there.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_SHOWCASE_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_showcase::config::{self, Config};
//! use std::path::Path;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Slow the review carousel down
//! config.reviews.autoplay_interval_ms = Some(6000);
//!
//! config::save_to_path(&config, Path::new("settings.toml")).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Viewport classification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewportConfig {
    /// Widths at or below this are laid out as mobile.
    #[serde(
        default = "default_mobile_breakpoint",
        skip_serializing_if = "Option::is_none"
    )]
    pub mobile_breakpoint_px: Option<f32>,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: default_mobile_breakpoint(),
        }
    }
}

/// Touch gesture classification thresholds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_swipe_distance_px: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_swipe_duration_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_vertical_drift_px: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tap_tolerance_px: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_deadband_px: Option<f32>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_swipe_distance_px: Some(DEFAULT_MIN_SWIPE_DISTANCE_PX),
            max_swipe_duration_ms: Some(DEFAULT_MAX_SWIPE_DURATION_MS),
            max_vertical_drift_px: Some(DEFAULT_MAX_VERTICAL_DRIFT_PX),
            tap_tolerance_px: Some(DEFAULT_TAP_TOLERANCE_PX),
            scroll_deadband_px: Some(DEFAULT_SCROLL_DEADBAND_PX),
        }
    }
}

/// Settings for one carousel section.
///
/// The same shape is used for all three sections; fields that a section does
/// not use (strip geometry on the slideshows) are ignored there.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CarouselConfig {
    /// Set to `false` to leave the section unmounted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay_interval_ms: Option<u64>,

    /// Transition lock window. `0` disables the lock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gesture_cooldown_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_width_px: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_gap_px: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap_tuning: Option<f32>,
}

impl CarouselConfig {
    fn reviews() -> Self {
        Self {
            enabled: Some(true),
            autoplay_interval_ms: Some(DEFAULT_REVIEWS_INTERVAL_MS),
            transition_ms: Some(0),
            gesture_cooldown_ms: Some(DEFAULT_GESTURE_COOLDOWN_MS),
            card_width_px: Some(DEFAULT_CARD_WIDTH_PX),
            card_gap_px: Some(DEFAULT_CARD_GAP_PX),
            gap_tuning: Some(DEFAULT_GAP_TUNING),
        }
    }

    fn app_screens() -> Self {
        Self {
            enabled: Some(true),
            autoplay_interval_ms: Some(DEFAULT_APP_SCREENS_INTERVAL_MS),
            transition_ms: Some(DEFAULT_TRANSITION_MS),
            gesture_cooldown_ms: Some(DEFAULT_GESTURE_COOLDOWN_MS),
            ..Self::default()
        }
    }

    fn feature_cards() -> Self {
        Self {
            enabled: Some(true),
            autoplay_interval_ms: Some(DEFAULT_FEATURE_CARDS_INTERVAL_MS),
            transition_ms: Some(DEFAULT_TRANSITION_MS),
            gesture_cooldown_ms: Some(DEFAULT_FEATURE_CARDS_COOLDOWN_MS),
            ..Self::default()
        }
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub viewport: ViewportConfig,

    #[serde(default)]
    pub gesture: GestureConfig,

    #[serde(default = "CarouselConfig::reviews")]
    pub reviews: CarouselConfig,

    #[serde(default = "CarouselConfig::app_screens")]
    pub app_screens: CarouselConfig,

    #[serde(default = "CarouselConfig::feature_cards")]
    pub feature_cards: CarouselConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            viewport: ViewportConfig::default(),
            gesture: GestureConfig::default(),
            reviews: CarouselConfig::reviews(),
            app_screens: CarouselConfig::app_screens(),
            feature_cards: CarouselConfig::feature_cards(),
            diagnostics: DiagnosticsConfig::default(),
        }
    }
}

fn default_mobile_breakpoint() -> Option<f32> {
    Some(DEFAULT_MOBILE_BREAKPOINT_PX)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
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
/// default config with a warning message key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (
                        Config::default(),
                        Some("warning-config-load-error".to_string()),
                    );
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

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        config.general.theme_mode = ThemeMode::Dark;
        config.viewport.mobile_breakpoint_px = Some(900.0);
        config.reviews.autoplay_interval_ms = Some(5000);
        config.feature_cards.enabled = Some(false);

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn missing_sections_take_per_carousel_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"fr\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
        assert_eq!(
            loaded.reviews.autoplay_interval_ms,
            Some(DEFAULT_REVIEWS_INTERVAL_MS)
        );
        assert_eq!(
            loaded.feature_cards.gesture_cooldown_ms,
            Some(DEFAULT_FEATURE_CARDS_COOLDOWN_MS)
        );
        assert_eq!(loaded.reviews.transition_ms, Some(0));
    }

    #[test]
    fn partial_section_leaves_other_fields_unset() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[app_screens]\nautoplay_interval_ms = 2500\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.app_screens.autoplay_interval_ms, Some(2500));
        assert_eq!(loaded.app_screens.transition_ms, None);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        save_to_path(&Config::default(), &config_path).expect("save");

        let content = fs::read_to_string(&config_path).expect("read");
        for section in ["[viewport]", "[gesture]", "[reviews]", "[app_screens]", "[feature_cards]"] {
            assert!(content.contains(section), "missing {section}");
        }
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[reviews\nbroken").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("warning-config-load-error"));
    }

    #[test]
    fn saved_file_is_found_by_load_with_override() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.gesture.min_swipe_distance_px = Some(64.0);

        save_to_path(&config, &temp_dir.path().join(CONFIG_FILE)).expect("save");
        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(loaded.gesture.min_swipe_distance_px, Some(64.0));
    }

    #[test]
    fn theme_mode_uses_kebab_case() {
        let parsed: Config = toml::from_str("[general]\ntheme_mode = \"light\"\n").expect("parse");
        assert_eq!(parsed.general.theme_mode, ThemeMode::Light);
    }
}
