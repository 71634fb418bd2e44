// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file in the config directory.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[catalog]` - Page image directory and accepted file names
//! - `[display]` - Zoom bounds, zoom step and reserved vertical space
//! - `[window]` - Initial window size
//! - `[prefetch]` - Background decoding of neighbouring pages
//!
//! Every key is optional. Missing keys fall back to [`defaults`], and values
//! outside their allowed range are clamped when read through the accessor
//! methods on [`Config`].
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument
//! 3. `KURANOKU_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use kuranoku::config;
//!
//! let (config, _warning) = config::load();
//! let bounds = config.zoom_bounds();
//! assert!(bounds.min() <= bounds.max());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::loader::PrefetchConfig;
use crate::page_state::ZoomBounds;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "tr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Where page images are read from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CatalogConfig {
    /// Directory holding the page images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    /// Accepted file extensions, without the leading dot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,

    /// Only files whose name starts with this prefix are pages (e.g. "image").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_prefix: Option<String>,
}

/// Display and zoom settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_zoom_min", skip_serializing_if = "Option::is_none")]
    pub zoom_min: Option<f64>,

    #[serde(default = "default_zoom_max", skip_serializing_if = "Option::is_none")]
    pub zoom_max: Option<f64>,

    /// Zoom change per zoom-in/zoom-out action.
    #[serde(default = "default_zoom_step", skip_serializing_if = "Option::is_none")]
    pub zoom_step: Option<f64>,

    /// Pixels of window height reserved for controls.
    #[serde(
        default = "default_vertical_chrome",
        skip_serializing_if = "Option::is_none"
    )]
    pub vertical_chrome: Option<u32>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            zoom_min: default_zoom_min(),
            zoom_max: default_zoom_max(),
            zoom_step: default_zoom_step(),
            vertical_chrome: default_vertical_chrome(),
        }
    }
}

/// Initial window geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: Some(DEFAULT_WINDOW_WIDTH),
            height: Some(DEFAULT_WINDOW_HEIGHT),
        }
    }
}

/// Background decoding of neighbouring pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrefetchSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Pages decoded ahead in each direction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_images: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_bytes: Option<usize>,
}

impl Default for PrefetchSection {
    fn default() -> Self {
        Self {
            enabled: Some(true),
            count: Some(DEFAULT_PREFETCH_COUNT),
            max_images: Some(DEFAULT_CACHE_MAX_IMAGES),
            max_bytes: Some(DEFAULT_CACHE_MAX_BYTES),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub prefetch: PrefetchSection,
}

impl Config {
    /// Directory the catalog is read from.
    #[must_use]
    pub fn catalog_directory(&self) -> PathBuf {
        self.catalog
            .directory
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_DIR))
    }

    /// Accepted page extensions, lowercased, without leading dots.
    #[must_use]
    pub fn extensions(&self) -> Vec<String> {
        match &self.catalog.extensions {
            Some(list) if !list.is_empty() => list
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
            _ => DEFAULT_EXTENSIONS.iter().map(|ext| (*ext).to_string()).collect(),
        }
    }

    /// Zoom bounds, or the defaults when the configured pair is unusable.
    #[must_use]
    pub fn zoom_bounds(&self) -> ZoomBounds {
        let min = self.display.zoom_min.unwrap_or(DEFAULT_ZOOM_MIN);
        let max = self.display.zoom_max.unwrap_or(DEFAULT_ZOOM_MAX);
        match ZoomBounds::new(min, max) {
            Ok(bounds) => bounds,
            Err(err) => {
                log::warn!("{err}; using default zoom bounds");
                ZoomBounds::default()
            }
        }
    }

    /// Zoom step clamped to `[MIN_ZOOM_STEP, MAX_ZOOM_STEP]`.
    #[must_use]
    pub fn zoom_step(&self) -> f64 {
        let step = self.display.zoom_step.unwrap_or(DEFAULT_ZOOM_STEP);
        if step.is_finite() {
            step.clamp(MIN_ZOOM_STEP, MAX_ZOOM_STEP)
        } else {
            DEFAULT_ZOOM_STEP
        }
    }

    #[must_use]
    pub fn vertical_chrome(&self) -> u32 {
        self.display
            .vertical_chrome
            .unwrap_or(DEFAULT_VERTICAL_CHROME)
    }

    /// Initial window size, never smaller than the minimum window size.
    #[must_use]
    pub fn window_size(&self) -> (u32, u32) {
        let width = self.window.width.unwrap_or(DEFAULT_WINDOW_WIDTH);
        let height = self.window.height.unwrap_or(DEFAULT_WINDOW_HEIGHT);
        (width.max(MIN_WINDOW_WIDTH), height.max(MIN_WINDOW_HEIGHT))
    }

    #[must_use]
    pub fn prefetch(&self) -> PrefetchConfig {
        if !self.prefetch.enabled.unwrap_or(true) {
            return PrefetchConfig::disabled();
        }
        PrefetchConfig::new(
            self.prefetch.max_bytes.unwrap_or(DEFAULT_CACHE_MAX_BYTES),
            self.prefetch.max_images.unwrap_or(DEFAULT_CACHE_MAX_IMAGES),
            self.prefetch.count.unwrap_or(DEFAULT_PREFETCH_COUNT),
        )
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_zoom_min() -> Option<f64> {
    Some(DEFAULT_ZOOM_MIN)
}

fn default_zoom_max() -> Option<f64> {
    Some(DEFAULT_ZOOM_MAX)
}

fn default_zoom_step() -> Option<f64> {
    Some(DEFAULT_ZOOM_STEP)
}

fn default_vertical_chrome() -> Option<u32> {
    Some(DEFAULT_VERTICAL_CHROME)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
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
/// default config with the i18n key of a warning explaining what went wrong.
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
                    log::warn!("Ignoring {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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
    use crate::error::Error;
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("tr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            catalog: CatalogConfig {
                directory: Some(PathBuf::from("/srv/pages")),
                extensions: Some(vec!["png".into()]),
                name_prefix: Some("image".into()),
            },
            display: DisplayConfig {
                zoom_min: Some(0.2),
                zoom_max: Some(4.0),
                zoom_step: Some(0.25),
                vertical_chrome: Some(200),
            },
            window: WindowConfig {
                width: Some(1000),
                height: Some(1200),
            },
            prefetch: PrefetchSection::default(),
        };
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

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[display\nbroken")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[display]\nzoom_max = 4.0\n").expect("failed to write config");

        let config = load_from_path(&path).expect("failed to load config");

        assert_eq!(config.display.zoom_max, Some(4.0));
        assert_eq!(config.display.zoom_min, Some(DEFAULT_ZOOM_MIN));
        assert_eq!(config.vertical_chrome(), DEFAULT_VERTICAL_CHROME);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn inverted_zoom_bounds_fall_back_to_defaults() {
        let config = Config {
            display: DisplayConfig {
                zoom_min: Some(3.0),
                zoom_max: Some(0.5),
                ..DisplayConfig::default()
            },
            ..Config::default()
        };
        assert_eq!(config.zoom_bounds(), ZoomBounds::default());
    }

    #[test]
    fn zoom_step_is_clamped() {
        let mut config = Config::default();
        config.display.zoom_step = Some(5.0);
        assert_abs_diff_eq!(config.zoom_step(), MAX_ZOOM_STEP);
        config.display.zoom_step = Some(f64::NAN);
        assert_abs_diff_eq!(config.zoom_step(), DEFAULT_ZOOM_STEP);
    }

    #[test]
    fn extensions_are_normalised() {
        let config = Config {
            catalog: CatalogConfig {
                extensions: Some(vec![".PNG".into(), "Jpg".into()]),
                ..CatalogConfig::default()
            },
            ..Config::default()
        };
        assert_eq!(config.extensions(), vec!["png".to_string(), "jpg".to_string()]);
    }

    #[test]
    fn empty_extension_list_uses_defaults() {
        let config = Config {
            catalog: CatalogConfig {
                extensions: Some(Vec::new()),
                ..CatalogConfig::default()
            },
            ..Config::default()
        };
        assert_eq!(config.extensions().len(), DEFAULT_EXTENSIONS.len());
    }

    #[test]
    fn catalog_directory_defaults_to_install_location() {
        assert_eq!(
            Config::default().catalog_directory(),
            PathBuf::from(DEFAULT_CATALOG_DIR)
        );
    }

    #[test]
    fn window_size_respects_minimum() {
        let config = Config {
            window: WindowConfig {
                width: Some(10),
                height: Some(10),
            },
            ..Config::default()
        };
        assert_eq!(config.window_size(), (MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
    }

    #[test]
    fn disabled_prefetch_section_disables_prefetch() {
        let config = Config {
            prefetch: PrefetchSection {
                enabled: Some(false),
                ..PrefetchSection::default()
            },
            ..Config::default()
        };
        assert!(!config.prefetch().enabled);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn saved_file_is_found_through_override_dir() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        let config = Config {
            general: GeneralConfig {
                language: Some("en-US".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            ..Config::default()
        };

        let path = get_config_path_with_override(Some(base_dir.clone())).expect("config path");
        save_to_path(&config, &path).expect("failed to save");
        let (loaded, warning) = load_with_override(Some(base_dir));

        assert!(warning.is_none());
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.general.language.as_deref(), Some("en-US"));
    }
}
