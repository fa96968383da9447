// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[layout]` - Which window skin to use (simple or extended)
//! - `[panels]` - Panel extents and slide duration
//! - `[feedback]` - Status message timeout
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `DRACULA_GUI_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use dracula_gui::config::{self, Layout};
//!
//! let (mut config, _warning) = config::load();
//! config.layout.variant = Layout::Extended;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Visual skin of the main window.
///
/// Both skins share the same menu, panel and feedback state; they differ in
/// which pages exist and which chrome is drawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// Three pages, native window decorations, feedback label hides when done.
    #[default]
    Simple,
    /// Adds the left extra panel, the settings drawer, custom window chrome
    /// and a persistent credits label.
    Extended,
}

impl std::str::FromStr for Layout {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "simple" => Ok(Layout::Simple),
            "extended" => Ok(Layout::Extended),
            other => Err(Error::Config(format!("unknown layout: {}", other))),
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layout::Simple => write!(f, "simple"),
            Layout::Extended => write!(f, "extended"),
        }
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::Dark
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LayoutConfig {
    #[serde(default)]
    pub variant: Layout,
}

/// Panel extents and animation timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PanelsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_expanded_width: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_collapsed_width: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_left_width: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_right_width: Option<f32>,

    /// Slide duration in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_ms: Option<u64>,
}

impl Default for PanelsConfig {
    fn default() -> Self {
        Self {
            menu_expanded_width: Some(DEFAULT_MENU_EXPANDED_WIDTH),
            menu_collapsed_width: Some(DEFAULT_MENU_COLLAPSED_WIDTH),
            extra_left_width: Some(DEFAULT_EXTRA_LEFT_WIDTH),
            extra_right_width: Some(DEFAULT_EXTRA_RIGHT_WIDTH),
            animation_ms: Some(DEFAULT_PANEL_ANIMATION_MS),
        }
    }
}

impl PanelsConfig {
    /// Returns `(collapsed, expanded)` for the main menu.
    ///
    /// A collapsed width that is not strictly below the expanded one would
    /// make the toggle threshold meaningless, so the defaults are used instead.
    #[must_use]
    pub fn menu_extents(&self) -> (f32, f32) {
        let collapsed = clamp_width(self.menu_collapsed_width, DEFAULT_MENU_COLLAPSED_WIDTH);
        let expanded = clamp_width(self.menu_expanded_width, DEFAULT_MENU_EXPANDED_WIDTH);
        if collapsed < expanded {
            (collapsed, expanded)
        } else {
            (DEFAULT_MENU_COLLAPSED_WIDTH, DEFAULT_MENU_EXPANDED_WIDTH)
        }
    }

    #[must_use]
    pub fn extra_left_width(&self) -> f32 {
        clamp_width(self.extra_left_width, DEFAULT_EXTRA_LEFT_WIDTH)
            .max(EXTRA_PANEL_COLLAPSED_WIDTH + 1.0)
    }

    #[must_use]
    pub fn extra_right_width(&self) -> f32 {
        clamp_width(self.extra_right_width, DEFAULT_EXTRA_RIGHT_WIDTH)
            .max(EXTRA_PANEL_COLLAPSED_WIDTH + 1.0)
    }

    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        let ms = self
            .animation_ms
            .unwrap_or(DEFAULT_PANEL_ANIMATION_MS)
            .clamp(MIN_PANEL_ANIMATION_MS, MAX_PANEL_ANIMATION_MS);
        Duration::from_millis(ms)
    }
}

fn clamp_width(value: Option<f32>, default: f32) -> f32 {
    match value {
        Some(width) if width.is_finite() => width.clamp(0.0, MAX_PANEL_WIDTH),
        _ => default,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackConfig {
    /// Milliseconds before a status message reverts; `0` keeps it sticky.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_timeout_ms: Option<u64>,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            status_timeout_ms: Some(DEFAULT_STATUS_TIMEOUT_MS),
        }
    }
}

impl FeedbackConfig {
    #[must_use]
    pub fn status_timeout(&self) -> Duration {
        Duration::from_millis(
            self.status_timeout_ms
                .unwrap_or(DEFAULT_STATUS_TIMEOUT_MS)
                .min(MAX_STATUS_TIMEOUT_MS),
        )
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub panels: PanelsConfig,

    #[serde(default)]
    pub feedback: FeedbackConfig,
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n key describing what went wrong.
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
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("status-config-load-error".to_string()),
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
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            layout: LayoutConfig {
                variant: Layout::Extended,
            },
            panels: PanelsConfig {
                menu_expanded_width: Some(260.0),
                ..PanelsConfig::default()
            },
            feedback: FeedbackConfig {
                status_timeout_ms: Some(0),
            },
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

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_reports_warning_for_corrupt_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("status-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[layout]\nvariant = \"extended\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.layout.variant, Layout::Extended);
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.feedback.status_timeout(), Duration::from_millis(3000));
    }

    #[test]
    fn inverted_menu_extents_fall_back_to_defaults() {
        let panels = PanelsConfig {
            menu_collapsed_width: Some(300.0),
            menu_expanded_width: Some(100.0),
            ..PanelsConfig::default()
        };
        assert_eq!(
            panels.menu_extents(),
            (DEFAULT_MENU_COLLAPSED_WIDTH, DEFAULT_MENU_EXPANDED_WIDTH)
        );
    }

    #[test]
    fn animation_duration_is_clamped() {
        let duration_for = |ms| {
            PanelsConfig {
                animation_ms: Some(ms),
                ..PanelsConfig::default()
            }
            .animation_duration()
        };

        assert_eq!(duration_for(5), Duration::from_millis(200));
        assert_eq!(duration_for(100), Duration::from_millis(200));
        assert_eq!(duration_for(250), Duration::from_millis(250));
        assert_eq!(duration_for(1000), Duration::from_millis(300));
        assert_eq!(duration_for(50_000), Duration::from_millis(300));
    }

    #[test]
    fn layout_parses_case_insensitively() {
        assert_eq!("Extended".parse::<Layout>().unwrap(), Layout::Extended);
        assert_eq!("simple".parse::<Layout>().unwrap(), Layout::Simple);
        assert!("fancy".parse::<Layout>().is_err());
    }
}
