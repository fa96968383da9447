// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--config-dir`, `--styles-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`DRACULA_GUI_CONFIG_DIR`, `DRACULA_GUI_STYLES_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! The stylesheet directory defaults to `styles/` inside the config directory,
//! so a portable install only needs `--config-dir`.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "DraculaGui";

/// Subdirectory of the config directory holding stylesheet fragments.
const STYLES_SUBDIR: &str = "styles";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "DRACULA_GUI_CONFIG_DIR";

/// Environment variable to override the stylesheet directory.
pub const ENV_STYLES_DIR: &str = "DRACULA_GUI_STYLES_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Global CLI override for stylesheet directory (set once at startup).
static CLI_STYLES_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for the config and stylesheet directories.
///
/// Later calls are ignored: the first launcher to set the overrides wins.
pub fn init_cli_overrides(config_dir: Option<String>, styles_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("config dir override already initialized");
    }
    if CLI_STYLES_DIR.set(styles_dir.map(PathBuf::from)).is_err() {
        tracing::debug!("styles dir override already initialized");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn get_cli_styles_dir() -> Option<PathBuf> {
    CLI_STYLES_DIR.get().and_then(Clone::clone)
}

fn non_empty_env(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the application config directory path.
///
/// This directory is used for storing user preferences (settings.toml).
///
/// - Linux: `~/.config/DraculaGui/`
/// - macOS: `~/Library/Application Support/DraculaGui/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\DraculaGui\`
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Some(path) = non_empty_env(ENV_CONFIG_DIR) {
        return Some(path);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the directory holding `common.toml` and `main_window.toml`.
pub fn get_styles_dir() -> Option<PathBuf> {
    get_styles_dir_with_override(None)
}

/// Returns the stylesheet directory with an optional override.
///
/// Falls back to `<config dir>/styles` when no explicit location is given.
pub fn get_styles_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_styles_dir() {
        return Some(path);
    }

    if let Some(path) = non_empty_env(ENV_STYLES_DIR) {
        return Some(path);
    }

    get_app_config_dir().map(|mut path| {
        path.push(STYLES_SUBDIR);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "App config dir should contain app name"
            );
        }
    }

    #[test]
    fn override_path_takes_precedence_for_config_dir() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/test/config/dir";
        std::env::set_var(ENV_CONFIG_DIR, test_path);

        let result = get_app_config_dir();
        assert_eq!(result, Some(PathBuf::from(test_path)));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn styles_dir_defaults_under_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_STYLES_DIR);
        std::env::set_var(ENV_CONFIG_DIR, "/portable/config");

        let result = get_styles_dir();
        assert_eq!(result, Some(PathBuf::from("/portable/config/styles")));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn styles_env_var_wins_over_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/portable/config");
        std::env::set_var(ENV_STYLES_DIR, "/themes");

        assert_eq!(get_styles_dir(), Some(PathBuf::from("/themes")));

        std::env::remove_var(ENV_STYLES_DIR);
        std::env::remove_var(ENV_CONFIG_DIR);
    }
}
