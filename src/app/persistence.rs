// SPDX-License-Identifier: MPL-2.0
//! Preference persistence.
//!
//! Only user choices made at runtime (theme and language) are written back;
//! everything else in `settings.toml` is preserved as loaded.

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

/// Writes `config` and returns the i18n key of a status to show.
pub fn persist_preferences(config: &Config, config_dir: Option<PathBuf>) -> &'static str {
    match config::save_with_override(config, config_dir) {
        Ok(()) => {
            tracing::debug!("preferences saved");
            "status-preferences-saved"
        }
        Err(err) => {
            tracing::warn!(%err, "failed to save preferences");
            "status-config-save-error"
        }
    }
}

/// Records the theme choice in `config`.
pub fn apply_theme_change(config: &mut Config, mode: ThemeMode) {
    config.general.theme_mode = mode;
}

/// Switches the UI language and records it in `config`.
///
/// Returns `false`, leaving `config` alone, when no bundle exists for
/// `locale`.
pub fn apply_language_change(
    i18n: &mut I18n,
    config: &mut Config,
    locale: LanguageIdentifier,
) -> bool {
    let name = locale.to_string();
    if !i18n.set_locale(locale) {
        tracing::warn!(locale = %name, "no translations for requested language");
        return false;
    }
    config.general.language = Some(name);
    true
}
