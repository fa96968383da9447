// SPDX-License-Identifier: MPL-2.0
//! Theme modes and the color scheme derived from them.
//!
//! The scheme starts from built-in Dracula (dark) or light colors and can be
//! adjusted by the palette section of a loaded stylesheet.

use crate::ui::design_tokens::palette;
use crate::ui::stylesheet::Stylesheet;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Color palette for a theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    pub background: Color,
    pub menu: Color,
    pub title_bar: Color,
    pub selection: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    pub accent: Color,
    pub accent_hover: Color,

    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
}

impl ColorScheme {
    /// The Dracula palette.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: palette::BACKGROUND,
            menu: palette::MENU,
            title_bar: palette::TITLE_BAR,
            selection: palette::CURRENT_LINE,

            text_primary: palette::FOREGROUND,
            text_secondary: palette::COMMENT,

            accent: palette::PURPLE,
            accent_hover: palette::PINK,

            success: palette::GREEN,
            warning: palette::ORANGE,
            error: palette::RED,
            info: palette::CYAN,
        }
    }

    #[must_use]
    pub fn light() -> Self {
        Self {
            background: palette::WHITE,
            menu: palette::GRAY_100,
            title_bar: palette::GRAY_200,
            selection: palette::GRAY_200,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            accent: palette::PURPLE_DARK,
            accent_hover: palette::PURPLE,

            success: Color::from_rgb8(0x1f, 0x9d, 0x55),
            warning: Color::from_rgb8(0xc2, 0x6b, 0x00),
            error: Color::from_rgb8(0xc6, 0x28, 0x28),
            info: Color::from_rgb8(0x00, 0x7a, 0x99),
        }
    }

    /// Detects the system theme and returns the appropriate `ColorScheme`.
    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Light) = dark_light::detect() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Overwrites every color the stylesheet names.
    pub fn apply(&mut self, stylesheet: &Stylesheet) {
        let palette = stylesheet.palette();
        let slots: [(&mut Color, Option<Color>); 12] = [
            (&mut self.background, palette.background),
            (&mut self.menu, palette.menu),
            (&mut self.title_bar, palette.title_bar),
            (&mut self.selection, palette.selection),
            (&mut self.text_primary, palette.text),
            (&mut self.text_secondary, palette.text_secondary),
            (&mut self.accent, palette.accent),
            (&mut self.accent_hover, palette.accent_hover),
            (&mut self.success, palette.success),
            (&mut self.warning, palette.warning),
            (&mut self.error, palette.error),
            (&mut self.info, palette.info),
        ];
        for (slot, value) in slots {
            if let Some(color) = value {
                *slot = color;
            }
        }
    }
}

/// Theme plus the scheme it was built from.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Dark, ThemeMode::Light, ThemeMode::System];

    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// i18n key of the mode's display name.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-mode-light",
            ThemeMode::Dark => "theme-mode-dark",
            ThemeMode::System => "theme-mode-system",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
            ThemeMode::System => write!(f, "system"),
        }
    }
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let colors = match mode {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
            ThemeMode::System => ColorScheme::from_system(),
        };

        Self { colors, mode }
    }

    /// Builds the theme and layers stylesheet overrides on top.
    #[must_use]
    pub fn with_stylesheet(mode: ThemeMode, stylesheet: &Stylesheet) -> Self {
        let mut theme = Self::new(mode);
        theme.colors.apply(stylesheet);
        theme
    }

    /// Converts the scheme into an iced custom theme.
    #[must_use]
    pub fn to_iced(&self) -> Theme {
        let base = if self.mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        };
        let mut iced_palette = base.palette();
        iced_palette.background = self.colors.background;
        iced_palette.text = self.colors.text_primary;
        iced_palette.primary = self.colors.accent;
        iced_palette.success = self.colors.success;
        iced_palette.danger = self.colors.error;

        Theme::custom("Dracula".to_string(), iced_palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.background.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.background.r < 0.2);
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on actual system theme, so we just verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn stylesheet_overrides_only_named_colors() {
        let stylesheet = Stylesheet::parse("[palette]\naccent = \"#ff0000\"\n")
            .expect("valid stylesheet");
        let theme = AppTheme::with_stylesheet(ThemeMode::Dark, &stylesheet);

        assert_eq!(theme.colors.accent, Color::from_rgb8(0xff, 0, 0));
        assert_eq!(theme.colors.background, palette::BACKGROUND);
    }

    #[test]
    fn iced_theme_uses_scheme_background() {
        let theme = AppTheme::new(ThemeMode::Dark);
        assert_eq!(theme.to_iced().palette().background, palette::BACKGROUND);
    }
}
