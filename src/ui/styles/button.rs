// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Styles close over the active [`ColorScheme`] instead of reading the iced
//! palette, so stylesheet overrides reach every surface.

use crate::ui::design_tokens::{opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn with_alpha(color: Color, a: f32) -> Color {
    Color { a, ..color }
}

fn disabled_style(colors: &ColorScheme) -> button::Style {
    button::Style {
        background: None,
        text_color: with_alpha(colors.text_secondary, opacity::OVERLAY_MEDIUM),
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Navigation menu entry. The selected entry is highlighted and its label
/// takes the accent color.
pub fn menu_item(
    colors: ColorScheme,
    selected: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        if status == button::Status::Disabled {
            return disabled_style(&colors);
        }

        let background = match (selected, status) {
            (true, _) => Some(Background::Color(colors.selection)),
            (false, button::Status::Hovered | button::Status::Pressed) => Some(
                Background::Color(with_alpha(colors.selection, opacity::OVERLAY_MEDIUM)),
            ),
            (false, _) => None,
        };

        button::Style {
            background,
            text_color: if selected {
                colors.accent
            } else {
                colors.text_primary
            },
            border: Border {
                color: if selected {
                    colors.accent
                } else {
                    Color::TRANSPARENT
                },
                width: if selected { 1.0 } else { 0.0 },
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Flat title bar button (menu toggle, settings, minimize, maximize).
pub fn chrome(colors: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => Some(Background::Color(colors.selection)),
            button::Status::Pressed => Some(Background::Color(colors.accent)),
            button::Status::Disabled => return disabled_style(&colors),
            button::Status::Active => None,
        };

        button::Style {
            background,
            text_color: colors.text_primary,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Close button: turns to the error color on hover.
pub fn chrome_close(colors: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(colors.error)),
            text_color: colors.background,
            ..chrome(colors)(theme, button::Status::Active)
        },
        _ => chrome(colors)(theme, status),
    }
}

/// Filled accent button for primary form actions.
pub fn primary(colors: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let fill = match status {
            button::Status::Active => colors.accent,
            button::Status::Hovered | button::Status::Pressed => colors.accent_hover,
            button::Status::Disabled => return disabled_style(&colors),
        };

        button::Style {
            background: Some(Background::Color(fill)),
            text_color: colors.background,
            border: Border {
                color: fill,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        }
    }
}
