// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Window body behind the pages.
pub fn background(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.background)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Side menu and extra panels.
pub fn menu(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.menu)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Title bar and status bar strip.
pub fn title_bar(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.title_bar)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Rounded card holding page content.
pub fn card(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.title_bar)),
        border: Border {
            color: colors.selection,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Table header row.
pub fn table_header(colors: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(colors.selection)),
        text_color: Some(colors.accent),
        ..Default::default()
    }
}

/// Alternating table row; odd rows get a subtle tint.
pub fn table_row(colors: ColorScheme, odd: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: odd.then(|| {
            Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..colors.selection
            })
        }),
        ..Default::default()
    }
}
