// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::main_window::{self, MainWindow};
use crate::ui::stylesheet::{Stylesheet, LOGO_RESOURCE};
use crate::ui::theming::AppTheme;
use iced::{widget::Container, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub window: &'a MainWindow,
    pub theme: &'a AppTheme,
    pub stylesheet: &'a Stylesheet,
}

/// Renders the main window with the active theme.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let window_view = ctx
        .window
        .view(main_window::ViewContext {
            i18n: ctx.i18n,
            colors: ctx.theme.colors,
            theme_mode: ctx.theme.mode,
            logo: ctx.stylesheet.resource(LOGO_RESOURCE),
        })
        .map(Message::MainWindow);

    Container::new(window_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
