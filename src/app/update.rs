// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! The main window reports what the user asked for as an
//! [`Event`](crate::ui::main_window::Event); the handlers here decide what
//! that means for the rest of the application.

use super::{persistence, Message};
use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::ui::main_window::{
    self, show_confirmation, show_message, DialogKind, Event, MainWindow, WindowAction,
};
use crate::ui::state::menu::humanize;
use crate::ui::state::TableRecord;
use crate::ui::stylesheet::Stylesheet;
use crate::ui::theming::{AppTheme, ThemeMode};
use iced::{window, Task};
use std::path::PathBuf;
use std::time::Instant;
use unic_langid::LanguageIdentifier;

/// Mutable view of the application state shared by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub config: &'a mut Config,
    pub config_dir: Option<&'a PathBuf>,
    pub window: &'a mut MainWindow,
    pub theme: &'a mut AppTheme,
    pub stylesheet: &'a Stylesheet,
    pub now: Instant,
}

impl UpdateContext<'_> {
    fn status(&mut self, text: String) {
        let timeout = self.config.feedback.status_timeout();
        self.window.show_status(text, timeout, self.now);
    }
}

pub fn handle_main_window_message(
    ctx: &mut UpdateContext<'_>,
    message: main_window::Message,
) -> Task<Message> {
    let event = ctx.window.update(message, ctx.now);
    handle_event(ctx, event)
}

fn handle_event(ctx: &mut UpdateContext<'_>, event: Event) -> Task<Message> {
    match event {
        Event::None => Task::none(),
        Event::MenuChanged(id) => {
            handle_menu_changed(ctx, &id);
            Task::none()
        }
        Event::SaveRequested => {
            handle_save(ctx);
            Task::none()
        }
        Event::SettingsRequested => {
            tracing::info!("settings requested");
            show_message(
                ctx.i18n.tr("dialog-settings-title"),
                ctx.i18n.tr("dialog-settings-body"),
                DialogKind::Info,
            )
            .map(|()| Message::DialogClosed)
        }
        Event::ExitRequested => show_confirmation(
            ctx.i18n.tr("dialog-exit-title"),
            ctx.i18n.tr("dialog-exit-body"),
        )
        .map(Message::ExitConfirmed),
        Event::WindowControlRequested(action) => window_control(action),
        Event::DragRequested => window::latest().and_then(window::drag),
        Event::ThemeChanged(mode) => {
            handle_theme_changed(ctx, mode);
            Task::none()
        }
        Event::LanguageChanged(locale) => {
            handle_language_changed(ctx, locale);
            Task::none()
        }
    }
}

fn handle_menu_changed(ctx: &mut UpdateContext<'_>, id: &str) {
    tracing::info!(menu = id, "menu selection changed");
    let page = humanize(id);
    let text = ctx
        .i18n
        .tr_with_args("status-switched-page", &[("page", page.as_str())]);
    ctx.status(text);
}

fn handle_save(ctx: &mut UpdateContext<'_>) {
    tracing::info!("save requested");
    ctx.window.show_success(ctx.i18n.tr("feedback-saved"), ctx.now);
    let text = ctx.i18n.tr("status-save-triggered");
    ctx.status(text);
}

fn window_control(action: WindowAction) -> Task<Message> {
    tracing::debug!(%action, "window control");
    match action {
        WindowAction::Minimize => window::latest().and_then(|id| window::minimize(id, true)),
        WindowAction::Maximize => window::latest().and_then(window::toggle_maximize),
        WindowAction::Close => window::latest().and_then(window::close),
    }
}

fn handle_theme_changed(ctx: &mut UpdateContext<'_>, mode: ThemeMode) {
    if ctx.config.general.theme_mode == mode {
        return;
    }
    persistence::apply_theme_change(ctx.config, mode);
    *ctx.theme = AppTheme::with_stylesheet(mode, ctx.stylesheet);
    save_preferences(ctx);
}

fn handle_language_changed(ctx: &mut UpdateContext<'_>, locale: LanguageIdentifier) {
    if ctx.i18n.current_locale() == &locale {
        return;
    }
    if !persistence::apply_language_change(ctx.i18n, ctx.config, locale) {
        return;
    }
    ctx.window.relocalize(ctx.i18n);
    save_preferences(ctx);
}

fn save_preferences(ctx: &mut UpdateContext<'_>) {
    let key = persistence::persist_preferences(ctx.config, ctx.config_dir.cloned());
    let text = ctx.i18n.tr(key);
    ctx.status(text);
}

pub fn handle_data_loaded(ctx: &mut UpdateContext<'_>, records: &[TableRecord]) -> Task<Message> {
    tracing::info!(rows = records.len(), "table data loaded");
    ctx.window.set_table_data(records);
    ctx.window.set_loading_visible(false, ctx.now);
    Task::none()
}

pub fn handle_exit_confirmed(confirmed: bool) -> Task<Message> {
    if confirmed {
        tracing::info!("exit confirmed");
        iced::exit()
    } else {
        Task::none()
    }
}
