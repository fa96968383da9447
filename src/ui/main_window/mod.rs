// SPDX-License-Identifier: MPL-2.0
//! Main window facade.
//!
//! `MainWindow` owns the view state (menu selection, the three panels, the
//! feedback labels, the records table) and exposes it to the application as
//! a set of operations plus an [`Event`] returned from [`MainWindow::update`].
//! Both layouts share this state; only [`view`] differs between them.
//!
//! Every time-dependent operation takes the current `Instant` so the whole
//! facade can be driven by simulated time.

mod dialog;
mod view;

pub use dialog::{is_affirmative, show_confirmation, show_message, DialogKind};
pub use view::ViewContext;

use crate::config::{Config, Layout, EXTRA_PANEL_COLLAPSED_WIDTH};
use crate::i18n::fluent::I18n;
use crate::ui::state::{
    MenuItem, MenuSelection, Page, PanelId, PanelState, RecordTable, Settled, StatusMessage,
    SuccessFeedback, TableRecord,
};
use crate::ui::theming::ThemeMode;
use iced::Element;
use std::fmt;
use std::time::{Duration, Instant};
use unic_langid::LanguageIdentifier;

/// Menu entry selected when the window is built.
pub const STARTUP_MENU: &str = "home";

/// OS-level window operations requested from the title bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowAction {
    Minimize,
    Maximize,
    Close,
}

impl fmt::Display for WindowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowAction::Minimize => write!(f, "minimize"),
            WindowAction::Maximize => write!(f, "maximize"),
            WindowAction::Close => write!(f, "close"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    MenuClicked(String),
    ToggleMenu,
    ToggleExtraLeft,
    ToggleExtraRight,
    SavePressed,
    SettingsPressed,
    ExitPressed,
    WindowControl(WindowAction),
    TitleBarPressed,
    ThemeSelected(ThemeMode),
    LanguageSelected(LanguageIdentifier),
}

/// Notifications for the application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    MenuChanged(String),
    SaveRequested,
    SettingsRequested,
    ExitRequested,
    WindowControlRequested(WindowAction),
    DragRequested,
    ThemeChanged(ThemeMode),
    LanguageChanged(LanguageIdentifier),
}

fn menu_items(layout: Layout) -> Vec<MenuItem> {
    let last = match layout {
        Layout::Simple => MenuItem::new("create", "menu-create", "+", Page::Create),
        Layout::Extended => MenuItem::new("new", "menu-new", "+", Page::Create),
    };
    vec![
        MenuItem::new("home", "menu-home", "⌂", Page::Home),
        MenuItem::new("widgets", "menu-widgets", "▦", Page::Widgets),
        last,
    ]
}

pub struct MainWindow {
    layout: Layout,
    menu: MenuSelection,
    main_menu: PanelState,
    extra_left: PanelState,
    extra_right: PanelState,
    success: SuccessFeedback,
    status: StatusMessage,
    table: RecordTable,
    form_enabled: bool,
    toolbar_enabled: bool,
    /// Set while the loading indicator replaces the page stack.
    loading_since: Option<Instant>,
    last_tick: Instant,
}

impl MainWindow {
    /// Builds the window state, selects the startup page and enables the
    /// form, in that order, before any caller can observe it.
    #[must_use]
    pub fn new(layout: Layout, config: &Config, i18n: &I18n, now: Instant) -> Self {
        let panels = &config.panels;
        let duration = panels.animation_duration();
        let (menu_collapsed, menu_expanded) = panels.menu_extents();

        let success = match layout {
            Layout::Simple => SuccessFeedback::hidden(),
            Layout::Extended => SuccessFeedback::persistent(i18n.tr("credits-label")),
        };

        let mut window = Self {
            layout,
            menu: MenuSelection::new(menu_items(layout)),
            main_menu: PanelState::new(
                PanelId::MainMenu,
                menu_collapsed,
                menu_expanded,
                duration,
                true,
            ),
            extra_left: PanelState::new(
                PanelId::ExtraLeft,
                EXTRA_PANEL_COLLAPSED_WIDTH,
                panels.extra_left_width(),
                duration,
                false,
            ),
            extra_right: PanelState::new(
                PanelId::ExtraRight,
                EXTRA_PANEL_COLLAPSED_WIDTH,
                panels.extra_right_width(),
                duration,
                false,
            ),
            success,
            status: StatusMessage::new(i18n.tr("status-ready")),
            table: RecordTable::new(),
            form_enabled: false,
            toolbar_enabled: true,
            loading_since: None,
            last_tick: now,
        };

        // Programmatic selection: no MenuChanged is produced.
        window.menu.select(STARTUP_MENU);
        window.set_form_enabled(true);
        tracing::debug!(?layout, "main window initialized");
        window
    }

    /// Handles a widget interaction. Returns at most one event per message.
    pub fn update(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::MenuClicked(id) => {
                if !self.form_enabled {
                    return Event::None;
                }
                if !self.menu.select(&id) {
                    return Event::None;
                }
                tracing::debug!(menu = %id, "menu changed");
                Event::MenuChanged(id)
            }
            Message::ToggleMenu => {
                if self.toolbar_enabled {
                    self.toggle_menu(now);
                }
                Event::None
            }
            Message::ToggleExtraLeft => {
                if self.form_enabled {
                    self.toggle_extra_left(now);
                }
                Event::None
            }
            Message::ToggleExtraRight => {
                if self.toolbar_enabled {
                    self.toggle_extra_right(now);
                }
                Event::None
            }
            Message::SavePressed if self.form_enabled => Event::SaveRequested,
            Message::SettingsPressed if self.settings_enabled() => Event::SettingsRequested,
            Message::ExitPressed if self.form_enabled && self.layout == Layout::Extended => {
                Event::ExitRequested
            }
            Message::WindowControl(action) => Event::WindowControlRequested(action),
            Message::TitleBarPressed => Event::DragRequested,
            Message::ThemeSelected(mode) => Event::ThemeChanged(mode),
            Message::LanguageSelected(locale) => Event::LanguageChanged(locale),
            Message::SavePressed | Message::SettingsPressed | Message::ExitPressed => Event::None,
        }
    }

    /// Advances every animation and timer to `now`.
    ///
    /// Returns the panels that finished sliding on this tick.
    pub fn tick(&mut self, now: Instant) -> Vec<Settled> {
        self.last_tick = now;

        let settled: Vec<Settled> = [
            &mut self.main_menu,
            &mut self.extra_left,
            &mut self.extra_right,
        ]
        .into_iter()
        .filter_map(|panel| panel.tick(now))
        .collect();
        for done in &settled {
            tracing::debug!(panel = %done.panel, width = done.width, "panel settled");
        }

        if self.success.tick(now) {
            tracing::debug!("success feedback finished");
        }
        if self.status.tick(now) {
            tracing::debug!("status message reverted");
        }
        settled
    }

    /// Whether something is animating and needs per-frame ticks.
    #[must_use]
    pub fn needs_frames(&self) -> bool {
        self.main_menu.is_animating()
            || self.extra_left.is_animating()
            || self.extra_right.is_animating()
            || self.success.is_animating()
    }

    /// Whether a coarse timer is needed (pending status revert, spinner).
    #[must_use]
    pub fn needs_timer(&self) -> bool {
        self.status.is_pending() || self.loading_since.is_some()
    }

    /// Picks up a new language for the idle texts.
    pub fn relocalize(&mut self, i18n: &I18n) {
        self.status.set_idle_text(i18n.tr("status-ready"));
        if self.layout == Layout::Extended {
            self.success.set_idle_text(i18n.tr("credits-label"));
        }
    }

    // ------------------------------------------------------------------
    // Table
    // ------------------------------------------------------------------

    /// Replaces every row.
    pub fn set_table_data(&mut self, records: &[TableRecord]) {
        self.table.set_records(records);
    }

    /// Rows in order; empty cells read as `""`.
    #[must_use]
    pub fn get_table_data(&self) -> Vec<TableRecord> {
        self.table.records()
    }

    pub fn clear_table(&mut self) {
        self.table.clear();
    }

    // ------------------------------------------------------------------
    // Enablement and visibility
    // ------------------------------------------------------------------

    /// Enables or disables every form control: menu entries, save,
    /// settings, exit and the extra panel toggle.
    pub fn set_form_enabled(&mut self, enabled: bool) {
        self.form_enabled = enabled;
    }

    /// Enables or disables the menu toggle and the settings buttons.
    pub fn set_toolbar_enabled(&mut self, enabled: bool) {
        self.toolbar_enabled = enabled;
    }

    /// Shows the loading indicator in place of the pages, or the reverse.
    pub fn set_loading_visible(&mut self, visible: bool, now: Instant) {
        match (visible, self.loading_since) {
            (true, None) => self.loading_since = Some(now),
            (false, Some(_)) => self.loading_since = None,
            _ => {}
        }
    }

    #[must_use]
    pub fn is_form_enabled(&self) -> bool {
        self.form_enabled
    }

    #[must_use]
    pub fn is_toolbar_enabled(&self) -> bool {
        self.toolbar_enabled
    }

    /// Settings is both a form and a toolbar control.
    #[must_use]
    pub fn settings_enabled(&self) -> bool {
        self.form_enabled && self.toolbar_enabled
    }

    #[must_use]
    pub fn is_loading_visible(&self) -> bool {
        self.loading_since.is_some()
    }

    #[must_use]
    pub fn is_page_stack_visible(&self) -> bool {
        self.loading_since.is_none()
    }

    // ------------------------------------------------------------------
    // Feedback
    // ------------------------------------------------------------------

    pub fn show_success(&mut self, message: impl Into<String>, now: Instant) {
        self.success.show(message, now);
    }

    /// Sets the status text; a zero `duration` keeps it until replaced.
    pub fn show_status(&mut self, message: impl Into<String>, duration: Duration, now: Instant) {
        self.status.show(message, duration, now);
    }

    // ------------------------------------------------------------------
    // Panels
    // ------------------------------------------------------------------

    pub fn toggle_menu(&mut self, now: Instant) -> f32 {
        self.main_menu.toggle(now)
    }

    pub fn toggle_extra_left(&mut self, now: Instant) -> f32 {
        self.extra_left.toggle(now)
    }

    pub fn toggle_extra_right(&mut self, now: Instant) -> f32 {
        self.extra_right.toggle(now)
    }

    #[must_use]
    pub fn panel(&self, id: PanelId) -> &PanelState {
        match id {
            PanelId::MainMenu => &self.main_menu,
            PanelId::ExtraLeft => &self.extra_left,
            PanelId::ExtraRight => &self.extra_right,
        }
    }

    // ------------------------------------------------------------------
    // Read access for rendering and tests
    // ------------------------------------------------------------------

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[must_use]
    pub fn menu(&self) -> &MenuSelection {
        &self.menu
    }

    #[must_use]
    pub fn current_page(&self) -> Page {
        self.menu.current_page()
    }

    #[must_use]
    pub fn success_feedback(&self) -> &SuccessFeedback {
        &self.success
    }

    #[must_use]
    pub fn status(&self) -> &StatusMessage {
        &self.status
    }

    #[must_use]
    pub fn table(&self) -> &RecordTable {
        &self.table
    }

    /// Time spent loading, for the spinner angle.
    #[must_use]
    pub fn loading_elapsed(&self) -> Option<Duration> {
        self.loading_since
            .map(|since| self.last_tick.saturating_duration_since(since))
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        view::view(self, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(layout: Layout) -> (MainWindow, Instant) {
        let now = Instant::now();
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        (MainWindow::new(layout, &Config::default(), &i18n, now), now)
    }

    #[test]
    fn startup_selects_home_and_enables_form() {
        let (window, _) = window(Layout::Simple);
        assert_eq!(window.menu().selected().map(MenuItem::id), Some("home"));
        assert_eq!(window.current_page(), Page::Home);
        assert!(window.is_form_enabled());
        assert!(window.is_page_stack_visible());
    }

    #[test]
    fn menu_click_emits_once_and_switches_page() {
        let (mut window, now) = window(Layout::Simple);
        let event = window.update(Message::MenuClicked("widgets".into()), now);

        assert_eq!(event, Event::MenuChanged("widgets".into()));
        assert_eq!(window.current_page(), Page::Widgets);
        assert_eq!(window.menu().viewing(), Some("Widgets"));
    }

    #[test]
    fn unknown_menu_id_emits_nothing() {
        let (mut window, now) = window(Layout::Simple);
        let event = window.update(Message::MenuClicked("reports".into()), now);

        assert_eq!(event, Event::None);
        assert_eq!(window.current_page(), Page::Home);
        assert!(window.menu().selected().is_none());
    }

    #[test]
    fn extended_layout_uses_new_entry() {
        let (mut window, now) = window(Layout::Extended);
        window.update(Message::MenuClicked("new".into()), now);
        assert_eq!(window.current_page(), Page::Create);
        assert!(!window.menu().contains("create"));
    }

    #[test]
    fn disabled_form_swallows_clicks() {
        let (mut window, now) = window(Layout::Simple);
        window.set_form_enabled(false);

        assert_eq!(window.update(Message::SavePressed, now), Event::None);
        assert_eq!(
            window.update(Message::MenuClicked("widgets".into()), now),
            Event::None
        );
        assert_eq!(window.current_page(), Page::Home);
    }

    #[test]
    fn toolbar_disable_blocks_menu_toggle() {
        let (mut window, now) = window(Layout::Simple);
        window.set_toolbar_enabled(false);
        window.update(Message::ToggleMenu, now);
        assert!(!window.panel(PanelId::MainMenu).is_animating());
        assert_eq!(window.update(Message::SettingsPressed, now), Event::None);
    }

    #[test]
    fn exit_is_only_offered_by_extended_layout() {
        let (mut simple, now) = window(Layout::Simple);
        assert_eq!(simple.update(Message::ExitPressed, now), Event::None);

        let (mut extended, now) = window(Layout::Extended);
        assert_eq!(extended.update(Message::ExitPressed, now), Event::ExitRequested);
    }

    #[test]
    fn loading_and_pages_are_mutually_exclusive() {
        let (mut window, now) = window(Layout::Simple);
        window.set_loading_visible(true, now);
        assert!(window.is_loading_visible());
        assert!(!window.is_page_stack_visible());
        assert!(window.needs_timer());

        window.set_loading_visible(false, now);
        assert!(window.is_page_stack_visible());
    }

    #[test]
    fn tick_reports_settled_panels() {
        let (mut window, now) = window(Layout::Extended);
        window.toggle_extra_left(now);
        assert!(window.needs_frames());

        let settled = window.tick(now + Duration::from_secs(1));
        assert_eq!(settled.len(), 1);
        assert_eq!(settled[0].panel, PanelId::ExtraLeft);
        assert!(!window.needs_frames());
    }

    #[test]
    fn window_controls_pass_through() {
        let (mut window, now) = window(Layout::Extended);
        assert_eq!(
            window.update(Message::WindowControl(WindowAction::Minimize), now),
            Event::WindowControlRequested(WindowAction::Minimize)
        );
        assert_eq!(WindowAction::Maximize.to_string(), "maximize");
    }
}
