// SPDX-License-Identifier: MPL-2.0
//! Application root state and the controller wiring the main window to
//! localization, configuration and the stylesheet.
//!
//! The `App` struct owns the [`MainWindow`] view state and translates the
//! events it emits into side effects: status texts, dialogs, window
//! commands and config persistence.

pub mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{
    self, Config, Layout, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, WINDOW_DEFAULT_HEIGHT,
    WINDOW_DEFAULT_WIDTH,
};
use crate::i18n::fluent::I18n;
use crate::ui::main_window::MainWindow;
use crate::ui::state::TableRecord;
use crate::ui::stylesheet::{self, Stylesheet};
use crate::ui::theming::AppTheme;
use iced::{window, Element, Subscription, Task, Theme};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Simulated latency of the startup data load.
const DEMO_LOAD_DELAY: Duration = Duration::from_millis(600);

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// Explicit config directory, kept so saves land where loads came from.
    config_dir: Option<PathBuf>,
    window: MainWindow,
    theme: AppTheme,
    stylesheet: Stylesheet,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("layout", &self.window.layout())
            .field("page", &self.window.current_page())
            .field("locale", &self.i18n.current_locale().to_string())
            .finish()
    }
}

/// Builds the window settings for `layout`.
///
/// The extended layout draws its own title bar, so native decorations are
/// turned off.
pub fn window_settings(layout: Layout) -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        decorations: layout == Layout::Simple,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let config_dir = flags.config_dir.clone().map(PathBuf::from);
    let (config, _) = config::load_with_override(config_dir);
    let layout = resolve_layout(flags.layout.as_deref(), &config);

    // iced 0.14 requires an `Fn` boot; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings(layout))
        .subscription(App::subscription)
        .run()
}

/// Picks the layout from the launcher flag, falling back to the config.
fn resolve_layout(flag: Option<&str>, config: &Config) -> Layout {
    match flag.map(str::parse::<Layout>) {
        Some(Ok(layout)) => layout,
        Some(Err(err)) => {
            tracing::warn!(%err, "ignoring layout flag");
            config.layout.variant
        }
        None => config.layout.variant,
    }
}

const DEMO_RECORDS: &str = include_str!("../../assets/data/demo_records.toml");

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RecordFile {
    records: Vec<TableRecord>,
}

/// Parses a `[[records]]` document. Malformed input yields no rows.
fn parse_records(text: &str) -> Vec<TableRecord> {
    match toml::from_str::<RecordFile>(text) {
        Ok(file) => file.records,
        Err(err) => {
            tracing::warn!(%err, "could not parse table records");
            Vec::new()
        }
    }
}

/// Rows shown once the startup load completes.
fn demo_records() -> Vec<TableRecord> {
    parse_records(DEMO_RECORDS)
}

impl App {
    /// Initializes application state and kicks off the startup data load.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let layout = resolve_layout(flags.layout.as_deref(), &config);
        let i18n = I18n::new(flags.lang, &config);

        let stylesheet = match paths::get_styles_dir_with_override(
            flags.styles_dir.map(PathBuf::from),
        ) {
            Some(dir) => stylesheet::load(&dir, layout),
            None => {
                tracing::warn!("no stylesheet directory available");
                Stylesheet::default()
            }
        };
        let theme = AppTheme::with_stylesheet(config.general.theme_mode, &stylesheet);

        let now = Instant::now();
        let mut window = MainWindow::new(layout, &config, &i18n, now);
        if let Some(key) = config_warning {
            window.show_status(i18n.tr(&key), config.feedback.status_timeout(), now);
        }

        window.set_loading_visible(true, now);
        let task = Task::perform(
            async {
                tokio::time::sleep(DEMO_LOAD_DELAY).await;
                demo_records()
            },
            Message::DemoDataLoaded,
        );

        tracing::info!(%layout, locale = %i18n.current_locale(), "main window ready");

        let app = App {
            i18n,
            config,
            config_dir,
            window,
            theme,
            stylesheet,
        };
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.to_iced()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.window.needs_frames(),
            self.window.needs_timer(),
        )
    }

    /// Applies `message` and returns any follow-up task.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            config: &mut self.config,
            config_dir: self.config_dir.as_ref(),
            window: &mut self.window,
            theme: &mut self.theme,
            stylesheet: &self.stylesheet,
            now,
        };

        match message {
            Message::MainWindow(msg) => update::handle_main_window_message(&mut ctx, msg),
            Message::Tick(instant) => {
                ctx.window.tick(instant);
                Task::none()
            }
            Message::DemoDataLoaded(records) => update::handle_data_loaded(&mut ctx, &records),
            Message::ExitConfirmed(confirmed) => update::handle_exit_confirmed(confirmed),
            Message::DialogClosed => Task::none(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            window: &self.window,
            theme: &self.theme,
            stylesheet: &self.stylesheet,
        })
    }

    /// Read access to the window state.
    #[must_use]
    pub fn main_window(&self) -> &MainWindow {
        &self.window
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn app_theme(&self) -> &AppTheme {
        &self.theme
    }

    #[must_use]
    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }
}
