// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::main_window;
use crate::ui::state::TableRecord;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    MainWindow(main_window::Message),
    /// Frame or timer tick driving animations and status reverts.
    Tick(Instant),
    /// Rows produced by the startup data load.
    DemoDataLoaded(Vec<TableRecord>),
    /// Answer of the exit confirmation; `true` quits.
    ExitConfirmed(bool),
    /// An informational dialog was dismissed.
    DialogClosed,
}

/// Runtime flags passed by the launcher.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional layout override (`simple` or `extended`).
    pub layout: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `DRACULA_GUI_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional stylesheet directory override.
    pub styles_dir: Option<String>,
}
