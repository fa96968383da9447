// SPDX-License-Identifier: MPL-2.0
use dracula_gui::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
dracula_gui

USAGE:
  dracula_gui [OPTIONS]

OPTIONS:
  --lang <LOCALE>        UI language (e.g. en-US, fr)
  --layout <LAYOUT>      simple or extended
  --config-dir <DIR>     Directory holding settings.toml
  --styles-dir <DIR>     Directory holding stylesheet fragments
  -h, --help             Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: opt_string(&mut args, "--lang"),
        layout: opt_string(&mut args, "--layout"),
        config_dir: opt_string(&mut args, "--config-dir"),
        styles_dir: opt_string(&mut args, "--styles-dir"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone(), flags.styles_dir.clone());
    app::run(flags)
}

fn opt_string(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%err, "ignoring {key}");
            None
        }
    }
}
