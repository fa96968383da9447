// SPDX-License-Identifier: MPL-2.0
use dracula_gui::app::{App, Flags, Message};
use dracula_gui::config::{self, Config, Layout};
use dracula_gui::ui::main_window::{self, WindowAction};
use dracula_gui::ui::state::{Page, PanelId, TableRecord};
use dracula_gui::ui::theming::ThemeMode;
use std::time::{Duration, Instant};
use tempfile::{tempdir, TempDir};

/// Far enough ahead that every animation and status revert has completed.
fn later() -> Instant {
    Instant::now() + Duration::from_secs(120)
}

fn boot(layout: &str) -> (App, TempDir) {
    let dir = tempdir().expect("Failed to create temporary directory");
    let flags = Flags {
        lang: Some("en-US".to_string()),
        layout: Some(layout.to_string()),
        config_dir: Some(dir.path().to_string_lossy().into_owned()),
        styles_dir: Some(dir.path().join("styles").to_string_lossy().into_owned()),
    };
    let (app, _task) = App::new(flags);
    (app, dir)
}

fn click(app: &mut App, message: main_window::Message) {
    let _ = app.update(Message::MainWindow(message));
}

#[test]
fn startup_shows_home_and_loads_table_asynchronously() {
    let (mut app, _dir) = boot("simple");
    let window = app.main_window();
    assert_eq!(window.layout(), Layout::Simple);
    assert_eq!(window.current_page(), Page::Home);
    assert!(window.is_form_enabled());
    assert!(window.is_loading_visible());
    assert!(!window.is_page_stack_visible());
    assert_eq!(window.status().text(), "Ready");
    assert!(window.table().is_empty());

    let rows = vec![
        TableRecord::new("Navigation Drawer", "Layouts", "Stable"),
        TableRecord::new("Charts", "Visualization", "Beta"),
    ];
    let _ = app.update(Message::DemoDataLoaded(rows.clone()));

    let window = app.main_window();
    assert!(!window.is_loading_visible());
    assert!(window.is_page_stack_visible());
    assert_eq!(window.get_table_data(), rows);
}

#[test]
fn partial_records_fill_missing_cells_with_empty_text() {
    let (mut app, _dir) = boot("simple");
    let partial: TableRecord = toml::from_str("name = \"Data Grid\"").expect("valid record");

    let _ = app.update(Message::DemoDataLoaded(vec![partial]));
    assert_eq!(
        app.main_window().get_table_data(),
        vec![TableRecord::new("Data Grid", "", "")]
    );
}

#[test]
fn menu_click_switches_page_and_reports_status_until_timeout() {
    let (mut app, _dir) = boot("simple");

    click(&mut app, main_window::Message::MenuClicked("widgets".into()));
    let window = app.main_window();
    assert_eq!(window.current_page(), Page::Widgets);
    assert_eq!(window.menu().viewing(), Some("Widgets"));
    assert_eq!(window.status().text(), "Switched to Widgets page");

    let _ = app.update(Message::Tick(later()));
    assert_eq!(app.main_window().status().text(), "Ready");
}

#[test]
fn unknown_menu_id_keeps_current_page() {
    let (mut app, _dir) = boot("simple");

    click(&mut app, main_window::Message::MenuClicked("reports".into()));
    let window = app.main_window();
    assert_eq!(window.current_page(), Page::Home);
    assert!(window.status().is_idle());
}

#[test]
fn save_in_simple_layout_fades_out_and_hides() {
    let (mut app, _dir) = boot("simple");
    assert!(!app.main_window().success_feedback().is_visible());

    click(&mut app, main_window::Message::SavePressed);
    let window = app.main_window();
    assert!(window.success_feedback().is_visible());
    assert!(window.success_feedback().is_animating());
    assert_eq!(window.success_feedback().text(), "Saved successfully!");
    assert_eq!(window.status().text(), "Save action triggered");

    let _ = app.update(Message::Tick(later()));
    let feedback = app.main_window().success_feedback();
    assert!(!feedback.is_visible());
    assert!(!feedback.is_animating());
}

#[test]
fn save_in_extended_layout_restores_credits() {
    let (mut app, _dir) = boot("extended");
    let credits = app.main_window().success_feedback().text().to_string();
    assert_eq!(credits, "By: Wanderson M. Pimenta");

    click(&mut app, main_window::Message::SavePressed);
    assert_eq!(
        app.main_window().success_feedback().text(),
        "Saved successfully!"
    );

    let _ = app.update(Message::Tick(later()));
    let feedback = app.main_window().success_feedback();
    assert!(feedback.is_visible());
    assert_eq!(feedback.text(), credits);
    assert!((feedback.opacity() - 1.0).abs() < f32::EPSILON);
}

#[test]
fn menu_toggle_slides_and_settles_at_collapsed_width() {
    let (mut app, _dir) = boot("simple");
    let expanded = app.main_window().panel(PanelId::MainMenu).width();

    click(&mut app, main_window::Message::ToggleMenu);
    let panel = app.main_window().panel(PanelId::MainMenu);
    assert!(panel.is_animating());
    let target = panel.target();
    assert!(target < expanded);

    let _ = app.update(Message::Tick(later()));
    let panel = app.main_window().panel(PanelId::MainMenu);
    assert!(!panel.is_animating());
    assert!((panel.width() - target).abs() < f32::EPSILON);
}

#[test]
fn extra_left_panel_slides_open_in_extended_layout() {
    let (mut app, _dir) = boot("extended");
    let _ = app.update(Message::DemoDataLoaded(Vec::new()));

    click(&mut app, main_window::Message::ToggleExtraLeft);
    assert!(app.main_window().panel(PanelId::ExtraLeft).is_animating());
    let _ = app.update(Message::Tick(later()));
    assert!(app.main_window().panel(PanelId::ExtraLeft).is_expanded());
}

#[test]
fn window_controls_and_exit_do_not_touch_view_state() {
    let (mut app, _dir) = boot("extended");
    let page = app.main_window().current_page();

    click(
        &mut app,
        main_window::Message::WindowControl(WindowAction::Minimize),
    );
    click(&mut app, main_window::Message::TitleBarPressed);
    click(&mut app, main_window::Message::ExitPressed);
    let _ = app.update(Message::ExitConfirmed(false));

    assert_eq!(app.main_window().current_page(), page);
    assert!(app.main_window().status().is_idle());
}

#[test]
fn theme_choice_is_persisted() {
    let (mut app, dir) = boot("extended");

    click(&mut app, main_window::Message::ThemeSelected(ThemeMode::Light));
    assert_eq!(app.app_theme().mode, ThemeMode::Light);
    assert_eq!(app.main_window().status().text(), "Preferences saved");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
}

#[test]
fn language_choice_relocalizes_and_is_persisted() {
    let (mut app, dir) = boot("extended");

    click(
        &mut app,
        main_window::Message::LanguageSelected("fr".parse().expect("valid locale")),
    );
    assert_eq!(app.i18n.current_locale().to_string(), "fr");

    let _ = app.update(Message::Tick(later()));
    let window = app.main_window();
    assert_eq!(window.status().text(), "Prêt");
    assert_eq!(window.success_feedback().text(), "Par : Wanderson M. Pimenta");

    let (loaded, _) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded.general.language.as_deref(), Some("fr"));
}

#[test]
fn corrupt_config_falls_back_and_reports_status() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "general = [not toml")
        .expect("Failed to write config file");

    let flags = Flags {
        lang: Some("en-US".to_string()),
        layout: None,
        config_dir: Some(dir.path().to_string_lossy().into_owned()),
        styles_dir: Some(dir.path().to_string_lossy().into_owned()),
    };
    let (app, _task) = App::new(flags);

    assert_eq!(app.config(), &Config::default());
    assert_eq!(
        app.main_window().status().text(),
        "Settings file could not be read, defaults restored"
    );
}

#[test]
fn layout_is_read_from_config_when_flag_is_absent() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut cfg = Config::default();
    cfg.layout.variant = Layout::Extended;
    config::save_with_override(&cfg, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let flags = Flags {
        lang: Some("en-US".to_string()),
        layout: None,
        config_dir: Some(dir.path().to_string_lossy().into_owned()),
        styles_dir: Some(dir.path().to_string_lossy().into_owned()),
    };
    let (app, _task) = App::new(flags);
    assert_eq!(app.main_window().layout(), Layout::Extended);
}
