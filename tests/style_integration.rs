// SPDX-License-Identifier: MPL-2.0
//! Integration tests for stylesheet loading and theme coherence.

#[cfg(test)]
mod tests {
    use dracula_gui::config::Layout;
    use dracula_gui::ui::styles::{button, container};
    use dracula_gui::ui::stylesheet::{self, parse_hex_color};
    use dracula_gui::ui::theming::{AppTheme, ColorScheme, ThemeMode};
    use iced::Theme;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn all_styles_are_callable_with_the_dark_scheme() {
        let theme = Theme::Dark;
        let colors = ColorScheme::dark();

        let _ = button::menu_item(colors, true)(&theme, iced::widget::button::Status::Hovered);
        let _ = button::chrome(colors)(&theme, iced::widget::button::Status::Active);
        let _ = button::chrome_close(colors)(&theme, iced::widget::button::Status::Pressed);
        let _ = button::primary(colors)(&theme, iced::widget::button::Status::Disabled);
        let _ = container::table_row(colors, true)(&theme);
        let _ = container::title_bar(colors)(&theme);
    }

    #[test]
    fn missing_directory_yields_empty_stylesheet() {
        let dir = tempdir().expect("temp dir");
        let sheet = stylesheet::load(&dir.path().join("absent"), Layout::Simple);
        assert!(sheet.is_empty());

        let theme = AppTheme::with_stylesheet(ThemeMode::Dark, &sheet);
        assert_eq!(theme.colors, ColorScheme::dark());
    }

    #[test]
    fn later_fragment_wins_and_both_sources_are_kept() {
        let dir = tempdir().expect("temp dir");
        fs::write(
            dir.path().join("common.toml"),
            "[palette]\naccent = \"#112233\"\nmenu = \"#000000\"\n",
        )
        .expect("write common");
        fs::write(
            dir.path().join("main_window.toml"),
            "[palette]\naccent = \"#445566\"\n",
        )
        .expect("write main window");

        let sheet = stylesheet::load(dir.path(), Layout::Simple);
        assert_eq!(sheet.palette().accent, parse_hex_color("#445566"));
        assert_eq!(sheet.palette().menu, parse_hex_color("#000000"));
        assert!(sheet.source().contains("#112233"));
        assert!(sheet.source().contains("#445566"));

        let theme = AppTheme::with_stylesheet(ThemeMode::Dark, &sheet);
        assert_eq!(Some(theme.colors.accent), parse_hex_color("#445566"));
    }

    #[test]
    fn invalid_fragment_is_skipped_and_the_other_still_applies() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("common.toml"), "[palette\naccent = ")
            .expect("write common");
        fs::write(
            dir.path().join("main_window.toml"),
            "[palette]\nbackground = \"#101010\"\n",
        )
        .expect("write main window");

        let sheet = stylesheet::load(dir.path(), Layout::Simple);
        assert_eq!(sheet.palette().background, parse_hex_color("#101010"));
        assert!(sheet.palette().accent.is_none());
    }

    #[test]
    fn extended_layout_rewrites_resource_placeholders() {
        let dir = tempdir().expect("temp dir");
        fs::write(
            dir.path().join("main_window.toml"),
            "[resources]\nlogo = \"@resources/images/logo.png\"\n",
        )
        .expect("write main window");

        let simple = stylesheet::load(dir.path(), Layout::Simple);
        assert_eq!(simple.resource("logo"), Some("@resources/images/logo.png"));

        let extended = stylesheet::load(dir.path(), Layout::Extended);
        let logo = extended.resource("logo").expect("logo resource");
        assert!(!logo.contains("@resources/"));
        assert!(logo.ends_with("/images/logo.png"));
    }

    #[test]
    fn theming_switches_correctly() {
        let light = AppTheme::new(ThemeMode::Light);
        let dark = AppTheme::new(ThemeMode::Dark);
        assert_ne!(light.colors.background, dark.colors.background);
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
    }
}
