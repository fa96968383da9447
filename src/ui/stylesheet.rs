// SPDX-License-Identifier: MPL-2.0
//! Stylesheet fragments read from the resource directory.
//!
//! Two TOML fragments, `common.toml` then `main_window.toml`, are read
//! best-effort and merged; entries of the later fragment win. A fragment may
//! carry a `[palette]` table of hex colors and a `[resources]` table of asset
//! paths:
//!
//! ```toml
//! [palette]
//! background = "#282a36"
//! accent = "#bd93f9"
//!
//! [resources]
//! logo = "@resources/images/logo.png"
//! ```
//!
//! Missing files are logged and skipped; the built-in palette is used for
//! anything no fragment names.

use crate::config::Layout;
use crate::error::{Result, StylesheetError};
use iced::Color;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Fragment file names, in merge order.
pub const FRAGMENTS: [&str; 2] = ["common.toml", "main_window.toml"];

/// Placeholder rewritten to the absolute resource directory.
pub const RESOURCE_PLACEHOLDER: &str = "@resources/";

/// Resource key of the image shown in the extended title bar.
pub const LOGO_RESOURCE: &str = "logo";

/// Colors named by the stylesheet. `None` keeps the built-in color.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaletteOverrides {
    pub background: Option<Color>,
    pub menu: Option<Color>,
    pub title_bar: Option<Color>,
    pub selection: Option<Color>,
    pub text: Option<Color>,
    pub text_secondary: Option<Color>,
    pub accent: Option<Color>,
    pub accent_hover: Option<Color>,
    pub success: Option<Color>,
    pub warning: Option<Color>,
    pub error: Option<Color>,
    pub info: Option<Color>,
}

impl PaletteOverrides {
    fn slot(&mut self, key: &str) -> Option<&mut Option<Color>> {
        let slot = match key {
            "background" => &mut self.background,
            "menu" => &mut self.menu,
            "title_bar" => &mut self.title_bar,
            "selection" => &mut self.selection,
            "text" => &mut self.text,
            "text_secondary" => &mut self.text_secondary,
            "accent" => &mut self.accent,
            "accent_hover" => &mut self.accent_hover,
            "success" => &mut self.success,
            "warning" => &mut self.warning,
            "error" => &mut self.error,
            "info" => &mut self.info,
            _ => return None,
        };
        Some(slot)
    }

    /// Layers `other` on top; colors it names replace ours.
    pub fn merge(&mut self, other: &PaletteOverrides) {
        let pairs = [
            (&mut self.background, other.background),
            (&mut self.menu, other.menu),
            (&mut self.title_bar, other.title_bar),
            (&mut self.selection, other.selection),
            (&mut self.text, other.text),
            (&mut self.text_secondary, other.text_secondary),
            (&mut self.accent, other.accent),
            (&mut self.accent_hover, other.accent_hover),
            (&mut self.success, other.success),
            (&mut self.warning, other.warning),
            (&mut self.error, other.error),
            (&mut self.info, other.info),
        ];
        for (slot, value) in pairs {
            if value.is_some() {
                *slot = value;
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct Document {
    #[serde(default)]
    palette: BTreeMap<String, String>,
    #[serde(default)]
    resources: BTreeMap<String, String>,
}

/// A parsed and merged stylesheet.
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    source: String,
    palette: PaletteOverrides,
    resources: BTreeMap<String, String>,
}

impl Stylesheet {
    /// Parses a single fragment.
    pub fn parse(text: &str) -> Result<Self> {
        let document: Document =
            toml::from_str(text).map_err(|err| StylesheetError::Parse(err.to_string()))?;

        let mut palette = PaletteOverrides::default();
        for (key, value) in &document.palette {
            let color = parse_hex_color(value).ok_or_else(|| StylesheetError::InvalidColor {
                key: key.clone(),
                value: value.clone(),
            })?;
            match palette.slot(key) {
                Some(slot) => *slot = Some(color),
                None => tracing::warn!(key = %key, "unknown palette entry ignored"),
            }
        }

        Ok(Self {
            source: text.to_owned(),
            palette,
            resources: document.resources,
        })
    }

    /// Merges fragments in order. Each fragment must parse on its own.
    #[cfg(test)]
    fn from_fragments<S: AsRef<str>>(fragments: &[S]) -> Result<Self> {
        let mut merged = Self::default();
        for fragment in fragments {
            let parsed = Self::parse(fragment.as_ref())?;
            merged.merge(parsed);
        }
        Ok(merged)
    }

    fn merge(&mut self, other: Stylesheet) {
        if !self.source.is_empty() && !other.source.is_empty() {
            self.source.push_str("\n\n");
        }
        self.source.push_str(&other.source);
        self.palette.merge(&other.palette);
        self.resources.extend(other.resources);
    }

    #[must_use]
    pub fn palette(&self) -> &PaletteOverrides {
        &self.palette
    }

    /// Asset path registered under `key`.
    #[must_use]
    pub fn resource(&self, key: &str) -> Option<&str> {
        self.resources.get(key).map(String::as_str)
    }

    /// Combined text of every fragment that was applied.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.source.trim().is_empty()
    }
}

/// Replaces every `@resources/` placeholder with `<dir>/`.
#[must_use]
pub fn rewrite_resource_paths(text: &str, dir: &Path) -> String {
    let mut base = dir.to_string_lossy().replace('\\', "/");
    if !base.ends_with('/') {
        base.push('/');
    }
    text.replace(RESOURCE_PLACEHOLDER, &base)
}

/// Reads and merges the fragments found in `dir`.
///
/// Never fails: a missing fragment is logged at `warn`, an unreadable or
/// invalid one at `error`, and the remaining fragments still apply. The
/// extended layout has placeholders rewritten before parsing.
#[must_use]
pub fn load(dir: &Path, layout: Layout) -> Stylesheet {
    let resource_dir = fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf());
    let mut stylesheet = Stylesheet::default();

    for name in FRAGMENTS {
        let path = dir.join(name);
        let Some(text) = read_fragment(&path) else {
            continue;
        };
        let text = match layout {
            Layout::Extended => rewrite_resource_paths(&text, &resource_dir),
            Layout::Simple => text,
        };
        match Stylesheet::parse(&text) {
            Ok(fragment) => stylesheet.merge(fragment),
            Err(err) => tracing::error!(path = %path.display(), "invalid stylesheet: {err}"),
        }
    }

    if stylesheet.is_empty() {
        tracing::info!(dir = %dir.display(), "no stylesheet applied, using built-in palette");
    }
    stylesheet
}

fn read_fragment(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "stylesheet not found");
            None
        }
        Err(err) => {
            tracing::error!(path = %path.display(), "failed to read stylesheet: {err}");
            None
        }
    }
}

/// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`.
#[must_use]
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();

    match hex.len() {
        3 => {
            let short = |i: usize| channel(i..i + 1).map(|v| v * 17);
            Some(Color::from_rgb8(short(0)?, short(1)?, short(2)?))
        }
        6 => Some(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        8 => {
            let alpha = f32::from(channel(6..8)?) / 255.0;
            Some(Color::from_rgba8(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                alpha,
            ))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn parses_palette_colors() {
        let sheet = Stylesheet::parse("[palette]\nbackground = \"#282a36\"\ntext = \"#fff\"\n")
            .expect("valid stylesheet");
        assert_eq!(
            sheet.palette().background,
            Some(Color::from_rgb8(0x28, 0x2a, 0x36))
        );
        assert_eq!(sheet.palette().text, Some(Color::WHITE));
        assert_eq!(sheet.palette().accent, None);
    }

    #[test]
    fn invalid_color_is_reported_with_its_key() {
        let err = Stylesheet::parse("[palette]\naccent = \"purple\"\n").unwrap_err();
        match err {
            Error::Stylesheet(StylesheetError::InvalidColor { key, value }) => {
                assert_eq!(key, "accent");
                assert_eq!(value, "purple");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        assert!(matches!(
            Stylesheet::parse("[palette"),
            Err(Error::Stylesheet(StylesheetError::Parse(_)))
        ));
    }

    #[test]
    fn later_fragment_wins() {
        let sheet = Stylesheet::from_fragments(&[
            "[palette]\naccent = \"#111111\"\nmenu = \"#222222\"\n",
            "[palette]\naccent = \"#333333\"\n",
        ])
        .expect("valid fragments");

        assert_eq!(sheet.palette().accent, Some(Color::from_rgb8(0x33, 0x33, 0x33)));
        assert_eq!(sheet.palette().menu, Some(Color::from_rgb8(0x22, 0x22, 0x22)));
        assert!(sheet.source().contains("\n\n"));
    }

    #[test]
    fn unknown_palette_keys_are_ignored() {
        let sheet = Stylesheet::parse("[palette]\nsparkle = \"#123456\"\n").expect("valid");
        assert_eq!(sheet.palette(), &PaletteOverrides::default());
    }

    #[test]
    fn rewrites_resource_placeholders() {
        let text = "logo = \"@resources/images/logo.png\"";
        let rewritten = rewrite_resource_paths(text, Path::new("/opt/dracula"));
        assert_eq!(rewritten, "logo = \"/opt/dracula/images/logo.png\"");
    }

    #[test]
    fn hex_color_forms() {
        assert_eq!(parse_hex_color("#000"), Some(Color::BLACK));
        assert_eq!(parse_hex_color("#ffffff"), Some(Color::WHITE));
        let translucent = parse_hex_color("#00000080").expect("rgba");
        assert!((translucent.a - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(parse_hex_color("ffffff"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#gggggg"), None);
    }
}
