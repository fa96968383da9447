// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Stylesheet(StylesheetError),
}

/// Failures while reading or interpreting a stylesheet fragment.
///
/// Stylesheets are optional, so callers log these and fall back to the
/// built-in palette rather than surfacing them to the user.
#[derive(Debug, Clone)]
pub enum StylesheetError {
    /// The merged document is not valid TOML.
    Parse(String),

    /// A palette entry is not a `#rrggbb` or `#rrggbbaa` color.
    InvalidColor { key: String, value: String },
}

impl fmt::Display for StylesheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StylesheetError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StylesheetError::InvalidColor { key, value } => {
                write!(f, "Invalid color for '{}': {}", key, value)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Stylesheet(e) => write!(f, "Stylesheet Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<StylesheetError> for Error {
    fn from(err: StylesheetError) -> Self {
        Error::Stylesheet(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
