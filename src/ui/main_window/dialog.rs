// SPDX-License-Identifier: MPL-2.0
//! Native message boxes.
//!
//! Dialogs run on rfd's async backend so the update loop keeps going; the
//! answer comes back as the output of the returned [`Task`].

use iced::Task;
use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogKind {
    #[default]
    Info,
    Warning,
    Error,
    Success,
}

impl DialogKind {
    /// Native severity used to render the dialog.
    ///
    /// There is no native "success" box, so it shares the info styling.
    #[must_use]
    pub fn level(self) -> MessageLevel {
        match self {
            DialogKind::Info | DialogKind::Success => MessageLevel::Info,
            DialogKind::Warning => MessageLevel::Warning,
            DialogKind::Error => MessageLevel::Error,
        }
    }
}

impl FromStr for DialogKind {
    type Err = std::convert::Infallible;

    /// Unrecognized kinds are treated as `Info`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value.to_ascii_lowercase().as_str() {
            "warning" => DialogKind::Warning,
            "error" => DialogKind::Error,
            "success" => DialogKind::Success,
            _ => DialogKind::Info,
        })
    }
}

impl fmt::Display for DialogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialogKind::Info => write!(f, "info"),
            DialogKind::Warning => write!(f, "warning"),
            DialogKind::Error => write!(f, "error"),
            DialogKind::Success => write!(f, "success"),
        }
    }
}

/// Whether a dialog result counts as "yes". Dismissal counts as no.
#[must_use]
pub fn is_affirmative(result: &MessageDialogResult) -> bool {
    matches!(result, MessageDialogResult::Yes)
}

/// Shows an informational box with a single OK button.
pub fn show_message(
    title: impl Into<String>,
    text: impl Into<String>,
    kind: DialogKind,
) -> Task<()> {
    let (title, text) = (title.into(), text.into());
    tracing::debug!(%kind, %title, "showing message dialog");

    Task::perform(
        async move {
            AsyncMessageDialog::new()
                .set_level(kind.level())
                .set_title(&title)
                .set_description(&text)
                .set_buttons(MessageButtons::Ok)
                .show()
                .await;
        },
        |()| (),
    )
}

/// Asks a yes/no question. Resolves to `true` only for an explicit yes.
pub fn show_confirmation(title: impl Into<String>, text: impl Into<String>) -> Task<bool> {
    let (title, text) = (title.into(), text.into());
    tracing::debug!(%title, "showing confirmation dialog");

    Task::perform(
        async move {
            AsyncMessageDialog::new()
                .set_level(MessageLevel::Info)
                .set_title(&title)
                .set_description(&text)
                .set_buttons(MessageButtons::YesNo)
                .show()
                .await
        },
        |result| is_affirmative(&result),
    )
}
