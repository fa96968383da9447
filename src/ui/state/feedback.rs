// SPDX-License-Identifier: MPL-2.0
//! Transient feedback labels.
//!
//! [`SuccessFeedback`] fades a message in, holds it, and fades it out.
//! [`StatusMessage`] swaps the status text at once and reverts it to the
//! idle text after an optional timeout. Both are advanced by explicit ticks.

use super::animation::{Easing, Tween};
use crate::config::{FEEDBACK_FADE_IN_MS, FEEDBACK_FADE_OUT_MS, FEEDBACK_HOLD_MS};
use std::time::{Duration, Instant};

/// What a finished success sequence leaves behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The label disappears.
    Hide,
    /// The label stays, showing its idle text at full opacity.
    RestoreIdle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    FadeIn,
    Hold,
    FadeOut,
}

impl Phase {
    fn duration(self) -> Duration {
        let ms = match self {
            Phase::FadeIn => FEEDBACK_FADE_IN_MS,
            Phase::Hold => FEEDBACK_HOLD_MS,
            Phase::FadeOut => FEEDBACK_FADE_OUT_MS,
        };
        Duration::from_millis(ms)
    }

    fn tween(self, started_at: Instant) -> Tween {
        let (from, to) = match self {
            Phase::FadeIn => (0.0, 1.0),
            Phase::Hold => (1.0, 1.0),
            Phase::FadeOut => (1.0, 0.0),
        };
        Tween::new(from, to, started_at, self.duration(), Easing::Linear)
    }

    fn next(self) -> Option<Phase> {
        match self {
            Phase::FadeIn => Some(Phase::Hold),
            Phase::Hold => Some(Phase::FadeOut),
            Phase::FadeOut => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Sequence {
    phase: Phase,
    tween: Tween,
}

impl Sequence {
    fn start(now: Instant) -> Self {
        Self {
            phase: Phase::FadeIn,
            tween: Phase::FadeIn.tween(now),
        }
    }
}

/// Total time from `show` to completion.
#[cfg(test)]
fn success_sequence_duration() -> Duration {
    Phase::FadeIn.duration() + Phase::Hold.duration() + Phase::FadeOut.duration()
}

#[derive(Debug, Clone)]
pub struct SuccessFeedback {
    message: Option<String>,
    idle_text: String,
    opacity: f32,
    visible: bool,
    completion: Completion,
    sequence: Option<Sequence>,
}

impl SuccessFeedback {
    /// A label that is hidden between messages.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            message: None,
            idle_text: String::new(),
            opacity: 0.0,
            visible: false,
            completion: Completion::Hide,
            sequence: None,
        }
    }

    /// A persistent label that shows `idle_text` between messages.
    #[must_use]
    pub fn persistent(idle_text: impl Into<String>) -> Self {
        Self {
            message: None,
            idle_text: idle_text.into(),
            opacity: 1.0,
            visible: true,
            completion: Completion::RestoreIdle,
            sequence: None,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.message.as_deref().unwrap_or(&self.idle_text)
    }

    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.sequence.is_some()
    }

    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        self.sequence.map(|sequence| sequence.phase)
    }

    #[must_use]
    pub fn completion(&self) -> Completion {
        self.completion
    }

    /// Replaces the idle text, e.g. after a language change.
    pub fn set_idle_text(&mut self, idle_text: impl Into<String>) {
        self.idle_text = idle_text.into();
    }

    /// Shows `message` and starts the fade-in.
    ///
    /// A sequence already running is dropped; the new one starts from a
    /// transparent label.
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        if self.sequence.is_some() {
            tracing::debug!("restarting success feedback");
        }
        self.message = Some(message.into());
        self.visible = true;
        self.opacity = 0.0;
        self.sequence = Some(Sequence::start(now));
    }

    /// Advances the sequence. Returns `true` on the tick that completes it.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(mut sequence) = self.sequence else {
            return false;
        };

        while sequence.tween.is_finished(now) {
            match sequence.phase.next() {
                Some(phase) => {
                    // Chain from the scheduled end so late ticks do not stretch the sequence.
                    sequence = Sequence {
                        phase,
                        tween: phase.tween(sequence.tween.ends_at()),
                    };
                }
                None => {
                    self.finish();
                    return true;
                }
            }
        }

        self.opacity = sequence.tween.value_at(now);
        self.sequence = Some(sequence);
        false
    }

    fn finish(&mut self) {
        self.sequence = None;
        self.message = None;
        match self.completion {
            Completion::Hide => {
                self.visible = false;
                self.opacity = 0.0;
            }
            Completion::RestoreIdle => {
                self.visible = true;
                self.opacity = 1.0;
            }
        }
    }
}

/// Status label with an optional one-shot revert to its idle text.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    message: Option<String>,
    idle_text: String,
    revert_at: Option<Instant>,
}

impl StatusMessage {
    #[must_use]
    pub fn new(idle_text: impl Into<String>) -> Self {
        Self {
            message: None,
            idle_text: idle_text.into(),
            revert_at: None,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.message.as_deref().unwrap_or(&self.idle_text)
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.message.is_none()
    }

    /// Whether a revert is scheduled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.revert_at.is_some()
    }

    pub fn set_idle_text(&mut self, idle_text: impl Into<String>) {
        self.idle_text = idle_text.into();
    }

    /// Shows `message` immediately.
    ///
    /// A zero `duration`, or one too long to schedule, keeps it until the
    /// next call. Otherwise the text reverts after `duration`; a newer call
    /// replaces the pending revert.
    pub fn show(&mut self, message: impl Into<String>, duration: Duration, now: Instant) {
        self.message = Some(message.into());
        self.revert_at = if duration.is_zero() {
            None
        } else {
            now.checked_add(duration)
        };
    }

    /// Reverts once the deadline has passed. Returns `true` when it does.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.revert_at {
            Some(deadline) if now >= deadline => {
                self.revert_at = None;
                self.message = None;
                true
            }
            _ => false,
        }
    }
}
