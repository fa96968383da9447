// SPDX-License-Identifier: MPL-2.0
//! Time-based interpolation shared by the panel and feedback animations.
//!
//! A [`Tween`] is a pure description of a value moving from `from` to `to`
//! over a fixed duration. It holds no timer: callers sample it with the
//! `Instant` delivered by the frame subscription, which keeps every animation
//! deterministic under test.

use std::time::{Duration, Instant};

/// Easing curves applied to normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    InOutCubic,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` onto the curve.
    ///
    /// Input outside the unit interval is clamped.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

/// A value interpolated between two endpoints over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    #[must_use]
    pub fn new(from: f32, to: f32, started_at: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
            easing,
        }
    }

    #[must_use]
    pub fn from(&self) -> f32 {
        self.from
    }

    #[must_use]
    pub fn to(&self) -> f32 {
        self.to
    }

    /// Linear progress in `[0, 1]` at `now`.
    ///
    /// A zero duration is complete immediately.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// `from + (to - from) * ease(elapsed / duration)`.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        let eased = self.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    #[must_use]
    pub fn ends_at(&self) -> Instant {
        self.started_at + self.duration
    }
}
