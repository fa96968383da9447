// SPDX-License-Identifier: MPL-2.0
//! Width animator for collapsible panels.
//!
//! The same state machine drives the navigation menu, the left extra panel
//! and the right settings drawer. A panel is `Idle` at one of its extents or
//! `Animating` toward one; [`PanelState::tick`] advances it with the frame
//! clock and reports when it settles.
//!
//! The view renders each panel at a fixed width equal to [`PanelState::width`],
//! so that width is both the minimum and maximum layout bound.

use super::animation::{Easing, Tween};
use std::fmt;
use std::time::{Duration, Instant};

/// The three collapsible regions of the main window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    MainMenu,
    ExtraLeft,
    ExtraRight,
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelId::MainMenu => write!(f, "mainMenu"),
            PanelId::ExtraLeft => write!(f, "extraLeft"),
            PanelId::ExtraRight => write!(f, "extraRight"),
        }
    }
}

/// Emitted once when an animation reaches its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settled {
    pub panel: PanelId,
    pub width: f32,
}

#[derive(Debug, Clone)]
pub struct PanelState {
    id: PanelId,
    width: f32,
    collapsed: f32,
    expanded: f32,
    duration: Duration,
    animation: Option<Tween>,
}

impl PanelState {
    /// Creates an idle panel resting at one of its extents.
    #[must_use]
    pub fn new(
        id: PanelId,
        collapsed: f32,
        expanded: f32,
        duration: Duration,
        start_expanded: bool,
    ) -> Self {
        let width = if start_expanded { expanded } else { collapsed };
        Self {
            id,
            width,
            collapsed,
            expanded,
            duration,
            animation: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> PanelId {
        self.id
    }

    /// Current rendered width, possibly mid-animation.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[must_use]
    pub fn collapsed_width(&self) -> f32 {
        self.collapsed
    }

    #[must_use]
    pub fn expanded_width(&self) -> f32 {
        self.expanded
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether the panel is wider than its collapsed extent.
    ///
    /// This is the same threshold test `toggle` uses, so it can be true for
    /// a panel that is still sliding shut.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.width > self.collapsed
    }

    /// Target the panel is heading to, or its resting width when idle.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.animation.map_or(self.width, |tween| tween.to())
    }

    /// Starts sliding toward the opposite extent and returns the target.
    ///
    /// The target is inferred from the current width alone: anything wider
    /// than the collapsed extent collapses, anything else expands. An
    /// in-flight animation is cancelled first, freezing the panel at its
    /// transitional width, so the outcome never depends on which animation
    /// finishes last.
    pub fn toggle(&mut self, now: Instant) -> f32 {
        if let Some(previous) = self.animation.take() {
            self.width = previous.value_at(now);
            tracing::debug!(panel = %self.id, width = self.width, "cancelled in-flight slide");
        }

        let target = if self.width > self.collapsed {
            self.collapsed
        } else {
            self.expanded
        };

        self.animation = Some(Tween::new(
            self.width,
            target,
            now,
            self.duration,
            Easing::InOutCubic,
        ));
        tracing::debug!(panel = %self.id, from = self.width, to = target, "panel slide started");
        target
    }

    /// Advances the animation to `now`.
    ///
    /// Returns `Some` exactly once, on the tick that completes the slide.
    pub fn tick(&mut self, now: Instant) -> Option<Settled> {
        let tween = self.animation?;
        if tween.is_finished(now) {
            self.animation = None;
            self.width = tween.to();
            Some(Settled {
                panel: self.id,
                width: self.width,
            })
        } else {
            self.width = tween.value_at(now);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(250);

    fn menu() -> PanelState {
        PanelState::new(PanelId::MainMenu, 72.0, 220.0, DURATION, true)
    }

    fn run_to_completion(panel: &mut PanelState, start: Instant) -> Instant {
        let end = start + DURATION;
        assert!(panel.tick(end).is_some());
        end
    }

    #[test]
    fn expanded_panel_collapses_on_toggle() {
        let mut panel = menu();
        let start = Instant::now();

        let target = panel.toggle(start);
        assert_eq!(target, 72.0);
        assert!(panel.is_animating());

        let settled = panel.tick(start + DURATION).expect("should settle");
        assert_eq!(settled.panel, PanelId::MainMenu);
        assert_eq!(settled.width, 72.0);
        assert_eq!(panel.width(), 72.0);
        assert!(!panel.is_animating());
    }

    #[test]
    fn two_completed_toggles_return_to_original_extent() {
        let mut panel = menu();
        let start = Instant::now();

        panel.toggle(start);
        let after_first = run_to_completion(&mut panel, start);
        panel.toggle(after_first);
        run_to_completion(&mut panel, after_first);

        assert_eq!(panel.width(), 220.0);
        assert_eq!(panel.target(), 220.0);
    }

    #[test]
    fn collapsed_extra_panel_expands() {
        let mut panel = PanelState::new(PanelId::ExtraLeft, 0.0, 240.0, DURATION, false);
        assert!(!panel.is_expanded());
        assert_eq!(panel.toggle(Instant::now()), 240.0);
    }

    #[test]
    fn width_moves_monotonically_while_animating() {
        let mut panel = menu();
        let start = Instant::now();
        panel.toggle(start);

        let mut previous = panel.width();
        for ms in (10..250).step_by(10) {
            assert!(panel.tick(start + Duration::from_millis(ms)).is_none());
            assert!(panel.width() <= previous);
            assert!(panel.width() >= 72.0);
            previous = panel.width();
        }
    }

    #[test]
    fn settle_is_reported_once() {
        let mut panel = menu();
        let start = Instant::now();
        panel.toggle(start);

        assert!(panel.tick(start + DURATION).is_some());
        assert!(panel.tick(start + DURATION * 2).is_none());
    }

    #[test]
    fn width_stays_between_extents_and_rests_at_target() {
        let mut panel = PanelState::new(PanelId::ExtraRight, 0.0, 240.0, DURATION, false);
        let start = Instant::now();
        let target = panel.toggle(start);

        for ms in [1, 60, 125, 190, 249] {
            panel.tick(start + Duration::from_millis(ms));
            assert!((0.0..=240.0).contains(&panel.width()));
        }

        panel.tick(start + DURATION);
        assert_eq!(panel.width(), target);
        assert_eq!(panel.target(), panel.width());
    }

    #[test]
    fn retrigger_mid_collapse_keeps_collapsing_from_current_width() {
        let mut panel = menu();
        let start = Instant::now();
        panel.toggle(start);

        let midway = start + DURATION / 2;
        panel.tick(midway);
        let transitional = panel.width();
        assert!(transitional > 72.0 && transitional < 220.0);

        // Still wider than the collapsed extent, so the threshold picks collapse again.
        let target = panel.toggle(midway);
        assert_eq!(target, 72.0);
        assert!((panel.width() - transitional).abs() < 1e-3);

        panel.tick(midway + DURATION);
        assert_eq!(panel.width(), 72.0);
    }

    #[test]
    fn retrigger_mid_expand_reverses_toward_collapsed() {
        let mut panel = PanelState::new(PanelId::MainMenu, 72.0, 220.0, DURATION, false);
        let start = Instant::now();
        panel.toggle(start);

        let midway = start + DURATION / 2;
        let target = panel.toggle(midway);
        assert_eq!(target, 72.0);

        // The cancelled expansion never lands: only the new target is reached.
        let settled = panel.tick(midway + DURATION).expect("settles");
        assert_eq!(settled.width, 72.0);
    }

    #[test]
    fn panel_ids_render_as_identifiers() {
        assert_eq!(PanelId::MainMenu.to_string(), "mainMenu");
        assert_eq!(PanelId::ExtraLeft.to_string(), "extraLeft");
        assert_eq!(PanelId::ExtraRight.to_string(), "extraRight");
    }
}
