// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Panels**: Collapsed/expanded extents and slide duration
//! - **Feedback**: Success fade timings and status auto-revert timeout
//! - **Window**: Default and minimum window size

// ==========================================================================
// Panel Defaults
// ==========================================================================

/// Width of the main navigation menu when expanded.
pub const DEFAULT_MENU_EXPANDED_WIDTH: f32 = 220.0;

/// Width of the main navigation menu when collapsed to icons.
pub const DEFAULT_MENU_COLLAPSED_WIDTH: f32 = 72.0;

/// Width of the left "extra" panel when open.
pub const DEFAULT_EXTRA_LEFT_WIDTH: f32 = 240.0;

/// Width of the right settings drawer when open.
pub const DEFAULT_EXTRA_RIGHT_WIDTH: f32 = 240.0;

/// Side panels disappear completely when collapsed.
pub const EXTRA_PANEL_COLLAPSED_WIDTH: f32 = 0.0;

/// Upper bound for any configurable panel extent.
pub const MAX_PANEL_WIDTH: f32 = 600.0;

/// Default duration of a panel slide animation (in milliseconds).
pub const DEFAULT_PANEL_ANIMATION_MS: u64 = 250;

/// Minimum panel animation duration (in milliseconds).
pub const MIN_PANEL_ANIMATION_MS: u64 = 200;

/// Maximum panel animation duration (in milliseconds).
pub const MAX_PANEL_ANIMATION_MS: u64 = 300;

// ==========================================================================
// Feedback Defaults
// ==========================================================================

/// Success feedback fade-in duration (in milliseconds).
pub const FEEDBACK_FADE_IN_MS: u64 = 200;

/// Success feedback hold duration at full opacity (in milliseconds).
pub const FEEDBACK_HOLD_MS: u64 = 1200;

/// Success feedback fade-out duration (in milliseconds).
pub const FEEDBACK_FADE_OUT_MS: u64 = 300;

/// Default time before a status message reverts to the idle text.
pub const DEFAULT_STATUS_TIMEOUT_MS: u64 = 3000;

/// Longest configurable status timeout (in milliseconds).
pub const MAX_STATUS_TIMEOUT_MS: u64 = 60_000;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 650.0;
pub const MIN_WINDOW_WIDTH: f32 = 940.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_MENU_COLLAPSED_WIDTH > 0.0);
    assert!(DEFAULT_MENU_EXPANDED_WIDTH > DEFAULT_MENU_COLLAPSED_WIDTH);
    assert!(DEFAULT_MENU_EXPANDED_WIDTH <= MAX_PANEL_WIDTH);
    assert!(DEFAULT_EXTRA_LEFT_WIDTH > EXTRA_PANEL_COLLAPSED_WIDTH);
    assert!(DEFAULT_EXTRA_RIGHT_WIDTH > EXTRA_PANEL_COLLAPSED_WIDTH);

    assert!(MIN_PANEL_ANIMATION_MS > 0);
    assert!(DEFAULT_PANEL_ANIMATION_MS >= MIN_PANEL_ANIMATION_MS);
    assert!(DEFAULT_PANEL_ANIMATION_MS <= MAX_PANEL_ANIMATION_MS);
    assert!(MIN_PANEL_ANIMATION_MS >= 200);
    assert!(MAX_PANEL_ANIMATION_MS <= 300);

    assert!(FEEDBACK_FADE_IN_MS > 0);
    assert!(FEEDBACK_FADE_OUT_MS > 0);
    assert!(DEFAULT_STATUS_TIMEOUT_MS <= MAX_STATUS_TIMEOUT_MS);

    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
};
