// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Follows the Elm-style "state down, messages up" pattern: state types in
//! [`state`] are plain data advanced by explicit ticks, and
//! [`main_window`] turns them into widgets and user input into events.
//!
//! - [`main_window`] - The window facade: menu, panels, pages, feedback
//! - [`state`] - Panel tweens, menu selection, feedback timers, table rows
//! - [`stylesheet`] - TOML stylesheet fragments layered over the palette
//! - [`styles`] - Button and container styles
//! - [`widgets`] - Custom Iced widgets (loading spinner)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod main_window;
pub mod state;
pub mod styles;
pub mod stylesheet;
pub mod theming;
pub mod widgets;
