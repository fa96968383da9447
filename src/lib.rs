// SPDX-License-Identifier: MPL-2.0
//! `dracula_gui` is a dark-themed desktop shell built with the Iced GUI
//! framework.
//!
//! It shows an animated side menu, optional extra panels, a records table
//! and transient success and status feedback, with Fluent localization and
//! TOML stylesheets layered over the built-in palette.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
