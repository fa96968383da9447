// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! The view state lives here, apart from any widget code, so it can be driven
//! by simulated time in tests.

pub mod animation;
pub mod feedback;
pub mod menu;
pub mod panel;
pub mod table;

// Re-export commonly used types for convenience
pub use feedback::{StatusMessage, SuccessFeedback};
pub use menu::{MenuItem, MenuSelection, Page};
pub use panel::{PanelId, PanelState, Settled};
pub use table::{RecordTable, TableRecord};
