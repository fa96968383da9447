// SPDX-License-Identifier: MPL-2.0
//! Tick subscriptions.
//!
//! Nothing ticks while the window is idle. Panel slides and the success
//! fade need frame-rate ticks; status reverts and the loading spinner are
//! served by a coarser timer.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Roughly one frame at 60 Hz.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub const TIMER_INTERVAL: Duration = Duration::from_millis(100);

/// Picks the tick rate the current state needs.
pub fn create_tick_subscription(needs_frames: bool, needs_timer: bool) -> Subscription<Message> {
    if needs_frames {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else if needs_timer {
        time::every(TIMER_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
