// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::toasts;
use iced::{event, time, Subscription};
use std::time::{Duration, Instant};

/// Frame interval used while toasts animate.
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Routes window resizes so the toast container follows the window size.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(iced::window::Event::Resized(size)) = event {
            return Some(Message::WindowResized(size));
        }
        None
    })
}

/// Interval the toast tick should run at, if any.
///
/// Animations need a frame tick. A toast that is only waiting for its
/// deadline is woken once the deadline is due.
#[must_use]
pub fn tick_interval(
    is_animating: bool,
    next_deadline: Option<Instant>,
    now: Instant,
) -> Option<Duration> {
    if is_animating {
        return Some(TICK_INTERVAL);
    }
    next_deadline.map(|deadline| deadline.saturating_duration_since(now).max(TICK_INTERVAL))
}

/// Creates the tick driving the toast manager.
///
/// An idle manager gets no tick, so the window does not wake up.
pub fn create_tick_subscription(
    is_animating: bool,
    next_deadline: Option<Instant>,
) -> Subscription<Message> {
    match tick_interval(is_animating, next_deadline, Instant::now()) {
        Some(interval) => {
            time::every(interval).map(|now| Message::Toast(toasts::Message::Tick(now)))
        }
        None => Subscription::none(),
    }
}
