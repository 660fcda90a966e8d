// SPDX-License-Identifier: MPL-2.0
//! Touch and drag input for toasts.
//!
//! Drags are one-dimensional: only the vertical translation matters. Moving
//! toward the toast's edge (up for top toasts, down for bottom ones) is
//! damped lightly, moving the other way is damped more strongly.

use super::layout::Position;
use super::settings::Settings;
use iced::Point;

/// Phase of a press on a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Began,
    Ended,
    Cancelled,
}

/// Phase of a vertical drag on a toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragPhase {
    /// `location` is view-local.
    Began { location: Point },
    /// `translation_y` is the raw pointer movement since the drag began.
    Changed { translation_y: f32 },
    Ended { translation_y: f32 },
    Cancelled,
}

/// Damped on-screen offset for a raw drag translation.
#[must_use]
pub fn damped_offset(
    position: Position,
    translation_y: f32,
    is_bounced: bool,
    settings: &Settings,
) -> f32 {
    let toward_edge = translation_y * position.outward() > 0.0;
    let offset = if toward_edge {
        translation_y / settings.toward_dismiss_damping
    } else {
        translation_y / settings.toward_neutral_damping
    };

    if !is_bounced && offset * position.outward() < 0.0 {
        0.0
    } else {
        offset
    }
}

/// Whether releasing a drag at `translation_y` should dismiss the toast.
#[must_use]
pub fn should_dismiss(
    position: Position,
    translation_y: f32,
    height: f32,
    settings: &Settings,
) -> bool {
    translation_y * position.outward() > height * settings.dismiss_threshold
}
