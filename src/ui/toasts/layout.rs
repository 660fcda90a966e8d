// SPDX-License-Identifier: MPL-2.0
//! Edge-anchored positioning and the stacking transforms.
//!
//! A toast spans the width of its container (optionally inside the safe
//! area) and sticks to the top or bottom edge. Its on-screen appearance is
//! then adjusted by a [`Transform`] around its centre.

use super::container::Container;
use super::settings::Settings;
use super::view::ToastView;
use iced::{Padding, Point, Rectangle, Size};

/// Edge of the container a toast is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Position {
    #[default]
    Top,
    Bottom,
}

impl Position {
    /// Sign of the direction pointing off-screen from this edge (-1 up, +1 down).
    #[must_use]
    pub fn outward(self) -> f32 {
        match self {
            Position::Top => -1.0,
            Position::Bottom => 1.0,
        }
    }

    /// Safe-area inset on this edge.
    #[must_use]
    pub fn edge_inset(self, safe_area: Padding) -> f32 {
        match self {
            Position::Top => safe_area.top,
            Position::Bottom => safe_area.bottom,
        }
    }
}

/// Vertical translation followed by a uniform scale around the view centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate_y: f32,
    pub scale: f32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translate_y: 0.0,
        scale: 1.0,
    };

    #[must_use]
    pub fn translation(translate_y: f32) -> Self {
        Self {
            translate_y,
            scale: 1.0,
        }
    }

    #[must_use]
    pub fn scaled(self, scale: f32) -> Self {
        Self {
            scale: self.scale * scale,
            ..self
        }
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Linear interpolation between two transforms.
    #[must_use]
    pub fn lerp(self, to: Transform, t: f32) -> Transform {
        Transform {
            translate_y: self.translate_y + (to.translate_y - self.translate_y) * t,
            scale: self.scale + (to.scale - self.scale) * t,
        }
    }

    /// Applies the transform to a frame, returning the rectangle it covers.
    #[must_use]
    pub fn apply(&self, frame: Rectangle) -> Rectangle {
        let center = frame.center();
        let size = Size::new(frame.width * self.scale, frame.height * self.scale);
        Rectangle::new(
            Point::new(
                center.x - size.width / 2.0,
                center.y + self.translate_y - size.height / 2.0,
            ),
            size,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Insets a view is laid out against inside its container.
#[must_use]
pub fn layout_insets(container: &Container, view: &ToastView) -> Padding {
    if view.is_relative_to_safe_area() {
        container.safe_area()
    } else {
        Padding::ZERO
    }
}

/// Frame of `view` anchored to `position` inside `container`, before transforms.
#[must_use]
pub fn anchored_frame(container: &Container, view: &ToastView, position: Position) -> Rectangle {
    let insets = layout_insets(container, view);
    let size = container.size();
    let width = (size.width - insets.left - insets.right).max(0.0);
    let height = view.height();

    let y = match position {
        Position::Top => insets.top,
        Position::Bottom => size.height - insets.bottom - height,
    };

    Rectangle::new(Point::new(insets.left, y), Size::new(width, height))
}

/// Off-screen transform a toast slides in from (and back out to).
///
/// The distance is the edge safe-area inset plus the view height, so the
/// toast starts fully outside the visible area.
#[must_use]
pub fn offscreen_transform(
    position: Position,
    safe_area: Padding,
    height: f32,
    scale: Option<f32>,
) -> Transform {
    let inset = position.edge_inset(safe_area) + height;
    let transform = Transform::translation(position.outward() * inset);
    match scale {
        Some(scale) => transform.scaled(scale),
        None => transform,
    }
}

/// Starting transform of an entering toast.
#[must_use]
pub fn entering_transform(
    position: Position,
    safe_area: Padding,
    view: &ToastView,
    settings: &Settings,
) -> Transform {
    let scale = view
        .is_stack_transform_enabled()
        .then_some(settings.entering_scale);
    offscreen_transform(position, safe_area, view.height(), scale)
}

/// Final transform of a leaving toast.
#[must_use]
pub fn exiting_transform(
    position: Position,
    safe_area: Padding,
    view: &ToastView,
    settings: &Settings,
) -> Transform {
    let scale = view
        .is_stack_transform_enabled()
        .then_some(settings.exiting_scale);
    offscreen_transform(position, safe_area, view.height(), scale)
}

/// Transform of a toast pushed back by a newer one in its group.
///
/// `shrink` is set when the newer toast takes part in stacking; the receded
/// toast then loses `receded_inset` points of width.
#[must_use]
pub fn receded_transform(
    position: Position,
    width: f32,
    shrink: bool,
    settings: &Settings,
) -> Transform {
    let transform = Transform::translation(position.outward() * settings.receded_offset);
    if shrink && width > settings.receded_inset {
        transform.scaled((width - settings.receded_inset) / width)
    } else {
        transform
    }
}
