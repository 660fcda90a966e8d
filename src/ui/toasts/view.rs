// SPDX-License-Identifier: MPL-2.0
//! The passive visual unit shown as a toast.
//!
//! A [`ToastView`] carries its identity, the flags that drive stacking and
//! drag behavior, and the visual state the manager animates. It renders
//! nothing by itself; see [`super::layer`] for drawing.

use crate::ui::design_tokens::{palette, sizing};
use iced::{Color, Point, Rectangle};

use super::layout::Transform;

/// Unique identifier for a toast view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ToastId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "toast#{}", self.0)
    }
}

/// What a toast displays.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastContent {
    pub title: String,
    /// Single glyph drawn on the trailing side.
    pub icon: Option<char>,
    pub background: Color,
    pub tint: Color,
    /// Background used while the toast is receded behind a newer one.
    pub former_background: Color,
    /// Tint used while the toast is receded behind a newer one.
    pub former_tint: Color,
}

impl ToastContent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: None,
            background: palette::GRAY_900,
            tint: palette::WHITE,
            former_background: palette::TOAST_FORMER_BACKGROUND,
            former_tint: palette::TOAST_FORMER_TINT,
        }
    }

    /// Colors to draw with, depending on whether the toast is current.
    #[must_use]
    pub fn colors(&self, is_current: bool) -> (Color, Color) {
        if is_current {
            (self.background, self.tint)
        } else {
            (self.former_background, self.former_tint)
        }
    }
}

/// A toast view and its presentation state.
///
/// Views are deliberately not `Clone`: a view is moved into the manager when
/// shown, so the same view can never back two records.
#[derive(Debug)]
pub struct ToastView {
    id: ToastId,
    content: ToastContent,
    height: f32,
    /// View-local region that accepts drags. `None` means the whole view.
    content_bounds: Option<Rectangle>,

    is_current: bool,
    is_stack_transform_enabled: bool,
    is_moved: bool,
    is_bounced: bool,
    is_relative_to_safe_area: bool,
    is_hidden: bool,

    transform: Transform,
    alpha: f32,
}

impl ToastView {
    /// Creates a plain toast view with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self::from_content(ToastContent::new(title))
    }

    #[must_use]
    pub fn from_content(content: ToastContent) -> Self {
        Self {
            id: ToastId::new(),
            content,
            height: sizing::TOAST_HEIGHT,
            content_bounds: None,
            is_current: true,
            is_stack_transform_enabled: false,
            is_moved: false,
            is_bounced: true,
            is_relative_to_safe_area: true,
            is_hidden: false,
            transform: Transform::IDENTITY,
            alpha: 1.0,
        }
    }

    #[must_use]
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height.max(0.0);
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: char) -> Self {
        self.content.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn with_colors(mut self, background: Color, tint: Color) -> Self {
        self.content.background = background;
        self.content.tint = tint;
        self
    }

    /// Restricts drags to a view-local region (e.g. a card inside padding).
    #[must_use]
    pub fn with_content_bounds(mut self, bounds: Rectangle) -> Self {
        self.content_bounds = Some(bounds);
        self
    }

    /// Whether the view takes part in scale/translate stacking effects.
    #[must_use]
    pub fn stacking(mut self, enabled: bool) -> Self {
        self.is_stack_transform_enabled = enabled;
        self
    }

    /// Whether dragging past neutral rubber-bands instead of stopping.
    #[must_use]
    pub fn bounced(mut self, enabled: bool) -> Self {
        self.is_bounced = enabled;
        self
    }

    #[must_use]
    pub fn relative_to_safe_area(mut self, enabled: bool) -> Self {
        self.is_relative_to_safe_area = enabled;
        self
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn content(&self) -> &ToastContent {
        &self.content
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[must_use]
    pub fn content_bounds(&self) -> Option<Rectangle> {
        self.content_bounds
    }

    /// Whether a drag starting at the view-local `location` may move the view.
    #[must_use]
    pub fn accepts_drag_at(&self, location: Point) -> bool {
        self.content_bounds
            .map_or(true, |bounds| bounds.contains(location))
    }

    #[must_use]
    pub fn is_current(&self) -> bool {
        self.is_current
    }

    #[must_use]
    pub fn is_stack_transform_enabled(&self) -> bool {
        self.is_stack_transform_enabled
    }

    #[must_use]
    pub fn is_moved(&self) -> bool {
        self.is_moved
    }

    #[must_use]
    pub fn is_bounced(&self) -> bool {
        self.is_bounced
    }

    #[must_use]
    pub fn is_relative_to_safe_area(&self) -> bool {
        self.is_relative_to_safe_area
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.is_hidden
    }

    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub(crate) fn set_current(&mut self, current: bool) {
        self.is_current = current;
    }

    pub(crate) fn set_moved(&mut self, moved: bool) {
        self.is_moved = moved;
    }

    pub(crate) fn set_hidden(&mut self, hidden: bool) {
        self.is_hidden = hidden;
    }

    pub(crate) fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    pub(crate) fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }
}
