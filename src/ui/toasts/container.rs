// SPDX-License-Identifier: MPL-2.0
//! Presentation targets toasts are attached to.

use super::view::ToastId;
use iced::{Padding, Size};

/// Unique identifier for a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(u64);

impl ContainerId {
    /// Creates a new unique container ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ContainerId {
    fn default() -> Self {
        Self::new()
    }
}

/// A surface (typically a window) that hosts toast views.
///
/// The container only tracks metrics and which views are attached to it;
/// the views themselves are owned by the manager.
#[derive(Debug, Clone)]
pub struct Container {
    id: ContainerId,
    size: Size,
    safe_area: Padding,
    /// Attached views, in attach order (bottom-most first).
    children: Vec<ToastId>,
}

impl Container {
    #[must_use]
    pub fn new(id: ContainerId, size: Size, safe_area: Padding) -> Self {
        Self {
            id,
            size,
            safe_area,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> ContainerId {
        self.id
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn safe_area(&self) -> Padding {
        self.safe_area
    }

    pub fn set_metrics(&mut self, size: Size, safe_area: Padding) {
        self.size = size;
        self.safe_area = safe_area;
    }

    #[must_use]
    pub fn children(&self) -> &[ToastId] {
        &self.children
    }

    pub(crate) fn attach(&mut self, id: ToastId) {
        if !self.children.contains(&id) {
            self.children.push(id);
        }
    }

    pub(crate) fn detach(&mut self, id: ToastId) {
        self.children.retain(|child| *child != id);
    }

    pub(crate) fn take_children(&mut self) -> Vec<ToastId> {
        std::mem::take(&mut self.children)
    }
}
