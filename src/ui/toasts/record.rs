// SPDX-License-Identifier: MPL-2.0
//! Toast handles and the manager's per-toast bookkeeping.

use super::animation::{Animation, Completion, Visual};
use super::container::ContainerId;
use super::layout::Position;
use super::manager::Manager;
use super::timer::TimerId;
use super::view::{ToastId, ToastView};
use std::fmt;
use std::time::Duration;

/// Callback run once a toast has finished entering.
pub type ShownCallback = Box<dyn FnOnce(&mut Manager, &Toast)>;

/// Callback run once a toast has left and been detached.
pub type HiddenCallback = Box<dyn FnOnce(&mut Manager)>;

/// Handle to a shown toast.
///
/// Returned by the `show` family; pass its [`id`](Toast::id) back to the
/// manager to hide or query the toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Toast {
    id: ToastId,
    container: ContainerId,
    position: Position,
    deadline: Option<Duration>,
}

impl Toast {
    pub(crate) fn new(
        id: ToastId,
        container: ContainerId,
        position: Position,
        deadline: Option<Duration>,
    ) -> Self {
        Self {
            id,
            container,
            position,
            deadline,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn container(&self) -> ContainerId {
        self.container
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Time the toast stays up after entering, if it auto-hides.
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    pub(crate) fn group(&self) -> (ContainerId, Position) {
        (self.container, self.position)
    }
}

/// A live toast tracked by the manager.
pub(crate) struct Record {
    pub toast: Toast,
    pub view: ToastView,
    pub timer: Option<TimerId>,
    pub animation: Option<Animation>,
    pub on_shown: Option<ShownCallback>,
}

impl Record {
    pub fn new(toast: Toast, view: ToastView) -> Self {
        Self {
            toast,
            view,
            timer: None,
            animation: None,
            on_shown: None,
        }
    }

    pub fn visual(&self) -> Visual {
        Visual::new(self.view.transform(), self.view.alpha())
    }

    pub fn apply(&mut self, visual: Visual) {
        self.view.set_transform(visual.transform);
        self.view.set_alpha(visual.alpha);
    }

    /// Whether the entering animation has not completed yet.
    pub fn is_entering(&self) -> bool {
        self.animation
            .is_some_and(|animation| animation.completion() == Completion::Shown)
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("toast", &self.toast)
            .field("view", &self.view)
            .field("timer", &self.timer)
            .field("animation", &self.animation)
            .field("on_shown", &self.on_shown.is_some())
            .finish()
    }
}

/// A toast that was hidden and is animating out.
pub(crate) struct Leaving {
    pub toast: Toast,
    pub view: ToastView,
    pub animation: Animation,
    pub on_hidden: Option<HiddenCallback>,
}

impl fmt::Debug for Leaving {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Leaving")
            .field("toast", &self.toast)
            .field("view", &self.view)
            .field("animation", &self.animation)
            .field("on_hidden", &self.on_hidden.is_some())
            .finish()
    }
}
