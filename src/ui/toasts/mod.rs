// SPDX-License-Identifier: MPL-2.0
//! Stacked toast notifications.
//!
//! Toasts are transient views pinned to the top or bottom edge of a
//! container (usually the window). Toasts that share a container and an
//! edge form a group: the newest member is *current* and fully visible,
//! the one before it recedes slightly behind it, and older ones are hidden
//! until the newer ones go away.
//!
//! # Components
//!
//! - [`view`] - `ToastView`, the visual unit and its flags
//! - [`manager`] - `Manager`, which owns toasts and drives their lifecycle
//! - [`layout`] - edge anchoring and stacking transforms
//! - [`layer`] - canvas program that draws a container's toasts
//! - [`preset`] - info, warning, error and success styles
//!
//! # Usage
//!
//! ```
//! use std::time::{Duration, Instant};
//! use iced::{Padding, Size};
//! use toast_stack::ui::toasts::{Manager, Position, Settings, ToastView};
//!
//! let start = Instant::now();
//! let mut manager = Manager::with_start(Settings::default(), start);
//! manager.add_container(Size::new(400.0, 800.0), Padding::ZERO);
//!
//! let toast = manager
//!     .show(ToastView::new("Saved"), Position::Top, Some(Duration::from_secs(3)))
//!     .expect("a container is registered");
//!
//! manager.tick(start + Duration::from_secs(4));
//! assert!(manager.get(toast.id()).is_none());
//! ```

pub mod animation;
pub mod container;
pub mod gesture;
pub mod layer;
pub mod layout;
pub mod manager;
pub mod preset;
mod record;
pub mod settings;
pub mod timer;
pub mod view;

pub use container::{Container, ContainerId};
pub use gesture::{DragPhase, TouchPhase};
pub use layer::ToastLayer;
pub use layout::{Position, Transform};
pub use manager::{Event, Layer, Manager, Message};
pub use preset::{Preset, PresetStyle};
pub use record::{HiddenCallback, ShownCallback, Toast};
pub use settings::Settings;
pub use view::{ToastContent, ToastId, ToastView};
