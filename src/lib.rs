// SPDX-License-Identifier: MPL-2.0
//! `toast_stack` stacks transient toast notifications along the top or bottom
//! edge of a window, built with the Iced GUI framework.
//!
//! The [`ui::toasts`] module holds the stacking manager: per-edge groups,
//! auto-dismiss deadlines, drag-to-dismiss and the canvas layer that draws
//! them. The [`app`] module is a small localized shopping-list application
//! that reports every action as a toast.

#![doc(html_root_url = "https://docs.rs/toast_stack/0.1.0")]

pub mod app;
pub mod error;
pub mod i18n;
pub mod ui;

pub use app::config;

#[cfg(test)]
mod test_utils;
