// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`toasts`] - Toast stacking manager and its canvas layer
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod toasts;
