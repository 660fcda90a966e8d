// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used by the toast layer. Constants are organized by category.
//!
//! # Categories
//!
//! - **Animation**: Show/hide animation timing
//! - **Drag**: Drag damping factors and dismiss threshold
//! - **Stacking**: Receded, entering and exiting transforms
//! - **Presets**: Default auto-dismiss deadline

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Default duration of every toast animation (in milliseconds).
pub const DEFAULT_ANIMATE_DURATION_MS: u64 = 250;

/// Minimum animation duration (in milliseconds). Zero disables animations.
pub const MIN_ANIMATE_DURATION_MS: u64 = 0;

/// Maximum animation duration (in milliseconds).
pub const MAX_ANIMATE_DURATION_MS: u64 = 2_000;

// ==========================================================================
// Drag Defaults
// ==========================================================================

/// Divisor applied to drag translation moving toward the dismiss edge.
pub const DEFAULT_TOWARD_DISMISS_DAMPING: f32 = 1.5;

/// Divisor applied to drag translation moving back past neutral.
pub const DEFAULT_TOWARD_NEUTRAL_DAMPING: f32 = 3.0;

/// Minimum damping divisor.
pub const MIN_DAMPING: f32 = 1.0;

/// Maximum damping divisor.
pub const MAX_DAMPING: f32 = 10.0;

/// Fraction of the toast height a drag must pass to dismiss it.
pub const DEFAULT_DISMISS_THRESHOLD: f32 = 0.5;

/// Minimum dismiss threshold fraction.
pub const MIN_DISMISS_THRESHOLD: f32 = 0.1;

/// Maximum dismiss threshold fraction.
pub const MAX_DISMISS_THRESHOLD: f32 = 1.0;

// ==========================================================================
// Stacking Defaults
// ==========================================================================

/// Vertical offset of receded toasts, away from the screen centre (points).
pub const DEFAULT_RECEDED_OFFSET: f32 = 10.0;

/// Horizontal shrink of receded toasts (points removed from the width).
pub const DEFAULT_RECEDED_INSET: f32 = 20.0;

/// Maximum receded offset/inset (points).
pub const MAX_RECEDED_POINTS: f32 = 100.0;

/// Scale a stack-enabled toast starts from when it enters.
pub const DEFAULT_ENTERING_SCALE: f32 = 1.1;

/// Scale a stack-enabled toast shrinks to when it leaves.
pub const DEFAULT_EXITING_SCALE: f32 = 0.8;

/// Minimum entering/exiting scale.
pub const MIN_TRANSITION_SCALE: f32 = 0.5;

/// Maximum entering/exiting scale.
pub const MAX_TRANSITION_SCALE: f32 = 1.5;

/// Opacity a toast fades to while leaving.
pub const DEFAULT_EXITING_ALPHA: f32 = 0.5;

// ==========================================================================
// Preset Defaults
// ==========================================================================

/// Default auto-dismiss deadline for preset toasts (in seconds).
pub const DEFAULT_PRESET_DEADLINE_SECS: u32 = 8;

/// Minimum preset deadline (in seconds).
pub const MIN_PRESET_DEADLINE_SECS: u32 = 1;

/// Maximum preset deadline (in seconds).
pub const MAX_PRESET_DEADLINE_SECS: u32 = 60;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MAX_ANIMATE_DURATION_MS > MIN_ANIMATE_DURATION_MS);
    assert!(DEFAULT_ANIMATE_DURATION_MS <= MAX_ANIMATE_DURATION_MS);

    assert!(MIN_DAMPING > 0.0);
    assert!(DEFAULT_TOWARD_DISMISS_DAMPING >= MIN_DAMPING);
    assert!(DEFAULT_TOWARD_NEUTRAL_DAMPING <= MAX_DAMPING);
    assert!(DEFAULT_TOWARD_DISMISS_DAMPING < DEFAULT_TOWARD_NEUTRAL_DAMPING);

    assert!(MIN_DISMISS_THRESHOLD > 0.0);
    assert!(DEFAULT_DISMISS_THRESHOLD >= MIN_DISMISS_THRESHOLD);
    assert!(DEFAULT_DISMISS_THRESHOLD <= MAX_DISMISS_THRESHOLD);

    assert!(DEFAULT_RECEDED_OFFSET <= MAX_RECEDED_POINTS);
    assert!(DEFAULT_RECEDED_INSET <= MAX_RECEDED_POINTS);
    assert!(DEFAULT_ENTERING_SCALE > 1.0 && DEFAULT_ENTERING_SCALE <= MAX_TRANSITION_SCALE);
    assert!(DEFAULT_EXITING_SCALE < 1.0 && DEFAULT_EXITING_SCALE >= MIN_TRANSITION_SCALE);
    assert!(DEFAULT_EXITING_ALPHA > 0.0 && DEFAULT_EXITING_ALPHA <= 1.0);

    assert!(MIN_PRESET_DEADLINE_SECS > 0);
    assert!(DEFAULT_PRESET_DEADLINE_SECS >= MIN_PRESET_DEADLINE_SECS);
    assert!(DEFAULT_PRESET_DEADLINE_SECS <= MAX_PRESET_DEADLINE_SECS);
};
