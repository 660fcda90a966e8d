// SPDX-License-Identifier: MPL-2.0
//! Runtime tuning for the toast manager.

use crate::config::{self, ToastConfig};
use std::time::Duration;

/// Resolved, range-checked tuning values used by the [`Manager`](super::Manager).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Duration of every show, hide, recede and spring-back animation.
    pub animate_duration: Duration,
    /// Drag divisor toward the dismiss edge.
    pub toward_dismiss_damping: f32,
    /// Drag divisor back past neutral.
    pub toward_neutral_damping: f32,
    /// Fraction of the view height a release must pass to dismiss.
    pub dismiss_threshold: f32,
    /// Vertical offset applied to receded toasts.
    pub receded_offset: f32,
    /// Width removed from receded toasts when scaling them down.
    pub receded_inset: f32,
    /// Scale a stack-enabled toast enters from.
    pub entering_scale: f32,
    /// Scale a stack-enabled toast leaves to.
    pub exiting_scale: f32,
    /// Opacity a leaving toast fades to.
    pub exiting_alpha: f32,
    /// Deadline used by presets when the caller gives none.
    pub preset_deadline: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from(&ToastConfig::default())
    }
}

impl From<&ToastConfig> for Settings {
    fn from(cfg: &ToastConfig) -> Self {
        let animate_ms = cfg
            .animate_duration_ms
            .unwrap_or(config::DEFAULT_ANIMATE_DURATION_MS)
            .clamp(config::MIN_ANIMATE_DURATION_MS, config::MAX_ANIMATE_DURATION_MS);
        let deadline_secs = cfg
            .preset_deadline_secs
            .unwrap_or(config::DEFAULT_PRESET_DEADLINE_SECS)
            .clamp(
                config::MIN_PRESET_DEADLINE_SECS,
                config::MAX_PRESET_DEADLINE_SECS,
            );

        Self {
            animate_duration: Duration::from_millis(animate_ms),
            toward_dismiss_damping: clamp_or(
                cfg.toward_dismiss_damping,
                config::DEFAULT_TOWARD_DISMISS_DAMPING,
                config::MIN_DAMPING,
                config::MAX_DAMPING,
            ),
            toward_neutral_damping: clamp_or(
                cfg.toward_neutral_damping,
                config::DEFAULT_TOWARD_NEUTRAL_DAMPING,
                config::MIN_DAMPING,
                config::MAX_DAMPING,
            ),
            dismiss_threshold: clamp_or(
                cfg.dismiss_threshold,
                config::DEFAULT_DISMISS_THRESHOLD,
                config::MIN_DISMISS_THRESHOLD,
                config::MAX_DISMISS_THRESHOLD,
            ),
            receded_offset: clamp_or(
                cfg.receded_offset,
                config::DEFAULT_RECEDED_OFFSET,
                0.0,
                config::MAX_RECEDED_POINTS,
            ),
            receded_inset: clamp_or(
                cfg.receded_inset,
                config::DEFAULT_RECEDED_INSET,
                0.0,
                config::MAX_RECEDED_POINTS,
            ),
            entering_scale: clamp_or(
                cfg.entering_scale,
                config::DEFAULT_ENTERING_SCALE,
                config::MIN_TRANSITION_SCALE,
                config::MAX_TRANSITION_SCALE,
            ),
            exiting_scale: clamp_or(
                cfg.exiting_scale,
                config::DEFAULT_EXITING_SCALE,
                config::MIN_TRANSITION_SCALE,
                config::MAX_TRANSITION_SCALE,
            ),
            exiting_alpha: clamp_or(cfg.exiting_alpha, config::DEFAULT_EXITING_ALPHA, 0.0, 1.0),
            preset_deadline: Duration::from_secs(u64::from(deadline_secs)),
        }
    }
}

/// Falls back to `default` for missing or non-finite values, then clamps.
fn clamp_or(value: Option<f32>, default: f32, min: f32, max: f32) -> f32 {
    value
        .filter(|v| v.is_finite())
        .unwrap_or(default)
        .clamp(min, max)
}
