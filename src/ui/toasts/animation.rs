// SPDX-License-Identifier: MPL-2.0
//! Time-based tweening of a toast's transform and opacity.

use super::layout::Transform;
use std::time::{Duration, Instant};

/// Animatable visual state of a toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visual {
    pub transform: Transform,
    pub alpha: f32,
}

impl Visual {
    pub const RESTING: Visual = Visual {
        transform: Transform::IDENTITY,
        alpha: 1.0,
    };

    #[must_use]
    pub fn new(transform: Transform, alpha: f32) -> Self {
        Self { transform, alpha }
    }

    #[must_use]
    pub fn lerp(self, to: Visual, t: f32) -> Visual {
        Visual {
            transform: self.transform.lerp(to.transform, t),
            alpha: self.alpha + (to.alpha - self.alpha) * t,
        }
    }
}

/// Cubic ease-in-out over linear progress in `[0, 1]`.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let f = -2.0 * t + 2.0;
        1.0 - f * f * f / 2.0
    }
}

/// What finishing an animation means for the toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The toast finished entering.
    Shown,
    /// The toast finished leaving and can be detached.
    Hidden,
    /// Recede, promotion or spring-back settled.
    Settled,
}

/// A running tween from one visual state to another.
#[derive(Debug, Clone, Copy)]
pub struct Animation {
    from: Visual,
    to: Visual,
    started: Instant,
    duration: Duration,
    completion: Completion,
}

impl Animation {
    #[must_use]
    pub fn new(
        from: Visual,
        to: Visual,
        started: Instant,
        duration: Duration,
        completion: Completion,
    ) -> Self {
        Self {
            from,
            to,
            started,
            duration,
            completion,
        }
    }

    #[must_use]
    pub fn completion(&self) -> Completion {
        self.completion
    }

    /// Linear progress at `now`, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Visual state at `now`.
    #[must_use]
    pub fn sample(&self, now: Instant) -> Visual {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }
        self.from.lerp(self.to, ease_in_out(progress))
    }
}
