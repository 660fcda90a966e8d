// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Re-exports the `approx` assertion macros used by unit tests that compare
//! transforms, offsets and animation samples.

pub use approx::assert_abs_diff_eq;

/// Default epsilon for f32 comparisons.
/// Suitable for values that should be "exactly equal" but may have minor floating-point errors.
pub const F32_EPSILON: f32 = 1e-6;
