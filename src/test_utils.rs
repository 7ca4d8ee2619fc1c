// SPDX-License-Identifier: MPL-2.0
//! Helpers shared by unit tests.
//!
//! Strip offsets are computed in `f32`; compare them with
//! `assert_abs_diff_eq!` rather than `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Tolerance for pixel offsets.
pub const PX_EPSILON: f32 = 1e-3;
