// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Linear algebra for Kite geometry.

This crate provides:
- `Vec3`: 3-component vectors (points and directions).
- `Quat`: rotation quaternions stored as `(x, y, z, w)`.
- `Affine4`: column-major 4×4 affine transforms with cofactor inversion and
  position/rotation/scale decomposition.
- `Prng`: a seedable generator for reproducible point clouds.

Design notes:
- Float32 throughout, matching vertex-buffer and GPU layouts.
- Every operation is a pure function of its inputs: there is no shared
  scratch state, so all routines are reentrant and thread-safe.
- Degenerate input never produces silent NaN/Infinity. Normalising a
  zero-length vector yields zero, a zero-length quaternion yields identity,
  and anything that needs a matrix inverse returns
  [`MathError::Singular`] when `|det| < EPSILON`.
"]

mod affine4;
mod error;
mod prng;
mod quat;
mod vec3;

pub use affine4::{Affine4, Decomposed};
pub use error::MathError;
pub use prng::Prng;
pub use quat::Quat;
pub use vec3::Vec3;

use std::f32::consts::TAU;

/// Global epsilon used by math routines when detecting degenerate values.
pub const EPSILON: f32 = 1e-6;

/// Clamps `value` to the inclusive `[min, max]` range.
///
/// # Panics
/// Panics if `min > max`.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Converts degrees to radians.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}
