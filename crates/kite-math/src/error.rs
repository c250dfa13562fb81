// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use thiserror::Error;

/// Failures reported by math routines on degenerate input.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// The 3×3 linear block of an affine transform has `|det| < EPSILON`,
    /// so the transform has no usable inverse (and no proper rotation).
    #[error("singular affine transform (determinant {determinant})")]
    Singular {
        /// Determinant of the linear block that was rejected.
        determinant: f32,
    },
    /// Array data whose bottom row (slots 3, 7, 11, 15) is not
    /// `(0, 0, 0, 1)`.
    #[error("not an affine transform: bottom row is {bottom_row:?}")]
    NotAffine {
        /// Slots 3, 7, 11 and 15 as supplied.
        bottom_row: [f32; 4],
    },
}
