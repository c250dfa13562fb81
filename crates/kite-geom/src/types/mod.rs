// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Foundational geometric types.

/// Axis-aligned extents.
pub mod aabb;
/// Oriented boxes: an extent under a box-to-world transform.
pub mod obb;
/// Planes in Hessian normal form.
pub mod plane;
