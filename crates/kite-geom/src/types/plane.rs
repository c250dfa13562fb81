// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use kite_math::Vec3;

/// Plane `normal · p + constant = 0`.
///
/// Distances are only metric when `normal` is unit length; the constructors
/// below that derive the normal from points produce a unit normal.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    /// Plane normal; positive distances lie on the side it points to.
    pub normal: Vec3,
    /// Signed offset along `normal` (`-normal · p` for any point `p` on the plane).
    pub constant: f32,
}

impl Plane {
    /// Creates a plane from its normal and constant.
    pub const fn new(normal: Vec3, constant: f32) -> Self {
        Self { normal, constant }
    }

    /// Plane with `normal` passing through `point`.
    pub fn from_normal_and_point(normal: Vec3, point: &Vec3) -> Self {
        Self::new(normal, -normal.dot(point))
    }

    /// Plane through three points, normal `normalize((c - b) × (a - b))`.
    ///
    /// Collinear points yield a zero normal, so every distance is the
    /// constant `0`.
    pub fn from_coplanar_points(a: &Vec3, b: &Vec3, c: &Vec3) -> Self {
        Self::from_normal_and_point(Vec3::plane_normal(a, b, c), a)
    }

    /// Signed distance from the plane to `point`.
    pub fn distance_to_point(&self, point: &Vec3) -> f32 {
        self.normal.dot(point) + self.constant
    }
}
