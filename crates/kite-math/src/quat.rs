// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::f32::consts::FRAC_1_SQRT_2;
use core::fmt;

use crate::{Affine4, Vec3, EPSILON};

/// Quaternion stored as `(x, y, z, w)` with `w` as the scalar part.
///
/// * All angles are expressed in radians.
/// * Rotation quaternions are expected to be unit length; [`Quat::normalize`]
///   restores that after accumulated error and maps a zero quaternion to
///   identity instead of NaN.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    data: [f32; 4],
}

impl Quat {
    /// Half turn about +X.
    pub const ROTATE_X_180: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    /// Half turn about +Y.
    pub const ROTATE_Y_180: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    /// Half turn about +Z.
    pub const ROTATE_Z_180: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    /// Quarter turn about +X.
    pub const ROTATE_X_90: Self = Self::new(FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2);
    /// Quarter turn about +Y.
    pub const ROTATE_Y_90: Self = Self::new(0.0, FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2);
    /// Quarter turn about +Z.
    pub const ROTATE_Z_90: Self = Self::new(0.0, 0.0, FRAC_1_SQRT_2, FRAC_1_SQRT_2);

    /// Creates a quaternion from components.
    ///
    /// Callers should provide finite components; use
    /// [`Quat::from_axis_angle`] for axis/angle construction.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Returns the quaternion as an `(x, y, z, w)` array.
    pub fn to_array(self) -> [f32; 4] {
        self.data
    }

    /// X component of the vector part.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component of the vector part.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component of the vector part.
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    /// Scalar part.
    pub fn w(&self) -> f32 {
        self.data[3]
    }

    /// Constructs a quaternion from a rotation axis and angle in radians.
    ///
    /// Returns the identity quaternion when the axis length is ≤ `EPSILON`.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let norm_axis = axis.normalize();
        if norm_axis == Vec3::ZERO {
            return Self::identity();
        }
        let (sin_half, cos_half) = (angle * 0.5).sin_cos();
        let scaled = norm_axis.scale(sin_half);
        Self::new(scaled.x(), scaled.y(), scaled.z(), cos_half)
    }

    /// Extracts the rotation of an affine transform whose linear block has
    /// already been divided by its scale (a pure rotation matrix).
    ///
    /// Uses the trace-based conversion with a four-way branch on the dominant
    /// diagonal term so the square root argument stays well away from zero.
    pub fn from_unscaled_affine(aff: &Affine4) -> Self {
        let m11 = aff.at(0, 0);
        let m12 = aff.at(0, 1);
        let m13 = aff.at(0, 2);
        let m21 = aff.at(1, 0);
        let m22 = aff.at(1, 1);
        let m23 = aff.at(1, 2);
        let m31 = aff.at(2, 0);
        let m32 = aff.at(2, 1);
        let m33 = aff.at(2, 2);
        let trace = m11 + m22 + m33;

        if trace > 0.0 {
            let s = 0.5 / (trace + 1.0).sqrt();
            Self::new((m32 - m23) * s, (m13 - m31) * s, (m21 - m12) * s, 0.25 / s)
        } else if m11 > m22 && m11 > m33 {
            let s = 2.0 * (1.0 + m11 - m22 - m33).sqrt();
            Self::new(0.25 * s, (m12 + m21) / s, (m13 + m31) / s, (m32 - m23) / s)
        } else if m22 > m33 {
            let s = 2.0 * (1.0 + m22 - m11 - m33).sqrt();
            Self::new((m12 + m21) / s, 0.25 * s, (m23 + m32) / s, (m13 - m31) / s)
        } else {
            let s = 2.0 * (1.0 + m33 - m11 - m22).sqrt();
            Self::new((m13 + m31) / s, (m23 + m32) / s, 0.25 * s, (m21 - m12) / s)
        }
    }

    /// Hamilton product of two quaternions (`self * other`).
    ///
    /// The result applies `other` first, then `self`, when used to rotate
    /// vectors. Quaternion multiplication is non-commutative.
    ///
    /// # Examples
    /// ```
    /// use core::f32::consts::FRAC_PI_2;
    /// use kite_math::{Quat, Vec3};
    /// let yaw = Quat::from_axis_angle(Vec3::UNIT_Y, FRAC_PI_2);
    /// let pitch = Quat::from_axis_angle(Vec3::UNIT_X, FRAC_PI_2);
    /// assert_ne!(yaw.multiply(&pitch).to_array(), pitch.multiply(&yaw).to_array());
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = other.data;

        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Conjugate `(-x, -y, -z, w)`; the inverse rotation for unit quaternions.
    pub fn conjugate(&self) -> Self {
        Self::new(-self.data[0], -self.data[1], -self.data[2], self.data[3])
    }

    /// Four-component dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.data.iter().zip(other.data.iter()).map(|(a, b)| a * b).sum()
    }

    /// Quaternion norm.
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Normalises the quaternion; returns identity when the norm is ≤ `EPSILON`.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::identity();
        }
        let inv = 1.0 / len;
        Self::new(
            self.data[0] * inv,
            self.data[1] * inv,
            self.data[2] * inv,
            self.data[3] * inv,
        )
    }

    /// Returns `true` when every component differs by less than `tolerance`.
    ///
    /// `q` and `-q` encode the same rotation but do not compare equal here;
    /// use [`Quat::same_rotation`] for that.
    pub fn approx_eq(&self, other: &Self, tolerance: f32) -> bool {
        (0..4).all(|i| (self.data[i] - other.data[i]).abs() < tolerance)
    }

    /// Returns `true` when both quaternions encode the same rotation within
    /// `tolerance` (accounting for the `q`/`-q` double cover).
    pub fn same_rotation(&self, other: &Self, tolerance: f32) -> bool {
        1.0 - self.normalize().dot(&other.normalize()).abs() < tolerance
    }

    /// Converts the quaternion to a pure rotation affine transform.
    pub fn to_affine(&self) -> Affine4 {
        let [x, y, z, w] = self.normalize().data;

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        Affine4::new([
            1.0 - 2.0 * (yy + zz),
            2.0 * (xy + wz),
            2.0 * (xz - wy),
            0.0,
            2.0 * (xy - wz),
            1.0 - 2.0 * (xx + zz),
            2.0 * (yz + wx),
            0.0,
            2.0 * (xz + wy),
            2.0 * (yz - wx),
            1.0 - 2.0 * (xx + yy),
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}

/// Converts a 4-element `[f32; 4]` array `(x, y, z, w)` into a `Quat`.
/// The components are taken verbatim; normalisation is not enforced.
impl From<[f32; 4]> for Quat {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.data;
        write!(f, "({x:.3},{y:.3},{z:.3},{w:.3})")
    }
}
