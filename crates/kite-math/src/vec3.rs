// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use crate::{Quat, EPSILON};

/// 3D vector used for points, directions and per-axis scale factors.
///
/// * Values are plain `f32` with no unit attached; callers decide whether a
///   vector is a point or a direction.
/// * Use [`crate::Affine4::transform_point`] for points (homogeneous `w = 1`)
///   and [`crate::Affine4::transform_direction`] for directions (`w = 0`).
/// * Every method returns a new value; inputs are never mutated, so aliasing
///   between "input" and "output" is a non-issue.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    data: [f32; 3],
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Vector with every component set to one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Creates a vector with all three components set to `s`.
    pub const fn splat(s: f32) -> Self {
        Self::new(s, s, s)
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f32; 3] {
        self.data
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    /// Component by axis index (`0 = x`, `1 = y`, `2 = z`).
    ///
    /// # Panics
    /// Panics if `axis > 2`.
    pub fn component(&self, axis: usize) -> f32 {
        self.data[axis]
    }

    fn map(&self, f: impl Fn(f32) -> f32) -> Self {
        Self::new(f(self.data[0]), f(self.data[1]), f(self.data[2]))
    }

    fn zip(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self::new(
            f(self.data[0], other.data[0]),
            f(self.data[1], other.data[1]),
            f(self.data[2], other.data[2]),
        )
    }

    /// Adds two vectors.
    pub fn add(&self, other: &Self) -> Self {
        self.zip(other, |a, b| a + b)
    }

    /// Subtracts another vector (`self - other`).
    pub fn sub(&self, other: &Self) -> Self {
        self.zip(other, |a, b| a - b)
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, scalar: f32) -> Self {
        self.map(|a| a * scalar)
    }

    /// Returns `self + other * scalar`.
    pub fn scale_and_add(&self, other: &Self, scalar: f32) -> Self {
        self.zip(other, |a, b| a + b * scalar)
    }

    /// Negates every component.
    pub fn negate(&self) -> Self {
        self.map(|a| -a)
    }

    /// Component-wise product.
    pub fn multiply(&self, other: &Self) -> Self {
        self.zip(other, |a, b| a * b)
    }

    /// Component-wise quotient; a zero divisor yields `0` in that lane.
    pub fn divide(&self, other: &Self) -> Self {
        self.zip(other, |a, b| if b == 0.0 { 0.0 } else { a / b })
    }

    /// Component-wise reciprocal; zero components stay zero.
    pub fn reciprocal(&self) -> Self {
        self.map(|a| if a == 0.0 { 0.0 } else { 1.0 / a })
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.data[0] * other.data[0] + self.data[1] * other.data[1] + self.data[2] * other.data[2]
    }

    /// Cross product with another vector.
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Sum of absolute components.
    pub fn manhattan_length(&self) -> f32 {
        self.data[0].abs() + self.data[1].abs() + self.data[2].abs()
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Self) -> f32 {
        other.sub(self).length()
    }

    /// Squared Euclidean distance to another point.
    pub fn distance_squared(&self, other: &Self) -> f32 {
        other.sub(self).length_squared()
    }

    /// Normalises the vector, returning the zero vector if length ≤ `EPSILON`.
    ///
    /// `EPSILON` is a degeneracy threshold (not numeric precision): vectors
    /// with length ≤ `EPSILON` are considered degenerate and normalised to
    /// zero so downstream callers can detect them instead of receiving NaN.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }

    /// Rescales the vector to `length`, keeping its direction.
    ///
    /// Degenerate vectors stay zero.
    pub fn set_length(&self, length: f32) -> Self {
        self.normalize().scale(length)
    }

    /// Linear interpolation: `self + (other - self) * t`.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        self.zip(other, |a, b| a + t * (b - a))
    }

    /// Component-wise minimum.
    pub fn min(&self, other: &Self) -> Self {
        self.zip(other, f32::min)
    }

    /// Component-wise maximum.
    pub fn max(&self, other: &Self) -> Self {
        self.zip(other, f32::max)
    }

    /// Clamps every component to `[min, max]`.
    ///
    /// # Panics
    /// Panics if `min > max`.
    pub fn clamp(&self, min: f32, max: f32) -> Self {
        self.map(|a| crate::clamp(a, min, max))
    }

    /// Clamps each component into the matching lane of `[min, max]`.
    pub fn clamp_to(&self, min: &Self, max: &Self) -> Self {
        self.max(min).min(max)
    }

    /// Smallest of the three components.
    pub fn smallest_component(&self) -> f32 {
        self.data[0].min(self.data[1]).min(self.data[2])
    }

    /// Largest of the three components.
    pub fn largest_component(&self) -> f32 {
        self.data[0].max(self.data[1]).max(self.data[2])
    }

    /// Angle in radians between two vectors, in `[0, π]`.
    ///
    /// Returns `0` when either vector is degenerate.
    pub fn angle(&self, other: &Self) -> f32 {
        let lengths = self.length() * other.length();
        if lengths <= EPSILON {
            return 0.0;
        }
        (self.dot(other) / lengths).clamp(-1.0, 1.0).acos()
    }

    /// Projects `self` onto `onto`: `onto * (self·onto) / |onto|²`.
    ///
    /// Projection onto a degenerate vector is the zero vector.
    pub fn project(&self, onto: &Self) -> Self {
        let len_sq = onto.length_squared();
        if len_sq <= EPSILON * EPSILON {
            return Self::ZERO;
        }
        onto.scale(self.dot(onto) / len_sq)
    }

    /// Reflects the vector off a plane with unit `normal`.
    pub fn reflect(&self, normal: &Self) -> Self {
        self.sub(&normal.scale(2.0 * self.dot(normal)))
    }

    /// Rotates the vector by quaternion `q`.
    ///
    /// Uses the two-cross-product form `v + 2w(q×v) + 2q×(q×v)`, which assumes
    /// `q` is a unit quaternion.
    pub fn transform_quaternion(&self, q: &Quat) -> Self {
        let qv = Self::new(q.x(), q.y(), q.z());
        let uv = qv.cross(self);
        let uuv = qv.cross(&uv);
        let spun = self.add(&uv.scale(2.0 * q.w()));
        Self::add(&spun, &uuv.scale(2.0))
    }

    /// Builds a vector from spherical coordinates.
    ///
    /// `phi` is the polar angle from +Y, `theta` the azimuth around +Y
    /// measured from +Z towards +X.
    pub fn from_spherical(radius: f32, phi: f32, theta: f32) -> Self {
        let (sin_phi, cos_phi) = phi.sin_cos();
        let (sin_theta, cos_theta) = theta.sin_cos();
        let ring = sin_phi * radius;
        Self::new(ring * sin_theta, cos_phi * radius, ring * cos_theta)
    }

    /// Builds a vector from cylindrical coordinates around the +Y axis.
    pub fn from_cylindrical(radius: f32, theta: f32, y: f32) -> Self {
        let (sin_theta, cos_theta) = theta.sin_cos();
        Self::new(radius * sin_theta, y, radius * cos_theta)
    }

    /// Unit normal of the plane through `p0`, `p1`, `p2`.
    ///
    /// Computed as `normalize((p2 - p1) × (p0 - p1))`, which points towards
    /// the viewer when the points wind counter-clockwise. Collinear points
    /// yield the zero vector.
    pub fn plane_normal(p0: &Self, p1: &Self, p2: &Self) -> Self {
        p2.sub(p1).cross(&p0.sub(p1)).normalize()
    }

    /// Returns `true` when every component differs by less than `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: f32) -> bool {
        (0..3).all(|i| (self.data[i] - other.data[i]).abs() < tolerance)
    }

    /// Returns `true` when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }
}

/// Converts a 3-element `[f32; 3]` array into a `Vec3` interpreted as `(x, y, z)`.
///
/// # Examples
/// ```
/// use kite_math::Vec3;
/// let v = Vec3::from([1.0, 2.0, 3.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// ```
impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(value: Vec3) -> Self {
        value.data
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Vec3::add(&self, &rhs)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Vec3::sub(&self, &rhs)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2},{:.2},{:.2})", self.data[0], self.data[1], self.data[2])
    }
}
