// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;
use core::ops::Mul;

use crate::{MathError, Quat, Vec3, EPSILON};

/// Column-major 4×4 affine transform.
///
/// - Columns 0–2 hold the linear part (rotation·scale), column 3 holds the
///   translation in slots 12–14.
/// - The bottom row is always `(0, 0, 0, 1)`; [`Affine4::new`] enforces it
///   and every constructor preserves it, so helpers never perform a
///   perspective divide.
///
/// # Examples
/// ```
/// use kite_math::{Affine4, Vec3};
/// let t = Affine4::translation(Vec3::new(5.0, -3.0, 2.0));
/// let p = Vec3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
///
/// # Precision
/// - Uses `f32`; repeated multiplies and transforms will accumulate rounding.
/// - Anything that needs an inverse reports [`MathError::Singular`] when the
///   determinant of the linear block is smaller than [`EPSILON`] in magnitude.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[f32; 16]", into = "[f32; 16]"))]
pub struct Affine4 {
    data: [f32; 16],
}

/// Position, rotation and scale recovered by [`Affine4::decompose`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decomposed {
    /// Translation column.
    pub position: Vec3,
    /// Proper rotation of the linear block.
    pub rotation: Quat,
    /// Per-axis scale; always non-negative, reflections are folded into
    /// `rotation` by flipping the x axis.
    pub scale: Vec3,
}

/// Inverse of the 3×3 linear block, row-major (`m[row][col]`).
type Linear3 = [[f32; 3]; 3];

impl Affine4 {
    /// Returns the identity transform.
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                0.0, 0.0, 0.0, 1.0, // col 3
            ],
        }
    }

    /// Creates a transform from column-major array data.
    ///
    /// # Panics
    /// Panics if slots 3, 7 and 11 are not zero or slot 15 is not one; the
    /// type only represents affine (non-projective) transforms. See
    /// [`Affine4::try_new`] for the fallible form.
    pub fn new(data: [f32; 16]) -> Self {
        let bottom_row = bottom_row(&data);
        assert!(
            bottom_row == [0.0, 0.0, 0.0, 1.0],
            "not an affine transform: bottom row is {bottom_row:?}"
        );
        Self { data }
    }

    /// Creates a transform from column-major array data, rejecting a bottom
    /// row other than `(0, 0, 0, 1)`.
    ///
    /// # Errors
    /// [`MathError::NotAffine`] carrying the offending row.
    pub fn try_new(data: [f32; 16]) -> Result<Self, MathError> {
        let bottom_row = bottom_row(&data);
        if bottom_row != [0.0, 0.0, 0.0, 1.0] {
            return Err(MathError::NotAffine { bottom_row });
        }
        Ok(Self { data })
    }

    /// Alias for [`Affine4::new`] mirroring [`Affine4::to_array`].
    ///
    /// # Panics
    /// Panics under the same conditions as [`Affine4::new`].
    pub fn from_cols_array(data: [f32; 16]) -> Self {
        Self::new(data)
    }

    /// Returns the transform as a column-major array.
    pub fn to_array(self) -> [f32; 16] {
        self.data
    }

    pub(crate) fn at(&self, row: usize, col: usize) -> f32 {
        self.data[col * 4 + row]
    }

    /// Builds a pure translation.
    pub const fn translation(t: Vec3) -> Self {
        let [tx, ty, tz] = t.to_array();
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                tx, ty, tz, 1.0, // col 3 (translation)
            ],
        }
    }

    /// Builds a pure (possibly non-uniform) scale.
    pub const fn scaling(s: Vec3) -> Self {
        let [sx, sy, sz] = s.to_array();
        Self {
            data: [
                sx, 0.0, 0.0, 0.0, // col 0
                0.0, sy, 0.0, 0.0, // col 1
                0.0, 0.0, sz, 0.0, // col 2
                0.0, 0.0, 0.0, 1.0, // col 3
            ],
        }
    }

    /// Builds a rotation around the X axis by `angle` radians.
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            1.0, 0.0, 0.0, 0.0,
            0.0, c, s, 0.0,
            0.0, -s, c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation around the Y axis by `angle` radians.
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c, 0.0, -s, 0.0,
            0.0, 1.0, 0.0, 0.0,
            s, 0.0, c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation around the Z axis by `angle` radians.
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new([
            c, s, 0.0, 0.0,
            -s, c, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Builds a rotation from a quaternion.
    ///
    /// This simply forwards to [`Quat::to_affine`].
    pub fn from_quat(q: &Quat) -> Self {
        q.to_affine()
    }

    /// Builds `T(position) · R(rotation) · S(scale)`.
    ///
    /// The inverse of [`Affine4::decompose`] for transforms with positive
    /// scale.
    pub fn compose(position: Vec3, rotation: &Quat, scale: Vec3) -> Self {
        let mut data = rotation.to_affine().data;
        for (col, s) in scale.to_array().into_iter().enumerate() {
            for row in 0..3 {
                data[col * 4 + row] *= s;
            }
        }
        data[12] = position.x();
        data[13] = position.y();
        data[14] = position.z();
        Self::new(data)
    }

    /// Returns `Translate(t) · self`: the translation column is offset by
    /// `t` and the linear block is left untouched.
    pub fn translate(&self, t: Vec3) -> Self {
        let mut data = self.data;
        data[12] += t.x();
        data[13] += t.y();
        data[14] += t.z();
        Self { data }
    }

    /// Composes two transforms (`self * rhs`): `rhs` is applied first.
    ///
    /// Only the affine part is evaluated; the bottom row stays `(0,0,0,1)`.
    ///
    /// # Examples
    /// ```
    /// use kite_math::{Affine4, Vec3};
    /// let a = Affine4::translation(Vec3::new(1.0, 2.0, 3.0));
    /// let b = Affine4::translation(Vec3::new(-1.0, -4.0, -12.0));
    /// assert_eq!(a.multiply(&b), Affine4::translation(Vec3::new(0.0, -2.0, -9.0)));
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = Self::identity().data;
        for col in 0..4 {
            for row in 0..3 {
                let mut sum = 0.0;
                for k in 0..3 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                if col == 3 {
                    sum += self.at(row, 3);
                }
                out[col * 4 + row] = sum;
            }
        }
        Self { data: out }
    }

    /// Signed determinant of the 3×3 linear block.
    pub fn determinant(&self) -> f32 {
        let (det, _) = self.cofactors();
        det
    }

    /// First column of cofactors and the determinant they expand to.
    fn cofactors(&self) -> (f32, [f32; 3]) {
        let d = &self.data;
        let t11 = d[10] * d[5] - d[6] * d[9];
        let t12 = d[6] * d[8] - d[10] * d[4];
        let t13 = d[9] * d[4] - d[5] * d[8];
        (d[0] * t11 + d[1] * t12 + d[2] * t13, [t11, t12, t13])
    }

    /// Inverse of the linear block via cofactor expansion.
    fn linear_inverse(&self) -> Result<Linear3, MathError> {
        let (determinant, [t11, t12, t13]) = self.cofactors();
        if determinant.abs() < EPSILON {
            return Err(MathError::Singular { determinant });
        }
        let inv_det = 1.0 / determinant;
        let d = &self.data;
        let (n11, n21, n31) = (d[0], d[1], d[2]);
        let (n12, n22, n32) = (d[4], d[5], d[6]);
        let (n13, n23, n33) = (d[8], d[9], d[10]);

        Ok([
            [t11 * inv_det, t12 * inv_det, t13 * inv_det],
            [
                (n31 * n23 - n33 * n21) * inv_det,
                (n33 * n11 - n31 * n13) * inv_det,
                (n21 * n13 - n23 * n11) * inv_det,
            ],
            [
                (n32 * n21 - n31 * n22) * inv_det,
                (n31 * n12 - n32 * n11) * inv_det,
                (n22 * n11 - n21 * n12) * inv_det,
            ],
        ])
    }

    /// Full affine inverse.
    ///
    /// # Errors
    /// Returns [`MathError::Singular`] when `|det| < EPSILON`.
    pub fn invert(&self) -> Result<Self, MathError> {
        let m = self.linear_inverse()?;
        let t = self.position();
        let back = |row: [f32; 3]| -(row[0] * t.x() + row[1] * t.y() + row[2] * t.z());

        Ok(Self {
            data: [
                m[0][0], m[1][0], m[2][0], 0.0,
                m[0][1], m[1][1], m[2][1], 0.0,
                m[0][2], m[1][2], m[2][2], 0.0,
                back(m[0]), back(m[1]), back(m[2]), 1.0,
            ],
        })
    }

    /// Transforms a point (`w = 1`).
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        let [x, y, z] = point.to_array();
        let d = &self.data;
        Vec3::new(
            d[0] * x + d[4] * y + d[8] * z + d[12],
            d[1] * x + d[5] * y + d[9] * z + d[13],
            d[2] * x + d[6] * y + d[10] * z + d[14],
        )
    }

    /// Transforms a direction (`w = 0`, translation ignored).
    pub fn transform_direction(&self, dir: &Vec3) -> Vec3 {
        let [x, y, z] = dir.to_array();
        let d = &self.data;
        Vec3::new(
            d[0] * x + d[4] * y + d[8] * z,
            d[1] * x + d[5] * y + d[9] * z,
            d[2] * x + d[6] * y + d[10] * z,
        )
    }

    /// Applies the inverse transform to a point without building the full
    /// inverse matrix: `inv(L) · (point - t)`.
    ///
    /// # Errors
    /// Returns [`MathError::Singular`] when `|det| < EPSILON`.
    pub fn inverse_transform_point(&self, point: &Vec3) -> Result<Vec3, MathError> {
        let m = self.linear_inverse()?;
        let a = point.sub(&self.position()).to_array();
        let row = |r: [f32; 3]| r[0] * a[0] + r[1] * a[1] + r[2] * a[2];
        Ok(Vec3::new(row(m[0]), row(m[1]), row(m[2])))
    }

    /// Translation column.
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.data[12], self.data[13], self.data[14])
    }

    /// Euclidean norm of each linear column.
    ///
    /// Never fails; a collapsed axis reports `0`.
    pub fn scale_factors(&self) -> Vec3 {
        let d = &self.data;
        Vec3::new(
            Vec3::new(d[0], d[1], d[2]).length(),
            Vec3::new(d[4], d[5], d[6]).length(),
            Vec3::new(d[8], d[9], d[10]).length(),
        )
    }

    /// Rotation part of the transform.
    ///
    /// # Errors
    /// Returns [`MathError::Singular`] when `|det| < EPSILON`.
    pub fn rotation(&self) -> Result<Quat, MathError> {
        self.decompose().map(|parts| parts.rotation)
    }

    /// Splits the transform into position, rotation and scale.
    ///
    /// Columns are divided by their norms before the rotation is extracted;
    /// a negative determinant flips the x column so the rotation stays
    /// proper.
    ///
    /// # Errors
    /// Returns [`MathError::Singular`] when `|det| < EPSILON`.
    pub fn decompose(&self) -> Result<Decomposed, MathError> {
        let determinant = self.determinant();
        if determinant.abs() < EPSILON {
            return Err(MathError::Singular { determinant });
        }
        let scale = self.scale_factors();
        let sign_x = if determinant < 0.0 { -1.0 } else { 1.0 };
        let inv = [sign_x / scale.x(), 1.0 / scale.y(), 1.0 / scale.z()];

        let mut unscaled = self.data;
        for (col, s) in inv.into_iter().enumerate() {
            for row in 0..3 {
                unscaled[col * 4 + row] *= s;
            }
        }

        Ok(Decomposed {
            position: self.position(),
            rotation: Quat::from_unscaled_affine(&Self { data: unscaled }),
            scale,
        })
    }

    /// Returns `true` when every slot differs by less than `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: f32) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).abs() < tolerance)
    }
}

fn bottom_row(data: &[f32; 16]) -> [f32; 4] {
    [data[3], data[7], data[11], data[15]]
}

impl TryFrom<[f32; 16]> for Affine4 {
    type Error = MathError;

    fn try_from(data: [f32; 16]) -> Result<Self, Self::Error> {
        Self::try_new(data)
    }
}

impl From<Affine4> for [f32; 16] {
    fn from(m: Affine4) -> Self {
        m.data
    }
}

impl Default for Affine4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Affine4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl Mul<Vec3> for Affine4 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.transform_point(&rhs)
    }
}

impl fmt::Display for Affine4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.decompose() {
            Ok(Decomposed {
                position,
                rotation,
                scale,
            }) => write!(
                f,
                "[position: {position}, quaternion: {rotation}, scale: {scale}]"
            ),
            Err(_) => write!(
                f,
                "[position: {}, quaternion: singular, scale: {}]",
                self.position(),
                self.scale_factors()
            ),
        }
    }
}
