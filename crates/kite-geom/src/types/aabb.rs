// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use kite_math::{Affine4, Vec3};

use crate::vertex::VertexBuffer;

/// Axis-aligned extent.
///
/// Used both as a world-space box and as the local extent of an
/// [`crate::Obb`].
///
/// Invariants:
/// - `min` components are less than or equal to `max` components.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    min: Vec3,
    max: Vec3,
}

impl Aabb {
    /// Constructs an extent from its minimum and maximum corners.
    ///
    /// # Panics
    /// Panics if any component of `min` is greater than its counterpart in `max`.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        assert!(
            (0..3).all(|i| min.component(i) <= max.component(i)),
            "invalid extent: min {min} > max {max}"
        );
        Self { min, max }
    }

    /// Returns the minimum corner.
    pub fn min(&self) -> Vec3 {
        self.min
    }

    /// Returns the maximum corner.
    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// Builds an extent centered at `center` with the given half extents.
    ///
    /// # Panics
    /// Panics if any half extent is negative.
    pub fn from_center_half_extents(center: Vec3, half: Vec3) -> Self {
        Self::new(center.sub(&half), center.add(&half))
    }

    /// Tight bounds of a sphere.
    ///
    /// # Panics
    /// Panics if `radius` is negative.
    pub fn from_sphere(center: Vec3, radius: f32) -> Self {
        Self::from_center_half_extents(center, Vec3::splat(radius))
    }

    /// Builds the minimal extent that contains all `points`.
    ///
    /// # Panics
    /// Panics if `points` is empty.
    pub fn from_points(points: &[Vec3]) -> Self {
        assert!(!points.is_empty(), "from_points requires at least one point");
        Self::bounding(points.iter().copied())
    }

    /// Bounds of every vertex in `buffer`.
    ///
    /// # Panics
    /// Panics if the buffer is empty.
    pub fn from_vertices(buffer: &VertexBuffer<'_>) -> Self {
        assert!(!buffer.is_empty(), "from_vertices requires at least one vertex");
        Self::bounding(buffer.offsets().map(|o| buffer.vec3_at(o)))
    }

    /// Bounds of the vertices at `offsets`.
    ///
    /// # Panics
    /// Panics if `offsets` is empty or any offset is out of range.
    pub fn from_indices(buffer: &VertexBuffer<'_>, offsets: &[usize]) -> Self {
        assert!(!offsets.is_empty(), "from_indices requires at least one offset");
        Self::bounding(offsets.iter().map(|&o| buffer.vec3_at(o)))
    }

    fn bounding(mut points: impl Iterator<Item = Vec3>) -> Self {
        let first = points.next().unwrap_or(Vec3::ZERO);
        points.fold(Self { min: first, max: first }, |acc, p| acc.add_point(&p))
    }

    /// Grows the extent to include `p`.
    pub fn add_point(&self, p: &Vec3) -> Self {
        Self {
            min: self.min.min(p),
            max: self.max.max(p),
        }
    }

    /// Returns the union of two extents.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(&other.min),
            max: self.max.max(&other.max),
        }
    }

    /// Inflates the extent by a uniform margin `m` in all directions.
    ///
    /// # Panics
    /// Panics if a negative margin would invert the extent.
    pub fn inflate(&self, m: f32) -> Self {
        let delta = Vec3::splat(m);
        Self::new(self.min.sub(&delta), self.max.add(&delta))
    }

    /// The eight corners, ordered by `(x, y, z)` bits with `min = 0`.
    pub fn corners(&self) -> [Vec3; 8] {
        let [minx, miny, minz] = self.min.to_array();
        let [maxx, maxy, maxz] = self.max.to_array();
        [
            Vec3::new(minx, miny, minz),
            Vec3::new(minx, miny, maxz),
            Vec3::new(minx, maxy, minz),
            Vec3::new(minx, maxy, maxz),
            Vec3::new(maxx, miny, minz),
            Vec3::new(maxx, miny, maxz),
            Vec3::new(maxx, maxy, minz),
            Vec3::new(maxx, maxy, maxz),
        ]
    }

    /// Bounds of this extent after transformation by `aff`.
    ///
    /// Evaluates the eight corners under the transform and bounds them.
    pub fn transformed(&self, aff: &Affine4) -> Self {
        Self::bounding(self.corners().iter().map(|c| aff.transform_point(c)))
    }

    /// `max - min`.
    pub fn dimensions(&self) -> Vec3 {
        self.max.sub(&self.min)
    }

    /// Midpoint of the extent.
    pub fn center(&self) -> Vec3 {
        self.min.lerp(&self.max, 0.5)
    }

    /// Product of the dimensions.
    pub fn volume(&self) -> f32 {
        let d = self.dimensions();
        d.x() * d.y() * d.z()
    }

    /// Returns `true` when `p` lies inside or on the boundary.
    pub fn contains_point(&self, p: &Vec3) -> bool {
        (0..3).all(|i| {
            let v = p.component(i);
            self.min.component(i) <= v && v <= self.max.component(i)
        })
    }

    /// Returns `true` if this extent overlaps another (inclusive on faces).
    pub fn overlaps(&self, other: &Self) -> bool {
        (0..3).all(|i| {
            self.min.component(i) <= other.max.component(i)
                && other.min.component(i) <= self.max.component(i)
        })
    }
}
