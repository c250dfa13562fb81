// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use kite_math::{Vec3, EPSILON};

use crate::Plane;

/// Parameter `t` at which the line through `start` and `end` meets `plane`
/// (`start + (end - start)·t`).
///
/// `t` is not limited to `[0, 1]`. A line parallel to the plane (within
/// `EPSILON`) yields `Some(0.0)` when it lies in the plane and `None`
/// otherwise.
///
/// # Examples
/// ```
/// use kite_geom::{intersection, Plane};
/// use kite_math::Vec3;
/// let ground = Plane::new(Vec3::UNIT_Z, 0.0);
/// let t = intersection::line_and_plane_parametric(
///     &Vec3::new(1.0, 1.0, 1.0),
///     &Vec3::new(1.0, 1.0, -1.0),
///     &ground,
/// );
/// assert_eq!(t, Some(0.5));
/// ```
pub fn line_and_plane_parametric(start: &Vec3, end: &Vec3, plane: &Plane) -> Option<f32> {
    let along = plane.normal.dot(&end.sub(start));
    let start_distance = plane.distance_to_point(start);
    if along.abs() <= EPSILON {
        return (start_distance.abs() <= EPSILON).then_some(0.0);
    }
    Some(-start_distance / along)
}

/// Point where the segment `start..end` meets `plane`, if it does.
///
/// A segment lying in the plane reports `start`.
pub fn line_and_plane(start: &Vec3, end: &Vec3, plane: &Plane) -> Option<Vec3> {
    line_and_plane_parametric(start, end, plane)
        .filter(|t| (0.0..=1.0).contains(t))
        .map(|t| start.scale_and_add(&end.sub(start), t))
}
