// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use kite_math::Vec3;

use crate::{Aabb, Obb, Plane};

/// Signed distance from `plane` to `point`.
pub fn point_to_plane(point: &Vec3, plane: &Plane) -> f32 {
    plane.distance_to_point(point)
}

/// Signed distance from `plane` to the segment `start..end`.
///
/// When both endpoints lie strictly on the same side, this is the distance
/// of the nearer endpoint (keeping its sign); otherwise the segment touches
/// or crosses the plane and the result is `0`.
pub fn line_to_plane(start: &Vec3, end: &Vec3, plane: &Plane) -> f32 {
    let d0 = plane.distance_to_point(start);
    let d1 = plane.distance_to_point(end);
    if d0 > 0.0 && d1 > 0.0 {
        d0.min(d1)
    } else if d0 < 0.0 && d1 < 0.0 {
        d0.max(d1)
    } else {
        0.0
    }
}

/// Signed distance from `plane` to the surface of a sphere.
pub fn sphere_to_plane(center: &Vec3, radius: f32, plane: &Plane) -> f32 {
    plane.distance_to_point(center) - radius
}

/// Signed distance between two sphere surfaces.
pub fn sphere_to_sphere(center_a: &Vec3, radius_a: f32, center_b: &Vec3, radius_b: f32) -> f32 {
    center_a.distance(center_b) - radius_a - radius_b
}

/// Signed distance between two axis-aligned extents.
///
/// Per axis, the gap is the union's size minus both boxes' sizes. Separated
/// boxes report the length of the positive gaps; boxes overlapping on every
/// axis report the negated length of all three gaps.
pub fn aabb_to_aabb(a: &Aabb, b: &Aabb) -> f32 {
    let outer = a.union(b).dimensions();
    let inner = outer.sub(&a.dimensions()).sub(&b.dimensions());
    if inner.largest_component() < 0.0 {
        -inner.length()
    } else {
        inner.max(&Vec3::ZERO).length()
    }
}

/// Extent of box `a` expressed in the local frame of box `b`: the bounds of
/// `a`'s eight corners mapped through `a`'s box-to-world and then `b`'s
/// world-to-box transform.
pub fn separating_axis(a: &Obb, b: &Obb) -> Aabb {
    let a_to_b = b.world_to_box().multiply(a.box_to_world());
    a.extent().transformed(&a_to_b)
}

/// Separation of `a` from `b` along `b`'s local axes.
fn directional_distance(a: &Obb, b: &Obb) -> f32 {
    let e = separating_axis(a, b);
    let below = e.min().sub(&b.extent().max());
    let above = b.extent().min().sub(&e.max());
    below.max(&above).largest_component()
}

/// Separating-axis distance between two oriented boxes.
///
/// Each box is tested against the other's local axes and the larger
/// separation wins. The value is a conservative bound rather than the exact
/// Minkowski distance, but its sign is exact for overlap classification:
/// negative means the boxes overlap.
pub fn box_to_box(a: &Obb, b: &Obb) -> f32 {
    directional_distance(a, b).max(directional_distance(b, a))
}

/// Signed distance from `point` to the surface of `b`.
///
/// Per-axis excess is measured in the box frame and scaled by the box's
/// world scale. Inside the box the result is the (negative) distance to the
/// nearest face; outside it is the length of the positive excesses.
///
/// # Examples
/// ```
/// use kite_geom::{proximity, Aabb, Obb};
/// use kite_math::Vec3;
/// let b = Obb::axis_aligned(Aabb::new(Vec3::new(-1.0, -2.0, -3.0), Vec3::new(2.0, 4.0, 6.0)));
/// assert_eq!(proximity::point_to_box(&Vec3::ZERO, &b), -1.0);
/// ```
pub fn point_to_box(point: &Vec3, b: &Obb) -> f32 {
    let local = b.world_to_box().transform_point(point);
    let below = b.extent().min().sub(&local);
    let above = local.sub(&b.extent().max());
    let d = below.max(&above).multiply(&b.scale());
    if d.largest_component() <= 0.0 {
        d.largest_component()
    } else {
        d.max(&Vec3::ZERO).length()
    }
}
