// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use kite_math::Vec3;

use super::proximity;
use crate::{Aabb, Obb};

/// `true` when two spheres overlap (touching does not count).
pub fn sphere_with_sphere(center_a: &Vec3, radius_a: f32, center_b: &Vec3, radius_b: f32) -> bool {
    proximity::sphere_to_sphere(center_a, radius_a, center_b, radius_b) < 0.0
}

/// `true` when two extents overlap; touching faces count.
pub fn aabb_with_aabb(a: &Aabb, b: &Aabb) -> bool {
    a.overlaps(b)
}

/// `true` when a sphere overlaps the oriented box `b`.
///
/// The center is clamped to the box in the box frame and the clamped point
/// is mapped back to world space, so the comparison against `radius` holds
/// under non-uniform scale.
pub fn sphere_with_box(center: &Vec3, radius: f32, b: &Obb) -> bool {
    let local = b.world_to_box().transform_point(center);
    let clamped = local.clamp_to(&b.extent().min(), &b.extent().max());
    let nearest = b.box_to_world().transform_point(&clamped);
    nearest.distance_squared(center) < radius * radius
}

/// `true` when two oriented boxes overlap (`box_to_box < 0`).
pub fn box_with_box(a: &Obb, b: &Obb) -> bool {
    proximity::box_to_box(a, b) < 0.0
}

/// `true` when box `a` lies strictly inside box `b` on all six faces.
pub fn box_within_box(a: &Obb, b: &Obb) -> bool {
    let e = proximity::separating_axis(a, b);
    let (min, max) = (b.extent().min(), b.extent().max());
    (0..3).all(|i| e.min().component(i) > min.component(i) && e.max().component(i) < max.component(i))
}
