// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::f32::consts::PI;

use kite_math::Vec3;
use tracing::{debug, instrument, trace};

use super::HullOptions;
use crate::vertex::VertexBuffer;

/// Returns `true` when the hull points at `hull` angularly surround `point`.
///
/// A local basis is built around the direction from `point` to the first hull
/// point (`forward`), with `up` derived from the world axis least parallel to
/// it. Every other hull point gets a signed angle from `forward`, negative
/// when it lies below `up`. The point is inside when the spread between the
/// smallest and largest angle exceeds π.
///
/// Hull points coinciding with `point` (per-axis within `1e-6`) are ignored;
/// if nothing else remains the point is reported as outside.
pub fn is_point_inside(buffer: &VertexBuffer<'_>, hull: &[usize], point: &Vec3) -> bool {
    point_inside(
        buffer,
        hull,
        point,
        HullOptions::default().coincident_tolerance,
    )
}

pub(super) fn point_inside(
    buffer: &VertexBuffer<'_>,
    hull: &[usize],
    point: &Vec3,
    coincident_tolerance: f32,
) -> bool {
    let mut dirs = hull
        .iter()
        .map(|&o| buffer.vec3_at(o))
        .filter(|h| !h.approx_eq(point, coincident_tolerance))
        .map(|h| h.sub(point).normalize());

    let Some(forward) = dirs.next() else {
        return false;
    };
    let right = forward.cross(&least_parallel_axis(&forward)).normalize();
    let up = right.cross(&forward).normalize();

    let (mut min_phi, mut max_phi) = (0.0f32, 0.0f32);
    for dir in dirs {
        let phi = forward.dot(&dir).clamp(-1.0, 1.0).acos();
        let phi = if up.dot(&dir) < 0.0 { -phi } else { phi };
        min_phi = min_phi.min(phi);
        max_phi = max_phi.max(phi);
    }
    max_phi - min_phi > PI
}

/// World axis with the smallest absolute projection onto `v`; ties go to
/// the earlier axis.
fn least_parallel_axis(v: &Vec3) -> Vec3 {
    let [x, y, z] = v.to_array().map(f32::abs);
    if x <= y && x <= z {
        Vec3::UNIT_X
    } else if y <= z {
        Vec3::UNIT_Y
    } else {
        Vec3::UNIT_Z
    }
}

/// Offsets of the points on the convex hull of `buffer`, using default
/// [`HullOptions`].
///
/// See [`generate_hull_indices_with`].
pub fn generate_hull_indices(buffer: &VertexBuffer<'_>) -> Vec<usize> {
    generate_hull_indices_with(buffer, &HullOptions::default())
}

/// Offsets of the points on the convex hull of `buffer`.
///
/// The hull is seeded with the per-axis extremes, which are always hull
/// points. Every other point, in buffer order, is skipped when it coincides
/// with a hull point or lies inside the current hull; otherwise it joins the
/// hull and the non-extreme members added earlier are re-tested, dropping
/// those the new point has swallowed.
///
/// The result starts with the sorted extremes followed by the surviving
/// points in insertion order.
///
/// The inside test is [`is_point_inside`], an angular heuristic: on dense
/// clouds it can report a true hull point as inside and leave it out. Feed
/// every offset to [`generate_hull_faces`](super::generate_hull_faces), or
/// use [`ConvexHull::build`](super::ConvexHull::build), when an enclosing
/// hull is required.
#[instrument(level = "debug", skip(buffer), fields(vertices = buffer.vertex_count()))]
pub fn generate_hull_indices_with(buffer: &VertexBuffer<'_>, options: &HullOptions) -> Vec<usize> {
    let tolerance = options.coincident_tolerance;
    let extremes = buffer.generate_extremes();
    let mut hull = extremes.clone();
    trace!(?extremes, "seeded hull with extremes");

    for offset in buffer.offsets() {
        if extremes.contains(&offset) {
            continue;
        }
        let p = buffer.vec3_at(offset);
        if hull.iter().any(|&h| buffer.vec3_at(h).approx_eq(&p, tolerance)) {
            trace!(offset, "skipping repeated point");
            continue;
        }
        if point_inside(buffer, &hull, &p, tolerance) {
            continue;
        }

        hull.push(offset);
        let mut j = extremes.len();
        while j + 1 < hull.len() {
            let member = buffer.vec3_at(hull[j]);
            if point_inside(buffer, &hull, &member, tolerance) {
                trace!(offset = hull[j], by = offset, "hull point swallowed");
                hull.remove(j);
            } else {
                j += 1;
            }
        }
    }

    debug!(hull_points = hull.len(), "hull indices built");
    hull
}
