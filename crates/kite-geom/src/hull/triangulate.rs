// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use kite_math::Vec3;
use tracing::{debug, instrument, trace};

use super::{HullError, HullFace, HullOptions};
use crate::vertex::VertexBuffer;

/// Incremental triangulation state: the current faces and the running
/// centroid used to orient new faces outwards.
struct Builder<'b, 'a> {
    buffer: &'b VertexBuffer<'a>,
    faces: Vec<HullFace>,
    centroid: Vec3,
    processed: usize,
}

impl Builder<'_, '_> {
    /// Face through `a, b, c` wound so its normal points away from the
    /// centroid.
    fn face(&self, a: usize, b: usize, c: usize) -> HullFace {
        let normal = self.buffer.plane_normal(a, b, c);
        if normal.dot(&self.buffer.vec3_at(a).sub(&self.centroid)) > 0.0 {
            HullFace { a, b, c, normal }
        } else {
            HullFace {
                a,
                b: c,
                c: b,
                normal: normal.negate(),
            }
        }
    }

    fn add_point(&mut self, x: usize) {
        let p = self.buffer.vec3_at(x);
        let visible: Vec<bool> = self
            .faces
            .iter()
            .map(|f| p.sub(&self.buffer.vec3_at(f.a)).normalize().dot(&f.normal) > 0.0)
            .collect();
        let visible_count = visible.iter().filter(|&&v| v).count();
        if visible_count == 0 {
            trace!(offset = x, "point inside current hull");
            return;
        }

        let mut edges: Vec<[usize; 2]> = self
            .faces
            .iter()
            .zip(&visible)
            .filter(|&(_, &v)| v)
            .flat_map(|(f, _)| [[f.a, f.b], [f.a, f.c], [f.b, f.c]])
            .collect();
        if visible_count > 1 {
            remove_shared_edges(&mut edges);
        }

        let n = self.processed as f32;
        self.centroid = self.centroid.scale(n).add(&p).scale(1.0 / (n + 1.0));

        let mut keep = visible.iter().map(|&v| !v);
        self.faces.retain(|_| keep.next().unwrap_or(true));
        for [from, to] in edges {
            let face = self.face(from, to, x);
            self.faces.push(face);
        }
        self.processed += 1;
        trace!(offset = x, replaced = visible_count, faces = self.faces.len(), "hull expanded");
    }
}

/// Removes both copies of every edge that appears twice (in either
/// direction), leaving the horizon.
fn remove_shared_edges(edges: &mut Vec<[usize; 2]>) {
    let mut i = 0;
    while i < edges.len() {
        let [p, q] = edges[i];
        let twin = edges[i + 1..]
            .iter()
            .position(|&[s, t]| (s == p && t == q) || (s == q && t == p));
        match twin {
            Some(k) => {
                edges.remove(i + 1 + k);
                edges.remove(i);
            }
            None => i += 1,
        }
    }
}

/// Picks four non-coplanar hull points to seed the triangulation.
fn seed_tetrahedron(
    buffer: &VertexBuffer<'_>,
    hull: &[usize],
    options: &HullOptions,
) -> Result<[usize; 4], HullError> {
    let a = hull[0];
    let distinct = |o: &&usize| !buffer.equals(a, **o, options.coincident_tolerance);
    let b = *hull.iter().find(distinct).ok_or(HullError::Coplanar)?;
    let c = *hull
        .iter()
        .find(|&&o| buffer.plane_normal(a, b, o) != Vec3::ZERO)
        .ok_or(HullError::Coplanar)?;
    let d = *hull
        .iter()
        .find(|&&o| !buffer.are_coplanar(a, b, c, o, options.coplanar_tolerance))
        .ok_or(HullError::Coplanar)?;
    Ok([a, b, c, d])
}

/// Outward-facing triangles of the convex hull through the points at
/// `hull`.
///
/// Builds a tetrahedron from the first four non-coplanar hull points, then
/// adds the remaining points in order. Faces visible from a new point are
/// replaced by a fan from the point to their horizon. Points that see no
/// face are interior and are skipped.
///
/// # Errors
/// [`HullError::TooFewPoints`] for fewer than four hull points and
/// [`HullError::Coplanar`] when no four of them span a volume.
#[instrument(level = "debug", skip(buffer, hull), fields(hull_points = hull.len()))]
pub fn generate_hull_faces(
    buffer: &VertexBuffer<'_>,
    hull: &[usize],
    options: &HullOptions,
) -> Result<Vec<HullFace>, HullError> {
    if hull.len() < 4 {
        debug!("too few points for a hull");
        return Err(HullError::TooFewPoints { count: hull.len() });
    }
    let seeds = seed_tetrahedron(buffer, hull, options).inspect_err(|_| {
        debug!("hull points are coplanar");
    })?;
    trace!(?seeds, "seed tetrahedron");

    let [a, b, c, d] = seeds;
    let mut builder = Builder {
        buffer,
        faces: Vec::with_capacity(2 * hull.len()),
        centroid: buffer.centroid_of(&seeds),
        processed: seeds.len(),
    };
    for [p, q, r] in [[a, b, c], [a, b, d], [a, c, d], [b, c, d]] {
        let face = builder.face(p, q, r);
        builder.faces.push(face);
    }

    for &x in hull.iter().filter(|o| !seeds.contains(o)) {
        builder.add_point(x);
    }

    debug!(faces = builder.faces.len(), "hull triangulated");
    Ok(builder.faces)
}

/// Flattened triangle list `[a0, b0, c0, a1, b1, c1, …]` of the hull through
/// `hull`, using default [`HullOptions`].
///
/// # Errors
/// See [`generate_hull_faces`].
pub fn generate_hull_triangles(
    buffer: &VertexBuffer<'_>,
    hull: &[usize],
) -> Result<Vec<usize>, HullError> {
    generate_hull_triangles_with(buffer, hull, &HullOptions::default())
}

/// Flattened triangle list of the hull through `hull`.
///
/// # Errors
/// See [`generate_hull_faces`].
pub fn generate_hull_triangles_with(
    buffer: &VertexBuffer<'_>,
    hull: &[usize],
    options: &HullOptions,
) -> Result<Vec<usize>, HullError> {
    let faces = generate_hull_faces(buffer, hull, options)?;
    Ok(faces.iter().flat_map(|f| [f.a, f.b, f.c]).collect())
}
