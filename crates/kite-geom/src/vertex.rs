// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Vertex data lives in flat `f32` buffers grouped in tuples of `stride`
//! floats; the first three floats of each tuple are the position. A vertex
//! is addressed by the float offset of its tuple (`0, stride, 2·stride, …`).
//!
//! [`VertexBuffer`] is a read-only view used by the hull builder and the
//! extent helpers. The free functions below write into caller-owned output
//! buffers at explicit offsets so hot loops stay allocation-free. Inputs are
//! read completely before the output is written.

use kite_math::{Affine4, Vec3};

/// Default number of floats per vertex.
pub const DEFAULT_STRIDE: usize = 3;

/// Read-only, stride-addressed view over a contiguous float buffer.
///
/// Invariants:
/// - `stride >= 3`.
/// - The slice length is a multiple of `stride`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexBuffer<'a> {
    data: &'a [f32],
    stride: usize,
}

impl<'a> VertexBuffer<'a> {
    /// Wraps `data` with the given `stride`.
    ///
    /// # Panics
    /// Panics if `stride < 3` or `data.len()` is not a multiple of `stride`.
    pub fn new(data: &'a [f32], stride: usize) -> Self {
        assert!(stride >= 3, "stride must be at least 3, got {stride}");
        assert!(
            data.len() % stride == 0,
            "buffer length {} is not a multiple of stride {stride}",
            data.len()
        );
        Self { data, stride }
    }

    /// Wraps tightly packed `xyz` data (stride 3).
    ///
    /// # Panics
    /// Panics if `data.len()` is not a multiple of 3.
    pub fn packed(data: &'a [f32]) -> Self {
        Self::new(data, DEFAULT_STRIDE)
    }

    /// Underlying float slice.
    pub fn as_slice(&self) -> &'a [f32] {
        self.data
    }

    /// Floats per vertex.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Number of vertices in the buffer.
    pub fn vertex_count(&self) -> usize {
        self.data.len() / self.stride
    }

    /// Returns `true` when the buffer holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Offsets of every vertex in buffer order.
    pub fn offsets(&self) -> impl Iterator<Item = usize> {
        (0..self.data.len()).step_by(self.stride)
    }

    /// Position stored at `offset`.
    ///
    /// # Panics
    /// Panics if `offset + 3` exceeds the buffer length.
    pub fn vec3_at(&self, offset: usize) -> Vec3 {
        read(self.data, offset)
    }

    /// Returns `true` when the positions at `a` and `b` match on every axis
    /// within `tolerance`.
    pub fn equals(&self, a: usize, b: usize, tolerance: f32) -> bool {
        self.vec3_at(a).approx_eq(&self.vec3_at(b), tolerance)
    }

    /// Mean position of all vertices; the origin for an empty buffer.
    pub fn centroid(&self) -> Vec3 {
        mean(self.offsets().map(|o| self.vec3_at(o)))
    }

    /// Mean position of the vertices at `offsets`; the origin when empty.
    pub fn centroid_of(&self, offsets: &[usize]) -> Vec3 {
        mean(offsets.iter().map(|&o| self.vec3_at(o)))
    }

    /// Offsets of the vertices holding the minimum and maximum value on each
    /// axis, sorted and without duplicates (at most six entries).
    ///
    /// The first vertex reaching an extreme wins ties.
    pub fn generate_extremes(&self) -> Vec<usize> {
        let mut offsets = self.offsets();
        let Some(first) = offsets.next() else {
            return Vec::new();
        };
        let mut min = [first; 3];
        let mut max = [first; 3];
        for offset in offsets {
            let v = self.vec3_at(offset);
            for axis in 0..3 {
                let value = v.component(axis);
                if value < self.vec3_at(min[axis]).component(axis) {
                    min[axis] = offset;
                }
                if value > self.vec3_at(max[axis]).component(axis) {
                    max[axis] = offset;
                }
            }
        }

        let mut extremes: Vec<usize> = min.into_iter().chain(max).collect();
        extremes.sort_unstable();
        extremes.dedup();
        extremes
    }

    /// Returns `true` when the four vertices lie within `tolerance` of a
    /// common plane (see [`are_coplanar`]).
    pub fn are_coplanar(&self, a: usize, b: usize, c: usize, d: usize, tolerance: f32) -> bool {
        are_coplanar(
            &self.vec3_at(a),
            &self.vec3_at(b),
            &self.vec3_at(c),
            &self.vec3_at(d),
            tolerance,
        )
    }

    /// Unit normal of the plane through the vertices at `a`, `b`, `c`
    /// (`normalize((c - b) × (a - b))`); zero when they are collinear.
    pub fn plane_normal(&self, a: usize, b: usize, c: usize) -> Vec3 {
        Vec3::plane_normal(&self.vec3_at(a), &self.vec3_at(b), &self.vec3_at(c))
    }

    /// Copies the positions at `offsets` into a new packed (stride 3) buffer.
    pub fn gather(&self, offsets: &[usize]) -> Vec<f32> {
        offsets
            .iter()
            .flat_map(|&o| self.vec3_at(o).to_array())
            .collect()
    }
}

/// Returns `true` when `|(d - a) · ((b - a) × (c - a))| < tolerance`, i.e. the
/// tetrahedron spanned by the four points has (six times) a volume below
/// `tolerance`.
pub fn are_coplanar(a: &Vec3, b: &Vec3, c: &Vec3, d: &Vec3, tolerance: f32) -> bool {
    let ab = b.sub(a);
    let ac = c.sub(a);
    d.sub(a).dot(&ab.cross(&ac)).abs() < tolerance
}

fn mean(points: impl Iterator<Item = Vec3>) -> Vec3 {
    let (sum, count) = points.fold((Vec3::ZERO, 0usize), |(sum, n), p| (sum.add(&p), n + 1));
    if count == 0 {
        return Vec3::ZERO;
    }
    sum.scale(1.0 / count as f32)
}

fn read(buf: &[f32], offset: usize) -> Vec3 {
    Vec3::new(buf[offset], buf[offset + 1], buf[offset + 2])
}

fn write(out: &mut [f32], offset: usize, v: &Vec3) {
    out[offset..offset + 3].copy_from_slice(&v.to_array());
}

/// Writes `v` at `out[offset..offset + 3]`.
///
/// # Panics
/// Panics if the range is out of bounds (as do all functions below).
pub fn set(out: &mut [f32], offset: usize, v: &Vec3) {
    write(out, offset, v);
}

/// Copies the position at `a[ai]` to `out[oi]`.
pub fn copy(out: &mut [f32], oi: usize, a: &[f32], ai: usize) {
    write(out, oi, &read(a, ai));
}

/// `out[oi] = a[ai] + b[bi]`.
pub fn add(out: &mut [f32], oi: usize, a: &[f32], ai: usize, b: &[f32], bi: usize) {
    write(out, oi, &read(a, ai).add(&read(b, bi)));
}

/// `out[oi] = a[ai] - b[bi]`.
pub fn sub(out: &mut [f32], oi: usize, a: &[f32], ai: usize, b: &[f32], bi: usize) {
    write(out, oi, &read(a, ai).sub(&read(b, bi)));
}

/// `out[oi] = a[ai] × b[bi]`.
pub fn cross(out: &mut [f32], oi: usize, a: &[f32], ai: usize, b: &[f32], bi: usize) {
    write(out, oi, &read(a, ai).cross(&read(b, bi)));
}

/// `out[oi] = min(a[ai], b[bi])` per component.
pub fn min(out: &mut [f32], oi: usize, a: &[f32], ai: usize, b: &[f32], bi: usize) {
    write(out, oi, &read(a, ai).min(&read(b, bi)));
}

/// `out[oi] = max(a[ai], b[bi])` per component.
pub fn max(out: &mut [f32], oi: usize, a: &[f32], ai: usize, b: &[f32], bi: usize) {
    write(out, oi, &read(a, ai).max(&read(b, bi)));
}

/// `out[oi] = a[ai] + b[bi] * s`.
pub fn scale_and_add(
    out: &mut [f32],
    oi: usize,
    a: &[f32],
    ai: usize,
    b: &[f32],
    bi: usize,
    s: f32,
) {
    write(out, oi, &read(a, ai).scale_and_add(&read(b, bi), s));
}

/// `out[oi] = normalize(a[ai])`; degenerate input writes zeros.
pub fn normalize(out: &mut [f32], oi: usize, a: &[f32], ai: usize) {
    write(out, oi, &read(a, ai).normalize());
}

/// `a[ai] · b[bi]`.
pub fn dot(a: &[f32], ai: usize, b: &[f32], bi: usize) -> f32 {
    read(a, ai).dot(&read(b, bi))
}

/// Writes `aff · a[ai]` (as a point) to `out[oi]`.
pub fn apply_affine(out: &mut [f32], oi: usize, aff: &Affine4, a: &[f32], ai: usize) {
    write(out, oi, &aff.transform_point(&read(a, ai)));
}

// Single-buffer forms: inputs are read before `buf[oi]` is written, so any
// of `oi`, `ai` and `bi` may coincide or overlap.

/// Copies the position at `buf[ai]` to `buf[oi]`.
pub fn copy_within(buf: &mut [f32], oi: usize, ai: usize) {
    let v = read(buf, ai);
    write(buf, oi, &v);
}

/// `buf[oi] = buf[ai] + buf[bi]`.
pub fn add_within(buf: &mut [f32], oi: usize, ai: usize, bi: usize) {
    let v = read(buf, ai).add(&read(buf, bi));
    write(buf, oi, &v);
}

/// `buf[oi] = buf[ai] - buf[bi]`.
pub fn sub_within(buf: &mut [f32], oi: usize, ai: usize, bi: usize) {
    let v = read(buf, ai).sub(&read(buf, bi));
    write(buf, oi, &v);
}

/// `buf[oi] = buf[ai] × buf[bi]`.
pub fn cross_within(buf: &mut [f32], oi: usize, ai: usize, bi: usize) {
    let v = read(buf, ai).cross(&read(buf, bi));
    write(buf, oi, &v);
}

/// `buf[oi] = buf[ai] + buf[bi] * s`.
pub fn scale_and_add_within(buf: &mut [f32], oi: usize, ai: usize, bi: usize, s: f32) {
    let v = read(buf, ai).scale_and_add(&read(buf, bi), s);
    write(buf, oi, &v);
}

/// `buf[oi] = normalize(buf[ai])`; pass `oi == ai` to normalize in place.
pub fn normalize_within(buf: &mut [f32], oi: usize, ai: usize) {
    let v = read(buf, ai).normalize();
    write(buf, oi, &v);
}

/// Writes `aff · buf[ai]` (as a point) to `buf[oi]`.
pub fn apply_affine_within(buf: &mut [f32], oi: usize, aff: &Affine4, ai: usize) {
    let v = aff.transform_point(&read(buf, ai));
    write(buf, oi, &v);
}
