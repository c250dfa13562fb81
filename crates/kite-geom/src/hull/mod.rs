// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Hull points and triangles are float offsets into the source
//! [`VertexBuffer`], so they can index the caller's buffer directly.

mod indices;
mod options;
mod triangulate;

use kite_math::Vec3;
use thiserror::Error;

use crate::vertex::VertexBuffer;

pub use indices::{generate_hull_indices, generate_hull_indices_with, is_point_inside};
pub use options::HullOptions;
pub use triangulate::{generate_hull_faces, generate_hull_triangles, generate_hull_triangles_with};

/// Reasons a hull cannot be triangulated.
///
/// Both are expected outcomes for flat or sparse input, not bugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HullError {
    /// Fewer than four hull points.
    #[error("need at least four hull points, got {count}")]
    TooFewPoints {
        /// Number of hull points supplied.
        count: usize,
    },
    /// No four hull points span a volume.
    #[error("hull points are coplanar")]
    Coplanar,
}

/// One triangle of a hull, wound counter-clockwise when seen from outside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullFace {
    /// Offset of the first vertex.
    pub a: usize,
    /// Offset of the second vertex.
    pub b: usize,
    /// Offset of the third vertex.
    pub c: usize,
    /// Outward unit normal.
    pub normal: Vec3,
}

/// Hull point offsets together with their triangulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvexHull {
    /// Sorted offsets of the points the triangles use.
    pub indices: Vec<usize>,
    /// Flattened outward-facing triangles (see [`generate_hull_triangles`]).
    pub triangles: Vec<usize>,
}

impl ConvexHull {
    /// Builds the hull of a raw vertex buffer laid out with `options.stride`.
    ///
    /// Every vertex is fed to the triangulation, so no input point ends up
    /// outside a face. `indices` lists the offsets the resulting triangles
    /// reference.
    ///
    /// # Errors
    /// Returns [`HullError`] when the points do not enclose a volume.
    ///
    /// # Panics
    /// Panics if `options.stride < 3` or `vertices.len()` is not a multiple
    /// of it.
    ///
    /// # Examples
    /// ```
    /// use kite_geom::{ConvexHull, HullOptions};
    /// let tetra = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
    /// let hull = ConvexHull::build(&tetra, &HullOptions::default()).unwrap();
    /// assert_eq!(hull.triangle_count(), 4);
    /// ```
    pub fn build(vertices: &[f32], options: &HullOptions) -> Result<Self, HullError> {
        let buffer = VertexBuffer::new(vertices, options.stride);
        let all: Vec<usize> = buffer.offsets().collect();
        let triangles = generate_hull_triangles_with(&buffer, &all, options)?;
        let mut indices = triangles.clone();
        indices.sort_unstable();
        indices.dedup();
        Ok(Self { indices, triangles })
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Triangles as `[a, b, c]` offset triples.
    pub fn triangles_iter(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.triangles.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}
