// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Geometry queries for Kite.

This crate provides:
- Stride-addressed vertex buffers (`VertexBuffer`) and flat-buffer vector ops.
- Primitive shapes: axis-aligned extents (`Aabb`), oriented boxes (`Obb`)
  and planes (`Plane`).
- Incremental convex hull construction (`ConvexHull`, `generate_hull_indices`,
  `generate_hull_triangles`).
- Narrow-phase queries: signed distances (`proximity`), boolean overlap
  predicates (`overlap`), line/plane intersection (`intersection`) and
  closest points (`closest_point`).

Design notes:
- Vertices are addressed by float offset into a contiguous buffer, never by
  per-vertex handles. Hull indices and triangles are such offsets.
- Every query is a pure function with call-local scratch; nothing is shared
  between calls.
- Degenerate shapes are rejected when they are built (`Obb::new`) or reported
  as ordinary results (`HullError`), so queries themselves never fail.
"]

/// Incremental convex hull construction.
pub mod hull;
/// Narrow-phase queries between primitive shapes.
pub mod query;
/// Primitive shapes.
pub mod types;
/// Stride-addressed vertex buffers and flat-buffer vector operations.
pub mod vertex;

pub use hull::{
    generate_hull_faces, generate_hull_indices, generate_hull_indices_with,
    generate_hull_triangles, generate_hull_triangles_with, is_point_inside, ConvexHull, HullError,
    HullFace, HullOptions,
};
pub use query::{closest_point, intersection, overlap, proximity};
pub use types::aabb::Aabb;
pub use types::obb::Obb;
pub use types::plane::Plane;
pub use vertex::VertexBuffer;
