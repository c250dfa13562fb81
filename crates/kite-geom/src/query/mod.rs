// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Narrow-phase queries.
//!
//! Signed distances follow one convention throughout: negative means the
//! shapes overlap or the point penetrates, positive means separated. Every
//! `*_with_*` predicate in [`overlap`] agrees with the sign of its
//! [`proximity`] counterpart where one exists.

/// Closest points on segments.
pub mod closest_point;
/// Segment/plane intersection.
pub mod intersection;
/// Boolean overlap predicates.
pub mod overlap;
/// Signed distances between primitives.
pub mod proximity;
