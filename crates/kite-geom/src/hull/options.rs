// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::vertex::DEFAULT_STRIDE;

/// Tuning knobs for hull construction.
///
/// Defaults: stride `3`, coincident tolerance `1e-6`, coplanar tolerance
/// `1e-5`.
///
/// # Examples
/// ```
/// use kite_geom::HullOptions;
/// let options = HullOptions::default().with_stride(6).with_coplanar_tolerance(1e-4);
/// assert_eq!(options.stride, 6);
/// assert_eq!(options.coincident_tolerance, 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HullOptions {
    /// Floats per vertex in raw buffers handed to [`crate::ConvexHull::build`].
    pub stride: usize,
    /// Per-axis distance under which two points count as the same point.
    pub coincident_tolerance: f32,
    /// Tetrahedron volume (times six) under which four points count as
    /// coplanar.
    pub coplanar_tolerance: f32,
}

impl Default for HullOptions {
    fn default() -> Self {
        Self {
            stride: DEFAULT_STRIDE,
            coincident_tolerance: 1e-6,
            coplanar_tolerance: 1e-5,
        }
    }
}

impl HullOptions {
    /// Sets the vertex stride.
    pub const fn with_stride(mut self, stride: usize) -> Self {
        self.stride = stride;
        self
    }

    /// Sets the coincident-point tolerance.
    pub const fn with_coincident_tolerance(mut self, tolerance: f32) -> Self {
        self.coincident_tolerance = tolerance;
        self
    }

    /// Sets the coplanarity tolerance.
    pub const fn with_coplanar_tolerance(mut self, tolerance: f32) -> Self {
        self.coplanar_tolerance = tolerance;
        self
    }
}
