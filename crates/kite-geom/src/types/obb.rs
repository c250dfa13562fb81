// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use kite_math::{Affine4, MathError, Vec3};
use tracing::debug;

use crate::Aabb;

/// Oriented box: an [`Aabb`] extent expressed in the local frame of a
/// box-to-world transform.
///
/// The transform is validated once, in [`Obb::new`]; its inverse and its
/// per-axis world scale are cached so every query on an `Obb` is infallible.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Obb {
    extent: Aabb,
    box_to_world: Affine4,
    world_to_box: Affine4,
    scale: Vec3,
}

impl Obb {
    /// Builds an oriented box from a local extent and its box-to-world
    /// transform.
    ///
    /// # Errors
    /// Returns [`MathError::Singular`] if `box_to_world` cannot be inverted.
    pub fn new(extent: Aabb, box_to_world: Affine4) -> Result<Self, MathError> {
        let world_to_box = box_to_world.invert().inspect_err(|err| {
            debug!(%err, "rejecting oriented box with singular transform");
        })?;
        Ok(Self {
            extent,
            box_to_world,
            world_to_box,
            scale: box_to_world.scale_factors(),
        })
    }

    /// Box whose local frame is the world frame.
    pub fn axis_aligned(extent: Aabb) -> Self {
        Self {
            extent,
            box_to_world: Affine4::identity(),
            world_to_box: Affine4::identity(),
            scale: Vec3::ONE,
        }
    }

    /// Local-space extent.
    pub fn extent(&self) -> &Aabb {
        &self.extent
    }

    /// Box-to-world transform.
    pub fn box_to_world(&self) -> &Affine4 {
        &self.box_to_world
    }

    /// World-to-box transform (inverse of [`Obb::box_to_world`]).
    pub fn world_to_box(&self) -> &Affine4 {
        &self.world_to_box
    }

    /// World-space length of each local unit axis.
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// World-space positions of the eight corners.
    pub fn world_corners(&self) -> [Vec3; 8] {
        self.extent.corners().map(|c| self.box_to_world.transform_point(&c))
    }

    /// World-space axis-aligned bounds.
    pub fn world_bounds(&self) -> Aabb {
        self.extent.transformed(&self.box_to_world)
    }
}
