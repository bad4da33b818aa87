//! Movement domain: avian spatial queries behind the kinematic [`ShapeCaster`].

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::kinematics::{CollisionHit, ShapeCaster};

/// Upper bound on hits gathered per sweep.
const MAX_HITS: u32 = 16;

/// Sweeps one entity's collider through the avian world.
pub struct AvianCaster<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    shape: &'a Collider,
    filter: SpatialQueryFilter,
}

impl<'a, 'w, 's> AvianCaster<'a, 'w, 's> {
    /// Only colliders in `layers.filters` are hit, and never `entity` itself.
    pub fn new(
        spatial_query: &'a SpatialQuery<'w, 's>,
        entity: Entity,
        shape: &'a Collider,
        layers: &CollisionLayers,
    ) -> Self {
        Self {
            spatial_query,
            shape,
            filter: SpatialQueryFilter::from_mask(layers.filters).with_excluded_entities([entity]),
        }
    }
}

impl ShapeCaster for AvianCaster<'_, '_, '_> {
    fn cast(&self, origin: Vec2, direction: Dir2, max_distance: f32) -> Vec<CollisionHit> {
        self.spatial_query
            .shape_hits(
                self.shape,
                origin,
                0.0,
                direction,
                MAX_HITS,
                &ShapeCastConfig::from_max_distance(max_distance),
                &self.filter,
            )
            .into_iter()
            .map(|hit| CollisionHit {
                normal: hit.normal1,
                distance: hit.distance,
                collider: hit.entity,
            })
            .collect()
    }
}
