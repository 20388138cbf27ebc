//! Movement domain: ground and ladder probes.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MovementState, MovementTuning, Player};

/// Downward ray probe from a fixed anchor below the collider. This is the
/// single grounded-detection strategy: a side contact never reads as
/// grounded the way a collider-touch test would.
pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &Collider, &mut MovementState), With<Player>>,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, mut state) in &mut query {
        let half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 0.9,
        };

        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, half_height);
        let was_grounded = state.grounded;

        let hit = spatial_query.cast_ray(
            ray_origin,
            Dir2::NEG_Y,
            tuning.ground_probe_distance,
            true,
            &ground_filter,
        );

        state.set_grounded(hit.is_some());

        if state.grounded && !was_grounded {
            debug!("Landed at y={:.2}", transform.translation.y);
        }
    }
}

/// Ladder overlap flag for this tick. Losing the overlap while climbing
/// drops the player off the ladder.
pub(crate) fn detect_ladder(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &mut MovementState), With<Player>>,
) {
    let ladder_filter = SpatialQueryFilter::from_mask(GameLayer::Ladder);

    for (transform, collider, mut state) in &mut query {
        let overlaps = spatial_query.shape_intersections(
            collider,
            transform.translation.truncate(),
            0.0,
            &ladder_filter,
        );
        state.touching_ladder = !overlaps.is_empty();

        if state.climbing && !state.touching_ladder {
            state.climbing = false;
        }
    }
}
