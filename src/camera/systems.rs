//! Camera domain: bounds recomputation and per-frame follow.

use bevy::prelude::*;

use crate::camera::components::{CameraBiasZone, CameraFollow};
use crate::camera::resources::{CameraBounds, CameraTuning};
use crate::level::LevelExtents;
use crate::movement::Player;

/// World y of the camera's visible top edge, for orthographic cameras.
pub fn visible_top_edge(transform: &Transform, projection: &Projection) -> Option<f32> {
    match projection {
        Projection::Orthographic(ortho) => Some(transform.translation.y + ortho.area.max.y),
        _ => None,
    }
}

pub fn visible_half_width(projection: &Projection) -> Option<f32> {
    match projection {
        Projection::Orthographic(ortho) => Some(ortho.area.width() * 0.5),
        _ => None,
    }
}

/// Where the camera wants to be, before clamping.
pub fn desired_center_x(target_x: f32, lateral_bias: f32, prefer_right: bool) -> f32 {
    let sign = if prefer_right { 1.0 } else { -1.0 };
    target_x + sign * lateral_bias
}

/// Frame-rate independent exponential ease. Zero smoothing snaps.
pub fn ease_toward(current: f32, target: f32, smoothing_time: f32, dt: f32) -> f32 {
    if smoothing_time <= 0.0 {
        return target;
    }
    let t = 1.0 - (-dt.max(0.0) / smoothing_time).exp();
    current + (target - current) * t
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, CameraFollow::new(true)));
}

pub(crate) fn recompute_camera_bounds(
    tuning: Res<CameraTuning>,
    extents: Option<Res<LevelExtents>>,
    mut bounds: ResMut<CameraBounds>,
    camera_query: Query<Ref<Projection>, With<CameraFollow>>,
) {
    let Ok(projection) = camera_query.single() else {
        return;
    };

    let extents_changed = extents.as_ref().is_some_and(|e| e.is_changed());
    if !extents_changed && !projection.is_changed() && !tuning.is_changed() {
        return;
    }

    let half_width = visible_half_width(&projection).unwrap_or(0.0);
    let next = CameraBounds::compute(extents.as_deref(), half_width, &tuning);
    if *bounds != next {
        debug!(
            "Camera bounds: x=[{}, {}], y=[{}, {}]",
            next.min_center_x, next.max_center_x, next.min_center_y, next.max_center_y
        );
        *bounds = next;
    }
}

/// Flip the look-ahead side when the target enters a bias zone.
pub(crate) fn apply_bias_zones(
    zones: Query<&CameraBiasZone>,
    targets: Query<&Transform, Without<CameraFollow>>,
    mut camera_query: Query<&mut CameraFollow>,
) {
    for mut follow in &mut camera_query {
        let Some(target_transform) = follow.target.and_then(|t| targets.get(t).ok()) else {
            continue;
        };
        let x = target_transform.translation.x;

        let Some(zone) = zones.iter().find(|zone| zone.contains(x)) else {
            continue;
        };
        if follow.prefer_right != zone.prefer_right {
            follow.prefer_right = zone.prefer_right;
            debug!("Camera bias flipped, prefer_right={}", zone.prefer_right);
        }
    }
}

pub(crate) fn follow_target(
    real_time: Res<Time<Real>>,
    tuning: Res<CameraTuning>,
    bounds: Res<CameraBounds>,
    player_query: Query<Entity, With<Player>>,
    targets: Query<&Transform, Without<CameraFollow>>,
    mut camera_query: Query<(&mut Transform, &mut CameraFollow)>,
) {
    let dt = real_time.delta_secs();

    for (mut transform, mut follow) in &mut camera_query {
        if follow.target.is_none() && !follow.discovery_attempted {
            follow.discovery_attempted = true;
            match player_query.iter().next() {
                Some(player) => {
                    follow.target = Some(player);
                    info!("Camera following {:?}", player);
                }
                None => warn!("Camera has no target and no player to follow, staying put"),
            }
        }

        let Some(target) = follow.target else {
            continue;
        };
        let Ok(target_transform) = targets.get(target) else {
            warn!("Camera target {:?} is gone", target);
            follow.target = None;
            follow.discovery_attempted = false;
            continue;
        };

        let desired_x = bounds.clamp_x(desired_center_x(
            target_transform.translation.x,
            tuning.lateral_bias,
            follow.prefer_right,
        ));
        transform.translation.x =
            ease_toward(transform.translation.x, desired_x, tuning.smoothing_time, dt);

        let desired_y = if tuning.lock_y {
            tuning.locked_y
        } else {
            bounds.clamp_y(target_transform.translation.y)
        };
        transform.translation.y =
            ease_toward(transform.translation.y, desired_y, tuning.smoothing_time, dt);
    }
}
