//! Camera domain: boundary-clamped, eased follow of the runner.

mod components;
mod resources;
mod systems;


pub use components::{CameraBiasZone, CameraFollow};
pub use resources::{CameraBounds, CameraTuning};
pub use systems::{desired_center_x, ease_toward, visible_half_width, visible_top_edge};

use bevy::prelude::*;

use crate::camera::systems::{
    apply_bias_zones, follow_target, recompute_camera_bounds, setup_camera,
};
use crate::core::GameState;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraTuning>()
            .init_resource::<CameraBounds>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (recompute_camera_bounds, apply_bias_zones, follow_target)
                    .chain()
                    .run_if(in_state(GameState::Run)),
            );
    }
}
