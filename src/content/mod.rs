//! Content domain: runner configuration loading and resource setup.

mod data;
mod loader;

#[cfg(test)]
mod tests;

pub use data::RunnerConfig;
pub use loader::{ContentLoadError, load_runner_config, parse_runner_config};

use avian2d::prelude::*;
use bevy::prelude::*;
use std::path::Path;

pub const RUNNER_CONFIG_PATH: &str = "assets/data/runner.ron";

/// Loads the runner configuration while the app is being built, so every
/// tuning resource is in place before the first schedule runs.
pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let config = match load_runner_config(Path::new(RUNNER_CONFIG_PATH)) {
            Ok(config) => {
                info!(
                    "Loaded runner config v{} ({} Hz)",
                    config.schema_version, config.fixed_hz
                );
                config
            }
            Err(e) => {
                warn!("{}, using default runner config", e);
                RunnerConfig::default()
            }
        };

        app.insert_resource(Time::<Fixed>::from_hz(config.fixed_hz))
            .insert_resource(Gravity(Vec2::NEG_Y * config.movement.gravity))
            .insert_resource(config.movement)
            .insert_resource(config.suspension)
            .insert_resource(config.camera);
    }
}
