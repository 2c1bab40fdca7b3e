mod camera;
mod content;
mod core;
mod level;
mod movement;
mod suspension;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Skyline Runner".to_string(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            content::ContentPlugin,
            core::CorePlugin,
            movement::MovementPlugin,
            suspension::SuspensionPlugin,
            camera::CameraPlugin,
            level::LevelPlugin,
            ui::UiPlugin,
        ))
        .run();
}
