//! Level domain: test course geometry and runner spawning.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::camera::CameraBiasZone;
use crate::level::resources::{LevelExtents, SpawnPoint};
use crate::movement::{
    GameLayer, Ground, Hazard, HazardKind, MovementTuning, Player, RunDirection, RunnerState,
    SetDirectionEvent,
};

const LEVEL_MIN_X: f32 = -640.0;
const LEVEL_MAX_X: f32 = 3200.0;

pub(crate) fn spawn_level(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    spawn_point: Res<SpawnPoint>,
    existing_player: Query<Entity, With<Player>>,
    mut direction_events: MessageWriter<SetDirectionEvent>,
) {
    let ground_color = Color::srgb(0.35, 0.4, 0.35);
    let hazard_color = Color::srgb(0.75, 0.25, 0.25);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let hazard_layers = CollisionLayers::new(GameLayer::Hazard, [GameLayer::Player]);

    let level_width = LEVEL_MAX_X - LEVEL_MIN_X;
    let ground_height = 40.0;

    // Ground, top edge on the floor line
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(level_width, ground_height)),
            ..default()
        },
        Transform::from_xyz(
            (LEVEL_MIN_X + LEVEL_MAX_X) * 0.5,
            tuning.floor_y - ground_height * 0.5,
            0.0,
        ),
        RigidBody::Static,
        Collider::rectangle(level_width, ground_height),
        ground_layers,
    ));

    // Standing pillars, hanging blocks and a spike strip
    let hazards = [
        (HazardKind::Obstacle, Vec2::new(420.0, tuning.floor_y + 60.0), Vec2::new(40.0, 120.0)),
        (HazardKind::Obstacle, Vec2::new(1150.0, tuning.floor_y + 90.0), Vec2::new(40.0, 180.0)),
        (HazardKind::Ceiling, Vec2::new(800.0, 260.0), Vec2::new(60.0, 220.0)),
        (HazardKind::Ceiling, Vec2::new(1700.0, 240.0), Vec2::new(60.0, 260.0)),
        (HazardKind::Ground, Vec2::new(2200.0, tuning.floor_y + 8.0), Vec2::new(220.0, 16.0)),
    ];

    for (kind, center, size) in hazards {
        commands.spawn((
            Hazard(kind),
            Sprite {
                color: hazard_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(center.x, center.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            Sensor,
            hazard_layers,
        ));
    }

    // Look ahead while running right, look back over the final stretch
    commands.spawn(CameraBiasZone {
        min_x: LEVEL_MIN_X,
        max_x: 2600.0,
        prefer_right: true,
    });
    commands.spawn(CameraBiasZone {
        min_x: 2600.0,
        max_x: LEVEL_MAX_X,
        prefer_right: false,
    });

    let extents = LevelExtents::new(LEVEL_MIN_X, LEVEL_MAX_X);
    commands.insert_resource(extents);

    if existing_player.is_empty() {
        spawn_runner(&mut commands, &tuning, spawn_point.position);
    } else {
        info!("Runner already exists, skipping spawn");
    }
    direction_events.write(SetDirectionEvent {
        direction: RunDirection::Right,
    });

    info!(
        "Level spawned: x=[{}, {}] ({} wide), {} hazards",
        extents.min_x,
        extents.max_x,
        extents.width(),
        hazards.len()
    );
}

fn spawn_runner(commands: &mut Commands, tuning: &MovementTuning, position: Vec2) {
    commands.spawn(runner_bundle(tuning, position));
}

/// Everything the runner entity carries.
pub(crate) fn runner_bundle(tuning: &MovementTuning, position: Vec2) -> impl Bundle {
    (
        // Identity & Movement
        (Player, RunnerState::new(RunDirection::Right)),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(tuning.body_width, tuning.body_height)),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 1.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(tuning.body_width, tuning.body_height),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(1.0),
            // Min, so ground friction never eats into the forced travel speed
            Friction::new(0.0).with_combine_rule(CoefficientCombine::Min),
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Hazard]),
        ),
    )
}
