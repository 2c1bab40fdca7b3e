//! UI domain: "press to start" prompt shown until the run starts.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::PlayerDiedEvent;
use crate::movement::RunStartedEvent;

/// Marker for the start prompt overlay
#[derive(Component)]
pub struct StartPromptUI;

pub(crate) fn spawn_start_prompt(
    mut commands: Commands,
    existing_prompt: Query<Entity, With<StartPromptUI>>,
) {
    if existing_prompt.is_empty() {
        spawn_prompt(&mut commands);
    }
}

/// Bring the prompt back when the runner is reset after a death.
pub(crate) fn show_prompt_after_death(
    mut commands: Commands,
    mut died_events: MessageReader<PlayerDiedEvent>,
    existing_prompt: Query<Entity, With<StartPromptUI>>,
) {
    if died_events.read().count() == 0 {
        return;
    }
    if existing_prompt.is_empty() {
        spawn_prompt(&mut commands);
    }
}

pub(crate) fn hide_start_prompt(
    mut commands: Commands,
    mut started_events: MessageReader<RunStartedEvent>,
    prompt_query: Query<Entity, With<StartPromptUI>>,
) {
    if started_events.read().count() == 0 {
        return;
    }
    for entity in &prompt_query {
        commands.entity(entity).despawn();
    }
}

fn spawn_prompt(commands: &mut Commands) {
    commands.spawn((
        StartPromptUI,
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            right: Val::Px(0.0),
            bottom: Val::Px(80.0),
            justify_content: JustifyContent::Center,
            ..default()
        },
        children![(
            Text::new("Press SPACE or click to start"),
            TextFont {
                font_size: 28.0,
                ..default()
            },
            TextColor(Color::srgb(0.9, 0.9, 0.9)),
        )],
    ));
}
