use bevy::prelude::*;

use crate::game::actor::Actor;
use crate::game::components::*;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_ui);
        app.add_systems(
            Update,
            (update_score_display, update_hp_display, update_phase_display),
        );
    }
}

#[derive(Component)]
struct ScoreText;

#[derive(Component)]
struct HpText(PlayerSlot);

#[derive(Component)]
struct PhaseText;

fn setup_ui(mut commands: Commands) {
    // Player labels + HP, top-left
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(6.0),
            ..default()
        })
        .with_children(|parent| {
            for slot in PlayerSlot::BOTH {
                parent.spawn((
                    HpText(slot),
                    Text::new(slot.label()),
                    TextFont {
                        font_size: 16.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            }
            parent.spawn((
                PhaseText,
                Text::new(""),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.8, 0.2)),
            ));
        });

    // Score, bottom-left
    commands.spawn((
        ScoreText,
        Text::new("Score: 0"),
        TextFont {
            font_size: 24.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            bottom: Val::Px(10.0),
            ..default()
        },
    ));
}

fn update_score_display(score: Res<Score>, mut text_query: Query<&mut Text, With<ScoreText>>) {
    if !score.is_changed() {
        return;
    }
    for mut text in &mut text_query {
        **text = format!("Score: {}", score.0);
    }
}

fn update_hp_display(
    actors: Query<(&PlayerSlot, &Actor)>,
    mut text_query: Query<(&mut Text, &HpText)>,
) {
    for (slot, actor) in &actors {
        for (mut text, hp_text) in &mut text_query {
            if hp_text.0 == *slot {
                **text = format!(
                    "{}  HP:{}/{}",
                    slot.label(),
                    actor.health(),
                    actor.max_health()
                );
            }
        }
    }
}

fn update_phase_display(
    state: Res<State<GamePhase>>,
    mut text_query: Query<&mut Text, With<PhaseText>>,
) {
    let phase_str = match state.get() {
        GamePhase::Playing => "",
        GamePhase::GameOver => "Game Over - press R to restart",
    };
    for mut text in &mut text_query {
        **text = phase_str.to_string();
    }
}
