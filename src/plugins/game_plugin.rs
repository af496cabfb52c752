use bevy::prelude::*;

use crate::config::tuning::Tuning;
use crate::game::{
    actor::Actor,
    arena::{self, FLOOR_SHADES},
    combat,
    components::*,
    events::HealthEvent,
    input,
    intent::Intent,
    physics,
};

// ── SystemSets (strict FixedUpdate ordering, playing-phase only) ────

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FixedGameSet {
    IntentSet,
    PhysicsSet,
    EventApplySet,
}

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<HealthEvent>();
        app.init_state::<GamePhase>();
        app.init_resource::<Score>();

        app.configure_sets(
            FixedUpdate,
            (
                FixedGameSet::IntentSet.run_if(in_state(GamePhase::Playing)),
                FixedGameSet::PhysicsSet.run_if(in_state(GamePhase::Playing)),
                FixedGameSet::EventApplySet.run_if(in_state(GamePhase::Playing)),
            )
                .chain(),
        );

        // tick must run before integration every step
        app.add_systems(
            FixedUpdate,
            physics::tick_actors.in_set(FixedGameSet::IntentSet),
        );
        app.add_systems(
            FixedUpdate,
            (physics::integrate_positions, physics::sync_transforms)
                .chain()
                .in_set(FixedGameSet::PhysicsSet),
        );
        app.add_systems(
            FixedUpdate,
            combat::apply_health_events.in_set(FixedGameSet::EventApplySet),
        );
        // EventApplySet is paused after game over; drain instead of letting messages expire
        app.add_systems(
            FixedUpdate,
            combat::discard_health_events.run_if(in_state(GamePhase::GameOver)),
        );

        // ── Startup ─────────────────────────────────────────────────────
        app.add_systems(Startup, (setup_camera, spawn_background, spawn_players));

        // ── Playing phase (Update) ──────────────────────────────────────
        app.add_systems(
            Update,
            (input::read_intent_input, check_game_over)
                .chain()
                .run_if(in_state(GamePhase::Playing)),
        );

        // ── Always-on ───────────────────────────────────────────────────
        app.add_systems(
            Update,
            (
                tuning_reload_input,
                apply_tuning_timestep.run_if(resource_changed::<Tuning>),
                restart_input,
            )
                .chain(),
        );
    }
}

// ── Startup ─────────────────────────────────────────────────────────

/// Camera centred on the window so world units equal pixels, origin bottom-left.
fn setup_camera(mut commands: Commands, tuning: Res<Tuning>) {
    commands.spawn((
        Camera2d,
        Transform::from_xyz(
            tuning.screen_width as f32 / 2.0,
            tuning.screen_height as f32 / 2.0,
            0.0,
        ),
    ));
}

fn spawn_background(mut commands: Commands, tuning: Res<Tuning>) {
    let mut rng = rand::thread_rng();
    let size = Vec2::splat(tuning.tile_size as f32);
    let centres = arena::tile_grid(tuning.screen_width, tuning.screen_height, tuning.tile_size);
    info!("Spawning {} floor tiles", centres.len());

    for centre in centres {
        let shade = FLOOR_SHADES[arena::pick_floor_variant(&mut rng)];
        commands.spawn((
            FloorTile,
            Sprite::from_color(shade, size),
            Transform::from_translation(centre.extend(-1.0)),
        ));
    }
}

/// Player bundle for `slot`: actor at its spawn point with its own key set.
pub fn player_bundle(slot: PlayerSlot, tuning: &Tuning) -> impl Bundle + use<> {
    let spawn = slot.spawn_point(tuning.screen_width as f32, tuning.screen_height as f32);
    (
        slot,
        slot.scheme(),
        Intent::default(),
        Actor::new(spawn, tuning.speed(), tuning.health()),
        Sprite::from_color(slot.color(), Vec2::splat(tuning.player_size)),
        Transform::from_translation(spawn.extend(1.0)),
    )
}

fn spawn_players(mut commands: Commands, tuning: Res<Tuning>) {
    for slot in PlayerSlot::BOTH {
        commands.spawn(player_bundle(slot, &tuning));
        info!("{} spawned", slot.label());
    }
}

// ── Playing phase systems ───────────────────────────────────────────

/// Transition to GameOver when any actor's health reaches 0.
pub fn check_game_over(
    query: Query<(&Actor, &PlayerSlot)>,
    mut next_state: ResMut<NextState<GamePhase>>,
) {
    for (actor, slot) in &query {
        if !actor.is_alive() {
            info!("{} is down, game over", slot.label());
            next_state.set(GamePhase::GameOver);
            return;
        }
    }
}

// ── Always-on ───────────────────────────────────────────────────────

/// Restart with R: players rebuilt at spawn from the current tuning, score reset.
pub fn restart_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    tuning: Res<Tuning>,
    mut score: ResMut<Score>,
    mut next_state: ResMut<NextState<GamePhase>>,
    mut query: Query<(&PlayerSlot, &mut Actor, &mut Intent, &mut Transform)>,
) {
    if !keyboard.just_pressed(KeyCode::KeyR) {
        return;
    }
    for (slot, mut actor, mut intent, mut transform) in &mut query {
        let spawn = slot.spawn_point(tuning.screen_width as f32, tuning.screen_height as f32);
        *actor = Actor::new(spawn, tuning.speed(), tuning.health());
        intent.clear();
        transform.translation.x = spawn.x;
        transform.translation.y = spawn.y;
    }
    *score = Score::default();
    next_state.set(GamePhase::Playing);
    info!("Game restarted");
}

/// Reload tuning with F5. Speed and max health reach the players on the next restart.
fn tuning_reload_input(keyboard: Res<ButtonInput<KeyCode>>, mut tuning: ResMut<Tuning>) {
    if keyboard.just_pressed(KeyCode::F5) {
        tuning.reload();
    }
}

/// Push `dt` into the fixed clock whenever tuning changes.
pub fn apply_tuning_timestep(tuning: Res<Tuning>, mut fixed: ResMut<Time<Fixed>>) {
    let step = f64::from(tuning.dt);
    if step > 0.0 && (fixed.timestep().as_secs_f64() - step).abs() > f64::EPSILON {
        fixed.set_timestep_seconds(step);
        info!("Fixed timestep set to {:.4}s", step);
    }
}
