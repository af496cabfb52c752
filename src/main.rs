use bevy::prelude::*;

use dungeon_adventure::config::tuning::Tuning;
use dungeon_adventure::plugins::{game_plugin::GamePlugin, ui_plugin::UiPlugin};

fn main() {
    let tuning = Tuning::load_or_default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: tuning.window_title.clone(),
                resolution: (tuning.screen_width, tuning.screen_height).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.18, 0.31, 0.31)))
        .insert_resource(Time::<Fixed>::from_seconds(tuning.dt as f64))
        .insert_resource(tuning)
        .add_plugins(GamePlugin)
        .add_plugins(UiPlugin)
        .run();
}
