use bevy::prelude::*;

use super::input::ControlScheme;

// ── Marker components ───────────────────────────────────────────────

/// Which of the two local players an actor belongs to.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub const BOTH: [PlayerSlot; 2] = [PlayerSlot::One, PlayerSlot::Two];

    pub fn scheme(self) -> ControlScheme {
        match self {
            Self::One => ControlScheme::Wasd,
            Self::Two => ControlScheme::Arrows,
        }
    }

    /// Spawn point in window coordinates (origin bottom-left).
    pub fn spawn_point(self, width: f32, height: f32) -> Vec2 {
        match self {
            Self::One => Vec2::new(width / 4.0, height / 2.0),
            Self::Two => Vec2::new(3.0 * width / 4.0, height / 2.0),
        }
    }

    pub fn color(self) -> Color {
        match self {
            Self::One => Color::srgb(0.3, 0.8, 0.35),
            Self::Two => Color::srgb(0.9, 0.25, 0.25),
        }
    }

    pub fn label(self) -> String {
        let n = match self {
            Self::One => 1,
            Self::Two => 2,
        };
        format!("Player {n} ({})", self.scheme().label())
    }
}

/// Marker for background floor tiles.
#[derive(Component)]
pub struct FloorTile;

// ── Game phase state ────────────────────────────────────────────────

#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Playing,
    GameOver,
}

/// Session score shown in the HUD.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score(pub u32);
