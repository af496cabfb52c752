use bevy::prelude::*;

use super::stats::types::Direction;

/// Input intent: written in Update, consumed in FixedUpdate.
///
/// Each flag is independent; opposing flags may be set together and cancel
/// out on their axis.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intent {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Intent {
    /// Record whether `direction` is currently requested. Idempotent.
    pub fn set(&mut self, direction: Direction, active: bool) {
        match direction {
            Direction::Left => self.left = active,
            Direction::Right => self.right = active,
            Direction::Up => self.up = active,
            Direction::Down => self.down = active,
        }
    }

    pub fn is_set(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Per-tick velocity for these flags at `speed`. Up is +y.
    pub fn velocity(&self, speed: f32) -> Vec2 {
        Vec2::new(
            axis(self.right, self.left, speed),
            axis(self.up, self.down, speed),
        )
    }
}

fn axis(positive: bool, negative: bool, speed: f32) -> f32 {
    match (positive, negative) {
        (true, false) => speed,
        (false, true) => -speed,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_is_idempotent() {
        let mut intent = Intent::default();
        intent.set(Direction::Up, true);
        intent.set(Direction::Up, true);
        assert!(intent.is_set(Direction::Up));
        intent.set(Direction::Up, false);
        assert_eq!(intent, Intent::default());
    }

    #[test]
    fn opposing_flags_cancel() {
        let intent = Intent {
            left: true,
            right: true,
            up: true,
            down: true,
        };
        assert_eq!(intent.velocity(5.0), Vec2::ZERO);
    }

    #[test]
    fn diagonal_is_not_normalized() {
        let intent = Intent {
            right: true,
            up: true,
            ..default()
        };
        assert_eq!(intent.velocity(5.0), Vec2::new(5.0, 5.0));
    }
}
