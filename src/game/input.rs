use bevy::prelude::*;

use super::intent::Intent;
use super::stats::types::Direction;

/// Key set bound to one actor.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlScheme {
    /// A/D/W/S
    Wasd,
    /// ←/→/↑/↓
    Arrows,
}

impl ControlScheme {
    pub fn key_for(self, direction: Direction) -> KeyCode {
        match (self, direction) {
            (Self::Wasd, Direction::Left) => KeyCode::KeyA,
            (Self::Wasd, Direction::Right) => KeyCode::KeyD,
            (Self::Wasd, Direction::Up) => KeyCode::KeyW,
            (Self::Wasd, Direction::Down) => KeyCode::KeyS,
            (Self::Arrows, Direction::Left) => KeyCode::ArrowLeft,
            (Self::Arrows, Direction::Right) => KeyCode::ArrowRight,
            (Self::Arrows, Direction::Up) => KeyCode::ArrowUp,
            (Self::Arrows, Direction::Down) => KeyCode::ArrowDown,
        }
    }

    /// Direction this scheme binds to `key`, if any.
    pub fn direction_for(self, key: KeyCode) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| self.key_for(direction) == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Wasd => "WASD",
            Self::Arrows => "Arrow Keys",
        }
    }

    /// Intent from the keys of this scheme currently held in `keyboard`.
    pub fn read_intent(self, keyboard: &ButtonInput<KeyCode>) -> Intent {
        let mut intent = Intent::default();
        for direction in Direction::ALL {
            intent.set(direction, keyboard.pressed(self.key_for(direction)));
        }
        intent
    }
}

/// Rebuild each actor's intent from its own key set.
pub fn read_intent_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<(&ControlScheme, &mut Intent)>,
) {
    for (scheme, mut intent) in &mut query {
        let next = scheme.read_intent(&keyboard);
        if *intent != next {
            debug!("{} intent -> {:?}", scheme.label(), next);
            *intent = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ControlScheme::Wasd, KeyCode::KeyA, Some(Direction::Left))]
    #[case(ControlScheme::Wasd, KeyCode::KeyS, Some(Direction::Down))]
    #[case(ControlScheme::Wasd, KeyCode::ArrowLeft, None)]
    #[case(ControlScheme::Arrows, KeyCode::ArrowUp, Some(Direction::Up))]
    #[case(ControlScheme::Arrows, KeyCode::KeyD, None)]
    fn maps_keys_to_directions(
        #[case] scheme: ControlScheme,
        #[case] key: KeyCode,
        #[case] expected: Option<Direction>,
    ) {
        assert_eq!(scheme.direction_for(key), expected);
    }

    #[test]
    fn schemes_only_see_their_own_keys() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::KeyA);
        keyboard.press(KeyCode::ArrowRight);

        let wasd = ControlScheme::Wasd.read_intent(&keyboard);
        assert!(wasd.left && !wasd.right && !wasd.up && !wasd.down);

        let arrows = ControlScheme::Arrows.read_intent(&keyboard);
        assert!(arrows.right && !arrows.left && !arrows.up && !arrows.down);
    }

    #[test]
    fn released_key_clears_flag() {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::KeyW);
        assert!(ControlScheme::Wasd.read_intent(&keyboard).up);
        keyboard.release(KeyCode::KeyW);
        assert!(!ControlScheme::Wasd.read_intent(&keyboard).up);
    }
}
