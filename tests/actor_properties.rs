use bevy::math::Vec2;
use dungeon_adventure::{Actor, ActorError, Health, Intent, Speed};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    Damage(i32),
    Heal(i32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..=250i32).prop_map(Op::Damage),
        (0..=250i32).prop_map(Op::Heal),
    ]
}

fn new_actor(speed: f32, max_health: u32) -> Actor {
    Actor::new(
        Vec2::ZERO,
        Speed::new(speed).expect("positive speed"),
        Health::full(max_health).expect("positive max health"),
    )
}

fn expected_axis(positive: bool, negative: bool, speed: f32) -> f32 {
    if positive && !negative {
        speed
    } else if negative && !positive {
        -speed
    } else {
        0.0
    }
}

proptest! {
    #[test]
    fn health_stays_in_bounds(max in 1u32..=500, ops in prop::collection::vec(op(), 0..64)) {
        let mut actor = new_actor(5.0, max);
        for op in ops {
            let hp = match op {
                Op::Damage(n) => actor.apply_damage(n),
                Op::Heal(n) => actor.apply_heal(n),
            }
            .expect("non-negative amounts are accepted");
            prop_assert!(hp <= actor.max_health());
            prop_assert_eq!(hp, actor.health());
            prop_assert_eq!(actor.is_alive(), hp > 0);
        }
    }

    #[test]
    fn negative_amounts_never_change_health(damage in 0..=100i32, bad in i32::MIN..0) {
        let mut actor = new_actor(5.0, 100);
        actor.apply_damage(damage).expect("valid damage");
        let before = actor.health();
        prop_assert!(
            matches!(
                actor.apply_damage(bad),
                Err(ActorError::InvalidArgument { operation: "damage", .. })
            ),
            "negative damage should be rejected"
        );
        prop_assert!(
            matches!(
                actor.apply_heal(bad),
                Err(ActorError::InvalidArgument { operation: "heal", .. })
            ),
            "negative heal should be rejected"
        );
        prop_assert_eq!(actor.health(), before);
    }

    #[test]
    fn velocity_follows_intent_flags(
        left in any::<bool>(),
        right in any::<bool>(),
        up in any::<bool>(),
        down in any::<bool>(),
        speed in 0.5f32..50.0,
    ) {
        let mut actor = new_actor(speed, 100);
        let intent = Intent { left, right, up, down };
        actor.tick(&intent);
        let first = actor.velocity();
        prop_assert_eq!(first.x, expected_axis(right, left, speed));
        prop_assert_eq!(first.y, expected_axis(up, down, speed));

        actor.tick(&intent);
        prop_assert_eq!(actor.velocity(), first);
    }
}

#[test]
fn left_and_right_cancel_then_left_wins() {
    let mut actor = new_actor(5.0, 100);
    actor.tick(&Intent {
        left: true,
        right: true,
        ..Intent::default()
    });
    assert_eq!(actor.velocity().x, 0.0);

    actor.tick(&Intent {
        left: true,
        right: false,
        ..Intent::default()
    });
    assert_eq!(actor.velocity().x, -5.0);
}
