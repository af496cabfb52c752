use serde::{Deserialize, Serialize};

// ── Newtypes ────────────────────────────────────────────────────────

/// Hit points. `current` is always clamped to [0, max] and `max` is > 0.
///
/// Not `Deserialize`; construct through [`Health::full`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    current: u32,
    max: u32,
}

impl Health {
    pub const DEFAULT: Health = Health {
        current: 100,
        max: 100,
    };

    /// Full health, or `None` for a zero `max`.
    pub fn full(max: u32) -> Option<Self> {
        (max > 0).then_some(Self { current: max, max })
    }

    pub fn refilled(self) -> Self {
        Self {
            current: self.max,
            ..self
        }
    }

    pub fn current(self) -> u32 {
        self.current
    }

    pub fn max(self) -> u32 {
        self.max
    }

    /// Saturates at 0.
    pub fn sub_clamped(self, amount: u32) -> Self {
        Self {
            current: self.current.saturating_sub(amount),
            ..self
        }
    }

    /// Saturates at `max`.
    pub fn add_clamped(self, amount: u32) -> Self {
        Self {
            current: self.current.saturating_add(amount).min(self.max),
            ..self
        }
    }

    pub fn is_alive(self) -> bool {
        self.current > 0
    }
}

/// Per-tick displacement magnitude. Always finite and > 0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Speed(f32);

impl Speed {
    pub const DEFAULT: Speed = Speed(5.0);

    pub fn new(v: f32) -> Option<Self> {
        (v.is_finite() && v > 0.0).then_some(Self(v))
    }

    pub const fn get(self) -> f32 {
        self.0
    }
}

/// Discrete tick counter (u64, wrapping).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Tick(pub u64);

impl Tick {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

// ── Enums ───────────────────────────────────────────────────────────

/// Movement direction an actor can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full(max: u32) -> Health {
        Health::full(max).expect("positive max health")
    }

    #[test]
    fn full_health_starts_at_max() {
        let hp = full(100);
        assert_eq!(hp.current(), 100);
        assert_eq!(hp.max(), 100);
        assert!(hp.is_alive());
        assert_eq!(hp, Health::DEFAULT);
    }

    #[test]
    fn zero_max_is_rejected() {
        assert_eq!(Health::full(0), None);
    }

    #[test]
    fn sub_saturates_at_zero() {
        let hp = full(10).sub_clamped(u32::MAX);
        assert_eq!(hp.current(), 0);
        assert!(!hp.is_alive());
    }

    #[test]
    fn add_saturates_at_max() {
        let hp = full(10).sub_clamped(5).add_clamped(u32::MAX);
        assert_eq!(hp.current(), 10);
    }

    #[test]
    fn speed_rejects_non_positive() {
        assert!(Speed::new(0.0).is_none());
        assert!(Speed::new(-1.0).is_none());
        assert!(Speed::new(f32::NAN).is_none());
        assert_eq!(Speed::new(f32::INFINITY), None);
        assert_eq!(Speed::new(5.0).map(Speed::get), Some(5.0));
        assert_eq!(Speed::new(5.0), Some(Speed::DEFAULT));
    }
}
