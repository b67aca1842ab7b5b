//! Cooldown gate — общий для всех оружий
//!
//! Время — только simulation clock (накопленный deltaTime), не wall-clock.

use bevy::prelude::*;

/// Cooldown между атаками
///
/// Инвариант: атака разрешена если `now - last_attack >= duration`.
/// До первой атаки (`last_attack == None`) — всегда разрешена.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct Cooldown {
    /// Минимальный интервал между атаками (секунды), 0 = каждый тик
    pub duration: f32,

    /// Simulation time последней успешной атаки
    pub last_attack: Option<f64>,
}

impl Cooldown {
    pub fn new(duration: f32) -> Self {
        Self {
            duration: duration.max(0.0),
            last_attack: None,
        }
    }

    pub fn can_attack(&self, now: f64) -> bool {
        match self.last_attack {
            Some(last) => now - last >= f64::from(self.duration),
            None => true,
        }
    }

    pub fn record_attack(&mut self, now: f64) {
        self.last_attack = Some(now);
    }

    /// Оставшееся время до готовности (0 если готов)
    pub fn remaining(&self, now: f64) -> f32 {
        match self.last_attack {
            Some(last) => (self.duration - (now - last) as f32).max(0.0),
            None => 0.0,
        }
    }

    pub fn reset(&mut self) {
        self.last_attack = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_attack_always_allowed() {
        let cooldown = Cooldown::new(5.0);
        assert!(cooldown.can_attack(0.0));
        assert_eq!(cooldown.remaining(0.0), 0.0);
    }

    #[test]
    fn test_cooldown_epsilon_boundaries() {
        let eps = 0.01;
        let mut cooldown = Cooldown::new(0.65);

        assert!(cooldown.can_attack(0.0));
        cooldown.record_attack(0.0);
        assert!(!cooldown.can_attack(0.65 - eps));
        assert!(cooldown.can_attack(0.65 + eps));
    }

    #[test]
    fn test_zero_cooldown_every_tick() {
        let mut cooldown = Cooldown::new(0.0);
        cooldown.record_attack(1.0);
        assert!(cooldown.can_attack(1.0));
    }

    #[test]
    fn test_remaining() {
        let mut cooldown = Cooldown::new(1.0);
        cooldown.record_attack(2.0);
        assert_eq!(cooldown.remaining(2.25), 0.75);
        assert_eq!(cooldown.remaining(5.0), 0.0);

        cooldown.reset();
        assert!(cooldown.can_attack(2.1));
    }
}
