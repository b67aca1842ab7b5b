//! Simulation clock — единый источник времени для cooldowns, regen, charge
//!
//! Время = накопленный deltaTime (не wall-clock): одинаковые входы → одинаковые тики.
//! elapsed хранится в f64 (как `Time::elapsed_secs_f64`): f32 перестаёт расти через ~6 суток по 1/60.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct SimClock {
    /// Время начала текущего тика (секунды симуляции)
    elapsed: f64,
    /// deltaTime текущего тика
    delta: f32,
    /// Номер тика (0 = первый)
    tick: u64,
}

impl SimClock {
    /// "now" для cooldown gate во время тика
    pub fn now(&self) -> f64 {
        self.elapsed
    }

    /// Часы, продолжающие уже идущую симуляцию (restore из save)
    pub fn resumed_at(elapsed: f64) -> Self {
        Self {
            elapsed: elapsed.max(0.0),
            ..Default::default()
        }
    }

    pub fn delta(&self) -> f32 {
        self.delta
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Начать тик с указанным deltaTime
    pub(crate) fn begin_tick(&mut self, delta: f32) {
        self.delta = delta.max(0.0);
    }

    /// Завершить тик: elapsed += delta
    pub(crate) fn end_tick(&mut self) {
        self.elapsed += f64::from(self.delta);
        self.tick += 1;
    }
}
