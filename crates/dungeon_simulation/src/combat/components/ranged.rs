//! Ranged weapon — выстрел projectile в точку
//!
//! Architecture:
//! - Оружие не знает про сцену: projectile кладётся в явно переданный sink
//! - Charged shot: урон интерполируется по времени зарядки (press → release)

use bevy::prelude::*;
use crate::combat::components::{ActiveProjectiles, Cooldown, Projectile, Wielder};

/// Минимальная длина вектора прицеливания (защита от деления на 0)
pub const MIN_AIM_DISTANCE: f32 = 1.0;

/// Зарядка выстрела (hold-to-charge)
///
/// Инвариант: charged_for растёт только пока charging == true,
/// сбрасывается в 0 при release (даже если выстрел не случился).
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct ChargeShot {
    pub min_damage: f32,
    pub max_damage: f32,
    /// Время до полной зарядки (секунды)
    pub max_charge_duration: f32,
    pub charging: bool,
    pub charged_for: f32,
}

impl ChargeShot {
    pub fn new(min_damage: f32, max_damage: f32, max_charge_duration: f32) -> Self {
        Self {
            min_damage,
            max_damage,
            max_charge_duration,
            charging: false,
            charged_for: 0.0,
        }
    }

    /// Доля зарядки [0, 1]
    pub fn ratio(&self) -> f32 {
        if self.max_charge_duration <= 0.0 {
            return 1.0;
        }
        (self.charged_for / self.max_charge_duration).min(1.0)
    }

    /// min + (max - min) * ratio
    pub fn damage(&self) -> f32 {
        self.min_damage + (self.max_damage - self.min_damage) * self.ratio()
    }

    fn tick(&mut self, delta_time: f32) {
        if self.charging {
            self.charged_for += delta_time;
        }
    }

    fn reset(&mut self) {
        self.charging = false;
        self.charged_for = 0.0;
    }
}

/// Ranged оружие (лук игрока, лук лучника)
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct RangedWeapon {
    /// Урон обычного выстрела
    pub damage: f32,

    /// Скорость projectile (units per 1/60 sec)
    pub projectile_speed: f32,

    pub cooldown: Cooldown,

    /// Charged shot (None = оружие не заряжается)
    pub charge: Option<ChargeShot>,
}

impl Default for RangedWeapon {
    fn default() -> Self {
        Self::new(10.0, 10.0, 0.8)
    }
}

impl RangedWeapon {
    pub fn new(damage: f32, projectile_speed: f32, cooldown_secs: f32) -> Self {
        Self {
            damage,
            projectile_speed,
            cooldown: Cooldown::new(cooldown_secs),
            charge: None,
        }
    }

    pub fn with_charge(mut self, charge: ChargeShot) -> Self {
        self.charge = Some(charge);
        self
    }

    /// Лук игрока (с зарядкой)
    pub fn player_bow() -> Self {
        Self::new(12.0, 10.0, 0.65).with_charge(ChargeShot::new(12.0, 36.0, 1.2))
    }

    /// Лук лучника
    pub fn archer_bow() -> Self {
        Self::new(9.0, 9.0, 1.3)
    }

    /// Обычный выстрел в точку `target`
    ///
    /// Returns false (projectile не создан) если на cooldown.
    pub fn attack(
        &mut self,
        wielder: &Wielder,
        target: Vec2,
        now: f64,
        sink: &mut ActiveProjectiles,
    ) -> bool {
        let damage = self.damage;
        self.fire(wielder, target, damage, now, sink)
    }

    /// Начать зарядку (press)
    pub fn begin_charge(&mut self) {
        if let Some(charge) = self.charge.as_mut() {
            charge.charging = true;
        }
    }

    /// Накопить зарядку (каждый тик)
    pub fn tick_charge(&mut self, delta_time: f32) {
        if let Some(charge) = self.charge.as_mut() {
            charge.tick(delta_time);
        }
    }

    pub fn is_charging(&self) -> bool {
        self.charge.is_some_and(|charge| charge.charging)
    }

    /// Доля зарядки для UI charge bar (0 если оружие не заряжается)
    pub fn charge_ratio(&self) -> f32 {
        self.charge.map_or(0.0, |charge| charge.ratio())
    }

    /// Отпустить зарядку (release): выстрел с заряженным уроном
    ///
    /// Зарядка сбрасывается в любом случае, даже если выстрел на cooldown.
    pub fn release_charge(
        &mut self,
        wielder: &Wielder,
        target: Vec2,
        now: f64,
        sink: &mut ActiveProjectiles,
    ) -> bool {
        let Some(charge) = self.charge.as_mut() else {
            return false;
        };
        if !charge.charging {
            return false;
        }

        let damage = charge.damage();
        charge.reset();

        self.fire(wielder, target, damage, now, sink)
    }

    fn fire(
        &mut self,
        wielder: &Wielder,
        target: Vec2,
        damage: f32,
        now: f64,
        sink: &mut ActiveProjectiles,
    ) -> bool {
        if !self.cooldown.can_attack(now) {
            return false;
        }

        let offset = target - wielder.position;
        let distance = offset.length().max(MIN_AIM_DISTANCE);
        let direction = offset / distance;

        sink.push(Projectile::new(
            wielder.position,
            direction * self.projectile_speed,
            damage,
            wielder.entity,
            wielder.team,
        ));

        self.cooldown.record_attack(now);
        true
    }
}
