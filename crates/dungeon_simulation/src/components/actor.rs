//! Базовые компоненты персонажей: Character, Health, Facing, Velocity, BodyBounds

use bevy::prelude::*;
use crate::shared::Aabb;

/// Персонаж (игрок или враг) — базовый компонент для живых существ
///
/// Автоматически добавляет Health, Facing, Velocity, BodyBounds, Transform через Required Components.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(Health, Facing, Velocity, BodyBounds, Transform)]
pub struct Character;

/// Capability: может получать урон
///
/// Урон по мёртвой цели — no-op (dead-check до применения).
pub trait Damageable {
    /// Применить урон. Возвращает true если ЭТОТ удар убил цель.
    fn take_damage(&mut self, amount: f32) -> bool;

    fn is_alive(&self) -> bool;
}

/// Здоровье персонажа
///
/// Инвариант: 0 ≤ current ≤ max. Мёртв при current <= 0.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100.0) // Default 100 HP
    }
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    /// Health с произвольным стартовым значением (clamp в [0, max])
    pub fn with_current(max: f32, current: f32) -> Self {
        Self {
            current: current.clamp(0.0, max),
            max,
        }
    }

    /// Доля здоровья [0, 1] для HP-bar
    pub fn fraction(&self) -> f32 {
        if self.max <= 0.0 {
            return 0.0;
        }
        self.current / self.max
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    /// health = min(max, health + rate * delta), только пока жив и не на максимуме
    pub fn regenerate(&mut self, per_second: f32, delta_time: f32) {
        if !self.is_alive() || self.is_full() {
            return;
        }
        self.current = (self.current + per_second * delta_time).min(self.max);
    }
}

impl Damageable for Health {
    fn take_damage(&mut self, amount: f32) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.current = (self.current - amount).clamp(0.0, self.max);
        !self.is_alive()
    }

    fn is_alive(&self) -> bool {
        self.current > 0.0
    }
}

/// Направление взгляда (-1 / +1 по X)
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Component)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    pub fn sign(&self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    /// Facing по знаку скорости/направления; None для нуля
    pub fn from_direction(x: f32) -> Option<Self> {
        if x > 0.0 {
            Some(Facing::Right)
        } else if x < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }

    /// Лицом к цели: вправо только если цель строго правее
    pub fn toward(from_x: f32, to_x: f32) -> Self {
        if to_x > from_x {
            Facing::Right
        } else {
            Facing::Left
        }
    }
}

/// Скорость (units/sec), интегрируется physics шагом
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Reflect)]
#[reflect(Component)]
pub struct Velocity(pub Vec2);

/// Bounding box спрайта персонажа (центрирован на Transform)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct BodyBounds {
    pub size: Vec2,
}

impl Default for BodyBounds {
    fn default() -> Self {
        Self {
            size: Vec2::new(32.0, 48.0),
        }
    }
}

impl BodyBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }

    pub fn at(&self, position: Vec2) -> Aabb {
        Aabb::from_center_size(position, self.size)
    }
}
