//! Melee weapon — мгновенный hit volume перед владельцем
//!
//! Два канала урона используют один компонент:
//! - swing (`attack`): игрок нажал удар → hit volume → урон всем пересечённым
//! - contact (`try_contact`): враг касается игрока → урон по cooldown каждый тик

use bevy::prelude::*;
use crate::combat::components::{Cooldown, Wielder};
use crate::components::Damageable;
use crate::shared::Aabb;

/// Фиксированный отступ hit volume от центра владельца (кроме половины ширины)
pub const MELEE_REACH_OFFSET: f32 = 15.0;

/// Результат попадания swing'а по одной цели
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeleeHit {
    pub target: Entity,
    /// Этот удар убил цель
    pub killed: bool,
}

/// Melee оружие (меч игрока, клинок врага)
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct MeleeWeapon {
    /// Урон за попадание
    pub damage: f32,

    /// Размер hit volume (width, height)
    pub hit_size: Vec2,

    /// Отступ hit volume в направлении удара
    pub reach_offset: f32,

    pub cooldown: Cooldown,
}

impl Default for MeleeWeapon {
    fn default() -> Self {
        Self::new(20.0, Vec2::new(50.0, 35.0), 0.6)
    }
}

impl MeleeWeapon {
    pub fn new(damage: f32, hit_size: Vec2, cooldown_secs: f32) -> Self {
        Self {
            damage,
            hit_size,
            reach_offset: MELEE_REACH_OFFSET,
            cooldown: Cooldown::new(cooldown_secs),
        }
    }

    /// Меч игрока
    pub fn player_sword() -> Self {
        Self::new(25.0, Vec2::new(50.0, 35.0), 0.55)
    }

    /// Клинок melee врага (контактный урон)
    pub fn enemy_blade() -> Self {
        Self::new(18.0, Vec2::new(50.0, 40.0), 1.0)
    }

    /// Hit volume: центр = position + direction * (width/2 + offset), по вертикали — центр владельца
    pub fn hit_volume(&self, wielder: &Wielder) -> Aabb {
        let direction = wielder.attack_direction();
        let center = Vec2::new(
            wielder.position.x + direction * (self.hit_size.x * 0.5 + self.reach_offset),
            wielder.position.y,
        );
        Aabb::from_center_size(center, self.hit_size)
    }

    /// Swing по набору кандидатов
    ///
    /// Returns:
    /// - `None` — на cooldown, swing не выполнен
    /// - `Some(hits)` — swing выполнен (timestamp записан даже при промахе)
    ///
    /// Урон получают ВСЕ живые пересечённые цели (нет single-target cap).
    pub fn attack<'a, T, I>(&mut self, wielder: &Wielder, targets: I, now: f64) -> Option<Vec<MeleeHit>>
    where
        T: Damageable + 'a,
        I: IntoIterator<Item = (Entity, Aabb, &'a mut T)>,
    {
        if !self.cooldown.can_attack(now) {
            return None;
        }

        let volume = self.hit_volume(wielder);
        let mut hits = Vec::new();

        for (target, bounds, health) in targets {
            if target == wielder.entity || !health.is_alive() {
                continue;
            }
            if !volume.overlaps(&bounds) {
                continue;
            }

            let killed = health.take_damage(self.damage);
            hits.push(MeleeHit { target, killed });
        }

        self.cooldown.record_attack(now);
        Some(hits)
    }

    /// Контактный урон: Some(damage) если cooldown готов (timestamp записывается)
    pub fn try_contact(&mut self, now: f64) -> Option<f32> {
        if !self.cooldown.can_attack(now) {
            return None;
        }
        self.cooldown.record_attack(now);
        Some(self.damage)
    }
}
