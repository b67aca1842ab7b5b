//! Wielder — снимок владельца оружия на момент атаки

use bevy::prelude::*;
use crate::components::Facing;

/// Сторона конфликта (для projectile friendly-fire и выбора целей)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum Team {
    Player,
    Enemy,
}

/// Кто атакует: identity + позиция/скорость/facing на этот тик
///
/// Оружие не владеет персонажем — получает снимок при каждом вызове.
#[derive(Debug, Clone, Copy)]
pub struct Wielder {
    pub entity: Entity,
    pub team: Team,
    pub position: Vec2,
    pub velocity: Vec2,
    pub facing: Facing,
}

impl Wielder {
    /// Направление удара: знак горизонтальной скорости, fallback на facing
    pub fn attack_direction(&self) -> f32 {
        Facing::from_direction(self.velocity.x)
            .unwrap_or(self.facing)
            .sign()
    }
}
