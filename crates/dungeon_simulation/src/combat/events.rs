//! Combat events — уведомления для рендер/аудио/UI слоя

use bevy::prelude::*;
use crate::combat::components::Team;

/// Канал урона
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum DamageSource {
    /// Swing melee оружия (hit volume)
    Melee,
    /// Projectile
    Ranged,
    /// Непрерывный контакт с melee врагом
    Contact,
}

/// Событие: урон нанесен
///
/// Генерируется после применения damage к Health.
/// Используется для UI, звуков, эффектов.
#[derive(Event, Debug, Clone)]
pub struct DamageDealt {
    pub attacker: Entity,
    pub target: Entity,
    pub damage: f32,
    pub source: DamageSource,
    pub target_died: bool,
}

/// Событие: entity умер (health <= 0)
#[derive(Event, Debug, Clone)]
pub struct EntityDied {
    pub entity: Entity,
    pub killer: Option<Entity>,
}

/// Событие: projectile выпущен (для звука/анимации выстрела)
#[derive(Event, Debug, Clone)]
pub struct ProjectileFired {
    pub shooter: Entity,
    pub team: Team,
    pub damage: f32,
    pub origin: Vec2,
}
