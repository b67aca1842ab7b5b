//! Simulation-owned коллекции уровня: враги и твёрдые препятствия
//!
//! Передаются в системы явно как Resources, никаких глобальных lookup'ов по сцене.

use bevy::prelude::*;
use crate::shared::Aabb;

/// Враги уровня в порядке спавна
///
/// Порядок значим: projectile игрока бьёт ПЕРВОГО пересечённого врага в этом порядке.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct EnemyRoster {
    enemies: Vec<Entity>,
}

impl EnemyRoster {
    pub fn new(enemies: Vec<Entity>) -> Self {
        Self { enemies }
    }

    pub fn push(&mut self, enemy: Entity) {
        self.enemies.push(enemy);
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.enemies.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn contains(&self, enemy: Entity) -> bool {
        self.enemies.contains(&enemy)
    }

    pub fn retain(&mut self, keep: impl FnMut(&Entity) -> bool) {
        self.enemies.retain(keep);
    }

    pub fn clear(&mut self) {
        self.enemies.clear();
    }
}

/// Твёрдые препятствия (стены уровня)
///
/// Один набор для line-of-sight и для коллизий projectiles.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct SolidObstacles {
    obstacles: Vec<Aabb>,
}

impl SolidObstacles {
    pub fn new(obstacles: Vec<Aabb>) -> Self {
        Self { obstacles }
    }

    pub fn as_slice(&self) -> &[Aabb] {
        &self.obstacles
    }

    pub fn push(&mut self, obstacle: Aabb) {
        self.obstacles.push(obstacle);
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}
