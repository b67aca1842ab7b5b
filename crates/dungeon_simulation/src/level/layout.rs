//! LevelLayout — данные уровня (serde), процедурная арена

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};
use crate::ai::EnemyKind;
use crate::shared::Aabb;

/// Высота пола арены (верхний край)
pub const FLOOR_TOP: f32 = 200.0;

/// Ширина арены
pub const ARENA_WIDTH: f32 = 1600.0;

/// Высота центра персонажей над полом при спавне
pub const SPAWN_HEIGHT: f32 = 256.0;

/// Точка спавна врага
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub kind: EnemyKind,
    pub position: Vec2,
}

/// Содержимое уровня: точки спавна + твёрдые препятствия
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    pub player_spawn: Vec2,
    /// Порядок = порядок спавна = порядок `EnemyRoster`
    pub enemies: Vec<EnemySpawn>,
    pub obstacles: Vec<Aabb>,
}

impl Default for LevelLayout {
    fn default() -> Self {
        Self {
            player_spawn: Vec2::new(128.0, SPAWN_HEIGHT),
            enemies: vec![
                EnemySpawn {
                    kind: EnemyKind::Melee,
                    position: Vec2::new(600.0, SPAWN_HEIGHT),
                },
                EnemySpawn {
                    kind: EnemyKind::Archer,
                    position: Vec2::new(900.0, SPAWN_HEIGHT),
                },
            ],
            obstacles: vec![floor()],
        }
    }
}

fn floor() -> Aabb {
    Aabb::from_corner_size(Vec2::ZERO, Vec2::new(ARENA_WIDTH, FLOOR_TOP))
}

impl LevelLayout {
    /// Процедурная арена: пол, несколько колонн, `enemy_count` врагов справа от игрока
    ///
    /// Одинаковый seed RNG → одинаковый layout.
    pub fn generate(rng: &mut impl Rng, enemy_count: usize) -> Self {
        let mut obstacles = vec![floor()];

        let pillar_count = rng.gen_range(1..=3);
        for _ in 0..pillar_count {
            let x = rng.gen_range(350.0..ARENA_WIDTH - 100.0);
            let height = rng.gen_range(40.0..160.0);
            obstacles.push(Aabb::from_corner_size(
                Vec2::new(x, FLOOR_TOP),
                Vec2::new(32.0, height),
            ));
        }

        let enemies = (0..enemy_count)
            .map(|_| EnemySpawn {
                kind: if rng.gen_bool(0.5) {
                    EnemyKind::Melee
                } else {
                    EnemyKind::Archer
                },
                position: Vec2::new(rng.gen_range(300.0..ARENA_WIDTH - 50.0), SPAWN_HEIGHT),
            })
            .collect();

        Self {
            player_spawn: Vec2::new(128.0, SPAWN_HEIGHT),
            enemies,
            obstacles,
        }
    }
}
