//! Spawn helpers + load/reset уровня (exclusive systems над `World`)

use bevy::prelude::*;
use crate::ai::{AIConfig, EnemyKind};
use crate::combat::{ActiveProjectiles, MeleeWeapon, RangedWeapon};
use crate::components::{
    Character, Damageable, EnemyRoster, Health, Player, Regeneration, SolidObstacles,
};
use crate::level::{LevelLayout, LevelReset, LevelState};
use crate::player::PlayerInput;

pub const PLAYER_MAX_HEALTH: f32 = 100.0;
pub const MELEE_ENEMY_HEALTH: f32 = 60.0;
pub const ARCHER_HEALTH: f32 = 40.0;

/// Marker: entity принадлежит уровню и удаляется при reset
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct LevelEntity;

/// Spawn игрока: меч, лук с зарядкой, регенерация
pub fn spawn_player(world: &mut World, position: Vec2) -> Entity {
    world
        .spawn((
            Player,
            LevelEntity,
            Transform::from_translation(position.extend(0.0)),
            Health::new(PLAYER_MAX_HEALTH),
            MeleeWeapon::player_sword(),
            RangedWeapon::player_bow(),
            Regeneration::default(),
        ))
        .id()
}

/// Spawn врага + регистрация в `EnemyRoster` (порядок спавна = порядок roster)
pub fn spawn_enemy(world: &mut World, kind: EnemyKind, position: Vec2) -> Entity {
    let mut enemy = world.spawn((
        Character,
        LevelEntity,
        Transform::from_translation(position.extend(0.0)),
        AIConfig::for_kind(kind),
    ));

    match kind {
        EnemyKind::Melee => {
            enemy.insert((Health::new(MELEE_ENEMY_HEALTH), MeleeWeapon::enemy_blade()));
        }
        EnemyKind::Archer => {
            enemy.insert((Health::new(ARCHER_HEALTH), RangedWeapon::archer_bow()));
        }
    }

    let id = enemy.id();
    world.resource_mut::<EnemyRoster>().push(id);
    id
}

/// Полная (пере)инициализация уровня из `LevelLayout`
///
/// Удаляет все `LevelEntity`, projectiles, roster; ставит препятствия и спавнит заново.
pub fn load_level(world: &mut World) {
    let layout = world.get_resource::<LevelLayout>().cloned().unwrap_or_default();

    let stale: Vec<Entity> = world
        .query_filtered::<Entity, With<LevelEntity>>()
        .iter(world)
        .collect();
    for entity in stale {
        world.despawn(entity);
    }

    world.init_resource::<EnemyRoster>();
    world.init_resource::<ActiveProjectiles>();
    world.resource_mut::<EnemyRoster>().clear();
    world.resource_mut::<ActiveProjectiles>().clear();
    world.insert_resource(SolidObstacles::new(layout.obstacles.clone()));
    if let Some(mut input) = world.get_resource_mut::<PlayerInput>() {
        *input = PlayerInput::default();
    }

    spawn_player(world, layout.player_spawn);
    for spawn in &layout.enemies {
        spawn_enemy(world, spawn.kind, spawn.position);
    }

    crate::logger::log_info(&format!(
        "🗺️ Level loaded: {} enemies, {} obstacles",
        layout.enemies.len(),
        layout.obstacles.len()
    ));
}

/// System: смерть игрока → полный reset уровня + `LevelReset`
pub fn reset_level_on_player_death(world: &mut World) {
    let player_dead = world
        .query_filtered::<&Health, With<Player>>()
        .iter(world)
        .any(|health| !health.is_alive());

    if !player_dead {
        return;
    }

    let reset_count = {
        let mut state = world.get_resource_or_insert_with(LevelState::default);
        state.resets += 1;
        state.resets
    };

    crate::logger::log_warning(&format!("💀 Player died, resetting level (#{})", reset_count));

    load_level(world);
    world.send_event(LevelReset { reset_count });
}
