//! Dungeon platformer — combat simulation core
//!
//! ECS-симуляция на Bevy 0.16 (headless, без рендера)
//!
//! Разделение ответственности:
//! - ECS = game state, AI, combat rules (этот crate)
//! - Хост = окно, tilemap, platformer physics, рендер, аудио, UI
//!
//! Хост пишет `PlayerInput` / `PlatformerBody`, вызывает `step` раз в кадр
//! (или использует `SimulationPlugin` с FixedUpdate) и читает state + events.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

// Публичные модули
pub mod ai;
pub mod combat;
pub mod components;
pub mod level;
pub mod logger;
pub mod physics;
pub mod player;
pub mod shared;

// Re-export базовых типов для удобства
pub use ai::{AIConfig, AIPlugin, AIState, EnemyKind};
pub use combat::{
    run_fixed_tick, step, ActiveProjectiles, CombatPlugin, CombatTick, DamageDealt, DamageSource,
    EntityDied, MeleeWeapon, Projectile, ProjectileFired, RangedWeapon, SimClock, Team, TickSet,
};
pub use components::*;
pub use level::{load_level, LevelLayout, LevelPlugin, LevelReset};
pub use logger::init_logger;
pub use physics::MotionPlugin;
pub use player::{PlayerInput, PlayerPlugin};

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Fixed timestep 60Hz для real-time хостинга
        app.insert_resource(Time::<Fixed>::from_hz(60.0));

        // Детерминистичный RNG (seed по умолчанию, если хост не задал свой)
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        // Подсистемы
        app.add_plugins((CombatPlugin, AIPlugin, PlayerPlugin, MotionPlugin, LevelPlugin));

        app.add_systems(FixedUpdate, run_fixed_tick);
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(60.0)); // 60Hz FixedUpdate

    app
}

#[derive(Serialize)]
struct CharacterSnapshot {
    index: u32,
    health: f32,
    position: [f32; 2],
}

#[derive(Serialize)]
struct ProjectileSnapshot {
    position: [f32; 2],
    damage: f32,
    remaining_lifetime: f32,
}

#[derive(Serialize)]
struct WorldSnapshot {
    tick: u64,
    characters: Vec<CharacterSnapshot>,
    projectiles: Vec<ProjectileSnapshot>,
}

/// Snapshot мира для сравнения детерминизма (bincode)
///
/// Персонажи отсортированы по Entity index, projectiles — в порядке коллекции.
pub fn world_snapshot(world: &mut World) -> Result<Vec<u8>, bincode::error::EncodeError> {
    let mut characters: Vec<CharacterSnapshot> = world
        .query_filtered::<(Entity, &Health, &Transform), With<Character>>()
        .iter(world)
        .map(|(entity, health, transform)| CharacterSnapshot {
            index: entity.index(),
            health: health.current,
            position: shared::planar(transform).to_array(),
        })
        .collect();

    // Сортируем по Entity ID для детерминизма
    characters.sort_by_key(|character| character.index);

    let projectiles = world
        .get_resource::<ActiveProjectiles>()
        .map(|projectiles| {
            projectiles
                .iter()
                .map(|projectile| ProjectileSnapshot {
                    position: projectile.position.to_array(),
                    damage: projectile.damage,
                    remaining_lifetime: projectile.remaining_lifetime,
                })
                .collect()
        })
        .unwrap_or_default();

    let snapshot = WorldSnapshot {
        tick: world.get_resource::<SimClock>().map_or(0, |clock| clock.tick()),
        characters,
        projectiles,
    };

    let bytes = bincode::serde::encode_to_vec(&snapshot, bincode::config::standard())?;
    Ok(bytes)
}
