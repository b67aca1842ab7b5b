//! Combat system module
//!
//! ECS ответственность:
//! - Game state: Health, weapons, active projectiles
//! - Combat rules: cooldowns, hit volumes, projectile hits, contact damage
//! - Events: DamageDealt, EntityDied, ProjectileFired
//!
//! Внешний слой (рендер/аудио/UI) только читает state и events.

use bevy::ecs::schedule::ScheduleLabel;
use bevy::prelude::*;

pub mod clock;
pub mod components;
pub mod events;
pub mod systems;

// Re-export основных типов
pub use clock::SimClock;
pub use components::*;
pub use events::{DamageDealt, DamageSource, EntityDied, ProjectileFired};

use crate::components::{EnemyRoster, SolidObstacles};

/// Schedule одного тика симуляции (запускается через `step`)
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CombatTick;

/// Фазы тика (выполняются строго по порядку)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TickSet {
    /// 1. AI: movement intent + выстрелы лучников
    Ai,
    /// 2. Player: input → velocity, атаки игрока, регенерация
    Player,
    /// Physics шаг (position += velocity * dt)
    Motion,
    /// 3. Движение/lifetime/стены projectiles
    Projectiles,
    /// 4-5. Projectile hits + contact damage
    Resolution,
    /// 6. Деспавн мёртвых + reset уровня при смерти игрока
    Cleanup,
}

/// Combat Plugin
///
/// Регистрирует combat системы в `CombatTick`.
///
/// Порядок выполнения:
/// 1. advance_projectiles — движение, lifetime, стены
/// 2. resolve_projectile_hits — первый пересечённый враг / игрок
/// 3. resolve_contact_damage — контакт melee врагов с игроком
/// 4. despawn_dead_enemies — удаление мёртвых + чистка roster
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        // Регистрация событий
        app.add_event::<DamageDealt>()
            .add_event::<EntityDied>()
            .add_event::<ProjectileFired>();

        // Simulation-owned коллекции
        app.init_resource::<SimClock>()
            .init_resource::<ActiveProjectiles>()
            .init_resource::<EnemyRoster>()
            .init_resource::<SolidObstacles>();

        app.init_schedule(CombatTick);
        app.configure_sets(
            CombatTick,
            (
                TickSet::Ai,
                TickSet::Player,
                TickSet::Motion,
                TickSet::Projectiles,
                TickSet::Resolution,
                TickSet::Cleanup,
            )
                .chain(),
        );

        app.add_systems(
            CombatTick,
            (
                systems::advance_projectiles.in_set(TickSet::Projectiles),
                (systems::resolve_projectile_hits, systems::resolve_contact_damage)
                    .chain()
                    .in_set(TickSet::Resolution),
                systems::despawn_dead_enemies.in_set(TickSet::Cleanup),
            ),
        );
    }
}

/// Один тик симуляции с явным deltaTime
///
/// Внешний frame driver (или тесты) вызывает это раз в кадр.
/// Во время тика `SimClock::now()` = время начала тика.
pub fn step(world: &mut World, delta: f32) {
    world.resource_mut::<SimClock>().begin_tick(delta);
    world.run_schedule(CombatTick);
    world.resource_mut::<SimClock>().end_tick();
}

/// System: real-time hosting — тик из FixedUpdate (60Hz)
pub fn run_fixed_tick(world: &mut World) {
    let delta = world.resource::<Time<Fixed>>().delta_secs();
    step(world, delta);
}
