//! Level module: layout, spawn, полный reset при смерти игрока
//!
//! Смерть игрока = мгновенный рестарт: все враги, projectiles и позиции
//! пересобираются из `LevelLayout`. Частичного respawn нет.

use bevy::prelude::*;

pub mod layout;
pub mod spawning;

pub use layout::{EnemySpawn, LevelLayout};
pub use spawning::{load_level, reset_level_on_player_death, spawn_enemy, spawn_player, LevelEntity};

use crate::combat::{CombatTick, TickSet};

/// Счётчик рестартов уровня
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelState {
    pub resets: u32,
}

/// Событие: уровень пересобран после смерти игрока
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelReset {
    /// Номер рестарта (1 = первый)
    pub reset_count: u32,
}

/// Level Plugin
///
/// - Startup: load_level из `LevelLayout`
/// - Cleanup фаза: reset_level_on_player_death (после деспавна мёртвых врагов)
pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelLayout>()
            .init_resource::<LevelState>()
            .add_event::<LevelReset>();

        app.add_systems(Startup, load_level);
        app.add_systems(
            CombatTick,
            reset_level_on_player_death
                .in_set(TickSet::Cleanup)
                .after(crate::combat::systems::despawn_dead_enemies),
        );
    }
}
