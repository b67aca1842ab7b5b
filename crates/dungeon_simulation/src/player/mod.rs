//! Player control module
//!
//! Input не опрашивается здесь: хост (окно/геймпад) пишет `PlayerInput`,
//! симуляция читает его раз в тик в фазе `TickSet::Player`.

use bevy::prelude::*;

pub mod input;
pub mod systems;

#[cfg(test)]
mod systems_tests;

pub use input::PlayerInput;
pub use systems::{apply_player_input, player_attacks, regenerate_health};

use crate::combat::{CombatTick, TickSet};

/// Player Plugin
///
/// Порядок выполнения:
/// 1. apply_player_input — input → velocity/facing (ladder, jump gating)
/// 2. player_attacks — swing, выстрел, зарядка
/// 3. regenerate_health — пассивная регенерация
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerInput>();

        app.add_systems(
            CombatTick,
            (apply_player_input, player_attacks, regenerate_health)
                .chain()
                .in_set(TickSet::Player),
        );
    }
}
