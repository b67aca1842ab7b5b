//! AI decision-making module
//!
//! Simple FSM для врагов: Idle ↔ Pursuing (мечник) / Engaging (лучник).
//! Переход по aggro range + line-of-sight, поведение — closed enum dispatch по `EnemyKind`.

use bevy::prelude::*;

pub mod components;
pub mod sight;
pub mod systems;

// Re-export основных типов
pub use components::{AIConfig, AIState, EnemyKind};
pub use sight::{has_line_of_sight, SightProbe};

use crate::combat::{CombatTick, TickSet};

/// AI Plugin
///
/// Регистрирует AI системы в `CombatTick` (фаза `TickSet::Ai`).
/// Порядок выполнения:
/// 1. ai_fsm_transitions — обновление FSM state (aggro + LOS)
/// 2. ai_movement_from_state — state → horizontal velocity + facing
/// 3. ai_attack_execution — выстрелы лучников
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            CombatTick,
            (
                systems::ai_fsm_transitions,
                systems::ai_movement_from_state,
                systems::ai_attack_execution,
            )
                .chain() // Последовательное выполнение для детерминизма
                .in_set(TickSet::Ai),
        );
    }
}
