//! Movement компоненты: выходы platformer physics шага

use bevy::prelude::*;

/// Состояние тела от platformer physics (внешний слой)
///
/// Архитектура:
/// - Physics шаг (gravity, ladders, ground check) пишет флаги
/// - Player input система читает их для ladder climbing и jump gating
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct PlatformerBody {
    /// Персонаж касается лестницы
    pub on_ladder: bool,
    /// Стоит на земле — прыжок разрешён
    pub can_jump: bool,
}
