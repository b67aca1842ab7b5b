//! Player control marker component + tuning
//!
//! Отмечает entity которым управляет игрок через input (в отличие от AI).

use bevy::prelude::*;

/// Горизонтальная скорость игрока
pub const PLAYER_MOVEMENT_SPEED: f32 = 5.0;
/// Вертикальная скорость прыжка
pub const PLAYER_JUMP_SPEED: f32 = 15.0;
/// Регенерация здоровья игрока (HP/sec)
pub const PLAYER_REGEN_PER_SECOND: f32 = 0.5;

/// Marker component для player-controlled entity
///
/// - AI systems используют `Without<Player>` filter
/// - Input systems используют `With<Player>` filter
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(crate::components::Character, PlayerTuning, crate::components::PlatformerBody)]
pub struct Player;

/// Параметры движения игрока
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PlayerTuning {
    pub movement_speed: f32,
    pub jump_speed: f32,
    /// Скорость по лестнице (вверх/вниз)
    pub climb_speed: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            movement_speed: PLAYER_MOVEMENT_SPEED,
            jump_speed: PLAYER_JUMP_SPEED,
            climb_speed: PLAYER_MOVEMENT_SPEED,
        }
    }
}

/// Пассивная регенерация здоровья
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Regeneration {
    pub per_second: f32,
}

impl Default for Regeneration {
    fn default() -> Self {
        Self {
            per_second: PLAYER_REGEN_PER_SECOND,
        }
    }
}
