//! PlayerInput — снимок управления на текущий тик

use bevy::prelude::*;

/// Состояние управления игрока
///
/// Удерживаемые кнопки (`left`, `right`, `up`, `down`, `jump`, `charge_held`) хост
/// выставляет каждый кадр. One-shot действия (`melee`, `fire_at`) симуляция
/// сбрасывает после обработки.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump: bool,

    /// Swing мечом (one-shot)
    pub melee: bool,

    /// Обычный выстрел в точку (one-shot)
    pub fire_at: Option<Vec2>,

    /// Кнопка зарядки зажата (press → hold → release = charged shot)
    pub charge_held: bool,

    /// Куда целится курсор (для charged shot)
    pub aim: Vec2,
}

impl PlayerInput {
    /// Горизонтальное направление: -1, 0, +1 (left приоритетнее right)
    pub fn horizontal(&self) -> f32 {
        if self.left {
            -1.0
        } else if self.right {
            1.0
        } else {
            0.0
        }
    }

    /// Вертикальное направление на лестнице: -1, 0, +1 (up приоритетнее down)
    pub fn vertical(&self) -> f32 {
        if self.up {
            1.0
        } else if self.down {
            -1.0
        } else {
            0.0
        }
    }

    /// Сбросить one-shot действия
    pub fn consume_actions(&mut self) {
        self.melee = false;
        self.fire_at = None;
    }
}
