//! FSM AI components (state, config, enemy kind).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use crate::ai::SightProbe;

/// Радиус aggro по умолчанию
pub const DEFAULT_AGGRO_RANGE: f32 = 320.0;

/// Ближе этого лучник не стреляет (иначе гарантированный point-blank спам)
pub const DEFAULT_MIN_SAFE_DISTANCE: f32 = 50.0;

/// Вариант врага (closed enum dispatch поведения)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Мечник: преследует, урон контактом
    Melee,
    /// Лучник: держит дистанцию, стреляет
    Archer,
}

/// AI FSM состояния
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Component)]
pub enum AIState {
    /// Игрок вне aggro range или за стеной — стоим
    #[default]
    Idle,

    /// Melee: бежим к игроку
    Pursuing,

    /// Archer: сближаемся (с hold distance) и стреляем
    Engaging,
}

/// Параметры AI врага
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
#[require(AIState, crate::components::Character)]
pub struct AIConfig {
    pub kind: EnemyKind,

    /// Радиус обнаружения игрока
    pub aggro_range: f32,

    /// Горизонтальная скорость (0 = не перемещается)
    pub speed: f32,

    /// Archer: не сближаться ближе этой дистанции (None = идти вплотную)
    pub hold_distance: Option<f32>,

    /// Archer: не стрелять ближе этой дистанции
    pub min_safe_distance: f32,

    /// LOS probe
    pub sight: SightProbe,
}

impl Default for AIConfig {
    fn default() -> Self {
        Self {
            kind: EnemyKind::Melee,
            aggro_range: DEFAULT_AGGRO_RANGE,
            speed: 1.0,
            hold_distance: None,
            min_safe_distance: DEFAULT_MIN_SAFE_DISTANCE,
            sight: SightProbe::default(),
        }
    }
}

impl AIConfig {
    /// Мечник
    pub fn melee() -> Self {
        Self {
            kind: EnemyKind::Melee,
            aggro_range: 220.0,
            speed: 2.2,
            ..Default::default()
        }
    }

    /// Лучник (медленно подходит, стреляет издалека)
    pub fn archer() -> Self {
        Self {
            kind: EnemyKind::Archer,
            aggro_range: 450.0,
            speed: 0.5,
            ..Default::default()
        }
    }

    pub fn for_kind(kind: EnemyKind) -> Self {
        match kind {
            EnemyKind::Melee => Self::melee(),
            EnemyKind::Archer => Self::archer(),
        }
    }

    pub fn with_hold_distance(mut self, distance: f32) -> Self {
        self.hold_distance = Some(distance);
        self
    }

    /// Состояние "в бою" для этого варианта
    pub fn engaged_state(&self) -> AIState {
        match self.kind {
            EnemyKind::Melee => AIState::Pursuing,
            EnemyKind::Archer => AIState::Engaging,
        }
    }
}
