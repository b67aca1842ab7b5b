//! Line-of-Sight (LOS) — дискретный ray test против твёрдых препятствий
//!
//! Точечная выборка вдоль отрезка, не swept test: достаточно для AI, не для физики.
//! Чистая функция: одинаковые входы → одинаковый результат, state не хранится.

use bevy::prelude::*;
use crate::shared::Aabb;

/// Минимальный шаг выборки (step_size = 0 дал бы бесконечное число точек)
pub const MIN_STEP_SIZE: f32 = 1.0;

/// Параметры LOS probe
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct SightProbe {
    /// Шаг выборки вдоль луча
    pub step_size: f32,
    /// Ближе этого — видимость всегда есть
    pub min_distance: f32,
    /// Размер probe volume в каждой точке
    pub probe_size: Vec2,
}

impl Default for SightProbe {
    fn default() -> Self {
        Self {
            step_size: 6.0,
            min_distance: 10.0,
            probe_size: Vec2::new(8.0, 8.0),
        }
    }
}

/// Есть ли прямая видимость между `from` и `to`
///
/// - нет препятствий → true
/// - distance < min_distance → true
/// - иначе steps = max(2, round(d / step) + 1), проверяем внутренние точки 1..steps
///   (step не меньше `MIN_STEP_SIZE`)
pub fn has_line_of_sight(from: Vec2, to: Vec2, obstacles: &[Aabb], probe: &SightProbe) -> bool {
    if obstacles.is_empty() {
        return true;
    }

    let offset = to - from;
    let distance = offset.length();
    if distance < probe.min_distance {
        return true;
    }

    let step_size = probe.step_size.max(MIN_STEP_SIZE);
    let steps = ((distance / step_size).round() as usize).saturating_add(1).max(2);
    let step = offset / steps as f32;

    (1..steps).all(|i| {
        let sample = Aabb::from_center_size(from + step * i as f32, probe.probe_size);
        !sample.overlaps_any(obstacles)
    })
}
