//! Axis-aligned прямоугольники для broad-phase overlap тестов
//!
//! Все коллизии в симуляции — AABB vs AABB (как sprite-vs-sprite в движке).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Позиция entity на 2D плоскости (Transform.translation.xy)
pub fn planar(transform: &Transform) -> Vec2 {
    transform.translation.truncate()
}

/// Axis-aligned bounding box (центр + половинные размеры)
///
/// Инвариант: half_extents.x >= 0, half_extents.y >= 0
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Aabb {
    /// Прямоугольник из центра и полного размера (width, height)
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half_extents: size.abs() * 0.5,
        }
    }

    /// Прямоугольник из левого-нижнего угла и размера (как tile в tilemap)
    pub fn from_corner_size(corner: Vec2, size: Vec2) -> Self {
        Self::from_center_size(corner + size * 0.5, size)
    }

    pub fn size(&self) -> Vec2 {
        self.half_extents * 2.0
    }

    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents
    }

    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents
    }

    /// Строгое пересечение: касание гранями НЕ считается overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let delta = (self.center - other.center).abs();
        let reach = self.half_extents + other.half_extents;
        delta.x < reach.x && delta.y < reach.y
    }

    /// Пересекает ли хотя бы один прямоугольник из набора
    pub fn overlaps_any<'a>(&self, others: impl IntoIterator<Item = &'a Aabb>) -> bool {
        others.into_iter().any(|other| self.overlaps(other))
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        let delta = (point - self.center).abs();
        delta.x <= self.half_extents.x && delta.y <= self.half_extents.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_basic() {
        let a = Aabb::from_center_size(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Aabb::from_center_size(Vec2::new(8.0, 0.0), Vec2::new(10.0, 10.0));
        let c = Aabb::from_center_size(Vec2::new(30.0, 0.0), Vec2::new(10.0, 10.0));

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::from_center_size(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Aabb::from_center_size(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));

        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_corner_constructor() {
        let tile = Aabb::from_corner_size(Vec2::new(0.0, 0.0), Vec2::new(32.0, 32.0));
        assert_eq!(tile.center, Vec2::new(16.0, 16.0));
        assert_eq!(tile.min(), Vec2::ZERO);
        assert_eq!(tile.max(), Vec2::new(32.0, 32.0));
        assert!(tile.contains_point(Vec2::new(5.0, 31.0)));
    }
}
