//! Shared domain — cross-cutting типы
//!
//! Содержит геометрию используемую в нескольких доменах:
//! - Aabb (bounding box персонажей, melee hit volume, стены, projectile)

pub mod geometry;

// Re-export
pub use geometry::*;
