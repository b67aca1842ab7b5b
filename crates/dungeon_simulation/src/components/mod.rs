//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - actor: базовые характеристики персонажа (Character, Health, Facing, Velocity, BodyBounds)
//! - movement: выходы platformer physics (PlatformerBody)
//! - player: player control marker + tuning (Player, PlayerTuning, Regeneration)
//! - world: simulation-owned коллекции (EnemyRoster, SolidObstacles)
//!
//! Оружие и AI живут в своих доменах (crate::combat, crate::ai).

pub mod actor;
pub mod movement;
pub mod player;
pub mod world;

// Re-exports для удобного импорта
pub use actor::*;
pub use movement::*;
pub use player::*;
pub use world::*;
