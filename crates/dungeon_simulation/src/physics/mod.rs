//! Physics simulation module
//!
//! Headless stand-in для platformer physics шага: только интеграция velocity.
//! Gravity, лестницы и ground check принадлежат внешнему слою, который пишет `PlatformerBody`.

pub mod movement;

// Re-export основных типов
pub use movement::{integrate_velocity_to_transform, MotionPlugin};
