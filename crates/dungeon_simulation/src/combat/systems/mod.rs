//! Combat systems (resolution loop)

pub mod projectile;
pub mod damage;

#[cfg(test)]
mod damage_tests;

// Re-export all systems
pub use projectile::*;
pub use damage::*;
