//! Combat components

pub mod cooldown;
pub mod wielder;
pub mod melee;
pub mod ranged;
pub mod projectile;


// Re-export all components
pub use cooldown::*;
pub use wielder::*;
pub use melee::*;
pub use ranged::*;
pub use projectile::*;
