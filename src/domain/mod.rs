// Domain layer: core simulation types and rules.

pub mod craft;
pub mod ports;
pub mod projectile;
pub mod saucer;
pub mod state;
pub mod systems;
pub mod tuning;

pub use craft::Craft;
pub use projectile::{Projectile, ProjectilePool};
pub use saucer::Saucer;
pub use state::{
    ControlInput, CraftSnapshot, ProjectileSnapshot, RotationDirection, SaucerSnapshot, SimEvent,
};
