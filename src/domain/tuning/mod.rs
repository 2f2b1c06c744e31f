// Gameplay tuning grouped per entity, loadable from a TOML file.

pub mod craft;
pub mod projectile;
pub mod saucer;

use serde::Deserialize;

pub use craft::CraftTuning;
pub use projectile::ProjectileTuning;
pub use saucer::SaucerTuning;

/// Full set of gameplay tuning for one session.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct GameTuning {
    pub craft: CraftTuning,
    pub projectile: ProjectileTuning,
    pub saucer: SaucerTuning,
}

impl GameTuning {
    /// Checks values the simulation cannot run with.
    ///
    /// Returns a description of the first offending field.
    pub fn validate(&self) -> Result<(), String> {
        let craft = &self.craft;
        if !(craft.bound_x > 0.0 && craft.bound_y > 0.0) {
            return Err("craft bounds must be positive".to_string());
        }
        if !(craft.thrust_decay > 0.0 && craft.thrust_decay <= 1.0) {
            return Err(format!(
                "craft.thrust_decay must be in (0, 1], got {}",
                craft.thrust_decay
            ));
        }
        if craft.radius < 0.0 || self.projectile.radius < 0.0 || self.saucer.radius < 0.0 {
            return Err("collision radii must not be negative".to_string());
        }
        if !(self.projectile.bound > 0.0) {
            return Err("projectile.bound must be positive".to_string());
        }
        if self.saucer.hover_amplitude != 0.0 && self.saucer.hover_period_ms == 0 {
            return Err("saucer.hover_period_ms must be set when hovering".to_string());
        }
        Ok(())
    }
}
