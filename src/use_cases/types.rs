// Use-case level outputs for the game loop.

use crate::domain::{CraftSnapshot, ProjectileSnapshot, SaucerSnapshot, SimEvent};

#[derive(Debug, Clone)]
pub struct WorldUpdate {
    pub tick: u64,
    pub craft: CraftSnapshot,
    // Active projectiles only.
    pub projectiles: Vec<ProjectileSnapshot>,
    pub saucer: SaucerSnapshot,
    pub events: Vec<SimEvent>,
}
