// Domain-level control inputs, simulation events, and per-frame snapshots.

use crate::domain::craft::Craft;
use crate::domain::projectile::Projectile;
use crate::domain::saucer::Saucer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDirection {
    Left,
    Right,
}

/// The craft's complete control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlInput {
    Rotate {
        direction: RotationDirection,
        on: bool,
    },
    Thrust {
        on: bool,
    },
    Fire,
}

/// Notable things that happened during a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    ProjectileFired { slot: usize, heading: f32 },
    SaucerHit { slot: usize, x: f32, y: f32 },
    SaucerRecovered,
    CraftHit,
    CraftRespawned,
}

#[derive(Debug, Clone)]
pub struct CraftSnapshot {
    pub x: f32,
    pub y: f32,
    pub heading: f32,
    pub rot: f32,
    pub thrust: f32,
    pub thrusting: bool,
    pub hit_animation: bool,
}

#[derive(Debug, Clone)]
pub struct ProjectileSnapshot {
    pub slot: usize,
    pub x: f32,
    pub y: f32,
    pub heading: f32,
}

#[derive(Debug, Clone)]
pub struct SaucerSnapshot {
    pub x: f32,
    pub y: f32,
    pub rot: f32,
    pub facing: f32,
    pub hit_animation: bool,
}

impl From<&Craft> for CraftSnapshot {
    fn from(c: &Craft) -> Self {
        let (x, y) = c.position();
        Self {
            x,
            y,
            heading: c.heading(),
            rot: c.rotation(),
            thrust: c.thrust_magnitude(),
            thrusting: c.is_thrusting(),
            hit_animation: c.is_playing_hit_animation(),
        }
    }
}

impl ProjectileSnapshot {
    pub fn from_slot(slot: usize, p: &Projectile) -> Self {
        let (x, y) = p.position();
        Self {
            slot,
            x,
            y,
            heading: p.heading(),
        }
    }
}

impl From<&Saucer> for SaucerSnapshot {
    fn from(s: &Saucer) -> Self {
        let (x, y) = s.position();
        Self {
            x,
            y,
            rot: s.rotation(),
            facing: s.facing(),
            hit_animation: s.is_playing_hit_animation(),
        }
    }
}
