use serde::Deserialize;
use std::f32::consts::PI;

/// Gameplay tuning for the player-controlled rocket.
///
/// Keep this separate from runtime configuration (tick rates, buffer sizes, etc.).
/// All per-frame values are applied once per tick and are not scaled by elapsed time.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct CraftTuning {
    /// Heading change in radians per frame while a rotation flag is held.
    pub rotation_rate: f32,

    /// Amount added to the goal thrust each time thrust is switched on.
    pub thrust_increment: f32,

    /// When true, repeated thrust-on events keep adding to the goal thrust.
    pub compound_thrust_goal: bool,

    /// Fraction of the gap to the goal thrust closed each frame (low-pass filter).
    pub thrust_decay: f32,

    /// Half-extent of the craft's play area on the x axis.
    pub bound_x: f32,

    /// Half-extent of the craft's play area on the y axis.
    pub bound_y: f32,

    /// World-space collision radius.
    pub radius: f32,

    /// Spawn position the craft returns to after the hit animation.
    pub spawn_x: f32,
    pub spawn_y: f32,

    /// Local offset of the launch tip, rotated with the craft's visual rotation.
    pub tip_offset_x: f32,
    pub tip_offset_y: f32,

    /// Number of projectiles allocated up front.
    pub projectile_slots: usize,

    /// Final rotation of the hit spin, in radians.
    pub hit_spin: f32,

    /// Length of the hit animation in milliseconds.
    pub hit_duration_ms: u64,
}

impl Default for CraftTuning {
    fn default() -> Self {
        Self {
            rotation_rate: 0.05,
            thrust_increment: 0.05,
            compound_thrust_goal: false,
            thrust_decay: 0.01,
            bound_x: 5.5,
            bound_y: 4.0,
            radius: 0.18,
            spawn_x: -3.0,
            spawn_y: 0.0,
            tip_offset_x: 0.0,
            tip_offset_y: -0.5,
            projectile_slots: 10,
            hit_spin: PI * 12.0,
            hit_duration_ms: 2000,
        }
    }
}
