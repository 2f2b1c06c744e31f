use serde::Deserialize;
use std::f32::consts::PI;

/// Gameplay tuning for the saucer target.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct SaucerTuning {
    /// Resting position.
    pub home_x: f32,
    pub home_y: f32,

    /// World-space collision radius.
    pub radius: f32,

    /// Vertical idle bob amplitude (0 disables the bob).
    pub hover_amplitude: f32,

    /// Idle bob period in milliseconds.
    pub hover_period_ms: u64,

    /// Rotation reached by the hit spin, in radians.
    pub hit_spin: f32,

    /// Length of the hit reaction in milliseconds.
    pub hit_duration_ms: u64,
}

impl Default for SaucerTuning {
    fn default() -> Self {
        Self {
            home_x: 3.0,
            home_y: 0.0,
            radius: 0.6,
            hover_amplitude: 0.15,
            hover_period_ms: 3000,
            hit_spin: PI * 4.0,
            hit_duration_ms: 1000,
        }
    }
}
