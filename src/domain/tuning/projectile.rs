use serde::Deserialize;

/// Gameplay tuning for projectiles.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct ProjectileTuning {
    /// Distance travelled per frame.
    pub speed: f32,

    /// Projectiles deactivate once either coordinate leaves `[-bound, bound]`.
    pub bound: f32,

    /// World-space collision radius.
    pub radius: f32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        // Bolt mesh is a 0.04 x 0.4 x 0.04 box; the radius is half its diagonal.
        let (w, h, d) = (0.04_f32, 0.4_f32, 0.04_f32);
        Self {
            speed: 0.2,
            bound: 10.0,
            radius: (w * w + h * h + d * d).sqrt() / 2.0,
        }
    }
}
