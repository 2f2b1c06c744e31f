// Saucer target: hovers in place, turns toward the craft, spins when hit.

use crate::domain::systems::animation::{Easing, Tween};
use crate::domain::tuning::SaucerTuning;
use std::f32::consts::TAU;
use std::time::Duration;
use tracing::{debug, info};

pub struct Saucer {
    x: f32,
    y: f32,
    rot: f32,
    facing: f32,
    hit_animation: Option<Tween>,
    tuning: SaucerTuning,
}

impl Saucer {
    pub fn new(tuning: SaucerTuning) -> Self {
        Self {
            x: tuning.home_x,
            y: tuning.home_y,
            rot: 0.0,
            facing: 0.0,
            hit_animation: None,
            tuning,
        }
    }

    /// Time-keyed update: idle bob plus the hit spin.
    ///
    /// Returns true on the frame the hit spin completes.
    pub fn update(&mut self, now: Duration) -> bool {
        if self.tuning.hover_amplitude != 0.0 && self.tuning.hover_period_ms > 0 {
            let phase = now.as_millis() % u128::from(self.tuning.hover_period_ms);
            let phase = phase as f32 / self.tuning.hover_period_ms as f32;
            self.y = self.tuning.home_y + self.tuning.hover_amplitude * (phase * TAU).sin();
        }

        let Some(tween) = self.hit_animation else {
            return false;
        };
        let sample = tween.sample(now);
        self.rot = sample.value;
        if !sample.finished {
            return false;
        }

        self.hit_animation = None;
        self.rot = 0.0;
        info!("saucer recovered");
        true
    }

    /// Turns the saucer to face `target`.
    pub fn sense(&mut self, target: (f32, f32)) {
        self.facing = (target.1 - self.y).atan2(target.0 - self.x);
        debug!(x = target.0, y = target.1, facing = self.facing, "saucer sensed craft");
    }

    /// Starts the hit spin. Returns false when one is already playing.
    pub fn play_hit_animation(&mut self, now: Duration) -> bool {
        if self.hit_animation.is_some() {
            return false;
        }

        self.hit_animation = Some(Tween::new(
            self.rot,
            self.tuning.hit_spin,
            now,
            Duration::from_millis(self.tuning.hit_duration_ms),
            Easing::QuadraticOut,
        ));
        true
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn rotation(&self) -> f32 {
        self.rot
    }

    pub fn facing(&self) -> f32 {
        self.facing
    }

    pub fn radius(&self) -> f32 {
        self.tuning.radius
    }

    pub fn is_playing_hit_animation(&self) -> bool {
        self.hit_animation.is_some()
    }
}
