// Player craft: heading/thrust integrator that owns the projectile pool.

use crate::domain::projectile::{Projectile, ProjectilePool};
use crate::domain::state::RotationDirection;
use crate::domain::systems::animation::{Easing, Tween};
use crate::domain::tuning::{CraftTuning, ProjectileTuning};
use std::f32::consts::FRAC_PI_2;
use std::time::Duration;
use tracing::{debug, info};

pub struct Craft {
    x: f32,
    y: f32,
    heading: f32,
    // Visual rotation: heading - PI/2 while flying, the spin value while hit.
    rot: f32,

    // Movement-only state.
    thrust_magnitude: f32,
    goal_thrust_magnitude: f32,
    thrust_direction: f32,
    is_thrusting: bool,
    rotating_left: bool,
    rotating_right: bool,

    hit_animation: Option<Tween>,
    projectiles: ProjectilePool,
    tuning: CraftTuning,
}

impl Craft {
    pub fn new(tuning: CraftTuning, projectile_tuning: ProjectileTuning) -> Self {
        let heading = 0.0;
        Self {
            x: tuning.spawn_x,
            y: tuning.spawn_y,
            heading,
            rot: heading - FRAC_PI_2,
            thrust_magnitude: 0.0,
            goal_thrust_magnitude: 0.0,
            thrust_direction: heading,
            is_thrusting: false,
            rotating_left: false,
            rotating_right: false,
            hit_animation: None,
            projectiles: ProjectilePool::new(tuning.projectile_slots, projectile_tuning),
            tuning,
        }
    }

    pub fn set_rotating(&mut self, direction: RotationDirection, on: bool) {
        debug!(?direction, on, "rotate");
        match direction {
            RotationDirection::Left => self.rotating_left = on,
            RotationDirection::Right => self.rotating_right = on,
        }
    }

    /// Switches thrust on or off.
    ///
    /// Switching on raises the goal thrust by the tuning increment. Unless
    /// `compound_thrust_goal` is set, an "on" while already thrusting is ignored,
    /// so key-repeat cannot stack thrust.
    pub fn set_thrust(&mut self, on: bool) {
        if on {
            if !self.is_thrusting || self.tuning.compound_thrust_goal {
                self.goal_thrust_magnitude += self.tuning.thrust_increment;
            }
        } else {
            self.goal_thrust_magnitude = 0.0;
        }
        self.is_thrusting = on;
        debug!(on, goal = self.goal_thrust_magnitude, "thrust");
    }

    /// Fires the next pool slot from the tip along the current heading.
    pub fn fire(&mut self) -> Option<(usize, &Projectile)> {
        let origin = self.tip_position();
        let Some(slot) = self.projectiles.fire(self.heading, origin) else {
            debug!("fire ignored: craft has no projectile slots");
            return None;
        };
        info!(slot, heading = self.heading, "projectile fired");
        self.projectiles.get(slot).map(|p| (slot, p))
    }

    /// Per-frame integration step.
    ///
    /// Rotation and thrust filtering always run; position only integrates while
    /// no hit animation is playing. Projectiles advance last.
    pub fn update(&mut self) {
        if self.rotating_left {
            self.heading += self.tuning.rotation_rate;
        }
        if self.rotating_right {
            self.heading -= self.tuning.rotation_rate;
        }
        if self.hit_animation.is_none() {
            self.rot = self.heading - FRAC_PI_2;
        }

        // First-order low-pass toward the goal thrust.
        self.thrust_magnitude -=
            (self.thrust_magnitude - self.goal_thrust_magnitude) * self.tuning.thrust_decay;

        if self.is_thrusting {
            self.thrust_direction = self.heading;
        }

        if self.hit_animation.is_none() {
            self.x += self.thrust_direction.cos() * self.thrust_magnitude;
            self.y += self.thrust_direction.sin() * self.thrust_magnitude;
        }

        // Leaving the play area mirrors the axis through the origin.
        if self.x < -self.tuning.bound_x || self.x > self.tuning.bound_x {
            self.x = -self.x;
        }
        if self.y < -self.tuning.bound_y || self.y > self.tuning.bound_y {
            self.y = -self.y;
        }

        self.projectiles.update();
    }

    /// Starts the hit spin. Returns false when one is already playing.
    pub fn play_hit_animation(&mut self, now: Duration) -> bool {
        if self.hit_animation.is_some() {
            return false;
        }

        self.thrust_magnitude = 0.0;
        self.hit_animation = Some(Tween::new(
            self.rot,
            self.tuning.hit_spin,
            now,
            Duration::from_millis(self.tuning.hit_duration_ms),
            Easing::Linear,
        ));
        info!(x = self.x, y = self.y, "craft hit animation started");
        true
    }

    /// Advances the hit spin to `now`. Returns true on the frame it completes,
    /// after the craft has been put back at its spawn pose.
    pub fn advance_animation(&mut self, now: Duration) -> bool {
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
        self.x = self.tuning.spawn_x;
        self.y = self.tuning.spawn_y;
        info!(x = self.x, y = self.y, "craft respawned");
        true
    }

    /// Launch point: the tip offset rotated by the current visual rotation.
    pub fn tip_position(&self) -> (f32, f32) {
        let (sin, cos) = self.rot.sin_cos();
        let (ox, oy) = (self.tuning.tip_offset_x, self.tuning.tip_offset_y);
        (self.x + ox * cos - oy * sin, self.y + ox * sin + oy * cos)
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn rotation(&self) -> f32 {
        self.rot
    }

    pub fn thrust_magnitude(&self) -> f32 {
        self.thrust_magnitude
    }

    pub fn goal_thrust_magnitude(&self) -> f32 {
        self.goal_thrust_magnitude
    }

    pub fn is_thrusting(&self) -> bool {
        self.is_thrusting
    }

    pub fn is_playing_hit_animation(&self) -> bool {
        self.hit_animation.is_some()
    }

    pub fn hit_animation(&self) -> Option<&Tween> {
        self.hit_animation.as_ref()
    }

    pub fn radius(&self) -> f32 {
        self.tuning.radius
    }

    pub fn projectiles(&self) -> &ProjectilePool {
        &self.projectiles
    }

    pub fn projectiles_mut(&mut self) -> &mut ProjectilePool {
        &mut self.projectiles
    }
}
