// Projectiles and the fixed round-robin pool that recycles them.

use crate::domain::tuning::ProjectileTuning;

/// A single reusable projectile. Never destroyed, only toggled active/inactive.
#[derive(Debug, Clone)]
pub struct Projectile {
    x: f32,
    y: f32,
    heading: f32,
    active: bool,
    tuning: ProjectileTuning,
}

impl Projectile {
    pub fn new(tuning: ProjectileTuning) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            heading: 0.0,
            active: false,
            tuning,
        }
    }

    /// (Re)launches the projectile from `origin` along `heading`.
    pub fn fire(&mut self, heading: f32, origin: (f32, f32)) {
        self.active = true;
        self.heading = heading;
        self.x = origin.0;
        self.y = origin.1;
    }

    /// Advances one frame; leaving the projectile bound deactivates it.
    pub fn update(&mut self) {
        if !self.active {
            return;
        }

        self.x += self.heading.cos() * self.tuning.speed;
        self.y += self.heading.sin() * self.tuning.speed;

        let bound = self.tuning.bound;
        if self.x > bound || self.x < -bound || self.y > bound || self.y < -bound {
            self.active = false;
        }
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn radius(&self) -> f32 {
        self.tuning.radius
    }
}

/// Fixed-capacity projectile storage, allocated once and reused in cyclic order.
///
/// Firing faster than projectiles expire recycles the oldest slot mid-flight.
#[derive(Debug, Clone)]
pub struct ProjectilePool {
    slots: Vec<Projectile>,
    index: usize,
}

impl ProjectilePool {
    pub fn new(capacity: usize, tuning: ProjectileTuning) -> Self {
        Self {
            slots: (0..capacity).map(|_| Projectile::new(tuning)).collect(),
            index: 0,
        }
    }

    /// Advances the cursor and fires the slot it lands on.
    ///
    /// The cursor moves before firing, so the first shot uses slot 1.
    /// Returns the slot index, or `None` for an empty pool.
    pub fn fire(&mut self, heading: f32, origin: (f32, f32)) -> Option<usize> {
        if self.slots.is_empty() {
            return None;
        }

        self.index = (self.index + 1) % self.slots.len();
        self.slots[self.index].fire(heading, origin);
        Some(self.index)
    }

    pub fn update(&mut self) {
        for p in &mut self.slots {
            p.update();
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, slot: usize) -> Option<&Projectile> {
        self.slots.get(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Projectile> {
        self.slots.iter_mut()
    }
}
