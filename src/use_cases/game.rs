use super::types::WorldUpdate;
use crate::domain::ports::Clock;
use crate::domain::systems::collision::{collides, resolve_projectile_hits};
use crate::domain::tuning::GameTuning;
use crate::domain::{
    ControlInput, Craft, CraftSnapshot, ProjectileSnapshot, Saucer, SaucerSnapshot, SimEvent,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, broadcast, mpsc};
use tracing::{debug, info};

/// Settings for one world loop.
#[derive(Debug, Clone, Copy)]
pub struct WorldSettings {
    /// Fixed tick interval for the frame driver.
    pub tick_interval: Duration,
    pub tuning: GameTuning,
}

/// Frame driver state: the craft, the saucer, and events waiting for the next update.
pub struct Game {
    craft: Craft,
    saucer: Saucer,
    tick: u64,
    pending_events: Vec<SimEvent>,
}

impl Game {
    pub fn new(tuning: &GameTuning) -> Self {
        Self {
            craft: Craft::new(tuning.craft, tuning.projectile),
            saucer: Saucer::new(tuning.saucer),
            tick: 0,
            pending_events: Vec::new(),
        }
    }

    pub fn apply(&mut self, control: ControlInput) {
        match control {
            ControlInput::Rotate { direction, on } => self.craft.set_rotating(direction, on),
            ControlInput::Thrust { on } => {
                self.craft.set_thrust(on);
                if on {
                    self.saucer.sense(self.craft.position());
                }
            }
            ControlInput::Fire => {
                if let Some((slot, p)) = self.craft.fire() {
                    let heading = p.heading();
                    self.pending_events
                        .push(SimEvent::ProjectileFired { slot, heading });
                }
            }
        }
    }

    /// Runs one frame.
    ///
    /// Animations advance to `now` first, then the craft integrates (moving its
    /// projectiles), and collisions run last against current-frame positions.
    pub fn step(&mut self, now: Duration) -> WorldUpdate {
        let mut events = std::mem::take(&mut self.pending_events);

        if self.craft.advance_animation(now) {
            events.push(SimEvent::CraftRespawned);
        }
        if self.saucer.update(now) {
            events.push(SimEvent::SaucerRecovered);
        }

        self.craft.update();

        resolve_projectile_hits(
            self.craft.projectiles_mut(),
            &mut self.saucer,
            now,
            &mut events,
        );

        if !self.craft.is_playing_hit_animation()
            && collides(
                self.craft.position(),
                self.craft.radius(),
                self.saucer.position(),
                self.saucer.radius(),
            )
        {
            self.craft.play_hit_animation(now);
            info!("craft collided with saucer");
            events.push(SimEvent::CraftHit);
        }

        self.tick += 1;
        self.snapshot(events)
    }

    fn snapshot(&self, events: Vec<SimEvent>) -> WorldUpdate {
        let projectiles = self
            .craft
            .projectiles()
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_active())
            .map(|(slot, p)| ProjectileSnapshot::from_slot(slot, p))
            .collect();

        WorldUpdate {
            tick: self.tick,
            craft: CraftSnapshot::from(&self.craft),
            projectiles,
            saucer: SaucerSnapshot::from(&self.saucer),
            events,
        }
    }

    pub fn craft(&self) -> &Craft {
        &self.craft
    }

    pub fn saucer(&self) -> &Saucer {
        &self.saucer
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }
}

pub async fn world_task<C: Clock>(
    mut input_rx: mpsc::Receiver<ControlInput>,
    world_tx: broadcast::Sender<WorldUpdate>,
    settings: WorldSettings,
    clock: C,
    shutdown: Arc<Notify>,
) {
    let mut game = Game::new(&settings.tuning);

    // Drive the game loop at the configured tick rate.
    let mut interval = tokio::time::interval(settings.tick_interval);
    info!(
        tick_interval_ms = settings.tick_interval.as_millis(),
        "world started"
    );

    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                break;
            }
            _ = interval.tick() => {}
        }

        while let Ok(control) = input_rx.try_recv() {
            game.apply(control);
        }

        let update = game.step(clock.elapsed());
        if !update.events.is_empty() {
            debug!(tick = update.tick, events = update.events.len(), "frame events");
        }
        let _ = world_tx.send(update);
    }

    info!(ticks = game.tick(), "world stopped");
}
