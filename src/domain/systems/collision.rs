use crate::domain::projectile::ProjectilePool;
use crate::domain::saucer::Saucer;
use crate::domain::state::SimEvent;
use std::time::Duration;
use tracing::{debug, info};

/// Circle-circle overlap test on world-space positions.
///
/// Touching circles (distance exactly equal to the radius sum) do not collide.
pub fn collides(a: (f32, f32), a_radius: f32, b: (f32, f32), b_radius: f32) -> bool {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    dx.hypot(dy) < a_radius + b_radius
}

/// Tests every active projectile against the saucer.
///
/// A hit triggers the saucer's reaction and deactivates the projectile in the same
/// pass, so an overlap can never be reported twice.
pub fn resolve_projectile_hits(
    pool: &mut ProjectilePool,
    saucer: &mut Saucer,
    now: Duration,
    events: &mut Vec<SimEvent>,
) {
    for (slot, p) in pool.iter_mut().enumerate() {
        if !p.is_active() {
            continue;
        }

        if !collides(p.position(), p.radius(), saucer.position(), saucer.radius()) {
            continue;
        }

        let (x, y) = p.position();
        debug!(slot, x, y, "projectile overlaps saucer");
        p.deactivate();
        saucer.play_hit_animation(now);
        info!(slot, "saucer hit");
        events.push(SimEvent::SaucerHit { slot, x, y });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::projectile::Projectile;
    use crate::domain::tuning::{ProjectileTuning, SaucerTuning};

    #[test]
    fn when_circles_overlap_then_collides() {
        assert!(collides((0.0, 0.0), 0.5, (0.9, 0.0), 0.5));
    }

    #[test]
    fn when_circles_only_touch_then_no_collision() {
        assert!(!collides((0.0, 0.0), 0.5, (1.0, 0.0), 0.5));
    }

    #[test]
    fn when_circles_are_apart_then_no_collision() {
        assert!(!collides((0.0, 0.0), 0.1, (0.3, 0.4), 0.3));
    }

    #[test]
    fn when_projectile_flies_at_target_then_first_hit_is_on_fourth_update() {
        let tuning = ProjectileTuning {
            speed: 0.2,
            bound: 10.0,
            radius: 0.1,
        };
        let target = (1.0, 0.0);
        let target_radius = 0.2;
        let mut projectile = Projectile::new(tuning);
        projectile.fire(0.0, (0.0, 0.0));

        let mut updates = 0;
        while !collides(projectile.position(), projectile.radius(), target, target_radius) {
            projectile.update();
            updates += 1;
            assert!(updates <= 10, "projectile never reached the target");
        }

        assert_eq!(updates, 4);
    }

    fn still_saucer(x: f32) -> Saucer {
        Saucer::new(SaucerTuning {
            home_x: x,
            home_y: 0.0,
            radius: 0.5,
            hover_amplitude: 0.0,
            ..SaucerTuning::default()
        })
    }

    #[test]
    fn when_projectile_hits_saucer_then_it_is_deactivated_and_event_reported() {
        let mut pool = ProjectilePool::new(3, ProjectileTuning::default());
        let mut saucer = still_saucer(0.3);
        pool.fire(0.0, (0.0, 0.0));
        let mut events = Vec::new();

        resolve_projectile_hits(&mut pool, &mut saucer, Duration::ZERO, &mut events);

        assert!(pool.iter().all(|p| !p.is_active()));
        assert!(saucer.is_playing_hit_animation());
        assert!(matches!(events.as_slice(), [SimEvent::SaucerHit { slot: 1, .. }]));
    }

    #[test]
    fn when_hit_was_resolved_then_next_check_reports_nothing() {
        let mut pool = ProjectilePool::new(3, ProjectileTuning::default());
        let mut saucer = still_saucer(0.3);
        pool.fire(0.0, (0.0, 0.0));
        let mut events = Vec::new();
        resolve_projectile_hits(&mut pool, &mut saucer, Duration::ZERO, &mut events);
        events.clear();

        resolve_projectile_hits(&mut pool, &mut saucer, Duration::from_millis(16), &mut events);

        assert!(events.is_empty());
    }

    #[test]
    fn when_projectile_misses_then_it_stays_active() {
        let mut pool = ProjectilePool::new(2, ProjectileTuning::default());
        let mut saucer = still_saucer(5.0);
        pool.fire(0.0, (0.0, 0.0));
        let mut events = Vec::new();

        resolve_projectile_hits(&mut pool, &mut saucer, Duration::ZERO, &mut events);

        assert_eq!(pool.iter().filter(|p| p.is_active()).count(), 1);
        assert!(!saucer.is_playing_hit_animation());
        assert!(events.is_empty());
    }
}
