// Time-keyed interpolation for hit reactions.
//
// Runs on wall-clock timestamps handed in by the frame driver, unlike the
// per-frame integrators which advance a fixed amount every tick.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    QuadraticOut,
}

impl Easing {
    fn apply(self, k: f32) -> f32 {
        match self {
            Easing::Linear => k,
            Easing::QuadraticOut => k * (2.0 - k),
        }
    }
}

/// A single scalar tween from `from` to `to` over `duration`, starting at `started_at`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub started_at: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

/// Value produced by advancing a tween to a timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSample {
    pub value: f32,
    pub finished: bool,
}

impl Tween {
    pub fn new(from: f32, to: f32, started_at: Duration, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
            easing,
        }
    }

    /// Normalized progress in `[0, 1]`.
    ///
    /// Timestamps earlier than the start clamp to 0; a zero duration is complete at once.
    pub fn progress(&self, now: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn sample(&self, now: Duration) -> TweenSample {
        let k = self.progress(now);
        TweenSample {
            value: self.from + (self.to - self.from) * self.easing.apply(k),
            finished: k >= 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn when_linear_tween_is_halfway_then_value_is_midpoint() {
        let tween = Tween::new(0.0, 10.0, ms(1000), ms(2000), Easing::Linear);

        let sample = tween.sample(ms(2000));

        assert!((sample.value - 5.0).abs() < 1e-5);
        assert!(!sample.finished);
    }

    #[test]
    fn when_timestamp_precedes_start_then_value_stays_at_origin() {
        let tween = Tween::new(2.0, 4.0, ms(500), ms(100), Easing::Linear);

        let sample = tween.sample(ms(0));

        assert_eq!(sample.value, 2.0);
        assert!(!sample.finished);
    }

    #[test]
    fn when_duration_elapses_then_tween_finishes_at_target() {
        let tween = Tween::new(0.0, 3.0, ms(0), ms(100), Easing::QuadraticOut);

        let sample = tween.sample(ms(250));

        assert_eq!(sample.value, 3.0);
        assert!(sample.finished);
    }

    #[test]
    fn when_duration_is_zero_then_tween_is_finished_immediately() {
        let tween = Tween::new(1.0, 9.0, ms(10), Duration::ZERO, Easing::Linear);

        assert!(tween.sample(ms(10)).finished);
    }

    #[test]
    fn when_quadratic_out_is_halfway_then_it_is_ahead_of_linear() {
        let eased = Tween::new(0.0, 1.0, ms(0), ms(100), Easing::QuadraticOut);
        let linear = Tween::new(0.0, 1.0, ms(0), ms(100), Easing::Linear);

        assert!(eased.sample(ms(50)).value > linear.sample(ms(50)).value);
    }
}
