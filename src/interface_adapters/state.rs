use crate::domain::ports::Clock;
use std::time::Duration;
use tokio::time::Instant;

// Monotonic time source measured from session start.
pub struct SessionClock {
    started: Instant,
}

impl SessionClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Clock for SessionClock {
    fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
