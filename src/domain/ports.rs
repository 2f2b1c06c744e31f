use std::time::Duration;

// Port for the time source that drives time-keyed animations.
pub trait Clock: Send + Sync {
    /// Time elapsed since the clock's epoch (session start for the runtime clock).
    fn elapsed(&self) -> Duration;
}
