use std::cell::Cell;
use std::time::Instant;

/// Seconds elapsed since a fixed start point.
pub trait TimeSource {
    fn elapsed(&self) -> f32;
}

/// Monotonic wall clock started once, at construction. It cannot be reset.
pub struct Timer {
    start_time: Instant,
}

impl Timer {
    pub fn new() -> Self {
        Timer {
            start_time: Instant::now(),
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for Timer {
    fn elapsed(&self) -> f32 {
        self.start_time.elapsed().as_secs_f32()
    }
}

/// Clock whose time is set by hand, for replays and tests.
#[derive(Default)]
pub struct ManualClock {
    now: Cell<f32>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, seconds: f32) {
        self.now.set(seconds);
    }
}

impl TimeSource for ManualClock {
    fn elapsed(&self) -> f32 {
        self.now.get()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn elapsed(&self) -> f32 {
        (**self).elapsed()
    }
}
