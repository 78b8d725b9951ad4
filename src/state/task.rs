//! Demo progress task state

use std::time::Instant;

/// A user-triggered counter task: ticks once per second up to the target,
/// driven by the event loop rather than a separate thread.
#[derive(Debug)]
pub struct ProgressTask {
    start_time: Instant,
    pub counter: u64,
}

impl ProgressTask {
    /// Tick count at which the task completes
    pub const TARGET: u64 = 10;

    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            counter: 0,
        }
    }

    /// Advance the counter from elapsed time. Returns true once finished.
    pub fn update(&mut self) -> bool {
        let ticks = self.start_time.elapsed().as_secs().min(Self::TARGET);
        if ticks > self.counter {
            self.counter = ticks;
            tracing::debug!("counter: {}", self.counter);
        }
        self.counter >= Self::TARGET
    }

    /// Completion ratio for the gauge (0.0 to 1.0)
    pub fn ratio(&self) -> f64 {
        self.counter as f64 / Self::TARGET as f64
    }
}

impl Default for ProgressTask {
    fn default() -> Self {
        Self::new()
    }
}
