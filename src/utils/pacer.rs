use std::time::{Duration, Instant};

/// Frame limiter enforcing a minimum wall-clock interval between steps.
#[derive(Debug, Clone)]
pub struct Pacer {
    min_interval: Duration,
    last: Instant,
}

impl Pacer {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last: Instant::now(),
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    pub fn set_min_interval(&mut self, min_interval: Duration) {
        self.min_interval = min_interval;
    }

    /// Restarts the interval from now.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Blocks until at least the minimum interval has passed since the
    /// previous call, then returns the actual elapsed time.
    pub fn wait(&mut self) -> Duration {
        let mut elapsed = self.last.elapsed();
        while elapsed < self.min_interval {
            std::thread::sleep(self.min_interval - elapsed);
            elapsed = self.last.elapsed();
        }
        self.last = Instant::now();
        elapsed
    }
}
