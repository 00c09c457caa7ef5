use log::{log_enabled, warn, Level};
use std::time::{Duration, Instant};

/// Times one pipeline phase: traces its start and end and adds the elapsed
/// time into `output` when dropped.
pub struct PhaseTimer<'a> {
    label: &'static str,
    start: Instant,
    output: &'a mut Duration,
}

impl<'a> PhaseTimer<'a> {
    pub fn new(label: &'static str, output: &'a mut Duration) -> Self {
        if log_enabled!(Level::Trace) {
            log::trace!("⏱️ start {label}");
        }
        Self {
            label,
            start: Instant::now(),
            output,
        }
    }
}

impl Drop for PhaseTimer<'_> {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        *self.output += elapsed;
        if log_enabled!(Level::Trace) {
            log::trace!("⏱️ end {} ({} µs)", self.label, elapsed.as_micros());
        }
    }
}

/// Logs a warning when a step took longer than the frame budget.
/// Returns whether the budget was exceeded.
pub fn warn_if_frame_budget_exceeded(duration: Duration, budget_ms: f32) -> bool {
    let elapsed_ms = duration.as_secs_f32() * 1000.0;
    if elapsed_ms > budget_ms {
        warn!("Step exceeded frame budget: {elapsed_ms:.2} ms > {budget_ms:.2} ms");
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_accumulates_into_output() {
        let mut total = Duration::from_millis(5);
        {
            let _timer = PhaseTimer::new("test", &mut total);
            std::thread::sleep(Duration::from_millis(1));
        }
        assert!(total >= Duration::from_millis(6));
    }

    #[test]
    fn budget_check() {
        assert!(warn_if_frame_budget_exceeded(Duration::from_millis(20), 16.0));
        assert!(!warn_if_frame_budget_exceeded(Duration::from_millis(2), 16.0));
    }
}
