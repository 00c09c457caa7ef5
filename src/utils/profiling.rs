use log::info;
use std::time::Duration;

/// Per-phase timings and contact counts of the most recent step.
#[derive(Debug, Default, Clone, Copy)]
pub struct StepProfiler {
    pub plane_collision_time: Duration,
    pub pair_collision_time: Duration,
    pub correction_time: Duration,
    pub force_time: Duration,
    pub integrator_time: Duration,
    pub lifecycle_time: Duration,
    pub total_step_time: Duration,

    pub alive_count: usize,
    pub plane_contacts: usize,
    pub pair_contacts: usize,
}

impl StepProfiler {
    fn share(&self, phase: Duration) -> f32 {
        let total_us = self.total_step_time.as_micros() as f32;
        if total_us < 1.0 {
            return 0.0;
        }
        phase.as_micros() as f32 / total_us * 100.0
    }

    pub fn report(&self) {
        if self.total_step_time.is_zero() {
            return;
        }

        info!(
            "step: {:.3} ms, alive {}, plane contacts {}, pair contacts {}",
            self.total_step_time.as_secs_f32() * 1000.0,
            self.alive_count,
            self.plane_contacts,
            self.pair_contacts
        );
        for (label, phase) in [
            ("planes", self.plane_collision_time),
            ("pairs", self.pair_collision_time),
            ("corrections", self.correction_time),
            ("forces", self.force_time),
            ("integrator", self.integrator_time),
            ("lifecycle", self.lifecycle_time),
        ] {
            info!(
                "  {label:<12} {:.3} ms ({:.1}%)",
                phase.as_secs_f32() * 1000.0,
                self.share(phase)
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_is_relative_to_total() {
        let profiler = StepProfiler {
            total_step_time: Duration::from_micros(400),
            pair_collision_time: Duration::from_micros(100),
            ..StepProfiler::default()
        };
        assert!((profiler.share(profiler.pair_collision_time) - 25.0).abs() < 1e-4);
        assert_eq!(StepProfiler::default().share(Duration::from_micros(5)), 0.0);
    }
}
