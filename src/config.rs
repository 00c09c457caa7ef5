//! Configuration constants and the serializable engine configuration.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Gravitational acceleration magnitude, applied along -Y.
pub const DEFAULT_GRAVITY: f32 = 9.81;

/// Minimum wall-clock interval between two steps (in seconds).
pub const DEFAULT_MIN_INTERVAL: f32 = 0.01;

/// Global restitution coefficient used by both collision resolvers.
pub const DEFAULT_RESTITUTION: f32 = 0.5;

/// A step slower than this many milliseconds is reported with a warning.
pub const DEFAULT_FRAME_BUDGET_MS: f32 = 16.0;

/// Selects which time delta feeds the Euler integrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestepMode {
    /// Integrate with the configured minimum interval. Deterministic.
    #[default]
    Fixed,
    /// Integrate with the measured wall-clock time since the previous step,
    /// which may exceed the minimum interval. Host-speed dependent.
    Variable,
}

/// Directional wind field described by a ray.
///
/// Stored as configuration only; the engine does not turn it into a force.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindRay {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl WindRay {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }
}

/// Runtime knobs of the [`Engine`](crate::engine::Engine).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Minimum interval between two paced steps, in seconds.
    pub min_interval: f32,
    /// 0 is fully inelastic, 1 fully elastic.
    pub restitution: f32,
    /// Disables inter-particle collisions when set.
    pub particle_mode: bool,
    pub timestep: TimestepMode,
    pub gravity: f32,
    /// Steps slower than this are logged as warnings.
    pub frame_budget_ms: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_interval: DEFAULT_MIN_INTERVAL,
            restitution: DEFAULT_RESTITUTION,
            particle_mode: false,
            timestep: TimestepMode::Fixed,
            gravity: DEFAULT_GRAVITY,
            frame_budget_ms: DEFAULT_FRAME_BUDGET_MS,
        }
    }
}

impl EngineConfig {
    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.restitution = restitution;
        self
    }

    pub fn with_min_interval(mut self, min_interval: f32) -> Self {
        self.min_interval = min_interval;
        self
    }

    pub fn with_timestep(mut self, timestep: TimestepMode) -> Self {
        self.timestep = timestep;
        self
    }

    pub fn with_particle_mode(mut self, enabled: bool) -> Self {
        self.particle_mode = enabled;
        self
    }

    /// Checks every numeric knob against its admissible range.
    pub fn validate(&self) -> EngineResult<()> {
        validate_restitution(self.restitution)?;
        if !self.min_interval.is_finite() || self.min_interval <= 0.0 {
            return Err(EngineError::InvalidInterval(self.min_interval));
        }
        if !self.frame_budget_ms.is_finite() || self.frame_budget_ms <= 0.0 {
            return Err(EngineError::InvalidFrameBudget(self.frame_budget_ms));
        }
        if !self.gravity.is_finite() {
            return Err(EngineError::InvalidGravity(self.gravity));
        }
        Ok(())
    }
}

pub(crate) fn validate_restitution(restitution: f32) -> EngineResult<()> {
    if (0.0..=1.0).contains(&restitution) {
        Ok(())
    } else {
        Err(EngineError::InvalidRestitution(restitution))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timestep, TimestepMode::Fixed);
        assert!((config.restitution - 0.5).abs() < 1e-6);
        assert!((config.min_interval - 0.01).abs() < 1e-6);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert_eq!(
            EngineConfig::default().with_restitution(1.5).validate(),
            Err(EngineError::InvalidRestitution(1.5))
        );
        assert_eq!(
            EngineConfig::default().with_restitution(-0.1).validate(),
            Err(EngineError::InvalidRestitution(-0.1))
        );
        assert_eq!(
            EngineConfig::default().with_min_interval(0.0).validate(),
            Err(EngineError::InvalidInterval(0.0))
        );
        assert!(EngineConfig::default()
            .with_min_interval(f32::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn frame_budget_must_be_positive() {
        let mut config = EngineConfig::default();
        config.frame_budget_ms = -1.0;
        assert_eq!(config.validate(), Err(EngineError::InvalidFrameBudget(-1.0)));
        config.frame_budget_ms = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidFrameBudget(_))
        ));
    }

    #[test]
    fn restitution_bounds_are_inclusive() {
        assert!(EngineConfig::default().with_restitution(0.0).validate().is_ok());
        assert!(EngineConfig::default().with_restitution(1.0).validate().is_ok());
    }
}
