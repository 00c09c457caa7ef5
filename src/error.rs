use thiserror::Error;

/// Errors raised while building particles, planes or engine configuration.
///
/// The simulation step itself never fails; every precondition is checked here,
/// at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EngineError {
    #[error("particle mass must be finite and strictly positive, got {0}")]
    InvalidMass(f32),
    #[error("particle radius must be finite and non-negative, got {0}")]
    InvalidRadius(f32),
    #[error("restitution must lie in [0, 1], got {0}")]
    InvalidRestitution(f32),
    #[error("minimum step interval must be finite and strictly positive, got {0}")]
    InvalidInterval(f32),
    #[error("frame budget must be finite and strictly positive, got {0} ms")]
    InvalidFrameBudget(f32),
    #[error("gravity must be finite, got {0}")]
    InvalidGravity(f32),
    #[error("plane normal must be a finite, non-zero vector")]
    DegenerateNormal,
}

pub type EngineResult<T> = Result<T, EngineError>;
