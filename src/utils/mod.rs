//! Utility helpers: phase timing and logging, step profiling, and frame pacing.

pub mod logging;
pub mod pacer;
pub mod profiling;

pub use logging::{warn_if_frame_budget_exceeded, PhaseTimer};
pub use pacer::Pacer;
pub use profiling::StepProfiler;
