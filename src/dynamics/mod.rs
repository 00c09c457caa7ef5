//! Simulation dynamics: force accumulation, correction commit, and integration.

pub mod corrections;
pub mod forces;
pub mod integrator;

pub use corrections::apply_corrections;
pub use forces::{compute_forces, reset_forces, ForceGenerator, ForceRegistry, GravityForce};
pub use integrator::Integrator;
