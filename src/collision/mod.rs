//! Collision detection and response: particle/plane and particle/particle.
//!
//! Both resolvers only accumulate corrections; nothing is applied to the live
//! state until [`crate::dynamics::corrections::apply_corrections`] runs.

pub mod contact;
pub mod pair;
pub mod plane;

pub use contact::{Correction, PairCorrection};
pub use pair::PairResolver;
pub use plane::PlaneResolver;
