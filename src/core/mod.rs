//! Core types describing particles, planes, and particle collections.

pub mod list;
pub mod particle;
pub mod plane;

pub use list::{Emitter, ParticleList, ParticlePool};
pub use particle::Particle;
pub use plane::Plane;
