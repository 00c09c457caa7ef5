//! Particle Engine – discrete-time sphere particle simulation.
//!
//! Each step resets forces, resolves plane and inter-particle collisions into
//! per-particle correction accumulators, commits those corrections, sums
//! gravity, and integrates with explicit Euler. Particle lifecycle and drawing
//! stay with the host-provided [`ParticleList`].
//!
//! ```no_run
//! use std::sync::Arc;
//! use parking_lot::RwLock;
//! use particle_engine::{Engine, Particle, ParticlePool, Plane, Vec3};
//!
//! let mut pool = ParticlePool::new(16);
//! pool.insert(Particle::new(Vec3::new(0.0, 2.0, 0.0), 1.0, 0.25).unwrap());
//!
//! let particles = Arc::new(RwLock::new(pool));
//! let mut engine = Engine::new(Arc::clone(&particles));
//! engine.add_plane(Arc::new(Plane::ground()));
//! loop {
//!     engine.update();
//! }
//! ```

pub mod collision;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod engine;
pub mod error;
pub mod render;
pub mod utils;

pub use glam::Vec3;

pub use collision::{Correction, PairCorrection, PairResolver, PlaneResolver};
pub use config::{EngineConfig, TimestepMode, WindRay};
pub use crate::core::{
    list::{Emitter, ParticleList, ParticlePool},
    particle::Particle,
    plane::Plane,
};
pub use dynamics::{ForceGenerator, ForceRegistry, GravityForce, Integrator};
pub use engine::{Engine, SharedParticles, StepReport};
pub use error::{EngineError, EngineResult};
pub use render::{DrawSink, NoopSink, RecordingSink};
