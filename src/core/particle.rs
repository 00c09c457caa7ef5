use glam::Vec3;
use serde::Serialize;

use crate::error::{EngineError, EngineResult};

/// Point or sphere particle with kinematic state, a force accumulator and
/// pending collision corrections.
///
/// Corrections are accumulated by the collision resolvers during a step and
/// committed once by [`Particle::apply_corrections`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub force: Vec3,
    mass: f32,
    radius: f32,
    pub alive: bool,
    /// Number of lifecycle updates this particle has survived.
    pub age: u32,
    position_correction: Vec3,
    velocity_correction: Vec3,
}

impl Particle {
    /// Creates an alive particle at rest.
    pub fn new(position: Vec3, mass: f32, radius: f32) -> EngineResult<Self> {
        validate_mass(mass)?;
        validate_radius(radius)?;
        Ok(Self {
            position,
            velocity: Vec3::ZERO,
            force: Vec3::ZERO,
            mass,
            radius,
            alive: true,
            age: 0,
            position_correction: Vec3::ZERO,
            velocity_correction: Vec3::ZERO,
        })
    }

    /// Creates a point particle (radius 0).
    pub fn point(position: Vec3, mass: f32) -> EngineResult<Self> {
        Self::new(position, mass, 0.0)
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn set_mass(&mut self, mass: f32) -> EngineResult<()> {
        validate_mass(mass)?;
        self.mass = mass;
        Ok(())
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f32) -> EngineResult<()> {
        validate_radius(radius)?;
        self.radius = radius;
        Ok(())
    }

    pub fn reset_force(&mut self) {
        self.force = Vec3::ZERO;
    }

    pub fn add_force(&mut self, force: Vec3) {
        self.force += force;
    }

    pub fn add_position_correction(&mut self, correction: Vec3) {
        self.position_correction += correction;
    }

    pub fn add_velocity_correction(&mut self, correction: Vec3) {
        self.velocity_correction += correction;
    }

    pub fn position_correction(&self) -> Vec3 {
        self.position_correction
    }

    pub fn velocity_correction(&self) -> Vec3 {
        self.velocity_correction
    }

    /// Adds the pending corrections into the live state and clears them.
    pub fn apply_corrections(&mut self) {
        self.velocity += self.velocity_correction;
        self.position += self.position_correction;
        self.clear_corrections();
    }

    pub fn clear_corrections(&mut self) {
        self.position_correction = Vec3::ZERO;
        self.velocity_correction = Vec3::ZERO;
    }

    /// Lowest point of the sphere along Y.
    pub fn contact_point(&self) -> Vec3 {
        Vec3::new(self.position.x, self.position.y - self.radius, self.position.z)
    }

    /// Re-initialises a dead slot so it can be reused by a pool.
    pub fn respawn(&mut self, position: Vec3, velocity: Vec3) {
        self.position = position;
        self.velocity = velocity;
        self.force = Vec3::ZERO;
        self.alive = true;
        self.age = 0;
        self.clear_corrections();
    }
}

fn validate_mass(mass: f32) -> EngineResult<()> {
    if mass.is_finite() && mass > 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidMass(mass))
    }
}

fn validate_radius(radius: f32) -> EngineResult<()> {
    if radius.is_finite() && radius >= 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidRadius(radius))
    }
}
