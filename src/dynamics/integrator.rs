use crate::core::particle::Particle;

/// Explicit Euler: position advances with the velocity at the start of the
/// step, then velocity advances with the accumulated force.
#[derive(Debug, Clone, Copy, Default)]
pub struct Integrator;

impl Integrator {
    pub fn new() -> Self {
        Self
    }

    pub fn integrate(&self, particle: &mut Particle, dt: f32) {
        particle.position += particle.velocity * dt;
        particle.velocity += particle.force / particle.mass() * dt;
    }

    pub fn step(&self, particles: &mut [Particle], dt: f32) {
        for particle in particles.iter_mut().filter(|p| p.alive) {
            self.integrate(particle, dt);
        }
    }
}
