use glam::Vec3;

use crate::config::DEFAULT_GRAVITY;
use crate::core::particle::Particle;

/// Trait describing an external force applied to every alive particle.
pub trait ForceGenerator: Send + Sync {
    fn apply(&self, particle: &mut Particle, dt: f32);
}

/// Weight `(0, -m * g, 0)`.
#[derive(Debug, Clone, Copy)]
pub struct GravityForce {
    pub g: f32,
}

impl GravityForce {
    pub fn new(g: f32) -> Self {
        Self { g }
    }
}

impl Default for GravityForce {
    fn default() -> Self {
        Self::new(DEFAULT_GRAVITY)
    }
}

impl ForceGenerator for GravityForce {
    fn apply(&self, particle: &mut Particle, _dt: f32) {
        let weight = Vec3::new(0.0, -particle.mass() * self.g, 0.0);
        particle.add_force(weight);
    }
}

/// Ordered set of forces summed into each particle's accumulator.
///
/// Gravity is always the first entry; hosts may register more.
pub struct ForceRegistry {
    gravity: GravityForce,
    forces: Vec<Box<dyn ForceGenerator>>,
}

impl Default for ForceRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_GRAVITY)
    }
}

impl ForceRegistry {
    pub fn new(g: f32) -> Self {
        Self {
            gravity: GravityForce::new(g),
            forces: Vec::new(),
        }
    }

    pub fn gravity(&self) -> f32 {
        self.gravity.g
    }

    pub fn set_gravity(&mut self, g: f32) {
        self.gravity.g = g;
    }

    pub fn add_force<F: ForceGenerator + 'static>(&mut self, force: F) {
        self.forces.push(Box::new(force));
    }

    /// Adds every registered force to every alive particle.
    pub fn apply_all(&self, particles: &mut [Particle], dt: f32) {
        for particle in particles.iter_mut().filter(|p| p.alive) {
            self.gravity.apply(particle, dt);
            for force in &self.forces {
                force.apply(particle, dt);
            }
        }
    }
}

/// Zeroes the force accumulator of every alive particle.
pub fn reset_forces(particles: &mut [Particle]) {
    for particle in particles.iter_mut().filter(|p| p.alive) {
        particle.reset_force();
    }
}

/// Resets then accumulates the forces of the current step.
pub fn compute_forces(registry: &ForceRegistry, particles: &mut [Particle], dt: f32) {
    reset_forces(particles);
    registry.apply_all(particles, dt);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Push(Vec3);

    impl ForceGenerator for Push {
        fn apply(&self, particle: &mut Particle, _dt: f32) {
            particle.add_force(self.0);
        }
    }

    #[test]
    fn gravity_scales_with_mass() {
        let mut particles = vec![Particle::point(Vec3::ZERO, 2.0).unwrap()];
        compute_forces(&ForceRegistry::default(), &mut particles, 0.01);
        assert_eq!(particles[0].force, Vec3::new(0.0, -2.0 * 9.81, 0.0));
    }

    #[test]
    fn compute_forces_discards_previous_step() {
        let mut particles = vec![Particle::point(Vec3::ZERO, 1.0).unwrap()];
        particles[0].add_force(Vec3::splat(100.0));
        compute_forces(&ForceRegistry::default(), &mut particles, 0.01);
        assert_eq!(particles[0].force, Vec3::new(0.0, -9.81, 0.0));
    }

    #[test]
    fn registered_forces_add_to_gravity() {
        let mut registry = ForceRegistry::new(10.0);
        registry.add_force(Push(Vec3::X));

        let mut particles = vec![Particle::point(Vec3::ZERO, 1.0).unwrap()];
        compute_forces(&registry, &mut particles, 0.01);
        assert_eq!(particles[0].force, Vec3::new(1.0, -10.0, 0.0));
    }

    #[test]
    fn dead_particles_keep_their_force() {
        let mut particle = Particle::point(Vec3::ZERO, 1.0).unwrap();
        particle.alive = false;
        particle.force = Vec3::X;
        let mut particles = vec![particle];
        compute_forces(&ForceRegistry::default(), &mut particles, 0.01);
        assert_eq!(particles[0].force, Vec3::X);
    }
}
