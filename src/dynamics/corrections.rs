use crate::core::particle::Particle;

/// Commits the pending corrections of every alive particle and clears them.
///
/// Runs once per step, after both collision resolvers and before forces are
/// computed. Calling it again with nothing accumulated is a no-op.
pub fn apply_corrections(particles: &mut [Particle]) {
    for particle in particles.iter_mut().filter(|p| p.alive) {
        particle.apply_corrections();
    }
}
