use glam::Vec3;
use log::debug;

use super::particle::Particle;
use crate::{error::EngineResult, render::DrawSink};

/// Ordered, indexable particle collection consumed by the engine.
///
/// The engine only mutates the physical state of the particles it is handed;
/// membership and life/death are the collection's business.
pub trait ParticleList {
    fn particles(&self) -> &[Particle];

    fn particles_mut(&mut self) -> &mut [Particle];

    /// Spawns and kills particles. Called once at the end of every step.
    fn update_life(&mut self);

    /// Notifies the collection that the engine switched particle mode.
    fn set_particle_mode(&mut self, enabled: bool);

    fn len(&self) -> usize {
        self.particles().len()
    }

    fn is_empty(&self) -> bool {
        self.particles().is_empty()
    }

    fn get(&self, index: usize) -> Option<&Particle> {
        self.particles().get(index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut Particle> {
        self.particles_mut().get_mut(index)
    }

    fn alive_count(&self) -> usize {
        self.particles().iter().filter(|p| p.alive).count()
    }

    /// Emits one sphere per alive particle.
    fn draw(&self, sink: &mut dyn DrawSink) {
        for particle in self.particles().iter().filter(|p| p.alive) {
            sink.sphere(particle.position, particle.radius());
        }
    }
}

impl ParticleList for Vec<Particle> {
    fn particles(&self) -> &[Particle] {
        self
    }

    fn particles_mut(&mut self) -> &mut [Particle] {
        self
    }

    fn update_life(&mut self) {}

    fn set_particle_mode(&mut self, _enabled: bool) {}
}

const GOLDEN_ANGLE: f32 = 2.399_963;

/// Spawns particles from a fixed origin, fanning their launch direction
/// around Y so consecutive particles do not stack.
#[derive(Debug, Clone)]
pub struct Emitter {
    template: Particle,
    pub velocity: Vec3,
    /// Horizontal speed added along the fan direction.
    pub spread: f32,
    /// Particles spawned per lifecycle update.
    pub rate: usize,
    emitted: u64,
}

impl Emitter {
    pub fn new(origin: Vec3, velocity: Vec3, mass: f32, radius: f32) -> EngineResult<Self> {
        Ok(Self {
            template: Particle::new(origin, mass, radius)?,
            velocity,
            spread: 0.0,
            rate: 1,
            emitted: 0,
        })
    }

    pub fn with_rate(mut self, rate: usize) -> Self {
        self.rate = rate;
        self
    }

    pub fn with_spread(mut self, spread: f32) -> Self {
        self.spread = spread;
        self
    }

    pub fn origin(&self) -> Vec3 {
        self.template.position
    }

    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    fn next_velocity(&mut self) -> Vec3 {
        let angle = self.emitted as f32 * GOLDEN_ANGLE;
        self.emitted += 1;
        self.velocity + Vec3::new(angle.cos(), 0.0, angle.sin()) * self.spread
    }

    fn spawn_into(&mut self, slot: &mut Particle) {
        let velocity = self.next_velocity();
        *slot = self.template.clone();
        slot.respawn(self.template.position, velocity);
    }

    fn spawn(&mut self) -> Particle {
        let velocity = self.next_velocity();
        self.template.clone().with_velocity(velocity)
    }
}

/// Default [`ParticleList`]: a bounded pool with an optional emitter.
///
/// In particle mode every particle dies after `lifetime` updates and its slot
/// is recycled by the emitter. Outside particle mode the population is
/// persistent and the emitter only fills free capacity.
#[derive(Debug, Clone)]
pub struct ParticlePool {
    particles: Vec<Particle>,
    capacity: usize,
    lifetime: u32,
    particle_mode: bool,
    emitter: Option<Emitter>,
}

impl ParticlePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            particles: Vec::with_capacity(capacity),
            capacity,
            lifetime: u32::MAX,
            particle_mode: false,
            emitter: None,
        }
    }

    pub fn with_emitter(mut self, emitter: Emitter) -> Self {
        self.emitter = Some(emitter);
        self
    }

    /// Number of updates a particle survives in particle mode.
    pub fn with_lifetime(mut self, lifetime: u32) -> Self {
        self.lifetime = lifetime;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn particle_mode(&self) -> bool {
        self.particle_mode
    }

    pub fn emitter(&self) -> Option<&Emitter> {
        self.emitter.as_ref()
    }

    /// Adds a particle, reusing a dead slot if any. Returns its index, or
    /// `None` when the pool is full.
    pub fn insert(&mut self, particle: Particle) -> Option<usize> {
        if let Some(index) = self.particles.iter().position(|p| !p.alive) {
            self.particles[index] = particle;
            return Some(index);
        }
        if self.particles.len() >= self.capacity {
            return None;
        }
        self.particles.push(particle);
        Some(self.particles.len() - 1)
    }

    pub fn kill(&mut self, index: usize) {
        if let Some(particle) = self.particles.get_mut(index) {
            particle.alive = false;
        }
    }

    fn age_and_expire(&mut self) -> usize {
        let mut expired = 0;
        for particle in self.particles.iter_mut().filter(|p| p.alive) {
            particle.age = particle.age.saturating_add(1);
            if self.particle_mode && particle.age >= self.lifetime {
                particle.alive = false;
                expired += 1;
            }
        }
        expired
    }

    fn emit(&mut self) -> usize {
        let Some(emitter) = self.emitter.as_mut() else {
            return 0;
        };
        let mut spawned = 0;
        let mut dead_slots = self.particles.iter_mut().filter(|p| !p.alive);
        while spawned < emitter.rate {
            match dead_slots.next() {
                Some(slot) => emitter.spawn_into(slot),
                None => break,
            }
            spawned += 1;
        }
        while spawned < emitter.rate && self.particles.len() < self.capacity {
            self.particles.push(emitter.spawn());
            spawned += 1;
        }
        spawned
    }
}

impl ParticleList for ParticlePool {
    fn particles(&self) -> &[Particle] {
        &self.particles
    }

    fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    fn update_life(&mut self) {
        let expired = self.age_and_expire();
        let spawned = self.emit();
        if expired > 0 || spawned > 0 {
            debug!("particle pool: {expired} expired, {spawned} spawned");
        }
    }

    fn set_particle_mode(&mut self, enabled: bool) {
        self.particle_mode = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingSink;

    fn particle_at(y: f32) -> Particle {
        Particle::new(Vec3::new(0.0, y, 0.0), 1.0, 0.1).unwrap()
    }

    #[test]
    fn insert_reuses_dead_slots_before_growing() {
        let mut pool = ParticlePool::new(2);
        assert_eq!(pool.insert(particle_at(1.0)), Some(0));
        assert_eq!(pool.insert(particle_at(2.0)), Some(1));
        assert_eq!(pool.insert(particle_at(3.0)), None);

        pool.kill(0);
        assert_eq!(pool.insert(particle_at(4.0)), Some(0));
        assert_eq!(pool.particles()[0].position.y, 4.0);
    }

    #[test]
    fn particles_only_expire_in_particle_mode() {
        let mut pool = ParticlePool::new(4).with_lifetime(2);
        pool.insert(particle_at(1.0));

        pool.update_life();
        pool.update_life();
        assert_eq!(pool.alive_count(), 1);

        pool.set_particle_mode(true);
        pool.update_life();
        assert_eq!(pool.alive_count(), 0);
    }

    #[test]
    fn emitter_fills_capacity_then_recycles() {
        let emitter = Emitter::new(Vec3::Y, Vec3::new(0.0, 5.0, 0.0), 1.0, 0.05)
            .unwrap()
            .with_rate(2)
            .with_spread(1.0);
        let mut pool = ParticlePool::new(3).with_emitter(emitter).with_lifetime(1);
        pool.set_particle_mode(true);

        pool.update_life();
        assert_eq!(pool.len(), 2);
        pool.update_life();
        // Both earlier particles expired; the two spawns reuse their slots.
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.alive_count(), 2);
        assert_eq!(pool.emitter().map(Emitter::emitted), Some(4));

        let speeds: Vec<Vec3> = pool.particles().iter().map(|p| p.velocity).collect();
        assert_ne!(speeds[0], speeds[1]);
    }

    #[test]
    fn draw_skips_dead_particles() {
        let mut pool = ParticlePool::new(3);
        pool.insert(particle_at(1.0));
        pool.insert(particle_at(2.0));
        pool.kill(1);

        let mut sink = RecordingSink::new();
        pool.draw(&mut sink);
        assert_eq!(sink.spheres, vec![(Vec3::new(0.0, 1.0, 0.0), 0.1)]);
    }
}
