use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use log::{debug, info};
use parking_lot::RwLock;

use crate::{
    collision::{PairResolver, PlaneResolver},
    config::{validate_restitution, EngineConfig, TimestepMode, WindRay},
    core::{list::ParticleList, plane::Plane},
    dynamics::{apply_corrections, compute_forces, reset_forces, ForceRegistry, Integrator},
    error::{EngineError, EngineResult},
    render::DrawSink,
    utils::{
        logging::{warn_if_frame_budget_exceeded, PhaseTimer},
        pacer::Pacer,
        profiling::StepProfiler,
    },
};

/// Particle collection shared between the host and the engine.
pub type SharedParticles<L> = Arc<RwLock<L>>;

/// Summary of one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepReport {
    /// Time delta fed to the integrator.
    pub dt: f32,
    pub plane_contacts: usize,
    pub pair_contacts: usize,
    /// Alive particles after the lifecycle update.
    pub alive: usize,
}

/// Step orchestrator.
///
/// Holds a shared handle to an externally owned particle collection and the
/// registered planes. It never adds or removes particles itself; membership
/// changes only happen through [`ParticleList::update_life`].
pub struct Engine<L: ParticleList> {
    particles: SharedParticles<L>,
    planes: Vec<Arc<Plane>>,
    config: EngineConfig,
    forces: ForceRegistry,
    integrator: Integrator,
    pacer: Pacer,
    wind: Option<WindRay>,
    profiler: StepProfiler,
    steps: u64,
}

impl<L: ParticleList> Engine<L> {
    /// Creates an engine with the default configuration.
    pub fn new(particles: SharedParticles<L>) -> Self {
        let config = EngineConfig::default();
        Self {
            particles,
            planes: Vec::new(),
            forces: ForceRegistry::new(config.gravity),
            integrator: Integrator::new(),
            pacer: Pacer::new(Duration::from_secs_f32(config.min_interval)),
            wind: None,
            profiler: StepProfiler::default(),
            steps: 0,
            config,
        }
    }

    /// Creates an engine from a validated configuration. The particle mode
    /// of the configuration is forwarded to the collection.
    pub fn with_config(particles: SharedParticles<L>, config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        let mut engine = Self::new(particles);
        engine.forces.set_gravity(config.gravity);
        engine
            .pacer
            .set_min_interval(Duration::from_secs_f32(config.min_interval));
        engine.config = config;
        engine.particles.write().set_particle_mode(config.particle_mode);
        Ok(engine)
    }

    pub fn particles(&self) -> &SharedParticles<L> {
        &self.particles
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Registers a static plane. Planes are only ever appended.
    pub fn add_plane(&mut self, plane: Arc<Plane>) {
        debug!(
            "registered plane #{}: point {:?}, normal {:?}",
            self.planes.len(),
            plane.point(),
            plane.normal()
        );
        self.planes.push(plane);
    }

    pub fn planes(&self) -> &[Arc<Plane>] {
        &self.planes
    }

    pub fn restitution(&self) -> f32 {
        self.config.restitution
    }

    pub fn set_restitution(&mut self, restitution: f32) -> EngineResult<()> {
        validate_restitution(restitution)?;
        self.config.restitution = restitution;
        Ok(())
    }

    pub fn set_min_interval(&mut self, seconds: f32) -> EngineResult<()> {
        if !seconds.is_finite() || seconds <= 0.0 {
            return Err(EngineError::InvalidInterval(seconds));
        }
        self.config.min_interval = seconds;
        self.pacer.set_min_interval(Duration::from_secs_f32(seconds));
        Ok(())
    }

    pub fn set_timestep_mode(&mut self, mode: TimestepMode) {
        self.config.timestep = mode;
    }

    pub fn particle_mode(&self) -> bool {
        self.config.particle_mode
    }

    /// Toggles inter-particle collisions off (`true`) or on (`false`) and
    /// tells the collection to switch its lifecycle policy.
    pub fn set_particle_mode(&mut self, enabled: bool) {
        info!("particle mode {}", if enabled { "on" } else { "off" });
        self.config.particle_mode = enabled;
        self.particles.write().set_particle_mode(enabled);
    }

    pub fn enable_wind(&mut self, ray: WindRay) {
        info!("wind enabled: origin {:?}, direction {:?}", ray.origin, ray.direction);
        self.wind = Some(ray);
    }

    pub fn disable_wind(&mut self) {
        if self.wind.take().is_some() {
            info!("wind disabled");
        }
    }

    /// Configured wind ray. Stored only; it does not contribute a force.
    pub fn wind(&self) -> Option<&WindRay> {
        self.wind.as_ref()
    }

    pub fn forces(&self) -> &ForceRegistry {
        &self.forces
    }

    pub fn forces_mut(&mut self) -> &mut ForceRegistry {
        &mut self.forces
    }

    pub fn alive_count(&self) -> usize {
        self.particles.read().alive_count()
    }

    /// Timings of the most recent step.
    pub fn profiler(&self) -> &StepProfiler {
        &self.profiler
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Advances one frame: waits until the minimum interval has elapsed since
    /// the previous frame, then steps with the delta chosen by the
    /// [`TimestepMode`].
    pub fn update(&mut self) -> StepReport {
        let elapsed = self.pacer.wait();
        let dt = match self.config.timestep {
            TimestepMode::Fixed => self.config.min_interval,
            TimestepMode::Variable => elapsed.as_secs_f32(),
        };
        self.step(dt)
    }

    /// Runs the pipeline once with an explicit `dt`, without pacing.
    pub fn step(&mut self, dt: f32) -> StepReport {
        let started = Instant::now();
        let mut profiler = StepProfiler::default();
        let particles = Arc::clone(&self.particles);
        let mut list = particles.write();

        reset_forces(list.particles_mut());
        {
            let _timer = PhaseTimer::new("collision::planes", &mut profiler.plane_collision_time);
            profiler.plane_contacts = PlaneResolver::new(self.config.restitution)
                .resolve(&self.planes, list.particles_mut());
        }
        if !self.config.particle_mode {
            let _timer = PhaseTimer::new("collision::pairs", &mut profiler.pair_collision_time);
            profiler.pair_contacts =
                PairResolver::new(self.config.restitution).resolve(list.particles_mut());
        }
        {
            let _timer = PhaseTimer::new("corrections", &mut profiler.correction_time);
            apply_corrections(list.particles_mut());
        }
        {
            let _timer = PhaseTimer::new("forces", &mut profiler.force_time);
            compute_forces(&self.forces, list.particles_mut(), dt);
        }
        {
            let _timer = PhaseTimer::new("integrator", &mut profiler.integrator_time);
            self.integrator.step(list.particles_mut(), dt);
        }
        {
            let _timer = PhaseTimer::new("lifecycle", &mut profiler.lifecycle_time);
            list.update_life();
        }
        profiler.alive_count = list.alive_count();
        drop(list);

        profiler.total_step_time = started.elapsed();
        self.profiler = profiler;
        self.steps += 1;
        warn_if_frame_budget_exceeded(profiler.total_step_time, self.config.frame_budget_ms);
        debug!(
            "step {}: dt {:.4} s, {} alive, {} plane / {} pair contacts",
            self.steps, dt, profiler.alive_count, profiler.plane_contacts, profiler.pair_contacts
        );

        StepReport {
            dt,
            plane_contacts: profiler.plane_contacts,
            pair_contacts: profiler.pair_contacts,
            alive: profiler.alive_count,
        }
    }

    /// Delegates drawing to the particle collection.
    pub fn draw(&self, sink: &mut dyn DrawSink) {
        self.particles.read().draw(sink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::particle::Particle;
    use glam::Vec3;

    fn shared(particles: Vec<Particle>) -> SharedParticles<Vec<Particle>> {
        Arc::new(RwLock::new(particles))
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = EngineConfig::default().with_restitution(2.0);
        assert!(matches!(
            Engine::with_config(shared(Vec::new()), config),
            Err(EngineError::InvalidRestitution(_))
        ));
    }

    #[test]
    fn setters_validate() {
        let mut engine = Engine::new(shared(Vec::new()));
        assert!(engine.set_restitution(-1.0).is_err());
        assert_eq!(engine.restitution(), 0.5);
        assert!(engine.set_restitution(0.9).is_ok());
        assert_eq!(engine.restitution(), 0.9);
        assert!(engine.set_min_interval(0.0).is_err());
    }

    #[test]
    fn wind_is_configuration_only() {
        let particle = Particle::point(Vec3::new(0.0, 10.0, 0.0), 1.0).unwrap();
        let mut with_wind = Engine::new(shared(vec![particle.clone()]));
        let mut without_wind = Engine::new(shared(vec![particle]));
        with_wind.enable_wind(WindRay::new(Vec3::ZERO, Vec3::X * 50.0));
        assert!(with_wind.wind().is_some());

        with_wind.step(0.01);
        without_wind.step(0.01);
        assert_eq!(
            with_wind.particles().read()[0],
            without_wind.particles().read()[0]
        );

        with_wind.disable_wind();
        assert!(with_wind.wind().is_none());
    }

    #[test]
    fn step_counts_and_profiles() {
        let mut engine = Engine::new(shared(vec![Particle::point(Vec3::Y, 1.0).unwrap()]));
        let report = engine.step(0.02);
        assert_eq!(report.dt, 0.02);
        assert_eq!(report.alive, 1);
        assert_eq!(engine.steps(), 1);
        assert_eq!(engine.profiler().alive_count, 1);
    }
}
