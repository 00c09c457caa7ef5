use std::sync::Arc;

use parking_lot::RwLock;
use particle_engine::*;

fn main() -> Result<(), EngineError> {
    env_logger::init();

    let mut pool = ParticlePool::new(8);
    for i in 0..5 {
        let particle = Particle::new(Vec3::new(i as f32 * 0.3, 1.0 + i as f32 * 0.6, 0.0), 1.0, 0.2)?
            .with_velocity(Vec3::new(0.2, 0.0, 0.0));
        pool.insert(particle);
    }
    let particles = Arc::new(RwLock::new(pool));

    let config = EngineConfig::default().with_restitution(0.7);
    let mut engine = Engine::with_config(Arc::clone(&particles), config)?;
    engine.add_plane(Arc::new(Plane::ground()));
    engine.add_plane(Arc::new(Plane::new(Vec3::new(-1.0, 0.0, 0.0), Vec3::X)?));
    engine.add_plane(Arc::new(Plane::new(Vec3::new(2.5, 0.0, 0.0), -Vec3::X)?));

    for frame in 0..200 {
        let report = engine.update();
        if frame % 20 == 0 {
            let heights: Vec<String> = particles
                .read()
                .particles()
                .iter()
                .map(|p| format!("{:.2}", p.position.y))
                .collect();
            println!(
                "frame {frame:3}: contacts {}/{} heights [{}]",
                report.plane_contacts,
                report.pair_contacts,
                heights.join(", ")
            );
        }
    }
    engine.profiler().report();
    Ok(())
}
