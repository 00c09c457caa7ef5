use std::sync::Arc;

use parking_lot::RwLock;
use particle_engine::*;

fn main() -> Result<(), EngineError> {
    env_logger::init();

    let emitter = Emitter::new(Vec3::new(0.0, 0.1, 0.0), Vec3::new(0.0, 6.0, 0.0), 0.05, 0.02)?
        .with_rate(8)
        .with_spread(1.5);
    let pool = ParticlePool::new(2_000)
        .with_emitter(emitter)
        .with_lifetime(150);
    let particles = Arc::new(RwLock::new(pool));

    let config = EngineConfig::default()
        .with_particle_mode(true)
        .with_restitution(0.3);
    let mut engine = Engine::with_config(Arc::clone(&particles), config)?;
    engine.add_plane(Arc::new(Plane::ground()));
    engine.enable_wind(WindRay::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)));

    let mut sink = RecordingSink::new();
    for frame in 0..300 {
        engine.update();
        if frame % 50 == 0 {
            sink.clear();
            engine.draw(&mut sink);
            println!("frame {frame:3}: {} spheres drawn", sink.spheres.len());
        }
    }
    engine.profiler().report();
    Ok(())
}
