//! Drawing hook. The engine holds no geometry logic; it hands a [`DrawSink`]
//! to the particle collection, which decides what to emit.

use glam::Vec3;

/// Receives the primitives a particle collection wants drawn.
pub trait DrawSink {
    fn sphere(&mut self, center: Vec3, radius: f32);
}

/// Sink that discards everything, for headless runs.
#[derive(Debug, Default)]
pub struct NoopSink;

impl NoopSink {
    pub fn new() -> Self {
        Self
    }
}

impl DrawSink for NoopSink {
    fn sphere(&mut self, _center: Vec3, _radius: f32) {}
}

/// Sink that records every sphere it receives.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub spheres: Vec<(Vec3, f32)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.spheres.clear();
    }
}

impl DrawSink for RecordingSink {
    fn sphere(&mut self, center: Vec3, radius: f32) {
        self.spheres.push((center, radius));
    }
}
