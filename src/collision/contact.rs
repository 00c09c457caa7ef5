use glam::Vec3;

/// Position and velocity deltas produced by one collision, to be added to a
/// particle's pending accumulators.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Correction {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl Correction {
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }

    pub fn is_zero(&self) -> bool {
        self.position == Vec3::ZERO && self.velocity == Vec3::ZERO
    }
}

/// Corrections for both particles of an overlapping pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PairCorrection {
    pub first: Correction,
    pub second: Correction,
}
