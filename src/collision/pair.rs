use log::trace;

use super::contact::{Correction, PairCorrection};
use crate::core::particle::Particle;

/// Brute-force sphere/sphere impulse response over every alive pair.
#[derive(Debug, Clone, Copy)]
pub struct PairResolver {
    pub restitution: f32,
}

impl PairResolver {
    pub fn new(restitution: f32) -> Self {
        Self { restitution }
    }

    /// Corrections for an overlapping pair, `None` when the center distance
    /// is at least the sum of the radii.
    ///
    /// The separation `n = p2 - p1` is deliberately left unnormalized: its
    /// magnitude scales the impulse (through `n·n`) and the position push
    /// (through `d * n`), and the two terms are tuned together.
    ///
    /// A non-finite distance never counts as an overlap.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn correction(&self, first: &Particle, second: &Particle) -> Option<PairCorrection> {
        let n = second.position - first.position;
        let distance = n.length();
        let (r1, r2) = (first.radius(), second.radius());
        if !(distance < r1 + r2) {
            return None;
        }

        let (m1, m2) = (first.mass(), second.mass());
        let factor = 1.0 + self.restitution;
        let relative_velocity = second.velocity - first.velocity;

        let impulse = -factor * relative_velocity.dot(n) / (1.0 / m1 + 1.0 / m2) * n.dot(n);
        let depth = distance - r1 - r2;
        let total_mass = m1 + m2;

        Some(PairCorrection {
            first: Correction::new(
                factor * (m1 / total_mass) * depth * n,
                -(impulse / m1) * n,
            ),
            second: Correction::new(
                -factor * (m2 / total_mass) * depth * n,
                (impulse / m2) * n,
            ),
        })
    }

    /// Accumulates corrections for every unordered alive pair `i < j` and
    /// returns the number of overlapping pairs.
    pub fn resolve(&self, particles: &mut [Particle]) -> usize {
        let mut contacts = 0;
        for i in 0..particles.len() {
            let (head, tail) = particles.split_at_mut(i + 1);
            let first = &mut head[i];
            if !first.alive {
                continue;
            }
            for (offset, second) in tail.iter_mut().enumerate() {
                let j = i + 1 + offset;
                if !second.alive {
                    continue;
                }
                if let Some(pair) = self.correction(first, second) {
                    trace!("pair contact: ({i}, {j}), {pair:?}");
                    first.add_position_correction(pair.first.position);
                    first.add_velocity_correction(pair.first.velocity);
                    second.add_position_correction(pair.second.position);
                    second.add_velocity_correction(pair.second.velocity);
                    contacts += 1;
                }
            }
        }
        contacts
    }
}
