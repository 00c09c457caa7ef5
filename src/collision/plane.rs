use std::sync::Arc;

use log::trace;

use super::contact::Correction;
use crate::core::{particle::Particle, plane::Plane};

/// Detects particles that crossed a plane and computes their rebound.
#[derive(Debug, Clone, Copy)]
pub struct PlaneResolver {
    pub restitution: f32,
}

impl PlaneResolver {
    pub fn new(restitution: f32) -> Self {
        Self { restitution }
    }

    /// Correction for one (plane, particle) pair, or `None` when the contact
    /// point is on the positive side or exactly on the plane.
    ///
    /// The contact point is the center offset by the radius along -Y, so the
    /// sphere offset is only exact for horizontal planes. A single
    /// `(1 + e)` factor both cancels the penetration and adds the rebound.
    /// A NaN signed distance is treated as no contact.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn correction(&self, plane: &Plane, particle: &Particle) -> Option<Correction> {
        let contact = particle.contact_point();
        if !(plane.signed_distance(contact) < 0.0) {
            return None;
        }

        let normal = plane.normal();
        let on_plane = plane.project(contact);
        let normal_velocity = particle.velocity.dot(normal) * normal;
        let factor = 1.0 + self.restitution;

        Some(Correction::new(
            factor * (on_plane - contact),
            -factor * normal_velocity,
        ))
    }

    /// Accumulates corrections for every (plane, alive particle) pair and
    /// returns the number of contacts found.
    pub fn resolve(&self, planes: &[Arc<Plane>], particles: &mut [Particle]) -> usize {
        let mut contacts = 0;
        for plane in planes {
            for (index, particle) in particles.iter_mut().enumerate() {
                if !particle.alive {
                    continue;
                }
                if let Some(correction) = self.correction(plane, particle) {
                    trace!("plane contact: particle {index}, {correction:?}");
                    particle.add_position_correction(correction.position);
                    particle.add_velocity_correction(correction.velocity);
                    contacts += 1;
                }
            }
        }
        contacts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec3;

    fn falling(y: f32, radius: f32, vy: f32) -> Particle {
        Particle::new(Vec3::new(0.0, y, 0.0), 1.0, radius)
            .unwrap()
            .with_velocity(Vec3::new(1.0, vy, 0.0))
    }

    #[test]
    fn penetration_produces_rebound() {
        let resolver = PlaneResolver::new(0.5);
        let correction = resolver
            .correction(&Plane::ground(), &falling(-0.2, 0.0, -4.0))
            .expect("particle below ground collides");

        assert_relative_eq!(correction.position.y, 1.5 * 0.2, epsilon = 1e-6);
        assert_relative_eq!(correction.velocity.y, 1.5 * 4.0, epsilon = 1e-6);
        // Tangential velocity is untouched.
        assert_eq!(correction.velocity.x, 0.0);
    }

    #[test]
    fn radius_offsets_contact_point() {
        let resolver = PlaneResolver::new(0.0);
        let particle = falling(0.3, 0.5, -1.0);
        let correction = resolver
            .correction(&Plane::ground(), &particle)
            .expect("sphere bottom is below ground");
        assert_relative_eq!(correction.position.y, 0.2, epsilon = 1e-6);
    }

    #[test]
    fn touching_plane_is_not_a_collision() {
        let resolver = PlaneResolver::new(0.5);
        assert!(resolver
            .correction(&Plane::ground(), &falling(0.5, 0.5, -1.0))
            .is_none());
        assert!(resolver
            .correction(&Plane::ground(), &falling(2.0, 0.5, -1.0))
            .is_none());
    }

    #[test]
    fn non_finite_contact_point_is_not_a_collision() {
        let resolver = PlaneResolver::new(0.5);
        assert!(resolver
            .correction(&Plane::ground(), &falling(f32::NAN, 0.0, -1.0))
            .is_none());

        let mut particles = vec![falling(f32::NAN, 0.0, -1.0), falling(-0.1, 0.0, -1.0)];
        let contacts =
            PlaneResolver::new(0.5).resolve(&[Arc::new(Plane::ground())], &mut particles);
        assert_eq!(contacts, 1);
        assert_eq!(particles[0].position_correction(), Vec3::ZERO);
    }

    #[test]
    fn corrections_from_several_planes_accumulate() {
        let floor = Arc::new(Plane::ground());
        let wall = Arc::new(Plane::new(Vec3::ZERO, Vec3::X).unwrap());
        let mut particles = vec![Particle::point(Vec3::new(-0.1, -0.1, 0.0), 1.0)
            .unwrap()
            .with_velocity(Vec3::new(-1.0, -1.0, 0.0))];

        let contacts = PlaneResolver::new(0.0).resolve(&[floor, wall], &mut particles);
        assert_eq!(contacts, 2);
        assert_relative_eq!(particles[0].position_correction().x, 0.1, epsilon = 1e-6);
        assert_relative_eq!(particles[0].position_correction().y, 0.1, epsilon = 1e-6);
        assert_relative_eq!(particles[0].velocity_correction().x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(particles[0].velocity_correction().y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn dead_particles_are_skipped() {
        let mut particle = falling(-1.0, 0.0, -1.0);
        particle.alive = false;
        let mut particles = vec![particle];
        let contacts =
            PlaneResolver::new(0.5).resolve(&[Arc::new(Plane::ground())], &mut particles);
        assert_eq!(contacts, 0);
        assert_eq!(particles[0].position_correction(), Vec3::ZERO);
    }
}
