use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Static half-space boundary. The positive side is where
/// `(q - point) · normal >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPlane")]
pub struct Plane {
    point: Vec3,
    normal: Vec3,
}

impl Plane {
    /// Builds a plane through `point`; `normal` is normalized.
    pub fn new(point: Vec3, normal: Vec3) -> EngineResult<Self> {
        let normal = normal.try_normalize().ok_or(EngineError::DegenerateNormal)?;
        Ok(Self { point, normal })
    }

    /// Horizontal plane `y = 0` facing up.
    pub fn ground() -> Self {
        Self {
            point: Vec3::ZERO,
            normal: Vec3::Y,
        }
    }

    pub fn point(&self) -> Vec3 {
        self.point
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn signed_distance(&self, query: Vec3) -> f32 {
        (query - self.point).dot(self.normal)
    }

    /// Orthogonal projection of `query` onto the plane.
    pub fn project(&self, query: Vec3) -> Vec3 {
        query - self.signed_distance(query) * self.normal
    }
}

#[derive(Deserialize)]
struct RawPlane {
    point: Vec3,
    normal: Vec3,
}

impl TryFrom<RawPlane> for Plane {
    type Error = EngineError;

    fn try_from(raw: RawPlane) -> EngineResult<Self> {
        Plane::new(raw.point, raw.normal)
    }
}
