use cgmath::InnerSpace;

use crate::primitives::hit::HitRec;
use crate::primitives::material::Material;
use crate::primitives::ray::Ray;
use crate::primitives::vector::{Point3, Vec3, EPSILON_PARALLEL};

/// Infinite plane through `point`. The stored normal is reported as is and
/// never flipped toward the incoming ray.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane {
    pub point: Point3,
    pub normal: Vec3,
    pub material: Material,
}

impl Plane {
    pub fn new(point: Point3, normal: Vec3, material: Material) -> Self {
        Plane { point, normal, material }
    }

    pub fn hit(&self, ray: &Ray) -> Option<HitRec> {
        let denom = ray.direction.dot(self.normal);
        if denom.abs() < EPSILON_PARALLEL {
            return None;
        }

        let t = (self.point - ray.origin).dot(self.normal) / denom;
        if t < 0.0 {
            return None;
        }

        Some(HitRec::new(t, ray.at(t), self.normal, self.material))
    }
}
