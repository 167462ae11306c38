use crate::primitives::material::Material;
use crate::primitives::vector::{Point3, Vec3};

/// Result of one ray test. Lives for a single trace step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitRec {
    pub t: f64,
    pub point: Point3,
    pub normal: Vec3,
    pub material: Material,
}

impl HitRec {
    pub fn new(t: f64, point: Point3, normal: Vec3, material: Material) -> Self {
        HitRec { t, point, normal, material }
    }
}
