use cgmath::InnerSpace;

pub type Vec3 = cgmath::Vector3<f64>;
pub type Point3 = cgmath::Point3<f64>;

/// Below this `|d·n|` a ray counts as parallel to a plane.
pub const EPSILON_PARALLEL: f64 = 1e-6;
/// Distance a bounce ray is pushed off the surface along its normal.
pub const EPSILON_OFFSET: f64 = 1e-4;

/// Mirror `direction` about `normal`. Both must be non-degenerate, the
/// result is normalized.
pub fn reflect(direction: Vec3, normal: Vec3) -> Vec3 {
    (direction - normal * (2.0 * direction.dot(normal))).normalize()
}
