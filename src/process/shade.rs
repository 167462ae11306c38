use cgmath::InnerSpace;

use crate::primitives::color::Rgb;
use crate::primitives::hit::HitRec;
use crate::primitives::light::PointLight;

/// Squared cosine between the surface normal and the direction to the light,
/// zero for surfaces facing away. Occluders are ignored.
pub fn brightness(hit: &HitRec, light: &PointLight) -> f64 {
    let to_light = (light.position - hit.point).normalize();
    let diffuse = hit.normal.dot(to_light).max(0.0);
    diffuse * diffuse
}

/// Local colour of a hit: base colour times brightness. No ambient term, so
/// an unlit surface is black.
pub fn shade(hit: &HitRec, light: &PointLight) -> Rgb {
    hit.material.color.scaled(brightness(hit, light))
}
