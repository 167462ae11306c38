use crate::primitives::color::Rgb;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    pub color: Rgb,
    /// In `[0, 1]`. Weight of the mirror bounce against the local shading.
    pub reflectivity: f64,
}

impl Material {
    pub const fn new(color: Rgb, reflectivity: f64) -> Self {
        Material { color, reflectivity }
    }
}
