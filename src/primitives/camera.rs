use cgmath::InnerSpace;

use crate::primitives::ray::Ray;
use crate::primitives::vector::{Point3, Vec3};

/// Fixed pinhole at the origin looking down -z. Pixel coordinates are mapped
/// straight to `[-1, 1]` on both axes, without aspect correction or a field of
/// view, and row 0 maps to `ny = -1`.
#[derive(Copy, Clone, Debug, Default)]
pub struct PinholeCamera;

impl PinholeCamera {
    pub fn new() -> Self {
        PinholeCamera
    }

    pub fn origin(&self) -> Point3 {
        Point3::new(0.0, 0.0, 0.0)
    }

    pub fn ray_for_pixel(&self, x: u32, y: u32, width: u32, height: u32) -> Ray {
        let half_w = width as f64 / 2.0;
        let half_h = height as f64 / 2.0;
        let nx = (x as f64 - half_w) / half_w;
        let ny = (y as f64 - half_h) / half_h;
        Ray::new(self.origin(), Vec3::new(nx, ny, -1.0).normalize())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_center_pixel_looks_down_z() {
        let ray = PinholeCamera::new().ray_for_pixel(400, 300, 800, 600);
        assert_eq!(ray.origin, Point3::new(0.0, 0.0, 0.0));
        assert!((ray.direction - Vec3::new(0.0, 0.0, -1.0)).magnitude() < 1e-12);
    }

    #[test]
    fn test_corner_pixel() {
        let ray = PinholeCamera::new().ray_for_pixel(0, 0, 800, 600);
        let expected = Vec3::new(-1.0, -1.0, -1.0).normalize();
        assert!((ray.direction - expected).magnitude() < 1e-12);
    }

    #[test]
    fn test_directions_are_unit() {
        let camera = PinholeCamera::new();
        for &(x, y) in &[(0, 0), (799, 0), (0, 599), (123, 456), (799, 599)] {
            let ray = camera.ray_for_pixel(x, y, 800, 600);
            assert!((ray.direction.magnitude() - 1.0).abs() < 1e-12);
        }
    }
}
