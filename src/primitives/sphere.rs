use cgmath::InnerSpace;

use crate::primitives::hit::HitRec;
use crate::primitives::material::Material;
use crate::primitives::ray::Ray;
use crate::primitives::vector::Point3;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub center: Point3,
    pub radius: f64,
    pub material: Material,
}

impl Sphere {
    pub fn new(center: Point3, radius: f64, material: Material) -> Self {
        Sphere { center, radius, material }
    }

    /// Nearest non-negative root of the ray/sphere quadratic.
    ///
    /// When the near root lies behind the origin the far root is used, so a
    /// ray starting inside the sphere reports where it leaves, not where it
    /// entered. The normal always points away from the center.
    pub fn hit(&self, ray: &Ray) -> Option<HitRec> {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * oc.dot(ray.direction);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        let mut t = (-b - sqrt_d) / (2.0 * a);
        if t < 0.0 {
            t = (-b + sqrt_d) / (2.0 * a);
        }
        if t < 0.0 {
            return None;
        }

        let point = ray.at(t);
        let normal = (point - self.center).normalize();
        Some(HitRec::new(t, point, normal, self.material))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::primitives::color::Rgb;
    use crate::primitives::vector::Vec3;

    fn red_sphere() -> Sphere {
        Sphere::new(
            Point3::new(0.0, 0.0, -1.0),
            0.5,
            Material::new(Rgb::new(200, 50, 50), 0.3),
        )
    }

    #[test]
    fn test_hit_toward_center() {
        let sphere = red_sphere();
        let origin = Point3::new(0.3, -0.2, 2.0);
        let direction = (sphere.center - origin).normalize();
        let hit = sphere.hit(&Ray::new(origin, direction)).expect("aimed at the center");

        let expected_t = (sphere.center - origin).magnitude() - sphere.radius;
        assert!((hit.t - expected_t).abs() < 1e-9);
        let expected_normal = (hit.point - sphere.center).normalize();
        assert!((hit.normal - expected_normal).magnitude() < 1e-12);
        assert!((hit.normal.magnitude() - 1.0).abs() < 1e-12);
        assert_eq!(hit.material, sphere.material);
    }

    #[test]
    fn test_hit_from_camera() {
        let hit = red_sphere()
            .hit(&Ray::new(Point3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0)))
            .unwrap();
        assert!((hit.t - 0.5).abs() < 1e-12);
        assert!((hit.point - Point3::new(0.0, 0.0, -0.5)).magnitude() < 1e-12);
        assert!((hit.normal - Vec3::new(0.0, 0.0, 1.0)).magnitude() < 1e-12);
    }

    #[test]
    fn test_miss() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        assert!(red_sphere().hit(&ray).is_none());
    }

    #[test]
    fn test_sphere_behind_ray() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(red_sphere().hit(&ray).is_none());
    }

    #[test]
    fn test_origin_inside_reports_exit() {
        // Starting at the center the near root is negative, the far root wins.
        let sphere = red_sphere();
        let ray = Ray::new(sphere.center, Vec3::new(0.0, 0.0, -1.0));
        let hit = sphere.hit(&ray).unwrap();
        assert!((hit.t - 0.5).abs() < 1e-12);
        assert!((hit.point - Point3::new(0.0, 0.0, -1.5)).magnitude() < 1e-12);
        // outward, i.e. pointing the same way as the ray
        assert!((hit.normal - Vec3::new(0.0, 0.0, -1.0)).magnitude() < 1e-12);
    }
}
