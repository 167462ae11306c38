use crate::primitives::color::Rgb;
use crate::primitives::light::PointLight;
use crate::primitives::ray::Ray;
use crate::primitives::scene::Scene;
use crate::primitives::vector::{reflect, EPSILON_OFFSET};
use crate::process::shade::shade;

pub const MAX_DEPTH: u32 = 3;
pub const BACKGROUND: Rgb = Rgb::BLACK;

/// Colour seen along `ray`, following at most `depth` mirror bounces.
///
/// The closest hit is shaded locally and blended with the colour seen along
/// the mirrored ray. With no bounce left the mirrored colour is black, so a
/// reflective surface still gives up `reflectivity` of its local colour.
pub fn trace(scene: &Scene, light: &PointLight, ray: &Ray, depth: u32) -> Rgb {
    let hit = match scene.closest_hit(ray) {
        Some(hit) => hit,
        None => return BACKGROUND,
    };

    let local = shade(&hit, light);
    let reflectivity = hit.material.reflectivity;
    if reflectivity <= 0.0 {
        return local;
    }

    let reflected = if depth > 0 {
        let bounce = Ray::new(
            hit.point + hit.normal * EPSILON_OFFSET,
            reflect(ray.direction, hit.normal),
        );
        trace(scene, light, &bounce, depth - 1)
    } else {
        BACKGROUND
    };
    Rgb::blend(local, reflected, reflectivity)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::primitives::material::Material;
    use crate::primitives::plane::Plane;
    use crate::primitives::sphere::Sphere;
    use crate::primitives::vector::{Point3, Vec3};
    use cgmath::InnerSpace;

    fn camera_ray() -> Ray {
        Ray::new(Point3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0).normalize())
    }

    /// Black mirror floor with a matte sphere that is only visible through it.
    fn mirror_floor_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add(Plane::new(
            Point3::new(0.0, -1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Material::new(Rgb::BLACK, 1.0),
        ));
        scene.add(Sphere::new(
            Point3::new(0.0, 1.0, -3.0),
            0.5,
            Material::new(Rgb::new(0, 200, 0), 0.0),
        ));
        scene
    }

    #[test]
    fn test_miss_is_black() {
        let scene = Scene::mirror_box();
        let ray = Ray::new(Point3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        for depth in 0..=MAX_DEPTH {
            assert_eq!(trace(&scene, &PointLight::default(), &ray, depth), BACKGROUND);
        }
        assert_eq!(trace(&Scene::new(), &PointLight::default(), &camera_ray(), MAX_DEPTH), Rgb::BLACK);
    }

    #[test]
    fn test_camera_ray_hits_sphere_front() {
        let scene = Scene::mirror_box();
        let hit = scene.closest_hit(&camera_ray()).unwrap();
        assert!((hit.t - 0.5).abs() < 1e-12);
        assert!((hit.point - Point3::new(0.0, 0.0, -0.5)).magnitude() < 1e-12);
        assert!((hit.normal - Vec3::new(0.0, 0.0, 1.0)).magnitude() < 1e-12);

        // The default light sits level with the hit point, at 90 degrees to
        // the normal, and the bounce leaves through the open front.
        let color = trace(&scene, &PointLight::new(Point3::new(1.0, 1.0, -0.5)), &camera_ray(), MAX_DEPTH);
        assert_eq!(color, Rgb::BLACK);
    }

    #[test]
    fn test_lit_sphere_blends_with_black_bounce() {
        let scene = Scene::mirror_box();
        let light = PointLight::new(Point3::new(0.0, 0.0, 0.5));
        let hit = scene.closest_hit(&camera_ray()).unwrap();
        let local = shade(&hit, &light);
        assert_eq!(local, Rgb::new(200, 50, 50));

        let color = trace(&scene, &light, &camera_ray(), MAX_DEPTH);
        assert_eq!(color, Rgb::blend(local, Rgb::BLACK, 0.3));
    }

    #[test]
    fn test_depth_zero_blends_with_black() {
        let scene = Scene::mirror_box();
        let light = PointLight::new(Point3::new(0.0, 0.0, 0.5));
        let hit = scene.closest_hit(&camera_ray()).unwrap();
        assert_eq!(shade(&hit, &light), Rgb::new(200, 50, 50));
        // 0.7 of the lit sphere, nothing from the mirrored ray
        assert_eq!(trace(&scene, &light, &camera_ray(), 0), Rgb::new(140, 35, 35));

        let down = Ray::new(Point3::new(0.0, 0.0, 0.0), Vec3::new(0.0, -1.0, -1.0).normalize());
        let hit = scene.closest_hit(&down).unwrap();
        assert_eq!(
            trace(&scene, &light, &down, 0),
            Rgb::blend(shade(&hit, &light), Rgb::BLACK, hit.material.reflectivity)
        );
    }

    #[test]
    fn test_matte_surface_ignores_depth() {
        let scene = mirror_floor_scene();
        let light = PointLight::new(Point3::new(0.0, -0.5, 0.0));
        let ray = Ray::new(
            Point3::new(0.0, 0.0, 0.0),
            (Point3::new(0.0, 1.0, -3.0) - Point3::new(0.0, 0.0, 0.0)).normalize(),
        );
        let hit = scene.closest_hit(&ray).unwrap();
        assert_eq!(hit.material.reflectivity, 0.0);
        for depth in 0..=MAX_DEPTH {
            assert_eq!(trace(&scene, &light, &ray, depth), shade(&hit, &light));
        }
    }

    #[test]
    fn test_mirror_shows_sphere() {
        let scene = mirror_floor_scene();
        let light = PointLight::new(Point3::new(0.0, -0.5, 0.0));
        let ray = Ray::new(Point3::new(0.0, 0.0, 0.0), Vec3::new(0.0, -1.0, -1.0).normalize());

        // The floor itself is black.
        assert_eq!(trace(&scene, &light, &ray, 0), Rgb::BLACK);

        let hit = scene.closest_hit(&ray).unwrap();
        let bounce = Ray::new(
            hit.point + hit.normal * EPSILON_OFFSET,
            reflect(ray.direction, hit.normal),
        );
        let seen = trace(&scene, &light, &bounce, 0);
        assert!(seen.g > 0);
        assert_eq!(trace(&scene, &light, &ray, 1), seen);
    }

    #[test]
    fn test_white_sphere_every_reflectivity() {
        // Saturated base colour with reflectivity swept over [0, 1].
        let light = PointLight::new(Point3::new(0.0, 0.0, 0.5));
        for step in 0..=10 {
            let reflectivity = step as f64 / 10.0;
            let mut scene = Scene::new();
            scene.add(Sphere::new(
                Point3::new(0.0, 0.0, -1.0),
                0.5,
                Material::new(Rgb::new(255, 255, 255), reflectivity),
            ));
            for wall in &Scene::mirror_box().objects()[1..] {
                scene.add(*wall);
            }
            // The bounce leaves through the open front, so every depth sees
            // black in the mirror.
            let expected = Rgb::blend(Rgb::new(255, 255, 255), Rgb::BLACK, reflectivity);
            for depth in 0..=MAX_DEPTH {
                assert_eq!(trace(&scene, &light, &camera_ray(), depth), expected);
            }
        }
    }
}
