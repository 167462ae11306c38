use crate::primitives::color::Rgb;
use crate::primitives::hit::HitRec;
use crate::primitives::material::Material;
use crate::primitives::plane::Plane;
use crate::primitives::ray::Ray;
use crate::primitives::sphere::Sphere;
use crate::primitives::vector::{Point3, Vec3};

pub const SPHERE_RED: Rgb = Rgb::new(200, 50, 50);
pub const FLOOR_GRAY: Rgb = Rgb::new(100, 100, 100);
pub const CEILING_GRAY: Rgb = Rgb::new(150, 150, 150);
pub const WALL_BLUE: Rgb = Rgb::new(50, 50, 200);
pub const BACK_GREEN: Rgb = Rgb::new(50, 200, 50);

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
}

impl Primitive {
    pub fn hit(&self, ray: &Ray) -> Option<HitRec> {
        match self {
            Primitive::Sphere(sphere) => sphere.hit(ray),
            Primitive::Plane(plane) => plane.hit(ray),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(sphere: Sphere) -> Self {
        Primitive::Sphere(sphere)
    }
}

impl From<Plane> for Primitive {
    fn from(plane: Plane) -> Self {
        Primitive::Plane(plane)
    }
}

#[derive(Clone, Debug)]
pub struct Scene {
    objects: Vec<Primitive>,
}

impl Scene {
    pub fn new() -> Self {
        Scene { objects: Vec::new() }
    }

    /// The red sphere inside an open box: floor, ceiling, two side walls and
    /// a back wall. The box is open toward the camera.
    pub fn mirror_box() -> Self {
        let mut scene = Scene::new();
        scene.add(Sphere::new(
            Point3::new(0.0, 0.0, -1.0),
            0.5,
            Material::new(SPHERE_RED, 0.3),
        ));
        // floor
        scene.add(Plane::new(
            Point3::new(0.0, -0.7, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Material::new(FLOOR_GRAY, 0.2),
        ));
        // ceiling
        scene.add(Plane::new(
            Point3::new(0.0, 0.7, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            Material::new(CEILING_GRAY, 0.2),
        ));
        // left wall
        scene.add(Plane::new(
            Point3::new(-1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Material::new(WALL_BLUE, 0.2),
        ));
        // right wall
        scene.add(Plane::new(
            Point3::new(1.0, 0.0, 0.0),
            Vec3::new(-1.0, 0.0, 0.0),
            Material::new(WALL_BLUE, 0.2),
        ));
        // back wall
        scene.add(Plane::new(
            Point3::new(0.0, 0.0, -3.0),
            Vec3::new(0.0, 0.0, 1.0),
            Material::new(BACK_GREEN, 0.2),
        ));
        scene
    }

    pub fn add<P: Into<Primitive>>(&mut self, object: P) {
        self.objects.push(object.into());
    }

    pub fn objects(&self) -> &[Primitive] {
        &self.objects
    }

    /// The hit with the smallest `t` over every object. On a tie the object
    /// added first wins.
    pub fn closest_hit(&self, ray: &Ray) -> Option<HitRec> {
        let mut closest: Option<HitRec> = None;
        for object in &self.objects {
            if let Some(hit) = object.hit(ray) {
                let closer = match closest {
                    Some(best) => hit.t < best.t,
                    None => true,
                };
                if closer {
                    closest = Some(hit);
                }
            }
        }
        closest
    }
}

/// The mirror box.
impl Default for Scene {
    fn default() -> Self {
        Scene::mirror_box()
    }
}
