pub mod vector;
pub mod color;
pub mod material;
pub mod ray;
pub mod hit;
pub mod sphere;
pub mod plane;
pub mod scene;
pub mod camera;
pub mod light;
pub mod pixel_buffer;
