use std::time::Instant;

use rayon::prelude::*;

use crate::primitives::camera::PinholeCamera;
use crate::primitives::light::PointLight;
use crate::primitives::pixel_buffer::PixelBuffer;
use crate::primitives::scene::Scene;
use crate::process::trace::{trace, MAX_DEPTH};

/// Full-frame renderer over a fixed scene.
///
/// Every pass is a pure function of the scene and the light it is handed, so
/// rendering the same light twice gives identical buffers. Rows are traced in
/// parallel; each pixel only reads the scene and the light.
#[derive(Clone, Debug)]
pub struct Renderer {
    scene: Scene,
    camera: PinholeCamera,
    max_depth: u32,
}

impl Renderer {
    pub fn new(scene: Scene, max_depth: u32) -> Self {
        Self {
            scene,
            camera: PinholeCamera::new(),
            max_depth,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Overwrites every pixel of `buffer`.
    pub fn render_into(&self, buffer: &mut PixelBuffer, light: &PointLight) {
        let [width, height] = buffer.size();
        if width == 0 || height == 0 {
            return;
        }

        let start = Instant::now();
        buffer
            .pixels_mut()
            .par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, pixel) in row.iter_mut().enumerate() {
                    let ray = self.camera.ray_for_pixel(x as u32, y as u32, width, height);
                    *pixel = trace(&self.scene, light, &ray, self.max_depth);
                }
            });

        log::debug!(
            "rendered {}x{} (depth {}) with light at {:?} in {:?}",
            width,
            height,
            self.max_depth,
            light.position,
            start.elapsed()
        );
    }

    pub fn render(&self, size: [u32; 2], light: &PointLight) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(size);
        self.render_into(&mut buffer, light);
        buffer
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::new(Scene::mirror_box(), MAX_DEPTH)
    }
}

/// Renders the mirror box at the default bounce depth.
pub fn render(width: u32, height: u32, light: &PointLight) -> PixelBuffer {
    Renderer::default().render([width, height], light)
}
