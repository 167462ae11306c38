use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;

use crate::primitives::vector::Point3;

pub const DEFAULT_LIGHT: [f64; 3] = [1.0, 1.0, -0.5];

/// Point light. Only its position matters: there is no intensity or falloff,
/// shading depends on the incidence angle alone.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointLight {
    pub position: Point3,
}

impl PointLight {
    pub fn new(position: Point3) -> Self {
        Self { position }
    }

    /// Maps a cursor position in window pixels into the camera's normalized
    /// space. `z` is passed through unchanged.
    pub fn from_cursor(x: f64, y: f64, width: u32, height: u32, z: f64) -> Self {
        let half_w = width as f64 / 2.0;
        let half_h = height as f64 / 2.0;
        Self::new(Point3::new((x - half_w) / half_w, (y - half_h) / half_h, z))
    }
}

impl Default for PointLight {
    fn default() -> Self {
        let [x, y, z] = DEFAULT_LIGHT;
        Self::new(Point3::new(x, y, z))
    }
}

impl From<[f64; 3]> for PointLight {
    fn from(p: [f64; 3]) -> Self {
        Self::new(Point3::new(p[0], p[1], p[2]))
    }
}

/// Moves the light with the mouse. The light keeps its depth, only x and y
/// follow the cursor.
pub struct LightController {
    size: PhysicalSize<u32>,
    depth: f64,
}

impl LightController {
    pub fn new(size: PhysicalSize<u32>, depth: f64) -> Self {
        Self { size, depth }
    }

    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        self.size = size;
    }

    /// Returns true when the event moved the light and the frame is stale.
    pub fn process_events(&self, event: &WindowEvent, light: &mut PointLight) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                if self.size.width == 0 || self.size.height == 0 {
                    return false;
                }
                let moved = PointLight::from_cursor(
                    position.x,
                    position.y,
                    self.size.width,
                    self.size.height,
                    self.depth,
                );
                if moved == *light {
                    return false;
                }
                *light = moved;
                true
            }
            _ => false,
        }
    }
}
