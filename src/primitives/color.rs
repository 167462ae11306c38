#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Every channel multiplied by `brightness`, truncated and clamped.
    pub fn scaled(&self, brightness: f64) -> Rgb {
        Rgb {
            r: clamp_channel(self.r as f64 * brightness),
            g: clamp_channel(self.g as f64 * brightness),
            b: clamp_channel(self.b as f64 * brightness),
        }
    }

    /// `(1 - reflectivity) * local + reflectivity * reflected`, per channel.
    pub fn blend(local: Rgb, reflected: Rgb, reflectivity: f64) -> Rgb {
        let mix = |l: u8, r: u8| (1.0 - reflectivity) * l as f64 + reflectivity * r as f64;
        Rgb {
            r: clamp_channel(mix(local.r, reflected.r)),
            g: clamp_channel(mix(local.g, reflected.g)),
            b: clamp_channel(mix(local.b, reflected.b)),
        }
    }
}

/// Truncates toward zero, then clamps into `0..=255`. NaN maps to 0.
pub fn clamp_channel(value: f64) -> u8 {
    (value as i64).clamp(0, 255) as u8
}
