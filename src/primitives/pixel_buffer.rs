use crate::primitives::color::Rgb;

/// Row-major RGB frame. The size is fixed at construction and every render
/// pass overwrites all of it.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<Rgb>,
}

impl PixelBuffer {
    pub fn new(size: [u32; 2]) -> Self {
        Self {
            width: size[0],
            height: size[1],
            data: vec![Rgb::BLACK; size[0] as usize * size[1] as usize],
        }
    }

    pub fn size(&self) -> [u32; 2] {
        [self.width, self.height]
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(x < self.width && y < self.height, "pixel ({}, {}) out of bounds", x, y);
        y as usize * self.width as usize + x as usize
    }

    pub fn get(&self, x: u32, y: u32) -> Rgb {
        self.data[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, color: Rgb) {
        let i = self.index(x, y);
        self.data[i] = color;
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.data
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgb] {
        &mut self.data
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Opaque RGBA8, the layout the presentation texture expects.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() * 4);
        for px in &self.data {
            out.extend_from_slice(&[px.r, px.g, px.b, 255]);
        }
        out
    }

    pub fn extent(&self) -> wgpu::Extent3d {
        wgpu::Extent3d {
            width: self.width,
            height: self.height,
            depth_or_array_layers: 1,
        }
    }

    pub fn to_texture(&self, device: &wgpu::Device) -> wgpu::Texture {
        device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Frame Texture"),
            size: self.extent(),
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        })
    }

    pub fn update_texture(&self, texture: &wgpu::Texture, queue: &wgpu::Queue) {
        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &self.to_rgba8(),
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * self.width),
                rows_per_image: Some(self.height),
            },
            self.extent(),
        );
    }

    pub fn to_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.as_bytes().to_vec())
    }
}
