pub mod config;
pub mod primitives;
pub mod process;

use std::iter;
use std::path::Path;

use anyhow::Context;
use winit::{
    event::*,
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

use config::RenderConfig;
use primitives::light::{LightController, PointLight};
use primitives::pixel_buffer::PixelBuffer;
use primitives::scene::Scene;
use process::pipeline::create_pipeline;

pub use process::render::{render, Renderer};

pub struct State {
    surface: wgpu::Surface,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: winit::dpi::PhysicalSize<u32>,
    render_pipeline: wgpu::RenderPipeline,
    frame_bind_group: wgpu::BindGroup,
    frame_texture: wgpu::Texture,
    window: Window,
    renderer: Renderer,
    pixels: PixelBuffer,
    light: PointLight,
    light_controller: LightController,
    stale: bool,
}

impl State {
    async fn new(window: Window, render_config: &RenderConfig) -> anyhow::Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = unsafe { instance.create_surface(&window) }
            .context("failed to create a surface for the window")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no graphics adapter can present to this window")?;

        let info = adapter.get_info();
        log::info!("{} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: None,
                    features: wgpu::Features::empty(),
                    limits: wgpu::Limits::downlevel_defaults(),
                },
                None,
            )
            .await
            .context("failed to open the graphics device")?;

        let surface_caps = surface.get_capabilities(&adapter);

        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .context("surface reports no texture formats")?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
        };

        surface.configure(&device, &config);

        // FRAME
        let renderer = Renderer::new(Scene::mirror_box(), render_config.max_depth);
        let pixels = PixelBuffer::new(render_config.size);
        let light = render_config.light();
        let light_controller = LightController::new(size, render_config.light[2]);

        let frame_texture = pixels.to_texture(&device);
        let frame_view = frame_texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        // RENDER PIPELINE
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Blit Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("./shaders/blit.wgsl").into()),
        });
        let (render_pipeline, frame_bind_group) =
            create_pipeline(&device, &shader, config.format, &frame_view, &sampler);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
            render_pipeline,
            frame_bind_group,
            frame_texture,
            window,
            renderer,
            pixels,
            light,
            light_controller,
            stale: true,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            // The frame keeps its size, only the cursor mapping follows the window.
            self.light_controller.resize(new_size);
        }
    }

    fn input(&mut self, event: &WindowEvent) -> bool {
        let moved = self.light_controller.process_events(event, &mut self.light);
        if moved {
            self.stale = true;
        }
        moved
    }

    /// Retraces the whole frame if the light moved since the last upload.
    fn update(&mut self) {
        if !self.stale {
            return;
        }
        self.renderer.render_into(&mut self.pixels, &self.light);
        self.pixels.update_texture(&self.frame_texture, &self.queue);
        self.stale = false;
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_pipeline(&self.render_pipeline);
            render_pass.set_bind_group(0, &self.frame_bind_group, &[]);
            render_pass.draw(0..6, 0..1);
        }

        self.queue.submit(iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

/// Renders a single frame without opening a window and writes it to `path`.
/// The image format follows the file extension.
pub fn render_to_file(config: &RenderConfig, path: &Path) -> anyhow::Result<()> {
    config.validate()?;
    let renderer = Renderer::new(Scene::mirror_box(), config.max_depth);
    let pixels = renderer.render(config.size, &config.light());
    let image = pixels
        .to_image()
        .context("pixel buffer does not match its dimensions")?;
    image
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("wrote {}x{} frame to {}", config.width(), config.height(), path.display());
    Ok(())
}

/// Opens the window and re-renders the frame whenever the cursor moves the
/// light. Only returns on setup failure.
pub async fn run(render_config: RenderConfig) -> anyhow::Result<()> {
    render_config.validate()?;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Mirror Box")
        .with_inner_size(winit::dpi::PhysicalSize::new(
            render_config.width(),
            render_config.height(),
        ))
        .with_resizable(false)
        .build(&event_loop)
        .context("failed to open a window")?;

    let mut state = State::new(window, &render_config).await?;
    log::info!(
        "rendering {}x{} at depth {}",
        render_config.width(),
        render_config.height(),
        render_config.max_depth
    );
    state.window().request_redraw();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == state.window().id() => {
                if state.input(event) {
                    state.window().request_redraw();
                } else {
                    match event {
                        WindowEvent::CloseRequested
                        | WindowEvent::KeyboardInput {
                            input:
                                KeyboardInput {
                                    state: ElementState::Pressed,
                                    virtual_keycode: Some(VirtualKeyCode::Escape),
                                    ..
                                },
                            ..
                        } => *control_flow = ControlFlow::Exit,
                        WindowEvent::Resized(physical_size) => {
                            state.resize(*physical_size);
                        }
                        WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                            state.resize(**new_inner_size);
                        }
                        _ => {}
                    }
                }
            }
            Event::RedrawRequested(window_id) if window_id == state.window().id() => {
                state.update();
                match state.render() {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        state.resize(state.size)
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Surface out of memory");
                        *control_flow = ControlFlow::Exit
                    }
                    Err(wgpu::SurfaceError::Timeout) => log::warn!("Surface timeout"),
                }
            }
            _ => {}
        }
    })
}
