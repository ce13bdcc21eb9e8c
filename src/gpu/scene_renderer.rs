//! wgpu implementation of [`SceneRenderer`].

use glam::Vec3;
use wgpu::util::DeviceExt;

use super::pipeline_helpers::{create_screen_space_pipeline, uniform_buffer};
use super::render_context::RenderContext;
use super::texture::{RenderTarget, TARGET_FORMAT};
use crate::camera::{Camera, CameraUniform};
use crate::error::ViewportError;
use crate::options::Options;
use crate::renderer::{FrameParams, PanelSize, SceneRenderer};

/// Offscreen target owned by the viewport panel.
pub struct GpuTarget {
    target: RenderTarget,
    generation: u64,
}

impl GpuTarget {
    /// Texture view to register with the UI backend.
    pub fn view(&self) -> &wgpu::TextureView {
        &self.target.view
    }

    /// Underlying texture (for read-back).
    pub fn texture(&self) -> &wgpu::Texture {
        &self.target.texture
    }

    /// Bumped every time the texture is reallocated. A host registering the
    /// view with its egui backend re-registers when this changes.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Renders the editor scene (clear + ground grid) into offscreen targets.
pub struct WgpuSceneRenderer {
    context: RenderContext,
    camera_uniform: CameraUniform,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    grid_pipeline: wgpu::RenderPipeline,
    clear_color: wgpu::Color,
    znear: f32,
    zfar: f32,
    size: PanelSize,
    texture_id: egui::TextureId,
    next_generation: u64,
}

impl WgpuSceneRenderer {
    /// Build the renderer's GPU resources on `context`.
    pub fn new(context: RenderContext, options: &Options) -> Self {
        let camera_uniform = CameraUniform::new();
        let camera_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Viewport Camera Buffer"),
                contents: bytemuck::cast_slice(&[camera_uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Viewport Camera Layout"),
                entries: &[uniform_buffer(0)],
            },
        );
        let camera_bind_group =
            context.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Viewport Camera Bind Group"),
                layout: &layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                }],
            });

        let shader = context.device.create_shader_module(
            wgpu::ShaderModuleDescriptor {
                label: Some("Grid Shader"),
                source: wgpu::ShaderSource::Wgsl(
                    include_str!("../../assets/shaders/grid.wgsl").into(),
                ),
            },
        );
        let grid_pipeline = create_screen_space_pipeline(
            &context.device,
            "Grid",
            &shader,
            TARGET_FORMAT,
            Some(wgpu::BlendState::ALPHA_BLENDING),
            &[&layout],
        );

        let [r, g, b, a] = options.viewport.clear_color;
        Self {
            context,
            camera_uniform,
            camera_buffer,
            camera_bind_group,
            grid_pipeline,
            clear_color: wgpu::Color {
                r: f64::from(r),
                g: f64::from(g),
                b: f64::from(b),
                a: f64::from(a),
            },
            znear: options.camera.znear,
            zfar: options.camera.zfar,
            size: PanelSize::default(),
            texture_id: egui::TextureId::default(),
            next_generation: 0,
        }
    }

    /// The device and queue this renderer draws with.
    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    /// Set the handle the host's egui backend assigned to the current
    /// target view.
    pub fn set_texture_id(&mut self, id: egui::TextureId) {
        self.texture_id = id;
    }

    /// Output viewport size from the last [`SceneRenderer::resize`].
    pub fn size(&self) -> PanelSize {
        self.size
    }

    fn allocate(
        &mut self,
        size: PanelSize,
    ) -> Result<GpuTarget, ViewportError> {
        let size = size.at_least_one();
        let max = self.context.max_texture_dimension();
        if size.width > max || size.height > max {
            log::warn!(
                "rejecting {}x{} viewport target (max {max})",
                size.width,
                size.height
            );
            return Err(ViewportError::TargetTooLarge {
                width: size.width,
                height: size.height,
                max,
            });
        }
        let generation = self.next_generation;
        self.next_generation += 1;
        log::debug!(
            "allocating viewport target {}x{} (generation {generation})",
            size.width,
            size.height
        );
        Ok(GpuTarget {
            target: RenderTarget::new(&self.context.device, size),
            generation,
        })
    }
}

impl SceneRenderer for WgpuSceneRenderer {
    type Target = GpuTarget;

    fn create_target(
        &mut self,
        size: PanelSize,
    ) -> Result<GpuTarget, ViewportError> {
        self.allocate(size)
    }

    fn resize_target(
        &mut self,
        target: &mut GpuTarget,
        size: PanelSize,
    ) -> Result<(), ViewportError> {
        if target.target.size() == size.at_least_one() {
            return Ok(());
        }
        *target = self.allocate(size)?;
        Ok(())
    }

    fn target_size(&self, target: &GpuTarget) -> PanelSize {
        target.target.size()
    }

    fn resize(&mut self, size: PanelSize) {
        self.size = size;
    }

    fn render(
        &mut self,
        target: &GpuTarget,
        frame: &FrameParams,
    ) -> Result<(), ViewportError> {
        let camera = Camera {
            eye: frame.position,
            forward: frame.direction,
            up: Vec3::Y,
            aspect: frame.size.aspect(),
            fovy: frame.fov_degrees,
            znear: self.znear,
            zfar: self.zfar,
        };
        self.camera_uniform.update_view_proj(&camera);
        self.camera_uniform
            .update_frame_flags(frame.selected, frame.editor_mode);
        self.context.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[self.camera_uniform]),
        );

        let mut encoder = self.context.create_encoder();
        {
            let mut pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Viewport Scene Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: target.view(),
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(self.clear_color),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        },
                    )],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });
            if frame.editor_mode {
                pass.set_pipeline(&self.grid_pipeline);
                pass.set_bind_group(0, &self.camera_bind_group, &[]);
                pass.draw(0..3, 0..1);
            }
        }
        self.context.submit(encoder);
        log::trace!(
            "rendered viewport frame {}x{}",
            frame.size.width,
            frame.size.height
        );
        Ok(())
    }

    fn texture_id(&self, _target: &GpuTarget) -> egui::TextureId {
        self.texture_id
    }
}
