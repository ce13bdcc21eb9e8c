//! Offscreen color target the scene is rendered into.

use crate::renderer::PanelSize;

/// Color format of every viewport target.
pub const TARGET_FORMAT: wgpu::TextureFormat =
    wgpu::TextureFormat::Rgba8UnormSrgb;

/// A render-target texture and its default view.
///
/// Created with `RENDER_ATTACHMENT | TEXTURE_BINDING | COPY_SRC` so it can be
/// drawn into, sampled by the UI backend, and read back in tests.
pub struct RenderTarget {
    /// The underlying GPU texture.
    pub texture: wgpu::Texture,
    /// A default full-texture view.
    pub view: wgpu::TextureView,
    size: PanelSize,
}

impl RenderTarget {
    /// Create a render target. Zero dimensions are raised to one pixel.
    #[must_use]
    pub fn new(device: &wgpu::Device, size: PanelSize) -> Self {
        let size = size.at_least_one();
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Viewport Target"),
            size: wgpu::Extent3d {
                width: size.width,
                height: size.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: TARGET_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT
                | wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self {
            texture,
            view,
            size,
        }
    }

    /// Allocated dimensions.
    pub fn size(&self) -> PanelSize {
        self.size
    }
}
