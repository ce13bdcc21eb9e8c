//! wgpu backend for the viewport.
//!
//! Provides device acquisition, offscreen render targets and the concrete
//! [`SceneRenderer`](crate::renderer::SceneRenderer) implementation.

/// Shared wgpu boilerplate helpers for full-screen pipelines.
pub mod pipeline_helpers;
/// wgpu device and queue initialization.
pub mod render_context;
/// wgpu-backed scene renderer.
pub mod scene_renderer;
/// Offscreen render-target texture.
pub mod texture;

pub use render_context::{RenderContext, RenderContextError};
pub use scene_renderer::{GpuTarget, WgpuSceneRenderer};
pub use texture::RenderTarget;
