//! Renderer abstraction for the scene viewport.
//!
//! The panel never talks to a graphics API directly. It drives a
//! [`SceneRenderer`], which owns the offscreen targets it hands out and
//! knows how the UI should reference them. [`crate::gpu`] provides the wgpu
//! implementation.

mod frame;

pub use frame::{FrameParams, PanelSize};

use crate::error::ViewportError;

/// Capability interface for rendering the scene into an offscreen target.
///
/// Lifecycle, as driven by [`ViewportPanel`](crate::panel::ViewportPanel):
/// `create_target` once at init, then every frame `resize_target` (only
/// when the panel size changed), `resize`, and `render`.
pub trait SceneRenderer {
    /// Offscreen color target plus whatever backs it.
    type Target;

    /// Allocate a target of `size`. `size` is never zero.
    fn create_target(
        &mut self,
        size: PanelSize,
    ) -> Result<Self::Target, ViewportError>;

    /// Reallocate `target` at `size`. `size` is never zero.
    fn resize_target(
        &mut self,
        target: &mut Self::Target,
        size: PanelSize,
    ) -> Result<(), ViewportError>;

    /// Current dimensions of `target`.
    fn target_size(&self, target: &Self::Target) -> PanelSize;

    /// Resize the renderer's output viewport.
    fn resize(&mut self, size: PanelSize);

    /// Render one frame of the scene into `target`.
    fn render(
        &mut self,
        target: &Self::Target,
        frame: &FrameParams,
    ) -> Result<(), ViewportError>;

    /// Texture handle the UI uses to display `target`.
    fn texture_id(&self, target: &Self::Target) -> egui::TextureId;
}
