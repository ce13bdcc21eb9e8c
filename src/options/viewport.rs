use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Viewport", inline)]
#[serde(default)]
/// Scene window presentation parameters.
pub struct ViewportOptions {
    /// Window title. Display only; the egui id is always
    /// [`WINDOW_ID`](crate::panel::WINDOW_ID).
    #[schemars(skip)]
    pub title: String,
    /// Show editor overlays (ground grid) in the rendered scene.
    #[schemars(title = "Editor Overlays")]
    pub editor_mode: bool,
    /// Background color of the offscreen target (linear RGBA).
    #[schemars(skip)]
    pub clear_color: [f32; 4],
    /// Offset of the selection label from the image's top-left corner, in
    /// points.
    #[schemars(skip)]
    pub overlay_offset: [f32; 2],
    /// Panel size in pixels assumed before the first layout pass.
    #[schemars(skip)]
    pub initial_size: [u32; 2],
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            title: "Scene".to_owned(),
            editor_mode: true,
            clear_color: [0.055, 0.063, 0.078, 1.0],
            overlay_offset: [16.0, 16.0],
            initial_size: [0, 0],
        }
    }
}
