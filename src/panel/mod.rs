//! egui panels: the scene viewport and the editor windows around it.

mod editor;
mod inspector;
mod menu;
mod outline;
mod viewport;

pub use editor::Editor;
pub use inspector::InspectorPanel;
pub use menu::PanelSet;
pub use outline::show_outline;
pub use viewport::{
    flipped_uv, selection_label, ViewportPanel, NO_SELECTION, WINDOW_ID,
};
