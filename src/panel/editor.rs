use super::inspector::InspectorPanel;
use super::menu::PanelSet;
use super::outline::show_outline;
use super::viewport::ViewportPanel;
use crate::error::ViewportError;
use crate::input::InputEvent;
use crate::options::Options;
use crate::renderer::SceneRenderer;
use crate::scene::{EntityId, EntityRegistry};

/// The scene window plus the panels around it, sharing one selection.
pub struct Editor<R: SceneRenderer> {
    viewport: ViewportPanel<R>,
    registry: EntityRegistry,
    selection: Option<EntityId>,
    panels: PanelSet,
    inspector: InspectorPanel,
}

impl<R: SceneRenderer> Editor<R> {
    /// Create an editor over `registry`.
    ///
    /// # Errors
    ///
    /// Fails if the viewport target cannot be allocated.
    pub fn new(
        renderer: &mut R,
        options: &Options,
        registry: EntityRegistry,
    ) -> Result<Self, ViewportError> {
        Ok(Self {
            viewport: ViewportPanel::new(renderer, options)?,
            registry,
            selection: None,
            panels: PanelSet::default(),
            inspector: InspectorPanel::new(),
        })
    }

    /// Forward an input event to the viewport.
    pub fn handle_event(&mut self, event: &InputEvent) {
        self.viewport.handle_event(event);
    }

    /// Per-frame viewport update with the current selection.
    ///
    /// # Errors
    ///
    /// Propagates viewport render failures.
    pub fn update(&mut self, renderer: &mut R) -> Result<(), ViewportError> {
        self.viewport.update(renderer, self.selection)
    }

    /// Draw the menu bar and every open window.
    pub fn show(&mut self, ctx: &egui::Context, renderer: &R) {
        self.panels.show_menu(ctx, self.viewport.open_mut());
        show_outline(
            ctx,
            &mut self.panels.outline,
            &self.registry,
            &mut self.selection,
        );
        self.inspector.show(
            ctx,
            &mut self.panels.inspector,
            &mut self.registry,
            self.selection,
        );
        self.viewport
            .show(ctx, renderer, &self.registry, self.selection);
    }

    /// Current selection.
    pub fn selection(&self) -> Option<EntityId> {
        self.selection
    }

    /// Replace the selection.
    pub fn select(&mut self, selection: Option<EntityId>) {
        self.selection = selection;
    }

    /// The scene window.
    pub fn viewport(&self) -> &ViewportPanel<R> {
        &self.viewport
    }

    /// Mutable access to the scene window.
    pub fn viewport_mut(&mut self) -> &mut ViewportPanel<R> {
        &mut self.viewport
    }

    /// Entities shown in the outline.
    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    /// Mutable access to the entities.
    pub fn registry_mut(&mut self) -> &mut EntityRegistry {
        &mut self.registry
    }

    /// Auxiliary panel open flags.
    pub fn panels_mut(&mut self) -> &mut PanelSet {
        &mut self.panels
    }
}
