use super::viewport::NO_SELECTION;
use crate::scene::{EntityId, EntityLookup, EntityRegistry};

/// Shows the selected entity's id and lets the user rename it.
///
/// Edits go to a scratch buffer and are committed on Enter; blank names are
/// rejected and the field reverts.
#[derive(Debug, Clone, Default)]
pub struct InspectorPanel {
    editing: Option<EntityId>,
    buffer: String,
}

impl InspectorPanel {
    /// Create an inspector with nothing loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the inspector window.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        open: &mut bool,
        registry: &mut EntityRegistry,
        selected: Option<EntityId>,
    ) {
        let _ = egui::Window::new("Inspector").open(open).show(ctx, |ui| {
            let Some(id) = selected.filter(|id| registry.contains(*id)) else {
                self.editing = None;
                let _ = ui.label(NO_SELECTION);
                return;
            };
            self.load(registry, id);

            let _ = ui.label(format!("Entity {id}"));
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.buffer).hint_text("Name"),
            );
            let submitted = response.lost_focus()
                && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if submitted {
                let _ = self.commit(registry);
            }
        });
    }

    /// Write the buffer back as the entity's name. Returns `true` if the
    /// name changed.
    pub fn commit(&mut self, registry: &mut EntityRegistry) -> bool {
        let Some(id) = self.editing else {
            return false;
        };
        if registry.rename(id, &self.buffer) {
            log::debug!("renamed entity {id} to '{}'", self.buffer.trim());
            true
        } else {
            // Blank or unchanged: show the stored name again.
            self.editing = None;
            self.load(registry, id);
            false
        }
    }

    /// Text currently in the name field.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Scratch text for the name field.
    pub fn buffer_mut(&mut self) -> &mut String {
        &mut self.buffer
    }

    /// Entity whose name is loaded into the buffer.
    pub fn editing(&self) -> Option<EntityId> {
        self.editing
    }

    /// Point the buffer at `id`, refreshing it on selection change.
    pub fn load(&mut self, registry: &EntityRegistry, id: EntityId) {
        if self.editing == Some(id) {
            return;
        }
        self.editing = Some(id);
        registry
            .entity_name(id)
            .unwrap_or_default()
            .clone_into(&mut self.buffer);
    }
}
