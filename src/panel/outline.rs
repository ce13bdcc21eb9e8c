use crate::scene::{EntityId, EntityRegistry};

/// Draw the entity list. Clicking a row selects that entity.
pub fn show_outline(
    ctx: &egui::Context,
    open: &mut bool,
    registry: &EntityRegistry,
    selection: &mut Option<EntityId>,
) {
    let _ = egui::Window::new("Outline").open(open).show(ctx, |ui| {
        if registry.is_empty() {
            let _ = ui.weak("Scene is empty.");
            return;
        }
        for (id, name) in registry.iter() {
            let selected = *selection == Some(id);
            if ui.selectable_label(selected, name).clicked() && !selected {
                log::debug!("selected entity {id}");
                *selection = Some(id);
            }
        }
    });
}
