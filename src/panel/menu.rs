/// Open flags of the editor's auxiliary panels.
///
/// The scene window keeps its own flag (see
/// [`ViewportPanel::open_mut`](super::ViewportPanel::open_mut)); it is
/// passed in when the menu is drawn so all windows toggle from one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSet {
    /// Entity list.
    pub outline: bool,
    /// Selected-entity inspector.
    pub inspector: bool,
}

impl Default for PanelSet {
    fn default() -> Self {
        Self {
            outline: true,
            inspector: true,
        }
    }
}

impl PanelSet {
    /// Draw the top menu bar with a "Windows" menu toggling each panel.
    pub fn show_menu(&mut self, ctx: &egui::Context, scene_open: &mut bool) {
        let _ = egui::TopBottomPanel::top("editor_menu_bar").show(ctx, |ui| {
            let _ = egui::MenuBar::new().ui(ui, |ui| {
                let _ = ui.menu_button("Windows", |ui| {
                    self.window_toggles(ui, scene_open);
                });
            });
        });
    }

    fn window_toggles(&mut self, ui: &mut egui::Ui, scene_open: &mut bool) {
        let entries: [(&str, &mut bool); 3] = [
            ("Scene", scene_open),
            ("Outline", &mut self.outline),
            ("Inspector", &mut self.inspector),
        ];
        for (name, open) in entries {
            if ui.toggle_value(open, name).clicked() {
                let state = if *open { "opened" } else { "closed" };
                log::debug!("{name} window {state}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_panels_start_open() {
        let panels = PanelSet::default();
        assert!(panels.outline);
        assert!(panels.inspector);
    }

    #[test]
    fn menu_draws_headless() {
        let ctx = egui::Context::default();
        let mut panels = PanelSet::default();
        let mut scene_open = true;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            panels.show_menu(ctx, &mut scene_open);
        });
        assert!(scene_open);
        assert_eq!(panels, PanelSet::default());
    }
}
