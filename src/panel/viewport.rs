use crate::camera::FlyCamera;
use crate::error::ViewportError;
use crate::input::{InputEvent, InputState, MouseButton};
use crate::options::{KeybindingOptions, Options, ViewportOptions};
use crate::renderer::{FrameParams, PanelSize, SceneRenderer};
use crate::scene::{EntityId, EntityLookup};

/// egui id of the scene window, independent of its title.
pub const WINDOW_ID: &str = "scene_viewport";

/// Label shown when nothing (or nothing live) is selected.
pub const NO_SELECTION: &str = "No entity selected.";

/// Overlay text for `selected`: `"<name> (<id>)"`, or [`NO_SELECTION`] when
/// there is no selection or the id no longer resolves.
pub fn selection_label(
    scene: &dyn EntityLookup,
    selected: Option<EntityId>,
) -> String {
    selected
        .and_then(|id| {
            scene.entity_name(id).map(|name| format!("{name} ({id})"))
        })
        .unwrap_or_else(|| NO_SELECTION.to_owned())
}

/// UV rect mapping the offscreen image upside down. Renderers write rows
/// bottom-up (see [`CameraUniform`](crate::camera::CameraUniform)), so this
/// displays them the right way round.
#[must_use]
pub fn flipped_uv() -> egui::Rect {
    egui::Rect::from_min_max(egui::pos2(0.0, 1.0), egui::pos2(1.0, 0.0))
}

/// Focus decided by a pointer press this frame: `Some(true)` if the press
/// started on the scene image (and not on a window above it), `Some(false)`
/// for a press anywhere else, `None` without a press.
fn press_focus(ctx: &egui::Context, image: &egui::Response) -> Option<bool> {
    let origin = ctx.input(|i| {
        i.pointer.any_pressed().then(|| i.pointer.press_origin())
    })?;
    Some(origin.is_some_and(|pos| {
        image.rect.contains(pos) && ctx.layer_id_at(pos) == Some(image.layer_id)
    }))
}

/// The scene window: a free-fly camera rendered offscreen and shown as an
/// image, with the current selection overlaid.
///
/// Call order per frame: [`handle_event`](Self::handle_event) for each
/// queued event, [`update`](Self::update), then [`show`](Self::show).
pub struct ViewportPanel<R: SceneRenderer> {
    camera: FlyCamera,
    input: InputState,
    keybindings: KeybindingOptions,
    options: ViewportOptions,
    focused: bool,
    open: bool,
    panel_size: PanelSize,
    image_rect: egui::Rect,
    target: R::Target,
}

impl<R: SceneRenderer> ViewportPanel<R> {
    /// Build the panel and allocate its offscreen target at the configured
    /// initial size.
    ///
    /// Before the first layout pass the panel may have no size at all; the
    /// target is then allocated at 1x1 and grown on the first update that
    /// sees a real size.
    ///
    /// # Errors
    ///
    /// Fails if the renderer cannot allocate the target.
    pub fn new(
        renderer: &mut R,
        options: &Options,
    ) -> Result<Self, ViewportError> {
        let panel_size = PanelSize::from(options.viewport.initial_size);
        let target = renderer.create_target(panel_size.at_least_one())?;
        log::debug!(
            "viewport '{}' initialized at {}x{}",
            options.viewport.title,
            panel_size.width,
            panel_size.height
        );
        Ok(Self {
            camera: FlyCamera::new(&options.camera),
            input: InputState::new(),
            keybindings: options.keybindings.clone(),
            options: options.viewport.clone(),
            focused: false,
            open: true,
            panel_size,
            image_rect: egui::Rect::NOTHING,
            target,
        })
    }

    /// Feed one input event.
    ///
    /// Held state is always tracked. Pointer motion turns the camera only
    /// while the panel is focused and the primary button is held.
    pub fn handle_event(&mut self, event: &InputEvent) {
        let Some(delta) = self.input.apply(event) else {
            return;
        };
        if self.focused && self.input.button_down(MouseButton::Left) {
            self.camera.look(delta.x, delta.y);
        }
    }

    /// Advance the camera and render the scene into the offscreen target.
    ///
    /// A zero-sized panel (collapsed, closed or not yet laid out) skips the
    /// renderer entirely.
    ///
    /// # Errors
    ///
    /// Propagates target reallocation and render failures.
    pub fn update(
        &mut self,
        renderer: &mut R,
        selected: Option<EntityId>,
    ) -> Result<(), ViewportError> {
        self.camera.update_direction();
        if self.focused {
            self.camera.step(self.keybindings.movement(&self.input));
        }

        let size = self.panel_size;
        if size.is_empty() {
            log::trace!("viewport has no area, skipping render");
            return Ok(());
        }
        if renderer.target_size(&self.target) != size {
            log::debug!(
                "resizing viewport target to {}x{}",
                size.width,
                size.height
            );
            renderer.resize_target(&mut self.target, size)?;
        }
        renderer.resize(size);

        let frame = FrameParams {
            position: self.camera.position(),
            direction: self.camera.direction(),
            fov_degrees: self.camera.fovy(),
            size,
            selected,
            editor_mode: self.options.editor_mode,
        };
        renderer.render(&self.target, &frame)
    }

    /// Draw the scene window and measure its size and focus for the next
    /// update.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        renderer: &R,
        scene: &dyn EntityLookup,
        selected: Option<EntityId>,
    ) {
        let texture_id = renderer.texture_id(&self.target);
        let label = selection_label(scene, selected);
        let [ox, oy] = self.options.overlay_offset;
        let offset = egui::vec2(ox, oy);

        let mut open = self.open;
        let shown = egui::Window::new(self.options.title.as_str())
            .id(egui::Id::new(WINDOW_ID))
            .open(&mut open)
            .frame(
                egui::Frame::window(&ctx.style())
                    .inner_margin(egui::Margin::ZERO),
            )
            .scroll(false)
            .show(ctx, |ui| {
                let (response, painter) = ui.allocate_painter(
                    ui.available_size(),
                    egui::Sense::click_and_drag(),
                );
                let _ = painter.image(
                    texture_id,
                    response.rect,
                    flipped_uv(),
                    egui::Color32::WHITE,
                );
                let _ = painter.text(
                    response.rect.min + offset,
                    egui::Align2::LEFT_TOP,
                    label,
                    egui::FontId::proportional(14.0),
                    egui::Color32::WHITE,
                );
                response
            });
        self.open = open;

        match shown.and_then(|window| window.inner) {
            Some(response) => {
                let size = PanelSize::from_points(
                    response.rect.size(),
                    ctx.pixels_per_point(),
                );
                let focused = press_focus(ctx, &response)
                    .unwrap_or(self.focused);
                self.image_rect = response.rect;
                self.set_layout(size, focused);
            }
            None => {
                self.image_rect = egui::Rect::NOTHING;
                self.set_layout(PanelSize::default(), false);
            }
        }
    }

    /// Record the measured panel size and focus. [`show`](Self::show) does
    /// this every frame; hosts laying out the panel themselves call it
    /// directly.
    pub fn set_layout(&mut self, size: PanelSize, focused: bool) {
        if focused != self.focused {
            log::trace!("viewport focus: {focused}");
        }
        self.panel_size = size;
        self.focused = focused;
    }

    /// The free-fly camera.
    pub fn camera(&self) -> &FlyCamera {
        &self.camera
    }

    /// Mutable access to the camera, e.g. to frame an entity.
    pub fn camera_mut(&mut self) -> &mut FlyCamera {
        &mut self.camera
    }

    /// Held keys and buttons.
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Whether pointer and keyboard input currently drive the camera.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the scene window is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open flag, for window menus. Closing drops focus on the next
    /// [`show`](Self::show).
    pub fn open_mut(&mut self) -> &mut bool {
        &mut self.open
    }

    /// Panel size measured by the last layout pass.
    pub fn panel_size(&self) -> PanelSize {
        self.panel_size
    }

    /// Screen rect of the scene image from the last [`show`](Self::show),
    /// in points. [`egui::Rect::NOTHING`] while the window is hidden.
    pub fn image_rect(&self) -> egui::Rect {
        self.image_rect
    }

    /// The offscreen target.
    pub fn target(&self) -> &R::Target {
        &self.target
    }

    /// Presentation options the panel was built with.
    pub fn options(&self) -> &ViewportOptions {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::EntityRegistry;

    #[derive(Default)]
    struct NullRenderer {
        renders: usize,
    }

    impl SceneRenderer for NullRenderer {
        type Target = PanelSize;

        fn create_target(
            &mut self,
            size: PanelSize,
        ) -> Result<PanelSize, ViewportError> {
            Ok(size)
        }

        fn resize_target(
            &mut self,
            target: &mut PanelSize,
            size: PanelSize,
        ) -> Result<(), ViewportError> {
            *target = size;
            Ok(())
        }

        fn target_size(&self, target: &PanelSize) -> PanelSize {
            *target
        }

        fn resize(&mut self, _size: PanelSize) {}

        fn render(
            &mut self,
            _target: &PanelSize,
            _frame: &FrameParams,
        ) -> Result<(), ViewportError> {
            self.renders += 1;
            Ok(())
        }

        fn texture_id(&self, _target: &PanelSize) -> egui::TextureId {
            egui::TextureId::User(1)
        }
    }

    fn panel() -> (NullRenderer, ViewportPanel<NullRenderer>) {
        let mut renderer = NullRenderer::default();
        let panel =
            ViewportPanel::new(&mut renderer, &Options::default()).unwrap();
        (renderer, panel)
    }

    #[test]
    fn zero_initial_size_allocates_one_pixel() {
        let (renderer, panel) = panel();
        assert_eq!(
            renderer.target_size(panel.target()),
            PanelSize::new(1, 1)
        );
        assert!(panel.panel_size().is_empty());
    }

    #[test]
    fn label_names_live_selection() {
        let mut registry = EntityRegistry::new();
        let _ = registry.spawn("Camera").unwrap();
        let cube = registry.spawn("Cube").unwrap();
        assert_eq!(selection_label(&registry, Some(cube)), "Cube (1)");
        assert_eq!(selection_label(&registry, None), NO_SELECTION);
    }

    #[test]
    fn label_treats_stale_id_as_no_selection() {
        let mut registry = EntityRegistry::new();
        let id = registry.spawn("Light").unwrap();
        let _ = registry.despawn(id);
        assert_eq!(selection_label(&registry, Some(id)), NO_SELECTION);
    }

    #[test]
    fn uv_is_flipped_vertically() {
        let uv = flipped_uv();
        assert_eq!(uv.min, egui::pos2(0.0, 1.0));
        assert_eq!(uv.max, egui::pos2(1.0, 0.0));
    }

    #[test]
    fn drag_requires_focus_and_primary_button() {
        let (_, mut panel) = panel();
        let yaw = panel.camera().yaw();

        panel.handle_event(&InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        panel.handle_event(&InputEvent::PointerMoved { dx: 10.0, dy: 0.0 });
        assert_eq!(panel.camera().yaw(), yaw);

        panel.set_layout(PanelSize::new(100, 100), true);
        panel.handle_event(&InputEvent::PointerMoved { dx: 10.0, dy: 0.0 });
        assert!((panel.camera().yaw() - (yaw + 1.0)).abs() < 1e-5);

        panel.handle_event(&InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        });
        panel.handle_event(&InputEvent::PointerMoved { dx: 10.0, dy: 0.0 });
        assert!((panel.camera().yaw() - (yaw + 1.0)).abs() < 1e-5);
    }

    #[test]
    fn update_skips_render_without_area() {
        let (mut renderer, mut panel) = panel();
        panel.update(&mut renderer, None).unwrap();
        assert_eq!(renderer.renders, 0);

        panel.set_layout(PanelSize::new(64, 48), false);
        panel.update(&mut renderer, None).unwrap();
        assert_eq!(renderer.renders, 1);
        assert_eq!(
            renderer.target_size(panel.target()),
            PanelSize::new(64, 48)
        );
    }
}
