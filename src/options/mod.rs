//! Centralized viewport options with TOML preset support.
//!
//! Camera, viewport presentation and key bindings are consolidated here.
//! Options serialize to/from TOML for presets stored in
//! `assets/viewport_presets/`.

mod camera;
mod keybindings;
mod viewport;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use viewport::ViewportOptions;

use crate::error::ViewportError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Scene window presentation parameters.
    pub viewport: ViewportOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ViewportError> {
        let content = std::fs::read_to_string(path).map_err(ViewportError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| ViewportError::OptionsParse(e.to_string()))?;
        log::debug!("loaded viewport options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ViewportError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ViewportError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ViewportError::Io)?;
        }
        std::fs::write(path, content).map_err(ViewportError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputEvent, InputState, MoveAction};

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
move_speed = 0.5
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.move_speed, 0.5);
        // Everything else should be default
        assert_eq!(opts.camera.look_sensitivity, 0.1);
        assert_eq!(opts.camera.pitch_limit, 89.0);
        assert_eq!(opts.viewport.title, "Scene");
        assert_eq!(
            opts.keybindings.key_for(MoveAction::Forward),
            Some("KeyW")
        );
    }

    #[test]
    fn rebinding_replaces_default_map() {
        let toml_str = r#"
[keybindings.bindings]
forward = "ArrowUp"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("ArrowUp"), Some(MoveAction::Forward));
        assert_eq!(opts.keybindings.lookup("KeyW"), None);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyA"),
            Some(MoveAction::StrafeLeft)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn movement_reflects_held_keys() {
        let opts = Options::default();
        let mut input = InputState::new();
        let _ = input.apply(&InputEvent::Key {
            key: "KeyD".into(),
            pressed: true,
        });
        let movement = opts.keybindings.movement(&input);
        assert!(movement.right);
        assert!(!movement.forward && !movement.back && !movement.left);
    }

    #[test]
    fn save_then_load_preset() {
        let dir = std::env::temp_dir()
            .join(format!("scene-viewport-presets-{}", std::process::id()));
        let path = dir.join("wide.toml");
        let mut opts = Options::default();
        opts.camera.fovy = 110.0;
        opts.save(&path).unwrap();

        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded.camera.fovy, 110.0);
        assert_eq!(Options::list_presets(&dir), vec!["wide".to_owned()]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_rejects_malformed_toml() {
        let dir = std::env::temp_dir()
            .join(format!("scene-viewport-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        std::fs::write(&path, "[camera\nfovy = ").unwrap();
        assert!(matches!(
            Options::load(&path),
            Err(ViewportError::OptionsParse(_))
        ));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("viewport"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("look_sensitivity").is_some());
        assert!(camera.get("znear").is_none());
        assert!(camera.get("start_position").is_none());
    }
}
