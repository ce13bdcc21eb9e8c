//! Shipped option presets parse and keep their overrides.

use std::path::PathBuf;

use scene_viewport::input::MoveAction;
use scene_viewport::options::Options;

fn preset_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/viewport_presets")
}

#[test]
fn presets_are_listed() {
    let names = Options::list_presets(&preset_dir());
    assert_eq!(names, vec!["arrows".to_owned(), "default".to_owned()]);
}

#[test]
fn default_preset_matches_defaults() {
    let options = Options::load(&preset_dir().join("default.toml")).unwrap();
    assert_eq!(options, Options::default());
}

#[test]
fn partial_preset_fills_the_rest() {
    let options = Options::load(&preset_dir().join("arrows.toml")).unwrap();
    assert_eq!(options.camera.fovy, 60.0);
    assert_eq!(options.camera.move_speed, 0.5);
    assert_eq!(options.camera.look_sensitivity, 0.1);
    assert_eq!(options.viewport, Options::default().viewport);
    assert_eq!(
        options.keybindings.key_for(MoveAction::Forward),
        Some("ArrowUp")
    );
}
