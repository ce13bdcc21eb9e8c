use glam::Vec2;
use rustc_hash::FxHashSet;

use super::event::{InputEvent, MouseButton};

/// Held keys, held mouse buttons and the last cursor position.
///
/// Fed every [`InputEvent`] regardless of panel focus so held state never
/// goes stale; callers decide what to do with it.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys_down: FxHashSet<String>,
    buttons_down: FxHashSet<MouseButton>,
    cursor: Option<Vec2>,
}

impl InputState {
    /// Create an empty state with nothing held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event. Returns the pointer delta for motion events.
    ///
    /// The first absolute cursor position only seeds tracking and yields no
    /// delta.
    pub fn apply(&mut self, event: &InputEvent) -> Option<Vec2> {
        match event {
            InputEvent::PointerMoved { dx, dy } => Some(Vec2::new(*dx, *dy)),
            InputEvent::CursorMoved { x, y } => {
                let current = Vec2::new(*x, *y);
                self.cursor.replace(current).map(|prev| current - prev)
            }
            InputEvent::MouseButton { button, pressed } => {
                if *pressed {
                    let _ = self.buttons_down.insert(*button);
                } else {
                    let _ = self.buttons_down.remove(button);
                }
                None
            }
            InputEvent::Key { key, pressed } => {
                if *pressed {
                    let _ = self.keys_down.insert(key.clone());
                } else {
                    let _ = self.keys_down.remove(key);
                }
                None
            }
            InputEvent::FocusLost => {
                self.release_all();
                None
            }
        }
    }

    /// Whether `key` is currently held.
    #[must_use]
    pub fn key_down(&self, key: &str) -> bool {
        self.keys_down.contains(key)
    }

    /// Whether `button` is currently held.
    #[must_use]
    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    /// Last absolute cursor position, if one was reported.
    #[must_use]
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    /// Forget every held key and button.
    pub fn release_all(&mut self) {
        self.keys_down.clear();
        self.buttons_down.clear();
    }
}
