use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::{InputState, MoveAction, Movement};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping movement actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `Forward` → `"KeyW"`).
    pub bindings: HashMap<MoveAction, String>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (MoveAction::Forward, "KeyW".into()),
            (MoveAction::Back, "KeyS".into()),
            (MoveAction::StrafeLeft, "KeyA".into()),
            (MoveAction::StrafeRight, "KeyD".into()),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action bound to a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<MoveAction> {
        self.bindings
            .iter()
            .find(|(_, bound)| bound.as_str() == key)
            .map(|(action, _)| *action)
    }

    /// Key string bound to `action`, if any.
    #[must_use]
    pub fn key_for(&self, action: MoveAction) -> Option<&str> {
        self.bindings.get(&action).map(String::as_str)
    }

    /// Movement intents for the keys currently held in `input`.
    #[must_use]
    pub fn movement(&self, input: &InputState) -> Movement {
        let mut movement = Movement::default();
        for (action, key) in &self.bindings {
            if input.key_down(key) {
                movement.press(*action);
            }
        }
        movement
    }
}
