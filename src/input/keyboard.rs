use serde::{Deserialize, Serialize};

/// Camera movement actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// forward = "KeyW"
/// strafe_left = "KeyA"
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MoveAction {
    /// Move along the view direction.
    Forward,
    /// Move against the view direction.
    Back,
    /// Strafe left.
    StrafeLeft,
    /// Strafe right.
    StrafeRight,
}

/// Movement intents held during one update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Movement {
    /// Forward key held.
    pub forward: bool,
    /// Back key held.
    pub back: bool,
    /// Strafe-left key held.
    pub left: bool,
    /// Strafe-right key held.
    pub right: bool,
}

impl Movement {
    /// Mark `action` as held.
    pub fn press(&mut self, action: MoveAction) {
        match action {
            MoveAction::Forward => self.forward = true,
            MoveAction::Back => self.back = true,
            MoveAction::StrafeLeft => self.left = true,
            MoveAction::StrafeRight => self.right = true,
        }
    }

    /// `true` when no movement key is held.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}
