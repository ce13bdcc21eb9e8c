//! Input handling: platform-agnostic event types, held key/button
//! tracking, and movement actions.

/// Platform-agnostic input events.
pub mod event;
/// Movement actions and per-update movement intents.
pub mod keyboard;
/// Held key/button tracking.
pub mod state;

pub use event::{InputEvent, MouseButton};
pub use keyboard::{MoveAction, Movement};
pub use state::InputState;
