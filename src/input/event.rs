/// Platform-agnostic input events.
///
/// These are fed into a [`ViewportPanel`](crate::panel::ViewportPanel),
/// which tracks held state and turns pointer motion into camera look.
///
/// # Example
///
/// ```ignore
/// panel.handle_event(&InputEvent::PointerMoved { dx: 4.0, dy: -2.0 });
/// panel.handle_event(&InputEvent::Key { key: "KeyW".into(), pressed: true });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Relative pointer motion in physical pixels.
    PointerMoved {
        /// Horizontal delta (positive = right).
        dx: f32,
        /// Vertical delta (positive = down).
        dy: f32,
    },
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Keyboard key pressed or released.
    Key {
        /// Physical key name in `winit::keyboard::KeyCode` debug format
        /// (`"KeyW"`, `"ShiftLeft"`, ...).
        key: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// The host window lost keyboard/pointer focus.
    FocusLost,
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
    /// Any extra button (back, forward, ...).
    Other,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Other,
        }
    }
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Key string for a winit physical key code.
    #[must_use]
    pub fn key_name(code: winit::keyboard::KeyCode) -> String {
        format!("{code:?}")
    }

    /// Convert a winit keyboard event. Unidentified keys are dropped.
    #[must_use]
    pub fn from_key_event(event: &winit::event::KeyEvent) -> Option<Self> {
        match event.physical_key {
            winit::keyboard::PhysicalKey::Code(code) => Some(Self::Key {
                key: Self::key_name(code),
                pressed: event.state.is_pressed(),
            }),
            winit::keyboard::PhysicalKey::Unidentified(_) => None,
        }
    }

    /// Convert raw device motion (`DeviceEvent::MouseMotion`).
    #[must_use]
    pub fn from_mouse_motion(delta: (f64, f64)) -> Self {
        Self::PointerMoved {
            dx: delta.0 as f32,
            dy: delta.1 as f32,
        }
    }

    /// Convert the subset of window events the viewport cares about.
    #[must_use]
    pub fn from_window_event(event: &winit::event::WindowEvent) -> Option<Self> {
        use winit::event::WindowEvent;

        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(Self::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                Some(Self::MouseButton {
                    button: (*button).into(),
                    pressed: state.is_pressed(),
                })
            }
            WindowEvent::KeyboardInput { event, .. } => {
                Self::from_key_event(event)
            }
            WindowEvent::Focused(false) => Some(Self::FocusLost),
            _ => None,
        }
    }
}
