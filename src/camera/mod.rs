//! Camera system for the editor viewport.
//!
//! Provides a yaw/pitch free-fly camera and the projection/uniform types
//! the renderer consumes.

/// Core camera struct and GPU uniform types.
pub mod core;
/// Yaw/pitch free-fly camera.
pub mod fly;

pub use self::core::{Camera, CameraUniform};
pub use fly::FlyCamera;
