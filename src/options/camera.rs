use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Free-fly camera projection and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Degrees of yaw/pitch per pixel of pointer motion.
    #[schemars(title = "Look Sensitivity", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub look_sensitivity: f32,
    /// World units moved per update while a movement key is held.
    #[schemars(title = "Move Speed", range(min = 0.01, max = 2.0), extend("step" = 0.01))]
    pub move_speed: f32,
    /// Maximum absolute pitch in degrees.
    #[schemars(skip)]
    pub pitch_limit: f32,
    /// Initial eye position.
    #[schemars(skip)]
    pub start_position: [f32; 3],
    /// Initial yaw in degrees.
    #[schemars(skip)]
    pub start_yaw: f32,
    /// Initial pitch in degrees.
    #[schemars(skip)]
    pub start_pitch: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 90.0,
            znear: 0.1,
            zfar: 1000.0,
            look_sensitivity: 0.1,
            move_speed: 0.25,
            pitch_limit: 89.0,
            start_position: [0.0, 3.0, 0.0],
            start_yaw: -90.0,
            start_pitch: 0.0,
        }
    }
}
