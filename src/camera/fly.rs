use glam::{Mat4, Vec3};

use super::core::Camera;
use crate::input::Movement;
use crate::options::CameraOptions;

/// Hard pitch bound in degrees; configured limits are capped to it.
pub const MAX_PITCH: f32 = 89.0;

/// Free-fly editor camera driven by yaw/pitch angles in degrees.
///
/// Pointer deltas turn the camera through [`look`](Self::look); held
/// movement keys translate it through [`step`](Self::step). The view
/// direction is derived state and is refreshed by
/// [`update_direction`](Self::update_direction) once per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FlyCamera {
    position: Vec3,
    yaw: f32,
    pitch: f32,
    direction: Vec3,
    sensitivity: f32,
    speed: f32,
    pitch_limit: f32,
    fovy: f32,
    znear: f32,
    zfar: f32,
}

impl FlyCamera {
    /// Create a camera at the configured start pose.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        let pitch_limit = if options.pitch_limit.is_finite() {
            options.pitch_limit.abs().min(MAX_PITCH)
        } else {
            MAX_PITCH
        };
        let mut camera = Self {
            position: Vec3::from_array(options.start_position),
            yaw: options.start_yaw,
            pitch: options.start_pitch.clamp(-pitch_limit, pitch_limit),
            direction: Vec3::NEG_Z,
            sensitivity: options.look_sensitivity,
            speed: options.move_speed,
            pitch_limit,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };
        camera.update_direction();
        camera
    }

    /// World-space eye position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit view direction as of the last [`update_direction`](Self::update_direction).
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Horizontal angle in degrees.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Vertical angle in degrees, always within `±pitch_limit`.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees.
    pub fn fovy(&self) -> f32 {
        self.fovy
    }

    /// Teleport the camera without touching its orientation.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Apply a pointer delta in pixels.
    ///
    /// Moving the pointer right turns right; moving it down looks down.
    pub fn look(&mut self, dx: f32, dy: f32) {
        if !dx.is_finite() || !dy.is_finite() {
            return;
        }
        self.yaw += dx * self.sensitivity;
        self.pitch = (self.pitch - dy * self.sensitivity)
            .clamp(-self.pitch_limit, self.pitch_limit);
    }

    /// Recompute the unit view direction from yaw and pitch.
    pub fn update_direction(&mut self) {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        self.direction = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
    }

    /// Horizontal strafe axis (right-hand side of the view direction).
    pub fn right(&self) -> Vec3 {
        self.direction.cross(Vec3::Y).normalize_or_zero()
    }

    /// Move one fixed step for every active movement intent.
    pub fn step(&mut self, movement: Movement) {
        let forward = self.direction * self.speed;
        let right = self.right() * self.speed;
        if movement.forward {
            self.position += forward;
        }
        if movement.back {
            self.position -= forward;
        }
        if movement.left {
            self.position -= right;
        }
        if movement.right {
            self.position += right;
        }
    }

    /// View matrix for the current pose.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.direction, Vec3::Y)
    }

    /// Snapshot as a projection-ready [`Camera`] for the given aspect ratio.
    pub fn to_camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.position,
            forward: self.direction,
            up: Vec3::Y,
            aspect,
            fovy: self.fovy,
            znear: self.znear,
            zfar: self.zfar,
        }
    }
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(&CameraOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn default_pose_looks_down_negative_z() {
        let cam = FlyCamera::default();
        assert_eq!(cam.position(), Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(cam.yaw(), -90.0);
        assert!(approx(cam.direction(), Vec3::NEG_Z));
    }

    #[test]
    fn configured_pitch_limit_is_capped() {
        for limit in [135.0, -400.0, f32::INFINITY, f32::NAN] {
            let options = CameraOptions {
                pitch_limit: limit,
                ..CameraOptions::default()
            };
            let mut cam = FlyCamera::new(&options);
            cam.look(0.0, -1200.0);
            assert_eq!(cam.pitch(), MAX_PITCH);
            cam.update_direction();
            assert!(cam.direction().z < 0.0, "camera flipped over the top");

            cam.look(0.0, 5000.0);
            assert_eq!(cam.pitch(), -MAX_PITCH);
        }
    }

    #[test]
    fn smaller_pitch_limit_is_kept() {
        let options = CameraOptions {
            pitch_limit: 45.0,
            ..CameraOptions::default()
        };
        let mut cam = FlyCamera::new(&options);
        cam.look(0.0, -1200.0);
        assert_eq!(cam.pitch(), 45.0);
    }

    #[test]
    fn look_scales_by_sensitivity() {
        let mut cam = FlyCamera::default();
        cam.look(10.0, -20.0);
        assert!((cam.yaw() - -89.0).abs() < 1e-4);
        assert!((cam.pitch() - 2.0).abs() < 1e-4);
    }

    #[test]
    fn pitch_stays_clamped_under_any_deltas() {
        let mut cam = FlyCamera::default();
        let deltas = [
            (0.0, -5000.0),
            (3.0, 120.0),
            (-7.5, 99999.0),
            (0.0, -0.5),
            (1e6, -1e6),
            (0.0, 1e9),
        ];
        for (dx, dy) in deltas {
            cam.look(dx, dy);
            assert!((-89.0..=89.0).contains(&cam.pitch()), "{}", cam.pitch());
        }
        cam.look(0.0, -1e9);
        assert_eq!(cam.pitch(), 89.0);
        cam.look(0.0, 1e9);
        assert_eq!(cam.pitch(), -89.0);
    }

    #[test]
    fn non_finite_deltas_are_ignored() {
        let mut cam = FlyCamera::default();
        cam.look(f32::NAN, 1.0);
        cam.look(1.0, f32::INFINITY);
        assert_eq!(cam.yaw(), -90.0);
        assert_eq!(cam.pitch(), 0.0);
    }

    #[test]
    fn direction_is_unit_after_every_update() {
        let mut cam = FlyCamera::default();
        for i in 0..200 {
            let f = i as f32;
            cam.look(f * 13.7 - 900.0, (f * 7.3).sin() * 400.0);
            cam.update_direction();
            assert!((cam.direction().length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn pitch_up_tilts_direction_up() {
        let mut cam = FlyCamera::default();
        cam.look(0.0, -450.0);
        cam.update_direction();
        assert!((cam.pitch() - 45.0).abs() < 1e-3);
        assert!(cam.direction().y > 0.7);
    }

    #[test]
    fn forward_and_back_cancel() {
        let mut cam = FlyCamera::default();
        let start = cam.position();
        cam.step(Movement {
            forward: true,
            back: true,
            ..Movement::default()
        });
        assert!(approx(cam.position(), start));
    }

    #[test]
    fn step_moves_along_view_and_strafe_axes() {
        let mut cam = FlyCamera::default();
        cam.step(Movement {
            forward: true,
            ..Movement::default()
        });
        assert!(approx(cam.position(), Vec3::new(0.0, 3.0, -0.25)));

        cam.step(Movement {
            right: true,
            ..Movement::default()
        });
        // Looking down -Z, right is +X.
        assert!(approx(cam.position(), Vec3::new(0.25, 3.0, -0.25)));

        cam.step(Movement {
            left: true,
            back: true,
            ..Movement::default()
        });
        assert!(approx(cam.position(), Vec3::new(0.0, 3.0, 0.0)));
    }

    #[test]
    fn to_camera_carries_pose_and_projection() {
        let cam = FlyCamera::default();
        let snapshot = cam.to_camera(2.0);
        assert_eq!(snapshot.eye, cam.position());
        assert_eq!(snapshot.forward, cam.direction());
        assert_eq!(snapshot.fovy, 90.0);
        assert_eq!(snapshot.aspect, 2.0);
        assert_eq!(snapshot.build_view(), cam.view_matrix());
    }
}
