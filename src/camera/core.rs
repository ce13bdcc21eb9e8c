use glam::{Mat4, Vec3};

use crate::scene::EntityId;

/// Clip-space Y mirror applied to every uploaded view-projection.
const FLIP_Y: Mat4 = Mat4::from_cols_array(&[
    1.0, 0.0, 0.0, 0.0, //
    0.0, -1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0,
]);

/// Perspective camera defined by eye position, view direction, and
/// projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Unit view direction.
    pub forward: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the camera matrices and frame metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Inverse view-projection, used to unproject screen rays.
    pub inv_view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Currently selected entity (-1 if none).
    pub selected_entity: i32,
    /// Editor overlays enabled (0 = off, 1 = on).
    pub editor_mode: u32,
    /// Padding for GPU alignment.
    pub(crate) _pad: [f32; 2],
}

impl Camera {
    /// Build the view matrix looking along `forward`.
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_to_rh(self.eye, self.forward, self.up)
    }

    /// Build the projection matrix.
    pub fn build_projection(&self) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity matrices and no selection.
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            inv_view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.0,
            forward: [0.0, 0.0, -1.0],
            fovy: 90.0,
            selected_entity: -1,
            editor_mode: 0,
            _pad: [0.0; 2],
        }
    }

    /// Update uniform fields from the given camera's current state.
    ///
    /// The uploaded matrix mirrors clip-space Y so rows land in the target
    /// bottom-up; the panel samples the image with flipped UVs.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        let view_proj = FLIP_Y * camera.build_matrix();
        self.view_proj = view_proj.to_cols_array_2d();
        self.inv_view_proj = view_proj.inverse().to_cols_array_2d();
        self.position = camera.eye.to_array();
        self.aspect = camera.aspect;
        self.forward = camera.forward.to_array();
        self.fovy = camera.fovy;
    }

    /// Update the per-frame editor metadata.
    pub fn update_frame_flags(
        &mut self,
        selected: Option<EntityId>,
        editor_mode: bool,
    ) {
        self.selected_entity =
            selected.map_or(-1, |id| i32::try_from(id.0).unwrap_or(i32::MAX));
        self.editor_mode = u32::from(editor_mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera {
            eye: Vec3::new(0.0, 3.0, 0.0),
            forward: Vec3::NEG_Z,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy: 90.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    #[test]
    fn uniform_is_sixteen_byte_aligned() {
        assert_eq!(size_of::<CameraUniform>() % 16, 0);
    }

    #[test]
    fn point_ahead_projects_to_center() {
        let cam = camera();
        let clip = cam.build_matrix() * glam::Vec4::new(0.0, 3.0, -10.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
        assert!((0.0..=1.0).contains(&ndc.z));
    }

    #[test]
    fn uniform_stores_rows_bottom_up() {
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera());
        let view_proj = Mat4::from_cols_array_2d(&uniform.view_proj);
        // Below the horizon maps to +Y, the top rows of the target.
        let clip = view_proj * glam::Vec4::new(0.0, 0.0, -10.0, 1.0);
        assert!(clip.y / clip.w > 0.0);

        let inv = Mat4::from_cols_array_2d(&uniform.inv_view_proj);
        let round = inv * clip;
        let world = round.truncate() / round.w;
        assert!((world - Vec3::new(0.0, 0.0, -10.0)).length() < 1e-3);
    }

    #[test]
    fn uniform_tracks_selection_and_mode() {
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera());
        uniform.update_frame_flags(Some(EntityId(7)), true);
        assert_eq!(uniform.selected_entity, 7);
        assert_eq!(uniform.editor_mode, 1);
        assert_eq!(uniform.position, [0.0, 3.0, 0.0]);

        uniform.update_frame_flags(None, false);
        assert_eq!(uniform.selected_entity, -1);
        assert_eq!(uniform.editor_mode, 0);
    }
}
