use glam::Vec3;

use crate::scene::EntityId;

/// Size of a panel or offscreen target in physical pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PanelSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PanelSize {
    /// Create a size from pixel dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Convert an egui size in points to physical pixels.
    ///
    /// Negative or non-finite extents collapse to zero.
    #[must_use]
    pub fn from_points(size: egui::Vec2, pixels_per_point: f32) -> Self {
        let to_px = |points: f32| {
            let px = (points * pixels_per_point).round();
            if px.is_finite() && px > 0.0 {
                px as u32
            } else {
                0
            }
        };
        Self::new(to_px(size.x), to_px(size.y))
    }

    /// Whether either dimension is zero (nothing laid out yet).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// This size with each dimension raised to at least one pixel, the
    /// smallest allocatable texture.
    #[must_use]
    pub fn at_least_one(&self) -> Self {
        Self::new(self.width.max(1), self.height.max(1))
    }

    /// Width over height; 1.0 for empty sizes.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.is_empty() {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

impl From<[u32; 2]> for PanelSize {
    fn from([width, height]: [u32; 2]) -> Self {
        Self::new(width, height)
    }
}

/// Everything the scene renderer needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    /// Camera eye position.
    pub position: Vec3,
    /// Unit view direction.
    pub direction: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Target dimensions in pixels.
    pub size: PanelSize,
    /// Entity highlighted by the editor, if any.
    pub selected: Option<EntityId>,
    /// Draw editor-only overlays (grid, selection highlight).
    pub editor_mode: bool,
}
