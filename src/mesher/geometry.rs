//! Quad geometry types.

use crate::error::{MeshError, Result};
use glam::{Vec2, Vec3};

/// Triangle indices for a quad built in corner order.
///
/// Two triangles: (top-left, top-right, bottom-left) and
/// (bottom-left, top-right, bottom-right).
pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 1, 3];

/// The fixed triangulation of a four-corner quad.
pub fn triangulate() -> [u32; 6] {
    QUAD_INDICES
}

/// An axis-aligned rectangular patch of four corners.
///
/// Corner order is top-left, top-right, bottom-left, bottom-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    /// Corner positions in local space.
    pub corners: [Vec2; 4],
}

impl Quad {
    /// Build a quad of the given size centered on the local origin.
    ///
    /// Corners land at (-w/2, h/2), (w/2, h/2), (-w/2, -h/2), (w/2, -h/2).
    /// Zero-size quads are permitted; negative or non-finite sizes are not.
    pub fn centered(width: f32, height: f32) -> Result<Self> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(MeshError::InvalidQuadSize { width, height });
        }

        let half_width = width / 2.0;
        let half_height = height / 2.0;

        Ok(Self {
            corners: [
                Vec2::new(-half_width, half_height),
                Vec2::new(half_width, half_height),
                Vec2::new(-half_width, -half_height),
                Vec2::new(half_width, -half_height),
            ],
        })
    }

    /// Build a quad spanning two corner points, returning it with its anchor.
    ///
    /// Size is `upper_right - lower_left`; the anchor (where the scene layer
    /// should place the quad) is the midpoint of the two corners. An inverted
    /// pair is rejected; an equal pair yields a legal zero-size quad.
    pub fn from_corners(lower_left: Vec2, upper_right: Vec2) -> Result<(Self, Vec2)> {
        if upper_right.x < lower_left.x || upper_right.y < lower_left.y {
            return Err(MeshError::InvalidCorners {
                ll_x: lower_left.x,
                ll_y: lower_left.y,
                ur_x: upper_right.x,
                ur_y: upper_right.y,
            });
        }

        let size = upper_right - lower_left;
        let anchor = lower_left + size * 0.5;
        let quad = Self::centered(size.x, size.y)?;
        Ok((quad, anchor))
    }

    /// Build a quad from explicit corner positions, bypassing validation.
    ///
    /// The caller owns the corner-order invariant on this path.
    pub fn from_corner_points(corners: [Vec2; 4]) -> Self {
        Self { corners }
    }

    /// Width of the quad.
    pub fn width(&self) -> f32 {
        self.corners[1].x - self.corners[0].x
    }

    /// Height of the quad.
    pub fn height(&self) -> f32 {
        self.corners[0].y - self.corners[2].y
    }

    /// Corners lifted into 3D at z = 0 for mesh attachment.
    pub fn positions(&self) -> [Vec3; 4] {
        [
            self.corners[0].extend(0.0),
            self.corners[1].extend(0.0),
            self.corners[2].extend(0.0),
            self.corners[3].extend(0.0),
        ]
    }
}
