//! Pixel-space to UV-space mapping.
//!
//! Texture origin is bottom-left (OpenGL convention), so the "top" of a
//! pixel rectangle sits at `y + height` and maps toward v = 1.

use crate::error::{MeshError, Result};
use crate::types::{PixelRect, TextureInfo};
use glam::Vec2;

/// Convert a pixel coordinate to a normalized [0, 1] UV coordinate.
pub fn pixel_to_uv(x: u32, y: u32, texture: TextureInfo) -> Vec2 {
    Vec2::new(
        x as f32 / texture.width as f32,
        y as f32 / texture.height as f32,
    )
}

/// Map a pixel rectangle to four UV corners in quad order.
///
/// Corner order matches [`Quad`](crate::mesher::Quad): top-left, top-right,
/// bottom-left, bottom-right. The rectangle must lie within the texture.
pub fn uv_rect_from_pixels(rect: PixelRect, texture: TextureInfo) -> Result<[Vec2; 4]> {
    texture.ensure_valid()?;

    if !rect.fits_within(texture) {
        return Err(MeshError::RegionOutOfBounds(format!(
            "rect {}x{} at ({}, {}) exceeds texture {}x{}",
            rect.width, rect.height, rect.x, rect.y, texture.width, texture.height
        )));
    }

    Ok([
        pixel_to_uv(rect.x, rect.top(), texture),
        pixel_to_uv(rect.right(), rect.top(), texture),
        pixel_to_uv(rect.x, rect.y, texture),
        pixel_to_uv(rect.right(), rect.y, texture),
    ])
}

/// Copy the first four UV entries of `src` into `dst` in place.
///
/// Both slices must hold at least four entries; extra entries are left
/// untouched. This is the single failure mode the UV state machine has, and
/// it aborts whatever construction is in flight.
pub fn apply_uv(src: &[Vec2], dst: &mut [Vec2]) -> Result<()> {
    if src.len() < 4 {
        return Err(MeshError::UvBufferTooSmall { len: src.len() });
    }
    if dst.len() < 4 {
        return Err(MeshError::UvBufferTooSmall { len: dst.len() });
    }

    dst[..4].copy_from_slice(&src[..4]);
    Ok(())
}
