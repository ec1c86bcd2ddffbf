//! Shared types used throughout the library.

use crate::error::{MeshError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A sub-rectangle of a texture, in pixel coordinates.
///
/// The origin is the texture's bottom-left corner (OpenGL convention), so
/// `y + height` is the top edge of the rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    /// Horizontal pixel offset of the left edge.
    pub x: u32,
    /// Vertical pixel offset of the bottom edge.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The rectangle covering an entire texture.
    pub fn full(texture: TextureInfo) -> Self {
        Self {
            x: 0,
            y: 0,
            width: texture.width,
            height: texture.height,
        }
    }

    /// Pixel coordinate of the right edge.
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Pixel coordinate of the top edge.
    pub fn top(&self) -> u32 {
        self.y + self.height
    }

    /// Check that the rectangle lies within the texture's pixel dimensions.
    pub fn fits_within(&self, texture: TextureInfo) -> bool {
        self.right() <= texture.width && self.top() <= texture.height
    }
}

/// Pixel dimensions of a source texture.
///
/// The rendering layer owns the texture itself; the mesher only needs its
/// dimensions to normalize pixel rectangles into UV space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureInfo {
    /// Texture width in pixels.
    pub width: u32,
    /// Texture height in pixels.
    pub height: u32,
}

impl TextureInfo {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Check that both dimensions are nonzero.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Probe the dimensions of an encoded PNG without keeping its pixels.
    pub fn from_png_bytes(data: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(data)?;
        let (width, height) = img.to_rgba8().dimensions();
        Ok(Self { width, height })
    }

    /// Probe the dimensions of an image file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let (width, height) = image::image_dimensions(path)?;
        Ok(Self { width, height })
    }

    pub(crate) fn ensure_valid(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(MeshError::ZeroTexture {
                width: self.width,
                height: self.height,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_rect_covers_texture() {
        let texture = TextureInfo::new(128, 64);
        let rect = PixelRect::full(texture);

        assert_eq!(rect.x, 0);
        assert_eq!(rect.y, 0);
        assert_eq!(rect.right(), 128);
        assert_eq!(rect.top(), 64);
        assert!(rect.fits_within(texture));
    }

    #[test]
    fn test_fits_within_bounds() {
        let texture = TextureInfo::new(64, 64);

        assert!(PixelRect::new(0, 0, 64, 64).fits_within(texture));
        assert!(PixelRect::new(48, 48, 16, 16).fits_within(texture));
        assert!(!PixelRect::new(49, 0, 16, 16).fits_within(texture));
        assert!(!PixelRect::new(0, 60, 8, 8).fits_within(texture));
    }

    #[test]
    fn test_zero_texture_invalid() {
        assert!(!TextureInfo::new(0, 16).is_valid());
        assert!(!TextureInfo::new(16, 0).is_valid());
        assert!(TextureInfo::new(1, 1).is_valid());
    }
}
