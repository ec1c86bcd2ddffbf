//! Error types for the sprite mesher.

use thiserror::Error;

/// Result type alias using MeshError.
pub type Result<T> = std::result::Result<T, MeshError>;

/// Main error type for quad meshing operations.
#[derive(Error, Debug)]
pub enum MeshError {
    /// Failed to read or probe an image.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Failed to parse JSON data.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A UV source or destination buffer has fewer than four entries.
    #[error("UV buffer too small: expected at least 4 entries, got {len}")]
    UvBufferTooSmall { len: usize },

    /// Quad size is negative or not finite.
    #[error("Invalid quad size: {width}x{height}")]
    InvalidQuadSize { width: f32, height: f32 },

    /// Corner pair is inverted (upper-right below or left of lower-left).
    #[error("Invalid corners: lower-left ({ll_x}, {ll_y}) must not exceed upper-right ({ur_x}, {ur_y})")]
    InvalidCorners {
        ll_x: f32,
        ll_y: f32,
        ur_x: f32,
        ur_y: f32,
    },

    /// Atlas rectangle does not lie within the source texture.
    #[error("Region out of bounds: {0}")]
    RegionOutOfBounds(String),

    /// Texture has a zero pixel dimension.
    #[error("Texture has zero dimension: {width}x{height}")]
    ZeroTexture { width: u32, height: u32 },

    /// Named region missing from the atlas.
    #[error("Unknown atlas region: {0}")]
    UnknownRegion(String),

    /// Region name already present in the atlas.
    #[error("Duplicate atlas region: {0}")]
    DuplicateRegion(String),
}
