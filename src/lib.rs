//! # Sprite Mesher
//!
//! A Rust library for generating 2D quad meshes with atlas UV mapping.
//!
//! ## Overview
//!
//! This library takes a quad size and an atlas sub-rectangle in pixel
//! coordinates, and produces renderer-ready geometry: four vertices, four
//! UV coordinates, six triangle indices, and a painter's-algorithm draw
//! order derived from world position.
//!
//! ## Quick Start
//!
//! ```ignore
//! use sprite_mesher::{PixelRect, SpriteMesh, TextureInfo};
//!
//! // Dimensions of the sprite sheet (the rendering layer owns the pixels)
//! let texture = TextureInfo::new(256, 256);
//!
//! // Build a 2x2 quad sampling a 32x32 sprite from the sheet
//! let mut mesh = SpriteMesh::quad(2.0, 2.0, Some(PixelRect::new(0, 0, 32, 32)), texture)?;
//!
//! // Later, swap the sprite without rebuilding the quad
//! mesh.remap_uv(PixelRect::new(32, 0, 32, 32), texture)?;
//! ```
//!
//! ## Engine Integration
//!
//! The mesher never touches engine objects. Implement [`SceneNode`] for your
//! engine's drawable object and drive it with a [`WorldQuad`]:
//!
//! ```ignore
//! use sprite_mesher::{HeadlessNode, TextureInfo, WorldQuad};
//! use glam::Vec3;
//!
//! let texture = TextureInfo::new(256, 256);
//! let mut quad = WorldQuad::new(
//!     HeadlessNode::new(),        // your SceneNode impl here
//!     Vec3::new(0.0, 10.0, 0.0),  // world position
//!     0.0,                        // rotation about +Z
//!     2.0, 2.0,                   // quad size
//!     None,                       // full-texture UVs
//!     texture,
//!     0,                          // sorting-order offset
//! )?;
//! quad.hide();
//! ```

pub mod atlas;
pub mod error;
pub mod export;
pub mod mesher;
pub mod scene;
pub mod types;

// Re-export main types for convenience
pub use atlas::SpriteAtlas;
pub use error::{MeshError, Result};
pub use export::obj::{export_obj, ObjExport};
pub use mesher::sorting::{sorting_order, sorting_order_for, SORTING_ORDER_BASE};
pub use mesher::uv::{apply_uv, pixel_to_uv, uv_rect_from_pixels};
pub use mesher::{triangulate, Quad, SpriteMesh, QUAD_INDICES};
pub use scene::{HeadlessNode, SceneNode, WorldQuad};
pub use types::{PixelRect, TextureInfo};

/// Probe a texture's pixel dimensions from a file path.
pub fn load_texture_info<P: AsRef<std::path::Path>>(path: P) -> Result<TextureInfo> {
    TextureInfo::from_path(path)
}

/// Probe a texture's pixel dimensions from encoded PNG bytes (for WASM compatibility).
pub fn load_texture_info_from_bytes(data: &[u8]) -> Result<TextureInfo> {
    TextureInfo::from_png_bytes(data)
}

#[cfg(feature = "wasm")]
pub mod wasm;
