//! Quad mesh generation.
//!
//! This module composes quad corners, atlas UV mapping, and the fixed
//! triangulation into renderer-ready vertex data.

pub mod geometry;
pub mod sorting;
pub mod uv;

pub use geometry::{triangulate, Quad, QUAD_INDICES};

use crate::error::Result;
use crate::types::{PixelRect, TextureInfo};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Renderer-ready geometry for one sprite quad.
///
/// A freshly built quad holds four positions, four UVs, and six indices.
/// The explicit-array constructor accepts arbitrary buffers, so counts are
/// not an invariant of the type; [`SpriteMesh::empty`] starts with all three
/// buffers empty and its UVs *unset* until the first remap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpriteMesh {
    /// Vertex positions (z = 0 for quads built by this crate).
    pub positions: Vec<Vec3>,
    /// Normalized texture coordinates, one per vertex.
    pub uvs: Vec<Vec2>,
    /// Triangle indices (three per triangle).
    pub indices: Vec<u32>,
}

impl SpriteMesh {
    /// Create a mesh with no geometry and unset UVs.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a mesh from explicit vertex buffers.
    pub fn from_arrays(positions: Vec<Vec3>, uvs: Vec<Vec2>, indices: Vec<u32>) -> Self {
        Self {
            positions,
            uvs,
            indices,
        }
    }

    /// Build a centered quad with UVs mapped from an atlas rectangle.
    ///
    /// `uv_rect: None` maps the full texture. This is the one builder path;
    /// callers needing a corner-anchored quad compose it with
    /// [`Quad::from_corners`] and place the result at the returned anchor.
    pub fn quad(
        width: f32,
        height: f32,
        uv_rect: Option<PixelRect>,
        texture: TextureInfo,
    ) -> Result<Self> {
        let quad = Quad::centered(width, height)?;
        let rect = uv_rect.unwrap_or_else(|| PixelRect::full(texture));
        let uvs = uv::uv_rect_from_pixels(rect, texture)?;

        Ok(Self {
            positions: quad.positions().to_vec(),
            uvs: uvs.to_vec(),
            indices: QUAD_INDICES.to_vec(),
        })
    }

    /// Remap this mesh's UVs to a new atlas rectangle, in place.
    ///
    /// Fails if the mesh holds fewer than four UV entries (an empty mesh has
    /// never been mapped) or if the rectangle falls outside the texture.
    pub fn remap_uv(&mut self, rect: PixelRect, texture: TextureInfo) -> Result<()> {
        let mapped = uv::uv_rect_from_pixels(rect, texture)?;
        uv::apply_uv(&mapped, &mut self.uvs)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if the mesh has no vertices.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions as a flat array (for GPU upload or export).
    pub fn positions_flat(&self) -> Vec<f32> {
        self.positions
            .iter()
            .flat_map(|p| [p.x, p.y, p.z])
            .collect()
    }

    /// UVs as a flat array (for GPU upload or export).
    pub fn uvs_flat(&self) -> Vec<f32> {
        self.uvs.iter().flat_map(|uv| [uv.x, uv.y]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;

    const TEXTURE: TextureInfo = TextureInfo {
        width: 64,
        height: 64,
    };

    #[test]
    fn test_quad_mesh_counts() {
        let mesh = SpriteMesh::quad(2.0, 2.0, None, TEXTURE).unwrap();

        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.indices, QUAD_INDICES);
        assert!(!mesh.is_empty());
    }

    #[test]
    fn test_quad_defaults_to_full_texture() {
        let mesh = SpriteMesh::quad(1.0, 1.0, None, TEXTURE).unwrap();

        assert_eq!(mesh.uvs[0], Vec2::new(0.0, 1.0));
        assert_eq!(mesh.uvs[1], Vec2::new(1.0, 1.0));
        assert_eq!(mesh.uvs[2], Vec2::new(0.0, 0.0));
        assert_eq!(mesh.uvs[3], Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_quad_with_atlas_rect() {
        let rect = PixelRect::new(0, 0, 32, 32);
        let mesh = SpriteMesh::quad(1.0, 1.0, Some(rect), TEXTURE).unwrap();

        assert_eq!(mesh.uvs[0], Vec2::new(0.0, 0.5));
        assert_eq!(mesh.uvs[3], Vec2::new(0.5, 0.0));
    }

    #[test]
    fn test_empty_mesh_has_unset_uvs() {
        let mut mesh = SpriteMesh::empty();
        assert!(mesh.is_empty());
        assert_eq!(mesh.triangle_count(), 0);

        // An unset UV buffer cannot be remapped
        let result = mesh.remap_uv(PixelRect::new(0, 0, 8, 8), TEXTURE);
        assert!(matches!(result, Err(MeshError::UvBufferTooSmall { len: 0 })));
    }

    #[test]
    fn test_remap_uv_round_trip() {
        let rect = PixelRect::new(16, 16, 16, 16);
        let mut mesh = SpriteMesh::quad(1.0, 1.0, None, TEXTURE).unwrap();

        mesh.remap_uv(rect, TEXTURE).unwrap();
        let once = mesh.uvs.clone();
        mesh.remap_uv(rect, TEXTURE).unwrap();

        assert_eq!(mesh.uvs, once);
    }

    #[test]
    fn test_remap_uv_out_of_bounds_leaves_mesh_unchanged() {
        let mut mesh = SpriteMesh::quad(1.0, 1.0, None, TEXTURE).unwrap();
        let before = mesh.uvs.clone();

        let result = mesh.remap_uv(PixelRect::new(60, 60, 16, 16), TEXTURE);
        assert!(result.is_err());
        assert_eq!(mesh.uvs, before);
    }

    #[test]
    fn test_flat_accessors() {
        let mesh = SpriteMesh::quad(2.0, 2.0, None, TEXTURE).unwrap();

        assert_eq!(mesh.positions_flat().len(), 12);
        assert_eq!(mesh.uvs_flat().len(), 8);
        assert_eq!(mesh.positions_flat()[0], -1.0);
        assert_eq!(mesh.positions_flat()[2], 0.0); // z
    }

    #[test]
    fn test_from_arrays_keeps_buffers() {
        let mesh = SpriteMesh::from_arrays(
            vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            vec![Vec2::ZERO, Vec2::X, Vec2::Y],
            vec![0, 1, 2],
        );

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
    }
}
