//! Named pixel regions over a single sprite-sheet texture.

use crate::error::{MeshError, Result};
use crate::mesher::uv;
use crate::types::{PixelRect, TextureInfo};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A catalogue of named sub-rectangles of one texture.
///
/// Every region is validated against the texture bounds on insertion, so a
/// stored region always maps to legal UV coordinates.
#[derive(Debug, Clone)]
pub struct SpriteAtlas {
    texture: TextureInfo,
    regions: HashMap<String, PixelRect>,
}

/// Serialized form of a [`SpriteAtlas`].
#[derive(Serialize, Deserialize)]
struct AtlasManifest {
    texture: TextureInfo,
    regions: HashMap<String, PixelRect>,
}

impl SpriteAtlas {
    /// Create an empty atlas over a texture.
    pub fn new(texture: TextureInfo) -> Self {
        Self {
            texture,
            regions: HashMap::new(),
        }
    }

    /// The texture this atlas indexes into.
    pub fn texture(&self) -> TextureInfo {
        self.texture
    }

    /// Add a named region.
    ///
    /// Rejects regions outside the texture and duplicate names.
    pub fn add_region(&mut self, name: impl Into<String>, rect: PixelRect) -> Result<()> {
        let name = name.into();

        if !rect.fits_within(self.texture) {
            return Err(MeshError::RegionOutOfBounds(format!(
                "region '{}': {}x{} at ({}, {}) exceeds texture {}x{}",
                name, rect.width, rect.height, rect.x, rect.y, self.texture.width, self.texture.height
            )));
        }
        if self.regions.contains_key(&name) {
            return Err(MeshError::DuplicateRegion(name));
        }

        self.regions.insert(name, rect);
        Ok(())
    }

    /// Get the region for a sprite name.
    pub fn region(&self, name: &str) -> Option<PixelRect> {
        self.regions.get(name).copied()
    }

    /// Check if the atlas contains a sprite name.
    pub fn contains(&self, name: &str) -> bool {
        self.regions.contains_key(name)
    }

    /// Number of regions in the atlas.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Iterate over region names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    /// Map a named region to four UV corners in quad order.
    pub fn uv_rect(&self, name: &str) -> Result<[Vec2; 4]> {
        let rect = self
            .region(name)
            .ok_or_else(|| MeshError::UnknownRegion(name.to_string()))?;
        uv::uv_rect_from_pixels(rect, self.texture)
    }

    /// Parse an atlas from its JSON manifest.
    ///
    /// Regions are re-validated against the manifest's texture, so a
    /// hand-edited manifest cannot smuggle an out-of-bounds rectangle in.
    pub fn from_manifest(json: &str) -> Result<Self> {
        let manifest: AtlasManifest = serde_json::from_str(json)?;

        let mut atlas = Self::new(manifest.texture);
        for (name, rect) in manifest.regions {
            atlas.add_region(name, rect)?;
        }
        Ok(atlas)
    }

    /// Serialize the atlas to its JSON manifest.
    pub fn to_manifest(&self) -> Result<String> {
        let manifest = AtlasManifest {
            texture: self.texture,
            regions: self.regions.clone(),
        };
        Ok(serde_json::to_string_pretty(&manifest)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_atlas() -> SpriteAtlas {
        let mut atlas = SpriteAtlas::new(TextureInfo::new(128, 128));
        atlas.add_region("grass", PixelRect::new(0, 0, 32, 32)).unwrap();
        atlas.add_region("dirt", PixelRect::new(32, 0, 32, 32)).unwrap();
        atlas
    }

    #[test]
    fn test_add_and_lookup() {
        let atlas = test_atlas();

        assert_eq!(atlas.region_count(), 2);
        assert!(atlas.contains("grass"));
        assert!(!atlas.contains("stone"));
        assert_eq!(atlas.region("dirt"), Some(PixelRect::new(32, 0, 32, 32)));
    }

    #[test]
    fn test_out_of_bounds_region_rejected() {
        let mut atlas = SpriteAtlas::new(TextureInfo::new(64, 64));
        let result = atlas.add_region("huge", PixelRect::new(32, 32, 64, 64));

        assert!(matches!(result, Err(MeshError::RegionOutOfBounds(_))));
        assert_eq!(atlas.region_count(), 0);
    }

    #[test]
    fn test_duplicate_region_rejected() {
        let mut atlas = test_atlas();
        let result = atlas.add_region("grass", PixelRect::new(64, 0, 32, 32));

        assert!(matches!(result, Err(MeshError::DuplicateRegion(_))));
        // Original mapping untouched
        assert_eq!(atlas.region("grass"), Some(PixelRect::new(0, 0, 32, 32)));
    }

    #[test]
    fn test_uv_rect_lookup() {
        let atlas = test_atlas();
        let uv = atlas.uv_rect("grass").unwrap();

        assert_eq!(uv[2], Vec2::new(0.0, 0.0)); // bottom-left
        assert_eq!(uv[1], Vec2::new(0.25, 0.25)); // top-right

        assert!(matches!(
            atlas.uv_rect("stone"),
            Err(MeshError::UnknownRegion(_))
        ));
    }

    #[test]
    fn test_manifest_round_trip() {
        let atlas = test_atlas();
        let json = atlas.to_manifest().unwrap();
        let parsed = SpriteAtlas::from_manifest(&json).unwrap();

        assert_eq!(parsed.texture(), atlas.texture());
        assert_eq!(parsed.region_count(), atlas.region_count());
        assert_eq!(parsed.region("grass"), atlas.region("grass"));
        assert_eq!(parsed.region("dirt"), atlas.region("dirt"));
    }

    #[test]
    fn test_manifest_revalidates_regions() {
        let json = r#"{
            "texture": { "width": 16, "height": 16 },
            "regions": { "bad": { "x": 8, "y": 8, "width": 16, "height": 16 } }
        }"#;

        assert!(matches!(
            SpriteAtlas::from_manifest(json),
            Err(MeshError::RegionOutOfBounds(_))
        ));
    }
}
