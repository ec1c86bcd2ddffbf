//! WASM bindings for sprite-mesher.
//!
//! This module provides JavaScript-friendly APIs for use in the browser.

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the browser console
    console_error_panic_hook::set_once();
}

/// A built quad mesh with flat-array accessors for GPU upload.
#[wasm_bindgen]
pub struct SpriteMeshHandle {
    inner: crate::SpriteMesh,
    texture: crate::TextureInfo,
}

#[wasm_bindgen]
impl SpriteMeshHandle {
    /// Build a quad sampling the full texture.
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: f32,
        height: f32,
        texture_width: u32,
        texture_height: u32,
    ) -> Result<SpriteMeshHandle, JsError> {
        let texture = crate::TextureInfo::new(texture_width, texture_height);
        let inner = crate::SpriteMesh::quad(width, height, None, texture)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(SpriteMeshHandle { inner, texture })
    }

    /// Build a quad sampling a pixel rectangle of the texture.
    #[allow(clippy::too_many_arguments)]
    pub fn with_rect(
        width: f32,
        height: f32,
        texture_width: u32,
        texture_height: u32,
        rect_x: u32,
        rect_y: u32,
        rect_width: u32,
        rect_height: u32,
    ) -> Result<SpriteMeshHandle, JsError> {
        let texture = crate::TextureInfo::new(texture_width, texture_height);
        let rect = crate::PixelRect::new(rect_x, rect_y, rect_width, rect_height);
        let inner = crate::SpriteMesh::quad(width, height, Some(rect), texture)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(SpriteMeshHandle { inner, texture })
    }

    /// Vertex positions as a flat array (3 floats per vertex).
    pub fn positions(&self) -> Vec<f32> {
        self.inner.positions_flat()
    }

    /// Texture coordinates as a flat array (2 floats per vertex).
    pub fn uvs(&self) -> Vec<f32> {
        self.inner.uvs_flat()
    }

    /// Triangle indices (3 per triangle).
    pub fn indices(&self) -> Vec<u32> {
        self.inner.indices.clone()
    }

    /// Number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    /// Number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> usize {
        self.inner.triangle_count()
    }

    /// Remap the mesh's UVs to a new pixel rectangle, in place.
    pub fn remap_uv(
        &mut self,
        rect_x: u32,
        rect_y: u32,
        rect_width: u32,
        rect_height: u32,
    ) -> Result<(), JsError> {
        let rect = crate::PixelRect::new(rect_x, rect_y, rect_width, rect_height);
        self.inner
            .remap_uv(rect, self.texture)
            .map_err(|e| JsError::new(&e.to_string()))
    }
}

/// Derive a painter's-algorithm sorting order from a vertical position.
#[wasm_bindgen]
pub fn compute_sorting_order(vertical_position: f32, offset: i32) -> i32 {
    crate::sorting_order(vertical_position, crate::SORTING_ORDER_BASE, offset)
}

/// Probe a PNG's pixel dimensions, returned as [width, height].
#[wasm_bindgen]
pub fn probe_texture(data: &[u8]) -> Result<Vec<u32>, JsError> {
    let info = crate::load_texture_info_from_bytes(data).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(vec![info.width, info.height])
}
