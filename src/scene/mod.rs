//! Scene-layer abstraction.
//!
//! The mesher only produces vertex data; a rendering engine owns the actual
//! scene object. [`SceneNode`] is the seam between the two, and
//! [`WorldQuad`] drives a node with generated quad geometry.

use crate::error::Result;
use crate::mesher::{sorting, uv, Quad, SpriteMesh, QUAD_INDICES};
use crate::types::{PixelRect, TextureInfo};
use glam::{Vec2, Vec3};

/// Engine-agnostic interface to a drawable scene object.
///
/// An implementation wraps whatever the rendering layer calls a node or
/// entity: it uploads vertex buffers, applies the world transform, and
/// controls draw order and visibility. Implementations never feed state back
/// into the mesher.
pub trait SceneNode {
    /// Attach vertex buffers to the node's renderable mesh.
    fn attach_geometry(&mut self, positions: &[Vec3], uvs: &[Vec2], indices: &[u32]);

    /// Set the node's world transform: position, scale, rotation about +Z.
    fn set_transform(&mut self, position: Vec3, scale: Vec3, rotation_z: f32);

    /// Apply a draw-order value to the node's renderer.
    fn set_sorting_order(&mut self, order: i32);

    /// Show or hide the node.
    fn set_visible(&mut self, visible: bool);

    /// Release the node's engine resources.
    fn destroy(&mut self);
}

/// A recording [`SceneNode`] with no engine behind it.
///
/// Stores whatever was last pushed to it. Useful for CLI output, demos, and
/// testing the scene interface without a rendering backend.
#[derive(Debug, Clone)]
pub struct HeadlessNode {
    /// Last attached vertex positions.
    pub positions: Vec<Vec3>,
    /// Last attached UVs.
    pub uvs: Vec<Vec2>,
    /// Last attached indices.
    pub indices: Vec<u32>,
    /// Current world position.
    pub position: Vec3,
    /// Current scale.
    pub scale: Vec3,
    /// Current rotation about +Z, in degrees.
    pub rotation_z: f32,
    /// Current draw order.
    pub sorting_order: i32,
    /// Current visibility.
    pub visible: bool,
    /// Whether `destroy` has been called.
    pub destroyed: bool,
    /// How many times geometry was attached.
    pub attach_count: usize,
}

impl Default for HeadlessNode {
    fn default() -> Self {
        Self {
            positions: Vec::new(),
            uvs: Vec::new(),
            indices: Vec::new(),
            position: Vec3::ZERO,
            scale: Vec3::ONE,
            rotation_z: 0.0,
            sorting_order: 0,
            visible: true,
            destroyed: false,
            attach_count: 0,
        }
    }
}

impl HeadlessNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Human-readable summary of the node's current state.
    pub fn summary(&self) -> String {
        format!(
            "pos=({:.2}, {:.2}, {:.2}) order={} visible={} verts={} tris={}",
            self.position.x,
            self.position.y,
            self.position.z,
            self.sorting_order,
            self.visible,
            self.positions.len(),
            self.indices.len() / 3
        )
    }
}

impl SceneNode for HeadlessNode {
    fn attach_geometry(&mut self, positions: &[Vec3], uvs: &[Vec2], indices: &[u32]) {
        self.positions = positions.to_vec();
        self.uvs = uvs.to_vec();
        self.indices = indices.to_vec();
        self.attach_count += 1;
    }

    fn set_transform(&mut self, position: Vec3, scale: Vec3, rotation_z: f32) {
        self.position = position;
        self.scale = scale;
        self.rotation_z = rotation_z;
    }

    fn set_sorting_order(&mut self, order: i32) {
        self.sorting_order = order;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn destroy(&mut self) {
        self.destroyed = true;
    }
}

/// A quad placed in the world, driving a [`SceneNode`].
///
/// Owns the generated [`SpriteMesh`] and mirrors the transform and draw
/// order it has pushed to the node, so the node never has to be read back.
pub struct WorldQuad<N: SceneNode> {
    node: N,
    mesh: SpriteMesh,
    texture: TextureInfo,
    position: Vec3,
    scale: Vec3,
    rotation_z: f32,
    sorting_order: i32,
    visible: bool,
}

impl<N: SceneNode> WorldQuad<N> {
    /// Create a quad of the given size at a world position.
    ///
    /// `uv_rect: None` maps the full texture.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        node: N,
        position: Vec3,
        rotation_z: f32,
        width: f32,
        height: f32,
        uv_rect: Option<PixelRect>,
        texture: TextureInfo,
        sorting_offset: i32,
    ) -> Result<Self> {
        let mesh = SpriteMesh::quad(width, height, uv_rect, texture)?;
        Ok(Self::attach(
            node,
            mesh,
            texture,
            position,
            rotation_z,
            sorting_offset,
        ))
    }

    /// Create a quad spanning two world-space corners, rotation zero.
    ///
    /// The quad is placed at the midpoint of the corner pair.
    pub fn from_corners(
        node: N,
        lower_left: Vec2,
        upper_right: Vec2,
        uv_rect: Option<PixelRect>,
        texture: TextureInfo,
        sorting_offset: i32,
    ) -> Result<Self> {
        let (quad, anchor) = Quad::from_corners(lower_left, upper_right)?;
        let rect = uv_rect.unwrap_or_else(|| PixelRect::full(texture));
        let uvs = uv::uv_rect_from_pixels(rect, texture)?;

        let mesh =
            SpriteMesh::from_arrays(quad.positions().to_vec(), uvs.to_vec(), QUAD_INDICES.to_vec());
        Ok(Self::attach(
            node,
            mesh,
            texture,
            anchor.extend(0.0),
            0.0,
            sorting_offset,
        ))
    }

    /// Create a quad with no geometry and unset UVs.
    pub fn empty(
        node: N,
        position: Vec3,
        rotation_z: f32,
        texture: TextureInfo,
        sorting_offset: i32,
    ) -> Self {
        Self::attach(
            node,
            SpriteMesh::empty(),
            texture,
            position,
            rotation_z,
            sorting_offset,
        )
    }

    /// Create a quad from explicit vertex buffers.
    pub fn from_mesh(
        node: N,
        position: Vec3,
        rotation_z: f32,
        mesh: SpriteMesh,
        texture: TextureInfo,
        sorting_offset: i32,
    ) -> Self {
        Self::attach(node, mesh, texture, position, rotation_z, sorting_offset)
    }

    fn attach(
        node: N,
        mesh: SpriteMesh,
        texture: TextureInfo,
        position: Vec3,
        rotation_z: f32,
        sorting_offset: i32,
    ) -> Self {
        let mut quad = Self {
            node,
            mesh,
            texture,
            position,
            scale: Vec3::ONE,
            rotation_z,
            sorting_order: 0,
            visible: true,
        };
        quad.push_geometry();
        quad.push_transform();
        quad.set_sorting_offset(sorting_offset);
        quad
    }

    fn push_geometry(&mut self) {
        self.node
            .attach_geometry(&self.mesh.positions, &self.mesh.uvs, &self.mesh.indices);
    }

    fn push_transform(&mut self) {
        self.node
            .set_transform(self.position, self.scale, self.rotation_z);
    }

    /// Remap the quad's UVs to a new atlas rectangle and re-attach.
    pub fn set_uv_rect(&mut self, rect: PixelRect) -> Result<()> {
        self.mesh.remap_uv(rect, self.texture)?;
        self.push_geometry();
        Ok(())
    }

    /// Recompute the sorting order from the current vertical position.
    ///
    /// Moving the quad does not recompute the order on its own; callers that
    /// want depth to track movement call this after moving.
    pub fn set_sorting_offset(&mut self, offset: i32) {
        let order = sorting::sorting_order_for(self.position, offset);
        self.set_sorting_order(order);
    }

    /// Set an explicit sorting order.
    pub fn set_sorting_order(&mut self, order: i32) {
        self.sorting_order = order;
        self.node.set_sorting_order(order);
    }

    /// The sorting order last pushed to the node.
    pub fn sorting_order(&self) -> i32 {
        self.sorting_order
    }

    /// Move the quad to a world position.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.push_transform();
    }

    /// Move the quad by a delta.
    pub fn add_position(&mut self, delta: Vec3) {
        self.set_position(self.position + delta);
    }

    /// Current world position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Set the quad's scale.
    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
        self.push_transform();
    }

    /// Make the node visible.
    pub fn show(&mut self) {
        self.visible = true;
        self.node.set_visible(true);
    }

    /// Hide the node.
    pub fn hide(&mut self) {
        self.visible = false;
        self.node.set_visible(false);
    }

    /// Current visibility.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The generated mesh.
    pub fn mesh(&self) -> &SpriteMesh {
        &self.mesh
    }

    /// The texture this quad samples from.
    pub fn texture(&self) -> TextureInfo {
        self.texture
    }

    /// The underlying scene node.
    pub fn node(&self) -> &N {
        &self.node
    }

    /// Destroy the underlying node, consuming the quad.
    pub fn destroy(mut self) -> N {
        self.node.destroy();
        self.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXTURE: TextureInfo = TextureInfo {
        width: 64,
        height: 64,
    };

    fn make_quad(position: Vec3, offset: i32) -> WorldQuad<HeadlessNode> {
        WorldQuad::new(
            HeadlessNode::new(),
            position,
            0.0,
            2.0,
            2.0,
            None,
            TEXTURE,
            offset,
        )
        .unwrap()
    }

    #[test]
    fn test_create_attaches_geometry_and_transform() {
        let quad = make_quad(Vec3::new(3.0, 10.0, 0.0), 0);
        let node = quad.node();

        assert_eq!(node.attach_count, 1);
        assert_eq!(node.positions.len(), 4);
        assert_eq!(node.indices, QUAD_INDICES);
        assert_eq!(node.position, Vec3::new(3.0, 10.0, 0.0));
        assert_eq!(node.scale, Vec3::ONE);
        assert_eq!(node.sorting_order, 4990); // 5000 - 10
    }

    #[test]
    fn test_from_corners_places_at_midpoint() {
        let quad = WorldQuad::from_corners(
            HeadlessNode::new(),
            Vec2::new(2.0, 4.0),
            Vec2::new(6.0, 10.0),
            None,
            TEXTURE,
            0,
        )
        .unwrap();

        assert_eq!(quad.position(), Vec3::new(4.0, 7.0, 0.0));
        assert_eq!(quad.mesh().vertex_count(), 4);
        // Sorting order derived from the midpoint's y
        assert_eq!(quad.sorting_order(), 4993);
    }

    #[test]
    fn test_empty_quad_has_no_geometry() {
        let quad = WorldQuad::empty(HeadlessNode::new(), Vec3::ZERO, 0.0, TEXTURE, 0);

        assert!(quad.mesh().is_empty());
        assert_eq!(quad.node().positions.len(), 0);
        assert_eq!(quad.sorting_order(), 5000);
    }

    #[test]
    fn test_set_uv_rect_reattaches() {
        let mut quad = make_quad(Vec3::ZERO, 0);
        assert_eq!(quad.node().attach_count, 1);

        quad.set_uv_rect(PixelRect::new(0, 0, 32, 32)).unwrap();

        assert_eq!(quad.node().attach_count, 2);
        assert_eq!(quad.node().uvs, quad.mesh().uvs);
        assert_eq!(quad.mesh().uvs[1], Vec2::new(0.5, 0.5));
    }

    #[test]
    fn test_set_uv_rect_on_empty_quad_fails() {
        let mut quad = WorldQuad::empty(HeadlessNode::new(), Vec3::ZERO, 0.0, TEXTURE, 0);
        assert!(quad.set_uv_rect(PixelRect::new(0, 0, 8, 8)).is_err());
        // Failed remap does not re-attach
        assert_eq!(quad.node().attach_count, 1);
    }

    #[test]
    fn test_sorting_offset_reads_current_position() {
        let mut quad = make_quad(Vec3::ZERO, 0);
        assert_eq!(quad.sorting_order(), 5000);

        // Moving alone leaves the order untouched
        quad.set_position(Vec3::new(0.0, 25.0, 0.0));
        assert_eq!(quad.sorting_order(), 5000);

        // Recomputing picks up the new position
        quad.set_sorting_offset(2);
        assert_eq!(quad.sorting_order(), 4977);
    }

    #[test]
    fn test_add_position_accumulates() {
        let mut quad = make_quad(Vec3::new(1.0, 1.0, 0.0), 0);
        quad.add_position(Vec3::new(2.0, 3.0, 0.0));

        assert_eq!(quad.position(), Vec3::new(3.0, 4.0, 0.0));
        assert_eq!(quad.node().position, Vec3::new(3.0, 4.0, 0.0));
    }

    #[test]
    fn test_show_hide() {
        let mut quad = make_quad(Vec3::ZERO, 0);
        assert!(quad.is_visible());

        quad.hide();
        assert!(!quad.is_visible());
        assert!(!quad.node().visible);

        quad.show();
        assert!(quad.is_visible());
        assert!(quad.node().visible);
    }

    #[test]
    fn test_destroy_forwards_to_node() {
        let quad = make_quad(Vec3::ZERO, 0);
        let node = quad.destroy();
        assert!(node.destroyed);
    }
}
