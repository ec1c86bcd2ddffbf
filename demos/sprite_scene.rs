//! Example: Build a small sprite scene headlessly
//!
//! This example demonstrates the full pipeline:
//! 1. Describe a sprite atlas over one texture
//! 2. Place quads in the world through the scene abstraction
//! 3. Re-slice a quad's UVs and adjust its draw order
//! 4. Export one quad to OBJ and save the artifacts

use glam::{Vec2, Vec3};
use sprite_mesher::{
    HeadlessNode, ObjExport, PixelRect, SpriteAtlas, TextureInfo, WorldQuad,
};
use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A 128x128 sprite sheet holding four 32x32 sprites along the bottom row
    let texture = TextureInfo::new(128, 128);
    let mut atlas = SpriteAtlas::new(texture);
    atlas.add_region("grass", PixelRect::new(0, 0, 32, 32))?;
    atlas.add_region("dirt", PixelRect::new(32, 0, 32, 32))?;
    atlas.add_region("water", PixelRect::new(64, 0, 32, 32))?;
    atlas.add_region("stone", PixelRect::new(96, 0, 32, 32))?;

    println!("Atlas: {} regions over {}x{}", atlas.region_count(), texture.width, texture.height);

    // A ground tile at the origin and a second tile further up the screen
    let mut near = WorldQuad::new(
        HeadlessNode::new(),
        Vec3::new(0.0, 0.0, 0.0),
        0.0,
        1.0,
        1.0,
        atlas.region("grass"),
        texture,
        0,
    )?;
    let far = WorldQuad::new(
        HeadlessNode::new(),
        Vec3::new(0.0, 8.0, 0.0),
        0.0,
        1.0,
        1.0,
        atlas.region("dirt"),
        texture,
        0,
    )?;

    println!("near: {}", near.node().summary());
    println!("far:  {}", far.node().summary());
    assert!(near.sorting_order() > far.sorting_order());

    // Swap the near tile's sprite without rebuilding the quad
    near.set_uv_rect(atlas.region("water").unwrap())?;
    println!("near re-sliced to 'water': {}", near.node().summary());

    // A banner stretched between two world-space corners
    let banner = WorldQuad::from_corners(
        HeadlessNode::new(),
        Vec2::new(-4.0, 10.0),
        Vec2::new(4.0, 12.0),
        atlas.region("stone"),
        texture,
        5,
    )?;
    println!("banner placed at {:?}", banner.position());

    // Export the banner's mesh for inspection
    let export = ObjExport::from_mesh(banner.mesh(), "banner")?;
    fs::write("banner.obj", &export.obj)?;
    fs::write("banner.mtl", &export.mtl)?;
    println!("Wrote banner.obj / banner.mtl");

    // Save the atlas manifest alongside
    fs::write("atlas.json", atlas.to_manifest()?)?;
    println!("Wrote atlas.json");

    Ok(())
}
