//! Sprite atlas catalogues.
//!
//! This module names pixel regions of a shared texture so sprites can be
//! selected by name instead of hand-written rectangles.

mod sheet;

pub use sheet::SpriteAtlas;
