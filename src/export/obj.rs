//! Wavefront OBJ export.
//!
//! OBJ is a simple, widely-supported text-based 3D format, handy for
//! eyeballing generated quads in an external viewer.

use crate::error::Result;
use crate::mesher::SpriteMesh;
use std::fmt::Write;

/// Export a mesh to OBJ format.
/// Returns (obj_content, mtl_content) as strings. Quads face +Z, so every
/// vertex gets the normal (0, 0, 1).
pub fn export_obj(mesh: &SpriteMesh, name: &str) -> Result<(String, String)> {
    let vert_count = mesh.vertex_count();
    let tri_count = mesh.triangle_count();

    // Pre-size buffers: ~60 bytes per vertex line (v/vt/vn) x 3 + ~40 per face
    let obj_capacity = 256 + vert_count * 180 + tri_count * 40;
    let mut obj = String::with_capacity(obj_capacity);
    let mut mtl = String::with_capacity(256);

    // OBJ header
    writeln!(obj, "# Sprite Mesher OBJ Export").unwrap();
    writeln!(obj, "# Vertices: {}", vert_count).unwrap();
    writeln!(obj, "# Triangles: {}", tri_count).unwrap();
    writeln!(obj).unwrap();

    // Reference material file
    writeln!(obj, "mtllib {}.mtl", name).unwrap();
    writeln!(obj).unwrap();

    // Object name
    writeln!(obj, "o {}", name).unwrap();
    writeln!(obj).unwrap();

    // Vertex, UV, and normal pools
    for position in &mesh.positions {
        writeln!(obj, "v {} {} {}", position.x, position.y, position.z).unwrap();
    }
    writeln!(obj).unwrap();

    for uv in &mesh.uvs {
        writeln!(obj, "vt {} {}", uv.x, uv.y).unwrap();
    }
    writeln!(obj).unwrap();

    for _ in &mesh.positions {
        writeln!(obj, "vn 0 0 1").unwrap();
    }
    writeln!(obj).unwrap();

    // Faces (1-based indices)
    writeln!(obj, "usemtl {}_material", name).unwrap();
    writeln!(obj).unwrap();
    for i in (0..mesh.indices.len()).step_by(3) {
        let i0 = mesh.indices[i] as usize + 1;
        let i1 = mesh.indices[i + 1] as usize + 1;
        let i2 = mesh.indices[i + 2] as usize + 1;
        writeln!(
            obj,
            "f {}/{}/{} {}/{}/{} {}/{}/{}",
            i0, i0, i0, i1, i1, i1, i2, i2, i2
        )
        .unwrap();
    }

    // MTL file
    writeln!(mtl, "# Sprite Mesher Material").unwrap();
    writeln!(mtl).unwrap();
    writeln!(mtl, "newmtl {}_material", name).unwrap();
    writeln!(mtl, "Ka 1.0 1.0 1.0").unwrap();
    writeln!(mtl, "Kd 1.0 1.0 1.0").unwrap();
    writeln!(mtl, "Ks 0.0 0.0 0.0").unwrap();
    writeln!(mtl, "Ns 10.0").unwrap();
    writeln!(mtl, "d 1.0").unwrap();
    writeln!(mtl, "illum 1").unwrap();
    writeln!(mtl, "map_Kd {}_atlas.png", name).unwrap();

    Ok((obj, mtl))
}

/// Export mesh to OBJ format strings for writing to files.
pub struct ObjExport {
    pub obj: String,
    pub mtl: String,
}

impl ObjExport {
    pub fn from_mesh(mesh: &SpriteMesh, name: &str) -> Result<Self> {
        let (obj, mtl) = export_obj(mesh, name)?;
        Ok(Self { obj, mtl })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TextureInfo;

    #[test]
    fn test_export_quad_obj() {
        let mesh = SpriteMesh::quad(2.0, 2.0, None, TextureInfo::new(16, 16)).unwrap();
        let (obj, mtl) = export_obj(&mesh, "sprite").unwrap();

        assert!(obj.contains("o sprite"));
        assert!(obj.contains("v -1 1 0"));
        assert!(obj.contains("v 1 -1 0"));
        assert!(obj.contains("vt 0 1"));
        assert!(obj.contains("vn 0 0 1"));
        // Two faces from the fixed winding [0,1,2, 2,1,3], 1-based
        assert!(obj.contains("f 1/1/1 2/2/2 3/3/3"));
        assert!(obj.contains("f 3/3/3 2/2/2 4/4/4"));
        assert!(mtl.contains("newmtl sprite_material"));
        assert!(mtl.contains("map_Kd sprite_atlas.png"));
    }

    #[test]
    fn test_export_empty_mesh() {
        let mesh = SpriteMesh::empty();
        let (obj, _) = export_obj(&mesh, "nothing").unwrap();

        assert!(obj.contains("# Vertices: 0"));
        assert!(!obj.contains("\nf "));
    }
}
