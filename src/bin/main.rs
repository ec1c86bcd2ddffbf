//! Sprite Mesher CLI
//!
//! Generate 2D quad meshes and atlas UV coordinates.

use clap::{Parser, Subcommand, ValueEnum};
use sprite_mesher::{
    sorting_order, ObjExport, PixelRect, SpriteAtlas, SpriteMesh, TextureInfo, SORTING_ORDER_BASE,
};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sprite-mesher")]
#[command(author, version, about = "Generate 2D quad meshes and atlas UV coordinates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a quad mesh and export it
    Quad {
        /// Quad width in world units
        #[arg(short = 'W', long)]
        width: f32,

        /// Quad height in world units
        #[arg(short = 'H', long)]
        height: f32,

        /// Source texture width in pixels
        #[arg(long)]
        texture_width: u32,

        /// Source texture height in pixels
        #[arg(long)]
        texture_height: u32,

        /// Atlas rectangle as "x,y,width,height" in pixels (defaults to the full texture)
        #[arg(short, long, value_parser = parse_rect)]
        rect: Option<PixelRect>,

        /// Vertical world position, used for the sorting order
        #[arg(short = 'y', long, default_value = "0.0")]
        y_position: f32,

        /// Sorting-order offset
        #[arg(short, long, default_value = "0")]
        sorting_offset: i32,

        /// Output file path (without extension)
        #[arg(short, long)]
        output: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "obj")]
        format: OutputFormat,
    },

    /// Map a named atlas region to UV coordinates
    Slice {
        /// Path to an atlas manifest (JSON)
        #[arg(short, long)]
        manifest: PathBuf,

        /// Region name to slice
        #[arg(short, long)]
        region: String,
    },

    /// Show information about an atlas manifest
    Info {
        /// Path to an atlas manifest (JSON)
        #[arg(short, long)]
        manifest: PathBuf,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Wavefront OBJ format
    Obj,
    /// JSON vertex data
    Json,
}

fn parse_rect(s: &str) -> Result<PixelRect, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 4 {
        return Err(format!("Invalid rect format: '{}'. Use x,y,width,height", s));
    }
    let mut values = [0u32; 4];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse()
            .map_err(|e| format!("Invalid rect value '{}': {}", part, e))?;
    }
    Ok(PixelRect::new(values[0], values[1], values[2], values[3]))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Quad {
            width,
            height,
            texture_width,
            texture_height,
            rect,
            y_position,
            sorting_offset,
            output,
            format,
        } => {
            build_quad(
                width,
                height,
                TextureInfo::new(texture_width, texture_height),
                rect,
                y_position,
                sorting_offset,
                &output,
                format,
            )?;
        }
        Commands::Slice { manifest, region } => {
            slice_region(&manifest, &region)?;
        }
        Commands::Info { manifest } => {
            show_atlas_info(&manifest)?;
        }
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn build_quad(
    width: f32,
    height: f32,
    texture: TextureInfo,
    rect: Option<PixelRect>,
    y_position: f32,
    sorting_offset: i32,
    output_path: &PathBuf,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Building {}x{} quad over {}x{} texture...", width, height, texture.width, texture.height);
    if let Some(r) = &rect {
        println!("  Atlas rect: {}x{} at ({}, {})", r.width, r.height, r.x, r.y);
    }

    let mesh = SpriteMesh::quad(width, height, rect, texture)?;
    let order = sorting_order(y_position, SORTING_ORDER_BASE, sorting_offset);

    println!(
        "  Generated {} vertices, {} triangles, sorting order {}",
        mesh.vertex_count(),
        mesh.triangle_count(),
        order
    );

    export_output(&mesh, output_path, format)?;

    Ok(())
}

fn slice_region(manifest_path: &PathBuf, region: &str) -> Result<(), Box<dyn std::error::Error>> {
    let atlas = load_atlas(manifest_path)?;

    let rect = atlas
        .region(region)
        .ok_or_else(|| format!("region '{}' not found in manifest", region))?;
    let uv = atlas.uv_rect(region)?;

    println!("Region '{}': {}x{} at ({}, {})", region, rect.width, rect.height, rect.x, rect.y);
    println!("  top-left     ({}, {})", uv[0].x, uv[0].y);
    println!("  top-right    ({}, {})", uv[1].x, uv[1].y);
    println!("  bottom-left  ({}, {})", uv[2].x, uv[2].y);
    println!("  bottom-right ({}, {})", uv[3].x, uv[3].y);

    Ok(())
}

fn show_atlas_info(manifest_path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let atlas = load_atlas(manifest_path)?;
    let texture = atlas.texture();

    println!("Atlas Info:");
    println!("  Texture: {}x{}", texture.width, texture.height);
    println!("  Regions: {}", atlas.region_count());

    let mut names: Vec<&str> = atlas.names().collect();
    names.sort_unstable();
    for name in names {
        let rect = atlas.region(name).unwrap();
        println!(
            "    {} — {}x{} at ({}, {})",
            name, rect.width, rect.height, rect.x, rect.y
        );
    }

    Ok(())
}

fn load_atlas(manifest_path: &PathBuf) -> Result<SpriteAtlas, Box<dyn std::error::Error>> {
    println!("Loading atlas manifest from {:?}...", manifest_path);
    let json = fs::read_to_string(manifest_path)?;
    Ok(SpriteAtlas::from_manifest(&json)?)
}

fn export_output(
    mesh: &SpriteMesh,
    path: &PathBuf,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Obj => {
            let export = ObjExport::from_mesh(mesh, "quad")?;

            let obj_path = if path.extension().is_some() {
                path.clone()
            } else {
                path.with_extension("obj")
            };
            let mtl_path = obj_path.with_extension("mtl");

            fs::write(&obj_path, &export.obj)?;
            fs::write(&mtl_path, &export.mtl)?;

            println!("Exported OBJ to {:?}", obj_path);
            println!("  Material: {:?}", mtl_path);
        }
        OutputFormat::Json => {
            let json_path = if path.extension().is_some() {
                path.clone()
            } else {
                path.with_extension("json")
            };
            let json = serde_json::to_string_pretty(mesh)?;
            fs::write(&json_path, json)?;

            println!("Exported JSON to {:?}", json_path);
        }
    }

    Ok(())
}
