//! body-measure info command - display mesh statistics.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use mesh_measure::dimensions;
use mesh_types::Axis;
use serde::Serialize;

use crate::{Cli, OutputFormat, output};

#[derive(Serialize)]
struct MeshInfo {
    path: String,
    vertices: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    bounds: Option<BoundsInfo>,
    vertical_axis: Axis,
}

#[derive(Serialize)]
struct BoundsInfo {
    min: [f64; 3],
    max: [f64; 3],
    dimensions: [f64; 3],
    dominant_axis: Axis,
}

pub fn run(input: &Path, cli: &Cli) -> Result<()> {
    let mesh = super::load(input)?;
    let axis = cli.params().axis;

    let dims = dimensions(&mesh);
    let bounds = (!mesh.is_empty()).then(|| BoundsInfo {
        min: [dims.min.x, dims.min.y, dims.min.z],
        max: [dims.max.x, dims.max.y, dims.max.z],
        dimensions: [dims.size.x, dims.size.y, dims.size.z],
        dominant_axis: dims.dominant_axis(),
    });

    let info = MeshInfo {
        path: input.display().to_string(),
        vertices: mesh.vertex_count(),
        bounds,
        vertical_axis: axis,
    };

    if let Some(tallest) = info.bounds.as_ref().map(|b| b.dominant_axis) {
        if tallest != axis {
            output::warn(
                &format!(
                    "mesh is tallest along {tallest}, but the vertical axis is {axis}; consider --axis {tallest}"
                ),
                cli.format,
                cli.quiet,
            );
        }
    }

    match cli.format {
        OutputFormat::Json => {
            output::print(&info, cli.format, cli.quiet);
        }
        OutputFormat::Text => {
            if !cli.quiet {
                println!("{}", "Mesh Information".bold().underline());
                println!("  {}: {}", "File".cyan(), input.display());
                println!("  {}: {}", "Vertices".cyan(), info.vertices);

                if let Some(ref b) = info.bounds {
                    println!(
                        "  {}: {:.3} x {:.3} x {:.3}",
                        "Dimensions".cyan(),
                        b.dimensions[0],
                        b.dimensions[1],
                        b.dimensions[2]
                    );
                    println!(
                        "  {}: ({:.3}, {:.3}, {:.3})",
                        "Min bounds".cyan(),
                        b.min[0],
                        b.min[1],
                        b.min[2]
                    );
                    println!(
                        "  {}: ({:.3}, {:.3}, {:.3})",
                        "Max bounds".cyan(),
                        b.max[0],
                        b.max[1],
                        b.max[2]
                    );
                    println!("  {}: {}", "Tallest axis".cyan(), b.dominant_axis);
                }
                println!("  {}: {}", "Vertical axis".cyan(), info.vertical_axis);
            }
        }
    }

    Ok(())
}
