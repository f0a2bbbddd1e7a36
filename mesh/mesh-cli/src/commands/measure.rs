//! body-measure measure command - circumference of one mesh.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use mesh_measure::{BodyMeasurements, measure_body, slice};
use mesh_types::Axis;
use serde::Serialize;

use crate::{Cli, OutputFormat, output};

#[derive(Serialize)]
struct HeightMeasurement {
    path: String,
    axis: Axis,
    height: f64,
    tolerance: f64,
    slice_points: usize,
    hull_vertices: usize,
    circumference: Option<f64>,
}

#[derive(Serialize)]
struct BodyReport<'a> {
    path: String,
    #[serde(flatten)]
    measurements: &'a BodyMeasurements,
}

pub fn run(input: &Path, height: Option<f64>, cli: &Cli) -> Result<()> {
    let mesh = super::load(input)?;
    let params = cli.params();

    match height {
        Some(height) => {
            let slice = slice(&mesh, height, &params)
                .with_context(|| format!("Failed to slice {} at {height}", input.display()))?;
            let (hull, circumference) = slice.hull_and_perimeter(params.min_points);
            let result = HeightMeasurement {
                path: input.display().to_string(),
                axis: params.axis,
                height,
                tolerance: params.tolerance,
                slice_points: slice.len(),
                hull_vertices: hull.len(),
                circumference,
            };
            report_height(&result, params.min_points, cli);
        }
        None => {
            let measurements = measure_body(&mesh, &params)
                .with_context(|| format!("Failed to measure {}", input.display()))?;
            match cli.format {
                OutputFormat::Json => output::print(
                    &BodyReport {
                        path: input.display().to_string(),
                        measurements: &measurements,
                    },
                    cli.format,
                    cli.quiet,
                ),
                OutputFormat::Text => {
                    if !cli.quiet {
                        print!("{measurements}");
                    }
                }
            }
        }
    }

    Ok(())
}

fn report_height(result: &HeightMeasurement, min_points: usize, cli: &Cli) {
    match cli.format {
        OutputFormat::Json => output::print(result, cli.format, cli.quiet),
        OutputFormat::Text => {
            if cli.quiet {
                return;
            }
            println!("{}", "Slice Measurement".bold().underline());
            println!("  {}: {}", "File".cyan(), result.path);
            println!(
                "  {}: {} = {} (± {})",
                "Height".cyan(),
                result.axis,
                result.height,
                result.tolerance
            );
            println!("  {}: {}", "Slice vertices".cyan(), result.slice_points);
            println!("  {}: {}", "Hull vertices".cyan(), result.hull_vertices);
            match result.circumference {
                Some(c) => println!("  {}: {c:.2}", "Circumference".cyan()),
                None => println!(
                    "  {}: {} (need at least {min_points} slice vertices)",
                    "Circumference".cyan(),
                    "insufficient data".yellow()
                ),
            }
        }
    }
}
