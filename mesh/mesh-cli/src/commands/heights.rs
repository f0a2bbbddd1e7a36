//! body-measure heights command - locate body-part heights.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use mesh_measure::locate_heights;

use crate::{Cli, OutputFormat, output};

pub fn run(input: &Path, cli: &Cli) -> Result<()> {
    let mesh = super::load(input)?;
    let axis = cli.params().axis;

    let heights = locate_heights(&mesh, axis)
        .with_context(|| format!("Failed to locate heights in {}", input.display()))?;

    match cli.format {
        OutputFormat::Json => output::print(&heights, cli.format, cli.quiet),
        OutputFormat::Text => {
            if cli.quiet {
                return Ok(());
            }
            println!("{}", "Body Heights".bold().underline());
            println!("  {}: {}", "File".cyan(), input.display());
            println!(
                "  {}: {} from {:.3} to {:.3} ({:.3})",
                "Extent".cyan(),
                heights.axis,
                heights.min,
                heights.max,
                heights.total()
            );
            for (part, h) in heights.iter() {
                println!(
                    "  {}: {h:.3} ({:.0}%)",
                    part.label().cyan(),
                    part.fraction() * 100.0
                );
            }
        }
    }

    Ok(())
}
