//! body-measure compare command - before/after circumference report.

use std::path::Path;

use anyhow::{Context, Result};
use mesh_measure::{Comparison, compare};
use serde::Serialize;
use tracing::info;

use crate::{Cli, OutputFormat, output};

#[derive(Serialize)]
struct CompareReport<'a> {
    before: String,
    after: String,
    #[serde(flatten)]
    comparison: &'a Comparison,
}

pub fn run(before_path: &Path, after_path: &Path, cli: &Cli) -> Result<()> {
    let before = super::load(before_path)?;
    let after = super::load(after_path)?;
    let params = cli.params();

    output::info(
        &format!(
            "Comparing {} vertices against {} vertices",
            before.vertex_count(),
            after.vertex_count()
        ),
        cli.format,
        cli.quiet,
    );

    let comparison = compare(&before, &after, &params).with_context(|| {
        format!(
            "Failed to compare {} with {}",
            before_path.display(),
            after_path.display()
        )
    })?;

    info!(
        measured = comparison.measured_count(),
        "Compared {} with {}",
        before_path.display(),
        after_path.display()
    );

    if comparison.measured_count() == 0 {
        output::warn(
            "no body part could be measured on both meshes; check --axis and --tolerance",
            cli.format,
            cli.quiet,
        );
    }

    match cli.format {
        OutputFormat::Json => output::print(
            &CompareReport {
                before: before_path.display().to_string(),
                after: after_path.display().to_string(),
                comparison: &comparison,
            },
            cli.format,
            cli.quiet,
        ),
        OutputFormat::Text => {
            if !cli.quiet {
                print!("{comparison}");
            }
        }
    }

    Ok(())
}
