//! body-measure: Command-line body circumference measurement.
//!
//! Measures waist, thigh and arm circumferences of body meshes and compares
//! them between a `before` and an `after` scan.
//!
//! # Logging
//!
//! Set the `RUST_LOG` environment variable to control log output:
//! - `RUST_LOG=mesh_measure=info` - Per-measurement summaries
//! - `RUST_LOG=mesh_measure=debug` - Slice sizes and heights
//! - `RUST_LOG=body_measure=debug` - Parameters resolved from the flags
//! - `RUST_LOG=debug` - All debug output
//!
//! # Example
//!
//! ```bash
//! # Before/after report
//! body-measure compare before.json after.json
//!
//! # Circumference at one height, millimeter-scale mesh with Z up
//! body-measure --axis z --tolerance 20 measure scan.ply --height 950
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use mesh_measure::{DEFAULT_TOLERANCE, MIN_SLICE_POINTS, MeasureParams};
use mesh_types::Axis;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;
mod output;

use commands::{compare, heights, info, measure};

/// body-measure - Body circumference from 3D vertex clouds.
///
/// Slices a body mesh at waist, thigh and arm height and reports the
/// convex-hull perimeter of each slice.
#[derive(Parser)]
#[command(name = "body-measure")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Vertical axis of the mesh
    #[arg(long, global = true, default_value = "y")]
    axis: AxisArg,

    /// Half-width of the slice band around each height, in mesh units
    #[arg(long, global = true, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Minimum slice vertices required for a measurement
    #[arg(long, global = true, default_value_t = MIN_SLICE_POINTS)]
    min_points: usize,

    /// Output format for results
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Suppress all non-error output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Measurement parameters from the global flags.
    fn params(&self) -> MeasureParams {
        let params = MeasureParams::default()
            .with_axis(self.axis.into())
            .with_tolerance(self.tolerance)
            .with_min_points(self.min_points);
        debug!(
            axis = %params.axis,
            tolerance = params.tolerance,
            min_points = params.min_points,
            "Measurement parameters"
        );
        params
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for scripting
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum AxisArg {
    X,
    Y,
    Z,
}

impl From<AxisArg> for Axis {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::X => Self::X,
            AxisArg::Y => Self::Y,
            AxisArg::Z => Self::Z,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Measure circumferences of a single mesh
    Measure {
        /// Input mesh file (.json, .ply or .obj)
        input: PathBuf,

        /// Measure only at this height instead of at every body part
        #[arg(long)]
        height: Option<f64>,
    },

    /// Show the waist, thigh and arm heights of a mesh
    Heights {
        /// Input mesh file
        input: PathBuf,
    },

    /// Compare circumferences between two meshes
    Compare {
        /// Mesh before the change; body-part heights are taken from it
        before: PathBuf,

        /// Mesh after the change
        after: PathBuf,
    },

    /// Display mesh statistics
    Info {
        /// Input mesh file
        input: PathBuf,
    },
}

/// Initialize the tracing subscriber based on verbosity level.
fn init_tracing(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    // RUST_LOG wins over -v flags
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "body_measure=info,mesh_measure=info,mesh_io=info",
            2 => "body_measure=debug,mesh_measure=debug,mesh_io=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Measure { input, height } => measure::run(input, *height, &cli),
        Commands::Heights { input } => heights::run(input, &cli),
        Commands::Compare { before, after } => compare::run(before, after, &cli),
        Commands::Info { input } => info::run(input, &cli),
    };

    if let Err(e) = &result {
        if !cli.quiet {
            eprintln!("{}: {}", "Error".red().bold(), e);
            for cause in e.chain().skip(1) {
                eprintln!("  {}: {}", "Caused by".yellow(), cause);
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
