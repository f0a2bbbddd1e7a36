//! Subcommand implementations.

use std::path::Path;

use anyhow::{Context, Result};
use mesh_types::BodyMesh;

pub mod compare;
pub mod heights;
pub mod info;
pub mod measure;

/// Load a mesh, attaching the path to any error.
fn load(path: &Path) -> Result<BodyMesh> {
    mesh_io::load_mesh(path).with_context(|| format!("Failed to load mesh from {}", path.display()))
}
