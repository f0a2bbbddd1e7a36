//! Body mesh loading.
//!
//! This crate reads vertex clouds for body measurement from common formats:
//!
//! - **JSON** - Bare `[x, y, z]` arrays, `{"vertices": ...}` objects, or
//!   SMPL-style `{"smpl_vertices": ...}` batches (first entry)
//! - **PLY** (Polygon File Format) - Binary and ASCII
//! - **OBJ** (Wavefront) - ASCII only
//!
//! Only vertex positions are read. Faces, normals and other attributes are
//! ignored because measurement works on the point cloud alone.
//!
//! # Example
//!
//! ```no_run
//! use mesh_io::load_mesh;
//!
//! // Format detected from .json extension
//! let mesh = load_mesh("before.json").unwrap();
//! println!("{} vertices", mesh.vertex_count());
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod json;
mod obj;
mod ply;

pub use error::{IoError, IoResult};
pub use json::{load_json, parse_json, read_json};
pub use obj::{load_obj, read_obj};
pub use ply::{load_ply, read_ply};

use std::fmt;
use std::path::Path;

use mesh_types::BodyMesh;
use tracing::info;

/// Supported mesh file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshFormat {
    /// JSON vertex arrays.
    Json,
    /// PLY (Polygon File Format).
    /// Supports binary and ASCII variants.
    Ply,
    /// OBJ (Wavefront) format.
    Obj,
}

impl MeshFormat {
    /// Detect format from file extension.
    ///
    /// Returns `None` if the extension is not recognized.
    #[must_use]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "ply" => Some(Self::Ply),
            "obj" => Some(Self::Obj),
            _ => None,
        }
    }

    /// Get the canonical file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Ply => "ply",
            Self::Obj => "obj",
        }
    }
}

impl fmt::Display for MeshFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Load a body mesh from a file, detecting format from extension.
///
/// # Errors
///
/// Returns an error if:
/// - The file format cannot be determined from the extension
/// - The file cannot be read
/// - The file content is invalid for the detected format
///
/// # Example
///
/// ```no_run
/// use mesh_io::load_mesh;
///
/// let mesh = load_mesh("scan.ply").unwrap();
/// ```
pub fn load_mesh<P: AsRef<Path>>(path: P) -> IoResult<BodyMesh> {
    let path = path.as_ref();
    let format = MeshFormat::from_path(path).ok_or_else(|| IoError::UnknownFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    })?;

    let mesh = match format {
        MeshFormat::Json => load_json(path)?,
        MeshFormat::Ply => load_ply(path)?,
        MeshFormat::Obj => load_obj(path)?,
    };

    info!(
        path = %path.display(),
        format = %format,
        vertices = mesh.vertex_count(),
        "Loaded mesh"
    );

    Ok(mesh)
}
