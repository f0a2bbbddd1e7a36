//! JSON vertex-array support.
//!
//! Three layouts are accepted:
//!
//! - a bare array of `[x, y, z]` triples
//! - an object with a `vertices` array of triples
//! - an SMPL-style batched object with `smpl_vertices`, an array of vertex
//!   arrays, of which the first entry is loaded
//!
//! Other fields are ignored, so exported fitting results can be loaded
//! directly.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use mesh_types::BodyMesh;
use serde::Deserialize;

use crate::error::{IoError, IoResult};

#[derive(Deserialize)]
#[serde(untagged)]
enum VertexDocument {
    Bare(Vec<[f64; 3]>),
    Object { vertices: Vec<[f64; 3]> },
    Batched { smpl_vertices: Vec<Vec<[f64; 3]>> },
}

impl VertexDocument {
    fn into_mesh(self) -> IoResult<BodyMesh> {
        let coords = match self {
            Self::Bare(vertices) | Self::Object { vertices } => vertices,
            Self::Batched { smpl_vertices } => smpl_vertices
                .into_iter()
                .next()
                .ok_or_else(|| IoError::invalid_content("smpl_vertices has no batch entries"))?,
        };
        Ok(BodyMesh::from_coords(coords))
    }
}

/// Load a body mesh from a JSON file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The document matches none of the accepted layouts
/// - A batched document has no entries
///
/// # Example
///
/// ```no_run
/// use mesh_io::load_json;
///
/// let mesh = load_json("before.json").unwrap();
/// println!("Loaded {} vertices", mesh.vertex_count());
/// ```
pub fn load_json<P: AsRef<Path>>(path: P) -> IoResult<BodyMesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| IoError::from_open(e, path))?;
    read_json(BufReader::new(file))
}

/// Read a body mesh from JSON in any reader.
///
/// # Errors
///
/// Same as [`load_json`], minus the file-system errors.
pub fn read_json<R: Read>(reader: R) -> IoResult<BodyMesh> {
    let document: VertexDocument = serde_json::from_reader(reader)?;
    document.into_mesh()
}

/// Parse a body mesh from a JSON string.
///
/// # Errors
///
/// Same as [`read_json`].
///
/// # Example
///
/// ```
/// use mesh_io::parse_json;
///
/// let mesh = parse_json(r#"{"smpl_vertices": [[[0, 0, 0], [1, 2, 3]]]}"#).unwrap();
/// assert_eq!(mesh.vertex_count(), 2);
/// ```
pub fn parse_json(text: &str) -> IoResult<BodyMesh> {
    let document: VertexDocument = serde_json::from_str(text)?;
    document.into_mesh()
}
