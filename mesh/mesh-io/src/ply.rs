//! PLY (Polygon File Format) vertex support.
//!
//! Reads the `x`, `y` and `z` properties of the `vertex` element from ASCII,
//! binary little-endian and binary big-endian files. Faces and any other
//! elements are ignored.
//!
//! # Example
//!
//! ```no_run
//! use mesh_io::load_ply;
//!
//! let mesh = load_ply("scan.ply").unwrap();
//! println!("Loaded {} vertices", mesh.vertex_count());
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use mesh_types::{BodyMesh, Point3};
use ply_rs::parser::Parser;
use ply_rs::ply::{DefaultElement, Property};

use crate::error::{IoError, IoResult};

/// Load the vertices of a PLY file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The file is not valid PLY format
/// - There is no `vertex` element
/// - A vertex lacks a numeric `x`, `y` or `z` property
pub fn load_ply<P: AsRef<Path>>(path: P) -> IoResult<BodyMesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| IoError::from_open(e, path))?;
    read_ply(&mut BufReader::new(file))
}

/// Read PLY vertices from any buffered reader.
///
/// # Errors
///
/// Same as [`load_ply`], minus the file-system errors.
pub fn read_ply<R: BufRead>(reader: &mut R) -> IoResult<BodyMesh> {
    // Use generic DefaultElement parser - works for all element types
    let parser = Parser::<DefaultElement>::new();

    let header = parser
        .read_header(reader)
        .map_err(|e| IoError::invalid_content(format!("failed to parse PLY header: {e}")))?;

    let payload = parser
        .read_payload(reader, &header)
        .map_err(|e| IoError::invalid_content(format!("failed to read PLY payload: {e}")))?;

    let elements = payload
        .get("vertex")
        .ok_or_else(|| IoError::invalid_content("PLY file has no vertex element"))?;

    let mut vertices = Vec::with_capacity(elements.len());
    for (i, element) in elements.iter().enumerate() {
        let coord = |key: &str| {
            get_float_property(element, key)
                .ok_or_else(|| IoError::invalid_content(format!("vertex {i} has no numeric {key}")))
        };
        vertices.push(Point3::new(coord("x")?, coord("y")?, coord("z")?));
    }

    Ok(BodyMesh::new(vertices))
}

/// Extract a float property from a PLY element.
fn get_float_property(element: &DefaultElement, key: &str) -> Option<f64> {
    match element.get(key)? {
        Property::Float(v) => Some(f64::from(*v)),
        Property::Double(v) => Some(*v),
        _ => None,
    }
}
