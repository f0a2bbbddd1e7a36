//! OBJ (Wavefront) vertex support.
//!
//! Only `v x y z` lines are read; an optional fourth `w` component is
//! ignored, as are normals, texture coordinates, faces and groups.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use mesh_types::{BodyMesh, Point3};

use crate::error::{IoError, IoResult};

/// Load the vertices of an OBJ file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a `v` line does not hold
/// three numeric coordinates.
///
/// # Example
///
/// ```no_run
/// use mesh_io::load_obj;
///
/// let mesh = load_obj("body.obj").unwrap();
/// println!("Loaded {} vertices", mesh.vertex_count());
/// ```
pub fn load_obj<P: AsRef<Path>>(path: P) -> IoResult<BodyMesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| IoError::from_open(e, path))?;
    read_obj(BufReader::new(file))
}

/// Read OBJ vertices from any buffered reader.
///
/// # Errors
///
/// Same as [`load_obj`], minus the file-system errors.
pub fn read_obj<R: BufRead>(reader: R) -> IoResult<BodyMesh> {
    let mut vertices = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let mut tokens = line.split_whitespace();
        if tokens.next() != Some("v") {
            continue;
        }

        let mut coords = [0.0; 3];
        for c in &mut coords {
            let token = tokens.next().ok_or_else(|| IoError::InvalidLine {
                line: index + 1,
                message: "vertex needs three coordinates".to_string(),
            })?;
            *c = token.parse().map_err(|e| IoError::InvalidLine {
                line: index + 1,
                message: format!("bad coordinate {token:?}: {e}"),
            })?;
        }
        vertices.push(Point3::from(coords));
    }

    Ok(BodyMesh::new(vertices))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_vertex_lines_only() {
        let text = "\
# exported body
o body
v 0.0 0.0 0.0
v 1.5 2.5 -3.5 1.0
vn 0 1 0
vt 0.5 0.5
f 1 2 3
v\t4 5 6
";
        let mesh = read_obj(text.as_bytes()).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.vertices()[1], Point3::new(1.5, 2.5, -3.5));
        assert_eq!(mesh.vertices()[2], Point3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn short_vertex_line_reports_line_number() {
        let text = "v 0 0 0\n\nv 1 2\n";
        match read_obj(text.as_bytes()) {
            Err(IoError::InvalidLine { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected InvalidLine, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_coordinate() {
        let err = read_obj("v 0 x 0\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn load_nonexistent_file() {
        let result = load_obj("nonexistent_file_12345.obj");
        assert!(matches!(result, Err(IoError::FileNotFound { .. })));
    }
}
