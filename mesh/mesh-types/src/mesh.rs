//! Body mesh vertex cloud.

use crate::{Aabb, MeshBounds};
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered cloud of body-surface vertices.
///
/// A `BodyMesh` is immutable once built: there are no mutable accessors,
/// and [`BodyMesh::merged`] returns a new mesh. Vertex order is preserved
/// from the source, so two meshes produced by the same body model line up
/// index for index.
///
/// Only positions are stored. Face connectivity from the source file, if
/// any, is dropped by the loaders.
///
/// # Example
///
/// ```
/// use mesh_types::{BodyMesh, Point3};
///
/// let mesh = BodyMesh::from_coords([[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.vertices()[1], Point3::new(1.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BodyMesh {
    vertices: Vec<Point3<f64>>,
}

impl BodyMesh {
    /// Create a mesh from vertex positions.
    #[inline]
    #[must_use]
    pub const fn new(vertices: Vec<Point3<f64>>) -> Self {
        Self { vertices }
    }

    /// Create a mesh from coordinate triples.
    #[must_use]
    pub fn from_coords(coords: impl IntoIterator<Item = [f64; 3]>) -> Self {
        coords
            .into_iter()
            .map(|[x, y, z]| Point3::new(x, y, z))
            .collect()
    }

    /// Vertex positions in source order.
    #[inline]
    #[must_use]
    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Check if the mesh has no vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over vertex positions.
    pub fn iter(&self) -> std::slice::Iter<'_, Point3<f64>> {
        self.vertices.iter()
    }

    /// Return a copy with `other`'s vertices appended.
    #[must_use]
    pub fn merged(&self, other: &Self) -> Self {
        self.iter().chain(other.iter()).copied().collect()
    }
}

impl MeshBounds for BodyMesh {
    fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter())
    }
}

impl FromIterator<Point3<f64>> for BodyMesh {
    fn from_iter<I: IntoIterator<Item = Point3<f64>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Point3<f64>>> for BodyMesh {
    fn from(vertices: Vec<Point3<f64>>) -> Self {
        Self::new(vertices)
    }
}

impl<'a> IntoIterator for &'a BodyMesh {
    type Item = &'a Point3<f64>;
    type IntoIter = std::slice::Iter<'a, Point3<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}
