//! Mesh dimension extraction.
//!
//! Provides axis-aligned bounding box dimensions of a body mesh.

use mesh_types::{Axis, BodyMesh, MeshBounds, Point3, Vector3};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Result of dimension extraction.
///
/// # Example
///
/// ```
/// use mesh_measure::dimensions;
/// use mesh_types::{Axis, BodyMesh};
///
/// let mesh = BodyMesh::from_coords([[-0.2, 0.0, -0.1], [0.2, 1.7, 0.1]]);
/// let dims = dimensions(&mesh);
///
/// assert!((dims.extent(Axis::Y) - 1.7).abs() < 1e-10);
/// assert!((dims.size.x - 0.4).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Dimensions {
    /// Number of vertices measured.
    pub vertex_count: usize,
    /// Bounding box minimum point.
    pub min: Point3<f64>,
    /// Bounding box maximum point.
    pub max: Point3<f64>,
    /// Extent along each axis.
    pub size: Vector3<f64>,
    /// Diagonal length of bounding box.
    pub diagonal: f64,
    /// Center of bounding box.
    pub center: Point3<f64>,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            vertex_count: 0,
            min: Point3::origin(),
            max: Point3::origin(),
            size: Vector3::zeros(),
            diagonal: 0.0,
            center: Point3::origin(),
        }
    }
}

impl Dimensions {
    /// Extent along one axis.
    #[must_use]
    pub fn extent(&self, axis: Axis) -> f64 {
        self.size[axis.index()]
    }

    /// Get the longest dimension.
    #[must_use]
    pub fn max_extent(&self) -> f64 {
        self.size.x.max(self.size.y).max(self.size.z)
    }

    /// Axis with the largest extent.
    ///
    /// For an upright body this is the vertical axis. Ties resolve to the
    /// lower axis.
    #[must_use]
    pub fn dominant_axis(&self) -> Axis {
        Axis::ALL
            .into_iter()
            .fold(Axis::X, |best, a| {
                if self.extent(a) > self.extent(best) { a } else { best }
            })
    }
}

/// Extract dimensions of a mesh.
///
/// Returns zeroed [`Dimensions`] for an empty mesh.
#[must_use]
pub fn dimensions(mesh: &BodyMesh) -> Dimensions {
    let Some(bounds) = mesh.bounds_opt() else {
        return Dimensions::default();
    };

    let size = bounds.size();
    Dimensions {
        vertex_count: mesh.vertex_count(),
        min: bounds.min,
        max: bounds.max,
        size,
        diagonal: size.norm(),
        center: bounds.center(),
    }
}
