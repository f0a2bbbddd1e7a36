//! Horizontal slices of a body mesh.
//!
//! A slice is the band of vertices lying close to a given height, flattened
//! onto the plane perpendicular to the vertical axis.

use mesh_types::{Axis, BodyMesh, Point2};
use tracing::debug;

use crate::error::{MeasureError, MeasureResult};
use crate::hull::{ConvexHull, convex_hull, perimeter};
use crate::params::MeasureParams;

/// Points of a body mesh near one height, projected to 2D.
///
/// Slices are cheap to recompute and carry no identity beyond their points.
///
/// # Example
///
/// ```
/// use mesh_measure::{slice, MeasureParams};
/// use mesh_types::BodyMesh;
///
/// let mesh = BodyMesh::from_coords([
///     [1.0, 0.50, 0.0],
///     [0.0, 0.51, 1.0],
///     [5.0, 0.90, 5.0],
/// ]);
///
/// let s = slice(&mesh, 0.5, &MeasureParams::default()).unwrap();
/// assert_eq!(s.len(), 2);
/// assert_eq!(s.points[1].x, 0.0);
/// assert_eq!(s.points[1].y, 1.0); // the mesh's z coordinate
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    /// Height of the slicing plane along `axis`.
    pub height: f64,
    /// Half-width of the band the points were drawn from.
    pub tolerance: f64,
    /// Vertical axis that was dropped by the projection.
    pub axis: Axis,
    /// Projected points, in mesh vertex order.
    pub points: Vec<Point2<f64>>,
}

impl Slice {
    /// Number of points in the slice.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if no vertex fell inside the band.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Convex hull of the slice points.
    #[must_use]
    pub fn hull(&self) -> ConvexHull {
        convex_hull(&self.points)
    }

    /// Hull perimeter, or `None` if the slice has fewer than `min_points`.
    #[must_use]
    pub fn perimeter(&self, min_points: usize) -> Option<f64> {
        perimeter(&self.points, min_points)
    }

    /// Hull of the slice together with its perimeter, gated on
    /// `min_points` the same way as [`Slice::perimeter`].
    ///
    /// The hull is built even for sparse slices so callers can report it.
    #[must_use]
    pub fn hull_and_perimeter(&self, min_points: usize) -> (ConvexHull, Option<f64>) {
        let hull = self.hull();
        let perimeter = hull.gated_perimeter(self.len(), min_points);
        (hull, perimeter)
    }
}

/// Select the vertices within `params.tolerance` of `height` and project
/// them onto the horizontal plane.
///
/// Membership is strict: a vertex whose vertical coordinate differs from
/// `height` by exactly the tolerance is left out.
///
/// # Errors
///
/// - [`MeasureError::EmptyMesh`] if the mesh has no vertices
/// - [`MeasureError::InvalidParams`] if the tolerance is not positive
pub fn slice(mesh: &BodyMesh, height: f64, params: &MeasureParams) -> MeasureResult<Slice> {
    if mesh.is_empty() {
        return Err(MeasureError::empty_mesh());
    }
    params.validate()?;

    let axis = params.axis;
    let points: Vec<Point2<f64>> = mesh
        .iter()
        .filter(|v| (axis.component(v) - height).abs() < params.tolerance)
        .map(|v| axis.project(v))
        .collect();

    debug!(
        height,
        tolerance = params.tolerance,
        axis = %axis,
        points = points.len(),
        "Sliced mesh"
    );

    Ok(Slice {
        height,
        tolerance: params.tolerance,
        axis,
        points,
    })
}

/// Measure the circumference of a body mesh at a given height.
///
/// Slices the mesh and returns the convex-hull perimeter of the slice, or
/// `None` when the slice holds fewer than `params.min_points` vertices.
///
/// # Errors
///
/// Same as [`slice`].
///
/// # Example
///
/// ```
/// use mesh_measure::{circumference_at_height, MeasureParams};
/// use mesh_types::BodyMesh;
///
/// // 40 points on a unit circle at y = 1.0
/// let ring = BodyMesh::from_coords((0..40).map(|i| {
///     let t = f64::from(i) * std::f64::consts::TAU / 40.0;
///     [t.cos(), 1.0, t.sin()]
/// }));
///
/// let params = MeasureParams::default();
/// let c = circumference_at_height(&ring, 1.0, &params).unwrap().unwrap();
/// assert!((c - std::f64::consts::TAU).abs() < 0.01);
///
/// // Nothing at y = 0.5
/// assert!(circumference_at_height(&ring, 0.5, &params).unwrap().is_none());
/// ```
pub fn circumference_at_height(
    mesh: &BodyMesh,
    height: f64,
    params: &MeasureParams,
) -> MeasureResult<Option<f64>> {
    let slice = slice(mesh, height, params)?;
    Ok(slice.perimeter(params.min_points))
}
