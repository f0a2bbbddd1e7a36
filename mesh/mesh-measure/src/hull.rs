//! 2D convex hull and hull perimeter.
//!
//! The hull perimeter of a horizontal slice stands in for the circumference
//! of the body part at that height: a tape measure wrapped around a limb
//! follows the convex outline, not the concave folds of the surface.

use nalgebra::Point2;

/// Convex hull of a 2D point set.
///
/// Vertices are stored counter-clockwise, starting from the
/// lexicographically smallest point (lowest x, then lowest y). Points that
/// lie on a hull edge without being a corner are not included.
///
/// Degenerate inputs are represented rather than rejected:
///
/// - all points coincident: a single vertex, perimeter 0
/// - all points collinear: the two segment endpoints, perimeter twice the
///   segment length (the closed walk out and back)
///
/// # Example
///
/// ```
/// use mesh_measure::convex_hull;
/// use nalgebra::Point2;
///
/// let points = [
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
///     Point2::new(1.0, 1.0), // interior
/// ];
///
/// let hull = convex_hull(&points);
/// assert_eq!(hull.len(), 4);
/// assert!((hull.perimeter() - 8.0).abs() < 1e-12);
/// assert!((hull.area() - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvexHull {
    vertices: Vec<Point2<f64>>,
}

impl ConvexHull {
    /// Hull corners in counter-clockwise order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2<f64>] {
        &self.vertices
    }

    /// Number of hull corners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True if the hull was built from no usable points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// True if the hull encloses no area (fewer than three corners).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Length of the closed boundary, including the edge from the last
    /// corner back to the first.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        let n = self.vertices.len();
        (0..n)
            .map(|i| (self.vertices[(i + 1) % n] - self.vertices[i]).norm())
            .sum()
    }

    /// Perimeter as a circumference estimate for a slice of `point_count`
    /// points: `None` when `point_count < min_points` or the hull is empty.
    #[must_use]
    pub fn gated_perimeter(&self, point_count: usize, min_points: usize) -> Option<f64> {
        if point_count < min_points || self.is_empty() {
            return None;
        }
        Some(self.perimeter())
    }

    /// Enclosed area (shoelace formula). Zero for degenerate hulls.
    #[must_use]
    pub fn area(&self) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        let n = self.vertices.len();
        let twice_area: f64 = (0..n)
            .map(|i| {
                let a = self.vertices[i];
                let b = self.vertices[(i + 1) % n];
                a.x.mul_add(b.y, -(b.x * a.y))
            })
            .sum();
        (twice_area / 2.0).abs()
    }
}

/// Compute the convex hull of a 2D point set.
///
/// Uses Andrew's monotone chain, O(n log n). Non-finite points are ignored.
#[must_use]
pub fn convex_hull(points: &[Point2<f64>]) -> ConvexHull {
    let mut sorted: Vec<Point2<f64>> = points
        .iter()
        .filter(|p| p.x.is_finite() && p.y.is_finite())
        .copied()
        .collect();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    sorted.dedup();

    if sorted.len() < 3 {
        return ConvexHull { vertices: sorted };
    }

    let mut lower: Vec<Point2<f64>> = Vec::with_capacity(sorted.len());
    for &p in &sorted {
        push_hull_point(&mut lower, p);
    }

    let mut upper: Vec<Point2<f64>> = Vec::with_capacity(sorted.len());
    for &p in sorted.iter().rev() {
        push_hull_point(&mut upper, p);
    }

    // Each chain ends where the other starts
    lower.pop();
    upper.pop();
    lower.extend(upper);

    ConvexHull { vertices: lower }
}

/// Estimate a circumference from slice points.
///
/// Returns `None` when fewer than `min_points` points are given, or when
/// none of them are finite. Otherwise returns the hull perimeter.
///
/// # Example
///
/// ```
/// use mesh_measure::{perimeter, MIN_SLICE_POINTS};
/// use nalgebra::Point2;
///
/// let square: Vec<_> = (0..12)
///     .map(|i| {
///         let t = f64::from(i) / 3.0;
///         match i % 4 {
///             0 => Point2::new(t, 0.0),
///             1 => Point2::new(4.0, t),
///             2 => Point2::new(t, 4.0),
///             _ => Point2::new(0.0, t),
///         }
///     })
///     .chain([Point2::new(4.0, 0.0), Point2::new(4.0, 4.0), Point2::new(0.0, 4.0)])
///     .collect();
///
/// let p = perimeter(&square, MIN_SLICE_POINTS).unwrap();
/// assert!((p - 16.0).abs() < 1e-9);
///
/// assert!(perimeter(&square[..5], MIN_SLICE_POINTS).is_none());
/// ```
#[must_use]
pub fn perimeter(points: &[Point2<f64>], min_points: usize) -> Option<f64> {
    if points.len() < min_points {
        return None;
    }
    convex_hull(points).gated_perimeter(points.len(), min_points)
}

/// Append `p` to a monotone chain, popping corners that no longer turn left.
fn push_hull_point(chain: &mut Vec<Point2<f64>>, p: Point2<f64>) {
    while chain.len() >= 2 {
        let a = chain[chain.len() - 2];
        let b = chain[chain.len() - 1];
        if cross(a, b, p) > 0.0 {
            break;
        }
        chain.pop();
    }
    chain.push(p);
}

/// Z component of `(b - o) x (p - o)`. Positive for a left turn.
fn cross(o: Point2<f64>, b: Point2<f64>, p: Point2<f64>) -> f64 {
    (b.x - o.x).mul_add(p.y - o.y, -((b.y - o.y) * (p.x - o.x)))
}
