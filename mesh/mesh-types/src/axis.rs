//! Coordinate axes and plane projection.

use std::fmt;

use nalgebra::{Point2, Point3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the three coordinate axes.
///
/// Measurement code treats one axis as "vertical": slices are taken at a
/// height along it, and slice points are projected onto the plane spanned
/// by the other two.
///
/// # Example
///
/// ```
/// use mesh_types::{Axis, Point2, Point3};
///
/// let p = Point3::new(1.0, 2.0, 3.0);
/// assert_eq!(Axis::Y.component(&p), 2.0);
/// assert_eq!(Axis::Y.project(&p), Point2::new(1.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    /// The X axis.
    X,
    /// The Y axis. Vertical for SMPL body meshes.
    #[default]
    Y,
    /// The Z axis.
    Z,
}

impl Axis {
    /// All axes in ascending order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Index of this axis into a coordinate triple.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Coordinate of `point` along this axis.
    #[inline]
    #[must_use]
    pub fn component(self, point: &Point3<f64>) -> f64 {
        point[self.index()]
    }

    /// The two remaining axes, in ascending order.
    #[must_use]
    pub const fn plane_axes(self) -> (Self, Self) {
        match self {
            Self::X => (Self::Y, Self::Z),
            Self::Y => (Self::X, Self::Z),
            Self::Z => (Self::X, Self::Y),
        }
    }

    /// Project `point` onto the plane perpendicular to this axis.
    ///
    /// The coordinate along this axis is dropped; the remaining two keep
    /// their ascending axis order (`Y` maps to `(x, z)`).
    #[inline]
    #[must_use]
    pub fn project(self, point: &Point3<f64>) -> Point2<f64> {
        let (u, v) = self.plane_axes();
        Point2::new(u.component(point), v.component(point))
    }

    /// Lowercase axis name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_y() {
        assert_eq!(Axis::default(), Axis::Y);
    }

    #[test]
    fn component_picks_coordinate() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert!((Axis::X.component(&p) - 1.0).abs() < f64::EPSILON);
        assert!((Axis::Y.component(&p) - 2.0).abs() < f64::EPSILON);
        assert!((Axis::Z.component(&p) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn project_drops_axis() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(Axis::X.project(&p), Point2::new(2.0, 3.0));
        assert_eq!(Axis::Y.project(&p), Point2::new(1.0, 3.0));
        assert_eq!(Axis::Z.project(&p), Point2::new(1.0, 2.0));
    }

    #[test]
    fn plane_axes_exclude_self() {
        for a in Axis::ALL {
            let (u, v) = a.plane_axes();
            assert!(u != a && v != a);
            assert!(u.index() < v.index());
        }
    }

    #[test]
    fn display_lowercase() {
        assert_eq!(Axis::Z.to_string(), "z");
    }
}
