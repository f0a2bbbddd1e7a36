//! Axis-aligned bounds of a vertex cloud.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Axis;

/// Axis-aligned box enclosing a set of vertices.
///
/// Built by folding points into [`Aabb::empty`]. NaN coordinates are
/// skipped on each axis, so a box stays empty along any axis that only
/// ever saw NaN.
///
/// # Example
///
/// ```
/// use mesh_types::{Aabb, Axis, Point3};
///
/// let points = [Point3::new(0.2, 0.0, -0.1), Point3::new(-0.3, 1.8, 0.1)];
/// let aabb = Aabb::from_points(points.iter());
///
/// assert_eq!(aabb.range(Axis::Y), (0.0, 1.8));
/// assert_eq!(aabb.range(Axis::X), (-0.3, 0.2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Smallest coordinate seen on each axis.
    pub min: Point3<f64>,
    /// Largest coordinate seen on each axis.
    pub max: Point3<f64>,
}

impl Aabb {
    /// Box that contains nothing.
    ///
    /// `min` is `+inf` and `max` is `-inf` on every axis, so the first point
    /// folded in sets both corners.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Bounds of every point yielded by `points`.
    ///
    /// Returns an empty box for an empty iterator.
    #[must_use]
    pub fn from_points<'a>(points: impl Iterator<Item = &'a Point3<f64>>) -> Self {
        points.fold(Self::empty(), |mut aabb, p| {
            aabb.expand_to_include(p);
            aabb
        })
    }

    /// True when some axis has `min > max`, i.e. nothing but NaN was ever
    /// folded in on that axis.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Axis::ALL
            .iter()
            .any(|&a| a.component(&self.min) > a.component(&self.max))
    }

    /// Edge lengths along x, y and z.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Midpoint of the box.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }

    /// `(min, max)` coordinate along `axis`.
    #[inline]
    #[must_use]
    pub fn range(&self, axis: Axis) -> (f64, f64) {
        (axis.component(&self.min), axis.component(&self.max))
    }

    /// Grow the box so it covers `point`.
    ///
    /// NaN coordinates leave the corresponding axis unchanged.
    pub fn expand_to_include(&mut self, point: &Point3<f64>) {
        self.min.coords = self.min.coords.zip_map(&point.coords, f64::min);
        self.max.coords = self.max.coords.zip_map(&point.coords, f64::max);
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn column() -> Aabb {
        let points = [
            Point3::new(0.15, 0.0, 0.0),
            Point3::new(-0.15, 1.8, 0.05),
            Point3::new(0.0, 0.9, -0.1),
        ];
        Aabb::from_points(points.iter())
    }

    #[test]
    fn from_points_tracks_each_axis() {
        let aabb = column();
        assert_eq!(aabb.range(Axis::X), (-0.15, 0.15));
        assert_eq!(aabb.range(Axis::Y), (0.0, 1.8));
        assert_eq!(aabb.range(Axis::Z), (-0.1, 0.05));
        assert!(!aabb.is_empty());
    }

    #[test]
    fn empty_until_first_point() {
        let mut aabb = Aabb::default();
        assert!(aabb.is_empty());
        assert_eq!(aabb, Aabb::from_points(std::iter::empty()));

        aabb.expand_to_include(&Point3::new(1.0, 2.0, 3.0));
        assert!(!aabb.is_empty());
        assert_eq!(aabb.min, aabb.max);
    }

    #[test]
    fn nan_axis_stays_empty() {
        let points = [
            Point3::new(0.0, f64::NAN, 1.0),
            Point3::new(2.0, f64::NAN, -1.0),
        ];
        let aabb = Aabb::from_points(points.iter());
        assert_eq!(aabb.range(Axis::X), (0.0, 2.0));
        assert!(aabb.is_empty());
    }

    #[test]
    fn size_and_center() {
        let aabb = column();
        let size = aabb.size();
        assert_relative_eq!(size.y, 1.8);
        assert_relative_eq!(size.x, 0.3);
        let c = aabb.center();
        assert_relative_eq!(c.y, 0.9);
        assert_relative_eq!(c.x, 0.0);
    }
}
