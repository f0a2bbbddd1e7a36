//! Property-based tests for slicing, hull perimeter and height location.
//!
//! Run with: cargo test -p mesh-measure -- proptest

#![allow(clippy::unwrap_used)]

use mesh_measure::{
    BodyPart, MIN_SLICE_POINTS, MeasureParams, compare, convex_hull, locate_heights, perimeter,
    slice,
};
use mesh_types::{Axis, BodyMesh, Point2, Point3};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn arb_point2() -> impl Strategy<Value = Point2<f64>> {
    (-100.0..100.0f64, -100.0..100.0f64).prop_map(|(x, y)| Point2::new(x, y))
}

fn arb_points2(min: usize, max: usize) -> impl Strategy<Value = Vec<Point2<f64>>> {
    prop::collection::vec(arb_point2(), min..=max)
}

fn arb_mesh(min: usize, max: usize) -> impl Strategy<Value = BodyMesh> {
    prop::collection::vec(prop::array::uniform3(-2.0..2.0f64), min..=max)
        .prop_map(BodyMesh::from_coords)
}

fn arb_axis() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::X), Just(Axis::Y), Just(Axis::Z)]
}

/// Signed area of the parallelogram (b - a) x (c - a).
fn cross(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> f64 {
    (b - a).perp(&(c - a))
}

// =============================================================================
// Property Tests: Convex Hull
// =============================================================================

proptest! {
    /// Every hull vertex is one of the input points.
    #[test]
    fn hull_vertices_come_from_input(points in arb_points2(0, 60)) {
        let hull = convex_hull(&points);
        for v in hull.vertices() {
            prop_assert!(points.contains(v), "hull vertex {:?} not in input", v);
        }
        prop_assert!(hull.len() <= points.len());
    }

    /// No input point lies strictly outside any hull edge.
    #[test]
    fn hull_encloses_all_points(points in arb_points2(3, 60)) {
        let hull = convex_hull(&points);
        prop_assume!(!hull.is_degenerate());

        let vs = hull.vertices();
        for i in 0..vs.len() {
            let a = vs[i];
            let b = vs[(i + 1) % vs.len()];
            for p in &points {
                prop_assert!(cross(a, b, *p) >= -1e-7, "point {:?} outside edge {:?}-{:?}", p, a, b);
            }
        }
    }

    /// Hull perimeter is bounded by the perimeter of the bounding rectangle.
    #[test]
    fn perimeter_within_bounding_rectangle(points in arb_points2(MIN_SLICE_POINTS, 60)) {
        let p = perimeter(&points, MIN_SLICE_POINTS).unwrap();

        let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
        for q in &points {
            min_x = min_x.min(q.x);
            max_x = max_x.max(q.x);
            min_y = min_y.min(q.y);
            max_y = max_y.max(q.y);
        }
        let rect = 2.0 * ((max_x - min_x) + (max_y - min_y));

        prop_assert!(p >= 0.0);
        prop_assert!(p <= rect + 1e-9, "perimeter {} exceeds rectangle {}", p, rect);
    }

    /// The result does not depend on input order.
    #[test]
    fn perimeter_ignores_order(points in arb_points2(MIN_SLICE_POINTS, 60)) {
        let mut reversed = points.clone();
        reversed.reverse();
        prop_assert_eq!(
            perimeter(&points, MIN_SLICE_POINTS),
            perimeter(&reversed, MIN_SLICE_POINTS)
        );
    }

    /// Translating every point leaves the perimeter unchanged.
    #[test]
    fn perimeter_translation_invariant(
        points in arb_points2(MIN_SLICE_POINTS, 40),
        dx in -50.0..50.0f64,
        dy in -50.0..50.0f64,
    ) {
        let shifted: Vec<_> = points.iter().map(|p| Point2::new(p.x + dx, p.y + dy)).collect();
        let a = perimeter(&points, MIN_SLICE_POINTS).unwrap();
        let b = perimeter(&shifted, MIN_SLICE_POINTS).unwrap();
        prop_assert!((a - b).abs() < 1e-6 * a.max(1.0));
    }

    /// Too few points never produce a measurement.
    #[test]
    fn sparse_points_are_unmeasured(points in arb_points2(0, MIN_SLICE_POINTS - 1)) {
        prop_assert!(perimeter(&points, MIN_SLICE_POINTS).is_none());
    }
}

// =============================================================================
// Property Tests: Slicing and Heights
// =============================================================================

proptest! {
    /// A slice holds exactly the vertices strictly inside the band.
    #[test]
    fn slice_matches_band_count(
        mesh in arb_mesh(1, 80),
        height in -2.0..2.0f64,
        tolerance in 0.01..1.0f64,
        axis in arb_axis(),
    ) {
        let params = MeasureParams::default().with_axis(axis).with_tolerance(tolerance);
        let s = slice(&mesh, height, &params).unwrap();

        let expected = mesh
            .iter()
            .filter(|v| (axis.component(v) - height).abs() < tolerance)
            .count();
        prop_assert_eq!(s.len(), expected);
    }

    /// Located heights stay within the vertical extent and keep their order.
    #[test]
    fn heights_within_extent(mesh in arb_mesh(1, 80), axis in arb_axis()) {
        let heights = locate_heights(&mesh, axis).unwrap();

        for (_, h) in heights.iter() {
            prop_assert!(h >= heights.min && h <= heights.max);
        }
        let thigh = heights.get(BodyPart::Thigh).unwrap();
        let waist = heights.get(BodyPart::Waist).unwrap();
        let arm = heights.get(BodyPart::Arm).unwrap();
        prop_assert!(thigh <= waist && waist <= arm);
    }

    /// Heights ignore vertices added strictly inside the current extent.
    #[test]
    fn heights_depend_only_on_extent(mesh in arb_mesh(2, 40), extra in arb_mesh(1, 20)) {
        let bounds_min = mesh.iter().map(|v| v.y).fold(f64::INFINITY, f64::min);
        let bounds_max = mesh.iter().map(|v| v.y).fold(f64::NEG_INFINITY, f64::max);
        prop_assume!(bounds_max - bounds_min > 1e-6);

        let inside: BodyMesh = extra
            .iter()
            .map(|v| Point3::new(v.x, v.y.clamp(bounds_min, bounds_max), v.z))
            .collect();

        let a = locate_heights(&mesh, Axis::Y).unwrap();
        let b = locate_heights(&mesh.merged(&inside), Axis::Y).unwrap();
        prop_assert_eq!(a.heights, b.heights);
    }

    /// Comparing a mesh with itself reports no change anywhere.
    #[test]
    fn self_comparison_has_zero_delta(mesh in arb_mesh(1, 120)) {
        let params = MeasureParams::default().with_tolerance(0.5);
        let result = compare(&mesh, &mesh, &params).unwrap();

        for part in BodyPart::ALL {
            if let Some(d) = result.delta(part) {
                prop_assert!(d.abs() < f64::EPSILON);
            }
        }
    }
}
