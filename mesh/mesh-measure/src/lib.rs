//! Body circumference measurement for 3D body meshes.
//!
//! This crate estimates body-part circumferences from a cloud of body-surface
//! vertices and compares them between two meshes of the same person.
//!
//! # Features
//!
//! - **Slicing**: Select the vertices in a thin band around a height and
//!   project them onto the horizontal plane
//! - **Hull perimeter**: Convex hull of a slice and its perimeter, as a
//!   stand-in for the body circumference
//! - **Height location**: Waist, thigh and arm heights as fixed fractions of
//!   the body's vertical extent
//! - **Comparison**: Before/after deltas per body part, measured at the
//!   heights of the `before` mesh
//!
//! Slices with fewer than [`MIN_SLICE_POINTS`] vertices produce no
//! measurement (`None`) rather than a misleading number, and comparisons
//! report such parts as insufficient data.
//!
//! # Example
//!
//! ```
//! use mesh_measure::{compare, BodyPart, MeasureParams};
//! use mesh_types::BodyMesh;
//!
//! fn body(waist_radius: f64) -> BodyMesh {
//!     let ring = (0..48).map(move |i| {
//!         let t = f64::from(i) * std::f64::consts::TAU / 48.0;
//!         [waist_radius * t.cos(), 0.9, waist_radius * t.sin()]
//!     });
//!     BodyMesh::from_coords(ring.chain([[0.0, 0.0, 0.0], [0.0, 1.8, 0.0]]))
//! }
//!
//! let report = compare(&body(0.15), &body(0.14), &MeasureParams::smpl()).unwrap();
//! let delta = report.delta(BodyPart::Waist).unwrap();
//! assert!((delta - std::f64::consts::TAU * -0.01).abs() < 1e-3);
//!
//! println!("{report}");
//! ```
//!
//! # Coordinate System
//!
//! The vertical axis is configurable through [`MeasureParams::axis`] and
//! defaults to Y, the convention of SMPL body models.

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod body;
mod compare;
mod dimensions;
mod error;
mod heights;
mod hull;
mod params;
mod slice;

// Re-export main types and functions
pub use body::{BodyMeasurements, measure_body};
pub use compare::{Comparison, PartChange, compare};
pub use dimensions::{Dimensions, dimensions};
pub use error::{MeasureError, MeasureResult};
pub use heights::{BodyHeights, BodyPart, locate_heights};
pub use hull::{ConvexHull, convex_hull, perimeter};
pub use params::{DEFAULT_TOLERANCE, MIN_SLICE_POINTS, MeasureParams};
pub use slice::{Slice, circumference_at_height, slice};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};
