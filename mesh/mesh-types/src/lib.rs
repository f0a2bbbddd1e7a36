//! Core mesh types for body measurement.
//!
//! This crate provides the foundational types shared by the measurement
//! and I/O crates:
//!
//! - [`BodyMesh`] - An immutable, ordered cloud of body-surface vertices
//! - [`Axis`] - Selects the vertical axis and projects points onto the plane
//!   perpendicular to it
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! Only vertex positions matter here. Body meshes coming out of pose and
//! shape estimators carry a fixed vertex count per model, and no
//! connectivity is needed to slice them.
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`.
//! SMPL-style meshes are in meters with Y pointing up.
//!
//! # Example
//!
//! ```
//! use mesh_types::{Axis, BodyMesh, MeshBounds, Point3};
//!
//! let mesh = BodyMesh::new(vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.7, 0.5),
//! ]);
//!
//! assert_eq!(mesh.vertex_count(), 2);
//! let (min_y, max_y) = mesh.bounds().range(Axis::Y);
//! assert!((max_y - min_y - 1.7).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod axis;
mod bounds;
mod mesh;
mod traits;

pub use axis::Axis;
pub use bounds::Aabb;
pub use mesh::BodyMesh;
pub use traits::MeshBounds;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};
