//! Anatomical measurement heights.
//!
//! Body parts are located at fixed fractions of the mesh's vertical extent.
//! The fractions describe a standing, roughly upright body.

use std::collections::BTreeMap;
use std::fmt;

use mesh_types::{Axis, BodyMesh, MeshBounds};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MeasureError, MeasureResult};

/// A body part measured by circumference.
///
/// Ordering follows declaration order, which is also the report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BodyPart {
    /// Waist, at half the body height.
    Waist,
    /// Thigh, at a quarter of the body height.
    Thigh,
    /// Upper arm, at 70% of the body height.
    Arm,
}

impl BodyPart {
    /// All body parts in report order.
    pub const ALL: [Self; 3] = [Self::Waist, Self::Thigh, Self::Arm];

    /// Fraction of the vertical extent, measured from the bottom, at which
    /// this part is sliced.
    #[must_use]
    pub const fn fraction(self) -> f64 {
        match self {
            Self::Waist => 0.50,
            Self::Thigh => 0.25,
            Self::Arm => 0.70,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Waist => "Waist",
            Self::Thigh => "Thigh",
            Self::Arm => "Arm",
        }
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Slicing heights for each body part, with the extent they came from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BodyHeights {
    /// Vertical axis the heights are measured along.
    pub axis: Axis,
    /// Lowest vertex coordinate along `axis`.
    pub min: f64,
    /// Highest vertex coordinate along `axis`.
    pub max: f64,
    /// Height of each body part.
    pub heights: BTreeMap<BodyPart, f64>,
}

impl BodyHeights {
    /// Height for one body part.
    #[must_use]
    pub fn get(&self, part: BodyPart) -> Option<f64> {
        self.heights.get(&part).copied()
    }

    /// Total vertical extent (`max - min`).
    #[must_use]
    pub fn total(&self) -> f64 {
        self.max - self.min
    }

    /// Iterate over `(part, height)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyPart, f64)> + '_ {
        self.heights.iter().map(|(part, h)| (*part, *h))
    }
}

/// Locate the measurement height of every [`BodyPart`] on a mesh.
///
/// Each height is `min + fraction * (max - min)` along `axis`, so all
/// heights lie within the mesh's vertical extent.
///
/// # Errors
///
/// Returns [`MeasureError::EmptyMesh`] if the mesh has no vertices, and
/// [`MeasureError::InvalidParams`] if the extent along `axis` is not finite
/// (every coordinate on that axis is NaN, or one is infinite).
///
/// # Example
///
/// ```
/// use mesh_measure::{locate_heights, BodyPart};
/// use mesh_types::{Axis, BodyMesh};
///
/// let mesh = BodyMesh::from_coords([[0.0, 0.0, 0.0], [0.0, 2.0, 0.0]]);
/// let heights = locate_heights(&mesh, Axis::Y).unwrap();
///
/// assert_eq!(heights.get(BodyPart::Waist), Some(1.0));
/// assert_eq!(heights.get(BodyPart::Thigh), Some(0.5));
/// ```
pub fn locate_heights(mesh: &BodyMesh, axis: Axis) -> MeasureResult<BodyHeights> {
    if mesh.is_empty() {
        return Err(MeasureError::empty_mesh());
    }

    let (min, max) = mesh.bounds().range(axis);
    if !(min.is_finite() && max.is_finite()) {
        return Err(MeasureError::invalid_params(format!(
            "mesh has no finite extent along the {axis} axis"
        )));
    }
    let total = max - min;

    let heights: BTreeMap<BodyPart, f64> = BodyPart::ALL
        .iter()
        .map(|&part| (part, part.fraction().mul_add(total, min).max(min).min(max)))
        .collect();

    debug!(axis = %axis, min, max, "Located body heights");

    Ok(BodyHeights {
        axis,
        min,
        max,
        heights,
    })
}
