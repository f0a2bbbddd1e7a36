//! Before/after circumference comparison.
//!
//! Heights are located on the `before` mesh only and reused on the `after`
//! mesh, so both measurements are taken at the same place on the body even
//! if the overall extent changed between scans.

use std::collections::BTreeMap;
use std::fmt;

use mesh_types::BodyMesh;
use tracing::{debug, info};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::{MeasureError, MeasureResult};
use crate::heights::{BodyHeights, BodyPart, locate_heights};
use crate::params::MeasureParams;
use crate::slice::circumference_at_height;

/// Change in circumference for one body part.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "snake_case"))]
pub enum PartChange {
    /// Both meshes were measurable at this height.
    Measured {
        /// Circumference on the `before` mesh.
        before: f64,
        /// Circumference on the `after` mesh.
        after: f64,
        /// `after - before`; negative when the part shrank.
        delta: f64,
    },
    /// At least one mesh had too few vertices in the slice.
    ///
    /// Whichever side could be measured is kept for reference; no delta is
    /// derived from it.
    InsufficientData {
        /// Circumference on the `before` mesh, if measurable.
        before: Option<f64>,
        /// Circumference on the `after` mesh, if measurable.
        after: Option<f64>,
    },
}

impl PartChange {
    /// Combine two optional measurements.
    ///
    /// A missing side never defaults to zero: the result is
    /// [`PartChange::InsufficientData`] unless both are present.
    #[must_use]
    pub fn from_measurements(before: Option<f64>, after: Option<f64>) -> Self {
        match (before, after) {
            (Some(before), Some(after)) => Self::Measured {
                before,
                after,
                delta: after - before,
            },
            (before, after) => Self::InsufficientData { before, after },
        }
    }

    /// Signed change, if both sides were measured.
    #[must_use]
    pub const fn delta(&self) -> Option<f64> {
        match self {
            Self::Measured { delta, .. } => Some(*delta),
            Self::InsufficientData { .. } => None,
        }
    }

    /// True if both sides were measured.
    #[must_use]
    pub const fn is_measured(&self) -> bool {
        matches!(self, Self::Measured { .. })
    }
}

/// Per-part comparison of two body meshes.
///
/// # Example
///
/// ```
/// use mesh_measure::{compare, BodyPart, MeasureParams};
/// use mesh_types::BodyMesh;
///
/// // A 1m column with a 32-point ring at the waist
/// let body = |r: f64| {
///     BodyMesh::from_coords(
///         (0..32)
///             .map(move |i| {
///                 let t = f64::from(i) * std::f64::consts::TAU / 32.0;
///                 [r * t.cos(), 0.5, r * t.sin()]
///             })
///             .chain([[0.0, 0.0, 0.0], [0.0, 1.0, 0.0]]),
///     )
/// };
///
/// let result = compare(&body(0.15), &body(0.12), &MeasureParams::default()).unwrap();
///
/// let delta = result.delta(BodyPart::Waist).unwrap();
/// assert!(delta < 0.0);
/// assert!(result.delta(BodyPart::Thigh).is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Comparison {
    /// Heights located on the `before` mesh and used for both meshes.
    pub heights: BodyHeights,
    /// Change per body part, in report order.
    pub parts: BTreeMap<BodyPart, PartChange>,
}

impl Comparison {
    /// Change for one body part.
    #[must_use]
    pub fn get(&self, part: BodyPart) -> Option<&PartChange> {
        self.parts.get(&part)
    }

    /// Signed change for one body part, if both sides were measured.
    #[must_use]
    pub fn delta(&self, part: BodyPart) -> Option<f64> {
        self.get(part).and_then(PartChange::delta)
    }

    /// Number of parts measured on both meshes.
    #[must_use]
    pub fn measured_count(&self) -> usize {
        self.parts.values().filter(|c| c.is_measured()).count()
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Circumference change by body part ===")?;
        for (part, change) in &self.parts {
            match change {
                PartChange::Measured {
                    before,
                    after,
                    delta,
                } => writeln!(
                    f,
                    "{part}: before {before:.2}, after {after:.2}, change {delta:+.2}"
                )?,
                PartChange::InsufficientData { .. } => {
                    writeln!(f, "{part}: insufficient data")?;
                }
            }
        }
        Ok(())
    }
}

/// Compare body-part circumferences between two meshes.
///
/// Heights come from `before`; `after` is sliced at those same heights.
///
/// # Errors
///
/// - [`MeasureError::EmptyMesh`] if either mesh has no vertices
/// - [`MeasureError::InvalidParams`] if the tolerance is not positive
pub fn compare(
    before: &BodyMesh,
    after: &BodyMesh,
    params: &MeasureParams,
) -> MeasureResult<Comparison> {
    if before.is_empty() || after.is_empty() {
        return Err(MeasureError::empty_mesh());
    }
    params.validate()?;

    let heights = locate_heights(before, params.axis)?;

    let mut parts = BTreeMap::new();
    for (part, height) in heights.iter() {
        let b = circumference_at_height(before, height, params)?;
        let a = circumference_at_height(after, height, params)?;
        let change = PartChange::from_measurements(b, a);
        debug!(part = %part, height, delta = ?change.delta(), "Compared part");
        parts.insert(part, change);
    }

    let comparison = Comparison { heights, parts };
    info!(
        measured = comparison.measured_count(),
        total = comparison.parts.len(),
        "Comparison complete"
    );

    Ok(comparison)
}
