//! Single-mesh body measurement.

use std::collections::BTreeMap;
use std::fmt;

use mesh_types::BodyMesh;
use tracing::{info, warn};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::MeasureResult;
use crate::heights::{BodyHeights, BodyPart, locate_heights};
use crate::params::MeasureParams;
use crate::slice::circumference_at_height;

/// Circumference of every body part on one mesh.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BodyMeasurements {
    /// Heights the mesh was sliced at.
    pub heights: BodyHeights,
    /// Circumference per part; `None` where the slice was too sparse.
    pub circumferences: BTreeMap<BodyPart, Option<f64>>,
}

impl BodyMeasurements {
    /// Circumference for one part, if it could be measured.
    #[must_use]
    pub fn get(&self, part: BodyPart) -> Option<f64> {
        self.circumferences.get(&part).copied().flatten()
    }
}

impl fmt::Display for BodyMeasurements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Circumference by body part ===")?;
        for (part, value) in &self.circumferences {
            match value {
                Some(c) => writeln!(f, "{part}: {c:.2}")?,
                None => writeln!(f, "{part}: insufficient data")?,
            }
        }
        Ok(())
    }
}

/// Measure every [`BodyPart`] on a single mesh.
///
/// # Errors
///
/// - [`MeasureError::EmptyMesh`](crate::MeasureError::EmptyMesh) if the mesh has no vertices
/// - [`MeasureError::InvalidParams`](crate::MeasureError::InvalidParams) if the tolerance is not positive
pub fn measure_body(mesh: &BodyMesh, params: &MeasureParams) -> MeasureResult<BodyMeasurements> {
    params.validate()?;
    let heights = locate_heights(mesh, params.axis)?;

    let mut circumferences = BTreeMap::new();
    for (part, height) in heights.iter() {
        let value = circumference_at_height(mesh, height, params)?;
        if value.is_none() {
            warn!(part = %part, height, "Slice too sparse to measure");
        }
        circumferences.insert(part, value);
    }

    info!(
        vertices = mesh.vertex_count(),
        measured = circumferences.values().filter(|v| v.is_some()).count(),
        "Measured body"
    );

    Ok(BodyMeasurements {
        heights,
        circumferences,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeasureError;
    use mesh_types::Point3;

    /// Column of points from y = 0 to y = 1 with a ring of 24 points at the
    /// waist only.
    fn waist_only() -> BodyMesh {
        let mut vertices = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)];
        vertices.extend((0..24).map(|i| {
            let t = f64::from(i) * std::f64::consts::TAU / 24.0;
            Point3::new(0.1 * t.cos(), 0.5, 0.1 * t.sin())
        }));
        BodyMesh::new(vertices)
    }

    #[test]
    fn test_measures_only_populated_parts() {
        let result = measure_body(&waist_only(), &MeasureParams::default()).unwrap();

        let waist = result.get(BodyPart::Waist).unwrap();
        assert!((waist - 0.2 * std::f64::consts::PI).abs() < 0.01);
        assert!(result.get(BodyPart::Thigh).is_none());
        assert!(result.get(BodyPart::Arm).is_none());
        assert_eq!(result.circumferences.len(), 3);
    }

    #[test]
    fn test_display() {
        let result = measure_body(&waist_only(), &MeasureParams::default()).unwrap();
        let text = result.to_string();
        assert!(text.contains("Waist: 0.6"));
        assert!(text.contains("Thigh: insufficient data"));
    }

    #[test]
    fn test_empty_mesh() {
        let err = measure_body(&BodyMesh::default(), &MeasureParams::default()).unwrap_err();
        assert_eq!(err, MeasureError::EmptyMesh);
    }
}
