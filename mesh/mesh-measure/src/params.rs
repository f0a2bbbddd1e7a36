//! Measurement parameters and presets.

use mesh_types::Axis;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MeasureError, MeasureResult};

/// Minimum number of slice points for a hull to count as a circumference.
///
/// Sparser slices report no measurement.
pub const MIN_SLICE_POINTS: usize = 10;

/// Default half-width of the slicing band, in mesh units (meters for SMPL).
pub const DEFAULT_TOLERANCE: f64 = 0.02;

/// Parameters for slicing and circumference measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MeasureParams {
    /// Vertical axis. Slices are horizontal planes across it.
    pub axis: Axis,

    /// Half-width of the slicing band.
    ///
    /// A vertex belongs to the slice at height `h` when
    /// `|coord - h| < tolerance`. Must be positive and finite.
    pub tolerance: f64,

    /// Minimum slice population for a measurement.
    pub min_points: usize,
}

impl Default for MeasureParams {
    fn default() -> Self {
        Self {
            axis: Axis::Y,
            tolerance: DEFAULT_TOLERANCE,
            min_points: MIN_SLICE_POINTS,
        }
    }
}

impl MeasureParams {
    /// Parameters for SMPL body meshes: Y-up, meters, 2cm band.
    #[must_use]
    pub fn smpl() -> Self {
        Self::default()
    }

    /// Parameters for Z-up meshes in millimeters with a 20mm band.
    #[must_use]
    pub fn millimeters() -> Self {
        Self {
            axis: Axis::Z,
            tolerance: 20.0,
            ..Default::default()
        }
    }

    /// Set the vertical axis.
    #[must_use]
    pub const fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Set the slicing band half-width.
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the minimum slice population.
    #[must_use]
    pub const fn with_min_points(mut self, min_points: usize) -> Self {
        self.min_points = min_points;
        self
    }

    /// Check that the parameters describe a usable slicing band.
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError::InvalidParams`] if the tolerance is not a
    /// positive finite number.
    pub fn validate(&self) -> MeasureResult<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(MeasureError::invalid_params(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}
