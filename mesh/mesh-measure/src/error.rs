//! Error types for measurement operations.
//!
//! Sparse slices are not errors: they surface as `None` perimeters. Only
//! precondition violations end up here.

use thiserror::Error;

/// Result type alias for measurement operations.
pub type MeasureResult<T> = Result<T, MeasureError>;

/// Errors that can occur during measurement operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeasureError {
    /// Input mesh has no vertices.
    #[error("input mesh is empty")]
    EmptyMesh,

    /// Invalid measurement parameters.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}

impl MeasureError {
    /// Create an empty mesh error.
    #[must_use]
    pub const fn empty_mesh() -> Self {
        Self::EmptyMesh
    }

    /// Create an invalid params error.
    #[must_use]
    pub fn invalid_params(details: impl Into<String>) -> Self {
        Self::InvalidParams(details.into())
    }
}
