//! Error types reported across the session boundary.

use crate::value::ValueKind;
use thiserror::Error;

/// Errors a session operation can report besides a plain `false` result.
///
/// Precondition failures (no surface, surface already active, undersized
/// surface) are not errors; they come back as `Value::Bool(false)`.
#[derive(Debug, Error)]
pub enum GfxError {
    #[error("Malformed vertex at index {index}: {reason}")]
    MalformedGeometry { index: usize, reason: String },

    #[error("{operation} expects {expected} argument(s), got {found}")]
    ArgumentCount {
        operation: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{operation} argument {index} must be {expected}, got {found}")]
    ArgumentKind {
        operation: &'static str,
        index: usize,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("Invalid elapsed time format '{format}': {reason}")]
    Format { format: String, reason: String },

    #[error("Surface error: {0}")]
    Surface(#[from] SurfaceError),
}

/// Errors raised by surface backends.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to encode PNG: {0}")]
    Png(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No surface has been created yet")]
    NotCreated,
}
