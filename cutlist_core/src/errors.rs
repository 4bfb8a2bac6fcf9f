//! # Error Types
//!
//! Structured error types for cutlist_core. Every failure a caller can hit
//! (bad dimensions, an unknown unit tag, a panel whose deductions exceed its
//! raw size) is a distinct variant carrying enough context to report or fix
//! the offending input without parsing a message string.
//!
//! ## Example
//!
//! ```rust
//! use cutlist_core::errors::{CalcError, CalcResult};
//!
//! fn validate_width(width_cm: f64) -> CalcResult<()> {
//!     if width_cm <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "width_cm",
//!             width_cm.to_string(),
//!             "Width must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(validate_width(-1.0).unwrap_err().error_code(), "INVALID_INPUT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for cutlist_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for cutting-list operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive dimension, out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A field required by the selected unit type was not supplied
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// The unit-type tag has no recipe
    #[error("Unit type '{tag}' is not supported")]
    UnsupportedUnitType { tag: String },

    /// A computed panel came out with a non-positive cut dimension
    #[error("Degenerate part '{part}' in {unit_type}: {width_cm} x {height_cm} cm")]
    DegeneratePart {
        unit_type: String,
        part: String,
        width_cm: f64,
        height_cm: f64,
    },

    /// Material usage key has no entry in the price table
    #[error("No price for material: {material}")]
    PriceNotFound { material: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnsupportedUnitType error
    pub fn unsupported_unit_type(tag: impl Into<String>) -> Self {
        CalcError::UnsupportedUnitType { tag: tag.into() }
    }

    /// Create a DegeneratePart error
    pub fn degenerate_part(unit_type: impl Into<String>, part: impl Into<String>, width_cm: f64, height_cm: f64) -> Self {
        CalcError::DegeneratePart {
            unit_type: unit_type.into(),
            part: part.into(),
            width_cm,
            height_cm,
        }
    }

    /// Create a PriceNotFound error
    pub fn price_not_found(material: impl Into<String>) -> Self {
        CalcError::PriceNotFound {
            material: material.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError from any displayable cause
    pub fn serialization(reason: impl std::fmt::Display) -> Self {
        CalcError::SerializationError {
            reason: reason.to_string(),
        }
    }

    /// True when the failure is caused by the request itself.
    ///
    /// Retrying such a calculation reproduces the same error; the input has
    /// to change.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. }
                | CalcError::MissingField { .. }
                | CalcError::UnsupportedUnitType { .. }
                | CalcError::DegeneratePart { .. }
                | CalcError::PriceNotFound { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::UnsupportedUnitType { .. } => "UNSUPPORTED_UNIT_TYPE",
            CalcError::DegeneratePart { .. } => "DEGENERATE_PART",
            CalcError::PriceNotFound { .. } => "PRICE_NOT_FOUND",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}
