//! # AppError
//!
//! Centralized error handling for the Rusty-Forum core.
//! Every use case fails with one of these variants; none of them carries
//! HTTP knowledge. The API layer decides status codes and messages.

use std::fmt;
use thiserror::Error;

/// Why an entity refused its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    /// A required field is absent, null or an empty string.
    MissingProperty,
    /// A required field is present but not a string.
    InvalidDataType,
}

impl ValidationKind {
    pub fn code(self) -> &'static str {
        match self {
            ValidationKind::MissingProperty => "NOT_CONTAIN_NEEDED_PROPERTY",
            ValidationKind::InvalidDataType => "NOT_MEET_DATA_TYPE_SPECIFICATION",
        }
    }
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The primary error type for all rf-core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Malformed client input, tagged with the entity that rejected it
    /// (e.g. `CREATE_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY`).
    #[error("{entity}.{kind}")]
    Validation {
        entity: &'static str,
        kind: ValidationKind,
    },

    /// Referenced thread, comment or reply does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The acting user does not own the resource.
    #[error("forbidden: {0}")]
    Authorization(String),

    /// A repository capability was requested from a backend that is not
    /// compiled in. Indicates a wiring defect.
    #[error("{0}.METHOD_NOT_IMPLEMENTED")]
    NotImplemented(&'static str),

    /// Infrastructure failure (e.g. database unavailable)
    #[error("internal service error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn missing_property(entity: &'static str) -> Self {
        AppError::Validation {
            entity,
            kind: ValidationKind::MissingProperty,
        }
    }

    pub fn invalid_data_type(entity: &'static str) -> Self {
        AppError::Validation {
            entity,
            kind: ValidationKind::InvalidDataType,
        }
    }
}

/// A specialized Result type for Rusty-Forum logic.
pub type Result<T> = std::result::Result<T, AppError>;
