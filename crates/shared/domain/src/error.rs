//! Domain-level errors.
//!
//! These cover values that cannot be parsed into domain types. Field
//! rejections are not errors; see [`crate::validation::Rejection`].

use thiserror::Error;

/// Domain-specific errors for unparseable values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Value is not one of an enumeration's variants
    #[error("Invalid {field}: {value}")]
    InvalidVariant { field: &'static str, value: String },

    /// Value is not a `YYYY-MM-DD` date
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

impl DomainError {
    /// Create an invalid variant error
    pub fn invalid_variant(field: &'static str, value: impl Into<String>) -> Self {
        DomainError::InvalidVariant {
            field,
            value: value.into(),
        }
    }

    /// Create an invalid date error
    pub fn invalid_date(value: impl Into<String>) -> Self {
        DomainError::InvalidDate(value.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
