//! Unified error handling for portal operations.
//!
//! Every failure in the portal is recoverable. The variants separate the
//! causes the caller presents differently: locally blocked submissions,
//! "no results", rejected requests and transport failures.

use domain::{DomainError, FieldErrors};
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Local validation
    #[error("{0}")]
    Validation(String),

    // Resource errors
    #[error("Resource not found")]
    NotFound,

    // External service errors
    #[error("Employee service responded with status {status}")]
    Api { status: u16 },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    // Setup
    #[error("Configuration error: {0}")]
    Config(String),

    // Internal
    #[error("Internal error")]
    Internal(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound => "NOT_FOUND",
            AppError::Api { .. } => "API_ERROR",
            AppError::Transport(_) => "NETWORK_ERROR",
            AppError::Decode(_) => "DECODE_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for local errors
            AppError::Validation(msg) => msg.clone(),
            AppError::Config(msg) => msg.clone(),
            AppError::NotFound => "No results found".to_string(),

            // Any non-2xx is treated the same way
            AppError::Api { status } => {
                tracing::warn!("Employee service returned status {}", status);
                "The employee service could not complete the request".to_string()
            }
            AppError::Transport(msg) => {
                tracing::warn!("Transport error: {}", msg);
                "Network error".to_string()
            }
            AppError::Decode(msg) => {
                tracing::error!("Decode error: {}", msg);
                "Unexpected response from the employee service".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        }
    }
}

// =============================================================================
// HTTP client errors (reqwest)
// =============================================================================

#[cfg(feature = "http")]
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            AppError::Api {
                status: status.as_u16(),
            }
        } else if err.is_builder() {
            AppError::Config(err.to_string())
        } else {
            AppError::Transport(err.to_string())
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    /// Summarize outstanding field rejections, one `field: reason` per entry.
    pub fn from_field_errors(errors: &FieldErrors) -> Self {
        let summary = errors
            .iter()
            .map(|(field, rejection)| format!("{}: {}", field.name(), rejection))
            .collect::<Vec<_>>()
            .join("; ");
        AppError::Validation(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{Field, Rejection};

    #[test]
    fn test_codes() {
        assert_eq!(AppError::NotFound.code(), "NOT_FOUND");
        assert_eq!(AppError::Api { status: 500 }.code(), "API_ERROR");
        assert_eq!(AppError::Transport("refused".into()).code(), "NETWORK_ERROR");
    }

    #[test]
    fn test_user_message_hides_details() {
        let err = AppError::internal("pool exhausted");
        assert_eq!(err.user_message(), "An internal error occurred");

        let err = AppError::Transport("connection refused".into());
        assert_eq!(err.user_message(), "Network error");
    }

    #[test]
    fn test_field_error_summary() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Age, Rejection::new("Minimum age is 18"));
        errors.insert(Field::EmpId, Rejection::new("Employee ID is required"));

        let err = AppError::from_field_errors(&errors);
        assert_eq!(
            err.user_message(),
            "empId: Employee ID is required; age: Minimum age is 18"
        );
    }

    #[test]
    fn test_option_ext() {
        let missing: Option<u8> = None;
        assert!(matches!(missing.ok_or_not_found(), Err(AppError::NotFound)));
        assert_eq!(Some(1).ok_or_not_found().unwrap(), 1);
    }
}
