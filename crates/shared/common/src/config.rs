//! Shared configuration structures.

use serde::{Deserialize, Serialize};

/// Default address of the employee service
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// HTTP client connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Service base URL (e.g., "http://localhost:8080")
    pub base_url: String,
    /// Connection timeout in milliseconds
    pub connect_timeout_ms: u64,
    /// Request timeout in milliseconds; `None` waits until the service answers
    pub request_timeout_ms: Option<u64>,
}

impl HttpClientConfig {
    /// Base URL without a trailing slash
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            connect_timeout_ms: 5000,
            request_timeout_ms: None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LogConfig {
    /// Default filter when `RUST_LOG` is unset
    pub default_filter: String,
}

impl LogConfig {
    pub fn verbose() -> Self {
        Self {
            default_filter: "debug".to_string(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_filter: "info".to_string(),
        }
    }
}
