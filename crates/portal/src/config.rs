//! Portal configuration.

use std::env;

use common::{HttpClientConfig, LogConfig, DEFAULT_API_URL};

/// Portal configuration.
#[derive(Debug, Clone, Default)]
pub struct PortalConfig {
    /// Employee service client settings
    pub api: HttpClientConfig,
    /// Logging defaults
    pub log: LogConfig,
}

impl PortalConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            api: HttpClientConfig {
                base_url: env::var("PORTAL_API_URL")
                    .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
                connect_timeout_ms: env::var("PORTAL_CONNECT_TIMEOUT_MS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(5000),
                request_timeout_ms: env::var("PORTAL_REQUEST_TIMEOUT_MS")
                    .ok()
                    .and_then(|t| t.parse().ok()),
            },
            log: LogConfig::default(),
        }
    }

    /// Override the service URL (e.g. from a CLI flag).
    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.api.base_url = url;
        }
        self
    }

    /// Switch the default log filter to debug.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.log = LogConfig::verbose();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides() {
        let config = PortalConfig::default()
            .with_api_url(Some("http://10.0.0.5:9000".to_string()))
            .with_verbose(true);

        assert_eq!(config.api.base_url, "http://10.0.0.5:9000");
        assert_eq!(config.log.default_filter, "debug");
    }

    #[test]
    fn test_no_override_keeps_default() {
        let config = PortalConfig::default().with_api_url(None).with_verbose(false);
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
        assert_eq!(config.api.request_timeout_ms, None);
        assert_eq!(config.log.default_filter, "info");
    }
}
