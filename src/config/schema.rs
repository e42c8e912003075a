//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client
//! pipeline. All types derive Serde traits for deserialization from config
//! files.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::resilience::RetryPolicy;

/// Root configuration for the outbound client pipeline.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Timeout configuration for the base transport.
    pub timeouts: TimeoutConfig,

    /// Retry configuration.
    pub retries: RetryConfig,

    /// Optional Basic credentials injected into every request.
    pub auth: Option<AuthConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Timeout configuration for the base transport.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            request_secs: 30,
        }
    }
}

/// Retry configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Enable retries.
    pub enabled: bool,

    /// Total attempts including the first.
    pub max_attempts: u32,

    /// Fixed wait between attempts in milliseconds.
    pub delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_attempts: 3,
            delay_ms: 100,
        }
    }
}

impl RetryConfig {
    /// Policy for the retry decorator.
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, Duration::from_millis(self.delay_ms))
    }
}

/// Static Basic credentials.
#[derive(Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Username for the Basic authorization header.
    pub username: String,

    /// Password for the Basic authorization header.
    pub password: String,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Emit one structured log record per exchange.
    pub log_requests: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self { log_requests: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let config: ClientConfig = toml::from_str("").unwrap();
        assert_eq!(config.retries.max_attempts, 3);
        assert_eq!(config.timeouts.request_secs, 30);
        assert!(config.auth.is_none());
        assert!(config.observability.log_requests);
    }

    #[test]
    fn sections_override_defaults() {
        let config: ClientConfig = toml::from_str(
            "[retries]\nmax_attempts = 5\ndelay_ms = 250\n\n[auth]\nusername = \"svc\"\npassword = \"secret\"\n",
        )
        .unwrap();
        assert_eq!(config.retries.max_attempts, 5);
        assert_eq!(config.retries.policy().delay.as_millis(), 250);
        assert_eq!(config.auth.unwrap().username, "svc");
    }

    #[test]
    fn auth_debug_is_redacted() {
        let auth = AuthConfig {
            username: "svc".into(),
            password: "secret".into(),
        };
        let rendered = format!("{auth:?}");
        assert!(!rendered.contains("secret"));
    }
}
