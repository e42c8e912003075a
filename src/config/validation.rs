//! Configuration validation.
//!
//! Serde handles syntax; this pass checks semantics and returns every
//! violation, not just the first.

use thiserror::Error;

use crate::config::schema::ClientConfig;

/// A single semantic violation in a loaded configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("retries.max_attempts must be at least 1")]
    ZeroAttempts,

    #[error("timeouts.request_secs must be greater than 0")]
    ZeroRequestTimeout,

    #[error("timeouts.connect_secs must be greater than 0")]
    ZeroConnectTimeout,

    #[error("auth.username must not be empty")]
    EmptyUsername,
}

/// Check a configuration, collecting all violations.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.retries.enabled && config.retries.max_attempts == 0 {
        errors.push(ValidationError::ZeroAttempts);
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }
    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError::ZeroConnectTimeout);
    }
    if let Some(auth) = &config.auth {
        if auth.username.is_empty() {
            errors.push(ValidationError::EmptyUsername);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
