//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ClientConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation failed: {}", render(.0))]
    Validation(Vec<ValidationError>),
}

fn render(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ClientConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ClientConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn loads_and_validates_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[retries]\nmax_attempts = 5\n").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.retries.max_attempts, 5);
    }

    #[test]
    fn rejects_semantically_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[retries]\nmax_attempts = 0\n").unwrap();

        match load_config(file.path()) {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors, vec![ValidationError::ZeroAttempts]);
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_config(Path::new("/nonexistent/client.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
