//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::SelectorConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<SelectorConfig, ConfigError> {
    let config: SelectorConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Read and deserialize a TOML file without semantic validation.
///
/// For callers that adjust the config (or install logging) before validating.
pub fn read_config(path: &Path) -> Result<SelectorConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<SelectorConfig, ConfigError> {
    let config = read_config(path)?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    tracing::debug!(
        path = %path.display(),
        policy = %config.policy,
        servers = config.servers.len(),
        "Configuration loaded"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::logging::capture_logs;
    use std::io::Write;

    #[test]
    fn test_validation_errors_are_joined() {
        let err = parse_config("requests = 0\nservers = []").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: at least one server must be configured, \
             requests must be greater than 0"
        );
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("servers = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_read_config_skips_validation() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"requests = 0").unwrap();

        let config = read_config(file.path()).unwrap();
        assert_eq!(config.requests, 0);
        assert!(matches!(load_config(file.path()), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_load_reports_duplicates_and_success() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[[servers]]\nname = \"a\"\n[[servers]]\nname = \"a\"\n")
            .unwrap();

        let (result, logs) = capture_logs(|| load_config(file.path()));
        assert_eq!(result.unwrap().servers.len(), 2);
        assert!(logs.contains("Duplicate server name in pool"), "{logs}");
        assert!(logs.contains("Configuration loaded"), "{logs}");
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/selector.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
