//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject pools no selector could be built from
//! - Validate value ranges (requests > 0, weights usable by the policy)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SelectorConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::SelectorConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("at least one server must be configured")]
    NoServers,

    #[error("server at index {0} has an empty name")]
    EmptyServerName(usize),

    #[error("requests must be greater than 0")]
    ZeroRequests,

    #[error("policy '{0}' needs at least one server with a positive weight")]
    ZeroTotalWeight(String),
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &SelectorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.servers.is_empty() {
        errors.push(ValidationError::NoServers);
    }

    let mut seen = HashSet::new();
    for (index, server) in config.servers.iter().enumerate() {
        if server.name.trim().is_empty() {
            errors.push(ValidationError::EmptyServerName(index));
        } else if !seen.insert(server.name.as_str()) {
            tracing::warn!(server = %server.name, "Duplicate server name in pool");
        }
    }

    if config.requests == 0 {
        errors.push(ValidationError::ZeroRequests);
    }

    if config.policy.is_weighted()
        && !config.servers.is_empty()
        && config.servers.iter().all(|server| server.weight == 0)
    {
        errors.push(ValidationError::ZeroTotalWeight(config.policy.to_string()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
