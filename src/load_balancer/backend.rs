//! Server descriptor.
//!
//! # Responsibilities
//! - Represent a single backend server by its identifier
//! - Convert from configuration entries and plain names

use std::fmt;

/// A single backend server.
///
/// Names are expected to be unique within a pool but this is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Server {
    /// Identifier used when routing and reporting.
    pub name: String,
}

impl Server {
    /// Create a new server descriptor.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Server {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Server {
    fn from(name: String) -> Self {
        Self { name }
    }
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
