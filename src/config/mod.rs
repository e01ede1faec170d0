//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML), or built-in defaults
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → SelectorConfig (validated, immutable)
//!     → load_balancer::Selector::from_config
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; a changed pool means a new selector
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, read_config, ConfigError};
pub use schema::{ObservabilityConfig, Policy, SelectorConfig, ServerConfig};
pub use validation::{validate_config, ValidationError};
