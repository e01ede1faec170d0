//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the selector.
//! All types derive Serde traits for deserialization from config files.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Distribution policy used to pick servers.
    pub policy: Policy,

    /// Server pool, in selection order.
    pub servers: Vec<ServerConfig>,

    /// Number of synthetic requests the demo routes.
    pub requests: usize,

    /// Seed for the weighted policy's generator. Unset means entropy-seeded.
    pub seed: Option<u64>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            policy: Policy::default(),
            servers: ["Server1", "Server2", "Server3"]
                .into_iter()
                .map(|name| ServerConfig {
                    name: name.to_string(),
                    weight: default_weight(),
                })
                .collect(),
            requests: 10,
            seed: None,
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Server selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Policy {
    /// Strict cyclic rotation; weights are ignored.
    #[default]
    RoundRobin,
    /// Random draw proportional to weight.
    Weighted,
    /// Deterministic rotation, each server repeated `weight` times.
    WeightedCycle,
}

impl Policy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Policy::RoundRobin => "round-robin",
            Policy::Weighted => "weighted",
            Policy::WeightedCycle => "weighted-cycle",
        }
    }

    /// Whether server weights influence selection.
    pub fn is_weighted(&self) -> bool {
        !matches!(self, Policy::RoundRobin)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backend server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server identifier.
    pub name: String,

    /// Weight for weighted policies (default: 1).
    #[serde(default = "default_weight")]
    pub weight: u32,
}

fn default_weight() -> u32 {
    1
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
