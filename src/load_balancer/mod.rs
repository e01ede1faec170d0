//! Load balancing subsystem.
//!
//! # Data Flow
//! ```text
//! Server list (+ weights) from caller or config
//!     → copied into the selector at construction
//!     → Apply selection policy on every request:
//!         - round_robin.rs (rotate through servers)
//!         - weighted.rs (random draw over the cumulative-weight table)
//!         - weighted_cycle.rs (deterministic rotation over expanded weights)
//!     → pool.rs (policy chosen from configuration, selections recorded)
//!     → Return the selected server or a SelectorError
//! ```
//!
//! # Design Decisions
//! - Pools are immutable after construction; a new selector replaces an old one
//! - Every selector is `Send + Sync`: cursors are atomics, the RNG sits behind a mutex
//! - Errors are returned, never swallowed by a fallback server

use std::fmt::Debug;

use thiserror::Error;

pub mod backend;
pub mod pool;
pub mod round_robin;
pub mod weight;
pub mod weighted;
pub mod weighted_cycle;

pub use backend::Server;
pub use pool::Selector;
pub use round_robin::RoundRobin;
pub use weight::{Weight, Weighted};
pub use weighted::WeightedRoundRobin;
pub use weighted_cycle::WeightedCycle;

/// Errors produced while building a selector or selecting a server.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectorError {
    /// The server list cannot back a selector (empty, bad weight, overflow).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The selector exists but cannot currently produce a server.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The cumulative-weight table did not contain the drawn point.
    #[error("Internal invariant violated: {0}")]
    InternalInvariantViolation(String),
}

/// Common interface of every selection policy.
pub trait LoadBalancer<T>: Debug + Send + Sync {
    /// Select the server for the next request.
    fn next_server(&self) -> Result<&T, SelectorError>;

    /// Number of servers in the pool.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
