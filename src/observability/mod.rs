//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Selectors and the pool produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (per-server selection counters)
//!
//! Consumers:
//!     → stdout/stderr through tracing-subscriber
//!     → any `metrics` recorder the embedding application installs
//! ```
//!
//! # Design Decisions
//! - `RUST_LOG` overrides the configured level
//! - Metrics go through the facade only; no exporter is bundled

pub mod logging;
pub mod metrics;
