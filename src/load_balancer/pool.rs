//! Configured server pool.
//!
//! # Responsibilities
//! - Build the selector named by the configured policy
//! - Hide the concrete policy behind the `LoadBalancer` interface
//! - Record every selection for observability

use rand::{rngs::SmallRng, SeedableRng};

use crate::config::{Policy, SelectorConfig};
use crate::load_balancer::{
    backend::Server, weight::Weighted, LoadBalancer, RoundRobin, SelectorError, WeightedCycle,
    WeightedRoundRobin,
};
use crate::observability::metrics;

/// A server pool paired with the policy chosen from configuration.
#[derive(Debug)]
pub struct Selector {
    policy: Policy,
    inner: Box<dyn LoadBalancer<Server>>,
}

impl Selector {
    /// Create a selector from configuration.
    pub fn from_config(config: &SelectorConfig) -> Result<Self, SelectorError> {
        let weighted: Vec<Weighted<Server, u32>> = config
            .servers
            .iter()
            .map(|server| Weighted::new(Server::new(server.name.clone()), server.weight))
            .collect();

        let inner: Box<dyn LoadBalancer<Server>> = match config.policy {
            Policy::RoundRobin => {
                let servers: Vec<Server> = weighted.into_iter().map(|entry| entry.item).collect();
                Box::new(RoundRobin::new(&servers)?)
            }
            Policy::Weighted => {
                let rng = match config.seed {
                    Some(seed) => SmallRng::seed_from_u64(seed),
                    None => SmallRng::from_entropy(),
                };
                Box::new(WeightedRoundRobin::with_rng(&weighted, rng)?)
            }
            Policy::WeightedCycle => Box::new(WeightedCycle::new(&weighted)?),
        };

        tracing::info!(
            policy = %config.policy,
            servers = inner.len(),
            seeded = config.seed.is_some(),
            "Selector ready"
        );

        Ok(Self {
            policy: config.policy,
            inner,
        })
    }

    /// Select the server for the next request.
    pub fn next_server(&self) -> Result<&Server, SelectorError> {
        match self.inner.next_server() {
            Ok(server) => {
                tracing::trace!(policy = %self.policy, server = %server, "Server selected");
                metrics::record_selection(self.policy.as_str(), server.name());
                Ok(server)
            }
            Err(e) => {
                tracing::warn!(policy = %self.policy, error = %e, "Server selection failed");
                Err(e)
            }
        }
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
