//! Shared utilities for integration tests.

use std::collections::HashMap;

use backend_selector::load_balancer::{LoadBalancer, Server, Weighted};

/// Build weighted server entries from `(name, weight)` pairs.
pub fn weighted_servers<W: Copy>(entries: &[(&str, W)]) -> Vec<Weighted<Server, W>> {
    entries
        .iter()
        .map(|(name, weight)| Weighted::new(Server::from(*name), *weight))
        .collect()
}

/// Run `draws` selections and count how often each server name came up.
pub fn count_selections<L>(lb: &L, draws: usize) -> HashMap<String, usize>
where
    L: LoadBalancer<Server> + ?Sized,
{
    let mut counts = HashMap::new();
    for _ in 0..draws {
        let server = lb.next_server().expect("selection should succeed");
        *counts.entry(server.name.clone()).or_insert(0) += 1;
    }
    counts
}
