//! Deterministic weighted rotation.
//!
//! Behaves like rotating over a list in which every server appears `weight`
//! times in pool order. The list is never materialised: a cursor walks
//! `[0, total_weight)` and each position is mapped back through the
//! cumulative-weight table.

use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::load_balancer::{
    round_robin::advance,
    weight::{CumulativeWeights, Weighted},
    LoadBalancer, SelectorError,
};

#[derive(Debug)]
pub struct WeightedCycle<T> {
    servers: Vec<T>,
    weights: CumulativeWeights<u32>,
    cursor: AtomicUsize,
}

impl<T: Clone> WeightedCycle<T> {
    pub fn new(servers: &[Weighted<T, u32>]) -> Result<Self, SelectorError> {
        if servers.is_empty() {
            return Err(SelectorError::InvalidConfiguration(
                "server list cannot be empty".to_string(),
            ));
        }

        let weights = CumulativeWeights::build(servers.iter().map(|entry| entry.weight))?;
        tracing::debug!(
            servers = servers.len(),
            cycle_length = weights.total(),
            "Weighted cycle selector built"
        );

        Ok(Self {
            servers: servers.iter().map(|entry| entry.item.clone()).collect(),
            weights,
            cursor: AtomicUsize::new(0),
        })
    }
}

impl<T> WeightedCycle<T> {
    /// Number of selections before the sequence repeats.
    pub fn cycle_length(&self) -> u32 {
        self.weights.total()
    }

    /// Position within the cycle the next call will use.
    pub fn cursor(&self) -> usize {
        self.cursor.load(Ordering::Relaxed)
    }
}

impl<T: Debug + Send + Sync> LoadBalancer<T> for WeightedCycle<T> {
    fn next_server(&self) -> Result<&T, SelectorError> {
        if self.weights.is_exhausted() {
            return Err(SelectorError::InvalidState(
                "total weight of servers must be greater than 0".to_string(),
            ));
        }

        let position = advance(&self.cursor, self.weights.total() as usize);
        let point = u32::try_from(position).map_err(|_| {
            SelectorError::InternalInvariantViolation(format!(
                "cycle position {position} exceeds cycle length {}",
                self.weights.total()
            ))
        })?;

        let index = self.weights.locate(point)?;
        Ok(&self.servers[index])
    }

    fn len(&self) -> usize {
        self.servers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_exact_counts_per_cycle() {
        let lb = WeightedCycle::new(&[
            Weighted::new("Server1", 3),
            Weighted::new("Server2", 2),
            Weighted::new("Server3", 1),
        ])
        .unwrap();

        let mut counts: HashMap<&str, u32> = HashMap::new();
        for _ in 0..lb.cycle_length() {
            *counts.entry(*lb.next_server().unwrap()).or_default() += 1;
        }
        assert_eq!(counts["Server1"], 3);
        assert_eq!(counts["Server2"], 2);
        assert_eq!(counts["Server3"], 1);
    }

    #[test]
    fn test_expanded_order() {
        let lb = WeightedCycle::new(&[Weighted::new("A", 2), Weighted::new("B", 1)]).unwrap();
        let picks: Vec<_> = (0..6).map(|_| *lb.next_server().unwrap()).collect();
        assert_eq!(picks, vec!["A", "A", "B", "A", "A", "B"]);
    }

    #[test]
    fn test_zero_weight_handling() {
        let lb = WeightedCycle::new(&[
            Weighted::new("ServerA", 2),
            Weighted::new("ServerB", 0),
            Weighted::new("ServerC", 1),
        ])
        .unwrap();

        let picks: Vec<_> = (0..3).map(|_| *lb.next_server().unwrap()).collect();
        assert_eq!(picks, vec!["ServerA", "ServerA", "ServerC"]);
    }

    #[test]
    fn test_all_zero_is_invalid_state() {
        let lb = WeightedCycle::new(&[Weighted::new("A", 0), Weighted::new("B", 0)]).unwrap();
        assert!(matches!(lb.next_server(), Err(SelectorError::InvalidState(_))));
    }

    #[test]
    fn test_empty_pool_rejected() {
        let err = WeightedCycle::<&str>::new(&[]).unwrap_err();
        assert!(matches!(err, SelectorError::InvalidConfiguration(_)));
    }
}
