//! Weighted random load balancing strategy.
//!
//! Each call draws a uniform point in `[0, total_weight)` and returns the
//! server whose cumulative-weight bucket contains it, so server `i` is chosen
//! with probability `weight[i] / total_weight`.

use std::fmt::Debug;
use std::sync::{Mutex, PoisonError};

use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::load_balancer::{
    weight::{CumulativeWeights, Weight, Weighted},
    LoadBalancer, SelectorError,
};

/// Weighted round-robin selector backed by a cumulative-weight table.
#[derive(Debug)]
pub struct WeightedRoundRobin<T, W = u32, R = SmallRng> {
    servers: Vec<T>,
    weights: CumulativeWeights<W>,
    rng: Mutex<R>,
}

impl<T: Clone, W: Weight> WeightedRoundRobin<T, W, SmallRng> {
    /// Build a selector with an entropy-seeded generator.
    pub fn new(servers: &[Weighted<T, W>]) -> Result<Self, SelectorError> {
        Self::with_rng(servers, SmallRng::from_entropy())
    }
}

impl<T: Clone, W: Weight, R: Rng> WeightedRoundRobin<T, W, R> {
    /// Build a selector drawing from `rng`.
    pub fn with_rng(servers: &[Weighted<T, W>], rng: R) -> Result<Self, SelectorError> {
        if servers.is_empty() {
            return Err(SelectorError::InvalidConfiguration(
                "server list cannot be empty".to_string(),
            ));
        }

        let weights = CumulativeWeights::build(servers.iter().map(|entry| entry.weight))?;
        tracing::debug!(
            servers = servers.len(),
            total_weight = ?weights.total(),
            "Weighted selector built"
        );

        Ok(Self {
            servers: servers.iter().map(|entry| entry.item.clone()).collect(),
            weights,
            rng: Mutex::new(rng),
        })
    }
}

impl<T, W: Weight, R> WeightedRoundRobin<T, W, R> {
    pub fn total_weight(&self) -> W {
        self.weights.total()
    }

    pub fn servers(&self) -> &[T] {
        &self.servers
    }
}

impl<T, W, R> LoadBalancer<T> for WeightedRoundRobin<T, W, R>
where
    T: Debug + Send + Sync,
    W: Weight,
    R: Rng + Debug + Send,
{
    fn next_server(&self) -> Result<&T, SelectorError> {
        if self.weights.is_exhausted() {
            return Err(SelectorError::InvalidState(
                "total weight of servers must be greater than 0".to_string(),
            ));
        }

        let point = {
            // The generator holds no invariant a panicking holder could break.
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            rng.gen_range(W::ZERO..self.weights.total())
        };

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

    fn seeded<W: Weight>(
        servers: &[Weighted<&'static str, W>],
    ) -> WeightedRoundRobin<&'static str, W> {
        WeightedRoundRobin::with_rng(servers, SmallRng::seed_from_u64(1)).unwrap()
    }

    #[test]
    fn test_weighted_distribution() {
        let servers = [
            Weighted::new("A", 3u32),
            Weighted::new("B", 2),
            Weighted::new("C", 1),
        ];
        let lb = seeded(&servers);
        let draws = 100_000;

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for _ in 0..draws {
            *counts.entry(*lb.next_server().unwrap()).or_default() += 1;
        }

        for entry in &servers {
            let actual = counts[entry.item] as f64 / draws as f64;
            let expected = f64::from(entry.weight) / 6.0;
            assert!(
                (actual - expected).abs() < 0.01,
                "{} has ratio {actual:.3} (expected {expected:.3})",
                entry.item
            );
        }
    }

    #[test]
    fn test_float_weights() {
        let lb = seeded(&[Weighted::new("A", 0.75f64), Weighted::new("B", 0.25)]);
        let draws = 40_000;
        let a = (0..draws).filter(|_| *lb.next_server().unwrap() == "A").count();
        let ratio = a as f64 / draws as f64;
        assert!((ratio - 0.75).abs() < 0.01, "A has ratio {ratio:.3}");
    }

    #[test]
    fn test_single_server_always_selected() {
        let lb = seeded(&[Weighted::new("only", 7u32)]);
        for _ in 0..1_000 {
            assert_eq!(*lb.next_server().unwrap(), "only");
        }
    }

    #[test]
    fn test_zero_weight_server_never_selected() {
        let lb = seeded(&[
            Weighted::new("A", 1u32),
            Weighted::new("B", 0),
            Weighted::new("C", 1),
        ]);
        for _ in 0..10_000 {
            assert_ne!(*lb.next_server().unwrap(), "B");
        }
    }

    #[test]
    fn test_zero_total_weight_is_invalid_state() {
        let lb = seeded(&[Weighted::new("A", 0u32), Weighted::new("B", 0)]);
        for _ in 0..3 {
            assert!(matches!(lb.next_server(), Err(SelectorError::InvalidState(_))));
        }
    }

    #[test]
    fn test_negative_weight_rejected() {
        let servers = [Weighted::new("A", 2i32), Weighted::new("B", -1)];
        let err = WeightedRoundRobin::new(&servers).unwrap_err();
        assert!(matches!(err, SelectorError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_empty_pool_rejected() {
        let err = WeightedRoundRobin::<&str, u32>::new(&[]).unwrap_err();
        assert!(matches!(err, SelectorError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_seeded_selectors_agree() {
        let servers = [
            Weighted::new("A", 5u32),
            Weighted::new("B", 3),
            Weighted::new("C", 2),
        ];
        let first = seeded(&servers);
        let second = seeded(&servers);
        for _ in 0..100 {
            assert_eq!(first.next_server().unwrap(), second.next_server().unwrap());
        }
    }

    #[test]
    fn test_copy_isolation() {
        let mut servers = vec![Weighted::new("A".to_string(), 1u32)];
        let lb = WeightedRoundRobin::with_rng(&servers, SmallRng::seed_from_u64(7)).unwrap();
        servers[0].item = "Z".to_string();
        servers[0].weight = 0;

        assert_eq!(lb.total_weight(), 1);
        assert_eq!(lb.next_server().unwrap(), "A");
    }
}
