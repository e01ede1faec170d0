//! Round-robin load balancing strategy.

use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::load_balancer::{LoadBalancer, SelectorError};

/// Round-robin selector.
/// Owns a copy of the pool and a cursor that always stays in `[0, len)`.
#[derive(Debug)]
pub struct RoundRobin<T> {
    servers: Vec<T>,
    cursor: AtomicUsize,
}

impl<T: Clone> RoundRobin<T> {
    /// Build a selector over a private copy of `servers`.
    pub fn new(servers: &[T]) -> Result<Self, SelectorError> {
        if servers.is_empty() {
            return Err(SelectorError::InvalidConfiguration(
                "server list cannot be empty".to_string(),
            ));
        }

        tracing::debug!(servers = servers.len(), "Round-robin selector built");
        Ok(Self {
            servers: servers.to_vec(),
            cursor: AtomicUsize::new(0),
        })
    }
}

impl<T> RoundRobin<T> {
    /// Index the next call will return.
    pub fn cursor(&self) -> usize {
        self.cursor.load(Ordering::Relaxed)
    }

    pub fn servers(&self) -> &[T] {
        &self.servers
    }
}

/// Move `cursor` one step forward modulo `len` and return its previous value.
pub(crate) fn advance(cursor: &AtomicUsize, len: usize) -> usize {
    // The closure never declines, so both arms carry the previous value.
    match cursor.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
        Some((current + 1) % len)
    }) {
        Ok(previous) | Err(previous) => previous,
    }
}

impl<T: Debug + Send + Sync> LoadBalancer<T> for RoundRobin<T> {
    fn next_server(&self) -> Result<&T, SelectorError> {
        let index = advance(&self.cursor, self.servers.len());
        Ok(&self.servers[index])
    }

    fn len(&self) -> usize {
        self.servers.len()
    }
}
