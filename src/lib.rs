//! Backend server selection library.
//!
//! Picks one server from a fixed pool per request, using round-robin,
//! weighted random or weighted cycle distribution.

pub mod config;
pub mod load_balancer;
pub mod observability;

pub use config::schema::SelectorConfig;
pub use load_balancer::{LoadBalancer, Selector, SelectorError, Server};
