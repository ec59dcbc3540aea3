//! Simulation configuration.
//!
//! ## Defaults
//!
//! | Field        | Default     | Meaning                                  |
//! |--------------|-------------|------------------------------------------|
//! | `n_contents` | 1000        | Catalogue size N                         |
//! | `alpha`      | 1.0         | Zipf skew                                |
//! | `edges`      | 4           | Number of edge caches K                  |
//! | `capacity`   | 100         | Items per edge C                         |
//! | `policy`     | LRU         | Eviction policy                          |
//! | `seed`       | 42          | Seed of the run's random stream          |
//! | `latency`    | 10 / 100 ms | Edge hit / origin fetch latency          |
//! | `routing`    | Uniform     | Request to edge assignment               |
//!
//! ## Example
//!
//! ```
//! use cdnsim::builder::PolicyKind;
//! use cdnsim::config::SimulationConfig;
//!
//! let config = SimulationConfig::default()
//!     .with_alpha(0.8)
//!     .with_edges(2)
//!     .with_policy(PolicyKind::Lfu);
//! assert!(config.validate().is_ok());
//!
//! assert!(SimulationConfig::default().with_edges(0).validate().is_err());
//! ```

use crate::builder::PolicyKind;
use crate::error::ConfigError;
use crate::router::RoutingStrategy;

/// Two-level latency model: edge hit or origin fetch.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatencyModel {
    /// Latency of a request served by an edge.
    pub edge_hit_ms: f64,
    /// Latency of a request that falls through to the origin.
    pub origin_ms: f64,
}

impl LatencyModel {
    /// Edge-hit latency used when none is configured.
    pub const DEFAULT_EDGE_HIT_MS: f64 = 10.0;
    /// Origin latency used when none is configured.
    pub const DEFAULT_ORIGIN_MS: f64 = 100.0;

    /// Creates a model with explicit hit and origin latencies.
    pub fn new(edge_hit_ms: f64, origin_ms: f64) -> Self {
        Self {
            edge_hit_ms,
            origin_ms,
        }
    }

    /// Latency charged for a request with the given outcome.
    #[inline]
    pub fn latency_for(&self, hit: bool) -> f64 {
        if hit { self.edge_hit_ms } else { self.origin_ms }
    }

    /// Rejects negative or non-finite latencies.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("edge_hit_ms", self.edge_hit_ms), ("origin_ms", self.origin_ms)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::new(format!(
                    "{} must be a finite value >= 0, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl Default for LatencyModel {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EDGE_HIT_MS, Self::DEFAULT_ORIGIN_MS)
    }
}

/// Parameters of one simulation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationConfig {
    /// Catalog size; content IDs are `0..n_contents`.
    pub n_contents: usize,
    /// Zipf skew exponent.
    pub alpha: f64,
    /// Number of edge caches.
    pub edges: usize,
    /// Items each edge can hold.
    pub capacity: usize,
    /// Eviction policy run by every edge.
    pub policy: PolicyKind,
    /// Seed for the run's random generator.
    pub seed: u64,
    /// Hit and origin latencies.
    pub latency: LatencyModel,
    /// How requests are assigned to edges.
    pub routing: RoutingStrategy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            n_contents: 1000,
            alpha: 1.0,
            edges: 4,
            capacity: 100,
            policy: PolicyKind::Lru,
            seed: 42,
            latency: LatencyModel::default(),
            routing: RoutingStrategy::Uniform,
        }
    }
}

impl SimulationConfig {
    /// Sets the catalog size.
    pub fn with_contents(mut self, n_contents: usize) -> Self {
        self.n_contents = n_contents;
        self
    }

    /// Sets the Zipf skew exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the number of edge caches.
    pub fn with_edges(mut self, edges: usize) -> Self {
        self.edges = edges;
        self
    }

    /// Sets the per-edge capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the eviction policy.
    pub fn with_policy(mut self, policy: PolicyKind) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the latency model.
    pub fn with_latency(mut self, latency: LatencyModel) -> Self {
        self.latency = latency;
        self
    }

    /// Sets the routing strategy.
    pub fn with_routing(mut self, routing: RoutingStrategy) -> Self {
        self.routing = routing;
        self
    }

    /// Checks every parameter, reporting the first invalid one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_contents == 0 {
            return Err(ConfigError::new("n_contents must be >= 1"));
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(ConfigError::new(format!(
                "alpha must be a finite value >= 0, got {}",
                self.alpha
            )));
        }
        if self.edges == 0 {
            return Err(ConfigError::new("edges must be >= 1"));
        }
        self.latency.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.latency.latency_for(true), 10.0);
        assert_eq!(config.latency.latency_for(false), 100.0);
    }

    #[test]
    fn invalid_parameters_are_reported() {
        let cases = [
            (SimulationConfig::default().with_contents(0), "n_contents"),
            (SimulationConfig::default().with_alpha(-1.0), "alpha"),
            (SimulationConfig::default().with_alpha(f64::NAN), "alpha"),
            (SimulationConfig::default().with_edges(0), "edges"),
            (
                SimulationConfig::default().with_latency(LatencyModel::new(-1.0, 100.0)),
                "edge_hit_ms",
            ),
            (
                SimulationConfig::default().with_latency(LatencyModel::new(10.0, f64::INFINITY)),
                "origin_ms",
            ),
        ];
        for (config, field) in cases {
            let err = config.validate().unwrap_err();
            assert!(err.message().contains(field), "{} not in {}", field, err);
        }
    }

    #[test]
    fn zero_capacity_is_valid() {
        assert!(SimulationConfig::default().with_capacity(0).validate().is_ok());
    }
}
