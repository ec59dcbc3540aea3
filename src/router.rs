//! Request routing across edge caches.
//!
//! ## Strategies
//!
//! ```text
//!   Uniform                         ContentHash { seed }
//!   ───────                         ────────────────────
//!   edge = rng.random_range(0..K)   edge = FxHash(seed, id) % K
//!
//!   independent draw per request    same id always lands on the same edge
//!   consumes the shared stream      consumes nothing from the stream
//! ```
//!
//! `Uniform` is the default and matches the reference model: caches share no
//! load-balancing state and each request picks an edge independently.
//! `ContentHash` models content-affine balancing; with it every item has a
//! single home edge, so K edges behave like one cache partitioned K ways.

use std::hash::{Hash, Hasher};

use rand::Rng;
use rustc_hash::FxHasher;

use crate::error::ConfigError;
use crate::traits::ContentId;

/// How requests are assigned to edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoutingStrategy {
    /// Independent uniform draw per request.
    #[default]
    Uniform,
    /// Seeded hash of the content ID.
    ContentHash { seed: u64 },
}

/// Assigns each request to one of `edges` caches.
///
/// # Example
///
/// ```
/// use cdnsim::router::{RequestRouter, RoutingStrategy};
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let router = RequestRouter::new(4, RoutingStrategy::Uniform).unwrap();
/// assert!(router.route(17, &mut rng) < 4);
///
/// let affine = RequestRouter::new(4, RoutingStrategy::ContentHash { seed: 1 }).unwrap();
/// let home = affine.route(17, &mut rng);
/// assert_eq!(affine.route(17, &mut rng), home);
///
/// assert!(RequestRouter::new(0, RoutingStrategy::Uniform).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestRouter {
    edges: usize,
    strategy: RoutingStrategy,
}

impl RequestRouter {
    /// Creates a router over `edges` caches. Fails if `edges` is zero.
    pub fn new(edges: usize, strategy: RoutingStrategy) -> Result<Self, ConfigError> {
        if edges == 0 {
            return Err(ConfigError::new("edges must be >= 1"));
        }
        Ok(Self { edges, strategy })
    }

    /// Picks the edge index in `[0, edges)` for a request for `item`.
    #[inline]
    pub fn route<R: Rng>(&self, item: ContentId, rng: &mut R) -> usize {
        match self.strategy {
            RoutingStrategy::Uniform => rng.random_range(0..self.edges),
            RoutingStrategy::ContentHash { seed } => {
                let mut hasher = FxHasher::default();
                seed.hash(&mut hasher);
                item.hash(&mut hasher);
                (hasher.finish() % self.edges as u64) as usize
            },
        }
    }

    /// Number of edges requests are spread over.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Routing strategy in use.
    #[inline]
    pub fn strategy(&self) -> RoutingStrategy {
        self.strategy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn single_edge_always_zero() {
        let mut rng = SmallRng::seed_from_u64(3);
        for strategy in [RoutingStrategy::Uniform, RoutingStrategy::ContentHash { seed: 9 }] {
            let router = RequestRouter::new(1, strategy).unwrap();
            for id in 0..50 {
                assert_eq!(router.route(id, &mut rng), 0);
            }
        }
    }

    #[test]
    fn uniform_spreads_over_all_edges() {
        let mut rng = SmallRng::seed_from_u64(3);
        let router = RequestRouter::new(8, RoutingStrategy::Uniform).unwrap();
        let mut counts = [0u32; 8];
        for _ in 0..80_000 {
            counts[router.route(0, &mut rng)] += 1;
        }
        for count in counts {
            assert!((9_000..11_000).contains(&count), "count {}", count);
        }
    }

    #[test]
    fn content_hash_is_deterministic_and_rng_free() {
        let router = RequestRouter::new(5, RoutingStrategy::ContentHash { seed: 42 }).unwrap();
        let mut a = SmallRng::seed_from_u64(1);
        let mut b = SmallRng::seed_from_u64(2);
        for id in 0..200 {
            let edge = router.route(id, &mut a);
            assert!(edge < 5);
            assert_eq!(router.route(id, &mut b), edge);
        }
    }

    #[test]
    fn zero_edges_rejected() {
        let err = RequestRouter::new(0, RoutingStrategy::Uniform).unwrap_err();
        assert!(err.message().contains("edges"));
    }
}
