//! Edge cache: a bounded set of content IDs in front of the origin.
//!
//! Each edge exclusively owns its policy state and its counters. Edges never
//! share state with each other.
//!
//! ```text
//!   lookup(id)
//!     │
//!     ├─ policy is NOCACHE ──────────────► miss
//!     │
//!     ├─ resident ──► on_access(id) ─────► hit
//!     │
//!     └─ absent ───► admit(id) ──────────► miss
//!                    (evicts one victim first when full)
//! ```

use rand::Rng;
use tracing::trace;

use crate::builder::{Policy, PolicyKind};
use crate::metrics::EdgeStats;
use crate::traits::{ContentId, EvictionPolicy};

/// Bounded cache of content IDs driven by an eviction policy.
///
/// # Example
///
/// ```
/// use cdnsim::builder::{CacheBuilder, PolicyKind};
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let mut edge = CacheBuilder::new(2).build(PolicyKind::Lru);
///
/// assert!(!edge.lookup(1, &mut rng));
/// assert!(edge.lookup(1, &mut rng));
/// assert_eq!(edge.stats().hits, 1);
/// assert_eq!(edge.stats().misses, 1);
/// ```
#[derive(Debug)]
pub struct EdgeCache {
    policy: Policy,
    stats: EdgeStats,
}

impl EdgeCache {
    /// Wraps an already-built policy.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            stats: EdgeStats::default(),
        }
    }

    /// Looks `item` up, updating policy state. Returns `true` on a hit.
    ///
    /// A hit refreshes the item's bookkeeping and leaves the size unchanged.
    /// A miss admits the item, evicting one victim first if the edge is full.
    pub fn lookup<R: Rng>(&mut self, item: ContentId, rng: &mut R) -> bool {
        self.stats.requests += 1;

        if let Policy::NoCache(_) = self.policy {
            self.stats.misses += 1;
            return false;
        }

        if self.policy.contains(item) {
            self.policy.on_access(item);
            self.stats.hits += 1;
            return true;
        }

        self.stats.misses += 1;
        if let Some(victim) = self.policy.admit(item, rng) {
            self.stats.evictions += 1;
            trace!(victim, admitted = item, "edge eviction");
        }
        debug_assert!(self.policy.len() <= self.policy.capacity());
        false
    }

    /// Returns `true` if `item` is resident, without touching policy state.
    #[inline]
    pub fn contains(&self, item: ContentId) -> bool {
        self.policy.contains(item)
    }

    /// Number of resident items.
    #[inline]
    pub fn len(&self) -> usize {
        self.policy.len()
    }

    /// Returns `true` if nothing is resident.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.policy.is_empty()
    }

    /// Maximum number of resident items.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.policy.capacity()
    }

    /// Policy in effect. Capacity-0 edges always report [`PolicyKind::NoCache`].
    #[inline]
    pub fn kind(&self) -> PolicyKind {
        self.policy.kind()
    }

    /// Read access to the underlying policy.
    #[inline]
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Counters with the resident count captured now.
    pub fn stats(&self) -> EdgeStats {
        EdgeStats {
            resident: self.policy.len(),
            ..self.stats
        }
    }
}
