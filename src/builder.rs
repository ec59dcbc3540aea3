//! Unified construction of edge caches for all eviction policies.
//!
//! [`PolicyKind`] is the driver-facing policy name; [`Policy`] is the
//! tagged wrapper that dispatches to the concrete implementation without
//! trait objects; [`CacheBuilder`] turns a capacity and a kind into an
//! [`EdgeCache`].
//!
//! A capacity of zero always builds a [`NoCachePolicy`], whatever kind was
//! asked for, so capacity-0 runs are identical across policy names.
//!
//! ## Example
//!
//! ```rust
//! use cdnsim::builder::{CacheBuilder, PolicyKind};
//!
//! let kind: PolicyKind = "lfu".parse().unwrap();
//! let cache = CacheBuilder::new(100).build(kind);
//! assert_eq!(cache.kind(), PolicyKind::Lfu);
//! assert_eq!(cache.capacity(), 100);
//!
//! let empty = CacheBuilder::new(0).build(PolicyKind::Lru);
//! assert_eq!(empty.kind(), PolicyKind::NoCache);
//! ```

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::edge::EdgeCache;
use crate::error::ConfigError;
use crate::policy::lfu::LfuPolicy;
use crate::policy::lru::LruPolicy;
use crate::policy::no_cache::NoCachePolicy;
use crate::policy::random::RandomPolicy;
use crate::traits::{ContentId, EvictionPolicy};

/// Available eviction policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum PolicyKind {
    /// Least Recently Used eviction.
    Lru,
    /// Least Frequently Used eviction, oldest admission on ties.
    Lfu,
    /// Uniform random eviction.
    Random,
    /// No caching: every request is a miss.
    NoCache,
}

impl PolicyKind {
    /// All policies, in the order sweeps report them.
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::Lru,
        PolicyKind::Lfu,
        PolicyKind::Random,
        PolicyKind::NoCache,
    ];

    /// Canonical upper-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            PolicyKind::Lru => "LRU",
            PolicyKind::Lfu => "LFU",
            PolicyKind::Random => "RANDOM",
            PolicyKind::NoCache => "NOCACHE",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for PolicyKind {
    type Err = ConfigError;

    /// Parses a policy name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LRU" => Ok(PolicyKind::Lru),
            "LFU" => Ok(PolicyKind::Lfu),
            "RANDOM" => Ok(PolicyKind::Random),
            "NOCACHE" | "NO_CACHE" | "NONE" => Ok(PolicyKind::NoCache),
            _ => Err(ConfigError::new(format!("unknown policy name: {:?}", s))),
        }
    }
}

/// Policy instance selected at construction time.
#[derive(Debug)]
pub enum Policy {
    Lru(LruPolicy),
    Lfu(LfuPolicy),
    Random(RandomPolicy),
    NoCache(NoCachePolicy),
}

impl Policy {
    /// Builds the policy for `kind`, falling back to no caching at capacity 0.
    pub fn new(kind: PolicyKind, capacity: usize) -> Self {
        if capacity == 0 {
            return Policy::NoCache(NoCachePolicy::new());
        }
        match kind {
            PolicyKind::Lru => Policy::Lru(LruPolicy::new(capacity)),
            PolicyKind::Lfu => Policy::Lfu(LfuPolicy::new(capacity)),
            PolicyKind::Random => Policy::Random(RandomPolicy::new(capacity)),
            PolicyKind::NoCache => Policy::NoCache(NoCachePolicy::new()),
        }
    }

    /// The kind actually in effect.
    pub fn kind(&self) -> PolicyKind {
        match self {
            Policy::Lru(_) => PolicyKind::Lru,
            Policy::Lfu(_) => PolicyKind::Lfu,
            Policy::Random(_) => PolicyKind::Random,
            Policy::NoCache(_) => PolicyKind::NoCache,
        }
    }
}

impl EvictionPolicy for Policy {
    fn capacity(&self) -> usize {
        match self {
            Policy::Lru(p) => p.capacity(),
            Policy::Lfu(p) => p.capacity(),
            Policy::Random(p) => p.capacity(),
            Policy::NoCache(p) => p.capacity(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Policy::Lru(p) => p.len(),
            Policy::Lfu(p) => p.len(),
            Policy::Random(p) => p.len(),
            Policy::NoCache(p) => p.len(),
        }
    }

    fn contains(&self, item: ContentId) -> bool {
        match self {
            Policy::Lru(p) => p.contains(item),
            Policy::Lfu(p) => p.contains(item),
            Policy::Random(p) => p.contains(item),
            Policy::NoCache(p) => p.contains(item),
        }
    }

    fn on_access(&mut self, item: ContentId) {
        match self {
            Policy::Lru(p) => p.on_access(item),
            Policy::Lfu(p) => p.on_access(item),
            Policy::Random(p) => p.on_access(item),
            Policy::NoCache(p) => p.on_access(item),
        }
    }

    fn eviction_candidate<R: Rng>(&self, rng: &mut R) -> Option<ContentId> {
        match self {
            Policy::Lru(p) => p.eviction_candidate(rng),
            Policy::Lfu(p) => p.eviction_candidate(rng),
            Policy::Random(p) => p.eviction_candidate(rng),
            Policy::NoCache(p) => p.eviction_candidate(rng),
        }
    }

    fn insert(&mut self, item: ContentId) {
        match self {
            Policy::Lru(p) => p.insert(item),
            Policy::Lfu(p) => p.insert(item),
            Policy::Random(p) => p.insert(item),
            Policy::NoCache(p) => p.insert(item),
        }
    }

    fn remove(&mut self, item: ContentId) -> bool {
        match self {
            Policy::Lru(p) => p.remove(item),
            Policy::Lfu(p) => p.remove(item),
            Policy::Random(p) => p.remove(item),
            Policy::NoCache(p) => p.remove(item),
        }
    }

    fn clear(&mut self) {
        match self {
            Policy::Lru(p) => p.clear(),
            Policy::Lfu(p) => p.clear(),
            Policy::Random(p) => p.clear(),
            Policy::NoCache(p) => p.clear(),
        }
    }

    fn admit<R: Rng>(&mut self, item: ContentId, rng: &mut R) -> Option<ContentId> {
        match self {
            Policy::Lru(p) => p.admit(item, rng),
            Policy::Lfu(p) => p.admit(item, rng),
            Policy::Random(p) => p.admit(item, rng),
            Policy::NoCache(p) => p.admit(item, rng),
        }
    }
}

/// Builder for edge caches.
#[derive(Debug, Clone, Copy)]
pub struct CacheBuilder {
    capacity: usize,
}

impl CacheBuilder {
    /// Create a new cache builder with the specified capacity.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Build an edge cache running `kind`.
    pub fn build(self, kind: PolicyKind) -> EdgeCache {
        EdgeCache::new(Policy::new(kind, self.capacity))
    }
}
