//! # Eviction Policy Trait
//!
//! Defines the contract every edge-cache eviction policy implements. A policy
//! owns both the set of resident content IDs and whatever bookkeeping it needs
//! to pick a victim (recency order, frequency counters, nothing at all).
//!
//! ## Architecture
//!
//! ```text
//!                     ┌──────────────────────────────────────────────┐
//!                     │               EvictionPolicy                 │
//!                     │                                              │
//!                     │  capacity(&) → usize                         │
//!                     │  len(&) → usize                              │
//!                     │  contains(&, ContentId) → bool               │
//!                     │  on_access(&mut, ContentId)         (hits)   │
//!                     │  eviction_candidate(&, rng) → Option<Id>     │
//!                     │  insert(&mut, ContentId)                     │
//!                     │  remove(&mut, ContentId) → bool              │
//!                     │  admit(&mut, ContentId, rng) → Option<Id>    │
//!                     │  clear(&mut)                                 │
//!                     └──────────────────────┬───────────────────────┘
//!                                            │
//!        ┌──────────────────┬────────────────┼────────────────┬──────────────────┐
//!        ▼                  ▼                ▼                ▼                  ▼
//!   ┌───────────┐     ┌───────────┐    ┌────────────┐   ┌─────────────┐   ┌─────────────┐
//!   │ LruPolicy │     │ LfuPolicy │    │RandomPolicy│   │NoCachePolicy│   │   Policy    │
//!   │ recency   │     │ freq +    │    │ dense keys │   │ retains     │   │ enum over   │
//!   │ list      │     │ admit seq │    │ + rng      │   │ nothing     │   │ the four    │
//!   └───────────┘     └───────────┘    └────────────┘   └─────────────┘   └─────────────┘
//! ```
//!
//! ## Admission
//!
//! [`EvictionPolicy::admit`] is provided. It is only called on a miss and
//! keeps the capacity invariant in one place:
//!
//! ```text
//!   admit(item)
//!     capacity == 0 or already resident ──► no change
//!     len >= capacity ──► victim = eviction_candidate(rng); remove(victim)
//!     insert(item)
//! ```
//!
//! Exactly one item is evicted per admission into a full cache, so
//! `len() <= capacity()` holds after every operation.
//!
//! ## Randomness
//!
//! Methods that may draw random numbers take the run's generator explicitly.
//! Policies never hold their own generator; the same seeded stream drives
//! sampling, routing and random eviction so that a run is reproducible.

use rand::Rng;

/// Identifier of a content item, in `[0, n_contents)`.
///
/// Item 0 is the most popular under the Zipf model.
pub type ContentId = u64;

/// Eviction strategy governing an edge cache's resident set.
///
/// # Example
///
/// ```
/// use cdnsim::policy::lru::LruPolicy;
/// use cdnsim::traits::EvictionPolicy;
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let mut lru = LruPolicy::new(2);
///
/// assert_eq!(lru.admit(1, &mut rng), None);
/// assert_eq!(lru.admit(2, &mut rng), None);
/// lru.on_access(1);
///
/// // 2 is now the least recently used entry.
/// assert_eq!(lru.admit(3, &mut rng), Some(2));
/// assert_eq!(lru.len(), 2);
/// ```
pub trait EvictionPolicy {
    /// Maximum number of resident items.
    fn capacity(&self) -> usize;

    /// Number of resident items.
    fn len(&self) -> usize;

    /// Returns `true` if nothing is resident.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `item` is resident.
    fn contains(&self, item: ContentId) -> bool;

    /// Updates recency/frequency bookkeeping for a resident `item`.
    ///
    /// Called on a cache hit. A non-resident item is ignored.
    fn on_access(&mut self, item: ContentId);

    /// Returns the item the policy would evict next, or `None` if empty.
    ///
    /// Deterministic policies ignore `rng`; random eviction draws from it.
    fn eviction_candidate<R: Rng>(&self, rng: &mut R) -> Option<ContentId>;

    /// Inserts a new `item`.
    ///
    /// Callers guarantee that `item` is not resident and that there is room.
    fn insert(&mut self, item: ContentId);

    /// Removes `item` and its bookkeeping. Returns `true` if it was resident.
    fn remove(&mut self, item: ContentId) -> bool;

    /// Drops all resident items and bookkeeping.
    fn clear(&mut self);

    /// Admits `item` after a miss, evicting one victim first if full.
    ///
    /// Returns the evicted item, if any.
    fn admit<R: Rng>(&mut self, item: ContentId, rng: &mut R) -> Option<ContentId> {
        if self.capacity() == 0 || self.contains(item) {
            return None;
        }

        let victim = if self.len() >= self.capacity() {
            let victim = self.eviction_candidate(rng);
            if let Some(victim) = victim {
                self.remove(victim);
            }
            victim
        } else {
            None
        };

        self.insert(item);
        victim
    }
}
