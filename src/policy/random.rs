//! Random eviction.
//!
//! Victims are drawn uniformly from the resident set using the run's shared
//! generator. Hits carry no bookkeeping.
//!
//! ## Architecture
//!
//! ```text
//!   index: FxHashMap<ContentId, usize>       keys: Vec<ContentId>
//!   ┌──────────┬───────┐                     ┌─────┬─────┬─────┬─────┐
//!   │  id 12   │   0   │────────────────────►│ 12  │ 40  │  3  │ 77  │
//!   │  id 40   │   1   │                     └─────┴─────┴─────┴─────┘
//!   │  id  3   │   2   │
//!   │  id 77   │   3   │
//!   └──────────┴───────┘
//!
//!   evict: i = rng.random_range(0..len); swap keys[i] with last; pop;
//!          fix the moved key's index
//! ```
//!
//! ## Reproducibility
//!
//! The policy holds no generator of its own. Given the same seed and the same
//! request stream, the same victims are chosen.
//!
//! ## Example Usage
//!
//! ```
//! use cdnsim::policy::random::RandomPolicy;
//! use cdnsim::traits::EvictionPolicy;
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let mut rng = SmallRng::seed_from_u64(9);
//! let mut cache = RandomPolicy::new(10);
//! for id in 0..50 {
//!     cache.admit(id, &mut rng);
//! }
//! assert_eq!(cache.len(), 10);
//! ```

use rand::Rng;
use rustc_hash::FxHashMap;

use crate::traits::{ContentId, EvictionPolicy};

/// Uniform random eviction policy.
///
/// Uses a dense `Vec<ContentId>` for O(1) random access and swap-remove.
#[derive(Debug)]
pub struct RandomPolicy {
    capacity: usize,
    /// Maps item to its position in `keys`
    index: FxHashMap<ContentId, usize>,
    /// Dense array of resident items
    keys: Vec<ContentId>,
}

impl RandomPolicy {
    /// Creates an empty random-eviction policy holding at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            keys: Vec::with_capacity(capacity),
        }
    }

    #[cfg(debug_assertions)]
    fn validate_invariants(&self) {
        debug_assert_eq!(
            self.index.len(),
            self.keys.len(),
            "Map and keys vector have different sizes"
        );
        for (i, key) in self.keys.iter().enumerate() {
            debug_assert_eq!(
                self.index.get(key),
                Some(&i),
                "Vector position doesn't match map index"
            );
        }
    }
}

impl EvictionPolicy for RandomPolicy {
    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    fn contains(&self, item: ContentId) -> bool {
        self.index.contains_key(&item)
    }

    #[inline]
    fn on_access(&mut self, _item: ContentId) {}

    fn eviction_candidate<R: Rng>(&self, rng: &mut R) -> Option<ContentId> {
        if self.keys.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.keys.len());
        Some(self.keys[idx])
    }

    fn insert(&mut self, item: ContentId) {
        debug_assert!(!self.contains(item), "item already resident");
        self.index.insert(item, self.keys.len());
        self.keys.push(item);

        #[cfg(debug_assertions)]
        self.validate_invariants();
    }

    fn remove(&mut self, item: ContentId) -> bool {
        let Some(idx) = self.index.remove(&item) else {
            return false;
        };
        self.keys.swap_remove(idx);
        if let Some(&moved) = self.keys.get(idx) {
            self.index.insert(moved, idx);
        }

        #[cfg(debug_assertions)]
        self.validate_invariants();
        true
    }

    fn clear(&mut self) {
        self.index.clear();
        self.keys.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    // ==============================================
    // Basic Operations
    // ==============================================

    mod basic_operations {
        use super::*;

        #[test]
        fn new_policy_is_empty() {
            let cache = RandomPolicy::new(100);
            assert!(cache.is_empty());
            assert_eq!(cache.capacity(), 100);
        }

        #[test]
        fn access_does_not_change_contents() {
            let mut rng = SmallRng::seed_from_u64(1);
            let mut cache = RandomPolicy::new(4);
            cache.admit(1, &mut rng);
            cache.admit(2, &mut rng);
            cache.on_access(1);
            cache.on_access(99);
            assert_eq!(cache.keys, vec![1, 2]);
        }

        #[test]
        fn remove_fixes_moved_index() {
            let mut rng = SmallRng::seed_from_u64(1);
            let mut cache = RandomPolicy::new(4);
            for id in [1, 2, 3, 4] {
                cache.admit(id, &mut rng);
            }
            assert!(cache.remove(1));
            assert_eq!(cache.keys, vec![4, 2, 3]);
            assert_eq!(cache.index.get(&4), Some(&0));
            assert!(cache.remove(3));
            assert!(!cache.remove(3));
            assert_eq!(cache.len(), 2);
        }
    }

    // ==============================================
    // Random Eviction Behavior
    // ==============================================

    mod eviction_behavior {
        use super::*;

        fn eviction_trace(seed: u64) -> Vec<ContentId> {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut cache = RandomPolicy::new(8);
            (0..500)
                .filter_map(|id| cache.admit(id, &mut rng))
                .collect()
        }

        #[test]
        fn capacity_is_maintained() {
            let mut rng = SmallRng::seed_from_u64(5);
            let mut cache = RandomPolicy::new(3);
            for id in 0..100 {
                cache.admit(id, &mut rng);
                assert!(cache.len() <= 3);
            }
            assert_eq!(cache.len(), 3);
        }

        #[test]
        fn same_seed_same_victims() {
            assert_eq!(eviction_trace(1234), eviction_trace(1234));
        }

        #[test]
        fn victims_are_resident_items() {
            let mut rng = SmallRng::seed_from_u64(77);
            let mut cache = RandomPolicy::new(5);
            for id in 0..5 {
                cache.admit(id, &mut rng);
            }
            for _ in 0..50 {
                let victim = cache.eviction_candidate(&mut rng);
                assert!(victim.is_some_and(|v| cache.contains(v)));
            }
        }

        #[test]
        fn every_slot_can_be_chosen() {
            let mut rng = SmallRng::seed_from_u64(11);
            let mut cache = RandomPolicy::new(4);
            for id in 0..4 {
                cache.admit(id, &mut rng);
            }
            let mut seen = [false; 4];
            for _ in 0..1000 {
                if let Some(victim) = cache.eviction_candidate(&mut rng) {
                    seen[victim as usize] = true;
                }
            }
            assert!(seen.iter().all(|&s| s));
        }
    }
}
