//! # LFU (Least Frequently Used) Eviction
//!
//! Evicts the resident item with the lowest access count. Ties are broken by
//! admission order: among equally cold items the one admitted earliest goes
//! first, so eviction is fully deterministic.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                            LfuPolicy                                 │
//!   │                                                                      │
//!   │   entries: FxHashMap<ContentId, Entry { freq, admitted }>            │
//!   │                                                                      │
//!   │   order: BTreeSet<(freq, admitted, ContentId)>   (ascending)         │
//!   │                                                                      │
//!   │     (1, 4, id 12)  ◄── first: eviction victim                        │
//!   │     (1, 7, id 40)                                                    │
//!   │     (3, 2, id  0)                                                    │
//!   │     (9, 1, id  1)                                                    │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `admitted` is a per-policy counter stamped at admission and never reused,
//! so every key in `order` is unique and the minimum is unambiguous.
//!
//! ## Frequency Rules
//!
//! - Admission counts as the first access: a new item starts at 1.
//! - Each hit adds 1.
//! - Eviction forgets the count; a re-admitted item starts again at 1.
//!
//! ## Example Usage
//!
//! ```
//! use cdnsim::policy::lfu::LfuPolicy;
//! use cdnsim::traits::EvictionPolicy;
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let mut rng = SmallRng::seed_from_u64(3);
//! let mut lfu = LfuPolicy::new(2);
//! lfu.admit(1, &mut rng);
//! lfu.admit(2, &mut rng);
//! lfu.on_access(1);
//! lfu.on_access(1);
//!
//! assert_eq!(lfu.frequency(1), Some(3));
//! assert_eq!(lfu.admit(3, &mut rng), Some(2));
//! ```

use std::collections::BTreeSet;

use rand::Rng;
use rustc_hash::FxHashMap;

use crate::traits::{ContentId, EvictionPolicy};

#[derive(Debug, Clone, Copy)]
struct Entry {
    freq: u64,
    admitted: u64,
}

/// LFU eviction policy with oldest-admission tie-breaking.
#[derive(Debug)]
pub struct LfuPolicy {
    capacity: usize,
    entries: FxHashMap<ContentId, Entry>,
    order: BTreeSet<(u64, u64, ContentId)>,
    next_admission: u64,
}

impl LfuPolicy {
    /// Creates an empty LFU policy holding at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            order: BTreeSet::new(),
            next_admission: 0,
        }
    }

    /// Access count of a resident item.
    pub fn frequency(&self, item: ContentId) -> Option<u64> {
        self.entries.get(&item).map(|entry| entry.freq)
    }

    #[cfg(debug_assertions)]
    fn validate_invariants(&self) {
        debug_assert!(self.entries.len() <= self.capacity, "LFU over capacity");
        debug_assert_eq!(
            self.entries.len(),
            self.order.len(),
            "frequency index and order disagree"
        );
    }
}

impl EvictionPolicy for LfuPolicy {
    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    fn contains(&self, item: ContentId) -> bool {
        self.entries.contains_key(&item)
    }

    fn on_access(&mut self, item: ContentId) {
        let Some(entry) = self.entries.get_mut(&item) else {
            return;
        };
        self.order.remove(&(entry.freq, entry.admitted, item));
        entry.freq = entry.freq.saturating_add(1);
        self.order.insert((entry.freq, entry.admitted, item));
    }

    #[inline]
    fn eviction_candidate<R: Rng>(&self, _rng: &mut R) -> Option<ContentId> {
        self.order.first().map(|&(_, _, item)| item)
    }

    fn insert(&mut self, item: ContentId) {
        debug_assert!(!self.contains(item), "item already resident");
        let entry = Entry {
            freq: 1,
            admitted: self.next_admission,
        };
        self.next_admission += 1;
        self.order.insert((entry.freq, entry.admitted, item));
        self.entries.insert(item, entry);

        #[cfg(debug_assertions)]
        self.validate_invariants();
    }

    fn remove(&mut self, item: ContentId) -> bool {
        match self.entries.remove(&item) {
            Some(entry) => {
                self.order.remove(&(entry.freq, entry.admitted, item));
                true
            },
            None => false,
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}
