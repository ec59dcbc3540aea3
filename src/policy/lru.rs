//! Least Recently Used eviction.
//!
//! Keeps resident content IDs in a doubly linked recency list stored in a slot
//! vector, with an index map for O(1) lookup. The head of the list is the most
//! recently used item; the tail is the eviction victim.
//!
//! ## Architecture
//!
//! ```text
//!   index: FxHashMap<ContentId, slot>
//!
//!   slots: Vec<Node>              free: Vec<slot>
//!   ┌──────┬──────┬──────┬──────┐
//!   │ id 7 │ id 3 │ id 9 │ (free)│
//!   └──────┴──────┴──────┴──────┘
//!
//!   head (MRU) ──► [7] ◄──► [9] ◄──► [3] ◄── tail (LRU, next victim)
//! ```
//!
//! ## Operations
//!
//! | Operation            | Time | Notes                              |
//! |----------------------|------|------------------------------------|
//! | `on_access`          | O(1) | Detach and push to head            |
//! | `insert`             | O(1) | Push to head, reuse a free slot    |
//! | `eviction_candidate` | O(1) | Tail of the list                   |
//! | `remove`             | O(1) | Detach, slot returned to free list |
//! | `recency_order`      | O(n) | Walks head to tail                 |
//!
//! ## Example Usage
//!
//! ```
//! use cdnsim::policy::lru::LruPolicy;
//! use cdnsim::traits::EvictionPolicy;
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let mut rng = SmallRng::seed_from_u64(1);
//! let mut lru = LruPolicy::new(3);
//! for id in [10, 20, 30] {
//!     lru.admit(id, &mut rng);
//! }
//! lru.on_access(10);
//!
//! assert_eq!(lru.recency_order(), vec![10, 30, 20]);
//! assert_eq!(lru.eviction_candidate(&mut rng), Some(20));
//! ```

use rand::Rng;
use rustc_hash::FxHashMap;

use crate::traits::{ContentId, EvictionPolicy};

#[derive(Debug, Clone, Copy)]
struct Node {
    item: ContentId,
    prev: Option<usize>,
    next: Option<usize>,
}

/// LRU eviction policy.
///
/// Hits move the item to the most-recently-used end; eviction removes the
/// least-recently-used end.
#[derive(Debug)]
pub struct LruPolicy {
    capacity: usize,
    slots: Vec<Node>,
    free_list: Vec<usize>,
    index: FxHashMap<ContentId, usize>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl LruPolicy {
    /// Creates an empty LRU policy holding at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            head: None,
            tail: None,
        }
    }

    /// Resident items ordered from most to least recently used.
    pub fn recency_order(&self) -> Vec<ContentId> {
        let mut order = Vec::with_capacity(self.index.len());
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            order.push(self.slots[idx].item);
            cursor = self.slots[idx].next;
        }
        order
    }

    fn allocate_slot(&mut self, item: ContentId) -> usize {
        let node = Node {
            item,
            prev: None,
            next: None,
        };
        if let Some(idx) = self.free_list.pop() {
            self.slots[idx] = node;
            idx
        } else {
            self.slots.push(node);
            self.slots.len() - 1
        }
    }

    fn detach(&mut self, idx: usize) {
        let Node { prev, next, .. } = self.slots[idx];
        match prev {
            Some(prev_idx) => self.slots[prev_idx].next = next,
            None => self.head = next,
        }
        match next {
            Some(next_idx) => self.slots[next_idx].prev = prev,
            None => self.tail = prev,
        }
        self.slots[idx].prev = None;
        self.slots[idx].next = None;
    }

    fn push_front(&mut self, idx: usize) {
        let old_head = self.head;
        self.slots[idx].prev = None;
        self.slots[idx].next = old_head;
        match old_head {
            Some(head_idx) => self.slots[head_idx].prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
    }

    #[cfg(debug_assertions)]
    fn validate_invariants(&self) {
        debug_assert!(self.index.len() <= self.capacity, "LRU over capacity");
        debug_assert_eq!(
            self.recency_order().len(),
            self.index.len(),
            "recency list and index disagree"
        );
    }
}

impl EvictionPolicy for LruPolicy {
    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    fn contains(&self, item: ContentId) -> bool {
        self.index.contains_key(&item)
    }

    fn on_access(&mut self, item: ContentId) {
        let Some(&idx) = self.index.get(&item) else {
            return;
        };
        if self.head == Some(idx) {
            return;
        }
        self.detach(idx);
        self.push_front(idx);
    }

    #[inline]
    fn eviction_candidate<R: Rng>(&self, _rng: &mut R) -> Option<ContentId> {
        self.tail.map(|idx| self.slots[idx].item)
    }

    fn insert(&mut self, item: ContentId) {
        debug_assert!(!self.contains(item), "item already resident");
        let idx = self.allocate_slot(item);
        self.push_front(idx);
        self.index.insert(item, idx);

        #[cfg(debug_assertions)]
        self.validate_invariants();
    }

    fn remove(&mut self, item: ContentId) -> bool {
        let Some(idx) = self.index.remove(&item) else {
            return false;
        };
        self.detach(idx);
        self.free_list.push(idx);
        true
    }

    fn clear(&mut self) {
        self.slots.clear();
        self.free_list.clear();
        self.index.clear();
        self.head = None;
        self.tail = None;
    }
}
