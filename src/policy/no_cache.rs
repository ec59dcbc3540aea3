//! Pass-through policy that never retains anything.
//!
//! Every lookup against an edge running this policy is a miss and goes to
//! the origin. Used as the baseline in sweeps and for any capacity-0 edge.

use rand::Rng;

use crate::traits::{ContentId, EvictionPolicy};

/// Policy with an empty resident set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoCachePolicy;

impl NoCachePolicy {
    /// Creates the pass-through policy.
    pub fn new() -> Self {
        Self
    }
}

impl EvictionPolicy for NoCachePolicy {
    #[inline]
    fn capacity(&self) -> usize {
        0
    }

    #[inline]
    fn len(&self) -> usize {
        0
    }

    #[inline]
    fn contains(&self, _item: ContentId) -> bool {
        false
    }

    #[inline]
    fn on_access(&mut self, _item: ContentId) {}

    #[inline]
    fn eviction_candidate<R: Rng>(&self, _rng: &mut R) -> Option<ContentId> {
        None
    }

    #[inline]
    fn insert(&mut self, _item: ContentId) {}

    #[inline]
    fn remove(&mut self, _item: ContentId) -> bool {
        false
    }

    #[inline]
    fn clear(&mut self) {}

    #[inline]
    fn admit<R: Rng>(&mut self, _item: ContentId, _rng: &mut R) -> Option<ContentId> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn admit_retains_nothing() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut policy = NoCachePolicy::new();
        for id in 0..10 {
            assert_eq!(policy.admit(id, &mut rng), None);
            assert!(!policy.contains(id));
        }
        assert!(policy.is_empty());
        assert_eq!(policy.capacity(), 0);
    }
}
