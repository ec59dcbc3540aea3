//! Zipf popularity model and inverse-transform sampling.
//!
//! Content ranks run from 1 to N with weight `w(i) = 1 / i^alpha`. The sampler
//! precomputes the cumulative distribution over ranks once and then maps a
//! uniform draw `u` in `[0, 1)` to the smallest rank whose cumulative
//! probability is at least `u` (binary search). Rank `i` is reported as
//! content ID `i - 1`, so ID 0 is the most popular item.
//!
//! ```text
//!   probs  = [0.50, 0.25, 0.15, 0.10]
//!   cdf    = [0.50, 0.75, 0.90, 1.00]
//!
//!   u = 0.62  ──►  first cdf >= u is index 1  ──►  content ID 1
//! ```
//!
//! `alpha = 0` gives every item weight 1, i.e. a uniform distribution.

use rand::Rng;

use crate::error::ConfigError;
use crate::traits::ContentId;

/// Immutable Zipf(alpha) distribution over `n` items with a sampler.
///
/// # Example
///
/// ```
/// use cdnsim::popularity::PopularitySampler;
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
///
/// let sampler = PopularitySampler::new(1000, 1.0).unwrap();
/// let mut rng = SmallRng::seed_from_u64(42);
///
/// let id = sampler.sample(&mut rng);
/// assert!(id < 1000);
/// assert!(sampler.probability(0) > sampler.probability(1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PopularitySampler {
    alpha: f64,
    cdf: Vec<f64>,
}

impl PopularitySampler {
    /// Builds the distribution for `n_contents` items with skew `alpha`.
    ///
    /// Fails if `n_contents` is zero or `alpha` is negative or not finite.
    pub fn new(n_contents: usize, alpha: f64) -> Result<Self, ConfigError> {
        if n_contents == 0 {
            return Err(ConfigError::new("n_contents must be >= 1"));
        }
        if !alpha.is_finite() || alpha < 0.0 {
            return Err(ConfigError::new(format!(
                "alpha must be a finite value >= 0, got {}",
                alpha
            )));
        }

        let weights: Vec<f64> = (1..=n_contents)
            .map(|rank| (rank as f64).powf(-alpha))
            .collect();
        let total: f64 = weights.iter().sum();

        let mut cumulative = 0.0;
        let mut cdf: Vec<f64> = weights
            .iter()
            .map(|w| {
                cumulative += w / total;
                cumulative.min(1.0)
            })
            .collect();
        // Rounding can leave the last entry a hair off 1; entries are capped
        // above so pinning it keeps the sequence non-decreasing.
        if let Some(last) = cdf.last_mut() {
            *last = 1.0;
        }

        Ok(Self { alpha, cdf })
    }

    /// Draws one content ID.
    #[inline]
    pub fn sample<R: Rng>(&self, rng: &mut R) -> ContentId {
        self.sample_at(rng.random::<f64>())
    }

    /// Maps a uniform value `u` in `[0, 1)` to a content ID.
    pub fn sample_at(&self, u: f64) -> ContentId {
        let idx = self.cdf.partition_point(|&c| c < u);
        idx.min(self.cdf.len() - 1) as ContentId
    }

    /// Probability mass of content `id`; 0 outside `[0, n)`.
    pub fn probability(&self, id: ContentId) -> f64 {
        let Ok(idx) = usize::try_from(id) else {
            return 0.0;
        };
        match idx {
            0 => self.cdf[0],
            i if i < self.cdf.len() => self.cdf[i] - self.cdf[i - 1],
            _ => 0.0,
        }
    }

    /// Cumulative probabilities by content ID.
    #[inline]
    pub fn cdf(&self) -> &[f64] {
        &self.cdf
    }

    /// Number of content items.
    #[inline]
    pub fn len(&self) -> usize {
        self.cdf.len()
    }

    /// Always `false`: a sampler holds at least one item.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cdf.is_empty()
    }

    /// Skew exponent the distribution was built with.
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: the CDF is non-decreasing and ends at 1
        #[test]
        fn prop_cdf_monotone_and_normalized(n in 1usize..2_000, alpha in 0.0f64..64.0) {
            let sampler = PopularitySampler::new(n, alpha).unwrap();
            let cdf = sampler.cdf();
            prop_assert_eq!(cdf.len(), n);
            for pair in cdf.windows(2) {
                prop_assert!(pair[0] <= pair[1]);
            }
            prop_assert!((cdf[n - 1] - 1.0).abs() < 1e-9);
            for id in 0..n as ContentId {
                prop_assert!(sampler.probability(id) >= 0.0);
            }
        }

        /// Property: probabilities are non-increasing in content ID
        #[test]
        fn prop_popularity_decreases_with_rank(n in 2usize..500, alpha in 0.0f64..64.0) {
            let sampler = PopularitySampler::new(n, alpha).unwrap();
            for id in 1..n as ContentId {
                prop_assert!(sampler.probability(id) <= sampler.probability(id - 1) + 1e-12);
            }
        }

        /// Property: every draw is a valid content ID
        #[test]
        fn prop_sample_in_range(n in 1usize..1_000, alpha in 0.0f64..3.0, u in 0.0f64..1.0) {
            let sampler = PopularitySampler::new(n, alpha).unwrap();
            prop_assert!((sampler.sample_at(u) as usize) < n);
        }
    }
}
