//! Streaming metrics for a single run.
//!
//! The latency model has exactly two values, so the sorted latency sequence
//! is fully described by the hit and miss counts: every hit latency followed
//! by every miss latency (or the reverse when the origin is the faster one).
//! Percentiles are read off that sequence with nearest-rank semantics:
//!
//! ```text
//!   rank  = ceil(p / 100 * count), clamped to [1, count]
//!   value = sorted[rank - 1]
//!
//!   count = 100, hits = 94, misses = 6
//!   sorted = [10 x 94, 100 x 6]
//!   p95: rank 95 ──► sorted[94] = 100
//! ```
//!
//! The rank is computed in integer arithmetic, so `p95` of 100 samples is
//! exactly rank 95 with no floating-point drift.

use crate::config::LatencyModel;
use crate::metrics::snapshot::RunReport;
use crate::traits::ContentId;

/// Outcome of one simulated request. Produced and consumed within a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequestRecord {
    pub content_id: ContentId,
    pub edge_index: usize,
    pub hit: bool,
    pub latency_ms: f64,
}

/// Accumulates hit/miss outcomes and derives the run's statistics.
///
/// # Example
///
/// ```
/// use cdnsim::config::LatencyModel;
/// use cdnsim::metrics::MetricsCollector;
///
/// let mut metrics = MetricsCollector::new(LatencyModel::default());
/// for _ in 0..19 {
///     metrics.record(true);
/// }
/// metrics.record(false);
///
/// let report = metrics.finalize();
/// assert_eq!(report.hit_ratio, 0.95);
/// assert_eq!(report.p95_latency_ms, 10.0);
/// assert_eq!(report.origin_fetches, 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsCollector {
    latency: LatencyModel,
    hits: u64,
    misses: u64,
    origin_fetches: u64,
}

impl MetricsCollector {
    /// Creates an empty collector charging latencies from `latency`.
    pub fn new(latency: LatencyModel) -> Self {
        Self {
            latency,
            hits: 0,
            misses: 0,
            origin_fetches: 0,
        }
    }

    /// Records one request outcome and returns the latency charged for it.
    ///
    /// A miss also counts as one origin fetch.
    #[inline]
    pub fn record(&mut self, hit: bool) -> f64 {
        if hit {
            self.hits += 1;
        } else {
            self.misses += 1;
            self.origin_fetches += 1;
        }
        self.latency.latency_for(hit)
    }

    /// Requests recorded so far.
    #[inline]
    pub fn requests(&self) -> u64 {
        self.hits + self.misses
    }

    /// Hits recorded so far.
    #[inline]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Misses recorded so far.
    #[inline]
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Origin fetches, one per miss.
    #[inline]
    pub fn origin_fetches(&self) -> u64 {
        self.origin_fetches
    }

    /// Fraction of requests served by an edge; 0 when nothing was recorded.
    pub fn hit_ratio(&self) -> f64 {
        let total = self.requests();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Mean latency over all recorded requests; 0 when nothing was recorded.
    pub fn average_latency_ms(&self) -> f64 {
        let total = self.requests();
        if total == 0 {
            return 0.0;
        }
        let sum = self.hits as f64 * self.latency.edge_hit_ms
            + self.misses as f64 * self.latency.origin_ms;
        sum / total as f64
    }

    /// Nearest-rank percentile of recorded latencies; 0 when nothing was recorded.
    ///
    /// `percent` above 100 is treated as 100.
    pub fn percentile(&self, percent: u32) -> f64 {
        let total = self.requests();
        if total == 0 {
            return 0.0;
        }
        let percent = u64::from(percent.min(100));
        let rank = (total * percent).div_ceil(100).clamp(1, total);

        let (low_value, low_count, high_value) =
            if self.latency.edge_hit_ms <= self.latency.origin_ms {
                (self.latency.edge_hit_ms, self.hits, self.latency.origin_ms)
            } else {
                (self.latency.origin_ms, self.misses, self.latency.edge_hit_ms)
            };

        if rank <= low_count { low_value } else { high_value }
    }

    /// Derives the final report. Per-edge counters are left empty.
    pub fn finalize(&self) -> RunReport {
        let total = self.requests();
        RunReport {
            requests: total,
            hits: self.hits,
            misses: self.misses,
            hit_ratio: self.hit_ratio(),
            miss_ratio: if total == 0 {
                0.0
            } else {
                self.misses as f64 / total as f64
            },
            average_latency_ms: self.average_latency_ms(),
            p95_latency_ms: self.percentile(95),
            origin_fetches: self.origin_fetches,
            edges: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collector_with(hits: u64, misses: u64) -> MetricsCollector {
        let mut metrics = MetricsCollector::new(LatencyModel::default());
        for _ in 0..hits {
            metrics.record(true);
        }
        for _ in 0..misses {
            metrics.record(false);
        }
        metrics
    }

    mod reports {
        use super::*;

        #[test]
        fn all_hits() {
            let report = collector_with(100, 0).finalize();
            assert_eq!(report.hit_ratio, 1.0);
            assert_eq!(report.average_latency_ms, 10.0);
            assert_eq!(report.p95_latency_ms, 10.0);
            assert_eq!(report.origin_fetches, 0);
        }

        #[test]
        fn all_misses() {
            let report = collector_with(0, 20).finalize();
            assert_eq!(report.origin_fetches, 20);
            assert_eq!(report.hit_ratio, 0.0);
            assert_eq!(report.miss_ratio, 1.0);
            assert_eq!(report.average_latency_ms, 100.0);
            assert_eq!(report.p95_latency_ms, 100.0);
        }

        #[test]
        fn empty_run_reports_zeros() {
            let report = collector_with(0, 0).finalize();
            assert_eq!(report.requests, 0);
            assert_eq!(report.hit_ratio, 0.0);
            assert_eq!(report.miss_ratio, 0.0);
            assert_eq!(report.average_latency_ms, 0.0);
            assert_eq!(report.p95_latency_ms, 0.0);
        }

        #[test]
        fn mixed_average() {
            let report = collector_with(3, 1).finalize();
            assert_eq!(report.hit_ratio, 0.75);
            assert_eq!(report.average_latency_ms, 32.5);
        }

        #[test]
        fn record_returns_charged_latency() {
            let mut metrics = MetricsCollector::new(LatencyModel::new(5.0, 80.0));
            assert_eq!(metrics.record(true), 5.0);
            assert_eq!(metrics.record(false), 80.0);
        }
    }

    mod percentiles {
        use super::*;

        #[test]
        fn p95_boundary_at_hundred_samples() {
            assert_eq!(collector_with(95, 5).percentile(95), 10.0);
            assert_eq!(collector_with(94, 6).percentile(95), 100.0);
        }

        #[test]
        fn rank_rounds_up() {
            // 21 samples: ceil(0.95 * 21) = 20, so the 20th value decides.
            assert_eq!(collector_with(20, 1).percentile(95), 10.0);
            assert_eq!(collector_with(19, 2).percentile(95), 100.0);
        }

        #[test]
        fn single_sample() {
            assert_eq!(collector_with(1, 0).percentile(95), 10.0);
            assert_eq!(collector_with(0, 1).percentile(1), 100.0);
        }

        #[test]
        fn extremes_clamp() {
            let metrics = collector_with(50, 50);
            assert_eq!(metrics.percentile(0), 10.0);
            assert_eq!(metrics.percentile(50), 10.0);
            assert_eq!(metrics.percentile(51), 100.0);
            assert_eq!(metrics.percentile(250), 100.0);
        }

        #[test]
        fn faster_origin_orders_misses_first() {
            let mut metrics = MetricsCollector::new(LatencyModel::new(50.0, 20.0));
            for _ in 0..10 {
                metrics.record(true);
            }
            metrics.record(false);
            assert_eq!(metrics.percentile(5), 20.0);
            assert_eq!(metrics.percentile(95), 50.0);
        }
    }
}
