/// Counters for one edge cache.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeStats {
    pub requests: u64,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,

    // gauge captured at snapshot time
    pub resident: usize,
}

impl EdgeStats {
    /// Fraction of this edge's requests that hit; 0 when idle.
    pub fn hit_ratio(&self) -> f64 {
        if self.requests == 0 {
            0.0
        } else {
            self.hits as f64 / self.requests as f64
        }
    }
}

/// Final result of one simulation run.
///
/// With the default latency model `average_latency_ms` lies in `[10, 100]`
/// and `p95_latency_ms` is either 10 or 100. An empty run reports zeros.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunReport {
    pub requests: u64,
    pub hits: u64,
    pub misses: u64,

    pub hit_ratio: f64,
    pub miss_ratio: f64,
    pub average_latency_ms: f64,
    pub p95_latency_ms: f64,
    pub origin_fetches: u64,

    /// Per-edge counters, indexed by edge.
    pub edges: Vec<EdgeStats>,
}
