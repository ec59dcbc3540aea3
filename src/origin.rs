//! Origin server: the fallback behind every edge.
//!
//! The origin holds every item, so a fetch always succeeds and costs the
//! origin latency constant.

use crate::traits::ContentId;

/// Logical origin that counts the fetches it serves.
#[derive(Debug, Clone, PartialEq)]
pub struct OriginServer {
    latency_ms: f64,
    fetches: u64,
}

impl OriginServer {
    /// Creates an origin charging `latency_ms` per fetch.
    pub fn new(latency_ms: f64) -> Self {
        Self {
            latency_ms,
            fetches: 0,
        }
    }

    /// Serves `item` and returns the latency charged for it.
    #[inline]
    pub fn fetch(&mut self, _item: ContentId) -> f64 {
        self.fetches += 1;
        self.latency_ms
    }

    /// Number of fetches served so far.
    #[inline]
    pub fn fetches(&self) -> u64 {
        self.fetches
    }

    /// Latency charged for every fetch.
    #[inline]
    pub fn latency_ms(&self) -> f64 {
        self.latency_ms
    }
}
