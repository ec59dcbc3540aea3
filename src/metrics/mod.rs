//! Per-run measurement.
//!
//! - [`collector::MetricsCollector`]: accumulates request outcomes for one run
//!   and derives hit ratio, mean latency, and nearest-rank percentiles.
//! - [`snapshot::RunReport`]: the finalized result handed to the driver.
//! - [`snapshot::EdgeStats`]: per-edge counters captured at run end.

pub mod collector;
pub mod snapshot;

pub use collector::{MetricsCollector, RequestRecord};
pub use snapshot::{EdgeStats, RunReport};
