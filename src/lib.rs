//! cdnsim: a content delivery network cache simulator.
//!
//! Models a bank of independent edge caches in front of an origin. Requests
//! follow a Zipf popularity law, are routed to one edge each, and are served
//! from the edge on a hit or from the origin on a miss. A run reports hit
//! ratio, mean and p95 latency, and origin load.
//!
//! ## Example
//!
//! ```
//! use cdnsim::create_simulation;
//!
//! let skewed = create_simulation(100, 1.0, 1, 10, "LRU", 42).unwrap();
//! let flat = create_simulation(100, 0.0, 1, 10, "LRU", 42).unwrap();
//!
//! let skewed = skewed.run(1_000).unwrap();
//! let flat = flat.run(1_000).unwrap();
//! assert!(skewed.hit_ratio > flat.hit_ratio);
//! ```

pub mod builder;
pub mod config;
pub mod edge;
pub mod error;
pub mod metrics;
pub mod origin;
pub mod policy;
pub mod popularity;
pub mod prelude;
pub mod router;
pub mod simulation;
pub mod traits;

pub use crate::builder::PolicyKind;
pub use crate::config::{LatencyModel, SimulationConfig};
pub use crate::error::{ConfigError, SimError};
pub use crate::metrics::RunReport;
pub use crate::simulation::{Simulation, create_simulation};
