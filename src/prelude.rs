pub use crate::builder::{CacheBuilder, Policy, PolicyKind};
pub use crate::config::{LatencyModel, SimulationConfig};
pub use crate::edge::EdgeCache;
pub use crate::error::{ConfigError, SimError};
pub use crate::metrics::{EdgeStats, MetricsCollector, RequestRecord, RunReport};
pub use crate::origin::OriginServer;
pub use crate::popularity::PopularitySampler;
pub use crate::router::{RequestRouter, RoutingStrategy};
pub use crate::simulation::{Simulation, create_simulation};
pub use crate::traits::{ContentId, EvictionPolicy};
