//! Simulation runner.
//!
//! ## Request Loop
//!
//! ```text
//!   ┌───────────────┐   id    ┌───────────────┐  edge   ┌───────────────┐
//!   │  Popularity   │────────►│    Request    │────────►│  EdgeCache[k] │
//!   │   Sampler     │         │    Router     │         │   lookup(id)  │
//!   └───────────────┘         └───────────────┘         └───────┬───────┘
//!           ▲                         ▲                  hit    │   miss
//!           │                         │                  ▼      ▼
//!           │     one SmallRng        │           edge latency  OriginServer
//!           └──── seeded per run ─────┘                  │      │ fetch
//!                                                        ▼      ▼
//!                                                  ┌─────────────────────┐
//!                                                  │  MetricsCollector   │
//!                                                  │  record(hit)        │
//!                                                  └─────────────────────┘
//! ```
//!
//! Every call to [`Simulation::run`] rebuilds the generator from the
//! configured seed and starts with empty caches, a fresh origin and a fresh
//! collector. A run's report is therefore a function of the configuration
//! and the request count alone.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::debug;

use crate::builder::{CacheBuilder, PolicyKind};
use crate::config::SimulationConfig;
use crate::edge::EdgeCache;
use crate::error::{ConfigError, SimError};
use crate::metrics::{MetricsCollector, RequestRecord, RunReport};
use crate::origin::OriginServer;
use crate::popularity::PopularitySampler;
use crate::router::RequestRouter;

/// A validated, reusable simulation.
///
/// # Example
///
/// ```
/// use cdnsim::config::SimulationConfig;
/// use cdnsim::simulation::Simulation;
///
/// let sim = Simulation::new(SimulationConfig::default()).unwrap();
/// let report = sim.run(10_000).unwrap();
///
/// assert_eq!(report.requests, 10_000);
/// assert_eq!(report.edges.len(), 4);
/// assert!(report.hit_ratio > 0.0 && report.hit_ratio < 1.0);
/// assert_eq!(report, sim.run(10_000).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    sampler: PopularitySampler,
    router: RequestRouter,
}

impl Simulation {
    /// Validates `config` and precomputes the popularity distribution.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let sampler = PopularitySampler::new(config.n_contents, config.alpha)?;
        let router = RequestRouter::new(config.edges, config.routing)?;
        Ok(Self {
            config,
            sampler,
            router,
        })
    }

    /// Validated configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Precomputed popularity distribution.
    #[inline]
    pub fn sampler(&self) -> &PopularitySampler {
        &self.sampler
    }

    /// Runs `num_requests` requests and returns the finalized report.
    ///
    /// Fails with [`SimError::InvalidRequestCount`] if `num_requests` is
    /// negative; nothing is sampled in that case.
    pub fn run(&self, num_requests: i64) -> Result<RunReport, SimError> {
        self.run_with(num_requests, |_| {})
    }

    /// Like [`run`](Self::run), handing every request record to `observer`.
    pub fn run_with<F>(&self, num_requests: i64, mut observer: F) -> Result<RunReport, SimError>
    where
        F: FnMut(&RequestRecord),
    {
        let total =
            u64::try_from(num_requests).map_err(|_| SimError::InvalidRequestCount(num_requests))?;

        let config = &self.config;
        debug!(
            requests = total,
            n_contents = config.n_contents,
            alpha = config.alpha,
            edges = config.edges,
            capacity = config.capacity,
            policy = %config.policy,
            seed = config.seed,
            "simulation run starting"
        );

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let builder = CacheBuilder::new(config.capacity);
        let mut edges: Vec<EdgeCache> = (0..config.edges)
            .map(|_| builder.build(config.policy))
            .collect();
        let mut origin = OriginServer::new(config.latency.origin_ms);
        let mut metrics = MetricsCollector::new(config.latency);

        for _ in 0..total {
            let content_id = self.sampler.sample(&mut rng);
            let edge_index = self.router.route(content_id, &mut rng);
            let hit = edges[edge_index].lookup(content_id, &mut rng);
            let latency_ms = if hit {
                config.latency.edge_hit_ms
            } else {
                origin.fetch(content_id)
            };
            metrics.record(hit);
            observer(&RequestRecord {
                content_id,
                edge_index,
                hit,
                latency_ms,
            });
        }

        debug_assert_eq!(origin.fetches(), metrics.origin_fetches());

        let mut report = metrics.finalize();
        report.edges = edges.iter().map(EdgeCache::stats).collect();

        debug!(
            hit_ratio = report.hit_ratio,
            average_latency_ms = report.average_latency_ms,
            p95_latency_ms = report.p95_latency_ms,
            origin_fetches = report.origin_fetches,
            "simulation run finished"
        );
        Ok(report)
    }
}

/// Builds a simulation from raw driver parameters.
///
/// Counts are signed so that negative driver input is reported rather than
/// being unrepresentable. Fails with a [`ConfigError`] if `n_contents < 1`,
/// `edges < 1`, `capacity < 0`, `alpha < 0` or `policy` is not a known name.
///
/// # Example
///
/// ```
/// use cdnsim::create_simulation;
///
/// let sim = create_simulation(100, 1.0, 1, 10, "LRU", 42).unwrap();
/// let report = sim.run(1_000).unwrap();
/// assert!(report.average_latency_ms >= 10.0);
///
/// assert!(create_simulation(100, 1.0, 1, -1, "LRU", 42).is_err());
/// assert!(create_simulation(100, 1.0, 1, 10, "MRU", 42).is_err());
/// ```
pub fn create_simulation(
    n_contents: i64,
    alpha: f64,
    edges: i64,
    capacity: i64,
    policy: &str,
    seed: u64,
) -> Result<Simulation, ConfigError> {
    let n_contents = positive_count("n_contents", n_contents)?;
    let edges = positive_count("edges", edges)?;
    let capacity = usize::try_from(capacity)
        .map_err(|_| ConfigError::new(format!("capacity must be >= 0, got {}", capacity)))?;
    let policy: PolicyKind = policy.parse()?;

    Simulation::new(
        SimulationConfig::default()
            .with_contents(n_contents)
            .with_alpha(alpha)
            .with_edges(edges)
            .with_capacity(capacity)
            .with_policy(policy)
            .with_seed(seed),
    )
}

fn positive_count(name: &str, value: i64) -> Result<usize, ConfigError> {
    match usize::try_from(value) {
        Ok(count) if count >= 1 => Ok(count),
        _ => Err(ConfigError::new(format!(
            "{} must be >= 1, got {}",
            name, value
        ))),
    }
}
