//! Hit ratio and latency across popularity skew for every policy.
//!
//! Run with: `RUST_LOG=cdnsim=debug cargo run --example zipf_sweep`

use cdnsim::builder::PolicyKind;
use cdnsim::config::SimulationConfig;
use cdnsim::{SimError, Simulation};
use tracing_subscriber::EnvFilter;

const ALPHAS: [f64; 4] = [0.6, 0.8, 1.0, 1.2];
const REQUESTS: i64 = 200_000;

fn main() -> Result<(), SimError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!(
        "{:>5} {:>8} {:>9} {:>12} {:>11} {:>12}",
        "alpha", "policy", "hit_ratio", "avg_latency", "p95_latency", "origin_load"
    );

    for alpha in ALPHAS {
        for policy in PolicyKind::ALL {
            let config = SimulationConfig::default()
                .with_alpha(alpha)
                .with_policy(policy);
            let report = Simulation::new(config)?.run(REQUESTS)?;
            println!(
                "{:>5.1} {:>8} {:>9.4} {:>12.2} {:>11.1} {:>12}",
                alpha,
                policy,
                report.hit_ratio,
                report.average_latency_ms,
                report.p95_latency_ms,
                report.origin_fetches
            );
        }
    }

    Ok(())
}
