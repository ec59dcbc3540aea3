// Persisting configurations and reports for sweep drivers.
#![cfg(feature = "serde")]

use cdnsim::builder::PolicyKind;
use cdnsim::config::SimulationConfig;
use cdnsim::router::RoutingStrategy;
use cdnsim::{RunReport, Simulation};

#[test]
fn report_survives_json() {
    let sim = Simulation::new(SimulationConfig::default()).unwrap();
    let report = sim.run(2_000).unwrap();

    let json = serde_json::to_string(&report).unwrap();
    let back: RunReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn config_reads_partial_json_with_defaults() {
    let json = r#"{ "alpha": 0.6, "policy": "LFU", "routing": { "ContentHash": { "seed": 3 } } }"#;
    let config: SimulationConfig = serde_json::from_str(json).unwrap();

    assert_eq!(config.alpha, 0.6);
    assert_eq!(config.policy, PolicyKind::Lfu);
    assert_eq!(config.routing, RoutingStrategy::ContentHash { seed: 3 });
    assert_eq!(config.n_contents, 1000);
    assert!(config.validate().is_ok());
}
