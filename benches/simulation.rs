use cdnsim::builder::{CacheBuilder, PolicyKind};
use cdnsim::config::SimulationConfig;
use cdnsim::popularity::PopularitySampler;
use cdnsim::simulation::Simulation;
use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;

const REQUESTS: i64 = 100_000;

fn bench_run_per_policy(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation_run");
    group.throughput(Throughput::Elements(REQUESTS as u64));
    for policy in PolicyKind::ALL {
        let sim = Simulation::new(SimulationConfig::default().with_policy(policy)).unwrap();
        group.bench_function(policy.as_str(), |b| {
            b.iter(|| std::hint::black_box(sim.run(REQUESTS).unwrap()))
        });
    }
    group.finish();
}

fn bench_sampler(c: &mut Criterion) {
    let mut group = c.benchmark_group("zipf_sampler");
    for n in [1_000usize, 1_000_000] {
        let sampler = PopularitySampler::new(n, 1.0).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        group.bench_function(format!("sample_n{}", n), |b| {
            b.iter(|| std::hint::black_box(sampler.sample(&mut rng)))
        });
    }
    group.finish();
}

fn bench_edge_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_lookup");
    let ops = 4096u64;
    group.throughput(Throughput::Elements(ops));
    for policy in [PolicyKind::Lru, PolicyKind::Lfu, PolicyKind::Random] {
        group.bench_function(policy.as_str(), |b| {
            b.iter_batched(
                || (CacheBuilder::new(1024).build(policy), SmallRng::seed_from_u64(7)),
                |(mut edge, mut rng)| {
                    for i in 0..ops {
                        std::hint::black_box(edge.lookup((i * 2_654_435_761) % 4096, &mut rng));
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_run_per_policy, bench_sampler, bench_edge_lookup);
criterion_main!(benches);
