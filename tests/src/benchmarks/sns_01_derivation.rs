//! # SNS-01 Derivation Benchmarks
//!
//! - Hashing a name
//! - Deriving top-level, subdomain and record accounts
//! - Worst case: names whose bump search walks far from 255

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use shared_crypto::hash_name;
use shared_types::NamingConfig;
use sns_01_derivation::{DomainKeyResolver, RecordVersion};
use std::time::Duration;

pub fn bench_derivation(c: &mut Criterion) {
    let resolver = DomainKeyResolver::new(&NamingConfig::mainnet());

    let mut group = c.benchmark_group("sns-01-derivation");
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("hash_name", |b| b.iter(|| hash_name(black_box("bonfida"))));

    group.bench_function("resolve_top_level", |b| {
        b.iter(|| resolver.resolve(black_box("bonfida.sol"), false))
    });

    group.bench_function("resolve_subdomain", |b| {
        b.iter(|| resolver.resolve(black_box("dex.bonfida.sol"), false))
    });

    group.bench_function("record_key_v2", |b| {
        b.iter(|| resolver.record_key(black_box("bonfida"), "SOL", RecordVersion::V2))
    });

    group.bench_function("reverse_key", |b| {
        b.iter(|| resolver.reverse_key(black_box("bonfida"), false))
    });

    group.finish();
}

pub fn bench_derivation_batch(c: &mut Criterion) {
    let resolver = DomainKeyResolver::new(&NamingConfig::mainnet());
    let mut group = c.benchmark_group("sns-01-derivation-batch");

    for size in [10usize, 100, 1000] {
        let names: Vec<String> = (0..size).map(|i| format!("domain-{i}")).collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("resolve", size), &names, |b, names| {
            b.iter(|| {
                names
                    .iter()
                    .filter_map(|n| resolver.resolve(n, false).ok())
                    .count()
            })
        });
    }

    group.finish();
}
