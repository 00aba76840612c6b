//! # SNS Core Subsystem Benchmarks
//!
//! | Subsystem | Operation |
//! |-----------|-----------|
//! | sns-01 Derivation | hash, PDA search, record/reverse keys |
//! | sns-02 Records | per-type decode, SOL verify, batch decode |

use criterion::{criterion_group, criterion_main};
use sns_tests::benchmarks::{sns_01_derivation, sns_02_records};

criterion_group!(
    benches,
    sns_01_derivation::bench_derivation,
    sns_01_derivation::bench_derivation_batch,
    sns_02_records::bench_record_codec,
    sns_02_records::bench_batch_decode,
);

criterion_main!(benches);
