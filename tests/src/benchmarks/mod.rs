//! # SNS Core Benchmarks
//!
//! Benchmark bodies per subsystem, registered in
//! `benches/subsystem_benchmarks.rs`.

pub mod sns_01_derivation;
pub mod sns_02_records;
