//! # SNS Core Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion benchmark bodies per subsystem
//! │   ├── sns_01_derivation.rs
//! │   └── sns_02_records.rs
//! │
//! └── integration/      # Cross-subsystem flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p sns-tests
//!
//! # With logs
//! RUST_LOG=debug cargo test -p sns-tests integration::
//!
//! # Benchmarks
//! cargo bench -p sns-tests
//! ```

pub mod benchmarks;
pub mod integration;
