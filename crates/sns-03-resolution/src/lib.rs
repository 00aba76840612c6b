//! # Name Resolution Subsystem (SNS-03)
//!
//! Combines derivation, account fetching and record decoding.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): reverse payload parsing, error types
//! - **Ports Layer** (`ports/`): `NameResolutionApi` (inbound),
//!   `AccountFetcher` (outbound)
//! - **Service Layer** (`service.rs`): `NameResolutionService`
//! - **Adapters** (`adapters/`): `InMemoryAccountStore`
//!
//! ## Batching
//!
//! Multi-account reads are split into chunks of
//! `NamingConfig::max_batch_size` addresses. Results keep input order.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::in_memory::InMemoryAccountStore;
pub use domain::errors::{FetchError, ResolutionError};
pub use domain::reverse::{deserialize_reverse, serialize_reverse};
pub use ports::inbound::NameResolutionApi;
pub use ports::outbound::{AccountFetcher, AccountFilter};
pub use service::NameResolutionService;
