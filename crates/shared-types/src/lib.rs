//! # Shared Types Crate
//!
//! Entities shared across the SNS subsystems.
//!
//! ## Contents
//!
//! - **Entities**: `Pubkey`, `HashedName`, `RegistryState`
//! - **Configuration**: `NamingConfig`, the immutable protocol constant table
//!   (program id, root domain, reverse-lookup class, ...)
//! - **Errors**: parsing and configuration errors
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every subsystem takes addresses and
//!   constants from here.
//! - **No hidden globals**: constants are reached through a `NamingConfig`
//!   value that callers construct once and pass down.

pub mod config;
pub mod entities;
pub mod errors;

pub use config::{Cluster, NamingConfig, NamingConfigBuilder};
pub use entities::*;
pub use errors::*;
