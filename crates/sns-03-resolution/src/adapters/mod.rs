//! # Adapters

pub mod in_memory;
