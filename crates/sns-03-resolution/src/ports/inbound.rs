//! # Inbound Ports
//!
//! API trait defining what the resolution subsystem can do.

use crate::domain::errors::ResolutionError;
use async_trait::async_trait;
use shared_types::{NamingConfig, Pubkey, RegistryState};
use sns_01_derivation::DomainKey;
use sns_02_records::RecordType;

/// Name resolution API - inbound port.
#[async_trait]
pub trait NameResolutionApi: Send + Sync {
    // =========================================================================
    // Derivation
    // =========================================================================

    /// Resolve a domain or subdomain to its account.
    fn domain_key(&self, domain: &str) -> Result<DomainKey, ResolutionError>;

    /// Active naming configuration.
    fn config(&self) -> &NamingConfig;

    // =========================================================================
    // Accounts
    // =========================================================================

    /// Parsed name registry at `address`.
    ///
    /// Missing accounts and accounts shorter than the header give
    /// `NoAccountData`.
    async fn get_registry(&self, address: &Pubkey) -> Result<RegistryState, ResolutionError>;

    // =========================================================================
    // Reverse Lookup
    // =========================================================================

    /// Name of the domain at `address`.
    async fn reverse_lookup(&self, address: &Pubkey) -> Result<String, ResolutionError>;

    /// Names of every address that has one, in input order.
    async fn reverse_lookup_batch(
        &self,
        addresses: &[Pubkey],
    ) -> Result<Vec<String>, ResolutionError>;

    /// One entry per address, `None` where no name is registered.
    async fn reverse_lookup_batch_indexed(
        &self,
        addresses: &[Pubkey],
    ) -> Result<Vec<Option<String>>, ResolutionError>;

    // =========================================================================
    // Records
    // =========================================================================

    /// Decoded V1 record of `domain`.
    async fn get_record(
        &self,
        domain: &str,
        record: RecordType,
    ) -> Result<String, ResolutionError>;

    /// Decoded V1 records of `domain`, `None` where the record is unset.
    async fn get_records(
        &self,
        domain: &str,
        records: &[RecordType],
    ) -> Result<Vec<Option<String>>, ResolutionError>;

    // =========================================================================
    // Enumeration
    // =========================================================================

    /// Labels of the subdomains of `parent` that have a reverse lookup.
    async fn find_subdomains(&self, parent: &Pubkey) -> Result<Vec<String>, ResolutionError>;

    /// Addresses of the top-level domains owned by `owner`.
    async fn get_all_domains(&self, owner: &Pubkey) -> Result<Vec<Pubkey>, ResolutionError>;
}
