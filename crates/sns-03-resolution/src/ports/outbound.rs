//! # Outbound Ports
//!
//! Account access. Implementations talk to an RPC node, a cache, or (in
//! tests) an in-memory map.

use crate::domain::errors::FetchError;
use async_trait::async_trait;
use shared_types::Pubkey;

/// Program account search filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccountFilter {
    /// `data[offset..offset + bytes.len()] == bytes`
    Memcmp { offset: usize, bytes: Vec<u8> },
    /// `data.len() == len`
    DataSize(usize),
}

impl AccountFilter {
    /// Compare `bytes` at `offset`.
    pub fn memcmp(offset: usize, bytes: impl AsRef<[u8]>) -> Self {
        AccountFilter::Memcmp {
            offset,
            bytes: bytes.as_ref().to_vec(),
        }
    }

    /// Whether an account's data passes this filter.
    pub fn matches(&self, data: &[u8]) -> bool {
        match self {
            AccountFilter::Memcmp { offset, bytes } => data
                .get(*offset..offset.saturating_add(bytes.len()))
                .is_some_and(|window| window == bytes.as_slice()),
            AccountFilter::DataSize(len) => data.len() == *len,
        }
    }
}

/// Account fetcher - outbound port.
#[async_trait]
pub trait AccountFetcher: Send + Sync {
    /// Raw account data, or `None` if the account does not exist.
    async fn fetch_account(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, FetchError>;

    /// Raw data for many accounts. Must return one entry per address, in order.
    async fn fetch_accounts(
        &self,
        addresses: &[Pubkey],
    ) -> Result<Vec<Option<Vec<u8>>>, FetchError>;

    /// Accounts owned by `program_id` passing every filter.
    async fn search_program_accounts(
        &self,
        program_id: &Pubkey,
        filters: &[AccountFilter],
    ) -> Result<Vec<(Pubkey, Vec<u8>)>, FetchError>;
}
