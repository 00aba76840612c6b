//! In-Memory Account Store
//!
//! Implements `AccountFetcher` over a map. Used by tests and offline
//! tooling that already holds account snapshots.

use crate::domain::errors::FetchError;
use crate::ports::outbound::{AccountFetcher, AccountFilter};
use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{Pubkey, RegistryState};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

#[derive(Clone, Debug)]
struct StoredAccount {
    /// Owning program. `None` matches every program on search.
    program_id: Option<Pubkey>,
    data: Vec<u8>,
}

/// Map-backed account fetcher.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    accounts: RwLock<HashMap<Pubkey, StoredAccount>>,
    /// When set, every call fails with `FetchError::Connection`.
    offline: AtomicBool,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw account data.
    pub fn insert(&self, address: Pubkey, data: Vec<u8>) {
        self.accounts.write().insert(
            address,
            StoredAccount {
                program_id: None,
                data,
            },
        );
    }

    /// Store raw account data owned by `program_id`.
    pub fn insert_owned(&self, address: Pubkey, program_id: Pubkey, data: Vec<u8>) {
        self.accounts.write().insert(
            address,
            StoredAccount {
                program_id: Some(program_id),
                data,
            },
        );
    }

    /// Store a serialized name registry.
    pub fn insert_registry(&self, address: Pubkey, state: &RegistryState) {
        self.insert(address, state.serialize());
    }

    pub fn remove(&self, address: &Pubkey) -> Option<Vec<u8>> {
        self.accounts.write().remove(address).map(|acc| acc.data)
    }

    pub fn len(&self) -> usize {
        self.accounts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.read().is_empty()
    }

    /// Simulate a lost connection.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), FetchError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(FetchError::Connection("store offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl AccountFetcher for InMemoryAccountStore {
    async fn fetch_account(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, FetchError> {
        self.check_online()?;
        Ok(self.accounts.read().get(address).map(|acc| acc.data.clone()))
    }

    async fn fetch_accounts(
        &self,
        addresses: &[Pubkey],
    ) -> Result<Vec<Option<Vec<u8>>>, FetchError> {
        self.check_online()?;
        debug!("[sns-03] Fetching {} accounts from memory", addresses.len());

        let accounts = self.accounts.read();
        Ok(addresses
            .iter()
            .map(|address| accounts.get(address).map(|acc| acc.data.clone()))
            .collect())
    }

    async fn search_program_accounts(
        &self,
        program_id: &Pubkey,
        filters: &[AccountFilter],
    ) -> Result<Vec<(Pubkey, Vec<u8>)>, FetchError> {
        self.check_online()?;

        let accounts = self.accounts.read();
        let mut matches: Vec<(Pubkey, Vec<u8>)> = accounts
            .iter()
            .filter(|(_, acc)| acc.program_id.map_or(true, |p| p == *program_id))
            .filter(|(_, acc)| filters.iter().all(|f| f.matches(&acc.data)))
            .map(|(address, acc)| (*address, acc.data.clone()))
            .collect();

        // HashMap iteration order is arbitrary.
        matches.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(matches)
    }
}
