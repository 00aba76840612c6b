//! Name Resolution Service
//!
//! Wires the derivation and record codec domains to an `AccountFetcher`.

use crate::domain::errors::ResolutionError;
use crate::domain::reverse::deserialize_reverse;
use crate::ports::inbound::NameResolutionApi;
use crate::ports::outbound::{AccountFetcher, AccountFilter};
use async_trait::async_trait;
use shared_types::{NamingConfig, Pubkey, RegistryState, REGISTRY_HEADER_LEN};
use sns_01_derivation::{DomainKey, DomainKeyResolver, RecordVersion};
use sns_02_records::{decode, decode_batch, DecodeRequest, RecordError, RecordType};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Offset of the owner field in a name registry.
const OWNER_OFFSET: usize = 32;
/// Offset of the class field in a name registry.
const CLASS_OFFSET: usize = 64;

/// Name resolution service.
///
/// Implements `NameResolutionApi` on top of an injected `AccountFetcher`.
pub struct NameResolutionService<F: AccountFetcher> {
    /// Account fetcher (driven port)
    fetcher: Arc<F>,
    resolver: DomainKeyResolver,
}

impl<F: AccountFetcher> NameResolutionService<F> {
    /// Create a service with mainnet configuration.
    pub fn new(fetcher: Arc<F>) -> Self {
        Self::with_config(fetcher, &NamingConfig::default())
    }

    /// Create a service with a custom configuration.
    pub fn with_config(fetcher: Arc<F>, config: &NamingConfig) -> Self {
        Self {
            fetcher,
            resolver: DomainKeyResolver::new(config),
        }
    }

    pub fn resolver(&self) -> &DomainKeyResolver {
        &self.resolver
    }

    /// Fetch and parse many registries, chunked by `max_batch_size`.
    ///
    /// Missing accounts and accounts shorter than the header become `None`.
    async fn fetch_registries(
        &self,
        keys: &[Pubkey],
    ) -> Result<Vec<Option<RegistryState>>, ResolutionError> {
        let chunk_size = self.resolver.config().max_batch_size.max(1);
        let mut registries = Vec::with_capacity(keys.len());

        for chunk in keys.chunks(chunk_size) {
            let accounts = self.fetcher.fetch_accounts(chunk).await?;

            if accounts.len() != chunk.len() {
                warn!(
                    expected = chunk.len(),
                    actual = accounts.len(),
                    "[sns-03] Fetcher returned wrong number of accounts"
                );
                return Err(ResolutionError::LengthMismatch {
                    expected: chunk.len(),
                    actual: accounts.len(),
                });
            }

            registries.extend(
                accounts
                    .into_iter()
                    .map(|raw| raw.and_then(|raw| parse_registry(&raw))),
            );
        }

        Ok(registries)
    }

    fn record_key(&self, domain: &str, record: RecordType) -> Result<Pubkey, ResolutionError> {
        Ok(self
            .resolver
            .record_key(domain, record.as_str(), RecordVersion::V1)?)
    }
}

fn parse_registry(raw: &[u8]) -> Option<RegistryState> {
    match RegistryState::deserialize(raw) {
        Ok(state) => Some(state),
        Err(e) => {
            debug!(error = %e, "[sns-03] Treating malformed registry as missing");
            None
        }
    }
}

#[async_trait]
impl<F: AccountFetcher + 'static> NameResolutionApi for NameResolutionService<F> {
    fn domain_key(&self, domain: &str) -> Result<DomainKey, ResolutionError> {
        Ok(self.resolver.resolve(domain, false)?)
    }

    fn config(&self) -> &NamingConfig {
        self.resolver.config()
    }

    async fn get_registry(&self, address: &Pubkey) -> Result<RegistryState, ResolutionError> {
        let raw = self
            .fetcher
            .fetch_account(address)
            .await?
            .ok_or(ResolutionError::NoAccountData)?;

        parse_registry(&raw).ok_or(ResolutionError::NoAccountData)
    }

    async fn reverse_lookup(&self, address: &Pubkey) -> Result<String, ResolutionError> {
        let reverse_key = self.resolver.reverse_key_for_address(address, None)?;
        debug!(address = %address, reverse_key = %reverse_key, "[sns-03] Reverse lookup");

        let registry = self.get_registry(&reverse_key).await?;
        let data = registry.data().ok_or(ResolutionError::NoAccountData)?;

        deserialize_reverse(data, false)
    }

    async fn reverse_lookup_batch(
        &self,
        addresses: &[Pubkey],
    ) -> Result<Vec<String>, ResolutionError> {
        let names = self.reverse_lookup_batch_indexed(addresses).await?;
        Ok(names.into_iter().flatten().collect())
    }

    async fn reverse_lookup_batch_indexed(
        &self,
        addresses: &[Pubkey],
    ) -> Result<Vec<Option<String>>, ResolutionError> {
        let keys = addresses
            .iter()
            .map(|address| self.resolver.reverse_key_for_address(address, None))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = keys.len(), "[sns-03] Batch reverse lookup");
        let registries = self.fetch_registries(&keys).await?;

        registries
            .iter()
            .zip(addresses)
            .map(|(registry, address)| {
                let Some(data) = registry.as_ref().and_then(RegistryState::data) else {
                    return Ok(None);
                };

                match deserialize_reverse(data, false) {
                    Ok(name) => Ok(Some(name)),
                    Err(ResolutionError::NoAccountData) => Ok(None),
                    Err(e) => {
                        warn!(address = %address, error = %e, "[sns-03] Malformed reverse payload");
                        Err(e)
                    }
                }
            })
            .collect()
    }

    async fn get_record(
        &self,
        domain: &str,
        record: RecordType,
    ) -> Result<String, ResolutionError> {
        let key = self.record_key(domain, record)?;
        debug!(domain, record = %record, key = %key, "[sns-03] Fetching record");

        let registry = self.get_registry(&key).await?;
        Ok(decode(registry.data().unwrap_or_default(), record, &key)?)
    }

    async fn get_records(
        &self,
        domain: &str,
        records: &[RecordType],
    ) -> Result<Vec<Option<String>>, ResolutionError> {
        let keys = records
            .iter()
            .map(|record| self.record_key(domain, *record))
            .collect::<Result<Vec<_>, _>>()?;

        let registries = self.fetch_registries(&keys).await?;

        let mut slots = Vec::new();
        let mut requests = Vec::new();
        for (slot, ((registry, record), key)) in
            registries.iter().zip(records).zip(&keys).enumerate()
        {
            if let Some(data) = registry.as_ref().and_then(RegistryState::data) {
                slots.push(slot);
                requests.push(DecodeRequest {
                    data,
                    record_type: *record,
                    record_address: *key,
                });
            }
        }

        let mut values = vec![None; records.len()];
        for (slot, result) in slots.into_iter().zip(decode_batch(&requests)) {
            values[slot] = match result {
                Ok(value) => Some(value),
                Err(RecordError::NoData) => None,
                Err(e) => {
                    warn!(
                        domain,
                        record = %records[slot],
                        error = %e,
                        "[sns-03] Record failed to decode"
                    );
                    return Err(e.into());
                }
            };
        }

        Ok(values)
    }

    async fn find_subdomains(&self, parent: &Pubkey) -> Result<Vec<String>, ResolutionError> {
        let config = self.resolver.config();
        let program_id = config.name_program_id;

        let reverse_filters = [
            AccountFilter::memcmp(0, parent),
            AccountFilter::memcmp(CLASS_OFFSET, config.reverse_lookup_class),
        ];
        let reverses = self
            .fetcher
            .search_program_accounts(&program_id, &reverse_filters)
            .await?;

        let subs = self
            .fetcher
            .search_program_accounts(&program_id, &[AccountFilter::memcmp(0, parent)])
            .await?;

        let names: HashMap<Pubkey, String> = reverses
            .into_iter()
            .filter_map(|(key, raw)| {
                let data = raw.get(REGISTRY_HEADER_LEN..)?;
                match deserialize_reverse(data, true) {
                    Ok(name) => Some((key, name)),
                    Err(e) => {
                        debug!(key = %key, error = %e, "[sns-03] Skipping reverse account");
                        None
                    }
                }
            })
            .collect();

        let mut labels = Vec::new();
        for (sub_key, _) in &subs {
            let reverse_key = self.resolver.reverse_key_for_address(sub_key, Some(parent))?;
            if let Some(name) = names.get(&reverse_key) {
                labels.push(name.clone());
            }
        }

        debug!(
            parent = %parent,
            candidates = subs.len(),
            found = labels.len(),
            "[sns-03] Subdomain search complete"
        );
        Ok(labels)
    }

    async fn get_all_domains(&self, owner: &Pubkey) -> Result<Vec<Pubkey>, ResolutionError> {
        let config = self.resolver.config();
        let filters = [
            AccountFilter::memcmp(OWNER_OFFSET, owner),
            AccountFilter::memcmp(0, config.root_domain),
        ];

        let accounts = self
            .fetcher
            .search_program_accounts(&config.name_program_id, &filters)
            .await?;

        Ok(accounts.into_iter().map(|(key, _)| key).collect())
    }
}
