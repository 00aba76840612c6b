//! # Domain Key Resolver
//!
//! Turns user input such as `dex.bonfida.sol` into the name account that
//! holds it. Label prefixes are part of the on-chain format:
//!
//! - `\0` marks a plain subdomain
//! - `\x01` marks a V1 record
//! - `\x02` marks a V2 record (derived with the records V2 class)

use crate::domain::errors::DerivationError;
use crate::domain::pda::{derive, find_program_address};
use crate::domain::seeds::DerivationSeeds;
use serde::{Deserialize, Serialize};
use shared_crypto::NameHasher;
use shared_types::{HashedName, NamingConfig, Pubkey};
use tracing::debug;

/// Seed prefix of tokenized domain mints.
pub const MINT_PREFIX: &[u8] = b"tokenized_name";

const SUBDOMAIN_PREFIX: &str = "\0";

/// Record account version.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordVersion {
    #[default]
    V1,
    V2,
}

impl RecordVersion {
    /// Label prefix for this version.
    pub fn prefix(self) -> &'static str {
        match self {
            RecordVersion::V1 => "\x01",
            RecordVersion::V2 => "\x02",
        }
    }
}

/// Result of resolving a name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainKey {
    /// Name account address.
    pub address: Pubkey,
    /// Hash of the (prefixed) last label.
    pub hashed_name: HashedName,
    /// True for subdomains and records.
    pub is_sub: bool,
    /// Top-level parent, for subdomains and records.
    pub parent: Option<Pubkey>,
    /// True for records hanging off a subdomain.
    pub is_sub_record: bool,
}

/// Derives name, record, reverse and mint addresses under a `NamingConfig`.
#[derive(Clone, Debug)]
pub struct DomainKeyResolver {
    config: NamingConfig,
    hasher: NameHasher,
}

impl DomainKeyResolver {
    pub fn new(config: &NamingConfig) -> Self {
        Self {
            hasher: NameHasher::new(config.hash_prefix.clone()),
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &NamingConfig {
        &self.config
    }

    /// Hash a name with the configured prefix.
    pub fn hash(&self, name: &str) -> HashedName {
        self.hasher.hash(name)
    }

    /// Strip one trailing TLD suffix, if present.
    pub fn trim_tld<'a>(&self, domain: &'a str) -> &'a str {
        domain
            .strip_suffix(self.config.tld_suffix.as_str())
            .unwrap_or(domain)
    }

    /// Derive the account for an already hashed name.
    pub fn name_account_key(
        &self,
        hashed_name: HashedName,
        class: Option<&Pubkey>,
        parent: Option<&Pubkey>,
    ) -> Result<Pubkey, DerivationError> {
        let seeds = DerivationSeeds::new(hashed_name, class, parent);
        let (address, _bump) = derive(&seeds, &self.config.name_program_id)?;
        Ok(address)
    }

    fn derive_label(
        &self,
        label: &str,
        parent: &Pubkey,
        class: Option<&Pubkey>,
    ) -> Result<(Pubkey, HashedName), DerivationError> {
        let hashed = self.hash(label);
        let address = self.name_account_key(hashed, class, Some(parent))?;
        Ok((address, hashed))
    }

    /// Resolve a domain or subdomain, or a V1 record when `is_record`.
    pub fn resolve(&self, domain: &str, is_record: bool) -> Result<DomainKey, DerivationError> {
        self.resolve_inner(domain, is_record.then_some(RecordVersion::V1))
    }

    /// Resolve `<record>.<domain>` or `<record>.<sub>.<domain>` as a record.
    pub fn resolve_record(
        &self,
        name: &str,
        version: RecordVersion,
    ) -> Result<DomainKey, DerivationError> {
        self.resolve_inner(name, Some(version))
    }

    fn resolve_inner(
        &self,
        domain: &str,
        record: Option<RecordVersion>,
    ) -> Result<DomainKey, DerivationError> {
        let trimmed = self.trim_tld(domain);
        let labels: Vec<&str> = trimmed.split('.').collect();
        let root = self.config.root_domain;

        let record_class = match record {
            Some(RecordVersion::V2) => Some(self.config.records_v2_class),
            _ => None,
        };

        match labels.as_slice() {
            [name] => {
                let (address, hashed_name) = self.derive_label(name, &root, None)?;
                Ok(DomainKey {
                    address,
                    hashed_name,
                    is_sub: false,
                    parent: None,
                    is_sub_record: false,
                })
            }
            [sub, name] => {
                let (parent, _) = self.derive_label(name, &root, None)?;
                let prefix = record.map_or(SUBDOMAIN_PREFIX, RecordVersion::prefix);
                let (address, hashed_name) = self.derive_label(
                    &format!("{prefix}{sub}"),
                    &parent,
                    record_class.as_ref(),
                )?;
                Ok(DomainKey {
                    address,
                    hashed_name,
                    is_sub: true,
                    parent: Some(parent),
                    is_sub_record: false,
                })
            }
            [rec, sub, name] if record.is_some() => {
                let prefix = record.map_or(SUBDOMAIN_PREFIX, RecordVersion::prefix);
                let (parent, _) = self.derive_label(name, &root, None)?;
                let (sub_key, _) =
                    self.derive_label(&format!("{SUBDOMAIN_PREFIX}{sub}"), &parent, None)?;
                let (address, hashed_name) = self.derive_label(
                    &format!("{prefix}{rec}"),
                    &sub_key,
                    record_class.as_ref(),
                )?;
                Ok(DomainKey {
                    address,
                    hashed_name,
                    is_sub: true,
                    parent: Some(parent),
                    is_sub_record: true,
                })
            }
            _ => {
                debug!(
                    domain = %trimmed,
                    labels = labels.len(),
                    "[sns-01] Unsupported label count, deriving bare name"
                );
                let (address, hashed_name) = self.derive_label(trimmed, &root, None)?;
                Ok(DomainKey {
                    address,
                    hashed_name,
                    is_sub: false,
                    parent: None,
                    is_sub_record: false,
                })
            }
        }
    }

    /// Address of the `<record>.<domain>` record account.
    pub fn record_key(
        &self,
        domain: &str,
        record: &str,
        version: RecordVersion,
    ) -> Result<Pubkey, DerivationError> {
        let key = self.resolve_record(&format!("{record}.{domain}"), version)?;
        Ok(key.address)
    }

    /// Reverse-lookup account of `domain`.
    ///
    /// The domain's parent is used as a seed only when `is_sub` is set.
    pub fn reverse_key(&self, domain: &str, is_sub: bool) -> Result<Pubkey, DerivationError> {
        let key = self.resolve(domain, false)?;
        let parent = if is_sub { key.parent } else { None };
        self.reverse_key_for_address(&key.address, parent.as_ref())
    }

    /// Reverse-lookup account of a known domain address.
    pub fn reverse_key_for_address(
        &self,
        address: &Pubkey,
        parent: Option<&Pubkey>,
    ) -> Result<Pubkey, DerivationError> {
        let hashed = self.hash(&address.to_base58());
        self.name_account_key(hashed, Some(&self.config.reverse_lookup_class), parent)
    }

    /// Mint of a tokenized domain.
    pub fn domain_mint(&self, domain_address: &Pubkey) -> Result<Pubkey, DerivationError> {
        let (mint, _bump) = find_program_address(
            &[MINT_PREFIX, domain_address.as_ref()],
            &self.config.name_tokenizer_id,
        )?;
        Ok(mint)
    }
}

impl Default for DomainKeyResolver {
    fn default() -> Self {
        Self::new(&NamingConfig::default())
    }
}
