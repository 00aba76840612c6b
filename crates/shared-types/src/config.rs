//! Naming configuration
//!
//! The protocol constant table: program ids, the `.sol` root account, fixed
//! class accounts, the hash prefix and the TLD suffix. Construct it once at
//! startup and pass it by reference; nothing here is mutated afterwards.
//!
//! # Example
//!
//! ```ignore
//! use shared_types::{NamingConfig, NamingConfigBuilder};
//!
//! let config = NamingConfigBuilder::devnet()
//!     .max_batch_size(50)
//!     .build()?;
//! ```

use crate::entities::Pubkey;
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Maximum number of accounts one batch fetch may request.
pub const MAX_BATCH_SIZE: usize = 100;

/// Mainnet constants.
pub mod mainnet {
    use crate::entities::Pubkey;

    /// `namesLPneVptA9Z5rqUDD9tMTWEJwofgaYwp8cawRkX`
    pub const NAME_PROGRAM_ID: Pubkey = Pubkey::new_from_array([
        11, 173, 81, 244, 19, 193, 243, 169, 148, 96, 217, 0, 216, 191, 46, 214, 146, 126, 202,
        52, 215, 183, 132, 43, 248, 16, 169, 115, 8, 45, 30, 220,
    ]);

    /// `58PwtjSDuFHuUkYjH9BYnnQKHfwo9reZhC2zMJv9JPkx`
    pub const ROOT_DOMAIN_ACCOUNT: Pubkey = Pubkey::new_from_array([
        61, 83, 194, 75, 56, 54, 14, 211, 129, 58, 35, 223, 178, 223, 216, 32, 171, 88, 33, 203,
        121, 41, 163, 141, 46, 170, 178, 82, 232, 56, 37, 149,
    ]);

    /// `33m47vH6Eav6jr5Ry86XjhRft2jRBLDnDgPSHoquXi2Z`
    pub const REVERSE_LOOKUP_CLASS: Pubkey = Pubkey::new_from_array([
        30, 108, 88, 228, 177, 181, 74, 40, 91, 207, 20, 62, 230, 167, 136, 53, 110, 250, 134,
        226, 89, 243, 216, 171, 22, 106, 244, 14, 246, 43, 73, 142,
    ]);

    /// `2pMnqHvei2N5oDcVGCRdZx48gqti199wr5CsyTTafsbo`
    pub const RECORDS_V2_CLASS: Pubkey = Pubkey::new_from_array([
        26, 253, 126, 22, 60, 117, 251, 235, 169, 206, 162, 129, 201, 20, 44, 12, 197, 46, 140,
        248, 228, 201, 213, 102, 236, 186, 150, 127, 18, 19, 242, 170,
    ]);

    /// `nftD3vbNkNqfj2Sd3HZwbpw4BxxKWr4AjGb9X38JeZk`
    pub const NAME_TOKENIZER_ID: Pubkey = Pubkey::new_from_array([
        11, 179, 25, 247, 166, 167, 29, 182, 28, 137, 181, 33, 75, 66, 0, 194, 145, 84, 78, 39,
        168, 99, 97, 254, 230, 223, 9, 233, 47, 115, 104, 119,
    ]);
}

/// Devnet constants. Program ids are shared with mainnet.
pub mod devnet {
    use crate::entities::Pubkey;

    /// `5eoDkP6vCQBXqDV9YN2NdUs3nmML3dMRNmEYpiyVNBm2`
    pub const ROOT_DOMAIN_ACCOUNT: Pubkey = Pubkey::new_from_array([
        69, 29, 127, 159, 117, 9, 180, 153, 134, 236, 118, 85, 37, 201, 68, 102, 123, 201, 25,
        168, 202, 246, 222, 147, 140, 82, 23, 173, 21, 194, 82, 41,
    ]);

    /// `7NbD1vprif6apthEZAqhRfYuhrqnuderB8qpnfXGCc8H`
    pub const REVERSE_LOOKUP_CLASS: Pubkey = Pubkey::new_from_array([
        94, 173, 255, 41, 41, 209, 151, 125, 83, 123, 57, 153, 167, 229, 216, 212, 125, 79, 199,
        137, 174, 215, 119, 48, 154, 150, 253, 240, 157, 14, 74, 250,
    ]);
}

/// Hash prefix used when hashing names.
pub const HASH_PREFIX: &str = "SPL Name Service";

/// The `.sol` TLD suffix stripped before derivation.
pub const TLD_SUFFIX: &str = ".sol";

/// Target cluster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cluster {
    #[default]
    Mainnet,
    Devnet,
}

impl FromStr for Cluster {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" | "mainnet-beta" => Ok(Cluster::Mainnet),
            "devnet" => Ok(Cluster::Devnet),
            other => Err(ConfigError::UnknownCluster(other.to_string())),
        }
    }
}

/// Immutable naming protocol configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Name service program id (owner of every name account).
    pub name_program_id: Pubkey,
    /// Parent of all top-level `.sol` names.
    pub root_domain: Pubkey,
    /// Class of reverse-lookup accounts.
    pub reverse_lookup_class: Pubkey,
    /// Class of record V2 accounts.
    pub records_v2_class: Pubkey,
    /// Name tokenizer program id (tokenized domain mints).
    pub name_tokenizer_id: Pubkey,
    /// Domain-separation prefix for name hashing.
    pub hash_prefix: String,
    /// TLD suffix stripped from user input.
    pub tld_suffix: String,
    /// Maximum accounts per batch fetch.
    pub max_batch_size: usize,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self::mainnet()
    }
}

impl NamingConfig {
    /// Mainnet constant table.
    pub fn mainnet() -> Self {
        Self {
            name_program_id: mainnet::NAME_PROGRAM_ID,
            root_domain: mainnet::ROOT_DOMAIN_ACCOUNT,
            reverse_lookup_class: mainnet::REVERSE_LOOKUP_CLASS,
            records_v2_class: mainnet::RECORDS_V2_CLASS,
            name_tokenizer_id: mainnet::NAME_TOKENIZER_ID,
            hash_prefix: HASH_PREFIX.to_string(),
            tld_suffix: TLD_SUFFIX.to_string(),
            max_batch_size: MAX_BATCH_SIZE,
        }
    }

    /// Devnet constant table.
    pub fn devnet() -> Self {
        Self {
            root_domain: devnet::ROOT_DOMAIN_ACCOUNT,
            reverse_lookup_class: devnet::REVERSE_LOOKUP_CLASS,
            ..Self::mainnet()
        }
    }

    /// Constant table for a cluster.
    pub fn for_cluster(cluster: Cluster) -> Self {
        match cluster {
            Cluster::Mainnet => Self::mainnet(),
            Cluster::Devnet => Self::devnet(),
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hash_prefix.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "hash_prefix",
                reason: "cannot be empty".to_string(),
            });
        }

        if !self.tld_suffix.starts_with('.') || self.tld_suffix.len() < 2 {
            return Err(ConfigError::InvalidValue {
                field: "tld_suffix",
                reason: format!("must look like `.tld`, got `{}`", self.tld_suffix),
            });
        }

        if self.max_batch_size == 0 || self.max_batch_size > MAX_BATCH_SIZE {
            return Err(ConfigError::InvalidValue {
                field: "max_batch_size",
                reason: format!("must be between 1 and {MAX_BATCH_SIZE}"),
            });
        }

        Ok(())
    }

    /// Load from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `SNS_CLUSTER` | `mainnet` |
    /// | `SNS_ROOT_DOMAIN` | cluster root |
    /// | `SNS_MAX_BATCH_SIZE` | `100` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup (environment, file, test map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cluster = match lookup("SNS_CLUSTER") {
            Some(value) => value.parse()?,
            None => Cluster::default(),
        };

        let mut builder = NamingConfigBuilder::for_cluster(cluster);

        if let Some(root) = lookup("SNS_ROOT_DOMAIN") {
            let root = root.parse::<Pubkey>().map_err(|e| ConfigError::InvalidValue {
                field: "root_domain",
                reason: format!("{e}"),
            })?;
            builder = builder.root_domain(root);
        }

        if let Some(size) = lookup("SNS_MAX_BATCH_SIZE") {
            let size = size.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                field: "max_batch_size",
                reason: format!("not a number: {size}"),
            })?;
            builder = builder.max_batch_size(size);
        }

        builder.build()
    }
}

/// Builder for `NamingConfig` with validation.
#[derive(Clone, Debug)]
pub struct NamingConfigBuilder {
    config: NamingConfig,
}

impl Default for NamingConfigBuilder {
    fn default() -> Self {
        Self::mainnet()
    }
}

impl NamingConfigBuilder {
    /// Start from mainnet constants.
    pub fn mainnet() -> Self {
        Self {
            config: NamingConfig::mainnet(),
        }
    }

    /// Start from devnet constants.
    pub fn devnet() -> Self {
        Self {
            config: NamingConfig::devnet(),
        }
    }

    /// Start from a cluster's constants.
    pub fn for_cluster(cluster: Cluster) -> Self {
        Self {
            config: NamingConfig::for_cluster(cluster),
        }
    }

    pub fn name_program_id(mut self, key: Pubkey) -> Self {
        self.config.name_program_id = key;
        self
    }

    pub fn root_domain(mut self, key: Pubkey) -> Self {
        self.config.root_domain = key;
        self
    }

    pub fn reverse_lookup_class(mut self, key: Pubkey) -> Self {
        self.config.reverse_lookup_class = key;
        self
    }

    pub fn records_v2_class(mut self, key: Pubkey) -> Self {
        self.config.records_v2_class = key;
        self
    }

    pub fn name_tokenizer_id(mut self, key: Pubkey) -> Self {
        self.config.name_tokenizer_id = key;
        self
    }

    pub fn tld_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.config.tld_suffix = suffix.into();
        self
    }

    pub fn max_batch_size(mut self, size: usize) -> Self {
        self.config.max_batch_size = size;
        self
    }

    /// Validate and build.
    pub fn build(self) -> Result<NamingConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
