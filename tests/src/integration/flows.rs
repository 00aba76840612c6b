//! # Integration Test Flows
//!
//! ## Flows Tested:
//!
//! 1. **Derive → store → reverse lookup**: addresses derived by SNS-01 are
//!    what SNS-03 looks up
//! 2. **Encode → store → get_record**: payloads built by SNS-02 decode
//!    back through the service
//! 3. **Signed SOL record**: signature bound to the derived record address
//! 4. **Enumeration**: subdomains and owned domains over the search port
//! 5. **Batching**: large batches are split and stay ordered

#[cfg(test)]
mod tests {
    use crate::integration::init_tracing;
    use std::sync::Arc;

    use shared_crypto::Ed25519KeyPair;
    use shared_types::{NamingConfig, Pubkey, RegistryState};
    use sns_01_derivation::{DomainKeyResolver, RecordVersion};
    use sns_02_records::{encode, encode_signed, signing_message, RecordError, RecordType};
    use sns_03_resolution::{
        serialize_reverse, InMemoryAccountStore, NameResolutionApi, NameResolutionService,
        ResolutionError,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    struct Harness {
        store: Arc<InMemoryAccountStore>,
        service: NameResolutionService<InMemoryAccountStore>,
        resolver: DomainKeyResolver,
        config: NamingConfig,
    }

    impl Harness {
        fn new(config: NamingConfig) -> Self {
            init_tracing();
            let store = Arc::new(InMemoryAccountStore::new());
            Self {
                service: NameResolutionService::with_config(store.clone(), &config),
                resolver: DomainKeyResolver::new(&config),
                store,
                config,
            }
        }

        fn mainnet() -> Self {
            Self::new(NamingConfig::mainnet())
        }

        /// Create the name account and its reverse lookup.
        fn register(&self, domain: &str, owner: Pubkey) -> Pubkey {
            let key = self.resolver.resolve(domain, false).unwrap();

            self.store.insert_owned(
                key.address,
                self.config.name_program_id,
                RegistryState {
                    parent_name: key.parent.unwrap_or(self.config.root_domain),
                    owner,
                    class: Pubkey::default(),
                    data: None,
                }
                .serialize(),
            );

            let reverse_parent = key.parent.filter(|_| key.is_sub);
            let reverse_key = self
                .resolver
                .reverse_key_for_address(&key.address, reverse_parent.as_ref())
                .unwrap();
            let trimmed = self.resolver.trim_tld(domain);
            let name = match key.parent {
                Some(_) => format!("\0{}", trimmed.split('.').next().unwrap_or_default()),
                None => trimmed.to_string(),
            };

            self.store.insert_owned(
                reverse_key,
                self.config.name_program_id,
                RegistryState {
                    parent_name: reverse_parent.unwrap_or_default(),
                    owner,
                    class: self.config.reverse_lookup_class,
                    data: Some(serialize_reverse(&name)),
                }
                .serialize(),
            );

            key.address
        }

        /// Store a V1 record payload under `domain`.
        fn set_record(&self, domain: &str, record: RecordType, payload: Vec<u8>) -> Pubkey {
            let domain_key = self.resolver.resolve(domain, false).unwrap();
            let record_key = self
                .resolver
                .record_key(domain, record.as_str(), RecordVersion::V1)
                .unwrap();

            self.store.insert_owned(
                record_key,
                self.config.name_program_id,
                RegistryState {
                    parent_name: domain_key.address,
                    owner: Pubkey::default(),
                    class: Pubkey::default(),
                    data: Some(payload),
                }
                .serialize(),
            );

            record_key
        }
    }

    fn owner() -> Pubkey {
        Pubkey::new_from_array([0xEEu8; 32])
    }

    // =============================================================================
    // REVERSE LOOKUP
    // =============================================================================

    #[tokio::test]
    async fn test_known_domain_reverse_lookup() {
        let h = Harness::mainnet();
        let address = h.register("bonfida.sol", owner());

        assert_eq!(address.to_string(), "Crf8hzfthWGbGbLTVCiqRqV5MVnbpHB1L9KQMd6gsinb");
        assert_eq!(h.service.reverse_lookup(&address).await.unwrap(), "bonfida");
    }

    #[tokio::test]
    async fn test_reverse_lookup_of_unregistered_address() {
        let h = Harness::mainnet();
        let address = h.resolver.resolve("nobody", false).unwrap().address;

        assert_eq!(
            h.service.reverse_lookup(&address).await,
            Err(ResolutionError::NoAccountData)
        );
    }

    #[tokio::test]
    async fn test_batch_reverse_m_of_n() {
        let h = Harness::mainnet();
        let names = ["alpha", "beta", "gamma", "delta", "epsilon"];

        let mut addresses = Vec::new();
        for (i, name) in names.iter().enumerate() {
            if i % 2 == 0 {
                addresses.push(h.register(name, owner()));
            } else {
                addresses.push(h.resolver.resolve(name, false).unwrap().address);
            }
        }

        let found = h.service.reverse_lookup_batch(&addresses).await.unwrap();
        assert_eq!(found, vec!["alpha", "gamma", "epsilon"]);
    }

    #[tokio::test]
    async fn test_large_batch_is_ordered_across_chunks() {
        let h = Harness::new(NamingConfig {
            max_batch_size: 7,
            ..NamingConfig::mainnet()
        });

        let names: Vec<String> = (0..30).map(|i| format!("name-{i}")).collect();
        let addresses: Vec<Pubkey> = names.iter().map(|n| h.register(n, owner())).collect();

        let found = h.service.reverse_lookup_batch(&addresses).await.unwrap();
        assert_eq!(found, names);
    }

    // =============================================================================
    // RECORDS
    // =============================================================================

    #[tokio::test]
    async fn test_encoded_records_resolve() {
        let h = Harness::mainnet();
        h.register("bonfida", owner());

        for (record, value) in [
            (RecordType::Eth, "0x4bfbfd1e018f9f27eeb788160579daf7e2cd7da7"),
            (RecordType::Cname, "bücher.example"),
            (RecordType::AAAA, "2001:db8::1"),
        ] {
            h.set_record("bonfida", record, encode(value, record).unwrap());
        }

        let values = h
            .service
            .get_records(
                "bonfida.sol",
                &[RecordType::Eth, RecordType::Cname, RecordType::Btc, RecordType::AAAA],
            )
            .await
            .unwrap();

        assert_eq!(
            values,
            vec![
                Some("0x4bfbfd1e018f9f27eeb788160579daf7e2cd7da7".to_string()),
                Some("xn--bcher-kva.example".to_string()),
                None,
                Some("2001:db8::1".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_record_key_matches_published_vector() {
        let h = Harness::mainnet();
        let key = h.set_record("something", RecordType::Cname, b"example.com".to_vec());

        assert_eq!(key.to_string(), "3RfzNCvEqEKZeohqVN16Z1oi6rw5TrANwqAo4hMx6njv");
        assert_eq!(
            h.service.get_record("something.sol", RecordType::Cname).await.unwrap(),
            "example.com"
        );
    }

    #[tokio::test]
    async fn test_signed_sol_record_bound_to_record_address() {
        let h = Harness::mainnet();
        h.register("bonfida", owner());

        let keypair = Ed25519KeyPair::generate();
        let content = Pubkey::new_from_array(*keypair.public_key().as_bytes());
        let record_key = h
            .resolver
            .record_key("bonfida", RecordType::Sol.as_str(), RecordVersion::V1)
            .unwrap();

        let signature = keypair.sign(&signing_message(content.as_ref(), &record_key));
        let payload = encode_signed(&content, &record_key, &content, signature.as_bytes()).unwrap();
        h.set_record("bonfida", RecordType::Sol, payload.clone());

        assert_eq!(
            h.service.get_record("bonfida", RecordType::Sol).await.unwrap(),
            content.to_string()
        );

        // Copying the payload to another domain's record breaks the signature.
        h.register("other", owner());
        h.set_record("other", RecordType::Sol, payload);
        assert_eq!(
            h.service.get_record("other", RecordType::Sol).await,
            Err(ResolutionError::Record(RecordError::InvalidSignature))
        );
    }

    // =============================================================================
    // ENUMERATION
    // =============================================================================

    #[tokio::test]
    async fn test_subdomains_and_owned_domains() {
        let h = Harness::mainnet();
        let parent = h.register("bonfida", owner());
        h.register("dex.bonfida", owner());
        h.register("naming.bonfida.sol", owner());
        h.register("solana", owner());
        h.register("elsewhere", Pubkey::new_from_array([1u8; 32]));

        let mut subs = h.service.find_subdomains(&parent).await.unwrap();
        subs.sort();
        assert_eq!(subs, vec!["dex", "naming"]);

        let mut owned = h.service.get_all_domains(&owner()).await.unwrap();
        owned.sort();
        let mut expected = vec![
            h.resolver.resolve("bonfida", false).unwrap().address,
            h.resolver.resolve("solana", false).unwrap().address,
        ];
        expected.sort();
        assert_eq!(owned, expected);
    }

    #[tokio::test]
    async fn test_tokenized_domain_mint() {
        let h = Harness::mainnet();
        let domain = h.register("bonfida", owner());

        let mint = h.resolver.domain_mint(&domain).unwrap();
        tracing::info!(domain = %domain, mint = %mint, "Derived tokenized mint");
        assert_eq!(mint.to_string(), "4eH4KgXyMEmfJWqXukYNud3vqobGxfFAtDprWf2jLjQE");
    }

    #[tokio::test]
    async fn test_offline_store_surfaces_fetch_error() {
        let h = Harness::mainnet();
        let address = h.register("bonfida", owner());
        h.store.set_offline(true);

        assert!(matches!(
            h.service.reverse_lookup(&address).await,
            Err(ResolutionError::Fetch(_))
        ));
    }
}
