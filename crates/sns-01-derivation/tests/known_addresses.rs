//! Published mainnet addresses, derived through the public API only.

use shared_types::{NamingConfig, Pubkey};
use sns_01_derivation::{DomainKeyResolver, RecordVersion};

fn pk(s: &str) -> Pubkey {
    s.parse().unwrap()
}

#[test]
fn test_domain_table() {
    let resolver = DomainKeyResolver::new(&NamingConfig::mainnet());

    let cases = [
        ("bonfida", "Crf8hzfthWGbGbLTVCiqRqV5MVnbpHB1L9KQMd6gsinb"),
        ("bonfida.sol", "Crf8hzfthWGbGbLTVCiqRqV5MVnbpHB1L9KQMd6gsinb"),
        ("dex.bonfida", "HoFfFXqFHAC8RP3duuQNzag1ieUwJRBv1HtRNiWFq4Qu"),
        ("dex.bonfida.sol", "HoFfFXqFHAC8RP3duuQNzag1ieUwJRBv1HtRNiWFq4Qu"),
    ];

    for (input, expected) in cases {
        let key = resolver.resolve(input, false).unwrap();
        assert_eq!(key.address, pk(expected), "domain {input}");
    }
}

#[test]
fn test_record_table() {
    let resolver = DomainKeyResolver::new(&NamingConfig::mainnet());

    let cases = [
        ("CNAME.something", RecordVersion::V1, "3RfzNCvEqEKZeohqVN16Z1oi6rw5TrANwqAo4hMx6njv"),
        ("CNAME.something", RecordVersion::V2, "6xdnfxf7URWom6oP7MMS39bFVEMMfufmFvJXFyd2xwoP"),
        ("CNAME.dex.bonfida", RecordVersion::V1, "AvQTVKEEfLf2DNQpUfqiDXpijguUAW1DHhXePRKtXCB9"),
    ];

    for (input, version, expected) in cases {
        let key = resolver.resolve_record(input, version).unwrap();
        assert_eq!(key.address, pk(expected), "record {input} {version:?}");
    }
}

#[test]
fn test_reverse_of_resolved_domain() {
    let resolver = DomainKeyResolver::new(&NamingConfig::mainnet());
    let domain = resolver.resolve("bonfida", false).unwrap();

    assert_eq!(
        resolver.reverse_key_for_address(&domain.address, None).unwrap(),
        pk("DqgmWxe2PPrfy45Ja3UPyFGwcbRzkRuwXt3NyxjX8krg")
    );
}
