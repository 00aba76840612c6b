//! # Edwards25519 Curve Checks
//!
//! Program-derived addresses must have no private key, which means they
//! must not decompress to a point on the Ed25519 curve.

use curve25519_dalek::edwards::CompressedEdwardsY;

/// Returns true if `bytes` is a valid compressed Edwards25519 point.
pub fn is_on_curve(bytes: &[u8; 32]) -> bool {
    CompressedEdwardsY(*bytes).decompress().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signatures::Ed25519KeyPair;

    #[test]
    fn test_public_key_is_on_curve() {
        let keypair = Ed25519KeyPair::from_seed([0x11u8; 32]);
        assert!(is_on_curve(keypair.public_key().as_bytes()));
    }

    #[test]
    fn test_identity_is_on_curve() {
        let mut identity = [0u8; 32];
        identity[0] = 1;
        assert!(is_on_curve(&identity));
    }

    #[test]
    fn test_root_domain_account_is_off_curve() {
        // 58PwtjSDuFHuUkYjH9BYnnQKHfwo9reZhC2zMJv9JPkx, itself a derived address
        let root = [
            61, 83, 194, 75, 56, 54, 14, 211, 129, 58, 35, 223, 178, 223, 216, 32, 171, 88, 33,
            203, 121, 41, 163, 141, 46, 170, 178, 82, 232, 56, 37, 149,
        ];
        assert!(!is_on_curve(&root));
    }
}
