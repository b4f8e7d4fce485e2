//! Canonical state fingerprints with domain separation.
//!
//! Fingerprints are SHA-256 digests over a domain-prefixed canonical byte
//! encoding supplied by each puzzle adapter. The domain prefix keeps equal
//! byte encodings from different puzzle types from colliding. Each prefix
//! is null-terminated.
//!
//! **Exactly one place defines canonical fingerprinting.** Adapters build
//! their canonical bytes and call [`digest`]; nothing else hashes state.

use sha2::{Digest, Sha256};

/// A canonical fingerprint of a puzzle state: raw SHA-256 digest bytes.
///
/// Fingerprints are the dedup key for the visited set, so they must be a
/// pure function of semantic state — never of the path that produced it.
/// Two states compare equal exactly when their fingerprints do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// The raw 32-byte digest.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex rendering of the digest (64 chars).
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// SHA-256 with domain prefix, returning a [`Fingerprint`].
///
/// `fingerprint = sha256(domain || data)`. Callers pass one of the
/// null-terminated `DOMAIN_*` constants declared by their adapter module.
#[must_use]
pub fn digest(domain: &[u8], data: &[u8]) -> Fingerprint {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let result = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&result);
    Fingerprint(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOMAIN_A: &[u8] = b"QUARRY::TEST_A::V1\0";
    const DOMAIN_B: &[u8] = b"QUARRY::TEST_B::V1\0";

    #[test]
    fn digest_is_deterministic() {
        let a = digest(DOMAIN_A, b"state bytes");
        let b = digest(DOMAIN_A, b"state bytes");
        assert_eq!(a, b, "same domain and data must produce same fingerprint");
    }

    #[test]
    fn digest_separates_domains() {
        let a = digest(DOMAIN_A, b"state bytes");
        let b = digest(DOMAIN_B, b"state bytes");
        assert_ne!(
            a, b,
            "same data under different domains must produce different fingerprints"
        );
    }

    #[test]
    fn hex_is_64_lowercase_chars() {
        let fp = digest(DOMAIN_A, b"x");
        let hex = fp.to_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn display_matches_to_hex() {
        let fp = digest(DOMAIN_A, b"y");
        assert_eq!(format!("{fp}"), fp.to_hex());
    }

    #[test]
    fn ordering_matches_byte_ordering() {
        let a = digest(DOMAIN_A, b"1");
        let b = digest(DOMAIN_A, b"2");
        assert_eq!(a.cmp(&b), a.as_bytes().cmp(b.as_bytes()));
    }
}
