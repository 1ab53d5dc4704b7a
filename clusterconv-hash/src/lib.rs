//! Hashing primitives shared across clusterconv crates.

use sha2::{Digest, Sha256};

/// Lowercase hex sha256 digest of `bytes`.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// True when `expected` is the hex sha256 digest of `bytes`. Case-insensitive.
pub fn digest_matches(bytes: &[u8], expected: &str) -> bool {
    sha256_hex(bytes).eq_ignore_ascii_case(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_of_empty_input() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn digest_matches_ignores_case() {
        let digest = sha256_hex(b"{}").to_uppercase();
        assert!(digest_matches(b"{}", &digest));
        assert!(!digest_matches(b"{ }", &digest));
    }
}
