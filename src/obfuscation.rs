//! Salted hashing of secure attribute values.
use sha2::{Digest, Sha256};

/// Hash `input` the way SDKs hash secure attributes: SHA-256 over `salt` followed by `input`,
/// hex-encoded in lowercase.
pub fn sha256_hex(salt: &str, input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsalted_digest() {
        assert_eq!(
            sha256_hex("", "foo"),
            "2c26b46b68ffc68ff99b453c1d30413413422d706483bfa0f98a5e886266e7ae"
        );
    }

    #[test]
    fn salt_is_prepended() {
        assert_eq!(sha256_hex("f", "oo"), sha256_hex("", "foo"));
        assert_ne!(sha256_hex("salt", "foo"), sha256_hex("", "foosalt"));
    }

    #[test]
    fn lowercase_hex() {
        let digest = sha256_hex("salt", "bar");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }
}
