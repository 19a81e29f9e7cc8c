use crate::domain::ports::TokenGenerator;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Hash-based token generator: sha256 over the group id plus 32 fresh
/// random bytes, hex-encoded. The stored token is not reconstructible from
/// its inputs, and two calls for the same group differ with overwhelming
/// probability.
#[derive(Debug, Clone, Default)]
pub struct HashTokenGenerator;

impl HashTokenGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl TokenGenerator for HashTokenGenerator {
    fn generate(&self, group_id: &str) -> String {
        let mut nonce = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut nonce);

        let mut hasher = Sha256::new();
        hasher.update(group_id.as_bytes());
        hasher.update(nonce);
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_differ_per_call_for_same_group() {
        let generator = HashTokenGenerator::new();
        let a = generator.generate("acme");
        let b = generator.generate("acme");
        assert_ne!(a, b);
    }

    #[test]
    fn test_token_is_hex_sha256_digest() {
        let token = HashTokenGenerator::new().generate("acme");
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
