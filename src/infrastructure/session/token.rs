//! Session token generation
//!
//! Tokens are opaque bearer credentials: 32 random bytes, URL-safe base64
//! without padding. They are stored exactly as issued and compared in
//! constant time.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use rand::RngCore;

/// Number of random bytes per token
const TOKEN_BYTES: usize = 32;

/// Generator for opaque session tokens
#[derive(Debug, Clone, Default)]
pub struct TokenGenerator;

impl TokenGenerator {
    /// Create a new token generator
    pub fn new() -> Self {
        Self
    }

    /// Generate a fresh session token
    pub fn generate(&self) -> String {
        let mut random_bytes = [0u8; TOKEN_BYTES];
        rand::thread_rng().fill_bytes(&mut random_bytes);

        URL_SAFE_NO_PAD.encode(random_bytes)
    }
}

/// Constant-time token comparison to prevent timing attacks
pub fn tokens_match(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut result = 0u8;

    for i in 0..a.len() {
        result |= a_bytes[i] ^ b_bytes[i];
    }

    result == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_length() {
        let generator = TokenGenerator::new();
        let token = generator.generate();

        // 32 bytes base64-encoded without padding = 43 chars
        assert_eq!(token.len(), 43);
    }

    #[test]
    fn test_token_uniqueness() {
        let generator = TokenGenerator::new();

        let token1 = generator.generate();
        let token2 = generator.generate();

        assert_ne!(token1, token2);
    }

    #[test]
    fn test_token_is_url_safe() {
        let generator = TokenGenerator::new();
        let token = generator.generate();

        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_tokens_match() {
        assert!(tokens_match("abc123", "abc123"));
        assert!(!tokens_match("abc123", "abc124"));
    }

    #[test]
    fn test_tokens_match_length_mismatch() {
        assert!(!tokens_match("abc", "abcd"));
        assert!(!tokens_match("", "a"));
    }
}
