//! Opaque session-token generation.
//!
//! A session token is a bearer credential with no decodable structure:
//! validity is determined solely by looking it up against the user record
//! and comparing the stored expiry.

use rand::Rng;

/// Number of random bytes in a session token (64 hex characters).
pub const SESSION_TOKEN_BYTES: usize = 32;

/// Generates a new opaque session token from OS-seeded randomness.
pub fn generate_session_token() -> String {
    let bytes: [u8; SESSION_TOKEN_BYTES] = rand::thread_rng().gen();
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_64_hex_chars() {
        let token = generate_session_token();
        assert_eq!(token.len(), SESSION_TOKEN_BYTES * 2);
        assert!(hex::decode(&token).is_ok());
    }

    #[test]
    fn tokens_are_unique() {
        let token1 = generate_session_token();
        let token2 = generate_session_token();
        assert_ne!(token1, token2);
    }

    #[test]
    fn token_has_no_separator_characters() {
        // Tokens travel in an Authorization header; they must be a single
        // unbroken word.
        let token = generate_session_token();
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
