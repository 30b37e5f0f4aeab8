//! Session token generation.

use base64ct::{Base64UrlUnpadded, Encoding};
use rand::{rngs::OsRng, RngCore};
use thiserror::Error;

const TOKEN_BYTES: usize = 32;

#[derive(Debug, Error)]
#[error("failed to generate session token: {0}")]
pub struct TokenError(#[from] rand::Error);

/// Produces session tokens from the operating system CSPRNG.
///
/// Tokens are 32 random bytes encoded as unpadded URL-safe base64, which is a
/// valid cookie value without escaping. A failing random source is reported
/// as an error; a weaker fallback is never used.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokenGenerator;

impl TokenGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Create a new session token.
    ///
    /// # Errors
    /// Returns an error if the operating system random source fails.
    pub fn new_token(&self) -> Result<String, TokenError> {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.try_fill_bytes(&mut bytes)?;
        Ok(Base64UrlUnpadded::encode_string(&bytes))
    }
}
