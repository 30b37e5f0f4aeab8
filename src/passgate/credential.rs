//! Constant-time password check.

use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};
use std::fmt;
use subtle::ConstantTimeEq;

/// Compares submissions against the configured password.
///
/// Both sides are reduced to SHA-256 digests first so the comparison always
/// runs over 32 bytes, whatever the submitted length. The digests are then
/// compared with `subtle`, which does not stop at the first differing byte.
#[derive(Clone)]
pub struct CredentialVerifier {
    digest: [u8; 32],
}

impl CredentialVerifier {
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        Self {
            digest: digest(secret.expose_secret().as_bytes()),
        }
    }

    /// True only when `submitted` is exactly the configured password.
    #[must_use]
    pub fn verify(&self, submitted: &str) -> bool {
        digest(submitted.as_bytes())
            .as_slice()
            .ct_eq(self.digest.as_slice())
            .into()
    }
}

impl fmt::Debug for CredentialVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialVerifier")
            .field("digest", &"[REDACTED]")
            .finish()
    }
}

fn digest(bytes: &[u8]) -> [u8; 32] {
    Sha256::digest(bytes).into()
}
