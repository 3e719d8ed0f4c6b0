use std::fmt;

use zeroize::Zeroize;

use crate::domain::token::NONCE_LEN;

/// Length of the A128GCM content encryption key.
pub const CONTENT_KEY_LEN: usize = 16;

/// Content encryption key (CEK) recovered from, or wrapped into, a token.
///
/// The key bytes are zeroed when the value is dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct ContentEncryptionKey([u8; CONTENT_KEY_LEN]);

impl ContentEncryptionKey {
    pub fn new(bytes: [u8; CONTENT_KEY_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; CONTENT_KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for ContentEncryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ContentEncryptionKey(..)")
    }
}

impl Zeroize for ContentEncryptionKey {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Drop for ContentEncryptionKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

#[derive(Debug, thiserror::Error)]
#[error("random source failure: {0}")]
pub struct RandomSourceError(pub String);

/// Port for drawing a fresh CEK when sealing a token.
pub trait ContentKeyGenerator {
    fn generate_content_key(&self) -> Result<ContentEncryptionKey, RandomSourceError>;
}

/// Port for drawing a fresh 12-byte AES-GCM nonce when sealing a token.
pub trait NonceGenerator {
    fn generate_nonce(&self) -> Result<[u8; NONCE_LEN], RandomSourceError>;
}
