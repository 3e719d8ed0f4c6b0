use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroize;

use crate::domain::encryption::{
    ContentEncryptionKey, ContentKeyGenerator, NonceGenerator, RandomSourceError, CONTENT_KEY_LEN,
};
use crate::domain::token::NONCE_LEN;

/// CEK and nonce source backed by the operating system CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandomSource;

impl OsRandomSource {
    fn fill(bytes: &mut [u8]) -> Result<(), RandomSourceError> {
        OsRng
            .try_fill_bytes(bytes)
            .map_err(|e| RandomSourceError(e.to_string()))
    }
}

impl ContentKeyGenerator for OsRandomSource {
    fn generate_content_key(&self) -> Result<ContentEncryptionKey, RandomSourceError> {
        let mut key = [0u8; CONTENT_KEY_LEN];
        Self::fill(&mut key)?;
        let cek = ContentEncryptionKey::new(key);
        key.zeroize();
        Ok(cek)
    }
}

impl NonceGenerator for OsRandomSource {
    fn generate_nonce(&self) -> Result<[u8; NONCE_LEN], RandomSourceError> {
        let mut nonce = [0u8; NONCE_LEN];
        Self::fill(&mut nonce)?;
        Ok(nonce)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FixedSourceError {
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("{what} must be {expected} bytes, found {found}")]
    Length {
        what: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Always yields the same CEK and nonce. Only for reproducible fixtures:
/// reusing a nonce under one key breaks GCM.
#[derive(Debug, Clone)]
pub struct FixedSource {
    content_key: ContentEncryptionKey,
    nonce: [u8; NONCE_LEN],
}

impl FixedSource {
    pub fn new(content_key: [u8; CONTENT_KEY_LEN], nonce: [u8; NONCE_LEN]) -> Self {
        Self {
            content_key: ContentEncryptionKey::new(content_key),
            nonce,
        }
    }

    pub fn from_hex(content_key_hex: &str, nonce_hex: &str) -> Result<Self, FixedSourceError> {
        let content_key = decode_fixed::<CONTENT_KEY_LEN>("content key", content_key_hex)?;
        let nonce = decode_fixed::<NONCE_LEN>("nonce", nonce_hex)?;
        Ok(Self::new(content_key, nonce))
    }
}

fn decode_fixed<const N: usize>(
    what: &'static str,
    value: &str,
) -> Result<[u8; N], FixedSourceError> {
    let bytes = hex::decode(value)?;
    let found = bytes.len();
    bytes.try_into().map_err(|_| FixedSourceError::Length {
        what,
        expected: N,
        found,
    })
}

impl ContentKeyGenerator for FixedSource {
    fn generate_content_key(&self) -> Result<ContentEncryptionKey, RandomSourceError> {
        Ok(self.content_key.clone())
    }
}

impl NonceGenerator for FixedSource {
    fn generate_nonce(&self) -> Result<[u8; NONCE_LEN], RandomSourceError> {
        Ok(self.nonce)
    }
}
