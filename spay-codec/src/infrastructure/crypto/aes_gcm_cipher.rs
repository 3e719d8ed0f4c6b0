use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes128Gcm, Key, Nonce};

use crate::domain::encryption::ContentEncryptionKey;
use crate::domain::token::{NONCE_LEN, TAG_LEN};

#[derive(Debug, thiserror::Error)]
pub enum AeadError {
    /// Tag mismatch. Terminal: no plaintext is produced.
    #[error("opening GCM: authentication failed")]
    Authentication,
    #[error("sealing GCM failed")]
    Seal,
}

fn cipher(key: &ContentEncryptionKey) -> Aes128Gcm {
    Aes128Gcm::new(Key::<Aes128Gcm>::from_slice(key.as_bytes()))
}

/// AES-128-GCM open with no associated data.
///
/// The wire format carries ciphertext and tag as separate segments; they
/// are rejoined here into the `ciphertext || tag` layout the AEAD expects.
pub fn open(
    key: &ContentEncryptionKey,
    nonce: &[u8; NONCE_LEN],
    cipher_text: &[u8],
    tag: &[u8; TAG_LEN],
) -> Result<Vec<u8>, AeadError> {
    let mut sealed = Vec::with_capacity(cipher_text.len() + TAG_LEN);
    sealed.extend_from_slice(cipher_text);
    sealed.extend_from_slice(tag);

    cipher(key)
        .decrypt(Nonce::from_slice(nonce), sealed.as_slice())
        .map_err(|_| AeadError::Authentication)
}

/// AES-128-GCM seal with no associated data, returning `(ciphertext, tag)`.
pub fn seal(
    key: &ContentEncryptionKey,
    nonce: &[u8; NONCE_LEN],
    plaintext: &[u8],
) -> Result<(Vec<u8>, [u8; TAG_LEN]), AeadError> {
    let mut sealed = cipher(key)
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|_| AeadError::Seal)?;

    let split = sealed.len().checked_sub(TAG_LEN).ok_or(AeadError::Seal)?;
    let tag: [u8; TAG_LEN] = sealed[split..].try_into().map_err(|_| AeadError::Seal)?;
    sealed.truncate(split);
    Ok((sealed, tag))
}
