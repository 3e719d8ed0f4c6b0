use rand::rngs::OsRng;
use rsa::{Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};
use zeroize::Zeroize;

use crate::domain::encryption::{ContentEncryptionKey, CONTENT_KEY_LEN};

#[derive(Debug, thiserror::Error)]
pub enum KeyUnwrapError {
    #[error("decrypting the key: {0}")]
    Rsa(#[source] rsa::Error),
    #[error("content key must be 16 bytes, found {found}")]
    ContentKeyLength { found: usize },
}

#[derive(Debug, thiserror::Error)]
#[error("encrypting the content key: {0}")]
pub struct KeyWrapError(#[source] pub rsa::Error);

/// Recovers the CEK from the encrypted-key segment with RSAES-PKCS1-v1_5.
///
/// The private-key operation is blinded. Padding failures are still
/// distinguishable from later AEAD failures by the caller, see DESIGN.md.
pub fn unwrap_content_key(
    private_key: &RsaPrivateKey,
    encrypted_key: &[u8],
) -> Result<ContentEncryptionKey, KeyUnwrapError> {
    let mut plain = private_key
        .decrypt_blinded(&mut OsRng, Pkcs1v15Encrypt, encrypted_key)
        .map_err(KeyUnwrapError::Rsa)?;

    let key: Result<[u8; CONTENT_KEY_LEN], _> = plain.as_slice().try_into();
    let found = plain.len();
    plain.zeroize();

    key.map(ContentEncryptionKey::new)
        .map_err(|_| KeyUnwrapError::ContentKeyLength { found })
}

/// Encrypts the CEK to the recipient with RSAES-PKCS1-v1_5.
pub fn wrap_content_key(
    public_key: &RsaPublicKey,
    key: &ContentEncryptionKey,
) -> Result<Vec<u8>, KeyWrapError> {
    public_key
        .encrypt(&mut OsRng, Pkcs1v15Encrypt, key.as_bytes())
        .map_err(KeyWrapError)
}
