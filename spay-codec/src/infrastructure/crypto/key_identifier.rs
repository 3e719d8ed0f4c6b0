use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use rsa::pkcs8::EncodePublicKey;
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256};

use crate::domain::kid::Kid;

#[derive(Debug, thiserror::Error)]
pub enum KeyIdentifierError {
    #[error("encoding SubjectPublicKeyInfo: {0}")]
    Spki(#[from] rsa::pkcs8::spki::Error),
}

/// SHA-256 over the DER SubjectPublicKeyInfo of `key`.
///
/// The RSA algorithm identifier is encoded with NULL parameters, so equal
/// keys always hash identically.
pub fn spki_digest(key: &RsaPublicKey) -> Result<[u8; 32], KeyIdentifierError> {
    let der = key.to_public_key_der()?;
    Ok(Sha256::digest(der.as_bytes()).into())
}

/// `base64(SHA-256(DER(SPKI(key))))` with the padded standard alphabet.
pub fn kid_from_public_key(key: &RsaPublicKey) -> Result<Kid, KeyIdentifierError> {
    Ok(Kid::new(BASE64_STANDARD.encode(spki_digest(key)?)))
}

pub fn kid_from_private_key(key: &RsaPrivateKey) -> Result<Kid, KeyIdentifierError> {
    kid_from_public_key(&key.to_public_key())
}
