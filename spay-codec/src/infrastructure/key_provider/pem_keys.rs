use std::path::Path;

use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, LineEnding};
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::application_service::port::KeyProviderError;

pub const PRIVATE_KEY_TAG: &str = "PRIVATE KEY";
pub const PUBLIC_KEY_TAG: &str = "PUBLIC KEY";

#[derive(Debug, thiserror::Error)]
pub enum KeyMaterialError {
    #[error("invalid PEM: {0}")]
    Pem(#[from] pem::PemError),
    #[error("invalid PKCS8 private key: {0}")]
    Pkcs8(#[from] rsa::pkcs8::Error),
    #[error("invalid SubjectPublicKeyInfo: {0}")]
    Spki(#[from] rsa::pkcs8::spki::Error),
    #[error("no RSA key PEM block found")]
    NoKey,
}

/// Parses every unencrypted PKCS8 `PRIVATE KEY` block in `pem_bytes`.
///
/// Blocks with other labels (certificates, public keys) are skipped. A
/// `PRIVATE KEY` block that is not an RSA PKCS8 key is an error.
pub fn parse_private_keys(pem_bytes: &[u8]) -> Result<Vec<RsaPrivateKey>, KeyMaterialError> {
    let mut keys = Vec::new();
    for block in pem::parse_many(pem_bytes)? {
        if block.tag() != PRIVATE_KEY_TAG {
            tracing::trace!(tag = block.tag(), "skipping non private key PEM block");
            continue;
        }
        keys.push(RsaPrivateKey::from_pkcs8_der(block.contents())?);
    }
    Ok(keys)
}

/// Parses the first RSA key in `pem_bytes` as a public key.
///
/// Accepts a SubjectPublicKeyInfo `PUBLIC KEY` block or a PKCS8
/// `PRIVATE KEY` block, whose public half is returned.
pub fn parse_public_key(pem_bytes: &[u8]) -> Result<RsaPublicKey, KeyMaterialError> {
    for block in pem::parse_many(pem_bytes)? {
        match block.tag() {
            PUBLIC_KEY_TAG => return Ok(RsaPublicKey::from_public_key_der(block.contents())?),
            PRIVATE_KEY_TAG => {
                return Ok(RsaPrivateKey::from_pkcs8_der(block.contents())?.to_public_key())
            }
            _ => continue,
        }
    }
    Err(KeyMaterialError::NoKey)
}

pub fn read_private_keys(path: &Path) -> Result<Vec<RsaPrivateKey>, KeyProviderError> {
    let bytes = std::fs::read(path).map_err(|source| KeyProviderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_private_keys(&bytes).map_err(|source| KeyProviderError::KeyMaterial {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_public_key(path: &Path) -> Result<RsaPublicKey, KeyProviderError> {
    let bytes = std::fs::read(path).map_err(|source| KeyProviderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_public_key(&bytes).map_err(|source| KeyProviderError::KeyMaterial {
        path: path.to_path_buf(),
        source,
    })
}

/// PKCS8 `PRIVATE KEY` PEM with LF line endings.
pub fn encode_private_key(key: &RsaPrivateKey) -> Result<String, KeyMaterialError> {
    Ok(key.to_pkcs8_pem(LineEnding::LF)?.to_string())
}
