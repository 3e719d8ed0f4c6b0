use std::sync::Arc;

use crate::application_service::port::{KeyProvider, KeyProviderError};
use crate::domain::credential::PaymentCredential;
use crate::domain::header::{JweHeader, Profile, PROFILE_V100};
use crate::domain::kid::Kid;
use crate::domain::token::FormatError;
use crate::infrastructure::compact_codec::CompactTokenCodec;
use crate::infrastructure::crypto::aes_gcm_cipher::{self, AeadError};
use crate::infrastructure::crypto::key_wrap::{self, KeyUnwrapError};

/// Decrypts compact tokens of one algorithm profile.
///
/// Implementations are stateless apart from their key provider and may be
/// shared across threads.
pub trait Decryptor: Send + Sync {
    /// Profile version this decryptor was registered under.
    fn version(&self) -> &str;

    /// Returns the plaintext credential bytes exactly as sealed.
    fn decrypt(&self, token: &[u8]) -> Result<Vec<u8>, DecryptError>;

    fn decrypt_credential(&self, token: &[u8]) -> Result<PaymentCredential, DecryptError> {
        let plaintext = self.decrypt(token)?;
        PaymentCredential::from_json_slice(&plaintext).map_err(DecryptError::Credential)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DecryptError {
    #[error("malformed token: {0}")]
    Format(#[from] FormatError),

    #[error("no key for kid {kid}")]
    KeyNotFound { kid: Kid },

    #[error("key provider: {0}")]
    KeyProvider(#[from] KeyProviderError),

    #[error("unwrapping content key: {0}")]
    KeyUnwrap(#[from] KeyUnwrapError),

    #[error("authentication failed")]
    Authentication,

    #[error("unsupported decryptor version {0:?}")]
    UnsupportedVersion(String),

    #[error("plaintext is not a payment credential: {0}")]
    Credential(#[source] serde_json::Error),
}

impl From<AeadError> for DecryptError {
    fn from(_: AeadError) -> Self {
        DecryptError::Authentication
    }
}

/// Profile "100": RSA1_5 key wrap, A128GCM content encryption, no AAD.
pub struct RsaA128GcmDecryptorV100 {
    provider: Arc<dyn KeyProvider>,
}

impl RsaA128GcmDecryptorV100 {
    pub const PROFILE: Profile = PROFILE_V100;

    pub fn new(provider: Arc<dyn KeyProvider>) -> Self {
        Self { provider }
    }
}

impl Decryptor for RsaA128GcmDecryptorV100 {
    fn version(&self) -> &str {
        Self::PROFILE.version
    }

    fn decrypt(&self, token: &[u8]) -> Result<Vec<u8>, DecryptError> {
        let token = CompactTokenCodec::decode(token)?;
        let header = JweHeader::from_json_slice(token.header())?;
        header.ensure_profile(&Self::PROFILE)?;
        let kid = header.kid()?;

        let Some(private_key) = self.provider.get_key(&kid)? else {
            tracing::debug!(%kid, "no key for token");
            return Err(DecryptError::KeyNotFound { kid });
        };

        let content_key = key_wrap::unwrap_content_key(&private_key, token.encrypted_key())
            .inspect_err(|e| tracing::debug!(%kid, error = %e, "content key unwrap failed"))?;

        let plaintext =
            aes_gcm_cipher::open(&content_key, token.nonce(), token.cipher_text(), token.tag())
                .inspect_err(|_| tracing::warn!(%kid, "token failed authentication"))?;

        tracing::debug!(%kid, len = plaintext.len(), "decrypted token");
        Ok(plaintext)
    }
}
