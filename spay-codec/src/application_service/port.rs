use std::path::PathBuf;
use std::sync::Arc;

use rsa::RsaPrivateKey;

use crate::domain::kid::Kid;
use crate::infrastructure::crypto::key_identifier::KeyIdentifierError;
use crate::infrastructure::key_provider::pem_keys::KeyMaterialError;

/// Port resolving a [`Kid`] to the recipient private key.
///
/// - `Ok(None)` means the provider does not hold the key. This is a normal
///   outcome (the key has to be provisioned out of band) and is kept apart
///   from `Err`, which reports a failing backend.
/// - Implementations are shared across threads; lookups may run
///   concurrently with each other.
pub trait KeyProvider: Send + Sync {
    fn get_key(&self, kid: &Kid) -> Result<Option<Arc<RsaPrivateKey>>, KeyProviderError>;

    /// Feature test for the optional [`KeyAdder`] capability.
    fn as_key_adder(&self) -> Option<&dyn KeyAdder> {
        None
    }
}

/// Optional capability of providers that accept new keys at runtime.
///
/// Adding a key is exclusive with respect to lookups on the same provider.
pub trait KeyAdder: Send + Sync {
    fn add_key(&self, key: RsaPrivateKey) -> Result<Kid, KeyProviderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum KeyProviderError {
    #[error("storage error: {0}")]
    Storage(String),

    #[error("key store root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid key material in {}: {source}", .path.display())]
    KeyMaterial {
        path: PathBuf,
        #[source]
        source: KeyMaterialError,
    },

    #[error(transparent)]
    KeyIdentifier(#[from] KeyIdentifierError),
}
