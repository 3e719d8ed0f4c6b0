use std::collections::HashMap;
use std::sync::Arc;

use crate::application_service::decryptor::{DecryptError, Decryptor, RsaA128GcmDecryptorV100};
use crate::application_service::port::KeyProvider;

/// Builds a decryptor for one profile around a key provider.
pub type DecryptorConstructor = fn(Arc<dyn KeyProvider>) -> Box<dyn Decryptor>;

/// Maps a profile version tag to the constructor of its decryptor.
///
/// Adding a profile is a `register` call; existing profiles are never
/// touched, so tokens of older versions keep decrypting.
#[derive(Clone, Default)]
pub struct DecryptorRegistry {
    constructors: HashMap<String, DecryptorConstructor>,
}

impl DecryptorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in profile.
    pub fn with_default_profiles() -> Self {
        let mut registry = Self::new();
        registry.register(RsaA128GcmDecryptorV100::PROFILE.version, |provider| {
            Box::new(RsaA128GcmDecryptorV100::new(provider))
        });
        registry
    }

    /// Registers `constructor` under `version`, replacing any previous one.
    pub fn register(&mut self, version: impl Into<String>, constructor: DecryptorConstructor) {
        self.constructors.insert(version.into(), constructor);
    }

    /// Fails with [`DecryptError::UnsupportedVersion`] before touching the
    /// provider when `version` is unknown.
    pub fn create(
        &self,
        version: &str,
        provider: Arc<dyn KeyProvider>,
    ) -> Result<Box<dyn Decryptor>, DecryptError> {
        let constructor = self
            .constructors
            .get(version)
            .ok_or_else(|| DecryptError::UnsupportedVersion(version.to_string()))?;
        tracing::debug!(version, "created decryptor");
        Ok(constructor(provider))
    }

    /// Registered versions, sorted.
    pub fn versions(&self) -> Vec<&str> {
        let mut versions: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        versions.sort_unstable();
        versions
    }
}

/// Creates a decryptor for `version` from the built-in profiles.
pub fn new_decryptor(
    version: &str,
    provider: Arc<dyn KeyProvider>,
) -> Result<Box<dyn Decryptor>, DecryptError> {
    DecryptorRegistry::with_default_profiles().create(version, provider)
}
