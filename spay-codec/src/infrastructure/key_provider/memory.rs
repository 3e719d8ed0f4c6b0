use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use rsa::RsaPrivateKey;

use crate::application_service::port::{KeyAdder, KeyProvider, KeyProviderError};
use crate::domain::kid::Kid;
use crate::infrastructure::crypto::key_identifier::kid_from_private_key;

/// Keeps private keys in a process-local map keyed by [`Kid`].
///
/// - Nothing is persisted; keys are gone when the process exits.
/// - Clones share the same map, so a key added through one clone is seen
///   by every decryptor holding another.
#[derive(Clone, Default)]
pub struct MemoryKeyProvider {
    inner: Arc<RwLock<HashMap<Kid, Arc<RsaPrivateKey>>>>,
}

impl MemoryKeyProvider {
    pub fn new(keys: impl IntoIterator<Item = RsaPrivateKey>) -> Result<Self, KeyProviderError> {
        let mut map = HashMap::new();
        for key in keys {
            map.insert(kid_from_private_key(&key)?, Arc::new(key));
        }
        Ok(Self {
            inner: Arc::new(RwLock::new(map)),
        })
    }

    /// Kids currently held, sorted.
    pub fn kids(&self) -> Result<Vec<Kid>, KeyProviderError> {
        let guard = self
            .inner
            .read()
            .map_err(|e| KeyProviderError::Storage(e.to_string()))?;
        let mut kids: Vec<Kid> = guard.keys().cloned().collect();
        kids.sort();
        Ok(kids)
    }
}

impl KeyProvider for MemoryKeyProvider {
    fn get_key(&self, kid: &Kid) -> Result<Option<Arc<RsaPrivateKey>>, KeyProviderError> {
        let guard = self
            .inner
            .read()
            .map_err(|e| KeyProviderError::Storage(e.to_string()))?;
        Ok(guard.get(kid).cloned())
    }

    fn as_key_adder(&self) -> Option<&dyn KeyAdder> {
        Some(self)
    }
}

impl KeyAdder for MemoryKeyProvider {
    fn add_key(&self, key: RsaPrivateKey) -> Result<Kid, KeyProviderError> {
        let kid = kid_from_private_key(&key)?;
        let mut guard = self
            .inner
            .write()
            .map_err(|e| KeyProviderError::Storage(e.to_string()))?;
        guard.insert(kid.clone(), Arc::new(key));
        tracing::debug!(%kid, "added key to memory provider");
        Ok(kid)
    }
}
