use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rsa::RsaPrivateKey;

use crate::application_service::port::{KeyAdder, KeyProvider, KeyProviderError};
use crate::domain::kid::Kid;
use crate::infrastructure::crypto::key_identifier::{kid_from_private_key, spki_digest};
use crate::infrastructure::key_provider::pem_keys;

const KEY_FILE_EXTENSION: &str = "pem";

/// Private keys stored as PKCS8 PEM files in one directory.
///
/// - `open` reads every regular file directly under the root once and
///   indexes `Kid -> file`. Subdirectories are not descended into.
/// - A file may hold several `PRIVATE KEY` blocks.
/// - Key material is never cached: each lookup re-reads and re-parses the
///   indexed file, so a rotated or deleted file takes effect immediately.
///   A file that disappeared, or no longer holds the requested key, makes
///   the lookup report the key as absent.
/// - Lookups share the index lock; `add_key` takes it exclusively for the
///   file write and the index update.
pub struct FilesystemKeyProvider {
    root: PathBuf,
    index: RwLock<HashMap<Kid, PathBuf>>,
}

impl FilesystemKeyProvider {
    pub fn open(root: impl AsRef<Path>) -> Result<Self, KeyProviderError> {
        let root = root.as_ref().to_path_buf();
        let metadata = std::fs::metadata(&root).map_err(|source| KeyProviderError::Io {
            path: root.clone(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(KeyProviderError::NotADirectory(root));
        }

        let mut files = Vec::new();
        let entries = std::fs::read_dir(&root).map_err(|source| KeyProviderError::Io {
            path: root.clone(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| KeyProviderError::Io {
                path: root.clone(),
                source,
            })?;
            let path = entry.path();
            if path.is_file() {
                files.push(path);
            }
        }
        // Later files win when two hold the same key.
        files.sort();

        let mut index = HashMap::new();
        for path in files {
            for key in pem_keys::read_private_keys(&path)? {
                let kid = kid_from_private_key(&key)?;
                tracing::debug!(%kid, path = %path.display(), "indexed key");
                index.insert(kid, path.clone());
            }
        }
        tracing::info!(root = %root.display(), keys = index.len(), "opened key directory");

        Ok(Self {
            root,
            index: RwLock::new(index),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Kids found at `open` plus those added since, sorted.
    pub fn kids(&self) -> Result<Vec<Kid>, KeyProviderError> {
        let guard = self
            .index
            .read()
            .map_err(|e| KeyProviderError::Storage(e.to_string()))?;
        let mut kids: Vec<Kid> = guard.keys().cloned().collect();
        kids.sort();
        Ok(kids)
    }

    /// File name used by `add_key`. The standard-alphabet Kid may contain
    /// '/', so the digest is spelled with the URL-safe alphabet instead.
    fn file_name_for(key: &RsaPrivateKey) -> Result<String, KeyProviderError> {
        let digest = spki_digest(&key.to_public_key())?;
        Ok(format!(
            "{}.{KEY_FILE_EXTENSION}",
            URL_SAFE_NO_PAD.encode(digest)
        ))
    }
}

impl KeyProvider for FilesystemKeyProvider {
    fn get_key(&self, kid: &Kid) -> Result<Option<Arc<RsaPrivateKey>>, KeyProviderError> {
        let guard = self
            .index
            .read()
            .map_err(|e| KeyProviderError::Storage(e.to_string()))?;
        let Some(path) = guard.get(kid) else {
            return Ok(None);
        };

        let keys = match pem_keys::read_private_keys(path) {
            Ok(keys) => keys,
            Err(KeyProviderError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                tracing::warn!(%kid, path = %path.display(), "indexed key file is gone");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        for key in keys {
            if kid_from_private_key(&key)? == *kid {
                return Ok(Some(Arc::new(key)));
            }
        }
        tracing::warn!(%kid, path = %path.display(), "indexed key file no longer holds the key");
        Ok(None)
    }

    fn as_key_adder(&self) -> Option<&dyn KeyAdder> {
        Some(self)
    }
}

impl KeyAdder for FilesystemKeyProvider {
    fn add_key(&self, key: RsaPrivateKey) -> Result<Kid, KeyProviderError> {
        let kid = kid_from_private_key(&key)?;
        let path = self.root.join(Self::file_name_for(&key)?);
        let pem = pem_keys::encode_private_key(&key).map_err(|source| {
            KeyProviderError::KeyMaterial {
                path: path.clone(),
                source,
            }
        })?;

        let mut guard = self
            .index
            .write()
            .map_err(|e| KeyProviderError::Storage(e.to_string()))?;
        std::fs::write(&path, pem.as_bytes()).map_err(|source| KeyProviderError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::info!(%kid, path = %path.display(), "stored key");
        guard.insert(kid.clone(), path);
        Ok(kid)
    }
}
