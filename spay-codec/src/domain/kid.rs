use std::fmt;

/// Key identifier (`kid`) joining a token header to a private key.
///
/// - Derived as standard base64 of SHA-256 over the public key's DER
///   SubjectPublicKeyInfo; the derivation lives in
///   `infrastructure::crypto::key_identifier`.
/// - The domain treats it as an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Kid(String);

impl Kid {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Kid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Kid {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
