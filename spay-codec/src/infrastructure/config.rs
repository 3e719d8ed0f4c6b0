//! Configuration for the `spay-codec` command-line tool

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Default tracing filter, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Decryption settings
    #[serde(default)]
    pub decryptor: DecryptorConfig,

    /// Mock token settings
    #[serde(default)]
    pub mock: MockConfig,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            decryptor: DecryptorConfig::default(),
            mock: MockConfig::default(),
        }
    }
}

impl CodecConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecryptorConfig {
    /// Profile version passed to the decryptor registry
    #[serde(default = "default_version")]
    pub version: String,

    /// Directory of PKCS8 PEM private keys (optional)
    #[serde(default)]
    pub keys_dir: Option<PathBuf>,
}

impl Default for DecryptorConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            keys_dir: None,
        }
    }
}

fn default_version() -> String {
    "100".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockConfig {
    /// Test card brand: "visa", "mastercard" or "amex"
    #[serde(default = "default_brand")]
    pub brand: String,

    #[serde(default = "default_amount")]
    pub amount: String,

    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            amount: default_amount(),
            currency: default_currency(),
        }
    }
}

fn default_brand() -> String {
    "visa".to_string()
}

fn default_amount() -> String {
    "100".to_string()
}

fn default_currency() -> String {
    "SAR".to_string()
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Serialize error: {0}")]
    Serialize(String),
}
