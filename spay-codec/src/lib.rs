//! Decoder for the compact "3DS JWE" payment credential tokens issued by
//! mobile wallets, plus the reciprocal encoder used to mint test tokens.
//!
//! ```no_run
//! use std::sync::Arc;
//! use spay_codec::{new_decryptor, FilesystemKeyProvider};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = Arc::new(FilesystemKeyProvider::open("/etc/spay/keys")?);
//! let decryptor = new_decryptor("100", provider)?;
//! let credential = decryptor.decrypt_credential(b"eyJhbGciOi...")?;
//! println!("{}", credential.token_pan);
//! # Ok(())
//! # }
//! ```

pub mod application_service;
pub mod domain;
pub mod infrastructure;

#[cfg(test)]
mod test_fixtures;

pub use application_service::{
    new_decryptor, seal_token, seal_token_v100, DecryptError, Decryptor, DecryptorConstructor,
    DecryptorRegistry, EncodeError, KeyAdder, KeyProvider, KeyProviderError, MockToken,
    MockTokenBuilder, RsaA128GcmDecryptorV100, TestCard,
};
pub use domain::{
    CompactToken, FormatError, JweHeader, Kid, PaymentCredential, Profile, Segment, PROFILE_V100,
};
pub use infrastructure::crypto::key_identifier::{kid_from_private_key, kid_from_public_key};
pub use infrastructure::crypto::random::{FixedSource, OsRandomSource};
pub use infrastructure::{
    CodecConfig, CompactTokenCodec, ConfigError, FilesystemKeyProvider, MemoryKeyProvider,
};
