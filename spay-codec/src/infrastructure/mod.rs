pub mod compact_codec;
pub mod config;
pub mod crypto;
pub mod key_provider;

pub use compact_codec::CompactTokenCodec;
pub use config::{CodecConfig, ConfigError};
pub use key_provider::{FilesystemKeyProvider, MemoryKeyProvider};
