pub mod filesystem;
pub mod memory;
pub mod pem_keys;

pub use filesystem::FilesystemKeyProvider;
pub use memory::MemoryKeyProvider;
pub use pem_keys::KeyMaterialError;
