pub mod decryptor;
pub mod decryptor_registry;
pub mod encryptor;
pub mod mock_token;
pub mod port;

pub use decryptor::{DecryptError, Decryptor, RsaA128GcmDecryptorV100};
pub use decryptor_registry::{new_decryptor, DecryptorConstructor, DecryptorRegistry};
pub use encryptor::{seal_token, seal_token_v100, EncodeError};
pub use mock_token::{MockToken, MockTokenBuilder, TestCard, UnknownTestCard};
pub use port::{KeyAdder, KeyProvider, KeyProviderError};
