pub mod credential;
pub mod encryption;
pub mod header;
pub mod kid;
pub mod token;

pub use credential::PaymentCredential;
pub use encryption::{
    ContentEncryptionKey, ContentKeyGenerator, NonceGenerator, RandomSourceError, CONTENT_KEY_LEN,
};
pub use header::{JweHeader, Profile, PROFILE_V100};
pub use kid::Kid;
pub use token::{CompactToken, FormatError, Segment, NONCE_LEN, SEGMENT_COUNT, TAG_LEN};
