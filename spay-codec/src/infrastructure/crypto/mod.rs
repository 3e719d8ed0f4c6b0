pub mod aes_gcm_cipher;
pub mod key_identifier;
pub mod key_wrap;
pub mod random;
