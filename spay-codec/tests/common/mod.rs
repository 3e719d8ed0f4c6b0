//! Fixtures shared by the integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use rsa::pkcs8::DecodePrivateKey;
use rsa::RsaPrivateKey;
use spay_codec::{KeyProvider, MemoryKeyProvider};

pub const RECIPIENT_PRIVATE_PEM: &str = include_str!("../../testdata/recipient_private.pem");
pub const OTHER_PRIVATE_PEM: &str = include_str!("../../testdata/other_private.pem");

pub const RECIPIENT_KID: &str = "BOtxf/GbQW9Lca7qnmZl4FcHFiE/AdZmYXWtx9j2KVk=";
pub const OTHER_KID: &str = "v2K2eu7yqJbxfajD/q0aqTQrUX5QXIX0rLvUre0t3WE=";

pub const CONTENT_KEY_HEX: &str = "7dd874ae3b38e379d934913c298199fb";
pub const NONCE_HEX: &str = "db1fb1daf085ea3231eaae0a";

pub const VISA_WALLET_TOKEN: &str = "eyJhbGciOiJSU0ExXzUiLCJraWQiOiJCT3R4Zi9HYlFXOUxjYTdxbm1abDRGY0hGaUUvQWRabVlYV3R4OWoyS1ZrPSIsInR5cCI6IkpPU0UiLCJjaGFubmVsU2VjdXJpdHlDb250ZXh0IjoiUlNBX1BLSSIsImVuYyI6IkExMjhHQ00ifQ.fCkzRPNpcZtNMv0gsfBsZm_l_-4lVTrN9iI4UAmqmZ_FzsRWASwMkd54kPDZetTjsK1Ni4HG307qRDDBrSLty2RBvWBWRU5ywyYLDM2ee8vjBetEsDA8RQavXbZGxMLqOsaMk2D8nYV4iz91m3-DHCNbBIuth9BZQwpBFp77ducCT7v1MSpIuExhmuJurayL0XbsN2kSdBl0cw2tpzCOvMF9cX4VQc4a0ewA5PVWGDeC0wia92DctoIo_N5ZqamSctUloraO64BbKuWhwGbhGaRFx4U9mkSuJ2lLPNRIBwvq-vDXKA1cmdqs-iSRc40e-hVdK655TkDNk9xcCyN_aA.2x-x2vCF6jIx6q4K.EUtBZyTbI98gg0WREQAbJAoL-oQ6b9yN9uZRmv5lX8uDcj9NHADRTMP-Qhey32_kMtVDV2kGRTs9xmlbiNWQF46Wj8zpAigYrwb5AfYH7-OXBv-9dKKf49Gp2_07uKywTBmnOpfkf1FKKCRlzlnRQKVREwXxvft3LSRP87KGZc8jTn3kMcE-vdSJG2OK62yMwEGJ2cHV7PSl-uERqYs3BnDpuXmx-Ly84k9qXp1wpo-ArKYLqznQ_ubA.bFK6fe6IQprZZ1xErKxCvg";
pub const VISA_WALLET_PLAINTEXT: &str = r#"{"amount":"106000","cryptogram":"AwAABCQACCDLHvYBtQ9EgUUQYaA=","currency_code":"USD","eci_indicator":"05","tokenPanExpiration":"1127","utc":"1700557639934","tokenPAN":"4558386640000312"}"#;

pub fn recipient_private_key() -> RsaPrivateKey {
    RsaPrivateKey::from_pkcs8_pem(RECIPIENT_PRIVATE_PEM).unwrap()
}

pub fn other_private_key() -> RsaPrivateKey {
    RsaPrivateKey::from_pkcs8_pem(OTHER_PRIVATE_PEM).unwrap()
}

pub fn memory_provider(keys: Vec<RsaPrivateKey>) -> Arc<dyn KeyProvider> {
    Arc::new(MemoryKeyProvider::new(keys).unwrap())
}

pub fn testdata_dir(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata/fs")
        .join(name)
}
