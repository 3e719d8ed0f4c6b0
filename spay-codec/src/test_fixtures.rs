//! Keys and recorded tokens shared by the unit tests.

use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};

pub const RECIPIENT_PRIVATE_PEM: &str = include_str!("../testdata/recipient_private.pem");
pub const RECIPIENT_PUBLIC_PEM: &str = include_str!("../testdata/recipient_public.pem");
pub const OTHER_PRIVATE_PEM: &str = include_str!("../testdata/other_private.pem");

pub const RECIPIENT_KID: &str = "BOtxf/GbQW9Lca7qnmZl4FcHFiE/AdZmYXWtx9j2KVk=";
pub const OTHER_KID: &str = "v2K2eu7yqJbxfajD/q0aqTQrUX5QXIX0rLvUre0t3WE=";

pub const CONTENT_KEY: [u8; 16] = [
    0x7d, 0xd8, 0x74, 0xae, 0x3b, 0x38, 0xe3, 0x79, 0xd9, 0x34, 0x91, 0x3c, 0x29, 0x81, 0x99, 0xfb,
];
pub const NONCE: [u8; 12] = [
    0xdb, 0x1f, 0xb1, 0xda, 0xf0, 0x85, 0xea, 0x32, 0x31, 0xea, 0xae, 0x0a,
];

/// Token captured from a wallet for a Visa card, sealed to the recipient key.
pub const VISA_WALLET_TOKEN: &str = "eyJhbGciOiJSU0ExXzUiLCJraWQiOiJCT3R4Zi9HYlFXOUxjYTdxbm1abDRGY0hGaUUvQWRabVlYV3R4OWoyS1ZrPSIsInR5cCI6IkpPU0UiLCJjaGFubmVsU2VjdXJpdHlDb250ZXh0IjoiUlNBX1BLSSIsImVuYyI6IkExMjhHQ00ifQ.fCkzRPNpcZtNMv0gsfBsZm_l_-4lVTrN9iI4UAmqmZ_FzsRWASwMkd54kPDZetTjsK1Ni4HG307qRDDBrSLty2RBvWBWRU5ywyYLDM2ee8vjBetEsDA8RQavXbZGxMLqOsaMk2D8nYV4iz91m3-DHCNbBIuth9BZQwpBFp77ducCT7v1MSpIuExhmuJurayL0XbsN2kSdBl0cw2tpzCOvMF9cX4VQc4a0ewA5PVWGDeC0wia92DctoIo_N5ZqamSctUloraO64BbKuWhwGbhGaRFx4U9mkSuJ2lLPNRIBwvq-vDXKA1cmdqs-iSRc40e-hVdK655TkDNk9xcCyN_aA.2x-x2vCF6jIx6q4K.EUtBZyTbI98gg0WREQAbJAoL-oQ6b9yN9uZRmv5lX8uDcj9NHADRTMP-Qhey32_kMtVDV2kGRTs9xmlbiNWQF46Wj8zpAigYrwb5AfYH7-OXBv-9dKKf49Gp2_07uKywTBmnOpfkf1FKKCRlzlnRQKVREwXxvft3LSRP87KGZc8jTn3kMcE-vdSJG2OK62yMwEGJ2cHV7PSl-uERqYs3BnDpuXmx-Ly84k9qXp1wpo-ArKYLqznQ_ubA.bFK6fe6IQprZZ1xErKxCvg";
pub const VISA_WALLET_PLAINTEXT: &str = r#"{"amount":"106000","cryptogram":"AwAABCQACCDLHvYBtQ9EgUUQYaA=","currency_code":"USD","eci_indicator":"05","tokenPanExpiration":"1127","utc":"1700557639934","tokenPAN":"4558386640000312"}"#;

/// Token captured from a wallet for a Mastercard card, sealed to the recipient key.
pub const MASTERCARD_WALLET_TOKEN: &str = "eyJhbGciOiJSU0ExXzUiLCJraWQiOiJCT3R4Zi9HYlFXOUxjYTdxbm1abDRGY0hGaUUvQWRabVlYV3R4OWoyS1ZrPSIsInR5cCI6IkpPU0UiLCJjaGFubmVsU2VjdXJpdHlDb250ZXh0IjoiUlNBX1BLSSIsImVuYyI6IkExMjhHQ00ifQ.oPMwMRdoM4aVonoTUXVouxqV-fuk9i7qwNDbOLrAI8z2Enn9AvwkJriBzitdlEXi91IyCcBqvoI-la3VHd1zHd257XJbIZWViLkYRh-IGmEXjM6C4XFRuS47PVal-bs98lSZW2Xsf3rR51Vjb_mKLDPLV5OzaMdajw1FL_GTyohedqmTGtFgaoIwo8DHa1Q9Iu4MWmnJWEwUdzUfWVcl0SpuqtGLbpJw4Zg6WxGxP8gx7DkTyqiVoiomJp6BtaZppInENT_q1uMuM_oukQeb_NneCTbnYRcD1hOaYcbZonztuE_Ty9i7iMztPH7LEd5prI990J2tdS9ROlOivD_d6A.qgCXv9WXbY-FDoTd.TNhZ_ImT-OPs-VH5A0VYny9XKvE9nANaWIPFvvIOQjCaBZ3gbpWpWPrfotnhPjw1h2-54PmN8U9NYMwSelEWxd3-Z5tuTlwT94NXw_VsIZMQ4Dm3feCFtq4xLEF3wuiaVGhVKKLtfVkLD-QPKQuaTWrJuUgYdjKYPdLjWZBX-wl9S72Qw7QQISju_o2hYz7hors-dDa4rGmt7vI7Y8O1DlO4ozdA3BD3jh5uV4e5vh4sl6avmSckjC8.UDU6UR0n7iuDYNPxgdQXzA";
pub const MASTERCARD_WALLET_PLAINTEXT: &str = r#"{"amount":"106000","currency_code":"USD","utc":"1700480649483","eci_indicator":"5","tokenPAN":"5214150084269830","tokenPanExpiration":"1126","cryptogram":"AILsL+OF38dxAAQSUy+FAoACFA=="}"#;

pub fn recipient_private_key() -> RsaPrivateKey {
    RsaPrivateKey::from_pkcs8_pem(RECIPIENT_PRIVATE_PEM).expect("recipient fixture key")
}

pub fn recipient_public_key() -> RsaPublicKey {
    RsaPublicKey::from_public_key_pem(RECIPIENT_PUBLIC_PEM).expect("recipient fixture public key")
}

pub fn other_private_key() -> RsaPrivateKey {
    RsaPrivateKey::from_pkcs8_pem(OTHER_PRIVATE_PEM).expect("other fixture key")
}
