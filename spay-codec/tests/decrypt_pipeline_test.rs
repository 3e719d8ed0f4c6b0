//! End-to-end tests of the decrypt pipeline against the reciprocal encoder
//! and tokens captured from real wallets.

mod common;

use rand::rngs::OsRng;
use rsa::RsaPrivateKey;
use spay_codec::domain::token::Segment;
use spay_codec::{
    new_decryptor, seal_token_v100, CompactToken, CompactTokenCodec, DecryptError, FixedSource,
    FormatError, MockTokenBuilder, OsRandomSource, PaymentCredential, TestCard,
};

fn scenario_credential() -> PaymentCredential {
    PaymentCredential {
        amount: "100".to_string(),
        currency_code: "SAR".to_string(),
        utc: "1700000000000".to_string(),
        eci_indicator: "02".to_string(),
        token_pan: "340353278080900".to_string(),
        token_pan_expiration: "0139".to_string(),
        cryptogram: "AAAAAAAALJI6DbfqRzUcwAC6gAAGhgEDoLABAAhAgAABAAAAMlkUxA==".to_string(),
    }
}

fn flip_bit(token: &str, segment: Segment, byte: usize, bit: u8) -> String {
    let decoded = CompactTokenCodec::decode(token.as_bytes()).unwrap();
    let mut segments: Vec<Vec<u8>> = decoded.segments().iter().map(|s| s.to_vec()).collect();
    segments[segment.index()][byte] ^= 1 << bit;
    let tampered = CompactToken::from_segments(segments.try_into().unwrap()).unwrap();
    CompactTokenCodec::encode(&tampered)
}

#[test]
fn test_fixed_scenario_round_trips_byte_for_byte() {
    let credential = scenario_credential();
    let plaintext = credential.to_json_vec().unwrap();
    let source = FixedSource::from_hex(common::CONTENT_KEY_HEX, common::NONCE_HEX).unwrap();

    let token = seal_token_v100(
        &plaintext,
        &common::recipient_private_key().to_public_key(),
        &source,
        &source,
    )
    .unwrap();

    let decryptor =
        new_decryptor("100", common::memory_provider(vec![common::recipient_private_key()]))
            .unwrap();
    assert_eq!(decryptor.decrypt(token.as_bytes()).unwrap(), plaintext);
    assert_eq!(
        decryptor.decrypt_credential(token.as_bytes()).unwrap(),
        credential
    );
}

#[test]
fn test_round_trip_arbitrary_plaintexts() {
    let public_key = common::recipient_private_key().to_public_key();
    let decryptor =
        new_decryptor("100", common::memory_provider(vec![common::recipient_private_key()]))
            .unwrap();

    let long = vec![b'x'; 4096];
    let plaintexts: [&[u8]; 4] = [b"", b"{}", b"not even json", &long];
    for plaintext in plaintexts {
        let token =
            seal_token_v100(plaintext, &public_key, &OsRandomSource, &OsRandomSource).unwrap();
        assert_eq!(decryptor.decrypt(token.as_bytes()).unwrap(), plaintext);
    }
}

#[test]
fn test_fresh_keypairs_round_trip() {
    let plaintext = scenario_credential().to_json_vec().unwrap();
    for bits in [1024, 2048, 3072] {
        let key = RsaPrivateKey::new(&mut OsRng, bits).unwrap();
        let token = seal_token_v100(
            &plaintext,
            &key.to_public_key(),
            &OsRandomSource,
            &OsRandomSource,
        )
        .unwrap();

        let decryptor = new_decryptor("100", common::memory_provider(vec![key])).unwrap();
        assert_eq!(
            decryptor.decrypt(token.as_bytes()).unwrap(),
            plaintext,
            "{bits}-bit key"
        );
    }
}

#[test]
fn test_wallet_token_decrypts() {
    let decryptor =
        new_decryptor("100", common::memory_provider(vec![common::recipient_private_key()]))
            .unwrap();
    let plaintext = decryptor
        .decrypt(common::VISA_WALLET_TOKEN.as_bytes())
        .unwrap();
    assert_eq!(plaintext, common::VISA_WALLET_PLAINTEXT.as_bytes());
}

#[test]
fn test_tag_and_ciphertext_bit_flips_fail_authentication() {
    let decryptor =
        new_decryptor("100", common::memory_provider(vec![common::recipient_private_key()]))
            .unwrap();
    let mock = MockTokenBuilder::for_private_key(&common::recipient_private_key())
        .card(TestCard::Mastercard)
        .build()
        .unwrap();
    let cipher_len = CompactTokenCodec::decode(mock.token.as_bytes())
        .unwrap()
        .cipher_text()
        .len();

    let mut cases = Vec::new();
    for byte in [0, 7, 15] {
        for bit in 0..8 {
            cases.push((Segment::Tag, byte, bit));
        }
    }
    for byte in [0, cipher_len / 2, cipher_len - 1] {
        for bit in [0, 3, 7] {
            cases.push((Segment::CipherText, byte, bit));
        }
    }

    for (segment, byte, bit) in cases {
        let tampered = flip_bit(&mock.token, segment, byte, bit);
        let err = decryptor.decrypt(tampered.as_bytes()).unwrap_err();
        assert!(
            matches!(err, DecryptError::Authentication),
            "{segment} byte {byte} bit {bit} gave {err:?}"
        );
    }
}

#[test]
fn test_wrong_segment_count_never_panics() {
    let decryptor =
        new_decryptor("100", common::memory_provider(vec![common::recipient_private_key()]))
            .unwrap();
    let segments: Vec<&str> = common::VISA_WALLET_TOKEN.split('.').collect();

    for count in [0, 1, 2, 3, 4, 6, 7] {
        let token = (0..count)
            .map(|i| segments[i % segments.len()])
            .collect::<Vec<_>>()
            .join(".");
        let err = decryptor.decrypt(token.as_bytes()).unwrap_err();
        assert!(
            matches!(err, DecryptError::Format(FormatError::SegmentCount { .. })),
            "{count} segments gave {err:?}"
        );
    }
}

#[test]
fn test_unknown_kid_is_reported_with_kid() {
    let decryptor =
        new_decryptor("100", common::memory_provider(vec![common::other_private_key()])).unwrap();
    match decryptor.decrypt(common::VISA_WALLET_TOKEN.as_bytes()) {
        Err(DecryptError::KeyNotFound { kid }) => assert_eq!(kid.as_str(), common::RECIPIENT_KID),
        other => panic!("expected KeyNotFound, got {other:?}"),
    }
}

#[test]
fn test_key_wrapped_for_another_recipient_is_rejected() {
    // Sealed to the other key but labelled with the recipient's kid.
    let other = MockTokenBuilder::for_private_key(&common::other_private_key())
        .build()
        .unwrap();
    let (_, other_rest) = other.token.split_once('.').unwrap();
    let (recipient_header, _) = common::VISA_WALLET_TOKEN.split_once('.').unwrap();
    let relabelled = format!("{recipient_header}.{other_rest}");

    let decryptor =
        new_decryptor("100", common::memory_provider(vec![common::recipient_private_key()]))
            .unwrap();
    let err = decryptor.decrypt(relabelled.as_bytes()).unwrap_err();
    // PKCS#1 v1.5 under the wrong key almost always fails the padding check;
    // a lucky parse still cannot produce the right CEK.
    assert!(
        matches!(
            err,
            DecryptError::KeyUnwrap(_) | DecryptError::Authentication
        ),
        "{err:?}"
    );
}

#[test]
fn test_version_200_is_unsupported() {
    let err = new_decryptor("200", common::memory_provider(vec![]))
        .err()
        .unwrap();
    assert!(matches!(err, DecryptError::UnsupportedVersion(ref v) if v == "200"));
}

#[test]
fn test_token_with_surrounding_whitespace_is_rejected() {
    let decryptor =
        new_decryptor("100", common::memory_provider(vec![common::recipient_private_key()]))
            .unwrap();
    for token in [
        format!("{}\n", common::VISA_WALLET_TOKEN),
        format!("{} ", common::VISA_WALLET_TOKEN),
        format!("{}\r\n\t  ", common::VISA_WALLET_TOKEN),
        format!("  {}", common::VISA_WALLET_TOKEN),
    ] {
        let err = decryptor.decrypt(token.as_bytes()).unwrap_err();
        assert!(
            matches!(err, DecryptError::Format(FormatError::Base64 { .. })),
            "{token:?} gave {err:?}"
        );
    }
}
