use rsa::RsaPublicKey;

use crate::domain::encryption::{ContentKeyGenerator, NonceGenerator, RandomSourceError};
use crate::domain::header::{JweHeader, Profile, PROFILE_V100};
use crate::domain::token::CompactToken;
use crate::infrastructure::compact_codec::CompactTokenCodec;
use crate::infrastructure::crypto::aes_gcm_cipher::{self, AeadError};
use crate::infrastructure::crypto::key_identifier::{kid_from_public_key, KeyIdentifierError};
use crate::infrastructure::crypto::key_wrap::{self, KeyWrapError};

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error(transparent)]
    KeyIdentifier(#[from] KeyIdentifierError),
    #[error(transparent)]
    KeyWrap(#[from] KeyWrapError),
    #[error(transparent)]
    Seal(#[from] AeadError),
    #[error(transparent)]
    Random(#[from] RandomSourceError),
    #[error("serializing: {0}")]
    Json(#[from] serde_json::Error),
}

/// Seals `plaintext` to `public_key` under `profile` and returns the
/// compact token.
///
/// The CEK and nonce are drawn from the given sources. The RSA padding is
/// always drawn from the OS RNG, so only the header, nonce, ciphertext and
/// tag segments are reproducible with fixed sources.
pub fn seal_token<K, N>(
    profile: &Profile,
    plaintext: &[u8],
    public_key: &RsaPublicKey,
    keys: &K,
    nonces: &N,
) -> Result<String, EncodeError>
where
    K: ContentKeyGenerator + ?Sized,
    N: NonceGenerator + ?Sized,
{
    let kid = kid_from_public_key(public_key)?;
    let header = JweHeader::for_profile(profile, &kid).to_json_vec()?;

    let content_key = keys.generate_content_key()?;
    let nonce = nonces.generate_nonce()?;
    let (cipher_text, tag) = aes_gcm_cipher::seal(&content_key, &nonce, plaintext)?;
    let encrypted_key = key_wrap::wrap_content_key(public_key, &content_key)?;

    tracing::debug!(%kid, version = profile.version, "sealed token");
    Ok(CompactTokenCodec::encode(&CompactToken::new(
        header,
        encrypted_key,
        nonce,
        cipher_text,
        tag,
    )))
}

/// [`seal_token`] under profile "100".
pub fn seal_token_v100<K, N>(
    plaintext: &[u8],
    public_key: &RsaPublicKey,
    keys: &K,
    nonces: &N,
) -> Result<String, EncodeError>
where
    K: ContentKeyGenerator + ?Sized,
    N: NonceGenerator + ?Sized,
{
    seal_token(&PROFILE_V100, plaintext, public_key, keys, nonces)
}
