use serde::{Deserialize, Serialize};

use crate::domain::kid::Kid;
use crate::domain::token::FormatError;

/// Fixed header values of one algorithm profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub version: &'static str,
    pub alg: &'static str,
    pub enc: &'static str,
    pub typ: &'static str,
    pub channel_security_context: &'static str,
}

/// Profile "100": RSA1_5 key wrap with A128GCM content encryption.
pub const PROFILE_V100: Profile = Profile {
    version: "100",
    alg: "RSA1_5",
    enc: "A128GCM",
    typ: "JOSE",
    channel_security_context: "RSA_PKI",
};

/// Protected header of a compact token.
///
/// Field order is the wire order produced by the wallet, so serializing a
/// header built by [`JweHeader::for_profile`] is byte-identical to what
/// the wallet emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JweHeader {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    #[serde(
        rename = "channelSecurityContext",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub channel_security_context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enc: Option<String>,
}

impl JweHeader {
    pub fn for_profile(profile: &Profile, kid: &Kid) -> Self {
        Self {
            alg: Some(profile.alg.to_string()),
            kid: Some(kid.as_str().to_string()),
            typ: Some(profile.typ.to_string()),
            channel_security_context: Some(profile.channel_security_context.to_string()),
            enc: Some(profile.enc.to_string()),
        }
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, FormatError> {
        serde_json::from_slice(bytes).map_err(FormatError::Header)
    }

    pub fn to_json_vec(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    pub fn kid(&self) -> Result<Kid, FormatError> {
        match self.kid.as_deref() {
            Some(kid) if !kid.is_empty() => Ok(Kid::new(kid)),
            _ => Err(FormatError::MissingKid),
        }
    }

    /// Rejects a header whose `alg` or `enc` names anything other than the
    /// profile's algorithms. Absent fields are tolerated.
    pub fn ensure_profile(&self, profile: &Profile) -> Result<(), FormatError> {
        check_field("alg", self.alg.as_deref(), profile.alg)?;
        check_field("enc", self.enc.as_deref(), profile.enc)
    }
}

fn check_field(
    field: &'static str,
    found: Option<&str>,
    expected: &'static str,
) -> Result<(), FormatError> {
    match found {
        Some(value) if value != expected => Err(FormatError::ProfileMismatch {
            field,
            expected,
            found: value.to_string(),
        }),
        _ => Ok(()),
    }
}
