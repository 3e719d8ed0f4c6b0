use serde::{Deserialize, Serialize};

/// Plaintext payment credential carried inside a token.
///
/// Field order matches the wallet's serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentCredential {
    pub amount: String,
    pub currency_code: String,
    pub utc: String,
    pub eci_indicator: String,
    #[serde(rename = "tokenPAN")]
    pub token_pan: String,
    #[serde(rename = "tokenPanExpiration")]
    pub token_pan_expiration: String,
    pub cryptogram: String,
}

impl PaymentCredential {
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn to_json_vec(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}
