use std::fmt;
use std::str::FromStr;

use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::application_service::encryptor::{seal_token_v100, EncodeError};
use crate::domain::credential::PaymentCredential;
use crate::domain::encryption::{ContentKeyGenerator, NonceGenerator};
use crate::infrastructure::crypto::random::OsRandomSource;

/// Cryptogram shared by all gateway test cards.
pub const TEST_CRYPTOGRAM: &str = "AAAAAAAALJI6DbfqRzUcwAC6gAAGhgEDoLABAAhAgAABAAAAMlkUxA==";
const TEST_ECI_INDICATOR: &str = "02";
const TEST_EXPIRY: &str = "0139";

/// Device PANs the acquiring gateway accepts in its wallet test mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestCard {
    Mastercard,
    Visa,
    Amex,
}

impl TestCard {
    pub const ALL: [TestCard; 3] = [TestCard::Mastercard, TestCard::Visa, TestCard::Amex];

    pub fn token_pan(self) -> &'static str {
        match self {
            TestCard::Mastercard => "5123456789012346",
            TestCard::Visa => "340353278080900",
            TestCard::Amex => "4440000009900010",
        }
    }

    /// `MMYY`
    pub fn expiry(self) -> &'static str {
        TEST_EXPIRY
    }

    pub fn name(self) -> &'static str {
        match self {
            TestCard::Mastercard => "mastercard",
            TestCard::Visa => "visa",
            TestCard::Amex => "amex",
        }
    }
}

impl fmt::Display for TestCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown test card {0:?}, expected one of mastercard, visa, amex")]
pub struct UnknownTestCard(pub String);

impl FromStr for TestCard {
    type Err = UnknownTestCard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TestCard::ALL
            .into_iter()
            .find(|card| card.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownTestCard(s.to_string()))
    }
}

/// A sealed token together with the exact plaintext inside it.
#[derive(Debug, Clone)]
pub struct MockToken {
    pub token: String,
    pub plaintext: Vec<u8>,
}

/// Produces tokens shaped like a wallet's for a test card, sealed to a
/// recipient key.
pub struct MockTokenBuilder<S = OsRandomSource> {
    public_key: RsaPublicKey,
    card: TestCard,
    amount: String,
    currency: String,
    utc: Option<i64>,
    source: S,
}

impl MockTokenBuilder<OsRandomSource> {
    pub fn new(public_key: RsaPublicKey) -> Self {
        Self {
            public_key,
            card: TestCard::Visa,
            amount: "100".to_string(),
            currency: "SAR".to_string(),
            utc: None,
            source: OsRandomSource,
        }
    }

    pub fn for_private_key(private_key: &RsaPrivateKey) -> Self {
        Self::new(private_key.to_public_key())
    }
}

impl<S> MockTokenBuilder<S>
where
    S: ContentKeyGenerator + NonceGenerator,
{
    pub fn card(mut self, card: TestCard) -> Self {
        self.card = card;
        self
    }

    pub fn amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = amount.into();
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Pins `utc` (Unix milliseconds). Defaults to the time of `build`.
    pub fn utc(mut self, millis: i64) -> Self {
        self.utc = Some(millis);
        self
    }

    /// Replaces the CEK and nonce source.
    pub fn with_source<T>(self, source: T) -> MockTokenBuilder<T>
    where
        T: ContentKeyGenerator + NonceGenerator,
    {
        MockTokenBuilder {
            public_key: self.public_key,
            card: self.card,
            amount: self.amount,
            currency: self.currency,
            utc: self.utc,
            source,
        }
    }

    pub fn credential(&self) -> PaymentCredential {
        let utc = self
            .utc
            .unwrap_or_else(|| chrono::Utc::now().timestamp_millis());
        PaymentCredential {
            amount: self.amount.clone(),
            currency_code: self.currency.clone(),
            utc: utc.to_string(),
            eci_indicator: TEST_ECI_INDICATOR.to_string(),
            token_pan: self.card.token_pan().to_string(),
            token_pan_expiration: self.card.expiry().to_string(),
            cryptogram: TEST_CRYPTOGRAM.to_string(),
        }
    }

    pub fn build(&self) -> Result<MockToken, EncodeError> {
        let plaintext = self.credential().to_json_vec()?;
        let token = seal_token_v100(&plaintext, &self.public_key, &self.source, &self.source)?;
        Ok(MockToken { token, plaintext })
    }
}
