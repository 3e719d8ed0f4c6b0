use std::fmt;

/// Number of `.`-delimited segments in a compact token.
pub const SEGMENT_COUNT: usize = 5;
/// AES-GCM nonce length carried in the nonce segment.
pub const NONCE_LEN: usize = 12;
/// AES-GCM authentication tag length carried in the tag segment.
pub const TAG_LEN: usize = 16;

/// Position of a segment inside the compact serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    Header,
    EncryptedKey,
    Nonce,
    CipherText,
    Tag,
}

impl Segment {
    /// Segments in wire order.
    pub const ALL: [Segment; SEGMENT_COUNT] = [
        Segment::Header,
        Segment::EncryptedKey,
        Segment::Nonce,
        Segment::CipherText,
        Segment::Tag,
    ];

    pub fn index(self) -> usize {
        match self {
            Segment::Header => 0,
            Segment::EncryptedKey => 1,
            Segment::Nonce => 2,
            Segment::CipherText => 3,
            Segment::Tag => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Segment::Header => "header",
            Segment::EncryptedKey => "encrypted key",
            Segment::Nonce => "nonce",
            Segment::CipherText => "ciphertext",
            Segment::Tag => "tag",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (segment {})", self.name(), self.index())
    }
}

/// Structural problems with a token. Never retried: the input itself is corrupt.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("expected 5 '.'-delimited segments, found {found}")]
    SegmentCount { found: usize },

    #[error("decoding {segment}: {source}")]
    Base64 {
        segment: Segment,
        #[source]
        source: base64::DecodeError,
    },

    #[error("{segment} must be {expected} bytes, found {found}")]
    SegmentLength {
        segment: Segment,
        expected: usize,
        found: usize,
    },

    #[error("unmarshalling header: {0}")]
    Header(#[source] serde_json::Error),

    #[error("header does not carry a kid")]
    MissingKid,

    #[error("header field `{field}` is {found:?}, expected {expected:?}")]
    ProfileMismatch {
        field: &'static str,
        expected: &'static str,
        found: String,
    },
}

impl FormatError {
    /// The segment the error points at, when it can be attributed to one.
    pub fn segment(&self) -> Option<Segment> {
        match self {
            FormatError::Base64 { segment, .. } | FormatError::SegmentLength { segment, .. } => {
                Some(*segment)
            }
            FormatError::Header(_) | FormatError::MissingKid | FormatError::ProfileMismatch { .. } => {
                Some(Segment::Header)
            }
            FormatError::SegmentCount { .. } => None,
        }
    }
}

/// The five decoded segments of a compact token.
///
/// Nonce and tag lengths are fixed by the type, so a value of this type is
/// always structurally usable by the AEAD step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactToken {
    header: Vec<u8>,
    encrypted_key: Vec<u8>,
    nonce: [u8; NONCE_LEN],
    cipher_text: Vec<u8>,
    tag: [u8; TAG_LEN],
}

impl CompactToken {
    pub fn new(
        header: Vec<u8>,
        encrypted_key: Vec<u8>,
        nonce: [u8; NONCE_LEN],
        cipher_text: Vec<u8>,
        tag: [u8; TAG_LEN],
    ) -> Self {
        Self {
            header,
            encrypted_key,
            nonce,
            cipher_text,
            tag,
        }
    }

    /// Builds a token from raw decoded segments in wire order, checking the
    /// fixed-length segments.
    pub fn from_segments(segments: [Vec<u8>; SEGMENT_COUNT]) -> Result<Self, FormatError> {
        let [header, encrypted_key, nonce, cipher_text, tag] = segments;

        let nonce: [u8; NONCE_LEN] = nonce.as_slice().try_into().map_err(|_| {
            FormatError::SegmentLength {
                segment: Segment::Nonce,
                expected: NONCE_LEN,
                found: nonce.len(),
            }
        })?;
        let tag: [u8; TAG_LEN] = tag.as_slice().try_into().map_err(|_| {
            FormatError::SegmentLength {
                segment: Segment::Tag,
                expected: TAG_LEN,
                found: tag.len(),
            }
        })?;

        Ok(Self::new(header, encrypted_key, nonce, cipher_text, tag))
    }

    pub fn header(&self) -> &[u8] {
        &self.header
    }

    pub fn encrypted_key(&self) -> &[u8] {
        &self.encrypted_key
    }

    pub fn nonce(&self) -> &[u8; NONCE_LEN] {
        &self.nonce
    }

    pub fn cipher_text(&self) -> &[u8] {
        &self.cipher_text
    }

    pub fn tag(&self) -> &[u8; TAG_LEN] {
        &self.tag
    }

    /// Segments as byte slices in wire order.
    pub fn segments(&self) -> [&[u8]; SEGMENT_COUNT] {
        [
            &self.header,
            &self.encrypted_key,
            &self.nonce,
            &self.cipher_text,
            &self.tag,
        ]
    }
}
