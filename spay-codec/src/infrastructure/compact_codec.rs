use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::domain::token::{CompactToken, FormatError, Segment, SEGMENT_COUNT};

const SEPARATOR: u8 = b'.';

/// Compact serialization: five base64url (no padding) segments joined by `.`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CompactTokenCodec;

impl CompactTokenCodec {
    /// Splits and decodes a raw token into its five segments.
    ///
    /// The input must be exactly the token: any byte outside the base64url
    /// alphabet, surrounding whitespace included, fails the segment it lands in.
    pub fn decode_segments(token: &[u8]) -> Result<[Vec<u8>; SEGMENT_COUNT], FormatError> {
        let parts: Vec<&[u8]> = token.split(|b| *b == SEPARATOR).collect();
        if parts.len() != SEGMENT_COUNT {
            return Err(FormatError::SegmentCount { found: parts.len() });
        }

        let mut decoded: [Vec<u8>; SEGMENT_COUNT] = Default::default();
        for (segment, part) in Segment::ALL.into_iter().zip(parts) {
            decoded[segment.index()] = URL_SAFE_NO_PAD
                .decode(part)
                .map_err(|source| FormatError::Base64 { segment, source })?;
        }
        Ok(decoded)
    }

    /// Encodes five segments in wire order.
    pub fn encode_segments(segments: [&[u8]; SEGMENT_COUNT]) -> String {
        segments
            .iter()
            .map(|segment| URL_SAFE_NO_PAD.encode(segment))
            .collect::<Vec<_>>()
            .join(".")
    }

    pub fn decode(token: &[u8]) -> Result<CompactToken, FormatError> {
        CompactToken::from_segments(Self::decode_segments(token)?)
    }

    pub fn encode(token: &CompactToken) -> String {
        Self::encode_segments(token.segments())
    }
}
