//! Signature transport encoding
//!
//! Signatures cross the process boundary as standard base64, optionally
//! wrapped in colons the way RFC 8941 byte sequences are.

use base64::{
    alphabet,
    engine::{general_purpose::STANDARD, DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine,
};

use crate::error::{JoseError, JoseResult};

const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Undelimited base64
pub fn encode(signature: &[u8]) -> String {
    STANDARD.encode(signature)
}

/// `:<base64>:`
pub fn to_byte_sequence(signature: &[u8]) -> String {
    format!(":{}:", encode(signature))
}

/// Decode a transported signature, with or without colon delimiters
pub fn decode(encoded: &str) -> JoseResult<Vec<u8>> {
    let trimmed = encoded.trim();
    let inner = trimmed.strip_prefix(':').unwrap_or(trimmed);
    let inner = inner.strip_suffix(':').unwrap_or(inner);
    LENIENT_STANDARD
        .decode(inner)
        .map_err(|e| JoseError::InvalidEncoding(format!("signature is not base64: {}", e)))
}
