//! URL-safe base64 as used by Bot API file ids.
//!
//! Encoding never emits `=` padding; decoding accepts it either way.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

const URL_SAFE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Encode `data` as unpadded URL-safe base64.
pub fn encode(data: &[u8]) -> String {
    URL_SAFE.encode(data)
}

/// Decode URL-safe base64, with or without padding.
pub fn decode(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE.decode(text.trim())
}
