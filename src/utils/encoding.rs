use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};
use tracing::error;

use crate::utils::error::Result;

// Standard alphabet, no padding, stray trailing bits ignored.
const UNPADDED: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

/// Decodes base64 the way browsers do: ASCII whitespace is skipped and
/// padding may be left off, but padding that is present must be complete.
pub fn decode_base64(encoded: &str) -> Result<Vec<u8>> {
    let compact: String = encoded
        .chars()
        .filter(|c| !matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0c'))
        .collect();
    Ok(UNPADDED.decode(strip_padding(&compact))?)
}

// Padding only counts when it fills the last quad; anything else is left
// for the decoder to reject.
fn strip_padding(compact: &str) -> &str {
    if compact.len() % 4 != 0 {
        return compact;
    }
    compact
        .strip_suffix("==")
        .or_else(|| compact.strip_suffix('='))
        .unwrap_or(compact)
}

pub fn try_base64_to_hex(encoded: &str) -> Result<String> {
    let bytes = decode_base64(encoded)?;
    Ok(hex::encode(bytes))
}

/// Re-encodes base64 as lowercase hex.
///
/// Decode failures are logged and reported as `None`; use
/// [`try_base64_to_hex`] to get the error instead.
pub fn base64_to_hex(encoded: &str) -> Option<String> {
    match try_base64_to_hex(encoded) {
        Ok(hex) => Some(hex),
        Err(e) => {
            error!(input = encoded, "error decoding base64: {}", e);
            None
        }
    }
}
