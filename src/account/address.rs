use bech32::{FromBase32, ToBase32, Variant};
use tracing::debug;

use crate::utils::conversion::from_hex;
use crate::utils::error::{ConversionError, Result};

/// Longest bech32 string the encoder will produce.
pub const MAX_BECH32_LENGTH: usize = 90;

/// Encodes a hex address (with or without `0x`) as bech32 under `prefix`.
///
/// Fails with [`ConversionError::AddressTooLong`] when the result would
/// exceed [`MAX_BECH32_LENGTH`] characters. Decoding has no such cap.
pub fn hex_to_bech32(hex_address: &str, prefix: &str) -> Result<String> {
    let data = from_hex(hex_address)?;
    let address = bech32::encode(prefix, data.to_base32(), Variant::Bech32)?;
    if address.len() > MAX_BECH32_LENGTH {
        return Err(ConversionError::AddressTooLong {
            length: address.len(),
            limit: MAX_BECH32_LENGTH,
        });
    }
    debug!(hex = hex_address, bech32 = %address, "converted hex address");
    Ok(address)
}

/// Decodes a bech32 address into `0x`-prefixed lowercase hex. The prefix is dropped.
pub fn bech32_to_hex(address: &str) -> Result<String> {
    let (_, data) = decode(address)?;
    let hex_address = format!("0x{}", hex::encode(&data));
    debug!(bech32 = address, hex = %hex_address, "converted bech32 address");
    Ok(hex_address)
}

/// Human-readable prefix of a valid bech32 address, lowercased.
pub fn bech32_prefix(address: &str) -> Result<String> {
    let (prefix, _) = decode(address)?;
    Ok(prefix)
}

fn decode(address: &str) -> Result<(String, Vec<u8>)> {
    let (prefix, data, variant) = bech32::decode(address)?;
    if variant != Variant::Bech32 {
        return Err(ConversionError::UnexpectedVariant {
            address: address.to_string(),
        });
    }
    let bytes = Vec::<u8>::from_base32(&data)?;
    Ok((prefix, bytes))
}
