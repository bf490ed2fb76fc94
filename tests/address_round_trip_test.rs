use addrfmt::{bech32_prefix, bech32_to_hex, hex_to_bech32, ConversionError};
use anyhow::Result;

const CHECKSUMMED: &str = "0xA1b2C3d4E5f60718293A4b5C6d7E8f9001122334";

#[test]
fn hex_round_trips_through_bech32() -> Result<()> {
    let bech32 = hex_to_bech32(CHECKSUMMED, "ethm")?;
    let hex = bech32_to_hex(&bech32)?;

    assert_eq!(hex, CHECKSUMMED.to_lowercase());
    assert_eq!(bech32_prefix(&bech32)?, "ethm");
    Ok(())
}

#[test]
fn hex_prefix_does_not_change_output() -> Result<()> {
    let with_prefix = hex_to_bech32(CHECKSUMMED, "evmos")?;
    let without_prefix = hex_to_bech32(&CHECKSUMMED[2..], "evmos")?;

    assert_eq!(with_prefix, without_prefix);
    Ok(())
}

#[test]
fn prefix_is_discarded_on_decode() -> Result<()> {
    let ethm = hex_to_bech32(CHECKSUMMED, "ethm")?;
    let cosmos = hex_to_bech32(CHECKSUMMED, "cosmos")?;

    assert_ne!(ethm, cosmos);
    assert_eq!(bech32_to_hex(&ethm)?, bech32_to_hex(&cosmos)?);
    Ok(())
}

#[test]
fn malformed_hex_propagates() {
    assert!(matches!(
        hex_to_bech32("0x123", "ethm"),
        Err(ConversionError::Hex(_))
    ));
    assert!(matches!(
        hex_to_bech32("0xg0", "ethm"),
        Err(ConversionError::Hex(_))
    ));
}

#[test]
fn corrupted_checksum_propagates() -> Result<()> {
    let mut address = hex_to_bech32(CHECKSUMMED, "ethm")?;
    let last = address.pop().unwrap_or('q');
    address.push(if last == 'q' { 'p' } else { 'q' });

    assert!(matches!(
        bech32_to_hex(&address),
        Err(ConversionError::Bech32(_))
    ));
    Ok(())
}

#[test]
fn invalid_charset_propagates() {
    // 'b' is not in the bech32 alphabet
    assert!(matches!(
        bech32_to_hex("ethm1bbbbbb"),
        Err(ConversionError::Bech32(_))
    ));
    assert!(matches!(
        bech32_to_hex("no-separator"),
        Err(ConversionError::Bech32(_))
    ));
}

#[test]
fn long_payload_is_refused_on_encode_but_decodes() -> Result<()> {
    use bech32::{ToBase32, Variant};

    let payload = vec![0xabu8; 64];
    assert!(matches!(
        hex_to_bech32(&hex::encode(&payload), "ethm"),
        Err(ConversionError::AddressTooLong { .. })
    ));

    let long_address = bech32::encode("ethm", payload.to_base32(), Variant::Bech32)?;
    assert_eq!(long_address.len(), 114);
    assert_eq!(bech32_to_hex(&long_address)?, format!("0x{}", hex::encode(&payload)));
    Ok(())
}
