use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("hex decoding failed: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("bech32 error: {0}")]
    Bech32(#[from] bech32::Error),

    #[error("base64 decoding failed: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("bech32 address would be {length} characters, limit is {limit}")]
    AddressTooLong { length: usize, limit: usize },

    #[error("expected a bech32 checksum, got bech32m: {address}")]
    UnexpectedVariant { address: String },
}

pub type Result<T> = std::result::Result<T, ConversionError>;
