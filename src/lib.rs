pub mod account;
pub mod cli;
pub mod utils;

pub use account::address::{bech32_prefix, bech32_to_hex, hex_to_bech32};
pub use utils::conversion::decimal_to_percent;
pub use utils::encoding::{base64_to_hex, try_base64_to_hex};
pub use utils::error::{ConversionError, Result};
