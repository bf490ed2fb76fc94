pub const DEFAULT_BECH32_PREFIX: &str = "ethm";

pub fn get_bech32_prefix() -> String {
    prefix_or_default(std::env::var("BECH32_PREFIX").ok())
}

/// Blank or missing values fall back to [`DEFAULT_BECH32_PREFIX`].
pub fn prefix_or_default(value: Option<String>) -> String {
    value
        .map(|prefix| prefix.trim().to_string())
        .filter(|prefix| !prefix.is_empty())
        .unwrap_or_else(|| DEFAULT_BECH32_PREFIX.to_string())
}
