use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;

use crate::account::address::{bech32_to_hex, hex_to_bech32};
use crate::utils::conversion::decimal_to_percent;
use crate::utils::encoding::try_base64_to_hex;
use crate::utils::env::get_bech32_prefix;
use crate::utils::error::Result;

#[derive(Parser, Debug)]
#[command(name = "addrfmt", about = "Convert addresses and encoded values")]
pub struct Cli {
    /// Print the result as a JSON object
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Hex address to bech32
    ToBech32 {
        hex: String,
        /// Human-readable prefix, defaults to $BECH32_PREFIX
        #[arg(short, long)]
        prefix: Option<String>,
    },
    /// Bech32 address to 0x-prefixed hex
    ToHex { address: String },
    /// Decimal fraction to percentage
    Percent { value: Option<String> },
    /// Base64 to lowercase hex
    Base64Hex { encoded: String },
}

#[derive(Serialize, Debug, PartialEq)]
pub struct Conversion {
    pub input: Option<String>,
    pub output: Value,
}

impl Conversion {
    /// Plain-text rendering; an absent output prints as an empty line.
    pub fn to_plain(&self) -> String {
        match &self.output {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

pub fn run(command: &Command) -> Result<Conversion> {
    let conversion = match command {
        Command::ToBech32 { hex, prefix } => {
            let prefix = prefix.clone().unwrap_or_else(get_bech32_prefix);
            Conversion {
                input: Some(hex.clone()),
                output: Value::String(hex_to_bech32(hex, &prefix)?),
            }
        }
        Command::ToHex { address } => Conversion {
            input: Some(address.clone()),
            output: Value::String(bech32_to_hex(address)?),
        },
        Command::Percent { value } => Conversion {
            input: value.clone(),
            output: match decimal_to_percent(value.as_deref()) {
                Some(percent) if percent.is_nan() => Value::String("NaN".to_string()),
                Some(percent) => serde_json::json!(percent),
                None => Value::Null,
            },
        },
        Command::Base64Hex { encoded } => Conversion {
            input: Some(encoded.clone()),
            output: Value::String(try_base64_to_hex(encoded)?),
        },
    };
    Ok(conversion)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_subcommands_and_global_flags() {
        let cli = Cli::try_parse_from(["addrfmt", "to-bech32", "0x00", "--prefix", "evmos", "--json"])
            .unwrap();
        assert!(cli.json);
        match cli.command {
            Command::ToBech32 { hex, prefix } => {
                assert_eq!(hex, "0x00");
                assert_eq!(prefix.as_deref(), Some("evmos"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn percent_value_is_optional() {
        let cli = Cli::try_parse_from(["addrfmt", "percent"]).unwrap();
        let conversion = run(&cli.command).unwrap();
        assert_eq!(conversion.output, Value::Null);
        assert_eq!(conversion.to_plain(), "");
    }

    #[test]
    fn percent_renders_as_number() {
        let conversion = run(&Command::Percent {
            value: Some("0.1234".to_string()),
        })
        .unwrap();
        assert_eq!(conversion.to_plain(), "12.34");
    }

    #[test]
    fn missing_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["addrfmt"]).is_err());
    }
}
