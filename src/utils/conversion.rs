use crate::utils::error::Result;

/// Decodes a hex string, ignoring a leading `0x`.
pub fn from_hex(value: &str) -> Result<Vec<u8>> {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    Ok(hex::decode(digits)?)
}

/// Scales a decimal fraction to a percentage rounded to two places.
///
/// `None` and the empty string both mean "no value" and yield `None`.
/// Anything that does not parse as a number yields `Some(NAN)`.
pub fn decimal_to_percent(value: Option<&str>) -> Option<f64> {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ => return None,
    };

    Some(round_to_hundredths(parse_number(value) * 100.0))
}

/// Lenient numeric parsing: surrounding whitespace ignored, blank means
/// zero, `0x`/`0o`/`0b` integers accepted, and only the `Infinity`
/// spelling produces an infinite value.
pub fn parse_number(value: &str) -> f64 {
    let value = value.trim();
    if value.is_empty() {
        return 0.0;
    }

    match value {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(number) = parse_radix_integer(value) {
        return number;
    }

    // str::parse also takes "inf", "infinity" and "nan" in any case.
    if value
        .chars()
        .any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E'))
    {
        return f64::NAN;
    }

    value.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix_integer(value: &str) -> Option<f64> {
    let radix = match value.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &value[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(f64::NAN);
    }

    let number = digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0.0, |acc, digit| acc * f64::from(radix) + f64::from(digit));
    Some(number)
}

// f64::round goes half away from zero, same as fixed-point formatting.
// From 1e15 up a double carries no hundredths to round.
fn round_to_hundredths(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= 1e15 {
        return value;
    }
    (value * 100.0).round() / 100.0
}
