use regex::Regex;

use crate::errors::PiError;

/// Parses a count such as `10000`, `10K`, `2m`, `1G` or `1e6`.
pub fn parse_count(text: &str) -> Result<u64, PiError> {
    let invalid = || PiError::InvalidConfig(format!("Invalid count value: '{}'", text));
    let re = Regex::new(r"(?i)^\s*(\d+)\s*(?:([kmg])|e(\d+))?\s*$")
        .map_err(|e| PiError::InvalidConfig(e.to_string()))?;

    let caps = re.captures(text).ok_or_else(invalid)?;
    let base: u64 = caps[1].parse().map_err(|_| invalid())?;

    let multiplier = if let Some(suffix) = caps.get(2) {
        match suffix.as_str().to_ascii_lowercase().as_str() {
            "k" => 1_000,
            "m" => 1_000_000,
            _ => 1_000_000_000,
        }
    } else if let Some(exp) = caps.get(3) {
        let exp: u32 = exp.as_str().parse().map_err(|_| invalid())?;
        10u64.checked_pow(exp).ok_or_else(invalid)?
    } else {
        1
    };

    base.checked_mul(multiplier).ok_or_else(invalid)
}
