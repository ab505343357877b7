use std::env;

use crate::chudnovsky::terms_for_digits;
use crate::errors::PiError;
use crate::numeric::precision_for_digits;
use crate::utils::count::parse_count;

pub const DEFAULT_DIGITS: u64 = 10_000;

/// Run settings, read once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PiConfig {
    pub digits: u64,
    pub terms: u64,
    pub precision_bits: u64,
    pub report: bool,
}

impl Default for PiConfig {
    fn default() -> Self { Self::for_digits(DEFAULT_DIGITS) }
}

impl PiConfig {
    /// Terms and precision sized for `digits`.
    pub fn for_digits(digits: u64) -> Self {
        Self {
            digits,
            terms: terms_for_digits(digits),
            precision_bits: precision_for_digits(digits),
            report: false,
        }
    }

    /// Reads `PI_DIGITS`, `PI_TERMS`, `PI_PRECISION_BITS` and `PI_REPORT`.
    pub fn from_env() -> Result<Self, PiError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, PiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let parse_count_var = |name: &str| -> Result<Option<u64>, PiError> {
            match lookup(name) {
                Some(v) => parse_count(&v)
                    .map(Some)
                    .map_err(|e| PiError::InvalidConfig(format!("{}: {}", name, e))),
                None => Ok(None),
            }
        };

        let digits = parse_count_var("PI_DIGITS")?.unwrap_or(DEFAULT_DIGITS);
        let mut cfg = Self::for_digits(digits);

        if let Some(terms) = parse_count_var("PI_TERMS")? {
            cfg.terms = terms;
        }
        if let Some(bits) = parse_count_var("PI_PRECISION_BITS")? {
            cfg.precision_bits = bits;
        }
        if let Some(flag) = lookup("PI_REPORT") {
            cfg.report = parse_flag(&flag)
                .ok_or_else(|| PiError::InvalidConfig(format!("PI_REPORT: invalid flag '{}'", flag)))?;
        }

        Ok(cfg)
    }
}

fn parse_flag(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
