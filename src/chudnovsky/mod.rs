//! π by the Chudnovsky series, evaluated with exact binary splitting.

pub mod assembler;
pub mod constants;
pub mod split;

pub use assembler::ChudnovskyPi;
pub use constants::{terms_for_digits, ChudnovskyConstants};
pub use split::{BinarySplitter, Triple};

use crate::errors::PiError;
use crate::numeric::precision_for_digits;

/// π with `digits` fractional digits, sizing terms and precision from the digit count.
pub fn pi_number(digits: u64) -> Result<String, PiError> {
    let engine = ChudnovskyPi::with_precision(precision_for_digits(digits));
    let pi = engine.compute(terms_for_digits(digits))?;
    Ok(pi.to_fixed(digits as usize))
}
