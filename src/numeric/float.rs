use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::errors::PiError;

/// Extra bits carried on top of the bits needed for the requested decimal digits.
pub const GUARD_BITS: u64 = 64;

const MIN_PRECISION: u64 = 2;

/// Working precision (in bits) needed to print `digits` correct fractional digits.
pub fn precision_for_digits(digits: u64) -> u64 {
    (digits as f64 * std::f64::consts::LOG2_10).ceil() as u64 + GUARD_BITS
}

/// Binary floating point number `mantissa * 2^exponent` whose mantissa never
/// exceeds `precision` bits. Every operation truncates toward zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigFloat {
    mantissa: BigInt,
    exponent: i64,
    precision: u64,
}

impl BigFloat {
    fn new(mantissa: BigInt, exponent: i64, precision: u64) -> Self {
        let precision = precision.max(MIN_PRECISION);
        if mantissa.is_zero() {
            return Self { mantissa, exponent: 0, precision };
        }

        let bits = mantissa.bits();
        if bits <= precision {
            return Self { mantissa, exponent, precision };
        }

        let shift = bits - precision;
        Self {
            mantissa: shr_toward_zero(&mantissa, shift),
            exponent: exponent + shift as i64,
            precision,
        }
    }

    pub fn zero(precision: u64) -> Self {
        Self::new(BigInt::zero(), 0, precision)
    }

    /// Widens an integer. Exact as long as `value` fits in `precision` bits.
    pub fn from_integer(value: &BigInt, precision: u64) -> Self {
        Self::new(value.clone(), 0, precision)
    }

    pub fn from_u64(value: u64, precision: u64) -> Self {
        Self::new(BigInt::from(value), 0, precision)
    }

    pub fn precision(&self) -> u64 { self.precision }

    pub fn is_zero(&self) -> bool { self.mantissa.is_zero() }

    pub fn is_negative(&self) -> bool { self.mantissa.is_negative() }

    fn common_precision(&self, other: &BigFloat) -> u64 {
        self.precision.max(other.precision)
    }

    fn rescaled(&self, precision: u64) -> BigFloat {
        Self::new(self.mantissa.clone(), self.exponent, precision)
    }

    // Position just above the most significant bit.
    fn top(&self) -> i64 {
        self.exponent + self.mantissa.bits() as i64
    }

    pub fn add(&self, other: &BigFloat) -> BigFloat {
        let precision = self.common_precision(other);
        if self.is_zero() {
            return other.rescaled(precision);
        }
        if other.is_zero() {
            return self.rescaled(precision);
        }

        // An operand entirely below the other's precision window cannot change the result.
        let window = precision as i64 + 2;
        if self.top() - other.top() > window {
            return self.rescaled(precision);
        }
        if other.top() - self.top() > window {
            return other.rescaled(precision);
        }

        let (high, low) = if self.exponent >= other.exponent { (self, other) } else { (other, self) };
        let shift = (high.exponent - low.exponent) as u64;
        let sum = (&high.mantissa << shift) + &low.mantissa;
        Self::new(sum, low.exponent, precision)
    }

    pub fn mul(&self, other: &BigFloat) -> BigFloat {
        let precision = self.common_precision(other);
        Self::new(&self.mantissa * &other.mantissa, self.exponent + other.exponent, precision)
    }

    pub fn div(&self, other: &BigFloat) -> Result<BigFloat, PiError> {
        if other.is_zero() {
            return Err(PiError::Arithmetic("division by zero".into()));
        }
        let precision = self.common_precision(other);
        if self.is_zero() {
            return Ok(Self::zero(precision));
        }

        // Scale the dividend so the quotient keeps at least `precision` bits.
        let shift = (precision + other.mantissa.bits() + 1).saturating_sub(self.mantissa.bits());
        let quotient = (&self.mantissa << shift) / &other.mantissa;
        Ok(Self::new(quotient, self.exponent - other.exponent - shift as i64, precision))
    }

    pub fn sqrt(&self) -> Result<BigFloat, PiError> {
        if self.is_negative() {
            return Err(PiError::Arithmetic("square root of a negative number".into()));
        }
        if self.is_zero() {
            return Ok(Self::zero(self.precision));
        }

        // The radicand needs twice the target bits, and an even exponent.
        let mut shift = (2 * self.precision + 2).saturating_sub(self.mantissa.bits()) as i64;
        if (self.exponent - shift) % 2 != 0 {
            shift += 1;
        }
        let radicand = &self.mantissa << shift as u64;
        Ok(Self::new(radicand.sqrt(), (self.exponent - shift) / 2, self.precision))
    }

    /// Renders the value with exactly `digits` fractional digits, truncating
    /// anything beyond them.
    pub fn to_fixed(&self, digits: usize) -> String {
        let scale = BigInt::from(10u64).pow(digits as u32);
        let magnitude = self.mantissa.abs();
        let scaled = if self.exponent >= 0 {
            (magnitude << self.exponent as u64) * scale
        } else {
            (magnitude * scale) >> self.exponent.unsigned_abs()
        };

        let mut text = scaled.to_str_radix(10);
        if text.len() <= digits {
            text = format!("{}{}", "0".repeat(digits + 1 - text.len()), text);
        }

        let sign = if self.is_negative() && !scaled.is_zero() { "-" } else { "" };
        if digits == 0 {
            return format!("{}{}", sign, text);
        }

        let (integer, fraction) = text.split_at(text.len() - digits);
        format!("{}{}.{}", sign, integer, fraction)
    }
}

fn shr_toward_zero(value: &BigInt, shift: u64) -> BigInt {
    if value.is_negative() {
        -((-value) >> shift)
    } else {
        value >> shift
    }
}
