use num_bigint::BigInt;

/// Decimal digits contributed by each term of the series, log10(640320^3 / 1728).
pub const DIGITS_PER_TERM: f64 = 14.181647462725477;

/// Number of series terms needed for `digits` correct fractional digits.
pub fn terms_for_digits(digits: u64) -> u64 {
    (digits as f64 / DIGITS_PER_TERM).ceil() as u64 + 1
}

/// Magic numbers of the Chudnovsky series. Handed to the evaluator and the
/// assembler instead of living in process-wide statics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChudnovskyConstants {
    /// 640320^3 / 24
    pub c1: BigInt,
    pub c2: BigInt,
    pub c3: BigInt,
    pub multiplier: u64,
    pub radicand: u64,
    pub offset: u64,
}

impl Default for ChudnovskyConstants {
    fn default() -> Self {
        Self {
            c1: BigInt::from(10939058860032000u64),
            c2: BigInt::from(545140134u64),
            c3: BigInt::from(13591409u64),
            multiplier: 426880,
            radicand: 10005,
            offset: 13591409,
        }
    }
}
