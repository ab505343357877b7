use crate::chudnovsky::constants::ChudnovskyConstants;
use crate::chudnovsky::split::{BinarySplitter, Triple};
use crate::errors::PiError;
use crate::numeric::BigFloat;

/// Turns the root triple of the series into π at a fixed working precision.
///
/// The precision is the caller's contract: a value too small for the
/// number of terms silently yields fewer correct digits.
pub struct ChudnovskyPi {
    constants: ChudnovskyConstants,
    precision: u64,
}

impl ChudnovskyPi {
    pub fn new(constants: ChudnovskyConstants, precision: u64) -> Self {
        Self { constants, precision }
    }

    pub fn with_precision(precision: u64) -> Self {
        Self::new(ChudnovskyConstants::default(), precision)
    }

    pub fn precision(&self) -> u64 { self.precision }

    pub fn constants(&self) -> &ChudnovskyConstants { &self.constants }

    /// Root triple for the first `n` terms.
    ///
    /// Term 0 has `Q = 0` in closed form, so it is not split: it enters the
    /// result through the `offset * Q` summand of the denominator, and the
    /// recursion covers `[1, n)`.
    pub fn series(&self, n: u64) -> Result<Triple, PiError> {
        match n {
            0 => Err(PiError::InvalidTermCount(n)),
            1 => Ok(Triple::identity()),
            _ => BinarySplitter::new(&self.constants).split(1, n),
        }
    }

    /// π from the first `n` terms: `multiplier * sqrt(radicand) * Q / (offset * Q + R)`.
    pub fn compute(&self, n: u64) -> Result<BigFloat, PiError> {
        let Triple { q, r, .. } = self.series(n)?;
        let precision = self.precision;

        let q = BigFloat::from_integer(&q, precision);
        let r = BigFloat::from_integer(&r, precision);

        let root = BigFloat::from_u64(self.constants.radicand, precision).sqrt()?;
        let numerator = BigFloat::from_u64(self.constants.multiplier, precision)
            .mul(&root)
            .mul(&q);
        let denominator = BigFloat::from_u64(self.constants.offset, precision)
            .mul(&q)
            .add(&r);

        numerator.div(&denominator)
    }
}
