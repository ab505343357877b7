use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::chudnovsky::constants::ChudnovskyConstants;
use crate::errors::PiError;

/// Partial evaluation of the series over an index range `[a, b)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Triple {
    pub p: BigInt,
    pub q: BigInt,
    pub r: BigInt,
}

impl Triple {
    /// `(1, 1, 0)`, neutral on both sides of [`Triple::combine`].
    pub fn identity() -> Self {
        Self { p: BigInt::one(), q: BigInt::one(), r: BigInt::zero() }
    }

    /// Closed form for the single-term range `[a, a + 1)`.
    pub fn leaf(a: u64, constants: &ChudnovskyConstants) -> Self {
        let a = BigInt::from(a);

        // P = a((108 - 72a)a - 46) + 5 = -(6a - 5)(2a - 1)(6a - 1)
        let mut p = BigInt::from(108u32) - &a * 72u32;
        p *= &a;
        p -= 46u32;
        p *= &a;
        p += 5u32;

        let q = &constants.c1 * a.pow(3);
        let r = &p * (&constants.c2 * &a + &constants.c3);

        Self { p, q, r }
    }

    /// Merges `[a, m)` (self) with the adjacent `[m, b)`.
    pub fn combine(self, right: Triple) -> Triple {
        let Triple { p: p_am, q: q_am, r: r_am } = self;
        let Triple { p: p_mb, q: q_mb, r: r_mb } = right;

        let r = &q_mb * r_am + &p_am * r_mb;
        Triple { p: p_am * p_mb, q: q_am * q_mb, r }
    }
}

/// Integer midpoint `floor((a + b) / 2)` without overflowing.
pub fn floor_midpoint(a: u64, b: u64) -> u64 {
    a + (b - a) / 2
}

/// Evaluates the series over an index range by recursive binary splitting.
/// Each call owns its triples; children are moved into the parent's
/// combination and dropped right after.
pub struct BinarySplitter<'c> {
    constants: &'c ChudnovskyConstants,
}

impl<'c> BinarySplitter<'c> {
    pub fn new(constants: &'c ChudnovskyConstants) -> Self {
        Self { constants }
    }

    pub fn split(&self, a: u64, b: u64) -> Result<Triple, PiError> {
        self.split_by(a, b, &floor_midpoint)
    }

    /// Same as [`BinarySplitter::split`] with a caller-chosen midpoint.
    /// The midpoint must fall strictly inside `(a, b)`.
    pub fn split_by<M>(&self, a: u64, b: u64, midpoint: &M) -> Result<Triple, PiError>
    where
        M: Fn(u64, u64) -> u64,
    {
        if a >= b {
            return Err(PiError::InvalidRange { a, b });
        }
        if b - a == 1 {
            return Ok(Triple::leaf(a, self.constants));
        }

        let m = midpoint(a, b);
        if m <= a {
            return Err(PiError::InvalidRange { a, b: m });
        }
        if m >= b {
            return Err(PiError::InvalidRange { a: m, b });
        }

        let left = self.split_by(a, m, midpoint)?;
        let right = self.split_by(m, b, midpoint)?;
        Ok(left.combine(right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn big(text: &str) -> BigInt {
        text.parse().unwrap()
    }

    fn closed_form(a: i128) -> (BigInt, BigInt, BigInt) {
        let p = -(6 * a - 5) * (2 * a - 1) * (6 * a - 1);
        let q = BigInt::from(10939058860032000i128) * BigInt::from(a).pow(3);
        let r = BigInt::from(p) * BigInt::from(545140134 * a + 13591409);
        (BigInt::from(p), q, r)
    }

    #[test]
    fn test_leaf_zero() {
        let k = ChudnovskyConstants::default();
        let t = BinarySplitter::new(&k).split(0, 1).unwrap();
        assert_eq!(t.p, BigInt::from(5));
        assert_eq!(t.q, BigInt::zero());
        assert_eq!(t.r, BigInt::from(67957045));
    }

    #[test]
    fn test_leaf_one() {
        let k = ChudnovskyConstants::default();
        let t = BinarySplitter::new(&k).split(1, 2).unwrap();
        assert_eq!(t.p, BigInt::from(-5));
        assert_eq!(t.q, BigInt::from(10939058860032000u64));
        assert_eq!(t.r, BigInt::from(-2793657715i64));
    }

    #[test]
    fn test_leaf_matches_factored_form() {
        let k = ChudnovskyConstants::default();
        for a in [0u64, 1, 2, 3, 17, 1000, 999_999, 5_000_000] {
            let (p, q, r) = closed_form(a as i128);
            assert_eq!(Triple::leaf(a, &k), Triple { p, q, r }, "a = {}", a);
        }
    }

    #[test]
    fn test_small_range() {
        let k = ChudnovskyConstants::default();
        let t = BinarySplitter::new(&k).split(1, 4).unwrap();
        assert_eq!(t.p, BigInt::from(-1276275));
        assert_eq!(t.q, big("282744150338349327484720295874090277797888000000000"));
        assert_eq!(t.r, big("-72208257316346012928456348682766762497244025"));
    }

    #[test]
    fn test_range_from_zero() {
        let k = ChudnovskyConstants::default();
        let t = BinarySplitter::new(&k).split(0, 3).unwrap();
        assert_eq!(t.p, BigInt::from(5775));
        assert_eq!(t.q, BigInt::zero());
        assert_eq!(t.r, big("65055555759999311082096660384809623734675"));
    }

    #[test]
    fn test_empty_and_reversed_ranges_fail() {
        let k = ChudnovskyConstants::default();
        let splitter = BinarySplitter::new(&k);
        assert!(matches!(splitter.split(5, 5), Err(PiError::InvalidRange { a: 5, b: 5 })));
        assert!(matches!(splitter.split(9, 2), Err(PiError::InvalidRange { a: 9, b: 2 })));
    }

    #[test]
    fn test_bad_midpoint_fails() {
        let k = ChudnovskyConstants::default();
        let splitter = BinarySplitter::new(&k);
        let low = splitter.split_by(3, 10, &|a: u64, _: u64| a);
        assert!(matches!(low, Err(PiError::InvalidRange { a: 3, b: 3 })));
        let high = splitter.split_by(3, 10, &|_: u64, b: u64| b + 4);
        assert!(matches!(high, Err(PiError::InvalidRange { a: 14, b: 10 })));
    }

    #[test]
    fn test_combination_associativity() {
        let k = ChudnovskyConstants::default();
        let splitter = BinarySplitter::new(&k);
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..25 {
            let a = rng.gen_range(0..200u64);
            let b = a + rng.gen_range(2..120u64);
            let m = rng.gen_range(a + 1..b);

            let whole = splitter.split(a, b).unwrap();
            let left = splitter.split(a, m).unwrap();
            let right = splitter.split(m, b).unwrap();
            assert_eq!(left.combine(right), whole, "[{}, {}) split at {}", a, b, m);
        }
    }

    #[test]
    fn test_midpoint_independence() {
        let k = ChudnovskyConstants::default();
        let splitter = BinarySplitter::new(&k);
        let reference = splitter.split(1, 150).unwrap();

        let leftmost = splitter.split_by(1, 150, &|a: u64, _: u64| a + 1).unwrap();
        let rightmost = splitter.split_by(1, 150, &|_: u64, b: u64| b - 1).unwrap();
        let third = splitter.split_by(1, 150, &|a: u64, b: u64| a + ((b - a) / 3).max(1)).unwrap();
        assert_eq!(leftmost, reference);
        assert_eq!(rightmost, reference);
        assert_eq!(third, reference);

        let mut rng = StdRng::seed_from_u64(42);
        let choices: Vec<u64> = (0..64).map(|_| rng.gen()).collect();
        let random = splitter
            .split_by(1, 150, &|a: u64, b: u64| a + 1 + choices[((a ^ b) % 64) as usize] % (b - a - 1))
            .unwrap();
        assert_eq!(random, reference);
    }

    #[test]
    fn test_identity_is_neutral() {
        let k = ChudnovskyConstants::default();
        let t = BinarySplitter::new(&k).split(4, 11).unwrap();
        assert_eq!(Triple::identity().combine(t.clone()), t);
        assert_eq!(t.clone().combine(Triple::identity()), t);
    }

    #[test]
    fn test_deterministic() {
        let k = ChudnovskyConstants::default();
        let splitter = BinarySplitter::new(&k);
        assert_eq!(splitter.split(1, 500).unwrap(), splitter.split(1, 500).unwrap());
    }

    #[test]
    fn test_growth() {
        let k = ChudnovskyConstants::default();
        let splitter = BinarySplitter::new(&k);
        let expected = [(10u64, 599u64, 577u64), (100, 6903, 6881), (1000, 78869, 78847)];

        for (size, q_bits, r_bits) in expected {
            let t = splitter.split(1, 1 + size).unwrap();
            assert_eq!(t.q.bits(), q_bits, "k = {}", size);
            assert_eq!(t.r.bits(), r_bits, "k = {}", size);
            assert!(t.q.bits() >= 53 * size);
        }

        let q_digits = splitter.split(1, 1001).unwrap().q.to_string().len();
        assert_eq!(q_digits, 23742);
    }
}
