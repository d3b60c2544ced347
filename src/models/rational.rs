use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ Signed, ToPrimitive };
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

use crate::errors::{ LabError, LabResult };

/// Exact fraction, always stored reduced with a positive denominator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rational {
    numer: i64,
    denom: i64,
}

impl Rational {
    pub const ZERO: Rational = Rational { numer: 0, denom: 1 };
    pub const ONE: Rational = Rational { numer: 1, denom: 1 };
    pub const ONE_HUNDREDTH: Rational = Rational { numer: 1, denom: 100 };

    /// Create a reduced fraction, rejecting a zero denominator
    pub fn new(numer: i64, denom: i64) -> LabResult<Self> {
        if denom == 0 {
            return Err(LabError::Parse("division by zero".to_string()));
        }
        Self::from_i128(numer as i128, denom as i128).ok_or_else(||
            LabError::Overflow(format!("{}/{}", numer, denom))
        )
    }

    pub fn from_integer(value: i64) -> Self {
        Rational { numer: value, denom: 1 }
    }

    /// Reduce a fraction whose parts are far from `i64::MIN`; `denom` must be nonzero
    pub(crate) fn reduced(numer: i64, denom: i64) -> Self {
        debug_assert!(denom != 0);
        let divisor = gcd(numer as i128, denom as i128) as i64;
        let sign = if denom < 0 { -1 } else { 1 };
        Rational { numer: sign * (numer / divisor), denom: sign * (denom / divisor) }
    }

    /// Reduce a wide fraction back into `i64` range; `None` on overflow or zero denominator
    pub(crate) fn from_i128(numer: i128, denom: i128) -> Option<Self> {
        if denom == 0 {
            return None;
        }
        let divisor = gcd(numer, denom);
        let (mut n, mut d) = (numer / divisor, denom / divisor);
        if d < 0 {
            n = -n;
            d = -d;
        }
        Some(Rational {
            numer: i64::try_from(n).ok()?,
            denom: i64::try_from(d).ok()?,
        })
    }

    pub fn numer(&self) -> i64 {
        self.numer
    }

    pub fn denom(&self) -> i64 {
        self.denom
    }

    pub fn is_integer(&self) -> bool {
        self.denom == 1
    }

    pub fn is_positive(&self) -> bool {
        self.numer > 0
    }

    pub fn checked_add(self, other: Rational) -> Option<Rational> {
        let (a, b, c, d) = self.wide(other);
        Self::from_i128(a.checked_mul(d)?.checked_add(c.checked_mul(b)?)?, b.checked_mul(d)?)
    }

    pub fn checked_sub(self, other: Rational) -> Option<Rational> {
        let (a, b, c, d) = self.wide(other);
        Self::from_i128(a.checked_mul(d)?.checked_sub(c.checked_mul(b)?)?, b.checked_mul(d)?)
    }

    pub fn checked_mul(self, other: Rational) -> Option<Rational> {
        let (a, b, c, d) = self.wide(other);
        Self::from_i128(a.checked_mul(c)?, b.checked_mul(d)?)
    }

    /// `None` when dividing by zero or on overflow
    pub fn checked_div(self, other: Rational) -> Option<Rational> {
        let (a, b, c, d) = self.wide(other);
        Self::from_i128(a.checked_mul(d)?, b.checked_mul(c)?)
    }

    pub fn checked_neg(self) -> Option<Rational> {
        Self::from_i128(-(self.numer as i128), self.denom as i128)
    }

    pub fn checked_pow(self, exp: u32) -> Option<Rational> {
        (0..exp).try_fold(Rational::ONE, |acc, _| acc.checked_mul(self))
    }

    /// `|self - other| < tolerance`, decided exactly
    pub fn within(self, other: Rational, tolerance: Rational) -> bool {
        within_exact(&self.to_big(), other, tolerance)
    }

    /// Unbounded copy of this fraction
    pub fn to_big(self) -> BigRational {
        BigRational::new(BigInt::from(self.numer), BigInt::from(self.denom))
    }

    /// Narrow an unbounded fraction; `None` when either part leaves `i64`
    pub fn from_big(value: &BigRational) -> Option<Rational> {
        // BigRational is kept reduced with a positive denominator
        Some(Rational {
            numer: value.numer().to_i64()?,
            denom: value.denom().to_i64()?,
        })
    }

    pub fn to_f64(&self) -> f64 {
        (self.numer as f64) / (self.denom as f64)
    }

    fn wide(self, other: Rational) -> (i128, i128, i128, i128) {
        (self.numer as i128, self.denom as i128, other.numer as i128, other.denom as i128)
    }
}

/// `|value - truth| < tolerance` for a value of any size; never true for a non-positive tolerance
pub fn within_exact(value: &BigRational, truth: Rational, tolerance: Rational) -> bool {
    tolerance.is_positive() && (value - truth.to_big()).abs() < tolerance.to_big()
}

fn gcd(a: i128, b: i128) -> i128 {
    // Euclidean algorithm on magnitudes
    let mut x = a.unsigned_abs();
    let mut y = b.unsigned_abs();
    while y != 0 {
        let temp = y;
        y = x % y;
        x = temp;
    }
    if x == 0 { 1 } else { x as i128 }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Rational::from_integer(value)
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b, c, d) = self.wide(*other);
        (a * d).cmp(&(c * b))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}
