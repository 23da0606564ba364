use crate::error::SymbolicError;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Largest bit length a power may produce before it is reported as overflow.
/// Squares of any finite `f64` need under 2200 bits.
pub const MAX_POW_BITS: u64 = 1 << 20;

/// Exact arbitrary-precision rational number, always in lowest terms with a
/// positive denominator.
///
/// Sums, differences, products and negations never fail. Only powers whose
/// result would exceed [`MAX_POW_BITS`] surface as [`SymbolicError::Overflow`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rational(BigRational);

impl Rational {
    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    pub fn one() -> Self {
        Self(BigRational::one())
    }

    /// Build `num / den`, reducing to lowest terms.
    pub fn new(num: i128, den: i128) -> Result<Self, SymbolicError> {
        if den == 0 {
            return Err(SymbolicError::DivisionByZero);
        }
        Ok(Self(BigRational::new(BigInt::from(num), BigInt::from(den))))
    }

    pub fn integer(value: i64) -> Self {
        Self(BigRational::from_integer(BigInt::from(value)))
    }

    /// Exact conversion of a finite `f64`. Every finite double, subnormals
    /// included, is a dyadic rational and converts without rounding.
    pub fn from_f64(value: f64) -> Result<Self, SymbolicError> {
        BigRational::from_float(value)
            .map(Self)
            .ok_or(SymbolicError::NonFinite(value))
    }

    pub fn numerator(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denominator(&self) -> &BigInt {
        self.0.denom()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Nearest `f64`, if the value is within `f64` range.
    pub fn to_f64(&self) -> Option<f64> {
        self.0.to_f64()
    }

    /// Bits needed for the larger of numerator and denominator.
    pub fn bits(&self) -> u64 {
        self.0.numer().bits().max(self.0.denom().bits())
    }

    pub fn checked_pow(&self, exp: u32) -> Result<Self, SymbolicError> {
        if self.bits().saturating_mul(u64::from(exp)) > MAX_POW_BITS {
            return Err(SymbolicError::Overflow("exponentiation"));
        }
        // Powers of coprime integers stay coprime, and the denominator stays positive.
        Ok(Self(BigRational::new_raw(
            self.0.numer().pow(exp),
            self.0.denom().pow(exp),
        )))
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::integer(value)
    }
}

impl From<i32> for Rational {
    fn from(value: i32) -> Self {
        Self::integer(i64::from(value))
    }
}

impl From<BigRational> for Rational {
    fn from(value: BigRational) -> Self {
        Self(value)
    }
}

impl Add for &Rational {
    type Output = Rational;
    fn add(self, rhs: &Rational) -> Rational {
        Rational(&self.0 + &rhs.0)
    }
}

impl Sub for &Rational {
    type Output = Rational;
    fn sub(self, rhs: &Rational) -> Rational {
        Rational(&self.0 - &rhs.0)
    }
}

impl Mul for &Rational {
    type Output = Rational;
    fn mul(self, rhs: &Rational) -> Rational {
        Rational(&self.0 * &rhs.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        Rational(-&self.0)
    }
}

impl Neg for Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        Rational(-self.0)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_integer() {
            write!(f, "{}", self.0.numer())
        } else {
            write!(f, "{}/{}", self.0.numer(), self.0.denom())
        }
    }
}
