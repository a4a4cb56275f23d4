//! The field of rational numbers Q.

use std::cmp::Ordering;
use std::fmt;

use dashu::base::{Abs, Inverse};
use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;
use num_traits::ToPrimitive;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::{AlgebraError, Result};
use crate::integers::Z;
use crate::traits::{ConvertFrom, ElementFactory, RingElement};

/// Resolution of `gaussian_random_value`: samples are rounded to
/// multiples of `1 / GAUSSIAN_SCALE`.
const GAUSSIAN_SCALE: i64 = 1000;

/// An exact rational number, always kept in lowest terms.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Q(pub RBig);

impl Q {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "denominator cannot be zero");
        let num = if den < 0 { -IBig::from(num) } else { IBig::from(num) };
        Self(RBig::from_parts(num, UBig::from(den.unsigned_abs())))
    }

    /// Creates a new rational, rejecting a zero denominator.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::DivisionByZero`] if `den` is zero.
    pub fn try_new(num: i64, den: i64) -> Result<Self> {
        if den == 0 {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(Self::new(num, den))
    }

    /// Creates a rational from an integer.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(RBig::from(IBig::from(n)))
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> Z {
        Z(self.0.numerator().clone())
    }

    /// Returns the (positive) denominator.
    #[must_use]
    pub fn denominator(&self) -> Z {
        Z(IBig::from(self.0.denominator().clone()))
    }

    /// Returns true if the denominator is one.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        *self.0.denominator() == UBig::ONE
    }

    /// Returns the inner `RBig`.
    #[must_use]
    pub fn into_inner(self) -> RBig {
        self.0
    }
}

/// Factory for [`Q`]. Stateless.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct RationalField;

impl RingElement for Q {
    type Factory = RationalField;

    const IS_FIELD: bool = true;

    fn factory(&self) -> RationalField {
        RationalField
    }

    fn add(&self, rhs: &Self) -> Result<Self> {
        Ok(Self(&self.0 + &rhs.0))
    }

    fn subtract(&self, rhs: &Self) -> Result<Self> {
        Ok(Self(&self.0 - &rhs.0))
    }

    fn multiply(&self, rhs: &Self) -> Result<Self> {
        Ok(Self(&self.0 * &rhs.0))
    }

    fn negate(&self) -> Self {
        Self(-&self.0)
    }

    fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            Err(AlgebraError::DivisionByZero)
        } else {
            Ok(Self(self.0.clone().inv()))
        }
    }

    fn is_zero(&self) -> bool {
        self.0 == RBig::ZERO
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }
}

impl ElementFactory for RationalField {
    type Element = Q;

    fn zero(&self) -> Q {
        Q(RBig::ZERO)
    }

    fn one(&self) -> Q {
        Q(RBig::ONE)
    }

    fn get(&self, value: i64) -> Q {
        Q::from_integer(value)
    }

    fn from_f64(&self, value: f64) -> Result<Q> {
        exact_rational(value).map(Q).ok_or_else(|| AlgebraError::Conversion {
            value: value.to_string(),
            target: "Q",
        })
    }

    fn random_value<G: Rng + ?Sized>(&self, rng: &mut G) -> Q {
        Q::new(rng.gen_range(-100..=100), rng.gen_range(1..=100))
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn gaussian_random_value<G: Rng + ?Sized>(&self, rng: &mut G) -> Q {
        let sample: f64 = rng.sample(StandardNormal);
        Q::new((sample * GAUSSIAN_SCALE as f64).round() as i64, GAUSSIAN_SCALE)
    }
}

/// The exact value of a finite binary floating point number.
fn exact_rational(value: f64) -> Option<RBig> {
    if !value.is_finite() {
        return None;
    }
    if value == 0.0 {
        return Some(RBig::ZERO);
    }

    let bits = value.to_bits();
    let biased = i64::try_from((bits >> 52) & 0x7ff).ok()?;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };

    let mut numerator = IBig::from(mantissa);
    if value.is_sign_negative() {
        numerator = -numerator;
    }
    let shift = usize::try_from(exponent.unsigned_abs()).ok()?;
    Some(if exponent >= 0 {
        RBig::from(numerator << shift)
    } else {
        RBig::from_parts(numerator, UBig::ONE << shift)
    })
}

impl ConvertFrom<Z> for RationalField {
    fn convert(&self, value: &Z) -> Result<Q> {
        Ok(Q(RBig::from(value.0.clone())))
    }
}

impl ToPrimitive for Q {
    fn to_i64(&self) -> Option<i64> {
        if self.is_integer() {
            self.numerator().to_i64()
        } else {
            None
        }
    }

    fn to_u64(&self) -> Option<u64> {
        if self.is_integer() {
            self.numerator().to_u64()
        } else {
            None
        }
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.0.to_f64().value())
    }
}

impl std::ops::Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl std::ops::Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<RBig> for Q {
    fn from(value: RBig) -> Self {
        Self(value)
    }
}

impl fmt::Display for Q {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.0.numerator())
        } else {
            write!(f, "{}/{}", self.0.numerator(), self.0.denominator())
        }
    }
}
