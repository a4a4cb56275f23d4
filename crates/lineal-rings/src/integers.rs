//! The ring of integers Z.

use std::cmp::Ordering;
use std::fmt;

use dashu::base::Abs;
use dashu::integer::IBig;
use num_traits::ToPrimitive;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::{AlgebraError, Result};
use crate::prime_field::Fp;
use crate::traits::{ConvertFrom, ElementFactory, RingElement};

/// Bound of the interval `random_value` samples from.
const RANDOM_RANGE: i64 = 100;

/// An arbitrary precision integer.
///
/// Z is a ring but not a field: only the units `1` and `-1` can be
/// inverted, so determinants over Z are computed by cofactor expansion.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Z(pub IBig);

impl Z {
    /// Creates a new integer.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Returns the inner `IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Returns a reference to the inner `IBig`.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }
}

/// Factory for [`Z`]. Stateless.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct IntegerRing;

impl RingElement for Z {
    type Factory = IntegerRing;

    fn factory(&self) -> IntegerRing {
        IntegerRing
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
        } else if self.0 == IBig::ONE || self.0 == -IBig::ONE {
            Ok(self.clone())
        } else {
            Err(AlgebraError::Unsupported {
                operation: "invert",
                ring: "Z",
            })
        }
    }

    fn is_zero(&self) -> bool {
        self.0 == IBig::ZERO
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }
}

impl ElementFactory for IntegerRing {
    type Element = Z;

    fn zero(&self) -> Z {
        Z(IBig::ZERO)
    }

    fn one(&self) -> Z {
        Z(IBig::ONE)
    }

    fn get(&self, value: i64) -> Z {
        Z::new(value)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(&self, value: f64) -> Result<Z> {
        // Only integral values inside the i64 range have an exact image.
        if value.is_finite() && value.fract() == 0.0 && value.abs() < 9.2e18 {
            Ok(Z::new(value as i64))
        } else {
            Err(AlgebraError::Conversion {
                value: value.to_string(),
                target: "Z",
            })
        }
    }

    fn random_value<G: Rng + ?Sized>(&self, rng: &mut G) -> Z {
        Z::new(rng.gen_range(-RANDOM_RANGE..=RANDOM_RANGE))
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn gaussian_random_value<G: Rng + ?Sized>(&self, rng: &mut G) -> Z {
        let sample: f64 = rng.sample(StandardNormal);
        Z::new((sample * RANDOM_RANGE as f64).round() as i64)
    }
}

impl ConvertFrom<Fp> for IntegerRing {
    fn convert(&self, value: &Fp) -> Result<Z> {
        Ok(Z(IBig::from(value.value())))
    }
}

impl ToPrimitive for Z {
    fn to_i64(&self) -> Option<i64> {
        i64::try_from(self.0.clone()).ok()
    }

    fn to_u64(&self) -> Option<u64> {
        u64::try_from(self.0.clone()).ok()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.0.to_f64().value())
    }
}

impl std::ops::Add for Z {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Z {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul for Z {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl std::ops::Neg for Z {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Z {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<IBig> for Z {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

impl fmt::Display for Z {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
