//! Double precision reals.
//!
//! `Real` is the floating point specialization the eigenvalue engine works
//! with. Arithmetic is IEEE 754; equality is exact bitwise-value equality,
//! so compare results of long computations with a tolerance.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use num_traits::ToPrimitive;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::{AlgebraError, Result};
use crate::integers::Z;
use crate::rationals::Q;
use crate::traits::{ConvertFrom, ElementFactory, RingElement};

/// A double precision floating point number.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug, Default)]
pub struct Real(pub f64);

impl Real {
    /// Returns the wrapped value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

/// Factory for [`Real`]. Stateless.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct RealField;

impl RingElement for Real {
    type Factory = RealField;

    const IS_FIELD: bool = true;

    fn factory(&self) -> RealField {
        RealField
    }

    fn add(&self, rhs: &Self) -> Result<Self> {
        Ok(Self(self.0 + rhs.0))
    }

    fn subtract(&self, rhs: &Self) -> Result<Self> {
        Ok(Self(self.0 - rhs.0))
    }

    fn multiply(&self, rhs: &Self) -> Result<Self> {
        Ok(Self(self.0 * rhs.0))
    }

    fn negate(&self) -> Self {
        Self(-self.0)
    }

    fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            Err(AlgebraError::DivisionByZero)
        } else {
            Ok(Self(self.0.recip()))
        }
    }

    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    fn is_one(&self) -> bool {
        self.0 == 1.0
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }

    fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    fn sqrt(&self) -> Result<Self> {
        if self.0 < 0.0 {
            return Err(AlgebraError::InvalidArgument(format!(
                "square root of negative real {}",
                self.0
            )));
        }
        Ok(Self(self.0.sqrt()))
    }
}

impl ElementFactory for RealField {
    type Element = Real;

    fn zero(&self) -> Real {
        Real(0.0)
    }

    fn one(&self) -> Real {
        Real(1.0)
    }

    #[allow(clippy::cast_precision_loss)]
    fn get(&self, value: i64) -> Real {
        Real(value as f64)
    }

    fn from_f64(&self, value: f64) -> Result<Real> {
        Ok(Real(value))
    }

    fn random_value<G: Rng + ?Sized>(&self, rng: &mut G) -> Real {
        Real(rng.gen::<f64>())
    }

    fn gaussian_random_value<G: Rng + ?Sized>(&self, rng: &mut G) -> Real {
        Real(rng.sample(StandardNormal))
    }
}

impl ConvertFrom<Z> for RealField {
    fn convert(&self, value: &Z) -> Result<Real> {
        value.to_f64().map(Real).ok_or_else(|| AlgebraError::Conversion {
            value: value.to_string(),
            target: "R",
        })
    }
}

impl ConvertFrom<Q> for RealField {
    fn convert(&self, value: &Q) -> Result<Real> {
        value.to_f64().map(Real).ok_or_else(|| AlgebraError::Conversion {
            value: value.to_string(),
            target: "R",
        })
    }
}

impl ToPrimitive for Real {
    #[allow(clippy::cast_possible_truncation)]
    fn to_i64(&self) -> Option<i64> {
        (self.0.is_finite() && self.0.fract() == 0.0).then_some(self.0 as i64)
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_i64().and_then(|v| u64::try_from(v).ok())
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.0)
    }
}

impl Hash for Real {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl std::ops::Add for Real {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Real {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul for Real {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl std::ops::Neg for Real {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<f64> for Real {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
