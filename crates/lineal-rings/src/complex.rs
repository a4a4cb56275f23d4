//! Complex numbers over double precision reals.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use num_complex::Complex64;
use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::{AlgebraError, Result};
use crate::real::Real;
use crate::traits::{ConvertFrom, ElementFactory, RingElement};

/// A complex number with `f64` components.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Complex(pub Complex64);

impl Complex {
    /// Creates `re + im i`.
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self(Complex64::new(re, im))
    }

    /// The real part.
    #[must_use]
    pub const fn re(self) -> f64 {
        self.0.re
    }

    /// The imaginary part.
    #[must_use]
    pub const fn im(self) -> f64 {
        self.0.im
    }

    /// The complex conjugate.
    #[must_use]
    pub fn conj(self) -> Self {
        Self(self.0.conj())
    }

    /// The modulus `|z|`.
    #[must_use]
    pub fn modulus(self) -> f64 {
        self.0.norm()
    }
}

/// Factory for [`Complex`]. Stateless.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct ComplexField;

impl RingElement for Complex {
    type Factory = ComplexField;

    const IS_FIELD: bool = true;

    fn factory(&self) -> ComplexField {
        ComplexField
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
            Ok(Self(self.0.inv()))
        }
    }

    fn is_zero(&self) -> bool {
        self.0.re == 0.0 && self.0.im == 0.0
    }

    fn is_one(&self) -> bool {
        self.0.re == 1.0 && self.0.im == 0.0
    }

    /// Lexicographic on (real, imaginary).
    fn compare(&self, other: &Self) -> Ordering {
        self.0
            .re
            .total_cmp(&other.0.re)
            .then_with(|| self.0.im.total_cmp(&other.0.im))
    }

    /// The modulus, as a complex number with zero imaginary part.
    fn abs(&self) -> Self {
        Self::new(self.0.norm(), 0.0)
    }

    fn sqrt(&self) -> Result<Self> {
        Ok(Self(self.0.sqrt()))
    }
}

impl ElementFactory for ComplexField {
    type Element = Complex;

    fn zero(&self) -> Complex {
        Complex::new(0.0, 0.0)
    }

    fn one(&self) -> Complex {
        Complex::new(1.0, 0.0)
    }

    #[allow(clippy::cast_precision_loss)]
    fn get(&self, value: i64) -> Complex {
        Complex::new(value as f64, 0.0)
    }

    fn from_f64(&self, value: f64) -> Result<Complex> {
        Ok(Complex::new(value, 0.0))
    }

    fn random_value<G: Rng + ?Sized>(&self, rng: &mut G) -> Complex {
        Complex::new(rng.gen(), rng.gen())
    }

    fn gaussian_random_value<G: Rng + ?Sized>(&self, rng: &mut G) -> Complex {
        Complex::new(rng.sample(StandardNormal), rng.sample(StandardNormal))
    }
}

impl ConvertFrom<Real> for ComplexField {
    fn convert(&self, value: &Real) -> Result<Complex> {
        Ok(Complex::new(value.0, 0.0))
    }
}

impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.re.to_bits().hash(state);
        self.0.im.to_bits().hash(state);
    }
}

impl From<Complex64> for Complex {
    fn from(value: Complex64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.im < 0.0 {
            write!(f, "{}-{}i", self.0.re, -self.0.im)
        } else {
            write!(f, "{}+{}i", self.0.re, self.0.im)
        }
    }
}
