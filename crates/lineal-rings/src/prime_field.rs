//! Prime fields Z_p with a modulus chosen at runtime.
//!
//! Unlike the other rings in this crate the factory carries state: every
//! [`PrimeField`] is bound to its modulus, and elements of two fields with
//! different moduli refuse to be combined.

use std::cmp::Ordering;
use std::fmt;

use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::{AlgebraError, Result};
use crate::traits::{ConvertFrom, ElementFactory, RingElement};

/// Factory for the field Z_p.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PrimeField {
    modulus: u64,
}

impl PrimeField {
    /// Creates the field with `modulus` elements.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::InvalidArgument`] if `modulus` is not prime.
    pub fn new(modulus: u64) -> Result<Self> {
        if is_prime(modulus) {
            Ok(Self { modulus })
        } else {
            Err(AlgebraError::InvalidArgument(format!(
                "{modulus} is not a prime modulus"
            )))
        }
    }

    /// The field with two elements.
    #[must_use]
    pub const fn binary() -> Self {
        Self { modulus: 2 }
    }

    /// Returns the characteristic.
    #[must_use]
    pub const fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Reduces a signed integer into this field.
    #[must_use]
    pub fn element(&self, value: i64) -> Fp {
        let m = i128::from(self.modulus);
        let reduced = i128::from(value).rem_euclid(m);
        Fp {
            // rem_euclid keeps the value in [0, modulus)
            value: u64::try_from(reduced).unwrap_or_default(),
            modulus: self.modulus,
        }
    }
}

/// Bases that make Miller-Rabin exact for every `u64`.
const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    let product = u128::from(a) * u128::from(b) % u128::from(m);
    // product < m, so it fits
    u64::try_from(product).unwrap_or_default()
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut acc = 1 % m;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mul_mod(acc, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    acc
}

/// Deterministic Miller-Rabin over the first twelve primes.
fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for &p in &WITNESSES {
        if n % p == 0 {
            return n == p;
        }
    }

    let d = (n - 1) >> (n - 1).trailing_zeros();
    let s = (n - 1).trailing_zeros();
    WITNESSES.iter().all(|&a| {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            return true;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                return true;
            }
        }
        false
    })
}

/// An element of a prime field.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Fp {
    value: u64,
    modulus: u64,
}

impl Fp {
    /// Returns the canonical representative in `[0, p)`.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.value
    }

    /// Returns the characteristic of the field this element lives in.
    #[must_use]
    pub const fn modulus(self) -> u64 {
        self.modulus
    }

    fn same_field(&self, rhs: &Self) -> Result<()> {
        if self.modulus == rhs.modulus {
            Ok(())
        } else {
            Err(AlgebraError::mismatch(&self.factory(), &rhs.factory()))
        }
    }

    fn with_value(self, value: u64) -> Self {
        Self {
            value,
            modulus: self.modulus,
        }
    }
}

impl RingElement for Fp {
    type Factory = PrimeField;

    const IS_FIELD: bool = true;

    fn factory(&self) -> PrimeField {
        PrimeField {
            modulus: self.modulus,
        }
    }

    fn add(&self, rhs: &Self) -> Result<Self> {
        self.same_field(rhs)?;
        let sum = (u128::from(self.value) + u128::from(rhs.value)) % u128::from(self.modulus);
        Ok(self.with_value(sum as u64))
    }

    fn subtract(&self, rhs: &Self) -> Result<Self> {
        self.same_field(rhs)?;
        self.add(&rhs.negate())
    }

    fn multiply(&self, rhs: &Self) -> Result<Self> {
        self.same_field(rhs)?;
        // u128 avoids overflow for any u64 modulus
        let product = (u128::from(self.value) * u128::from(rhs.value)) % u128::from(self.modulus);
        Ok(self.with_value(product as u64))
    }

    fn negate(&self) -> Self {
        if self.value == 0 {
            *self
        } else {
            self.with_value(self.modulus - self.value)
        }
    }

    fn invert(&self) -> Result<Self> {
        if self.value == 0 {
            return Err(AlgebraError::DivisionByZero);
        }

        // Extended Euclidean algorithm
        let mut t = 0i128;
        let mut new_t = 1i128;
        let mut r = i128::from(self.modulus);
        let mut new_r = i128::from(self.value);

        while new_r != 0 {
            let quotient = r / new_r;
            (t, new_t) = (new_t, t - quotient * new_t);
            (r, new_r) = (new_r, r - quotient * new_r);
        }

        let inverse = t.rem_euclid(i128::from(self.modulus));
        Ok(self.with_value(u64::try_from(inverse).unwrap_or_default()))
    }

    fn is_zero(&self) -> bool {
        self.value == 0
    }

    fn is_one(&self) -> bool {
        self.value == 1
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }

    fn abs(&self) -> Self {
        *self
    }
}

impl ElementFactory for PrimeField {
    type Element = Fp;

    fn zero(&self) -> Fp {
        self.element(0)
    }

    fn one(&self) -> Fp {
        self.element(1)
    }

    fn get(&self, value: i64) -> Fp {
        self.element(value)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(&self, value: f64) -> Result<Fp> {
        if value.is_finite() && value.fract() == 0.0 && value.abs() < 9.2e18 {
            Ok(self.element(value as i64))
        } else {
            Err(AlgebraError::Conversion {
                value: value.to_string(),
                target: "Z_p",
            })
        }
    }

    fn random_value<G: Rng + ?Sized>(&self, rng: &mut G) -> Fp {
        Fp {
            value: rng.gen_range(0..self.modulus),
            modulus: self.modulus,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn gaussian_random_value<G: Rng + ?Sized>(&self, rng: &mut G) -> Fp {
        let sample: f64 = rng.sample(StandardNormal);
        self.element((sample * 100.0).round() as i64)
    }
}

impl ConvertFrom<Fp> for PrimeField {
    /// Re-reduces the representative; lets elements move between fields.
    fn convert(&self, value: &Fp) -> Result<Fp> {
        Ok(Fp {
            value: value.value % self.modulus,
            modulus: self.modulus,
        })
    }
}

impl fmt::Display for Fp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
