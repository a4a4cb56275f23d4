//! The algebraic element contract.
//!
//! Every matrix entry is a [`RingElement`]. Elements know the
//! [`ElementFactory`] that produced them; the factory carries whatever
//! configuration the element type needs (a prime modulus, say) and hands
//! out the canonical constants. Two elements may only be combined when
//! their factories compare equal.
//!
//! ```text
//! ElementFactory  --produces-->  RingElement
//!       ^                             |
//!       +-------- factory() ----------+
//! ```

use std::cmp::Ordering;
use std::fmt::{Debug, Display};

use rand::Rng;

use crate::error::{AlgebraError, Result};

/// An element of a commutative ring with identity.
///
/// Arithmetic is fallible: combining elements from different factories is a
/// contract violation reported as [`AlgebraError::FactoryMismatch`], and
/// rings without general division report [`AlgebraError::Unsupported`]
/// from [`invert`](Self::invert).
///
/// # Laws
///
/// - `add` is associative and commutative with identity `factory().zero()`
/// - `multiply` is associative with identity `factory().one()`
/// - `multiply` distributes over `add`
/// - `x.add(&x.negate())` is zero
pub trait RingElement: Clone + PartialEq + Debug + Display + Send + Sync + 'static {
    /// The factory type producing elements of this ring.
    type Factory: ElementFactory<Element = Self>;

    /// Whether every non-zero element has a multiplicative inverse.
    ///
    /// Algorithms consult this instead of trying a division and recovering
    /// from the failure.
    const IS_FIELD: bool = false;

    /// Returns the factory this element belongs to.
    fn factory(&self) -> Self::Factory;

    /// Returns `self + rhs`.
    fn add(&self, rhs: &Self) -> Result<Self>;

    /// Returns `self - rhs`.
    fn subtract(&self, rhs: &Self) -> Result<Self>;

    /// Returns `self * rhs`.
    fn multiply(&self, rhs: &Self) -> Result<Self>;

    /// Returns `-self`.
    #[must_use]
    fn negate(&self) -> Self;

    /// Returns the multiplicative inverse.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::DivisionByZero`] for zero, [`AlgebraError::Unsupported`]
    /// when the ring has no inverse for this element.
    fn invert(&self) -> Result<Self> {
        Err(AlgebraError::Unsupported {
            operation: "invert",
            ring: std::any::type_name::<Self>(),
        })
    }

    /// Returns `self / rhs`.
    fn divide(&self, rhs: &Self) -> Result<Self> {
        self.multiply(&rhs.invert()?)
    }

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// A total order on the elements.
    ///
    /// For unordered rings this is an arbitrary but consistent order; it is
    /// only relied upon to pick pivots.
    fn compare(&self, other: &Self) -> Ordering;

    /// Returns the absolute value.
    #[must_use]
    fn abs(&self) -> Self;

    /// Returns the magnitude used for pivot selection.
    #[must_use]
    fn norm(&self) -> Self {
        self.abs()
    }

    /// Returns the principal square root.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::Unsupported`] for rings without square roots,
    /// [`AlgebraError::InvalidArgument`] where no root exists.
    fn sqrt(&self) -> Result<Self> {
        Err(AlgebraError::Unsupported {
            operation: "sqrt",
            ring: std::any::type_name::<Self>(),
        })
    }

    /// Returns true if `self` orders strictly after `other`.
    fn gt(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }

    /// Returns true if `self` orders strictly before `other`.
    fn lt(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    /// Computes `self^n` by repeated squaring.
    fn pow(&self, n: u32) -> Result<Self> {
        let mut result = self.factory().one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.multiply(&base)?;
            }
            exp >>= 1;
            if exp > 0 {
                base = base.multiply(&base)?;
            }
        }

        Ok(result)
    }
}

/// Produces elements of one configured ring.
///
/// Factories are cheap values compared by configuration: two prime-field
/// factories are equal exactly when their moduli are.
pub trait ElementFactory: Clone + PartialEq + Debug + Send + Sync + 'static {
    /// The element type produced.
    type Element: RingElement<Factory = Self>;

    /// The additive identity.
    fn zero(&self) -> Self::Element;

    /// The multiplicative identity.
    fn one(&self) -> Self::Element;

    /// The additive inverse of one.
    fn minus_one(&self) -> Self::Element {
        self.one().negate()
    }

    /// The image of an integer in this ring.
    fn get(&self, value: i64) -> Self::Element;

    /// Converts a floating point value.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::Conversion`] if the value has no image in this ring.
    fn from_f64(&self, value: f64) -> Result<Self::Element>;

    /// A vector of `len` zeros.
    fn zeros(&self, len: usize) -> Vec<Self::Element> {
        vec![self.zero(); len]
    }

    /// A `rows x cols` grid of zeros.
    fn zeros_2d(&self, rows: usize, cols: usize) -> Vec<Vec<Self::Element>> {
        (0..rows).map(|_| self.zeros(cols)).collect()
    }

    /// A pseudo-random element drawn uniformly from a type-specific range.
    fn random_value<G: Rng + ?Sized>(&self, rng: &mut G) -> Self::Element;

    /// A pseudo-random element derived from a standard normal sample.
    fn gaussian_random_value<G: Rng + ?Sized>(&self, rng: &mut G) -> Self::Element;

    /// Checks that `element` was produced by this factory.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::FactoryMismatch`] otherwise.
    fn check(&self, element: &Self::Element) -> Result<()> {
        let other = element.factory();
        if other == *self {
            Ok(())
        } else {
            Err(AlgebraError::mismatch(self, &other))
        }
    }
}

/// Conversion of elements of another ring into this factory's ring.
pub trait ConvertFrom<S: RingElement>: ElementFactory {
    /// Converts a single element.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::Conversion`] if `value` has no image here.
    fn convert(&self, value: &S) -> Result<Self::Element>;
}
