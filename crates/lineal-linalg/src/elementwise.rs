//! Entrywise comparisons and logical operators.
//!
//! Results are matrices and vectors over the operand's own ring with
//! `one` for true and `zero` for false. The logical operators read any
//! non-zero entry as true.

use std::cmp::Ordering;

use lineal_rings::{ElementFactory, RingElement};

use crate::dense_matrix::Matrix;
use crate::error::Result;
use crate::vector::Vector;

/// An entrywise relation between two elements, decided by
/// [`RingElement::compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// `a == b`
    Eq,
    /// `a != b`
    Ne,
    /// `a < b`
    Lt,
    /// `a <= b`
    Le,
    /// `a > b`
    Gt,
    /// `a >= b`
    Ge,
}

impl Comparison {
    /// Returns true if `a` and `b` stand in this relation.
    #[must_use]
    pub fn holds<E: RingElement>(self, a: &E, b: &E) -> bool {
        let ordering = a.compare(b);
        match self {
            Self::Eq => ordering == Ordering::Equal,
            Self::Ne => ordering != Ordering::Equal,
            Self::Lt => ordering == Ordering::Less,
            Self::Le => ordering != Ordering::Greater,
            Self::Gt => ordering == Ordering::Greater,
            Self::Ge => ordering != Ordering::Less,
        }
    }
}

fn truth<F: ElementFactory>(factory: &F, value: bool) -> F::Element {
    if value {
        factory.one()
    } else {
        factory.zero()
    }
}

impl<E: RingElement> Matrix<E> {
    /// Compares two equally shaped matrices entry by entry.
    ///
    /// # Errors
    ///
    /// Shape or factory mismatch.
    pub fn compare(&self, other: &Self, comparison: Comparison) -> Result<Self> {
        let factory = self.factory().clone();
        self.apply_with(other, |a, b| Ok(truth(&factory, comparison.holds(a, b))))
    }

    /// Compares every entry against `scalar`.
    ///
    /// # Errors
    ///
    /// Factory mismatch.
    pub fn compare_scalar(&self, scalar: &E, comparison: Comparison) -> Result<Self> {
        let factory = self.factory().clone();
        factory.check(scalar)?;
        self.apply(|a| Ok(truth(&factory, comparison.holds(a, scalar))))
    }

    /// Entrywise logical and.
    ///
    /// # Errors
    ///
    /// Shape or factory mismatch.
    pub fn logical_and(&self, other: &Self) -> Result<Self> {
        let factory = self.factory().clone();
        self.apply_with(other, |a, b| Ok(truth(&factory, !a.is_zero() && !b.is_zero())))
    }

    /// Entrywise logical or.
    ///
    /// # Errors
    ///
    /// Shape or factory mismatch.
    pub fn logical_or(&self, other: &Self) -> Result<Self> {
        let factory = self.factory().clone();
        self.apply_with(other, |a, b| Ok(truth(&factory, !a.is_zero() || !b.is_zero())))
    }

    /// Entrywise logical negation: one where an entry is zero.
    #[must_use]
    pub fn logical_not(&self) -> Self {
        let factory = self.factory();
        let data = self
            .as_slice()
            .iter()
            .map(|a| truth(factory, a.is_zero()))
            .collect();
        Self::from_parts(data, self.num_rows(), self.num_cols(), factory.clone())
    }
}

impl<E: RingElement> Vector<E> {
    /// Compares two vectors of equal length entry by entry.
    ///
    /// # Errors
    ///
    /// Length or factory mismatch.
    pub fn compare(&self, other: &Self, comparison: Comparison) -> Result<Self> {
        let factory = self.factory().clone();
        self.zip_with(other, "Vector::compare", |a, b| {
            Ok(truth(&factory, comparison.holds(a, b)))
        })
    }

    /// Compares every entry against `scalar`.
    ///
    /// # Errors
    ///
    /// Factory mismatch.
    pub fn compare_scalar(&self, scalar: &E, comparison: Comparison) -> Result<Self> {
        let factory = self.factory().clone();
        factory.check(scalar)?;
        self.apply(|a| Ok(truth(&factory, comparison.holds(a, scalar))))
    }

    /// Entrywise logical and.
    ///
    /// # Errors
    ///
    /// Length or factory mismatch.
    pub fn logical_and(&self, other: &Self) -> Result<Self> {
        let factory = self.factory().clone();
        self.zip_with(other, "Vector::logical_and", |a, b| {
            Ok(truth(&factory, !a.is_zero() && !b.is_zero()))
        })
    }

    /// Entrywise logical or.
    ///
    /// # Errors
    ///
    /// Length or factory mismatch.
    pub fn logical_or(&self, other: &Self) -> Result<Self> {
        let factory = self.factory().clone();
        self.zip_with(other, "Vector::logical_or", |a, b| {
            Ok(truth(&factory, !a.is_zero() || !b.is_zero()))
        })
    }

    /// Entrywise logical negation: one where an entry is zero.
    #[must_use]
    pub fn logical_not(&self) -> Self {
        let factory = self.factory();
        let entries = self
            .entries()
            .iter()
            .map(|a| truth(factory, a.is_zero()))
            .collect();
        Self::from_parts(entries, factory.clone())
    }
}
