//! Determinants.
//!
//! Two strategies:
//! - [`gaussian_method`]: elimination with largest-norm pivoting, O(n^3),
//!   needs a field
//! - [`leibniz_method`]: cofactor expansion along the first column, O(n!),
//!   works over any commutative ring
//!
//! [`Matrix::det`] picks between them from [`RingElement::IS_FIELD`].

use log::debug;

use lineal_rings::{AlgebraError, ElementFactory, RingElement};

use crate::dense_matrix::Matrix;
use crate::error::Result;

/// Determinant by Gaussian elimination.
///
/// Each step pivots on the row whose first entry has the largest norm,
/// clears the first column, multiplies the running product by the pivot
/// (flipping its sign for odd pivot rows) and continues on the minor with
/// the pivot row and first column removed.
///
/// # Errors
///
/// [`LinalgError::NotSquare`](crate::LinalgError::NotSquare), or
/// [`AlgebraError::Unsupported`] if the element type is not a field.
pub fn gaussian_method<E: RingElement>(m: &Matrix<E>) -> Result<E> {
    m.require_square()?;
    if !E::IS_FIELD {
        return Err(AlgebraError::Unsupported {
            operation: "gaussian determinant",
            ring: std::any::type_name::<E>(),
        }
        .into());
    }

    let factory = m.factory().clone();
    if m.num_rows() == 0 {
        return Ok(factory.one());
    }

    let mut work = m.clone();
    let mut det = factory.one();

    while work.num_rows() > 1 {
        let n = work.num_rows();

        let mut pivot_row = 0;
        let mut largest = work.at(0, 0).norm();
        for r in 1..n {
            let candidate = work.at(r, 0).norm();
            if candidate.gt(&largest) {
                largest = candidate;
                pivot_row = r;
            }
        }
        if largest.is_zero() {
            return Ok(factory.zero());
        }

        let pivot = work.at(pivot_row, 0).clone();
        for r in 0..n {
            if r == pivot_row || work.at(r, 0).is_zero() {
                continue;
            }
            let factor = work.at(r, 0).divide(&pivot)?;
            for c in 1..n {
                let value = work
                    .at(r, c)
                    .subtract(&factor.multiply(work.at(pivot_row, c))?)?;
                *work.at_mut(r, c) = value;
            }
        }

        det = det.multiply(&pivot)?;
        if pivot_row % 2 == 1 {
            det = det.negate();
        }
        work = work.minor(Some(pivot_row), Some(0));
    }

    Ok(det.multiply(work.at(0, 0))?)
}

/// Determinant by cofactor expansion along the first column.
///
/// # Errors
///
/// [`LinalgError::NotSquare`](crate::LinalgError::NotSquare), or element
/// arithmetic errors.
pub fn leibniz_method<E: RingElement>(m: &Matrix<E>) -> Result<E> {
    m.require_square()?;
    let n = m.num_rows();
    match n {
        0 => return Ok(m.factory().one()),
        1 => return Ok(m.at(0, 0).clone()),
        2 => {
            let ad = m.at(0, 0).multiply(m.at(1, 1))?;
            let bc = m.at(0, 1).multiply(m.at(1, 0))?;
            return Ok(ad.subtract(&bc)?);
        }
        _ => {}
    }

    let mut det = m.factory().zero();
    for i in 0..n {
        let entry = m.at(i, 0);
        if entry.is_zero() {
            continue;
        }
        let term = entry.multiply(&leibniz_method(&m.minor(Some(i), Some(0)))?)?;
        det = if i % 2 == 0 {
            det.add(&term)?
        } else {
            det.subtract(&term)?
        };
    }
    Ok(det)
}

impl<E: RingElement> Matrix<E> {
    /// The determinant.
    ///
    /// Fields use [`gaussian_method`]; other rings fall back to the exact
    /// [`leibniz_method`].
    ///
    /// # Errors
    ///
    /// [`LinalgError::NotSquare`](crate::LinalgError::NotSquare), or element
    /// arithmetic errors.
    pub fn det(&self) -> Result<E> {
        if E::IS_FIELD {
            debug!(
                "det: {}x{} by gaussian elimination",
                self.num_rows(),
                self.num_cols()
            );
            gaussian_method(self)
        } else {
            debug!(
                "det: {} is not a field, {}x{} by cofactor expansion",
                std::any::type_name::<E>(),
                self.num_rows(),
                self.num_cols()
            );
            leibniz_method(self)
        }
    }
}
