//! Gaussian and Gauss-Jordan elimination.
//!
//! Both reductions pick the first non-zero entry at or below the current
//! row as the pivot. A column without a pivot is skipped without advancing
//! the row, so rank-deficient inputs leave trailing zero rows.
//!
//! Elimination divides by pivots and so needs a field. Over a ring the
//! first non-unit pivot fails with
//! [`AlgebraError::Unsupported`](lineal_rings::AlgebraError::Unsupported).
//! The input is never modified; failures discard the working copy.

use lineal_rings::{ElementFactory, RingElement};

use crate::dense_matrix::Matrix;
use crate::error::Result;

impl<E: RingElement> Matrix<E> {
    /// Row echelon form.
    ///
    /// # Errors
    ///
    /// Propagates element errors, e.g. a non-invertible pivot over a ring.
    pub fn gausselim(&self) -> Result<Self> {
        let mut m = self.clone();
        m.eliminate(false)?;
        Ok(m)
    }

    /// Reduced row echelon form: every pivot is one and the only non-zero
    /// entry of its column.
    ///
    /// # Errors
    ///
    /// Propagates element errors, e.g. a non-invertible pivot over a ring.
    pub fn gaussjord(&self) -> Result<Self> {
        let mut m = self.clone();
        m.eliminate(true)?;
        Ok(m)
    }

    /// The number of non-zero rows of the row echelon form.
    ///
    /// # Errors
    ///
    /// Propagates element errors from [`gausselim`](Self::gausselim).
    pub fn rank(&self) -> Result<usize> {
        let m = self.gausselim()?;
        Ok((0..m.num_rows()).filter(|&r| !m.row_is_zero(r)).count())
    }

    /// The inverse matrix, or `None` if the matrix is singular.
    ///
    /// Computed by reducing `[self | I]`.
    ///
    /// # Errors
    ///
    /// [`LinalgError::NotSquare`](crate::LinalgError::NotSquare), or element
    /// errors over rings without division.
    pub fn inverse(&self) -> Result<Option<Self>> {
        self.require_square()?;
        let n = self.num_rows();
        let factory = self.factory();

        let mut data = Vec::with_capacity(2 * n * n);
        for r in 0..n {
            data.extend_from_slice(self.row_slice(r));
            data.extend((0..n).map(|c| {
                if c == r {
                    factory.one()
                } else {
                    factory.zero()
                }
            }));
        }
        let mut augmented = Matrix::from_parts(data, n, 2 * n, factory.clone());
        augmented.eliminate(true)?;

        if (0..n).all(|i| augmented.at(i, i).is_one()) {
            Ok(Some(augmented.block(0, n, n, n)))
        } else {
            Ok(None)
        }
    }

    /// Reduces in place and returns the number of pivots.
    ///
    /// With `reduce` set the pivot rows are normalized and eliminated in
    /// both directions.
    pub(crate) fn eliminate(&mut self, reduce: bool) -> Result<usize> {
        let num_rows = self.num_rows();
        let num_cols = self.num_cols();
        let zero = self.factory().zero();
        let mut pivot_row = 0;
        let mut pivot_col = 0;

        while pivot_row < num_rows && pivot_col < num_cols {
            if self.at(pivot_row, pivot_col).is_zero() {
                let found = (pivot_row + 1..num_rows).find(|&r| !self.at(r, pivot_col).is_zero());
                let Some(found) = found else {
                    pivot_col += 1;
                    continue;
                };
                self.exchange_rows(pivot_row, found);
            }

            let inverse = self.at(pivot_row, pivot_col).invert()?;

            if reduce {
                for c in pivot_col + 1..num_cols {
                    let scaled = self.at(pivot_row, c).multiply(&inverse)?;
                    *self.at_mut(pivot_row, c) = scaled;
                }
                *self.at_mut(pivot_row, pivot_col) = self.factory().one();
            }

            let first = if reduce { 0 } else { pivot_row + 1 };
            for r in first..num_rows {
                if r == pivot_row || self.at(r, pivot_col).is_zero() {
                    continue;
                }
                let factor = if reduce {
                    self.at(r, pivot_col).clone()
                } else {
                    self.at(r, pivot_col).multiply(&inverse)?
                };
                for c in pivot_col + 1..num_cols {
                    let value = self
                        .at(r, c)
                        .subtract(&factor.multiply(self.at(pivot_row, c))?)?;
                    *self.at_mut(r, c) = value;
                }
                *self.at_mut(r, pivot_col) = zero.clone();
            }

            pivot_row += 1;
            pivot_col += 1;
        }

        Ok(pivot_row)
    }
}
