//! Dense matrices over a ring.
//!
//! Entries are stored row-major together with the factory that produced
//! them. The public API is 1-based and fallible: out-of-range indices,
//! shape mismatches and mixed factories are reported as errors. Rows and
//! columns handed out by [`Matrix::row`] and [`Matrix::col`] are copies.

use std::fmt;
use std::ops::RangeInclusive;

use rand::Rng;

use lineal_rings::{
    AlgebraError, Complex, ComplexField, ConvertFrom, ElementFactory, RingElement,
};

use crate::error::{LinalgError, Result};
use crate::multiplication;
use crate::vector::{same_factory, Vector};

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<E: RingElement> {
    /// Matrix entries in row-major order.
    data: Vec<E>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
    /// Factory of every entry.
    factory: E::Factory,
}

fn check_index(index: usize, len: usize) -> Result<usize> {
    if index == 0 || index > len {
        Err(LinalgError::IndexOutOfBounds { index, len })
    } else {
        Ok(index - 1)
    }
}

impl<E: RingElement> Matrix<E> {
    /// Creates a matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize, factory: E::Factory) -> Self {
        Self {
            data: factory.zeros(num_rows * num_cols),
            num_rows,
            num_cols,
            factory,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize, factory: E::Factory) -> Self {
        let one = factory.one();
        let mut m = Self::zeros(n, n, factory);
        for i in 0..n {
            *m.at_mut(i, i) = one.clone();
        }
        m
    }

    /// Creates a matrix of uniformly drawn random entries.
    pub fn random<G: Rng + ?Sized>(
        num_rows: usize,
        num_cols: usize,
        factory: E::Factory,
        rng: &mut G,
    ) -> Self {
        let data = (0..num_rows * num_cols)
            .map(|_| factory.random_value(rng))
            .collect();
        Self::from_parts(data, num_rows, num_cols, factory)
    }

    /// Creates a matrix from a 2D vector, taking the factory from the first
    /// entry.
    ///
    /// # Errors
    ///
    /// [`LinalgError::Empty`] without entries, a dimension mismatch for
    /// ragged rows, or a factory mismatch.
    pub fn from_rows(rows: Vec<Vec<E>>) -> Result<Self> {
        let factory = rows
            .iter()
            .flatten()
            .next()
            .map(RingElement::factory)
            .ok_or(LinalgError::Empty("Matrix::from_rows"))?;
        Self::from_rows_in(rows, factory)
    }

    /// Creates a matrix from a 2D vector of entries produced by `factory`.
    ///
    /// # Errors
    ///
    /// A dimension mismatch for ragged rows, or a factory mismatch.
    pub fn from_rows_in(rows: Vec<Vec<E>>, factory: E::Factory) -> Result<Self> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(num_rows * num_cols);
        for row in rows {
            if row.len() != num_cols {
                return Err(LinalgError::dimension(
                    "Matrix::from_rows",
                    num_cols,
                    row.len(),
                ));
            }
            for entry in &row {
                factory.check(entry)?;
            }
            data.extend(row);
        }
        Ok(Self::from_parts(data, num_rows, num_cols, factory))
    }

    /// Stacks vectors as the rows of a matrix.
    ///
    /// # Errors
    ///
    /// [`LinalgError::Empty`] for no rows, or mismatched lengths/factories.
    pub fn from_row_vectors(rows: &[Vector<E>]) -> Result<Self> {
        let first = rows
            .first()
            .ok_or(LinalgError::Empty("Matrix::from_row_vectors"))?;
        let num_cols = first.len();
        let mut data = Vec::with_capacity(rows.len() * num_cols);
        for row in rows {
            if row.len() != num_cols {
                return Err(LinalgError::dimension(
                    "Matrix::from_row_vectors",
                    num_cols,
                    row.len(),
                ));
            }
            same_factory(first.factory(), row.factory())?;
            data.extend_from_slice(row.entries());
        }
        Ok(Self::from_parts(
            data,
            rows.len(),
            num_cols,
            first.factory().clone(),
        ))
    }

    /// Places vectors side by side as the columns of a matrix.
    ///
    /// # Errors
    ///
    /// [`LinalgError::Empty`] for no columns, or mismatched lengths/factories.
    pub fn from_col_vectors(cols: &[Vector<E>]) -> Result<Self> {
        Ok(Self::from_row_vectors(cols)?.transpose())
    }

    pub(crate) fn from_parts(
        data: Vec<E>,
        num_rows: usize,
        num_cols: usize,
        factory: E::Factory,
    ) -> Self {
        debug_assert_eq!(data.len(), num_rows * num_cols);
        Self {
            data,
            num_rows,
            num_cols,
            factory,
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns the factory of the entries.
    #[must_use]
    pub fn factory(&self) -> &E::Factory {
        &self.factory
    }

    /// Returns the entries in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[E] {
        &self.data
    }

    /// Copies the entries into a vector of rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<E>> {
        (0..self.num_rows).map(|r| self.row_slice(r).to_vec()).collect()
    }

    pub(crate) fn at(&self, row: usize, col: usize) -> &E {
        &self.data[row * self.num_cols + col]
    }

    pub(crate) fn at_mut(&mut self, row: usize, col: usize) -> &mut E {
        &mut self.data[row * self.num_cols + col]
    }

    pub(crate) fn row_slice(&self, row: usize) -> &[E] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    pub(crate) fn require_square(&self) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(LinalgError::NotSquare {
                rows: self.num_rows,
                cols: self.num_cols,
            })
        }
    }

    fn check_same_shape(&self, other: &Self, operation: &'static str) -> Result<()> {
        if self.num_rows != other.num_rows {
            return Err(LinalgError::dimension(
                operation,
                self.num_rows,
                other.num_rows,
            ));
        }
        if self.num_cols != other.num_cols {
            return Err(LinalgError::dimension(
                operation,
                self.num_cols,
                other.num_cols,
            ));
        }
        same_factory(&self.factory, &other.factory)
    }

    /// Returns the entry at 1-based `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`LinalgError::IndexOutOfBounds`] outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Result<&E> {
        let r = check_index(row, self.num_rows)?;
        let c = check_index(col, self.num_cols)?;
        Ok(self.at(r, c))
    }

    /// Replaces the entry at 1-based `(row, col)`.
    ///
    /// # Errors
    ///
    /// Out-of-range index or an element from another factory.
    pub fn set(&mut self, row: usize, col: usize, value: E) -> Result<()> {
        let r = check_index(row, self.num_rows)?;
        let c = check_index(col, self.num_cols)?;
        self.factory.check(&value)?;
        *self.at_mut(r, c) = value;
        Ok(())
    }

    /// Sets every entry to `value`.
    ///
    /// # Errors
    ///
    /// Returns a factory mismatch if `value` belongs elsewhere.
    pub fn set_all(&mut self, value: &E) -> Result<()> {
        self.factory.check(value)?;
        for entry in &mut self.data {
            *entry = value.clone();
        }
        Ok(())
    }

    /// Copies the 1-based row `row` into a vector.
    ///
    /// # Errors
    ///
    /// [`LinalgError::IndexOutOfBounds`] for an invalid row.
    pub fn row(&self, row: usize) -> Result<Vector<E>> {
        let r = check_index(row, self.num_rows)?;
        Ok(Vector::from_parts(
            self.row_slice(r).to_vec(),
            self.factory.clone(),
        ))
    }

    /// Copies the 1-based column `col` into a vector.
    ///
    /// # Errors
    ///
    /// [`LinalgError::IndexOutOfBounds`] for an invalid column.
    pub fn col(&self, col: usize) -> Result<Vector<E>> {
        let c = check_index(col, self.num_cols)?;
        let entries = (0..self.num_rows).map(|r| self.at(r, c).clone()).collect();
        Ok(Vector::from_parts(entries, self.factory.clone()))
    }

    /// Overwrites the 1-based row `row`.
    ///
    /// # Errors
    ///
    /// Invalid row, length mismatch or factory mismatch.
    pub fn set_row(&mut self, row: usize, values: &Vector<E>) -> Result<()> {
        let r = check_index(row, self.num_rows)?;
        if values.len() != self.num_cols {
            return Err(LinalgError::dimension(
                "Matrix::set_row",
                self.num_cols,
                values.len(),
            ));
        }
        same_factory(&self.factory, values.factory())?;
        for (c, value) in values.entries().iter().enumerate() {
            *self.at_mut(r, c) = value.clone();
        }
        Ok(())
    }

    /// Overwrites the 1-based column `col`.
    ///
    /// # Errors
    ///
    /// Invalid column, length mismatch or factory mismatch.
    pub fn set_col(&mut self, col: usize, values: &Vector<E>) -> Result<()> {
        let c = check_index(col, self.num_cols)?;
        if values.len() != self.num_rows {
            return Err(LinalgError::dimension(
                "Matrix::set_col",
                self.num_rows,
                values.len(),
            ));
        }
        same_factory(&self.factory, values.factory())?;
        for (r, value) in values.entries().iter().enumerate() {
            *self.at_mut(r, c) = value.clone();
        }
        Ok(())
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.num_cols {
            for r in 0..self.num_rows {
                data.push(self.at(r, c).clone());
            }
        }
        Self::from_parts(data, self.num_cols, self.num_rows, self.factory.clone())
    }

    /// Applies `op` to every entry.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `op`.
    pub fn apply<F>(&self, mut op: F) -> Result<Self>
    where
        F: FnMut(&E) -> lineal_rings::Result<E>,
    {
        let data = self
            .data
            .iter()
            .map(|e| op(e))
            .collect::<lineal_rings::Result<Vec<_>>>()?;
        Ok(Self::from_parts(
            data,
            self.num_rows,
            self.num_cols,
            self.factory.clone(),
        ))
    }

    /// Combines two equally shaped matrices entry by entry.
    ///
    /// # Errors
    ///
    /// Shape or factory mismatch, or the first error returned by `op`.
    pub fn apply_with<F>(&self, other: &Self, mut op: F) -> Result<Self>
    where
        F: FnMut(&E, &E) -> lineal_rings::Result<E>,
    {
        self.check_same_shape(other, "Matrix::apply_with")?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| op(a, b))
            .collect::<lineal_rings::Result<Vec<_>>>()?;
        Ok(Self::from_parts(
            data,
            self.num_rows,
            self.num_cols,
            self.factory.clone(),
        ))
    }

    /// Entrywise sum.
    ///
    /// # Errors
    ///
    /// Shape or factory mismatch.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.apply_with(other, E::add)
    }

    /// Entrywise difference.
    ///
    /// # Errors
    ///
    /// Shape or factory mismatch.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.apply_with(other, E::subtract)
    }

    /// Entrywise (Hadamard) product.
    ///
    /// # Errors
    ///
    /// Shape or factory mismatch.
    pub fn array_multiply(&self, other: &Self) -> Result<Self> {
        self.apply_with(other, E::multiply)
    }

    /// `self += other`, reusing this matrix's storage.
    pub(crate) fn add_replace(&mut self, other: &Self) -> Result<()> {
        self.check_same_shape(other, "Matrix::add_replace")?;
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a = a.add(b)?;
        }
        Ok(())
    }

    /// `self -= other`, reusing this matrix's storage.
    pub(crate) fn subtract_replace(&mut self, other: &Self) -> Result<()> {
        self.check_same_shape(other, "Matrix::subtract_replace")?;
        for (a, b) in self.data.iter_mut().zip(&other.data) {
            *a = a.subtract(b)?;
        }
        Ok(())
    }

    /// Matrix product `self * other` by the direct method.
    ///
    /// See [`crate::multiplication`] for the recursive strategies.
    ///
    /// # Errors
    ///
    /// Dimension mismatch unless `self.num_cols() == other.num_rows()`.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        multiplication::simple(self, other)
    }

    /// Matrix-vector product `self * v`.
    ///
    /// # Errors
    ///
    /// Dimension mismatch unless `v.len() == self.num_cols()`.
    pub fn multiply_vector(&self, v: &Vector<E>) -> Result<Vector<E>> {
        if v.len() != self.num_cols {
            return Err(LinalgError::dimension(
                "Matrix::multiply_vector",
                self.num_cols,
                v.len(),
            ));
        }
        same_factory(&self.factory, v.factory())?;
        let mut entries = Vec::with_capacity(self.num_rows);
        for r in 0..self.num_rows {
            let mut acc = self.factory.zero();
            for (a, b) in self.row_slice(r).iter().zip(v.entries()) {
                acc = acc.add(&a.multiply(b)?)?;
            }
            entries.push(acc);
        }
        Ok(Vector::from_parts(entries, self.factory.clone()))
    }

    /// Multiplies every entry by `scalar`.
    ///
    /// # Errors
    ///
    /// Factory mismatch.
    pub fn scale(&self, scalar: &E) -> Result<Self> {
        self.apply(|e| e.multiply(scalar))
    }

    /// Divides every entry by `scalar`.
    ///
    /// # Errors
    ///
    /// Division by zero, or division unsupported by the ring.
    pub fn divide(&self, scalar: &E) -> Result<Self> {
        let inverse = scalar.invert()?;
        self.scale(&inverse)
    }

    /// Returns `-self`.
    #[must_use]
    pub fn negate(&self) -> Self {
        let data = self.data.iter().map(RingElement::negate).collect();
        Self::from_parts(data, self.num_rows, self.num_cols, self.factory.clone())
    }

    /// Swaps two rows (1-based).
    ///
    /// # Errors
    ///
    /// [`LinalgError::IndexOutOfBounds`] for an invalid row.
    pub fn swap_rows(&mut self, i: usize, j: usize) -> Result<()> {
        let a = check_index(i, self.num_rows)?;
        let b = check_index(j, self.num_rows)?;
        self.exchange_rows(a, b);
        Ok(())
    }

    /// Swaps two columns (1-based).
    ///
    /// # Errors
    ///
    /// [`LinalgError::IndexOutOfBounds`] for an invalid column.
    pub fn swap_cols(&mut self, i: usize, j: usize) -> Result<()> {
        let a = check_index(i, self.num_cols)?;
        let b = check_index(j, self.num_cols)?;
        self.exchange_cols(a, b);
        Ok(())
    }

    pub(crate) fn exchange_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    pub(crate) fn exchange_cols(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        for r in 0..self.num_rows {
            let start = r * self.num_cols;
            self.data.swap(start + i, start + j);
        }
    }

    /// Returns the matrix with the 1-based row `row` removed.
    ///
    /// # Errors
    ///
    /// [`LinalgError::IndexOutOfBounds`] for an invalid row.
    pub fn without_row(&self, row: usize) -> Result<Self> {
        let skip = check_index(row, self.num_rows)?;
        let data = (0..self.num_rows)
            .filter(|&r| r != skip)
            .flat_map(|r| self.row_slice(r).iter().cloned())
            .collect();
        Ok(Self::from_parts(
            data,
            self.num_rows - 1,
            self.num_cols,
            self.factory.clone(),
        ))
    }

    /// Returns the matrix with the 1-based column `col` removed.
    ///
    /// # Errors
    ///
    /// [`LinalgError::IndexOutOfBounds`] for an invalid column.
    pub fn without_col(&self, col: usize) -> Result<Self> {
        let skip = check_index(col, self.num_cols)?;
        Ok(self.minor(None, Some(skip)))
    }

    /// The minor obtained by deleting a row and/or a column (0-based).
    pub(crate) fn minor(&self, row: Option<usize>, col: Option<usize>) -> Self {
        let rows = self.num_rows - usize::from(row.is_some());
        let cols = self.num_cols - usize::from(col.is_some());
        let mut data = Vec::with_capacity(rows * cols);
        for r in (0..self.num_rows).filter(|&r| Some(r) != row) {
            for c in (0..self.num_cols).filter(|&c| Some(c) != col) {
                data.push(self.at(r, c).clone());
            }
        }
        Self::from_parts(data, rows, cols, self.factory.clone())
    }

    /// Inserts `values` so that it becomes the 1-based row `row`.
    ///
    /// `row` may be `num_rows() + 1` to append.
    ///
    /// # Errors
    ///
    /// Invalid position, length mismatch or factory mismatch.
    pub fn insert_row(&self, row: usize, values: &Vector<E>) -> Result<Self> {
        let at = check_index(row, self.num_rows + 1)?;
        if values.len() != self.num_cols {
            return Err(LinalgError::dimension(
                "Matrix::insert_row",
                self.num_cols,
                values.len(),
            ));
        }
        same_factory(&self.factory, values.factory())?;
        let split = at * self.num_cols;
        let mut data = Vec::with_capacity(self.data.len() + self.num_cols);
        data.extend_from_slice(&self.data[..split]);
        data.extend_from_slice(values.entries());
        data.extend_from_slice(&self.data[split..]);
        Ok(Self::from_parts(
            data,
            self.num_rows + 1,
            self.num_cols,
            self.factory.clone(),
        ))
    }

    /// Inserts `values` so that it becomes the 1-based column `col`.
    ///
    /// `col` may be `num_cols() + 1` to append.
    ///
    /// # Errors
    ///
    /// Invalid position, length mismatch or factory mismatch.
    pub fn insert_col(&self, col: usize, values: &Vector<E>) -> Result<Self> {
        let at = check_index(col, self.num_cols + 1)?;
        if values.len() != self.num_rows {
            return Err(LinalgError::dimension(
                "Matrix::insert_col",
                self.num_rows,
                values.len(),
            ));
        }
        same_factory(&self.factory, values.factory())?;
        let mut data = Vec::with_capacity(self.data.len() + self.num_rows);
        for (r, value) in values.entries().iter().enumerate() {
            let row = self.row_slice(r);
            data.extend_from_slice(&row[..at]);
            data.push(value.clone());
            data.extend_from_slice(&row[at..]);
        }
        Ok(Self::from_parts(
            data,
            self.num_rows,
            self.num_cols + 1,
            self.factory.clone(),
        ))
    }

    /// The block spanning the inclusive 1-based ranges `rows` and `cols`.
    ///
    /// # Errors
    ///
    /// [`LinalgError::IndexOutOfBounds`] if a range leaves the matrix.
    pub fn sub_matrix(
        &self,
        rows: RangeInclusive<usize>,
        cols: RangeInclusive<usize>,
    ) -> Result<Self> {
        let (r0, r1) = rows.into_inner();
        let (c0, c1) = cols.into_inner();
        let r0 = check_index(r0, self.num_rows)?;
        let c0 = check_index(c0, self.num_cols)?;
        check_index(r1, self.num_rows)?;
        check_index(c1, self.num_cols)?;
        Ok(self.block(r0, c0, r1.saturating_sub(r0), c1.saturating_sub(c0)))
    }

    /// The `rows x cols` block with top-left corner at 0-based
    /// `(row, col)`; cells outside the matrix read as zero.
    pub(crate) fn block(&self, row: usize, col: usize, rows: usize, cols: usize) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for r in row..row + rows {
            for c in col..col + cols {
                if r < self.num_rows && c < self.num_cols {
                    data.push(self.at(r, c).clone());
                } else {
                    data.push(self.factory.zero());
                }
            }
        }
        Self::from_parts(data, rows, cols, self.factory.clone())
    }

    /// Returns true if the 1-based row `row` is entirely zero.
    ///
    /// # Errors
    ///
    /// [`LinalgError::IndexOutOfBounds`] for an invalid row.
    pub fn is_zero_row(&self, row: usize) -> Result<bool> {
        let r = check_index(row, self.num_rows)?;
        Ok(self.row_is_zero(r))
    }

    /// Returns true if the 1-based column `col` is entirely zero.
    ///
    /// # Errors
    ///
    /// [`LinalgError::IndexOutOfBounds`] for an invalid column.
    pub fn is_zero_col(&self, col: usize) -> Result<bool> {
        let c = check_index(col, self.num_cols)?;
        Ok((0..self.num_rows).all(|r| self.at(r, c).is_zero()))
    }

    pub(crate) fn row_is_zero(&self, row: usize) -> bool {
        self.row_slice(row).iter().all(RingElement::is_zero)
    }

    /// Returns true if every entry is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(RingElement::is_zero)
    }

    /// Returns true for a square matrix with ones on the diagonal and
    /// zeros elsewhere.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.is_square()
            && (0..self.num_rows).all(|r| {
                (0..self.num_cols).all(|c| {
                    let e = self.at(r, c);
                    if r == c {
                        e.is_one()
                    } else {
                        e.is_zero()
                    }
                })
            })
    }

    /// Sum of the diagonal.
    ///
    /// # Errors
    ///
    /// [`LinalgError::NotSquare`] or [`LinalgError::Empty`].
    pub fn trace(&self) -> Result<E> {
        self.require_square()?;
        if self.num_rows == 0 {
            return Err(LinalgError::Empty("Matrix::trace"));
        }
        let mut acc = self.factory.zero();
        for i in 0..self.num_rows {
            acc = acc.add(self.at(i, i))?;
        }
        Ok(acc)
    }

    /// The smallest `k` in `1..=max` with `self^k = I`, if any.
    ///
    /// # Errors
    ///
    /// [`LinalgError::NotSquare`], or element arithmetic errors.
    pub fn order(&self, max: usize) -> Result<Option<usize>> {
        self.require_square()?;
        let mut power = self.clone();
        for k in 1..=max {
            if power.is_identity() {
                return Ok(Some(k));
            }
            power = power.multiply(self)?;
        }
        Ok(None)
    }

    /// Sum of all entries.
    ///
    /// # Errors
    ///
    /// Propagates element arithmetic errors.
    pub fn sum(&self) -> Result<E> {
        let mut acc = self.factory.zero();
        for e in &self.data {
            acc = acc.add(e)?;
        }
        Ok(acc)
    }

    /// The vector of row sums.
    ///
    /// # Errors
    ///
    /// Propagates element arithmetic errors.
    pub fn sum_rows(&self) -> Result<Vector<E>> {
        let ones = Vector::from_parts(
            vec![self.factory.one(); self.num_cols],
            self.factory.clone(),
        );
        self.multiply_vector(&ones)
    }

    /// The vector of column sums.
    ///
    /// # Errors
    ///
    /// Propagates element arithmetic errors.
    pub fn sum_cols(&self) -> Result<Vector<E>> {
        let ones = Vector::from_parts(
            vec![self.factory.one(); self.num_rows],
            self.factory.clone(),
        );
        ones.multiply_matrix(self)
    }

    /// The smallest entry under [`RingElement::compare`].
    ///
    /// # Errors
    ///
    /// [`LinalgError::Empty`] for a matrix without entries.
    pub fn min(&self) -> Result<E> {
        self.data
            .iter()
            .min_by(|a, b| a.compare(b))
            .cloned()
            .ok_or(LinalgError::Empty("Matrix::min"))
    }

    /// The largest entry under [`RingElement::compare`].
    ///
    /// # Errors
    ///
    /// [`LinalgError::Empty`] for a matrix without entries.
    pub fn max(&self) -> Result<E> {
        self.data
            .iter()
            .max_by(|a, b| a.compare(b))
            .cloned()
            .ok_or(LinalgError::Empty("Matrix::max"))
    }

    /// The arithmetic mean of all entries.
    ///
    /// # Errors
    ///
    /// [`LinalgError::Empty`] without entries; an algebra error if the
    /// entry count is not invertible in the ring.
    pub fn mean(&self) -> Result<E> {
        if self.data.is_empty() {
            return Err(LinalgError::Empty("Matrix::mean"));
        }
        let count = i64::try_from(self.data.len())
            .map_err(|_| AlgebraError::InvalidArgument("matrix too large".into()))?;
        Ok(self.sum()?.divide(&self.factory.get(count))?)
    }

    /// The mean of each row: [`sum_rows`](Self::sum_rows) divided by the
    /// number of columns.
    ///
    /// # Errors
    ///
    /// [`LinalgError::Empty`] without columns; an algebra error if the
    /// column count is not invertible in the ring.
    pub fn mean_rows(&self) -> Result<Vector<E>> {
        if self.num_cols == 0 {
            return Err(LinalgError::Empty("Matrix::mean_rows"));
        }
        let count = i64::try_from(self.num_cols)
            .map_err(|_| AlgebraError::InvalidArgument("matrix too wide".into()))?;
        self.sum_rows()?.divide(&self.factory.get(count))
    }

    /// The mean of each column: [`sum_cols`](Self::sum_cols) divided by the
    /// number of rows.
    ///
    /// # Errors
    ///
    /// [`LinalgError::Empty`] without rows; an algebra error if the row
    /// count is not invertible in the ring.
    pub fn mean_cols(&self) -> Result<Vector<E>> {
        if self.num_rows == 0 {
            return Err(LinalgError::Empty("Matrix::mean_cols"));
        }
        let count = i64::try_from(self.num_rows)
            .map_err(|_| AlgebraError::InvalidArgument("matrix too tall".into()))?;
        self.sum_cols()?.divide(&self.factory.get(count))
    }

    /// Flattens a single row or column into a vector.
    ///
    /// # Errors
    ///
    /// [`LinalgError::DimensionMismatch`] if neither dimension is one.
    pub fn to_vector(&self) -> Result<Vector<E>> {
        if self.num_rows != 1 && self.num_cols != 1 {
            return Err(LinalgError::dimension(
                "Matrix::to_vector",
                1,
                self.num_rows.min(self.num_cols),
            ));
        }
        Ok(Vector::from_parts(self.data.clone(), self.factory.clone()))
    }

    /// Converts every entry into another ring.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::Conversion`] if an entry has no image.
    pub fn convert<F>(&self, factory: &F) -> Result<Matrix<F::Element>>
    where
        F: ConvertFrom<E>,
    {
        let data = self
            .data
            .iter()
            .map(|e| factory.convert(e))
            .collect::<lineal_rings::Result<Vec<_>>>()?;
        Ok(Matrix::from_parts(
            data,
            self.num_rows,
            self.num_cols,
            factory.clone(),
        ))
    }
}

impl Matrix<Complex> {
    /// The conjugate transpose.
    #[must_use]
    pub fn hermitian(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.num_cols {
            for r in 0..self.num_rows {
                data.push(self.at(r, c).conj());
            }
        }
        Self::from_parts(data, self.num_cols, self.num_rows, ComplexField)
    }
}

impl<E: RingElement> fmt::Display for Matrix<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.num_rows {
            for (c, e) in self.row_slice(r).iter().enumerate() {
                if c > 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{e}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineal_rings::{IntegerRing, Q, RationalField, Z};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn zm(rows: &[&[i64]]) -> Matrix<Z> {
        Matrix::from_rows_in(
            rows.iter()
                .map(|r| r.iter().map(|&v| Z::new(v)).collect())
                .collect(),
            IntegerRing,
        )
        .unwrap()
    }

    fn zv(values: &[i64]) -> Vector<Z> {
        Vector::new(values.iter().map(|&v| Z::new(v)).collect(), IntegerRing).unwrap()
    }

    #[test]
    fn test_construction() {
        let m = zm(&[&[1, 2, 3], &[4, 5, 6]]);
        assert_eq!(m.num_rows(), 2);
        assert_eq!(m.num_cols(), 3);
        assert_eq!(m.get(2, 1).unwrap(), &Z::new(4));
        assert!(m.get(3, 1).is_err());
        assert!(m.get(1, 0).is_err());

        let ragged = Matrix::from_rows(vec![vec![Z::new(1), Z::new(2)], vec![Z::new(3)]]);
        assert!(matches!(
            ragged,
            Err(LinalgError::DimensionMismatch { expected: 2, found: 1, .. })
        ));
        assert!(matches!(
            Matrix::<Z>::from_rows(vec![]),
            Err(LinalgError::Empty(_))
        ));
    }

    #[test]
    fn test_vectors_round_trip() {
        let m = zm(&[&[1, 2], &[3, 4], &[5, 6]]);
        assert_eq!(m.row(2).unwrap(), zv(&[3, 4]));
        assert_eq!(m.col(2).unwrap(), zv(&[2, 4, 6]));

        let rows = [zv(&[1, 2]), zv(&[3, 4]), zv(&[5, 6])];
        assert_eq!(Matrix::from_row_vectors(&rows).unwrap(), m);
        let cols = [zv(&[1, 3, 5]), zv(&[2, 4, 6])];
        assert_eq!(Matrix::from_col_vectors(&cols).unwrap(), m);
    }

    #[test]
    fn test_set_row_and_col() {
        let mut m = Matrix::<Z>::zeros(2, 2, IntegerRing);
        m.set_row(1, &zv(&[1, 2])).unwrap();
        m.set_col(2, &zv(&[7, 8])).unwrap();
        assert_eq!(m, zm(&[&[1, 7], &[0, 8]]));
        assert!(m.set_row(1, &zv(&[1, 2, 3])).is_err());
    }

    #[test]
    fn test_transpose() {
        let m = zm(&[&[1, 2, 3], &[4, 5, 6]]);
        assert_eq!(m.transpose(), zm(&[&[1, 4], &[2, 5], &[3, 6]]));
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn test_arithmetic() {
        let a = zm(&[&[1, 2], &[3, 4]]);
        let b = zm(&[&[5, 6], &[7, 8]]);
        assert_eq!(a.add(&b).unwrap(), zm(&[&[6, 8], &[10, 12]]));
        assert_eq!(b.subtract(&a).unwrap(), zm(&[&[4, 4], &[4, 4]]));
        assert_eq!(a.multiply(&b).unwrap(), zm(&[&[19, 22], &[43, 50]]));
        assert_eq!(a.array_multiply(&b).unwrap(), zm(&[&[5, 12], &[21, 32]]));
        assert_eq!(a.scale(&Z::new(3)).unwrap(), zm(&[&[3, 6], &[9, 12]]));
        assert_eq!(a.multiply_vector(&zv(&[1, 1])).unwrap(), zv(&[3, 7]));
        assert_eq!(a.negate().add(&a).unwrap(), Matrix::<Z>::zeros(2, 2, IntegerRing));
    }

    #[test]
    fn test_shape_errors() {
        let a = zm(&[&[1, 2], &[3, 4]]);
        let b = zm(&[&[1, 2, 3]]);
        assert!(a.add(&b).unwrap_err().is_invalid_operation());
        assert!(matches!(
            a.multiply(&b),
            Err(LinalgError::DimensionMismatch { expected: 2, found: 1, .. })
        ));
        assert!(a.multiply_vector(&zv(&[1])).is_err());
    }

    #[test]
    fn test_divide_requires_inverse() {
        let a = zm(&[&[2, 4]]);
        assert!(matches!(
            a.divide(&Z::new(2)),
            Err(LinalgError::Algebra(AlgebraError::Unsupported { .. }))
        ));
        let q = a.convert(&RationalField).unwrap();
        assert_eq!(
            q.divide(&Q::from_integer(2)).unwrap().as_slice(),
            &[Q::from_integer(1), Q::from_integer(2)]
        );
    }

    #[test]
    fn test_structure_edits() {
        let m = zm(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]);
        assert_eq!(m.without_row(2).unwrap(), zm(&[&[1, 2, 3], &[7, 8, 9]]));
        assert_eq!(m.without_col(1).unwrap(), zm(&[&[2, 3], &[5, 6], &[8, 9]]));
        assert_eq!(
            m.sub_matrix(2..=3, 1..=2).unwrap(),
            zm(&[&[4, 5], &[7, 8]])
        );
        assert!(m.sub_matrix(2..=4, 1..=2).is_err());

        let appended = m.insert_col(4, &zv(&[0, 0, 1])).unwrap();
        assert_eq!(appended.num_cols(), 4);
        assert_eq!(appended.col(4).unwrap(), zv(&[0, 0, 1]));

        let front = m.insert_row(1, &zv(&[9, 9, 9])).unwrap();
        assert_eq!(front.row(1).unwrap(), zv(&[9, 9, 9]));
        assert_eq!(front.row(2).unwrap(), zv(&[1, 2, 3]));
    }

    #[test]
    fn test_swaps() {
        let mut m = zm(&[&[1, 2], &[3, 4]]);
        m.swap_rows(1, 2).unwrap();
        assert_eq!(m, zm(&[&[3, 4], &[1, 2]]));
        m.swap_cols(1, 2).unwrap();
        assert_eq!(m, zm(&[&[4, 3], &[2, 1]]));
        assert!(m.swap_rows(1, 3).is_err());
    }

    #[test]
    fn test_predicates_and_reductions() {
        let m = zm(&[&[1, 0], &[0, 0]]);
        assert!(!m.is_zero_row(1).unwrap());
        assert!(m.is_zero_row(2).unwrap());
        assert!(m.is_zero_col(2).unwrap());
        assert!(Matrix::<Z>::identity(3, IntegerRing).is_identity());
        assert!(!m.is_identity());

        let n = zm(&[&[1, 2], &[3, -4]]);
        assert_eq!(n.trace().unwrap(), Z::new(-3));
        assert_eq!(n.sum().unwrap(), Z::new(2));
        assert_eq!(n.min().unwrap(), Z::new(-4));
        assert_eq!(n.max().unwrap(), Z::new(3));
        assert_eq!(n.sum_rows().unwrap(), zv(&[3, -1]));
        assert_eq!(n.sum_cols().unwrap(), zv(&[4, -2]));
        assert!(zm(&[&[1, 2]]).trace().is_err());
    }

    #[test]
    fn test_row_and_column_means() {
        let q = |v: i64| Q::from_integer(v);
        let m = Matrix::from_rows(vec![vec![q(1), q(2), q(6)], vec![q(4), q(0), q(-1)]]).unwrap();
        let rows = m.mean_rows().unwrap();
        assert_eq!(rows.entries(), &[q(3), q(1)]);
        let cols = m.mean_cols().unwrap();
        assert_eq!(cols.entries(), &[Q::new(5, 2), q(1), Q::new(5, 2)]);

        assert!(matches!(
            Matrix::<Q>::zeros(2, 0, RationalField).mean_rows(),
            Err(LinalgError::Empty(_))
        ));
        assert!(zm(&[&[1, 2]]).mean_rows().is_err());
        assert_eq!(zm(&[&[1, 2]]).mean_cols().unwrap(), zv(&[1, 2]));
    }

    #[test]
    fn test_hermitian() {
        let m = Matrix::from_rows(vec![
            vec![Complex::new(1.0, 2.0), Complex::new(0.0, -1.0)],
            vec![Complex::new(3.0, 0.0), Complex::new(4.0, 5.0)],
            vec![Complex::new(0.0, 0.0), Complex::new(-2.0, 1.0)],
        ])
        .unwrap();
        let h = m.hermitian();
        assert_eq!(h.num_rows(), 2);
        assert_eq!(h.num_cols(), 3);
        assert_eq!(h.get(1, 1).unwrap(), &Complex::new(1.0, -2.0));
        assert_eq!(h.get(1, 2).unwrap(), &Complex::new(3.0, 0.0));
        assert_eq!(h.get(2, 1).unwrap(), &Complex::new(0.0, 1.0));
        assert_eq!(h.get(2, 3).unwrap(), &Complex::new(-2.0, -1.0));
        assert_eq!(h.hermitian(), m);
    }

    #[test]
    fn test_order() {
        let rotation = zm(&[&[0, -1], &[1, 0]]);
        assert_eq!(rotation.order(10).unwrap(), Some(4));
        assert_eq!(rotation.order(3).unwrap(), None);
        assert_eq!(zm(&[&[2]]).order(5).unwrap(), None);
    }

    #[test]
    fn test_to_vector() {
        assert_eq!(zm(&[&[1, 2, 3]]).to_vector().unwrap(), zv(&[1, 2, 3]));
        assert_eq!(zm(&[&[1], &[2]]).to_vector().unwrap(), zv(&[1, 2]));
        assert!(zm(&[&[1, 2], &[3, 4]]).to_vector().is_err());
    }

    #[test]
    fn test_apply_with_ring_operations() {
        let a = zm(&[&[1, 2]]);
        let b = zm(&[&[3, 4]]);
        assert_eq!(a.apply_with(&b, Z::subtract).unwrap(), zm(&[&[-2, -2]]));
        assert_eq!(a.apply(|e| e.pow(2)).unwrap(), zm(&[&[1, 4]]));
    }

    #[test]
    fn test_random_is_seeded() {
        let mut rng1 = ChaCha8Rng::seed_from_u64(7);
        let mut rng2 = ChaCha8Rng::seed_from_u64(7);
        let a = Matrix::<Z>::random(3, 4, IntegerRing, &mut rng1);
        let b = Matrix::<Z>::random(3, 4, IntegerRing, &mut rng2);
        assert_eq!(a, b);
        assert_eq!(a.num_cols(), 4);
    }

    #[test]
    fn test_display() {
        assert_eq!(zm(&[&[1, 2], &[3, 4]]).to_string(), "1\t2\n3\t4\n");
    }
}
