//! Dense vectors over a ring.
//!
//! A [`Vector`] owns its entries and the factory they were produced by.
//! Public accessors are 1-based; every binary operation checks lengths and
//! factories before touching an entry.

use std::fmt;
use std::hash::{Hash, Hasher};

use rand::Rng;

use lineal_rings::{AlgebraError, ConvertFrom, ElementFactory, RingElement};

use crate::dense_matrix::Matrix;
use crate::error::{LinalgError, Result};

/// Number of leading entries fed into a vector's hash.
const HASH_PREFIX: usize = 16;

/// A dense vector of ring elements.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector<E: RingElement> {
    entries: Vec<E>,
    factory: E::Factory,
}

/// Fails unless two factories are equal.
pub(crate) fn same_factory<F: ElementFactory>(left: &F, right: &F) -> Result<()> {
    if left == right {
        Ok(())
    } else {
        Err(AlgebraError::mismatch(left, right).into())
    }
}

impl<E: RingElement> Vector<E> {
    /// Creates a vector from entries produced by `factory`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::FactoryMismatch`] if any entry belongs to a
    /// different factory.
    pub fn new(entries: Vec<E>, factory: E::Factory) -> Result<Self> {
        for entry in &entries {
            factory.check(entry)?;
        }
        Ok(Self { entries, factory })
    }

    /// Creates a vector, taking the factory from the first entry.
    ///
    /// # Errors
    ///
    /// [`LinalgError::Empty`] if `entries` is empty, or a factory mismatch.
    pub fn from_entries(entries: Vec<E>) -> Result<Self> {
        let factory = entries
            .first()
            .map(RingElement::factory)
            .ok_or(LinalgError::Empty("Vector::from_entries"))?;
        Self::new(entries, factory)
    }

    /// Creates the zero vector of length `len`.
    #[must_use]
    pub fn zeros(len: usize, factory: E::Factory) -> Self {
        Self {
            entries: factory.zeros(len),
            factory,
        }
    }

    /// Creates a vector of uniformly drawn random entries.
    pub fn random<G: Rng + ?Sized>(len: usize, factory: E::Factory, rng: &mut G) -> Self {
        let entries = (0..len).map(|_| factory.random_value(rng)).collect();
        Self { entries, factory }
    }

    pub(crate) fn from_parts(entries: Vec<E>, factory: E::Factory) -> Self {
        Self { entries, factory }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the vector has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the factory of the entries.
    #[must_use]
    pub fn factory(&self) -> &E::Factory {
        &self.factory
    }

    /// Returns the entries as a slice.
    #[must_use]
    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    /// Consumes the vector and returns its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<E> {
        self.entries
    }

    fn offset(&self, index: usize) -> Result<usize> {
        if index == 0 || index > self.entries.len() {
            Err(LinalgError::IndexOutOfBounds {
                index,
                len: self.entries.len(),
            })
        } else {
            Ok(index - 1)
        }
    }

    fn check_compatible(&self, other: &Self, operation: &'static str) -> Result<()> {
        if self.len() != other.len() {
            return Err(LinalgError::dimension(operation, self.len(), other.len()));
        }
        same_factory(&self.factory, &other.factory)
    }

    /// Returns the entry at 1-based `index`.
    ///
    /// # Errors
    ///
    /// [`LinalgError::IndexOutOfBounds`] outside `1..=len`.
    pub fn get(&self, index: usize) -> Result<&E> {
        let i = self.offset(index)?;
        Ok(&self.entries[i])
    }

    /// Replaces the entry at 1-based `index`.
    ///
    /// # Errors
    ///
    /// Out-of-bounds index or an element from another factory.
    pub fn set(&mut self, index: usize, value: E) -> Result<()> {
        let i = self.offset(index)?;
        self.factory.check(&value)?;
        self.entries[i] = value;
        Ok(())
    }

    /// Sets every entry to `value`.
    ///
    /// # Errors
    ///
    /// Returns a factory mismatch if `value` belongs elsewhere.
    pub fn set_all(&mut self, value: &E) -> Result<()> {
        self.factory.check(value)?;
        for entry in &mut self.entries {
            *entry = value.clone();
        }
        Ok(())
    }

    /// Exchanges two entries (1-based).
    ///
    /// # Errors
    ///
    /// [`LinalgError::IndexOutOfBounds`] if either index is invalid.
    pub fn swap_entries(&mut self, i: usize, j: usize) -> Result<()> {
        let a = self.offset(i)?;
        let b = self.offset(j)?;
        self.entries.swap(a, b);
        Ok(())
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
        let entries = self
            .entries
            .iter()
            .map(|e| op(e))
            .collect::<lineal_rings::Result<Vec<_>>>()?;
        Ok(Self::from_parts(entries, self.factory.clone()))
    }

    pub(crate) fn zip_with<F>(
        &self,
        other: &Self,
        operation: &'static str,
        mut op: F,
    ) -> Result<Self>
    where
        F: FnMut(&E, &E) -> lineal_rings::Result<E>,
    {
        self.check_compatible(other, operation)?;
        let entries = self
            .entries
            .iter()
            .zip(&other.entries)
            .map(|(a, b)| op(a, b))
            .collect::<lineal_rings::Result<Vec<_>>>()?;
        Ok(Self::from_parts(entries, self.factory.clone()))
    }

    /// Entrywise sum.
    ///
    /// # Errors
    ///
    /// Length or factory mismatch.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "Vector::add", E::add)
    }

    /// Entrywise difference.
    ///
    /// # Errors
    ///
    /// Length or factory mismatch.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "Vector::subtract", E::subtract)
    }

    /// Entrywise (Hadamard) product.
    ///
    /// # Errors
    ///
    /// Length or factory mismatch.
    pub fn array_multiply(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, "Vector::array_multiply", E::multiply)
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

    /// Adds `scalar` to every entry.
    ///
    /// # Errors
    ///
    /// Factory mismatch.
    pub fn add_scalar(&self, scalar: &E) -> Result<Self> {
        self.apply(|e| e.add(scalar))
    }

    /// Returns `-self`.
    #[must_use]
    pub fn negate(&self) -> Self {
        let entries = self.entries.iter().map(RingElement::negate).collect();
        Self::from_parts(entries, self.factory.clone())
    }

    /// The scalar product `sum(self[i] * other[i])`.
    ///
    /// # Errors
    ///
    /// Length or factory mismatch.
    pub fn dot(&self, other: &Self) -> Result<E> {
        self.check_compatible(other, "Vector::dot")?;
        let mut acc = self.factory.zero();
        for (a, b) in self.entries.iter().zip(&other.entries) {
            acc = acc.add(&a.multiply(b)?)?;
        }
        Ok(acc)
    }

    /// The cross product of two 3-vectors.
    ///
    /// # Errors
    ///
    /// [`LinalgError::DimensionMismatch`] unless both have length 3.
    pub fn cross(&self, other: &Self) -> Result<Self> {
        if self.len() != 3 {
            return Err(LinalgError::dimension("Vector::cross", 3, self.len()));
        }
        self.check_compatible(other, "Vector::cross")?;
        let (a, b) = (&self.entries, &other.entries);
        let component = |i: usize, j: usize| -> lineal_rings::Result<E> {
            a[i].multiply(&b[j])?.subtract(&a[j].multiply(&b[i])?)
        };
        let entries = vec![component(1, 2)?, component(2, 0)?, component(0, 1)?];
        Ok(Self::from_parts(entries, self.factory.clone()))
    }

    /// Returns true if every entry is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(RingElement::is_zero)
    }

    /// Sum of the entries; zero for the empty vector.
    ///
    /// # Errors
    ///
    /// Propagates element arithmetic errors.
    pub fn sum(&self) -> Result<E> {
        let mut acc = self.factory.zero();
        for e in &self.entries {
            acc = acc.add(e)?;
        }
        Ok(acc)
    }

    /// Product of the entries; one for the empty vector.
    ///
    /// # Errors
    ///
    /// Propagates element arithmetic errors.
    pub fn element_product(&self) -> Result<E> {
        let mut acc = self.factory.one();
        for e in &self.entries {
            acc = acc.multiply(e)?;
        }
        Ok(acc)
    }

    /// Sum of absolute values.
    ///
    /// # Errors
    ///
    /// Propagates element arithmetic errors.
    pub fn l1_norm(&self) -> Result<E> {
        let mut acc = self.factory.zero();
        for e in &self.entries {
            acc = acc.add(&e.abs())?;
        }
        Ok(acc)
    }

    /// Sum of squared norms.
    ///
    /// # Errors
    ///
    /// Propagates element arithmetic errors.
    pub fn squared_l2_norm(&self) -> Result<E> {
        let mut acc = self.factory.zero();
        for e in &self.entries {
            let n = e.norm();
            acc = acc.add(&n.multiply(&n)?)?;
        }
        Ok(acc)
    }

    /// Euclidean norm.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::Unsupported`] for rings without square roots.
    pub fn l2_norm(&self) -> Result<E> {
        Ok(self.squared_l2_norm()?.sqrt()?)
    }

    /// Euclidean distance to `other`.
    ///
    /// # Errors
    ///
    /// Length or factory mismatch, or a ring without square roots.
    pub fn distance(&self, other: &Self) -> Result<E> {
        self.subtract(other)?.l2_norm()
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// # Errors
    ///
    /// Length or factory mismatch.
    pub fn squared_distance(&self, other: &Self) -> Result<E> {
        self.subtract(other)?.squared_l2_norm()
    }

    /// Manhattan distance to `other`.
    ///
    /// # Errors
    ///
    /// Length or factory mismatch.
    pub fn l1_distance(&self, other: &Self) -> Result<E> {
        self.subtract(other)?.l1_norm()
    }

    /// The smallest entry under [`RingElement::compare`].
    ///
    /// # Errors
    ///
    /// [`LinalgError::Empty`] for the empty vector.
    pub fn min(&self) -> Result<E> {
        self.entries
            .iter()
            .min_by(|a, b| a.compare(b))
            .cloned()
            .ok_or(LinalgError::Empty("Vector::min"))
    }

    /// The largest entry under [`RingElement::compare`].
    ///
    /// # Errors
    ///
    /// [`LinalgError::Empty`] for the empty vector.
    pub fn max(&self) -> Result<E> {
        self.entries
            .iter()
            .max_by(|a, b| a.compare(b))
            .cloned()
            .ok_or(LinalgError::Empty("Vector::max"))
    }

    /// The arithmetic mean of the entries.
    ///
    /// # Errors
    ///
    /// [`LinalgError::Empty`] for the empty vector; an algebra error if the
    /// length is not invertible in the ring.
    pub fn mean(&self) -> Result<E> {
        if self.is_empty() {
            return Err(LinalgError::Empty("Vector::mean"));
        }
        let count = i64::try_from(self.len())
            .map_err(|_| AlgebraError::InvalidArgument("vector too long".into()))?;
        Ok(self.sum()?.divide(&self.factory.get(count))?)
    }

    /// The vector as an `n x 1` column matrix.
    #[must_use]
    pub fn to_matrix(&self) -> Matrix<E> {
        Matrix::from_parts(self.entries.clone(), self.len(), 1, self.factory.clone())
    }

    /// The outer product `self * other^T`.
    ///
    /// # Errors
    ///
    /// Factory mismatch.
    pub fn transpose_and_multiply(&self, other: &Self) -> Result<Matrix<E>> {
        same_factory(&self.factory, &other.factory)?;
        let mut data = Vec::with_capacity(self.len() * other.len());
        for a in &self.entries {
            for b in &other.entries {
                data.push(a.multiply(b)?);
            }
        }
        Ok(Matrix::from_parts(
            data,
            self.len(),
            other.len(),
            self.factory.clone(),
        ))
    }

    /// The row-vector product `self^T * matrix`.
    ///
    /// # Errors
    ///
    /// [`LinalgError::DimensionMismatch`] unless `len == matrix.num_rows()`.
    pub fn multiply_matrix(&self, matrix: &Matrix<E>) -> Result<Self> {
        if self.len() != matrix.num_rows() {
            return Err(LinalgError::dimension(
                "Vector::multiply_matrix",
                matrix.num_rows(),
                self.len(),
            ));
        }
        same_factory(&self.factory, matrix.factory())?;
        let mut entries = Vec::with_capacity(matrix.num_cols());
        for col in 0..matrix.num_cols() {
            let mut acc = self.factory.zero();
            for (row, a) in self.entries.iter().enumerate() {
                acc = acc.add(&a.multiply(matrix.at(row, col))?)?;
            }
            entries.push(acc);
        }
        Ok(Self::from_parts(entries, self.factory.clone()))
    }

    /// Converts every entry into another ring.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::Conversion`] if an entry has no image.
    pub fn convert<F>(&self, factory: &F) -> Result<Vector<F::Element>>
    where
        F: ConvertFrom<E>,
    {
        let entries = self
            .entries
            .iter()
            .map(|e| factory.convert(e))
            .collect::<lineal_rings::Result<Vec<_>>>()?;
        Ok(Vector::from_parts(entries, factory.clone()))
    }
}

/// Hashes the length and a bounded prefix of the entries; vectors that
/// differ only past the prefix collide.
impl<E: RingElement + Hash> Hash for Vector<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entries.len().hash(state);
        for e in self.entries.iter().take(HASH_PREFIX) {
            e.hash(state);
        }
    }
}

impl<E: RingElement> fmt::Display for Vector<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, e) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{e}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    use lineal_rings::{IntegerRing, PrimeField, Q, RationalField, Real, RealField, Z};

    fn zv(values: &[i64]) -> Vector<Z> {
        Vector::new(values.iter().map(|&v| Z::new(v)).collect(), IntegerRing).unwrap()
    }

    fn qv(values: &[i64]) -> Vector<Q> {
        Vector::new(values.iter().map(|&v| Q::from_integer(v)).collect(), RationalField).unwrap()
    }

    #[test]
    fn test_one_based_access() {
        let mut v = zv(&[1, 2, 3]);
        assert_eq!(v.get(1).unwrap(), &Z::new(1));
        assert_eq!(v.get(3).unwrap(), &Z::new(3));
        assert!(matches!(
            v.get(0),
            Err(LinalgError::IndexOutOfBounds { index: 0, len: 3 })
        ));
        assert!(v.get(4).is_err());

        v.set(2, Z::new(7)).unwrap();
        assert_eq!(v, zv(&[1, 7, 3]));
        v.swap_entries(1, 3).unwrap();
        assert_eq!(v, zv(&[3, 7, 1]));
    }

    #[test]
    fn test_arithmetic() {
        let a = zv(&[1, 2, 3]);
        let b = zv(&[4, 5, 6]);
        assert_eq!(a.add(&b).unwrap(), zv(&[5, 7, 9]));
        assert_eq!(b.subtract(&a).unwrap(), zv(&[3, 3, 3]));
        assert_eq!(a.dot(&b).unwrap(), Z::new(32));
        assert_eq!(a.array_multiply(&b).unwrap(), zv(&[4, 10, 18]));
        assert_eq!(a.scale(&Z::new(2)).unwrap(), zv(&[2, 4, 6]));
        assert_eq!(a.add_scalar(&Z::new(1)).unwrap(), zv(&[2, 3, 4]));
        assert_eq!(a.negate(), zv(&[-1, -2, -3]));
    }

    #[test]
    fn test_length_mismatch() {
        let err = zv(&[1, 2]).add(&zv(&[1, 2, 3])).unwrap_err();
        assert_eq!(err, LinalgError::dimension("Vector::add", 2, 3));
        assert!(err.is_invalid_operation());
    }

    #[test]
    fn test_mixed_factories_rejected() {
        let f5 = PrimeField::new(5).unwrap();
        let f7 = PrimeField::new(7).unwrap();
        let a = Vector::new(vec![f5.element(1), f5.element(2)], f5).unwrap();
        let b = Vector::new(vec![f7.element(1), f7.element(2)], f7).unwrap();
        let Err(LinalgError::Algebra(AlgebraError::FactoryMismatch { left, right })) = a.add(&b)
        else {
            panic!("expected a factory mismatch");
        };
        assert!(left.contains("modulus: 5"));
        assert!(right.contains("modulus: 7"));
        assert!(Vector::new(vec![f7.element(1)], f5).is_err());
    }

    #[test]
    fn test_divide() {
        let v = qv(&[2, 4]);
        assert_eq!(v.divide(&Q::from_integer(2)).unwrap(), qv(&[1, 2]));
        assert!(v.divide(&Q::from_integer(0)).unwrap_err().is_division_by_zero());
    }

    #[test]
    fn test_reductions() {
        let v = zv(&[3, -5, 2]);
        assert_eq!(v.sum().unwrap(), Z::new(0));
        assert_eq!(v.min().unwrap(), Z::new(-5));
        assert_eq!(v.max().unwrap(), Z::new(3));
        assert_eq!(v.l1_norm().unwrap(), Z::new(10));
        assert_eq!(v.element_product().unwrap(), Z::new(-30));
        assert_eq!(qv(&[1, 2]).mean().unwrap(), Q::new(3, 2));
        assert!(matches!(
            Vector::<Z>::zeros(0, IntegerRing).max(),
            Err(LinalgError::Empty(_))
        ));
    }

    #[test]
    fn test_euclidean_norms() {
        let r = Real;
        let a = Vector::new(vec![r(3.0), r(-4.0)], RealField).unwrap();
        let b = Vector::new(vec![r(0.0), r(2.0)], RealField).unwrap();
        assert_eq!(a.l2_norm().unwrap(), r(5.0));
        assert_eq!(a.squared_distance(&b).unwrap(), r(45.0));
        assert_eq!(a.l1_distance(&b).unwrap(), r(9.0));
        assert_eq!(
            Vector::new(vec![r(1.0), r(1.0)], RealField)
                .unwrap()
                .distance(&Vector::new(vec![r(4.0), r(5.0)], RealField).unwrap())
                .unwrap(),
            r(5.0)
        );

        let z = zv(&[1, -2, 2]);
        assert_eq!(z.squared_l2_norm().unwrap(), Z::new(9));
        assert_eq!(z.l1_distance(&zv(&[0, 0, 0])).unwrap(), Z::new(5));
        assert!(matches!(
            z.l2_norm(),
            Err(LinalgError::Algebra(AlgebraError::Unsupported { .. }))
        ));
        assert!(z.distance(&zv(&[1])).unwrap_err().is_invalid_operation());
    }

    #[test]
    fn test_cross_product() {
        let x = zv(&[1, 0, 0]);
        let y = zv(&[0, 1, 0]);
        assert_eq!(x.cross(&y).unwrap(), zv(&[0, 0, 1]));
        assert!(zv(&[1, 2]).cross(&zv(&[3, 4])).is_err());
    }

    #[test]
    fn test_matrix_products() {
        let a = zv(&[1, 2]);
        let b = zv(&[3, 4, 5]);
        let outer = a.transpose_and_multiply(&b).unwrap();
        assert_eq!(outer.num_rows(), 2);
        assert_eq!(outer.num_cols(), 3);
        assert_eq!(outer.get(2, 3).unwrap(), &Z::new(10));

        let row = a.multiply_matrix(&outer).unwrap();
        assert_eq!(row, zv(&[15, 20, 25]));

        let col = b.to_matrix();
        assert_eq!(col.num_cols(), 1);
        assert_eq!(col.get(3, 1).unwrap(), &Z::new(5));
    }

    #[test]
    fn test_convert() {
        let halves = zv(&[1, 3]).convert(&RationalField).unwrap();
        assert_eq!(halves, qv(&[1, 3]));
        let reals = halves.convert(&RealField).unwrap();
        assert_eq!(reals.entries(), &[Real(1.0), Real(3.0)]);
    }

    #[test]
    fn test_weak_hash_uses_prefix() {
        let hash = |v: &Vector<Z>| {
            let mut h = DefaultHasher::new();
            v.hash(&mut h);
            h.finish()
        };
        let mut long: Vec<i64> = (0..20).collect();
        let a = zv(&long);
        long[19] = 100;
        let b = zv(&long);
        assert_ne!(a, b);
        assert_eq!(hash(&a), hash(&b));
        assert_eq!(hash(&a), hash(&a.clone()));
    }

    #[test]
    fn test_display() {
        assert_eq!(zv(&[1, -2]).to_string(), "(1, -2)");
    }
}
