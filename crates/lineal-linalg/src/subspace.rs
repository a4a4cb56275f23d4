//! Affine and linear subspaces.
//!
//! An [`AffineSubspace`] is `offset + span(generators)`. A missing offset
//! makes it a linear subspace; there is no separate type for that case.

use std::fmt;
use std::sync::OnceLock;

use lineal_rings::RingElement;

use crate::dense_matrix::Matrix;
use crate::error::{LinalgError, Result};
use crate::solver;
use crate::vector::{same_factory, Vector};

/// The set `offset + span(generators)` inside an ambient space of fixed
/// dimension.
#[derive(Clone, Debug)]
pub struct AffineSubspace<E: RingElement> {
    offset: Option<Vector<E>>,
    generators: Vec<Vector<E>>,
    ambient_dimension: usize,
    factory: E::Factory,
    normalized: bool,
    dimension: OnceLock<usize>,
}

impl<E: RingElement> AffineSubspace<E> {
    /// Creates `offset + span(generators)`.
    ///
    /// A zero offset yields a linear subspace.
    ///
    /// # Errors
    ///
    /// Generators whose length or factory differ from the offset's.
    pub fn new(offset: Vector<E>, generators: Vec<Vector<E>>) -> Result<Self> {
        for g in &generators {
            check_member(&offset, g)?;
        }
        let ambient_dimension = offset.len();
        let factory = offset.factory().clone();
        let offset = (!offset.is_zero()).then_some(offset);
        Ok(Self::from_parts(
            offset,
            generators,
            ambient_dimension,
            factory,
            false,
        ))
    }

    /// Creates the linear subspace `span(generators)`.
    ///
    /// # Errors
    ///
    /// [`LinalgError::Empty`] without generators (use
    /// [`trivial`](Self::trivial)), or mismatched lengths/factories.
    pub fn linear(generators: Vec<Vector<E>>) -> Result<Self> {
        let first = generators
            .first()
            .ok_or(LinalgError::Empty("AffineSubspace::linear"))?;
        for g in &generators {
            check_member(first, g)?;
        }
        let ambient_dimension = first.len();
        let factory = first.factory().clone();
        Ok(Self::from_parts(
            None,
            generators,
            ambient_dimension,
            factory,
            false,
        ))
    }

    /// The zero subspace of an `ambient_dimension`-dimensional space.
    #[must_use]
    pub fn trivial(ambient_dimension: usize, factory: E::Factory) -> Self {
        Self::from_parts(None, Vec::new(), ambient_dimension, factory, true)
    }

    pub(crate) fn from_parts(
        offset: Option<Vector<E>>,
        generators: Vec<Vector<E>>,
        ambient_dimension: usize,
        factory: E::Factory,
        normalized: bool,
    ) -> Self {
        let dimension = OnceLock::new();
        if normalized {
            let _ = dimension.set(generators.len());
        }
        Self {
            offset,
            generators,
            ambient_dimension,
            factory,
            normalized,
            dimension,
        }
    }

    /// The offset, or `None` for a linear subspace.
    #[must_use]
    pub fn offset(&self) -> Option<&Vector<E>> {
        self.offset.as_ref()
    }

    /// The offset, with the zero vector standing in for a linear subspace.
    #[must_use]
    pub fn inhomogeneous_part(&self) -> Vector<E> {
        self.offset.clone().unwrap_or_else(|| {
            Vector::zeros(self.ambient_dimension, self.factory.clone())
        })
    }

    /// The generating vectors.
    #[must_use]
    pub fn generators(&self) -> &[Vector<E>] {
        &self.generators
    }

    /// The dimension of the surrounding space.
    #[must_use]
    pub fn ambient_dimension(&self) -> usize {
        self.ambient_dimension
    }

    /// Returns true if the subspace contains the origin by construction.
    #[must_use]
    pub fn is_linear(&self) -> bool {
        self.offset.is_none()
    }

    /// Returns true if the generators are known to be independent.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        self.normalized
    }

    /// The dimension: the rank of the generating system.
    ///
    /// # Errors
    ///
    /// Elimination errors over rings without division.
    pub fn dimension(&self) -> Result<usize> {
        if let Some(&d) = self.dimension.get() {
            return Ok(d);
        }
        let d = if self.generators.is_empty() {
            0
        } else {
            Matrix::from_row_vectors(&self.generators)?.rank()?
        };
        let _ = self.dimension.set(d);
        Ok(d)
    }

    /// Reduces the generators to an independent set and drops an offset
    /// that lies in their span.
    ///
    /// # Errors
    ///
    /// Elimination errors over rings without division.
    pub fn normalize(&self) -> Result<Self> {
        if self.normalized {
            return Ok(self.clone());
        }

        let generators: Vec<Vector<E>> = if self.generators.is_empty() {
            Vec::new()
        } else {
            let echelon = Matrix::from_row_vectors(&self.generators)?.gausselim()?;
            (0..echelon.num_rows())
                .filter(|&r| !echelon.row_is_zero(r))
                .map(|r| Vector::from_parts(echelon.row_slice(r).to_vec(), self.factory.clone()))
                .collect()
        };

        let offset = match &self.offset {
            Some(offset) if !generators.is_empty() => {
                let extended =
                    Matrix::from_row_vectors(&generators)?.insert_row(generators.len() + 1, offset)?;
                if extended.rank()? == generators.len() {
                    None
                } else {
                    Some(offset.clone())
                }
            }
            other => other.clone(),
        };

        Ok(Self::from_parts(
            offset,
            generators,
            self.ambient_dimension,
            self.factory.clone(),
            true,
        ))
    }

    /// Returns true if `point` lies in the subspace.
    ///
    /// # Errors
    ///
    /// Length or factory mismatch, or elimination errors.
    pub fn contains(&self, point: &Vector<E>) -> Result<bool> {
        if point.len() != self.ambient_dimension {
            return Err(LinalgError::dimension(
                "AffineSubspace::contains",
                self.ambient_dimension,
                point.len(),
            ));
        }
        same_factory(&self.factory, point.factory())?;

        let difference = match &self.offset {
            Some(offset) => point.subtract(offset)?,
            None => point.clone(),
        };
        if self.generators.is_empty() {
            return Ok(difference.is_zero());
        }
        let spanning = Matrix::from_col_vectors(&self.generators)?;
        solver::is_solvable(&spanning, &difference)
    }
}

fn check_member<E: RingElement>(reference: &Vector<E>, v: &Vector<E>) -> Result<()> {
    if v.len() != reference.len() {
        return Err(LinalgError::dimension(
            "AffineSubspace",
            reference.len(),
            v.len(),
        ));
    }
    same_factory(reference.factory(), v.factory())
}

/// Equal offsets (a missing offset equals the zero vector) and the same
/// generating system, entry by entry.
impl<E: RingElement> PartialEq for AffineSubspace<E> {
    fn eq(&self, other: &Self) -> bool {
        self.ambient_dimension == other.ambient_dimension
            && self.factory == other.factory
            && self.generators == other.generators
            && self.inhomogeneous_part() == other.inhomogeneous_part()
    }
}

impl<E: RingElement> fmt::Display for AffineSubspace<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + <", self.inhomogeneous_part())?;
        for (i, g) in self.generators.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{g}")?;
        }
        write!(f, ">")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineal_rings::{Q, RationalField};

    fn qv(values: &[i64]) -> Vector<Q> {
        Vector::new(values.iter().map(|&v| Q::from_integer(v)).collect(), RationalField).unwrap()
    }

    #[test]
    fn test_zero_offset_is_linear() {
        let s = AffineSubspace::new(qv(&[0, 0]), vec![qv(&[1, 1])]).unwrap();
        assert!(s.is_linear());
        assert_eq!(s, AffineSubspace::linear(vec![qv(&[1, 1])]).unwrap());
    }

    #[test]
    fn test_dimension_counts_independent_generators() {
        let s = AffineSubspace::linear(vec![qv(&[1, 2, 3]), qv(&[2, 4, 6]), qv(&[0, 1, 0])]).unwrap();
        assert!(!s.is_normalized());
        assert_eq!(s.dimension().unwrap(), 2);
        assert_eq!(AffineSubspace::<Q>::trivial(3, RationalField).dimension().unwrap(), 0);
    }

    #[test]
    fn test_normalize_drops_dependent_generators() {
        let s = AffineSubspace::new(qv(&[5, 0, 0]), vec![qv(&[1, 2, 3]), qv(&[2, 4, 6])]).unwrap();
        let n = s.normalize().unwrap();
        assert!(n.is_normalized());
        assert_eq!(n.generators().len(), 1);
        assert_eq!(n.dimension().unwrap(), 1);
        assert!(!n.is_linear());
    }

    #[test]
    fn test_normalize_absorbs_offset_in_span() {
        let s = AffineSubspace::new(qv(&[2, 4]), vec![qv(&[1, 2])]).unwrap();
        let n = s.normalize().unwrap();
        assert!(n.is_linear());
        assert!(n.contains(&qv(&[0, 0])).unwrap());
    }

    #[test]
    fn test_contains() {
        let line = AffineSubspace::new(qv(&[1, 0, 0]), vec![qv(&[0, 1, 1])]).unwrap();
        assert!(line.contains(&qv(&[1, 3, 3])).unwrap());
        assert!(line.contains(&qv(&[1, 0, 0])).unwrap());
        assert!(!line.contains(&qv(&[0, 0, 0])).unwrap());
        assert!(!line.contains(&qv(&[1, 1, 2])).unwrap());
        assert!(line.contains(&qv(&[1, 1])).is_err());

        let origin = AffineSubspace::<Q>::trivial(2, RationalField);
        assert!(origin.contains(&qv(&[0, 0])).unwrap());
        assert!(!origin.contains(&qv(&[0, 1])).unwrap());
    }

    #[test]
    fn test_mismatched_generators_rejected() {
        assert!(AffineSubspace::new(qv(&[1, 0]), vec![qv(&[1, 2, 3])]).is_err());
        assert!(matches!(
            AffineSubspace::<Q>::linear(vec![]),
            Err(LinalgError::Empty(_))
        ));
    }

    #[test]
    fn test_display() {
        let s = AffineSubspace::new(qv(&[1, 0]), vec![qv(&[1, -1])]).unwrap();
        assert_eq!(s.to_string(), "(1, 0) + <(1, -1)>");
    }
}
