//! # lineal-linalg
//!
//! Dense linear algebra over any [`RingElement`](lineal_rings::RingElement).
//!
//! This crate provides:
//! - [`Vector`] and row-major [`Matrix`] with 1-based indexing
//! - Gaussian and Gauss-Jordan elimination, rank and inverse
//! - Determinants by Gaussian elimination (fields) or Leibniz expansion (rings)
//! - Linear system solving and solution spaces as [`AffineSubspace`]s
//! - Entrywise comparisons and logical operators returning one/zero masks
//! - Strassen-family multiplication with an optional rayon fan-out
//! - Eigenvalues of real matrices via balancing, Hessenberg reduction and
//!   shifted QR
//!
//! ## Example
//!
//! ```
//! use lineal_linalg::{solver, Matrix, Vector};
//! use lineal_rings::{RationalField, Q};
//!
//! let a = Matrix::from_rows(vec![
//!     vec![Q::from_integer(1), Q::from_integer(1)],
//!     vec![Q::from_integer(1), Q::from_integer(-1)],
//! ])
//! .unwrap();
//! let b = Vector::new(vec![Q::from_integer(3), Q::from_integer(1)], RationalField).unwrap();
//!
//! let x = solver::solve(&a, &b).unwrap().unwrap();
//! assert_eq!(x.entries(), &[Q::from_integer(2), Q::from_integer(1)]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dense_matrix;
pub mod determinant;
pub mod eigen;
pub mod elementwise;
mod elimination;
pub mod error;
pub mod multiplication;
pub mod solver;
pub mod subspace;
pub mod vector;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;

pub use dense_matrix::Matrix;
pub use eigen::EigenConfig;
pub use elementwise::Comparison;
pub use error::{LinalgError, Result};
pub use multiplication::MultiplicationConfig;
pub use subspace::AffineSubspace;
pub use vector::Vector;
