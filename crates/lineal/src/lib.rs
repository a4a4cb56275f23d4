//! # Lineal
//!
//! Generic dense linear algebra over pluggable rings and fields.
//!
//! The same matrix code runs over exact integers, exact rationals, prime
//! fields, `f64` reals and complex numbers. Operations that need division
//! are only offered where the element type is a field.
//!
//! ## Features
//!
//! - **Element Types**: Z, Q, Z_p, R and C behind one [`RingElement`](rings::RingElement) contract
//! - **Exact Elimination**: rank, inverse, determinant and solution spaces without rounding
//! - **Fast Multiplication**: Strassen, Winograd and Bodrato schedules with rayon fan-out
//! - **Eigenvalues**: balanced Hessenberg QR for real matrices
//!
//! ## Quick Start
//!
//! ```rust
//! use lineal::prelude::*;
//!
//! let m = Matrix::from_rows(vec![
//!     vec![Q::from_integer(0), Q::from_integer(1), Q::from_integer(2)],
//!     vec![Q::from_integer(3), Q::from_integer(4), Q::from_integer(5)],
//!     vec![Q::from_integer(6), Q::from_integer(7), Q::from_integer(9)],
//! ])
//! .unwrap();
//!
//! assert_eq!(m.det().unwrap(), Q::from_integer(-3));
//! assert_eq!(m.rank().unwrap(), 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use lineal_linalg as linalg;
pub use lineal_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use lineal_linalg::{
        determinant, multiplication, solver, AffineSubspace, Comparison, EigenConfig, LinalgError,
        Matrix, MultiplicationConfig, Vector,
    };
    pub use lineal_rings::{
        AlgebraError, Complex, ComplexField, ConvertFrom, ElementFactory, Fp, IntegerRing,
        PrimeField, RationalField, Real, RealField, RingElement, Q, Z,
    };
}
