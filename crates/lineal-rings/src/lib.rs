//! # lineal-rings
//!
//! Algebraic elements for the lineal linear-algebra engine.
//!
//! This crate provides:
//! - The element contract: [`RingElement`] and its [`ElementFactory`]
//! - Conversions between element types via [`ConvertFrom`]
//! - Concrete implementations: Z, Q, Z_p, R (`f64`) and C
//!
//! ## Capabilities
//!
//! ```text
//! RingElement            Z
//!  └── IS_FIELD = true   Q, Z_p, R, C
//! ```
//!
//! Algorithms that need division check [`RingElement::IS_FIELD`] up front
//! rather than attempting a division and recovering.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod complex;
pub mod error;
pub mod integers;
pub mod prime_field;
pub mod rationals;
pub mod real;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use complex::{Complex, ComplexField};
pub use error::{AlgebraError, Result};
pub use integers::{IntegerRing, Z};
pub use prime_field::{Fp, PrimeField};
pub use rationals::{Q, RationalField};
pub use real::{Real, RealField};
pub use traits::{ConvertFrom, ElementFactory, RingElement};
