//! Matrix multiplication strategies.
//!
//! All strategies compute the same product; they differ in cost:
//! - [`simple`], [`school`]: the O(n^3) definition
//! - [`strassen_original`]: 7 recursive products, 18 additions per level
//! - [`strassen_winograd`]: 7 recursive products, 15 additions per level
//! - [`strassen_bodrato`]: Winograd-like, with in-place block updates and a
//!   dedicated schedule when both operands are the same matrix
//!
//! The recursive strategies pad both operands with zeros to the next power
//! of two and crop the result. Blocks at or below
//! [`MultiplicationConfig::truncation_point`] are multiplied with
//! [`simple`].
//!
//! ## Parallelism
//!
//! With `parallel_depth > 0` the seven sub-products of the top recursion
//! levels run on the rayon pool. Results are identical to the sequential
//! schedule.

use log::debug;
use rayon::prelude::*;

use lineal_rings::{ElementFactory, RingElement};

use crate::dense_matrix::Matrix;
use crate::error::{LinalgError, Result};
use crate::vector::same_factory;

/// Default block size at which recursion switches to [`simple`].
pub const DEFAULT_TRUNCATION_POINT: usize = 48;

/// Tuning for the recursive multiplication strategies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiplicationConfig {
    /// Blocks of at most this dimension are multiplied directly.
    pub truncation_point: usize,
    /// Number of recursion levels whose sub-products run in parallel.
    pub parallel_depth: usize,
}

impl Default for MultiplicationConfig {
    fn default() -> Self {
        Self {
            truncation_point: DEFAULT_TRUNCATION_POINT,
            parallel_depth: 0,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Variant {
    Original,
    Winograd,
    Bodrato,
}

fn check_dimensions<E: RingElement>(a: &Matrix<E>, b: &Matrix<E>) -> Result<()> {
    if a.num_cols() != b.num_rows() {
        return Err(LinalgError::dimension(
            "multiply",
            a.num_cols(),
            b.num_rows(),
        ));
    }
    same_factory(a.factory(), b.factory())
}

/// Product by scalar products of the rows of `a` with the columns of `b`.
///
/// # Errors
///
/// Dimension mismatch unless `a.num_cols() == b.num_rows()`.
pub fn simple<E: RingElement>(a: &Matrix<E>, b: &Matrix<E>) -> Result<Matrix<E>> {
    check_dimensions(a, b)?;
    let columns = b.transpose();
    let zero = a.factory().zero();

    let mut data = Vec::with_capacity(a.num_rows() * b.num_cols());
    for i in 0..a.num_rows() {
        let row = a.row_slice(i);
        for j in 0..b.num_cols() {
            let mut sum = zero.clone();
            for (x, y) in row.iter().zip(columns.row_slice(j)) {
                sum = sum.add(&x.multiply(y)?)?;
            }
            data.push(sum);
        }
    }
    Ok(Matrix::from_parts(
        data,
        a.num_rows(),
        b.num_cols(),
        a.factory().clone(),
    ))
}

/// Product by the textbook triple loop over entries.
///
/// # Errors
///
/// Dimension mismatch unless `a.num_cols() == b.num_rows()`.
pub fn school<E: RingElement>(a: &Matrix<E>, b: &Matrix<E>) -> Result<Matrix<E>> {
    check_dimensions(a, b)?;
    let mut result = Matrix::zeros(a.num_rows(), b.num_cols(), a.factory().clone());
    for i in 0..a.num_rows() {
        for j in 0..b.num_cols() {
            let mut sum = a.factory().zero();
            for k in 0..a.num_cols() {
                sum = sum.add(&a.at(i, k).multiply(b.at(k, j))?)?;
            }
            *result.at_mut(i, j) = sum;
        }
    }
    Ok(result)
}

/// Strassen's original scheme with the default configuration.
///
/// # Errors
///
/// Dimension mismatch unless `a.num_cols() == b.num_rows()`.
pub fn strassen_original<E: RingElement>(a: &Matrix<E>, b: &Matrix<E>) -> Result<Matrix<E>> {
    strassen_original_with(a, b, &MultiplicationConfig::default())
}

/// Strassen's original scheme.
///
/// # Errors
///
/// Dimension mismatch unless `a.num_cols() == b.num_rows()`.
pub fn strassen_original_with<E: RingElement>(
    a: &Matrix<E>,
    b: &Matrix<E>,
    config: &MultiplicationConfig,
) -> Result<Matrix<E>> {
    strassen(a, b, config, Variant::Original)
}

/// The Strassen-Winograd scheme with the default configuration.
///
/// # Errors
///
/// Dimension mismatch unless `a.num_cols() == b.num_rows()`.
pub fn strassen_winograd<E: RingElement>(a: &Matrix<E>, b: &Matrix<E>) -> Result<Matrix<E>> {
    strassen_winograd_with(a, b, &MultiplicationConfig::default())
}

/// The Strassen-Winograd scheme.
///
/// # Errors
///
/// Dimension mismatch unless `a.num_cols() == b.num_rows()`.
pub fn strassen_winograd_with<E: RingElement>(
    a: &Matrix<E>,
    b: &Matrix<E>,
    config: &MultiplicationConfig,
) -> Result<Matrix<E>> {
    strassen(a, b, config, Variant::Winograd)
}

/// Bodrato's scheme with the default configuration.
///
/// Passing the same matrix twice (`strassen_bodrato(&m, &m)`) selects the
/// squaring schedule.
///
/// # Errors
///
/// Dimension mismatch unless `a.num_cols() == b.num_rows()`.
pub fn strassen_bodrato<E: RingElement>(a: &Matrix<E>, b: &Matrix<E>) -> Result<Matrix<E>> {
    strassen_bodrato_with(a, b, &MultiplicationConfig::default())
}

/// Bodrato's scheme.
///
/// # Errors
///
/// Dimension mismatch unless `a.num_cols() == b.num_rows()`.
pub fn strassen_bodrato_with<E: RingElement>(
    a: &Matrix<E>,
    b: &Matrix<E>,
    config: &MultiplicationConfig,
) -> Result<Matrix<E>> {
    strassen(a, b, config, Variant::Bodrato)
}

fn strassen<E: RingElement>(
    a: &Matrix<E>,
    b: &Matrix<E>,
    config: &MultiplicationConfig,
    variant: Variant,
) -> Result<Matrix<E>> {
    check_dimensions(a, b)?;

    let dim = a.num_rows().max(a.num_cols()).max(b.num_cols());
    if dim <= config.truncation_point.max(1) {
        debug!("{variant:?}: dimension {dim} within truncation point, multiplying directly");
        return simple(a, b);
    }

    let n = dim.next_power_of_two();
    debug!(
        "{variant:?}: {}x{} * {}x{} padded to {n}x{n}",
        a.num_rows(),
        a.num_cols(),
        b.num_rows(),
        b.num_cols()
    );

    let padded_a = a.block(0, 0, n, n);
    let product = if std::ptr::eq(a, b) {
        recurse(&padded_a, &padded_a, config, variant, 0)?
    } else {
        let padded_b = b.block(0, 0, n, n);
        recurse(&padded_a, &padded_b, config, variant, 0)?
    };
    Ok(product.block(0, 0, a.num_rows(), b.num_cols()))
}

fn recurse<E: RingElement>(
    a: &Matrix<E>,
    b: &Matrix<E>,
    config: &MultiplicationConfig,
    variant: Variant,
    depth: usize,
) -> Result<Matrix<E>> {
    if a.num_rows() <= config.truncation_point.max(1) {
        return simple(a, b);
    }
    match variant {
        Variant::Original => original_step(a, b, config, depth),
        Variant::Winograd => winograd_step(a, b, config, depth),
        Variant::Bodrato => bodrato_step(a, b, config, depth),
    }
}

/// A pending sub-product; `None` on the right squares the left operand.
type Pair<E> = (Matrix<E>, Option<Matrix<E>>);

fn products<E: RingElement>(
    pairs: [Pair<E>; 7],
    config: &MultiplicationConfig,
    variant: Variant,
    depth: usize,
) -> Result<[Matrix<E>; 7]> {
    let run = |(left, right): Pair<E>| match &right {
        Some(right) => recurse(&left, right, config, variant, depth + 1),
        None => recurse(&left, &left, config, variant, depth + 1),
    };

    let [p1, p2, p3, p4, p5, p6, p7] = if depth < config.parallel_depth {
        let factory = pairs[0].0.factory().clone();
        let mut slots: [Result<Matrix<E>>; 7] =
            std::array::from_fn(|_| Ok(Matrix::zeros(0, 0, factory.clone())));
        pairs
            .into_par_iter()
            .zip(slots.par_iter_mut())
            .for_each(|(pair, slot)| *slot = run(pair));
        slots
    } else {
        pairs.map(&run)
    };
    Ok([p1?, p2?, p3?, p4?, p5?, p6?, p7?])
}

fn quadrants<E: RingElement>(m: &Matrix<E>) -> [Matrix<E>; 4] {
    let h = m.num_rows() / 2;
    [
        m.block(0, 0, h, h),
        m.block(0, h, h, h),
        m.block(h, 0, h, h),
        m.block(h, h, h, h),
    ]
}

fn assemble<E: RingElement>(
    c11: &Matrix<E>,
    c12: &Matrix<E>,
    c21: &Matrix<E>,
    c22: &Matrix<E>,
) -> Matrix<E> {
    let h = c11.num_rows();
    let mut data = Vec::with_capacity(4 * h * h);
    for (left, right) in [(c11, c12), (c21, c22)] {
        for r in 0..h {
            data.extend_from_slice(left.row_slice(r));
            data.extend_from_slice(right.row_slice(r));
        }
    }
    Matrix::from_parts(data, 2 * h, 2 * h, c11.factory().clone())
}

fn original_step<E: RingElement>(
    a: &Matrix<E>,
    b: &Matrix<E>,
    config: &MultiplicationConfig,
    depth: usize,
) -> Result<Matrix<E>> {
    let [a11, a12, a21, a22] = quadrants(a);
    let [b11, b12, b21, b22] = quadrants(b);

    let pairs = [
        (a11.add(&a22)?, Some(b11.add(&b22)?)),
        (a21.add(&a22)?, Some(b11.clone())),
        (a11.clone(), Some(b12.subtract(&b22)?)),
        (a22.clone(), Some(b21.subtract(&b11)?)),
        (a11.add(&a12)?, Some(b22.clone())),
        (a21.subtract(&a11)?, Some(b11.add(&b12)?)),
        (a12.subtract(&a22)?, Some(b21.add(&b22)?)),
    ];
    let [p1, p2, p3, p4, p5, p6, p7] = products(pairs, config, Variant::Original, depth)?;

    let c11 = p1.add(&p4)?.subtract(&p5)?.add(&p7)?;
    let c12 = p3.add(&p5)?;
    let c21 = p2.add(&p4)?;
    let c22 = p1.subtract(&p2)?.add(&p3)?.add(&p6)?;
    Ok(assemble(&c11, &c12, &c21, &c22))
}

fn winograd_step<E: RingElement>(
    a: &Matrix<E>,
    b: &Matrix<E>,
    config: &MultiplicationConfig,
    depth: usize,
) -> Result<Matrix<E>> {
    let [a11, a12, a21, a22] = quadrants(a);
    let [b11, b12, b21, b22] = quadrants(b);

    let s1 = a21.add(&a22)?;
    let s2 = s1.subtract(&a11)?;
    let s3 = a11.subtract(&a21)?;
    let s4 = a12.subtract(&s2)?;
    let t1 = b12.subtract(&b11)?;
    let t2 = b22.subtract(&t1)?;
    let t3 = b22.subtract(&b12)?;
    let t4 = b21.subtract(&t2)?;

    let pairs = [
        (a11, Some(b11)),
        (a12, Some(b21)),
        (s1, Some(t1)),
        (s2, Some(t2)),
        (s3, Some(t3)),
        (s4, Some(b22)),
        (a22, Some(t4)),
    ];
    let [p1, p2, p3, p4, p5, p6, p7] = products(pairs, config, Variant::Winograd, depth)?;

    let u1 = p1.add(&p2)?;
    let u2 = p1.add(&p4)?;
    let u3 = u2.add(&p5)?;
    let u4 = u3.add(&p7)?;
    let u5 = u3.add(&p3)?;
    let u6 = u2.add(&p3)?;
    let u7 = u6.add(&p6)?;
    Ok(assemble(&u1, &u7, &u4, &u5))
}

fn bodrato_step<E: RingElement>(
    a: &Matrix<E>,
    b: &Matrix<E>,
    config: &MultiplicationConfig,
    depth: usize,
) -> Result<Matrix<E>> {
    let [a11, a12, a21, mut a22] = quadrants(a);

    let s1 = a22.add(&a12)?;
    a22.subtract_replace(&a21)?; // s2
    let s3 = a22.add(&a12)?;
    let s4 = s3.subtract(&a11)?;

    let pairs = if std::ptr::eq(a, b) {
        [
            (s1, None),
            (a22, None),
            (s3, None),
            (a11, None),
            (a12.clone(), Some(a21.clone())),
            (s4.clone(), Some(a12)),
            (a21, Some(s4)),
        ]
    } else {
        let [b11, b12, b21, mut b22] = quadrants(b);
        let t1 = b22.add(&b12)?;
        b22.subtract_replace(&b21)?; // t2
        let t3 = b22.add(&b12)?;
        let t4 = t3.subtract(&b11)?;
        [
            (s1, Some(t1)),
            (a22, Some(b22)),
            (s3, Some(t3)),
            (a11, Some(b11)),
            (a12, Some(b21)),
            (s4, Some(b12)),
            (a21, Some(t4)),
        ]
    };
    let [mut p1, mut p2, mut p3, mut p4, p5, p6, p7] =
        products(pairs, config, Variant::Bodrato, depth)?;

    p3.add_replace(&p5)?;
    p1.subtract_replace(&p3)?;
    p3.subtract_replace(&p2)?;
    p4.add_replace(&p5)?;
    p3.subtract_replace(&p6)?;
    p2.add_replace(&p1)?;
    p1.subtract_replace(&p7)?;
    Ok(assemble(&p4, &p3, &p1, &p2))
}
