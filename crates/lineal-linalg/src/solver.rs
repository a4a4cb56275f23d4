//! Linear systems `A * x = b`.
//!
//! Every entry point reduces the augmented matrix `[A | b]`. The system is
//! inconsistent exactly when the last non-zero row of the reduced matrix
//! has its only non-zero entries in the `b` column.

use lineal_rings::{ElementFactory, RingElement};

use crate::dense_matrix::Matrix;
use crate::error::{LinalgError, Result};
use crate::subspace::AffineSubspace;
use crate::vector::Vector;

fn augment<E: RingElement>(a: &Matrix<E>, b: &Vector<E>) -> Result<Matrix<E>> {
    if a.num_rows() != b.len() {
        return Err(LinalgError::dimension("solve", a.num_rows(), b.len()));
    }
    a.insert_col(a.num_cols() + 1, b)
}

/// Number of leading rows of an echelon form that are not entirely zero.
fn nonzero_rows<E: RingElement>(m: &Matrix<E>) -> usize {
    let mut rows = m.num_rows();
    while rows > 0 && m.row_is_zero(rows - 1) {
        rows -= 1;
    }
    rows
}

/// Checks the echelon form of `[A | b]` for a row `[0 ... 0 | c]`, c != 0.
fn consistent<E: RingElement>(reduced: &Matrix<E>, rows: usize, vars: usize) -> bool {
    match rows.checked_sub(1) {
        None => true,
        Some(last) => (0..vars).any(|c| !reduced.at(last, c).is_zero()),
    }
}

/// Returns true if `A * x = b` has a solution.
///
/// # Errors
///
/// Dimension mismatch unless `b.len() == a.num_rows()`, or elimination
/// errors over rings without division.
pub fn is_solvable<E: RingElement>(a: &Matrix<E>, b: &Vector<E>) -> Result<bool> {
    let reduced = augment(a, b)?.gausselim()?;
    let rows = nonzero_rows(&reduced);
    Ok(consistent(&reduced, rows, a.num_cols()))
}

/// One solution of `A * x = b` with every free variable set to zero, or
/// `None` if the system is inconsistent.
///
/// Uses row echelon form and back substitution.
///
/// # Errors
///
/// Dimension mismatch unless `b.len() == a.num_rows()`, or elimination
/// errors over rings without division.
pub fn solve<E: RingElement>(a: &Matrix<E>, b: &Vector<E>) -> Result<Option<Vector<E>>> {
    let vars = a.num_cols();
    let reduced = augment(a, b)?.gausselim()?;
    let rows = nonzero_rows(&reduced);
    if !consistent(&reduced, rows, vars) {
        return Ok(None);
    }

    let factory = a.factory();
    let mut x = factory.zeros(vars);
    for r in (0..rows).rev() {
        let Some(pivot) = (0..vars).find(|&c| !reduced.at(r, c).is_zero()) else {
            continue;
        };
        let mut rhs = reduced.at(r, vars).clone();
        for c in pivot + 1..vars {
            rhs = rhs.subtract(&reduced.at(r, c).multiply(&x[c])?)?;
        }
        x[pivot] = rhs.divide(reduced.at(r, pivot))?;
    }
    Ok(Some(Vector::from_parts(x, factory.clone())))
}

/// The full solution set of `A * x = b`, or `None` if it is empty.
///
/// The result is normalized: one generator per free variable, each with
/// that variable set to `-1` and the pivot variables read off the reduced
/// row echelon form. A zero particular solution yields a linear subspace.
///
/// # Errors
///
/// Dimension mismatch unless `b.len() == a.num_rows()`, or elimination
/// errors over rings without division.
pub fn solution_space<E: RingElement>(
    a: &Matrix<E>,
    b: &Vector<E>,
) -> Result<Option<AffineSubspace<E>>> {
    let vars = a.num_cols();
    let reduced = augment(a, b)?.gaussjord()?;
    let rank = nonzero_rows(&reduced);
    if !consistent(&reduced, rank, vars) {
        return Ok(None);
    }
    let mut reduced = reduced.block(0, 0, rank, vars + 1);

    // Move every pivot onto the diagonal, remembering the column swaps.
    let mut swaps = Vec::new();
    for row in 0..rank {
        if !reduced.at(row, row).is_zero() {
            continue;
        }
        if let Some(col) = (row + 1..vars).find(|&c| !reduced.at(row, c).is_zero()) {
            reduced.exchange_cols(row, col);
            swaps.push((row, col));
        }
    }

    let factory = a.factory();
    let minus_one = factory.minus_one();

    let mut generators: Vec<Vec<E>> = (rank..vars)
        .map(|col| {
            let mut g = factory.zeros(vars);
            for (row, entry) in g.iter_mut().enumerate().take(rank) {
                *entry = reduced.at(row, col).clone();
            }
            g[col] = minus_one.clone();
            g
        })
        .collect();

    let mut particular = factory.zeros(vars);
    for (row, entry) in particular.iter_mut().enumerate().take(rank) {
        *entry = reduced.at(row, vars).clone();
    }

    for &(i, j) in swaps.iter().rev() {
        particular.swap(i, j);
        for g in &mut generators {
            g.swap(i, j);
        }
    }

    let particular = Vector::from_parts(particular, factory.clone());
    let offset = (!particular.is_zero()).then_some(particular);
    let generators = generators
        .into_iter()
        .map(|g| Vector::from_parts(g, factory.clone()))
        .collect();
    Ok(Some(AffineSubspace::from_parts(
        offset,
        generators,
        vars,
        factory.clone(),
        true,
    )))
}
