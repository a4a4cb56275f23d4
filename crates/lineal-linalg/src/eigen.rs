//! Eigenvalues of real matrices.
//!
//! Three stages on a copy of the entries:
//! 1. balancing: isolate eigenvalues exposed by zero rows/columns, then
//!    scale by powers of the radix to equalize row and column norms
//! 2. reduction to upper Hessenberg form by stabilized elementary
//!    similarity transformations
//! 3. the double-shift QR iteration, deflating 1x1 and 2x2 blocks from the
//!    bottom right
//!
//! Only eigenvalues are computed. Results are in position order of the
//! deflated blocks, not sorted.

use log::{debug, warn};

use lineal_rings::{Complex, ComplexField, Real};

use crate::dense_matrix::Matrix;
use crate::error::{LinalgError, Result};
use crate::vector::Vector;

/// Tuning for the eigenvalue iteration.
#[derive(Clone, Debug, PartialEq)]
pub struct EigenConfig {
    /// Base of the balancing scale factors.
    pub radix: f64,
    /// Iterations allowed per eigenvalue before giving up.
    pub max_iterations: usize,
    /// Relative size below which a sub-diagonal entry counts as zero.
    pub tolerance: f64,
}

impl Default for EigenConfig {
    fn default() -> Self {
        Self {
            radix: 2.0,
            max_iterations: 30,
            tolerance: f64::EPSILON,
        }
    }
}

impl Matrix<Real> {
    /// All eigenvalues, as complex numbers.
    ///
    /// # Errors
    ///
    /// [`LinalgError::NotSquare`], [`LinalgError::NonFinite`] for infinite
    /// or NaN entries, or [`LinalgError::NoConvergence`] if an eigenvalue
    /// needs more than 30 iterations.
    pub fn eig(&self) -> Result<Vector<Complex>> {
        self.eig_with(&EigenConfig::default())
    }

    /// All eigenvalues, with explicit tuning.
    ///
    /// # Errors
    ///
    /// [`LinalgError::NotSquare`], [`LinalgError::NonFinite`] for infinite
    /// or NaN entries, or [`LinalgError::NoConvergence`] if an eigenvalue
    /// needs more than `config.max_iterations` iterations.
    pub fn eig_with(&self, config: &EigenConfig) -> Result<Vector<Complex>> {
        self.require_square()?;
        let n = self.num_rows();
        let mut a: Vec<Vec<f64>> = (0..n)
            .map(|r| self.row_slice(r).iter().map(|x| x.0).collect())
            .collect();
        for (row, values) in a.iter().enumerate() {
            if let Some(col) = values.iter().position(|x| !x.is_finite()) {
                return Err(LinalgError::NonFinite {
                    row: row + 1,
                    col: col + 1,
                });
            }
        }

        let (low, high) = balance(&mut a, config.radix);
        hessenberg(&mut a, low, high);
        let values = hqr(&mut a, config)?;

        let entries = values
            .into_iter()
            .map(|(re, im)| Complex::new(re, im))
            .collect();
        Ok(Vector::from_parts(entries, ComplexField))
    }
}

/// Balances `a` in place and returns the bounds `low..=high` of the block
/// that was not isolated.
fn balance(a: &mut [Vec<f64>], radix: f64) -> (usize, usize) {
    let n = a.len();
    if n == 0 {
        return (0, 0);
    }
    let radix_sq = radix * radix;
    let mut scale = vec![1.0_f64; n];
    let mut low = 0;
    let mut high = n - 1;

    // Rows with no off-diagonal entries go to the bottom.
    'rows: loop {
        for j in (0..=high).rev() {
            let isolated = (0..=high).all(|i| i == j || a[j][i] == 0.0);
            if isolated {
                #[allow(clippy::cast_precision_loss)]
                let position = j as f64;
                scale[high] = position;
                exchange(a, j, high, low, high);
                if high == 0 {
                    debug!("balance: matrix is triangular");
                    return (0, 0);
                }
                high -= 1;
                continue 'rows;
            }
        }
        break;
    }

    // Columns with no off-diagonal entries go to the left.
    'cols: loop {
        for j in low..=high {
            let isolated = (low..=high).all(|i| i == j || a[i][j] == 0.0);
            if isolated {
                #[allow(clippy::cast_precision_loss)]
                let position = j as f64;
                scale[low] = position;
                exchange(a, j, low, low, high);
                low += 1;
                if low > high {
                    break 'cols;
                }
                continue 'cols;
            }
        }
        break;
    }

    loop {
        let mut converged = true;
        for i in low..=high {
            let mut c = 0.0_f64;
            let mut r = 0.0_f64;
            for j in low..=high {
                if j != i {
                    c += a[j][i].abs();
                    r += a[i][j].abs();
                }
            }
            if c == 0.0 || r == 0.0 {
                continue;
            }

            let s = c + r;
            let mut f = 1.0_f64;
            let mut g = r / radix;
            while c < g {
                f *= radix;
                c *= radix_sq;
            }
            g = r * radix;
            while c >= g {
                f /= radix;
                c /= radix_sq;
            }

            if (c + r) / f < 0.95 * s {
                converged = false;
                scale[i] *= f;
                let g = 1.0 / f;
                for value in &mut a[i][low..] {
                    *value *= g;
                }
                for row in a.iter_mut().take(high + 1) {
                    row[i] *= f;
                }
            }
        }
        if converged {
            break;
        }
    }

    debug!("balance: active block {low}..={high}, scale {scale:?}");
    (low, high)
}

/// Swaps row and column `j` with `m`, restricted to the parts that matter
/// for the active block `low..=high`.
fn exchange(a: &mut [Vec<f64>], j: usize, m: usize, low: usize, high: usize) {
    if j == m {
        return;
    }
    for row in a.iter_mut().take(high + 1) {
        row.swap(j, m);
    }
    for i in low..a.len() {
        let tmp = a[j][i];
        a[j][i] = a[m][i];
        a[m][i] = tmp;
    }
}

/// Reduces rows and columns `low..=high` to upper Hessenberg form with
/// partial pivoting.
fn hessenberg(a: &mut [Vec<f64>], low: usize, high: usize) {
    let n = a.len();
    for m in low + 1..high {
        let mut x = 0.0_f64;
        let mut pivot = m;
        for j in m..=high {
            if a[j][m - 1].abs() > x.abs() {
                x = a[j][m - 1];
                pivot = j;
            }
        }

        if pivot != m {
            a.swap(pivot, m);
            // The swap above moved whole rows; restore the columns left of
            // m - 1, which are not part of the transformation.
            for j in 0..m - 1 {
                let tmp = a[pivot][j];
                a[pivot][j] = a[m][j];
                a[m][j] = tmp;
            }
            for row in a.iter_mut().take(high + 1) {
                row.swap(pivot, m);
            }
        }

        if x == 0.0 {
            continue;
        }
        for i in m + 1..=high {
            let y = a[i][m - 1];
            if y == 0.0 {
                continue;
            }
            let y = y / x;
            a[i][m - 1] = 0.0;
            for j in m..n {
                a[i][j] -= y * a[m][j];
            }
            for row in a.iter_mut().take(high + 1) {
                row[m] += y * row[i];
            }
        }
    }
}

/// Eigenvalues of an upper Hessenberg matrix by the double-shift QR
/// iteration. Destroys `h`.
#[allow(clippy::many_single_char_names, clippy::too_many_lines)]
fn hqr(h: &mut [Vec<f64>], config: &EigenConfig) -> Result<Vec<(f64, f64)>> {
    let n = h.len();
    let mut values = vec![(0.0, 0.0); n];
    let tol = config.tolerance;

    let norm: f64 = h.iter().flatten().map(|x| x.abs()).sum();
    let mut shift = 0.0_f64;
    let mut last = n.checked_sub(1);

    while let Some(en) = last {
        let mut its = 0;
        loop {
            // Find the lowest negligible sub-diagonal entry.
            let mut l = 0;
            for k in (1..=en).rev() {
                let mut s = h[k - 1][k - 1].abs() + h[k][k].abs();
                if s == 0.0 {
                    s = norm;
                }
                if h[k][k - 1].abs() <= tol * s {
                    l = k;
                    break;
                }
            }

            let mut x = h[en][en];
            if l == en {
                values[en] = (x + shift, 0.0);
                last = en.checked_sub(1);
                break;
            }

            let na = en - 1;
            let mut y = h[na][na];
            let mut w = h[en][na] * h[na][en];
            if l == na {
                let p = (y - x) / 2.0;
                let q = p * p + w;
                let z = q.abs().sqrt();
                x += shift;
                if q > 0.0 {
                    let z = if p < 0.0 { p - z } else { p + z };
                    values[na] = (x + z, 0.0);
                    values[en] = (x - w / z, 0.0);
                } else {
                    values[na] = (x + p, z);
                    values[en] = (x + p, -z);
                }
                last = en.checked_sub(2);
                break;
            }

            if its == config.max_iterations {
                warn!("hqr: eigenvalue {} did not converge after {its} iterations", en + 1);
                return Err(LinalgError::NoConvergence {
                    eigenvalue: en + 1,
                    iterations: its,
                });
            }

            if its == 10 || its == 20 {
                debug!("hqr: exceptional shift at iteration {its}");
                shift += x;
                for (i, row) in h.iter_mut().enumerate().take(en + 1) {
                    row[i] -= x;
                }
                let s = h[en][na].abs() + h[na][en - 2].abs();
                x = 0.75 * s;
                y = x;
                w = -0.4375 * s * s;
            }
            its += 1;

            // Look for two consecutive small sub-diagonal entries.
            let mut m = en - 2;
            let mut p;
            let mut q;
            let mut r;
            loop {
                let z = h[m][m];
                let rr = x - z;
                let ss = y - z;
                p = (rr * ss - w) / h[m + 1][m] + h[m][m + 1];
                q = h[m + 1][m + 1] - z - rr - ss;
                r = h[m + 2][m + 1];
                let s = p.abs() + q.abs() + r.abs();
                p /= s;
                q /= s;
                r /= s;
                if m == l {
                    break;
                }
                let u = h[m][m - 1].abs() * (q.abs() + r.abs());
                let v = p.abs() * (h[m - 1][m - 1].abs() + z.abs() + h[m + 1][m + 1].abs());
                if u <= tol * v {
                    break;
                }
                m -= 1;
            }

            for i in m + 2..=en {
                h[i][i - 2] = 0.0;
                if i >= m + 3 {
                    h[i][i - 3] = 0.0;
                }
            }

            // Double QR step on rows l..=en and columns m..=en.
            for k in m..=na {
                let not_last = k != na;
                if k != m {
                    p = h[k][k - 1];
                    q = h[k + 1][k - 1];
                    r = if not_last { h[k + 2][k - 1] } else { 0.0 };
                    x = p.abs() + q.abs() + r.abs();
                    if x == 0.0 {
                        continue;
                    }
                    p /= x;
                    q /= x;
                    r /= x;
                }

                let mut s = (p * p + q * q + r * r).sqrt();
                if p < 0.0 {
                    s = -s;
                }
                if k != m {
                    h[k][k - 1] = -s * x;
                } else if l != m {
                    h[k][k - 1] = -h[k][k - 1];
                }
                p += s;
                x = p / s;
                y = q / s;
                let z = r / s;
                q /= p;
                r /= p;

                for j in k..=en {
                    let mut t = h[k][j] + q * h[k + 1][j];
                    if not_last {
                        t += r * h[k + 2][j];
                        h[k + 2][j] -= t * z;
                    }
                    h[k + 1][j] -= t * y;
                    h[k][j] -= t * x;
                }

                let upper = (k + 3).min(en);
                for row in h.iter_mut().take(upper + 1).skip(l) {
                    let mut t = x * row[k] + y * row[k + 1];
                    if not_last {
                        t += z * row[k + 2];
                        row[k + 2] -= t * r;
                    }
                    row[k + 1] -= t * q;
                    row[k] -= t;
                }
            }
        }
    }

    Ok(values)
}
