//! Property-based tests for the matrix algorithms.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::determinant::{gaussian_method, leibniz_method};
    use crate::multiplication::{self, MultiplicationConfig};
    use crate::solver::{is_solvable, solution_space, solve};
    use crate::{Matrix, Vector};
    use lineal_rings::{RationalField, RingElement, Q};

    fn entries(len: usize) -> impl Strategy<Value = Vec<Q>> {
        proptest::collection::vec(-9i64..10i64, len)
            .prop_map(|v| v.into_iter().map(Q::from_integer).collect())
    }

    fn matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<Q>> {
        entries(rows * cols).prop_map(move |data| {
            let rows = data.chunks(cols.max(1)).map(<[Q]>::to_vec).collect();
            Matrix::from_rows_in(rows, RationalField).unwrap()
        })
    }

    fn square() -> impl Strategy<Value = Matrix<Q>> {
        (1usize..=4).prop_flat_map(|n| matrix(n, n))
    }

    fn square_pair() -> impl Strategy<Value = (Matrix<Q>, Matrix<Q>)> {
        (1usize..=4).prop_flat_map(|n| (matrix(n, n), matrix(n, n)))
    }

    fn product_pair() -> impl Strategy<Value = (Matrix<Q>, Matrix<Q>)> {
        (1usize..=6, 1usize..=6, 1usize..=6).prop_flat_map(|(r, k, c)| (matrix(r, k), matrix(k, c)))
    }

    fn system() -> impl Strategy<Value = (Matrix<Q>, Vector<Q>)> {
        (1usize..=4, 1usize..=4).prop_flat_map(|(r, c)| {
            (matrix(r, c), entries(r))
                .prop_map(|(a, b)| (a, Vector::new(b, RationalField).unwrap()))
        })
    }

    proptest! {
        #[test]
        fn multiplication_strategies_agree((a, b) in product_pair()) {
            let expected = multiplication::school(&a, &b).unwrap();
            let config = MultiplicationConfig { truncation_point: 1, ..MultiplicationConfig::default() };
            prop_assert_eq!(&multiplication::simple(&a, &b).unwrap(), &expected);
            prop_assert_eq!(&multiplication::strassen_original_with(&a, &b, &config).unwrap(), &expected);
            prop_assert_eq!(&multiplication::strassen_winograd_with(&a, &b, &config).unwrap(), &expected);
            prop_assert_eq!(&multiplication::strassen_bodrato_with(&a, &b, &config).unwrap(), &expected);
        }

        #[test]
        fn determinant_methods_agree(m in square()) {
            prop_assert_eq!(gaussian_method(&m).unwrap(), leibniz_method(&m).unwrap());
        }

        #[test]
        fn determinant_is_multiplicative((a, b) in square_pair()) {
            let ab = a.multiply(&b).unwrap().det().unwrap();
            let product = a.det().unwrap().multiply(&b.det().unwrap()).unwrap();
            prop_assert_eq!(ab, product);
        }

        #[test]
        fn rank_is_transpose_invariant(m in (1usize..=5, 1usize..=5).prop_flat_map(|(r, c)| matrix(r, c))) {
            let rank = m.rank().unwrap();
            prop_assert!(rank <= m.num_rows().min(m.num_cols()));
            prop_assert_eq!(rank, m.transpose().rank().unwrap());
        }

        #[test]
        fn inverse_exists_iff_determinant_nonzero(m in square()) {
            let n = m.num_rows();
            match m.inverse().unwrap() {
                Some(inv) => {
                    prop_assert!(!m.det().unwrap().is_zero());
                    prop_assert_eq!(m.multiply(&inv).unwrap(), Matrix::<Q>::identity(n, RationalField));
                }
                None => {
                    prop_assert!(m.det().unwrap().is_zero());
                    prop_assert!(m.rank().unwrap() < n);
                }
            }
        }

        #[test]
        fn solutions_satisfy_system((a, b) in system()) {
            let solution = solve(&a, &b).unwrap();
            prop_assert_eq!(is_solvable(&a, &b).unwrap(), solution.is_some());
            let space = solution_space(&a, &b).unwrap();
            prop_assert_eq!(space.is_some(), solution.is_some());

            if let (Some(x), Some(space)) = (solution, space) {
                prop_assert_eq!(&a.multiply_vector(&x).unwrap(), &b);
                prop_assert!(space.contains(&x).unwrap());
                prop_assert_eq!(&a.multiply_vector(&space.inhomogeneous_part()).unwrap(), &b);
                prop_assert_eq!(space.dimension().unwrap(), a.num_cols() - a.rank().unwrap());
            }
        }
    }
}
