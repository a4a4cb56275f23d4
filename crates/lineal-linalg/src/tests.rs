//! Integration tests for lineal-linalg.

#[cfg(test)]
mod integration_tests {
    use crate::determinant::{gaussian_method, leibniz_method};
    use crate::multiplication::{self, MultiplicationConfig};
    use crate::solver::{is_solvable, solution_space, solve};
    use crate::{Matrix, Vector};
    use approx::assert_relative_eq;
    use lineal_rings::{
        Complex, ComplexField, IntegerRing, RationalField, Real, RealField, Q, Z,
    };
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn q(n: i64) -> Q {
        Q::from_integer(n)
    }

    fn qm(rows: &[&[i64]]) -> Matrix<Q> {
        Matrix::from_rows_in(
            rows.iter().map(|r| r.iter().map(|&v| q(v)).collect()).collect(),
            RationalField,
        )
        .unwrap()
    }

    fn qv(entries: &[i64]) -> Vector<Q> {
        Vector::new(entries.iter().map(|&v| q(v)).collect(), RationalField).unwrap()
    }

    /// A random matrix with determinant one: unit lower times unit upper.
    fn unimodular(n: usize, rng: &mut ChaCha8Rng) -> Matrix<Q> {
        let mut lower = Matrix::<Q>::random(n, n, RationalField, rng);
        let mut upper = Matrix::<Q>::random(n, n, RationalField, rng);
        for i in 1..=n {
            for j in 1..=n {
                if i == j {
                    lower.set(i, j, q(1)).unwrap();
                    upper.set(i, j, q(1)).unwrap();
                } else if i < j {
                    lower.set(i, j, q(0)).unwrap();
                } else {
                    upper.set(i, j, q(0)).unwrap();
                }
            }
        }
        lower.multiply(&upper).unwrap()
    }

    #[test]
    fn test_determinant_methods_agree_on_small_cases() {
        let m = qm(&[&[0, 1], &[1, 1]]);
        assert_eq!(gaussian_method(&m).unwrap(), q(-1));
        assert_eq!(leibniz_method(&m).unwrap(), q(-1));

        let m = qm(&[&[0, 1, 2], &[3, 4, 5], &[6, 7, 9]]);
        assert_eq!(gaussian_method(&m).unwrap(), q(-3));
        assert_eq!(leibniz_method(&m).unwrap(), q(-3));
        assert_eq!(m.det().unwrap(), q(-3));
    }

    #[test]
    fn test_strassen_matches_naive_on_random_rationals() {
        let mut rng = ChaCha8Rng::seed_from_u64(10);
        let a = Matrix::<Q>::random(10, 10, RationalField, &mut rng);
        let b = Matrix::<Q>::random(10, 10, RationalField, &mut rng);
        let expected = multiplication::school(&a, &b).unwrap();
        let config = MultiplicationConfig {
            truncation_point: 2,
            ..MultiplicationConfig::default()
        };

        assert_eq!(multiplication::simple(&a, &b).unwrap(), expected);
        assert_eq!(multiplication::strassen_original(&a, &b).unwrap(), expected);
        assert_eq!(
            multiplication::strassen_original_with(&a, &b, &config).unwrap(),
            expected
        );
        assert_eq!(
            multiplication::strassen_winograd_with(&a, &b, &config).unwrap(),
            expected
        );
        assert_eq!(
            multiplication::strassen_bodrato_with(&a, &b, &config).unwrap(),
            expected
        );
    }

    #[test]
    fn test_identity_system() {
        let a = qm(&[&[1, 0], &[0, 1]]);
        let b = qv(&[0, 0]);
        assert_eq!(solve(&a, &b).unwrap(), Some(qv(&[0, 0])));

        let space = solution_space(&a, &b).unwrap().unwrap();
        assert_eq!(space.dimension().unwrap(), 0);
        assert!(space.is_linear());
    }

    #[test]
    fn test_rank_one_system_space() {
        let a = qm(&[&[1, 1], &[1, 1]]);
        let b = qv(&[1, 1]);
        let space = solution_space(&a, &b).unwrap().unwrap();

        assert_eq!(space.inhomogeneous_part(), qv(&[1, 0]));
        assert_eq!(space.generators(), &[qv(&[1, -1])]);
        assert_eq!(space.dimension().unwrap(), 1);
        assert!(space.contains(&qv(&[-4, 5])).unwrap());
        assert!(!space.contains(&qv(&[1, 1])).unwrap());
    }

    #[test]
    fn test_complex_conjugate_eigenvalues() {
        let m = Matrix::from_rows_in(
            vec![vec![Real(3.0), Real(-5.0)], vec![Real(1.0), Real(-1.0)]],
            RealField,
        )
        .unwrap();
        let values = m.eig().unwrap();
        assert_eq!(values.len(), 2);
        for want in [Complex::new(1.0, 1.0), Complex::new(1.0, -1.0)] {
            let found = values
                .entries()
                .iter()
                .any(|c| (c.re() - want.re()).abs() < 1e-9 && (c.im() - want.im()).abs() < 1e-9);
            assert!(found, "missing eigenvalue {want} in {values}");
        }
    }

    #[test]
    fn test_eigenvalues_match_trace_and_determinant() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let m = Matrix::<Real>::random(5, 5, RealField, &mut rng);
        let values = m.eig().unwrap();

        let sum = values.sum().unwrap();
        assert_relative_eq!(sum.re(), m.trace().unwrap().0, epsilon = 1e-9);
        assert_relative_eq!(sum.im(), 0.0, epsilon = 1e-9);

        let product = values.element_product().unwrap();
        assert_relative_eq!(product.re(), m.det().unwrap().0, epsilon = 1e-9);
        assert_relative_eq!(product.im(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_inverse_round_trip() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let a = unimodular(6, &mut rng);
        assert_eq!(a.det().unwrap(), q(1));

        let inv = a.inverse().unwrap().unwrap();
        let id = Matrix::<Q>::identity(6, RationalField);
        assert_eq!(a.multiply(&inv).unwrap(), id);
        assert_eq!(inv.multiply(&a).unwrap(), id);
        assert_eq!(inv.inverse().unwrap().unwrap(), a);
    }

    #[test]
    fn test_integer_inverse_needs_unit_pivots() {
        let z = Matrix::from_rows_in(
            vec![vec![Z::new(2), Z::new(1)], vec![Z::new(1), Z::new(1)]],
            IntegerRing,
        )
        .unwrap();
        assert_eq!(z.det().unwrap(), Z::new(1));
        assert!(z.inverse().unwrap_err().is_invalid_operation());

        let inv = z.convert(&RationalField).unwrap().inverse().unwrap().unwrap();
        assert_eq!(inv, qm(&[&[1, -1], &[-1, 2]]));
    }

    #[test]
    fn test_solver_recovers_planted_solution() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let a = Matrix::<Q>::random(5, 4, RationalField, &mut rng);
        let x = Vector::<Q>::random(4, RationalField, &mut rng);
        let b = a.multiply_vector(&x).unwrap();

        assert!(is_solvable(&a, &b).unwrap());
        let y = solve(&a, &b).unwrap().unwrap();
        assert_eq!(a.multiply_vector(&y).unwrap(), b);

        let space = solution_space(&a, &b).unwrap().unwrap();
        assert!(space.contains(&x).unwrap());
        for g in space.generators() {
            assert!(a.multiply_vector(g).unwrap().is_zero());
        }
    }

    #[test]
    fn test_rank_is_transpose_invariant() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let left = Matrix::<Q>::random(5, 2, RationalField, &mut rng);
        let right = Matrix::<Q>::random(2, 4, RationalField, &mut rng);
        let m = left.multiply(&right).unwrap();

        let rank = m.rank().unwrap();
        assert!(rank <= 2);
        assert_eq!(rank, m.transpose().rank().unwrap());
        assert_eq!(m.det(), Err(crate::LinalgError::NotSquare { rows: 5, cols: 4 }));
    }

    #[test]
    fn test_integer_determinant_matches_rational() {
        let rows = vec![
            vec![Z::new(2), Z::new(-1), Z::new(0)],
            vec![Z::new(1), Z::new(3), Z::new(4)],
            vec![Z::new(5), Z::new(0), Z::new(-2)],
        ];
        let z = Matrix::from_rows_in(rows, IntegerRing).unwrap();
        let rational = z.convert(&RationalField).unwrap();
        assert_eq!(z.det().unwrap(), Z::new(-34));
        assert_eq!(rational.det().unwrap(), q(-34));
    }

    #[test]
    fn test_real_to_complex_conversion() {
        let m = Matrix::from_rows_in(
            vec![vec![Real(1.5), Real(0.0)], vec![Real(-2.0), Real(4.0)]],
            RealField,
        )
        .unwrap();
        let c = m.convert(&ComplexField).unwrap();
        assert_eq!(c.get(2, 1).unwrap(), &Complex::new(-2.0, 0.0));
        assert_eq!(c.det().unwrap(), Complex::new(6.0, 0.0));
    }
}
