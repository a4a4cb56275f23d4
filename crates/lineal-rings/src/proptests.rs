//! Property-based tests for the element contract.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        AlgebraError, ConvertFrom, ElementFactory, PrimeField, Q, RationalField, RingElement, Z,
    };

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Q> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Q::new(n, d))
    }

    proptest! {
        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let (a, b, c) = (Z::new(a), Z::new(b), Z::new(c));
            let lhs = a.multiply(&b.add(&c).unwrap()).unwrap();
            let rhs = a.multiply(&b).unwrap().add(&a.multiply(&c).unwrap()).unwrap();
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn integer_negate_is_additive_inverse(a in small_int()) {
            let a = Z::new(a);
            prop_assert!(a.add(&a.negate()).unwrap().is_zero());
        }

        #[test]
        fn rational_add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        }

        #[test]
        fn rational_mul_associative(a in rational(), b in rational(), c in rational()) {
            let lhs = a.multiply(&b).unwrap().multiply(&c).unwrap();
            let rhs = a.multiply(&b.multiply(&c).unwrap()).unwrap();
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn rational_inverse(a in rational()) {
            if a.is_zero() {
                prop_assert_eq!(a.invert(), Err(AlgebraError::DivisionByZero));
            } else {
                prop_assert!(a.multiply(&a.invert().unwrap()).unwrap().is_one());
            }
        }

        #[test]
        fn rational_divide_undoes_multiply(a in rational(), d in non_zero_int()) {
            let d = Q::from_integer(d);
            prop_assert_eq!(a.multiply(&d).unwrap().divide(&d).unwrap(), a);
        }

        #[test]
        fn integer_embeds_in_rationals(a in small_int(), b in small_int()) {
            let sum = Z::new(a).add(&Z::new(b)).unwrap();
            let embedded = RationalField.convert(&sum).unwrap();
            prop_assert_eq!(embedded, Q::from_integer(a + b));
        }

        #[test]
        fn prime_field_inverse(a in 1i64..10_007) {
            let field = PrimeField::new(10_007).unwrap();
            let x = field.element(a);
            prop_assert!(x.multiply(&x.invert().unwrap()).unwrap().is_one());
        }

        #[test]
        fn prime_field_reduces_like_integers(a in small_int(), b in small_int()) {
            let field = PrimeField::new(13).unwrap();
            let product = field.element(a).multiply(&field.element(b)).unwrap();
            prop_assert_eq!(product, field.get(a * b));
        }
    }
}
