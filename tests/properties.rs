use decimal_bigint::BigInt;
use proptest::prelude::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn big(literal: &str) -> BigInt {
    literal.parse().unwrap()
}

/// Decimal literals of up to 60 digits, mostly beyond the native range, with
/// an optional sign and leading zeros.
fn literal() -> impl Strategy<Value = String> {
    "-?0{0,3}[0-9]{1,60}"
}

proptest! {
    #[test]
    fn prop_matches_native_arithmetic(a in any::<i64>(), b in any::<i64>()) {
        init_logger();
        let (x, y) = (BigInt::from(a), BigInt::from(b));
        let (wa, wb) = (a as i128, b as i128);

        prop_assert_eq!((&x + &y).to_string(), (wa + wb).to_string());
        prop_assert_eq!((&x - &y).to_string(), (wa - wb).to_string());
        prop_assert_eq!((&x * &y).to_string(), (wa * wb).to_string());
        if b != 0 {
            prop_assert_eq!((&x / &y).to_string(), (wa / wb).to_string());
            prop_assert_eq!((&x % &y).to_string(), (wa % wb).to_string());
        }
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
    }

    #[test]
    fn prop_native_and_literal_agree(a in any::<i64>()) {
        let from_native = BigInt::from(a);
        let from_literal = big(&a.to_string());
        prop_assert_eq!(&from_native, &from_literal);
        prop_assert_eq!(from_literal.to_i64().unwrap(), a);
        prop_assert!(from_native == a);
    }

    #[test]
    fn prop_display_round_trip(s in literal()) {
        let value = big(&s);
        let printed = value.to_string();
        prop_assert!(!printed.starts_with('0') || printed == "0");
        prop_assert_eq!(big(&printed), value);
    }

    #[test]
    fn prop_additive_round_trip(a in literal(), b in literal()) {
        let (a, b) = (big(&a), big(&b));
        prop_assert_eq!(&(&a + &b) - &b, a.clone());
        prop_assert_eq!(&(&a - &b) + &b, a);
    }

    #[test]
    fn prop_commutative_and_associative(a in literal(), b in literal(), c in literal()) {
        let (a, b, c) = (big(&a), big(&b), big(&c));
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!(&a * &b, &b * &a);
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn prop_identities(a in literal()) {
        let a = big(&a);
        prop_assert_eq!(&a + &BigInt::zero(), a.clone());
        prop_assert_eq!(&a * &BigInt::one(), a.clone());
        prop_assert!((&a * &BigInt::zero()).is_zero());
        prop_assert!(!(&a - &a).is_negative());
        prop_assert_eq!(-(-a.clone()), a);
    }

    #[test]
    fn prop_division_identity(a in literal(), b in literal()) {
        init_logger();
        let (a, b) = (big(&a), big(&b));
        prop_assume!(!b.is_zero());

        let (q, r) = a.div_rem(&b).unwrap();
        prop_assert_eq!(&(&q * &b) + &r, a.clone());
        prop_assert!(r.abs() < b.abs());
        prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());
        prop_assert!(q.is_zero() || q.is_negative() == (a.is_negative() != b.is_negative()));
    }

    #[test]
    fn prop_ordering_is_consistent(a in literal(), b in literal()) {
        let (a, b) = (big(&a), big(&b));
        let diff = &a - &b;
        prop_assert_eq!(a < b, diff.is_negative());
        prop_assert_eq!(a == b, diff.is_zero());
        prop_assert_eq!(a > b, diff.is_positive());
        prop_assert_eq!(a <= b, !(a > b));
        prop_assert_eq!(a >= b, !(a < b));
    }
}
