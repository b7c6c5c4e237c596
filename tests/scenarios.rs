use decimal_bigint::{BigInt, BigIntError};

fn big(literal: &str) -> BigInt {
    literal.parse().unwrap()
}

#[test]
fn test_large_sum() {
    assert_eq!(
        big("123456789123456789") + big("876543210876543211"),
        big("1000000000000000000")
    );
}

#[test]
fn test_large_product() {
    assert_eq!(big("999999999999999999") * BigInt::from(2_i64), big("1999999999999999998"));
}

#[test]
fn test_large_quotient() {
    assert_eq!(big("1000000000000000000") / big("1000000000"), big("1000000000"));
}

#[test]
fn test_ordering_with_signs() {
    assert!(BigInt::from(-7_i64) < BigInt::from(3_i64));
    assert!(!(BigInt::from(-7_i64) < BigInt::from(-10_i64)));
}

#[test]
fn test_division_by_zero() {
    for dividend in [big("42"), big("-123456789012345678901234567890123")] {
        assert!(matches!(
            dividend.checked_div(&BigInt::zero()),
            Err(BigIntError::DivisionByZero)
        ));
        assert!(matches!(
            dividend.div_rem(&BigInt::from(0_i64)),
            Err(BigIntError::DivisionByZero)
        ));
    }
}

#[test]
fn test_sign_handling() {
    assert_eq!(BigInt::from(-5_i64) + BigInt::from(5_i64), BigInt::from(0_i64));
    assert_eq!(BigInt::from(-5_i64) * BigInt::from(-3_i64), BigInt::from(15_i64));
    assert_eq!(BigInt::from(5_i64) - BigInt::from(8_i64), BigInt::from(-3_i64));
}

#[test]
fn test_mixed_operands() {
    let a = big("100000000000000000000");
    assert_eq!(&a + 1_i64, "100000000000000000001");
    assert_eq!(&a - "100000000000000000001", -1_i64);
    assert_eq!(&a * -2_i64, "-200000000000000000000");
    assert_eq!(&a / "-100000000000", big("-1000000000"));
    assert_eq!(&a % 7_i64, 2_i64);

    let mut acc = a.clone();
    acc -= &a;
    acc += "5";
    acc *= 3_i64;
    acc /= BigInt::from(2_i64);
    acc %= "4";
    assert_eq!(acc, 3_i64);
}

#[test]
fn test_factorial() {
    let mut product = BigInt::one();
    for n in 1..=30_i64 {
        product *= n;
    }
    assert_eq!(product.to_string(), "265252859812191058636308480000000");
    for n in (1..=30_i64).rev() {
        product /= n;
    }
    assert_eq!(product, 1_i64);
}
