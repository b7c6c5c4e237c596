use num_traits::{
    CheckedAdd, CheckedDiv, CheckedMul, CheckedSub,
    FromPrimitive, ToPrimitive,
    Num, One, Signed, Zero,
};

use crate::big_int_constants::RADIX;
use crate::{BigInt, BigIntError};

impl Zero for BigInt {
    fn zero() -> Self {
        BigInt::zero()
    }

    fn is_zero(&self) -> bool {
        BigInt::is_zero(self)
    }
}

impl One for BigInt {
    fn one() -> Self {
        BigInt::one()
    }
}

impl Num for BigInt {
    type FromStrRadixErr = BigIntError;

    /// Only base 10 is supported.
    fn from_str_radix(s: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        if radix != RADIX as u32 {
            return Err(BigIntError::UnsupportedRadix(radix));
        }
        BigInt::parse(s)
    }
}

impl Signed for BigInt {
    fn abs(&self) -> Self {
        BigInt::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            BigInt::zero()
        } else {
            self - other
        }
    }

    fn signum(&self) -> Self {
        BigInt::signum(self)
    }

    fn is_positive(&self) -> bool {
        BigInt::is_positive(self)
    }

    fn is_negative(&self) -> bool {
        BigInt::is_negative(self)
    }
}

impl ToPrimitive for BigInt {
    fn to_i64(&self) -> Option<i64> {
        BigInt::to_i64(self).ok()
    }

    fn to_u64(&self) -> Option<u64> {
        BigInt::to_u64(self).ok()
    }
}

impl FromPrimitive for BigInt {
    fn from_i64(n: i64) -> Option<Self> {
        Some(BigInt::from(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(BigInt::from(n))
    }
}

impl CheckedAdd for BigInt {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        Some(self + v)
    }
}

impl CheckedSub for BigInt {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        Some(self - v)
    }
}

impl CheckedMul for BigInt {
    fn checked_mul(&self, v: &Self) -> Option<Self> {
        Some(self * v)
    }
}

impl CheckedDiv for BigInt {
    fn checked_div(&self, v: &Self) -> Option<Self> {
        BigInt::checked_div(self, v).ok()
    }
}

#[cfg(test)]
mod tests {
    use num_traits::{
        CheckedAdd, CheckedDiv, CheckedMul, CheckedSub,
        FromPrimitive, Num, One, Signed, ToPrimitive, Zero,
    };

    use crate::{BigInt, BigIntError};

    fn sum_all<T: Zero + Clone>(values: &[T]) -> T {
        values.iter().cloned().fold(T::zero(), |acc, v| acc + v)
    }

    #[test]
    fn test_generic_use() {
        let values: Vec<BigInt> = ["99999999999999999999", "1", "-20"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(sum_all(&values), "99999999999999999980");
        assert!(<BigInt as One>::one().is_one());
    }

    #[test]
    fn test_num() {
        assert_eq!(<BigInt as Num>::from_str_radix("-120", 10).unwrap(), -120_i64);
        assert!(matches!(
            <BigInt as Num>::from_str_radix("ff", 16),
            Err(BigIntError::UnsupportedRadix(16))
        ));
    }

    #[test]
    fn test_signed() {
        let a = BigInt::from(-7_i64);
        let b = BigInt::from(3_i64);
        assert_eq!(Signed::abs(&a), 7_i64);
        assert_eq!(Signed::abs_sub(&b, &a), 10_i64);
        assert_eq!(Signed::abs_sub(&a, &b), 0_i64);
        assert_eq!(Signed::signum(&a), -1_i64);
        assert!(Signed::is_negative(&a));
        assert!(Signed::is_positive(&b));
    }

    #[test]
    fn test_primitive() {
        let big: BigInt = "123456789012345678901234567890".parse().unwrap();
        assert_eq!(ToPrimitive::to_i64(&big), None);
        assert_eq!(ToPrimitive::to_i64(&BigInt::from(-5_i64)), Some(-5));
        assert_eq!(ToPrimitive::to_u64(&BigInt::from(-5_i64)), None);
        assert_eq!(ToPrimitive::to_u32(&BigInt::from(70000_i64)), Some(70000));
        assert_eq!(<BigInt as FromPrimitive>::from_u64(u64::MAX).unwrap().to_string(), "18446744073709551615");
    }

    #[test]
    fn test_checked_div() {
        let big: BigInt = "123456789012345678901234567890".parse().unwrap();
        assert_eq!(CheckedDiv::checked_div(&big, &BigInt::zero()), None);
        assert_eq!(CheckedDiv::checked_div(&big, &BigInt::from(10_i64)).unwrap(), "12345678901234567890123456789");
    }

    #[test]
    fn test_checked_ops() {
        let a: BigInt = "99999999999999999999".parse().unwrap();
        let b = BigInt::from(-3_i64);
        assert_eq!(CheckedAdd::checked_add(&a, &b).unwrap(), "99999999999999999996");
        assert_eq!(CheckedSub::checked_sub(&b, &a).unwrap(), "-100000000000000000002");
        assert_eq!(CheckedMul::checked_mul(&a, &b).unwrap(), "-299999999999999999997");
    }
}
