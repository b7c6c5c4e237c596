//! # BigInt
//! Arbitrary-precision signed integers kept as a sequence of decimal digits.
//! Every value is canonical: no leading zero digits, and zero is never negative.
//! # Example
//! ```
//! use decimal_bigint::BigInt;
//!
//! let a: BigInt = "10000000000000".parse().unwrap();
//! let b = BigInt::from(900000000000_i64);
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! ```
//!

use std::fmt::{self, Debug, Display};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Neg,
};
use std::cmp::{Ord, Eq, PartialEq, PartialOrd, Ordering};
use std::str::FromStr;

use log::trace;

use crate::big_int_constants::*;
use crate::big_int_cache::*;
use crate::error::{BigIntError, ParseErrorKind};

macro_rules! trim_high_zeros {
    ($vec: expr) => {
        {
            while $vec.len() > 1 && $vec.last() == Some(&0) {
                $vec.pop();
            }
        }
    };
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    negative: bool,
    /// least significant digit first
    digits: Vec<u8>,
}

// 实现构造
impl BigInt {
    fn new(mut digits: Vec<u8>, negative: bool) -> Self {
        trim_high_zeros!(digits);
        if digits.is_empty() {
            digits.push(0);
        }
        let negative = negative && digits != [0];
        BigInt { negative, digits }
    }
    pub fn zero() -> Self {
        POS_CACHE[0].clone()
    }
    pub fn one() -> Self {
        POS_CACHE[1].clone()
    }
    pub(crate) fn from_u64_uncached(mut val: u64, negative: bool) -> Self {
        let mut digits = Vec::with_capacity(20);
        loop {
            digits.push((val % RADIX as u64) as u8);
            val /= RADIX as u64;
            if val == 0 {
                break;
            }
        }
        BigInt::new(digits, negative)
    }
    fn value_of(val: u64, negative: bool) -> Self {
        if val <= MAX_CONSTANT as u64 {
            if negative {
                NEG_CACHE[val as usize].clone()
            } else {
                POS_CACHE[val as usize].clone()
            }
        } else {
            BigInt::from_u64_uncached(val, negative)
        }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u64, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::value_of(val.unsigned_abs() as u64, val < 0)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64);
impl_signed_to_big_int!(i8, i16, i32, isize, i64);

// 杂项
impl BigInt {
    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }
    pub fn is_negative(&self) -> bool {
        self.negative
    }
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }
    /// Digits of the magnitude, least significant first.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }
    pub fn num_digits(&self) -> usize {
        self.digits.len()
    }
    pub fn abs(&self) -> BigInt {
        BigInt { negative: false, digits: self.digits.clone() }
    }
    /// `-1`, `0` or `1` according to the sign.
    pub fn signum(&self) -> BigInt {
        if self.negative {
            NEG_CACHE[1].clone()
        } else if self.is_zero() {
            BigInt::zero()
        } else {
            BigInt::one()
        }
    }
}

// 实现打印
impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mag: String = self.digits
            .iter()
            .rev()
            .map(|d| DIGITS[*d as usize])
            .collect();
        f.pad_integral(!self.negative, "", &mag)
    }
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({})", self)
    }
}

// 实现解析
impl BigInt {
    /// Parses a decimal literal. Each `-` anywhere in the literal flips the sign,
    /// so `"--5"` is `5`. Anything else that is not an ASCII digit is rejected.
    pub fn parse(literal: &str) -> Result<BigInt, BigIntError> {
        let mut negative = false;
        let mut digits = Vec::with_capacity(literal.len());

        for (position, c) in literal.char_indices().rev() {
            if c == '-' {
                negative = !negative;
                continue;
            }
            match c.to_digit(RADIX as u32) {
                Some(d) => digits.push(d as u8),
                None => {
                    let kind = ParseErrorKind::InvalidDigit { found: c, position };
                    return Err(BigIntError::invalid_format(literal, kind));
                }
            }
        }

        if digits.is_empty() {
            return Err(BigIntError::invalid_format(literal, ParseErrorKind::Empty));
        }
        Ok(BigInt::new(digits, negative))
    }

    /// Parses an operand of an operator overload, where no error can be returned.
    fn operand(literal: &str) -> BigInt {
        match BigInt::parse(literal) {
            Ok(val) => val,
            Err(err) => panic!("{}", err),
        }
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::parse(s)
    }
}

impl TryFrom<&str> for BigInt {
    type Error = BigIntError;

    fn try_from(val: &str) -> Result<Self, Self::Error> {
        BigInt::parse(val)
    }
}

// 实现转换
impl BigInt {
    fn mag_to_u64(digits: &[u8]) -> Option<u64> {
        digits
            .iter()
            .rev()
            .try_fold(0_u64, |acc, d| {
                acc.checked_mul(RADIX as u64)?.checked_add(*d as u64)
            })
    }
    pub fn to_i64(&self) -> Result<i64, BigIntError> {
        let overflow = || BigIntError::Overflow { target: "i64" };
        let mag = BigInt::mag_to_u64(&self.digits).ok_or_else(overflow)? as i128;
        let val = if self.negative { -mag } else { mag };
        i64::try_from(val).map_err(|_| overflow())
    }
    pub fn to_u64(&self) -> Result<u64, BigIntError> {
        let overflow = || BigIntError::Overflow { target: "u64" };
        if self.negative {
            return Err(overflow());
        }
        BigInt::mag_to_u64(&self.digits).ok_or_else(overflow)
    }
}

impl TryFrom<&BigInt> for i64 {
    type Error = BigIntError;

    fn try_from(val: &BigInt) -> Result<Self, Self::Error> {
        val.to_i64()
    }
}

impl TryFrom<BigInt> for i64 {
    type Error = BigIntError;

    fn try_from(val: BigInt) -> Result<Self, Self::Error> {
        val.to_i64()
    }
}

impl TryFrom<&BigInt> for u64 {
    type Error = BigIntError;

    fn try_from(val: &BigInt) -> Result<Self, Self::Error> {
        val.to_u64()
    }
}

impl TryFrom<BigInt> for u64 {
    type Error = BigIntError;

    fn try_from(val: BigInt) -> Result<Self, Self::Error> {
        val.to_u64()
    }
}

// 实现大小比较
impl BigInt {
    /// Compares two canonical magnitudes: the longer one is larger, otherwise
    /// the first differing digit from the top decides.
    fn compare_mag(x: &[u8], y: &[u8]) -> Ordering {
        if x.len() != y.len() {
            return x.len().cmp(&y.len());
        }

        for (a, b) in x.iter().rev().zip(y.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }

        Ordering::Equal
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => BigInt::compare_mag(&self.digits, &other.digits),
            // both negative: the larger magnitude is the smaller value
            (true, true) => BigInt::compare_mag(&other.digits, &self.digits),
        }
    }
}

impl PartialEq<i64> for BigInt {
    fn eq(&self, other: &i64) -> bool {
        *self == BigInt::from(*other)
    }
}

impl PartialOrd<i64> for BigInt {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.cmp(&BigInt::from(*other)))
    }
}

impl PartialEq<BigInt> for i64 {
    fn eq(&self, other: &BigInt) -> bool {
        BigInt::from(*self) == *other
    }
}

impl PartialOrd<BigInt> for i64 {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(BigInt::from(*self).cmp(other))
    }
}

// Like the arithmetic operators, these panic when the literal is malformed.
impl PartialEq<str> for BigInt {
    fn eq(&self, other: &str) -> bool {
        *self == BigInt::operand(other)
    }
}

impl PartialOrd<str> for BigInt {
    fn partial_cmp(&self, other: &str) -> Option<Ordering> {
        Some(self.cmp(&BigInt::operand(other)))
    }
}

impl PartialEq<&str> for BigInt {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialOrd<&str> for BigInt {
    fn partial_cmp(&self, other: &&str) -> Option<Ordering> {
        <BigInt as PartialOrd<str>>::partial_cmp(self, *other)
    }
}

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        let BigInt { negative, digits } = self;
        BigInt::new(digits, !negative)
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现加法
impl BigInt {
    /// The longer operand is the accumulator: the shorter one is added into it
    /// digit by digit, then a single pass propagates the carries.
    fn add_mag(x: &[u8], y: &[u8]) -> Vec<u8> {
        let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };
        let mut result = long.to_vec();

        for (acc, d) in result.iter_mut().zip(short) {
            *acc += *d;
        }

        let mut carry = 0;
        for digit in result.iter_mut() {
            let sum = *digit + carry;
            carry = sum / RADIX;
            *digit = sum % RADIX;
        }

        if carry != 0 {
            result.push(carry);
        }

        result
    }

    /// `x + y` where each operand is given as a sign and a magnitude.
    /// Mixed signs fall through to a single magnitude subtraction.
    fn signed_sum(x_negative: bool, x: &[u8], y_negative: bool, y: &[u8]) -> BigInt {
        if x_negative == y_negative {
            return BigInt::new(BigInt::add_mag(x, y), x_negative);
        }

        match BigInt::compare_mag(x, y) {
            Ordering::Less => BigInt::new(BigInt::sub_mag(y, x), y_negative),
            Ordering::Equal => BigInt::zero(),
            Ordering::Greater => BigInt::new(BigInt::sub_mag(x, y), x_negative),
        }
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> Self::Output {
        BigInt::signed_sum(self.negative, &self.digits, rhs.negative, &rhs.digits)
    }
}

// 实现减法
impl BigInt {
    /// Requires `big >= little`.
    fn sub_mag(big: &[u8], little: &[u8]) -> Vec<u8> {
        let mut result = big.to_vec();

        for (i, d) in little.iter().enumerate() {
            if result[i] < *d {
                result[i] += RADIX;
                // borrow chain: zeros turn into 9 until a non-zero digit absorbs the borrow
                for above in result[i + 1..].iter_mut() {
                    if *above != 0 {
                        *above -= 1;
                        break;
                    }
                    *above = RADIX - 1;
                }
            }
            result[i] -= *d;
        }

        trim_high_zeros!(result);
        result
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> Self::Output {
        BigInt::signed_sum(self.negative, &self.digits, !rhs.negative, &rhs.digits)
    }
}

// 实现乘法
impl BigInt {
    /// Long multiplication: one partial product per digit of `y`, shifted by its
    /// position and accumulated with `add_mag`.
    fn mul_mag(x: &[u8], y: &[u8]) -> Vec<u8> {
        let mut total = vec![0];

        for (i, yd) in y.iter().enumerate() {
            if *yd == 0 {
                continue;
            }
            let mut partial = vec![0; i];
            partial.reserve(x.len() + 1);

            let mut carry = 0;
            for xd in x {
                let product = xd * yd + carry;
                partial.push(product % RADIX);
                carry = product / RADIX;
            }
            if carry != 0 {
                partial.push(carry);
            }

            total = BigInt::add_mag(&total, &partial);
        }

        total
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> Self::Output {
        let negative = self.negative != rhs.negative;
        BigInt::new(BigInt::mul_mag(&self.digits, &rhs.digits), negative)
    }
}

// 实现除法
impl BigInt {
    /// Truncating division: the quotient rounds toward zero and the remainder
    /// takes the sign of the dividend, as with native integers.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt), BigIntError> {
        if divisor.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        let quotient_negative = self.negative != divisor.negative;

        if let (Some(u), Some(v)) = (self.small_magnitude(), divisor.small_magnitude()) {
            trace!("dividing {} by {} natively", self, divisor);
            let quotient = BigInt::value_of(u / v, quotient_negative);
            let remainder = BigInt::value_of(u % v, self.negative);
            return Ok((quotient, remainder));
        }

        trace!(
            "long division of a {}-digit dividend by a {}-digit divisor",
            self.digits.len(),
            divisor.digits.len()
        );
        let (quotient, remainder) = BigInt::divide_long(&self.digits, &divisor.digits);
        Ok((BigInt::new(quotient, quotient_negative), BigInt::new(remainder, self.negative)))
    }
    pub fn checked_div(&self, divisor: &BigInt) -> Result<BigInt, BigIntError> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }
    pub fn checked_rem(&self, divisor: &BigInt) -> Result<BigInt, BigIntError> {
        self.div_rem(divisor).map(|(_, remainder)| remainder)
    }
    /// The magnitude as a native integer, if it is below the fast path threshold.
    fn small_magnitude(&self) -> Option<u64> {
        BigInt::mag_to_u64(&self.digits).filter(|mag| *mag < FAST_DIV_THRESHOLD)
    }
    /// Schoolbook long division on magnitudes. Each step brings down one digit of
    /// the dividend, picks the largest multiple of the divisor that fits from a
    /// precomputed table, and subtracts it.
    fn divide_long(dividend: &[u8], divisor: &[u8]) -> (Vec<u8>, Vec<u8>) {
        let multiples: Vec<Vec<u8>> = (0..RADIX)
            .map(|k| BigInt::mul_mag(divisor, &[k]))
            .collect();

        let mut quotient = vec![0; dividend.len()];
        let mut remainder = vec![0];

        for (i, d) in dividend.iter().enumerate().rev() {
            remainder.insert(0, *d);
            trim_high_zeros!(remainder);

            let q = multiples
                .iter()
                .rposition(|m| BigInt::compare_mag(m, &remainder) != Ordering::Greater)
                .unwrap_or(0);
            if q != 0 {
                remainder = BigInt::sub_mag(&remainder, &multiples[q]);
            }
            quotient[i] = q as u8;
        }

        (quotient, remainder)
    }
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: &BigInt) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{}", err),
        }
    }
}

// 实现求余
impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    fn rem(self, rhs: &BigInt) -> Self::Output {
        match self.checked_rem(rhs) {
            Ok(remainder) => remainder,
            Err(err) => panic!("{}", err),
        }
    }
}

// Every other operand combination goes through the `&BigInt op &BigInt` impls.
// String operands panic when they are not valid literals.
macro_rules! forward_binop {
    ($($imp: ident, $method: ident, $imp_assign: ident, $method_assign: ident);* $(;)?) => {
    $(
    impl $imp for BigInt {
        type Output = BigInt;

        fn $method(self, rhs: BigInt) -> Self::Output {
            (&self).$method(&rhs)
        }
    }

    impl $imp<&BigInt> for BigInt {
        type Output = BigInt;

        fn $method(self, rhs: &BigInt) -> Self::Output {
            (&self).$method(rhs)
        }
    }

    impl $imp<BigInt> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: BigInt) -> Self::Output {
            self.$method(&rhs)
        }
    }

    impl $imp<i64> for BigInt {
        type Output = BigInt;

        fn $method(self, rhs: i64) -> Self::Output {
            (&self).$method(&BigInt::from(rhs))
        }
    }

    impl $imp<i64> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: i64) -> Self::Output {
            self.$method(&BigInt::from(rhs))
        }
    }

    impl $imp<&str> for BigInt {
        type Output = BigInt;

        fn $method(self, rhs: &str) -> Self::Output {
            (&self).$method(&BigInt::operand(rhs))
        }
    }

    impl $imp<&str> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: &str) -> Self::Output {
            self.$method(&BigInt::operand(rhs))
        }
    }

    impl $imp_assign for BigInt {
        fn $method_assign(&mut self, rhs: BigInt) {
            *self = (&*self).$method(&rhs);
        }
    }

    impl $imp_assign<&BigInt> for BigInt {
        fn $method_assign(&mut self, rhs: &BigInt) {
            *self = (&*self).$method(rhs);
        }
    }

    impl $imp_assign<i64> for BigInt {
        fn $method_assign(&mut self, rhs: i64) {
            *self = (&*self).$method(&BigInt::from(rhs));
        }
    }

    impl $imp_assign<&str> for BigInt {
        fn $method_assign(&mut self, rhs: &str) {
            *self = (&*self).$method(&BigInt::operand(rhs));
        }
    }
    )*
    };
}

forward_binop! {
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign;
    Mul, mul, MulAssign, mul_assign;
    Div, div, DivAssign, div_assign;
    Rem, rem, RemAssign, rem_assign;
}

#[cfg(test)]
fn big(literal: &str) -> BigInt {
    literal.parse().unwrap()
}

#[cfg(test)]
fn big_err(literal: &str) -> BigIntError {
    BigInt::parse(literal).unwrap_err()
}

#[test]
fn test_from() {
    let big_int = BigInt::from(12_i8);
    assert_eq!(big_int.digits(), &[2, 1]);
    assert!(!big_int.is_negative());

    let big_int = BigInt::from(-100_i16);
    assert_eq!(big_int.digits(), &[0, 0, 1]);
    assert!(big_int.is_negative());

    let big_int = BigInt::from(0_i64);
    assert_eq!(big_int.digits(), &[0]);
    assert!(!big_int.is_negative());

    let big_int = BigInt::from(i64::MIN);
    assert_eq!(big_int.to_string(), "-9223372036854775808");

    let big_int = BigInt::from(u64::MAX);
    assert_eq!(big_int.to_string(), "18446744073709551615");

    assert_eq!(BigInt::default(), BigInt::zero());
}

#[test]
fn test_parse() {
    assert_eq!(big("12345").digits(), &[5, 4, 3, 2, 1]);
    assert_eq!(big("-42"), BigInt::from(-42_i64));
    assert_eq!(big("--42"), BigInt::from(42_i64));
    assert_eq!(big("4-2"), BigInt::from(-42_i64));

    // leading zeros are stripped, so length still tracks magnitude
    let padded = big("0005");
    assert_eq!(padded.digits(), &[5]);
    assert!(padded < big("10"));

    let zero = big("-0000");
    assert!(zero.is_zero());
    assert!(!zero.is_negative());
    assert_eq!(zero.to_string(), "0");
}

#[test]
fn test_parse_error() {
    match big_err("12a4") {
        BigIntError::InvalidFormat { literal, kind } => {
            assert_eq!(literal, "12a4");
            assert_eq!(kind, ParseErrorKind::InvalidDigit { found: 'a', position: 2 });
        }
        err => panic!("unexpected error: {}", err),
    }
    match big_err("+5") {
        BigIntError::InvalidFormat { kind, .. } => {
            assert_eq!(kind, ParseErrorKind::InvalidDigit { found: '+', position: 0 });
        }
        err => panic!("unexpected error: {}", err),
    }
    for literal in ["", "-", "--"] {
        match big_err(literal) {
            BigIntError::InvalidFormat { kind, .. } => assert_eq!(kind, ParseErrorKind::Empty),
            err => panic!("unexpected error: {}", err),
        }
    }
}

#[test]
fn test_add() {
    assert_eq!(
        big("123456789123456789") + big("876543210876543211"),
        big("1000000000000000000")
    );
    assert_eq!(big("1") + big("99999999999999999999"), big("100000000000000000000"));
    assert_eq!(BigInt::from(-5_i64) + BigInt::from(5_i64), BigInt::zero());
    assert_eq!(BigInt::from(-5_i64) + BigInt::from(3_i64), BigInt::from(-2_i64));
    assert_eq!(BigInt::from(-5_i64) + BigInt::from(-7_i64), BigInt::from(-12_i64));
    assert_eq!(BigInt::from(3_i64) + BigInt::from(-5_i64), BigInt::from(-2_i64));

    let mut acc = big("999");
    acc += 1_i64;
    assert_eq!(acc, 1000_i64);
    acc += "-1000";
    assert!(acc.is_zero());
    acc += &big("7");
    assert_eq!(acc, 7_i64);
}

#[test]
fn test_sub() {
    assert_eq!(BigInt::from(5_i64) - BigInt::from(8_i64), BigInt::from(-3_i64));
    assert_eq!(BigInt::from(-5_i64) - BigInt::from(-8_i64), BigInt::from(3_i64));
    assert_eq!(BigInt::from(-8_i64) - BigInt::from(-5_i64), BigInt::from(-3_i64));
    assert_eq!(BigInt::from(-8_i64) - BigInt::from(5_i64), BigInt::from(-13_i64));
    assert_eq!(BigInt::from(8_i64) - BigInt::from(-5_i64), BigInt::from(13_i64));

    // borrow chains through runs of zeros
    assert_eq!(big("1000") - big("1"), big("999"));
    assert_eq!(big("100000") - big("99999"), big("1"));
    assert_eq!(big("10203") - big("9"), big("10194"));
    assert_eq!(
        big("100000000000000000000000000000") - big("1"),
        big("99999999999999999999999999999")
    );
    assert_eq!(
        big("123456789012345678901234567890") - big("987654321098765432109876543210"),
        big("-864197532086419753208641975320")
    );

    let zero = BigInt::zero() - BigInt::zero();
    assert!(!zero.is_negative());
    let zero = BigInt::from(-3_i64) - BigInt::from(-3_i64);
    assert!(!zero.is_negative());
    assert_eq!(zero.to_string(), "0");

    let mut acc = big("10");
    acc -= "25";
    assert_eq!(acc, -15_i64);
}

#[test]
fn test_mul() {
    assert_eq!(big("999999999999999999") * BigInt::from(2_i64), big("1999999999999999998"));
    assert_eq!(
        big("99999999999999999999") * big("99999999999999999999"),
        big("9999999999999999999800000000000000000001")
    );
    assert_eq!(BigInt::from(-5_i64) * BigInt::from(-3_i64), BigInt::from(15_i64));
    assert_eq!(BigInt::from(-5_i64) * BigInt::from(3_i64), BigInt::from(-15_i64));

    let zero = BigInt::from(-5_i64) * BigInt::zero();
    assert!(zero.is_zero());
    assert!(!zero.is_negative());

    let mut acc = big("12");
    acc *= -3_i64;
    assert_eq!(acc, -36_i64);
    acc *= "-10";
    assert_eq!(acc, 360_i64);
}

#[test]
fn test_div() {
    // native path
    assert_eq!(big("1000000000000000000") / big("1000000000"), big("1000000000"));
    assert_eq!(BigInt::from(-7_i64) / BigInt::from(2_i64), BigInt::from(-3_i64));
    assert_eq!(BigInt::from(7_i64) / BigInt::from(-2_i64), BigInt::from(-3_i64));
    assert_eq!(BigInt::from(-7_i64) / BigInt::from(-2_i64), BigInt::from(3_i64));
    assert_eq!(BigInt::from(3_i64) / BigInt::from(7_i64), BigInt::zero());
    // long division
    assert_eq!(
        big("100000000000000000000000000000") / big("1000"),
        big("100000000000000000000000000")
    );
    assert_eq!(
        big("124871287894782164876238905710532895792830741278950327951074309571023759712087")
            / big("5678987654678976543587654678976546789"),
        big("21988300642263136800048566126805476041042")
    );
    assert_eq!(
        big("-98765432109876543210987654321") / BigInt::from(123456789_i64),
        big("-800000007370000067076")
    );
    assert_eq!(
        big("55340232221128654848") / BigInt::from(-7_i64),
        big("-7905747460161236406")
    );
    assert_eq!(big("5") / big("100000000000000000000000"), BigInt::zero());

    let mut acc = big("1000000000000000000000");
    acc /= "1000";
    assert_eq!(acc, big("1000000000000000000"));
}

#[test]
fn test_div_by_zero() {
    assert!(matches!(
        BigInt::from(10_i64).checked_div(&BigInt::zero()),
        Err(BigIntError::DivisionByZero)
    ));
    assert!(matches!(
        big("123456789012345678901234567890").checked_div(&BigInt::zero()),
        Err(BigIntError::DivisionByZero)
    ));
    assert!(matches!(
        BigInt::from(10_i64).checked_rem(&big("-0")),
        Err(BigIntError::DivisionByZero)
    ));
}

#[test]
#[should_panic(expected = "attempt to divide by zero")]
fn test_div_operator_by_zero() {
    let _ = big("123456789012345678901234567890") / 0_i64;
}

#[test]
#[should_panic(expected = "invalid decimal literal")]
fn test_operator_with_malformed_literal() {
    let _ = big("12") + "1x";
}

#[test]
fn test_mod() {
    assert_eq!(big("12") % big("8"), big("4"));
    assert_eq!(big("10000000000000000") % big("10"), BigInt::zero());
    assert_eq!(BigInt::from(-7_i64) % BigInt::from(2_i64), BigInt::from(-1_i64));
    assert_eq!(BigInt::from(7_i64) % BigInt::from(-2_i64), BigInt::from(1_i64));
    assert_eq!(
        big("124871287894782164876238905710532895792830741278950327951074309571023759712087")
            % big("5678987654678976543587654678976546789"),
        big("3949780901563186547003821051762397949")
    );
    assert_eq!(
        big("-98765432109876543210987654321") % BigInt::from(123456789_i64),
        BigInt::from(-75357_i64)
    );
    assert_eq!(big("55340232221128654848") % BigInt::from(-7_i64), BigInt::from(6_i64));
}

#[test]
fn test_cmp() {
    assert!(BigInt::from(-7_i64) < BigInt::from(3_i64));
    assert!(!(BigInt::from(-7_i64) < BigInt::from(-10_i64)));
    assert!(BigInt::from(-10_i64) < BigInt::from(-7_i64));
    assert!(big("-100") < big("-99"));
    assert!(big("99") < big("100"));
    assert!(big("123") <= big("123"));
    assert!(big("123") >= big("123"));
    assert!(big("124") > big("123"));
    assert!(big("123") != big("-123"));

    assert_eq!(big("9223372036854775807"), i64::MAX);
    assert!(big("9223372036854775808") > i64::MAX);
    assert!(i64::MIN < big("-9223372036854775807"));
    assert!(big("42") == "42");
    assert!(big("42") < "43");
    assert!(big("42") != "-42");
    assert_eq!(big("42").partial_cmp("0042"), Some(Ordering::Equal));
}

#[test]
#[should_panic(expected = "invalid decimal literal \"4x2\"")]
fn test_eq_with_malformed_literal() {
    let _ = big("42") != "4x2";
}

#[test]
#[should_panic(expected = "invalid decimal literal")]
fn test_cmp_with_malformed_literal() {
    let _ = big("42") < "4x2";
}

#[test]
fn test_to_i64() {
    assert_eq!(big("123456789110").to_i64().unwrap(), 123456789110);
    assert_eq!(big("-9223372036854775808").to_i64().unwrap(), i64::MIN);
    assert!(matches!(
        big("9223372036854775808").to_i64(),
        Err(BigIntError::Overflow { target: "i64" })
    ));
    assert!(matches!(
        big("-99999999999999999999").to_i64(),
        Err(BigIntError::Overflow { .. })
    ));
    assert_eq!(big("18446744073709551615").to_u64().unwrap(), u64::MAX);
    assert!(matches!(big("-1").to_u64(), Err(BigIntError::Overflow { target: "u64" })));
    assert_eq!(i64::try_from(&big("-42")).unwrap(), -42);
    assert_eq!(u64::try_from(big("18446744073709551615")).unwrap(), u64::MAX);
    assert!(matches!(u64::try_from(big("18446744073709551616")), Err(BigIntError::Overflow { .. })));
    assert_eq!(BigInt::try_from("-0042").unwrap(), -42_i64);
    assert!(matches!(BigInt::try_from("4 2"), Err(BigIntError::InvalidFormat { .. })));
}

#[test]
fn test_to_string() {
    let literal = "12345678909876523784950683472613487560983287654321";
    assert_eq!(big(literal).to_string(), literal);
    assert_eq!(big("-00120").to_string(), "-120");
    assert_eq!(format!("{:>6}", big("-42")), "   -42");
    assert_eq!(format!("{:+}", big("42")), "+42");
    assert_eq!(format!("{:05}", big("-42")), "-0042");
    assert_eq!(format!("{:?}", big("-42")), "BigInt(-42)");
}

#[test]
fn test_misc() {
    assert_eq!(big("-123").abs(), big("123"));
    assert_eq!(big("-123").signum(), -1_i64);
    assert_eq!(big("0").signum(), 0_i64);
    assert_eq!(big("77").signum(), 1_i64);
    assert_eq!(-big("5"), big("-5"));
    assert!(!(-BigInt::zero()).is_negative());
    assert_eq!(big("100").num_digits(), 3);
    assert!(big("1").is_positive());
    assert!(!BigInt::zero().is_positive());
}
