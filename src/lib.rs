//! Decimal Big Int \
//! This crate provides:
//! - [`BigInt`]: Arbitrary-precision signed integers stored as decimal digits, with the usual
//!   arithmetic and comparison operators against other `BigInt`s, `i64`s and decimal literals.
//! - [`io::read_token`]: whitespace-delimited reading of literals from a text source.
//!
//! Fallible operations report a [`BigIntError`]. The operator forms panic where the native
//! integer operators would, e.g. on division by zero.

mod big_int;
mod big_int_cache;
mod big_int_constants;
mod error;
pub mod io;
mod traits;

pub use big_int::BigInt;
pub use error::{BigIntError, ParseErrorKind};

#[cfg(test)]
mod tests {
    use crate::BigInt;

    #[test]
    fn it_works() {
        let a: BigInt = "10000000000000".parse().unwrap();
        let b: BigInt = "900000000000".parse().unwrap();
        println!("a = {}", a);
        println!("a + b = {}", &a + &b);
        println!("a - b = {}", &a - &b);
        println!("a * b = {}", &a * &b);
        println!("a / b = {}", &a / &b);
        println!("a % b = {}", &a % &b);
        assert_eq!(&a / &b, 11_i64);
        assert_eq!(&a % &b, 100000000000_i64);
    }
}
