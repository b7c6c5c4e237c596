//! Reading [`BigInt`]s from text sources.
//!
//! Writing needs nothing extra: `BigInt` implements `Display`, so `write!` works on
//! any `fmt::Write` or `io::Write` sink.

use std::io::{BufRead, ErrorKind};

use crate::{BigInt, BigIntError, ParseErrorKind};

/// Skips leading whitespace and returns the next whitespace-delimited token.
/// The whitespace that ends the token is left in the reader.
pub fn read_token<R: BufRead + ?Sized>(reader: &mut R) -> Result<String, BigIntError> {
    let mut token = Vec::new();

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        };
        if buf.is_empty() {
            break;
        }

        let mut consumed = 0;
        let mut done = false;
        for b in buf {
            if b.is_ascii_whitespace() {
                if !token.is_empty() {
                    done = true;
                    break;
                }
            } else {
                token.push(*b);
            }
            consumed += 1;
        }

        reader.consume(consumed);
        if done {
            break;
        }
    }

    if token.is_empty() {
        return Err(BigIntError::UnexpectedEof);
    }
    String::from_utf8(token).map_err(|err| {
        let kind = ParseErrorKind::InvalidUtf8 { position: err.utf8_error().valid_up_to() };
        BigIntError::invalid_format(&String::from_utf8_lossy(err.as_bytes()), kind)
    })
}

impl BigInt {
    /// Reads one whitespace-delimited token and parses it as a decimal literal.
    pub fn read_from<R: BufRead + ?Sized>(reader: &mut R) -> Result<BigInt, BigIntError> {
        BigInt::parse(&read_token(reader)?)
    }
}
