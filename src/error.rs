use std::io;

#[derive(Debug, thiserror::Error)]
pub enum BigIntError {
    #[error("invalid decimal literal {literal:?}: {kind}")]
    InvalidFormat { literal: String, kind: ParseErrorKind },
    #[error("attempt to divide by zero")]
    DivisionByZero,
    #[error("value does not fit in {target}")]
    Overflow { target: &'static str },
    #[error("radix {0} is not supported, only base 10 is")]
    UnsupportedRadix(u32),
    #[error("reached end of input before any token")]
    UnexpectedEof,
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Why a decimal literal was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("no digits")]
    Empty,
    #[error("unexpected character {found:?} at byte {position}")]
    InvalidDigit { found: char, position: usize },
    #[error("invalid UTF-8 at byte {position}")]
    InvalidUtf8 { position: usize },
}

impl BigIntError {
    pub(crate) fn invalid_format(literal: &str, kind: ParseErrorKind) -> Self {
        BigIntError::InvalidFormat { literal: literal.to_string(), kind }
    }
}
