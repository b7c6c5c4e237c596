pub const RADIX: u8 = 10;

pub const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

pub const MAX_CONSTANT: usize = 16;

/// Both magnitudes must stay below this for division to use native `i64` arithmetic.
pub const FAST_DIV_THRESHOLD: u64 = i64::MAX as u64;
