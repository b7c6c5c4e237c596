use lazy_static::*;

use crate::BigInt;
use crate::big_int_constants::*;

lazy_static! {
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] = build_cache(false);
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] = build_cache(true);
}

fn build_cache(negative: bool) -> [BigInt; MAX_CONSTANT + 1] {
    std::array::from_fn(|val| BigInt::from_u64_uncached(val as u64, negative))
}

#[test]
fn test_cache() {
    assert_eq!(POS_CACHE[0], NEG_CACHE[0]);
    assert!(!NEG_CACHE[0].is_negative());
    for val in 1..=MAX_CONSTANT {
        assert_eq!(POS_CACHE[val].to_string(), val.to_string());
        assert_eq!(NEG_CACHE[val].to_string(), format!("-{}", val));
    }
}
