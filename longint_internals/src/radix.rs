//! Radix related utilities for the string conversions

use crate::{error::FormatError, DDigit, Digit, USIZE_BITS};

/// The largest power of a radix that a single output group is allowed to
/// reach. Every group value is exact in a double.
pub const GROUP_BOUND: Digit = 1 << 20;

/// Number of characters per window when parsing strings
pub const PARSE_WINDOW: usize = 8;

/// Reciprocal binary logarithms of the numbers 2..=36 rounded up and in u16p15
/// fixed point format
pub const INV_LB_I1F15: [u16; 37] = [
    0, 0, 32768, 20675, 16384, 14113, 12677, 11673, 10923, 10338, 9865, 9473, 9141, 8856, 8607,
    8388, 8192, 8017, 7859, 7714, 7582, 7461, 7349, 7244, 7147, 7057, 6972, 6892, 6817, 6746, 6678,
    6615, 6554, 6496, 6441, 6389, 6339,
];

/// Returns `InvalidRadix` if `radix` is not in the range 2..=36
#[inline]
pub const fn check_radix(radix: u8) -> Result<(), FormatError> {
    if radix < 2 || radix > 36 {
        Err(FormatError::InvalidRadix)
    } else {
        Ok(())
    }
}

/// Returns the numerical value of the ASCII character `c` in `radix`, or
/// `None` if it is not a digit of that radix. Both cases of letters are
/// accepted.
#[inline]
pub const fn digit_value(c: u8, radix: u8) -> Option<u8> {
    let v = match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'z' => c - b'a' + 10,
        b'A'..=b'Z' => c - b'A' + 10,
        _ => return None,
    };
    if v < radix {
        Some(v)
    } else {
        None
    }
}

/// Checks everything about `src` except for `Overflow`. A single leading `-`
/// is allowed, and the returned `bool` is if it was present. The first
/// offending character decides the error.
pub const fn verify_digits(src: &[u8], radix: u8) -> Result<bool, FormatError> {
    if let Err(e) = check_radix(radix) {
        return Err(e)
    }
    let negative = !src.is_empty() && (src[0] == b'-');
    let start = if negative { 1 } else { 0 };
    if src.len() <= start {
        return Err(FormatError::Empty)
    }
    let mut i = start;
    while i < src.len() {
        let b = src[i];
        if b == b'-' {
            return Err(FormatError::InteriorSign)
        }
        if digit_value(b, radix).is_none() {
            return Err(FormatError::InvalidChar)
        }
        i += 1;
    }
    Ok(negative)
}

/// Returns the ASCII character for the digit `d < 36`
#[inline]
pub const fn digit_char(d: u8, upper: bool) -> u8 {
    if d < 10 {
        b'0' + d
    } else if upper {
        b'A' + (d - 10)
    } else {
        b'a' + (d - 10)
    }
}

/// Returns `(k, radix^k)` for the largest `k` such that `radix^k` does not
/// exceed `GROUP_BOUND`. For radix 10 this is `(6, 1_000_000)`. `radix` is
/// assumed to be valid.
pub const fn output_group(radix: u8) -> (usize, Digit) {
    let mut k = 1;
    let mut pow = radix as Digit;
    loop {
        let next = pow * (radix as Digit);
        if next > GROUP_BOUND {
            return (k, pow)
        }
        pow = next;
        k += 1;
    }
}

/// Returns `radix^len` for a parsing window of `len <= PARSE_WINDOW`
/// characters. The result always fits in a `DDigit`.
pub const fn window_power(radix: u8, len: usize) -> DDigit {
    let mut pow: DDigit = 1;
    let mut i = 0;
    while i < len {
        pow *= radix as DDigit;
        i += 1;
    }
    pow
}

/// This takes an input of significant bits and gives an upper bound for the
/// number of characters in the given `radix` needed to represent those bits.
pub const fn chars_upper_bound(significant_bits: usize, radix: u8) -> Result<usize, FormatError> {
    if let Err(e) = check_radix(radix) {
        return Err(e)
    }
    if let Some(tmp) = (INV_LB_I1F15[radix as usize] as u128)
        .checked_mul((significant_bits as u128).wrapping_add(1))
    {
        let estimate = (tmp >> 15).wrapping_add(1);
        if (estimate & (!((1u128 << (USIZE_BITS - 1)) - 1))) == 0 {
            return Ok(estimate as usize)
        }
    }
    Err(FormatError::Overflow)
}
