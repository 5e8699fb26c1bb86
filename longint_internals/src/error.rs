//! Error types shared by all the `longint` crates

use core::fmt;

/// A string conversion error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormatError {
    /// The input is empty, or consists of only a sign indicator
    Empty,
    /// A radix is not in the range `2..=36`
    InvalidRadix,
    /// There is a character that is not a digit of the radix
    InvalidChar,
    /// A `-` was found somewhere other than the first character
    InteriorSign,
    /// The value represented by the string cannot fit in the fixed width
    /// target type, or a destination buffer is too short. Arbitrary precision
    /// parsing never returns this.
    Overflow,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FormatError::Empty => "number format error: empty string",
            FormatError::InvalidRadix => "radix out of range",
            FormatError::InvalidChar => "number format error: invalid digit",
            FormatError::InteriorSign => "number format error: interior \"-\" character",
            FormatError::Overflow => "number format error: value out of range",
        };
        f.write_str(s)
    }
}

/// Returned by every quotient or remainder operation given a zero divisor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DivisionByZero;

impl fmt::Display for DivisionByZero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("division by zero")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FormatError {}

#[cfg(feature = "std")]
impl std::error::Error for DivisionByZero {}
