use core::fmt;

use longint_core::longint_internals::*;

use crate::Integer;

/// An unsigned 64 bit word layered on [Integer].
///
/// The wrapped value always satisfies `0 <= value < 2^64`. Every constructor
/// and every operation reduces its result modulo 2^64, which is the same as
/// `((v rem 2^64) + 2^64) rem 2^64` for any integer `v`.
///
/// ```
/// use longint::{Integer, Word64};
///
/// let x = Word64::new(Integer::from_i32(-1));
/// assert_eq!(x.to_u64(), u64::MAX);
/// assert_eq!(x.add(&Word64::from_u32(2)).to_u64(), 1);
/// assert_eq!(Word64::from_u32(1).shl(63).to_u64(), 1 << 63);
/// assert_eq!(Word64::from_u32(1).shl(64).to_u64(), 0);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Word64(Integer);

/// # Construction and access
impl Word64 {
    pub const ZERO: Word64 = Word64(Integer::ZERO);
    pub const MAX: Word64 = Word64(Integer::from_u64(u64::MAX));

    /// Reduces `x` modulo 2^64
    #[must_use]
    pub fn new(x: Integer) -> Self {
        if !x.is_negative() && (x.limbs().len() <= 2) {
            Word64(x)
        } else {
            let (low, high) = x.to_limb_pair();
            Word64::from_parts(low, high)
        }
    }

    /// Creates a `Word64` from its little endian limbs
    #[inline]
    #[must_use]
    pub const fn from_parts(low: u32, high: u32) -> Self {
        Word64(Integer::from_u64(((high as u64) << BITS) | (low as u64)))
    }

    #[inline]
    #[must_use]
    pub const fn from_u32(x: u32) -> Self {
        Word64(Integer::from_u32(x))
    }

    #[inline]
    #[must_use]
    pub const fn from_u64(x: u64) -> Self {
        Word64(Integer::from_u64(x))
    }

    /// Returns the least significant 32 bits
    #[inline]
    #[must_use]
    pub fn to_u32(&self) -> u32 {
        self.0.to_u32()
    }

    #[inline]
    #[must_use]
    pub fn to_u64(&self) -> u64 {
        self.0.to_u64()
    }

    /// Converts to the nearest double
    #[inline]
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64()
    }

    #[inline]
    #[must_use]
    pub fn as_integer(&self) -> &Integer {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn into_integer(self) -> Integer {
        self.0
    }

    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

/// # Arithmetic modulo 2^64
impl Word64 {
    #[must_use]
    pub fn add(&self, rhs: &Word64) -> Word64 {
        Word64::new(self.0.add(&rhs.0))
    }

    #[must_use]
    pub fn sub(&self, rhs: &Word64) -> Word64 {
        Word64::new(self.0.sub(&rhs.0))
    }

    #[must_use]
    pub fn mul(&self, rhs: &Word64) -> Word64 {
        Word64::new(self.0.mul(&rhs.0))
    }

    /// Unsigned quotient
    pub fn quot(&self, rhs: &Word64) -> Result<Word64, DivisionByZero> {
        Ok(Word64(self.0.quot(&rhs.0)?))
    }

    /// Unsigned remainder
    pub fn rem(&self, rhs: &Word64) -> Result<Word64, DivisionByZero> {
        Ok(Word64(self.0.rem(&rhs.0)?))
    }

    #[must_use]
    pub fn and(&self, rhs: &Word64) -> Word64 {
        Word64(self.0.and(&rhs.0))
    }

    #[must_use]
    pub fn or(&self, rhs: &Word64) -> Word64 {
        Word64(self.0.or(&rhs.0))
    }

    #[must_use]
    pub fn xor(&self, rhs: &Word64) -> Word64 {
        Word64(self.0.xor(&rhs.0))
    }

    /// Exclusive or with all ones
    #[must_use]
    pub fn not(&self) -> Word64 {
        self.xor(&Word64::MAX)
    }

    /// Shift left with the bits shifted past bit 63 discarded. Shifts of 64
    /// or more produce zero.
    #[must_use]
    pub fn shl(&self, s: usize) -> Word64 {
        if s >= 64 {
            Word64::ZERO
        } else {
            Word64::new(self.0.shl(s))
        }
    }

    /// Logical shift right. Shifts of 64 or more produce zero.
    #[must_use]
    pub fn shr(&self, s: usize) -> Word64 {
        Word64(self.0.shr(s))
    }
}

macro_rules! word64_binop {
    ($($op:ident $f:ident => $inherent:ident);*;) => {
        $(
            impl core::ops::$op for Word64 {
                type Output = Word64;

                #[inline]
                fn $f(self, rhs: Self) -> Word64 {
                    Word64::$inherent(&self, &rhs)
                }
            }

            impl<'a, 'b> core::ops::$op<&'b Word64> for &'a Word64 {
                type Output = Word64;

                #[inline]
                fn $f(self, rhs: &'b Word64) -> Word64 {
                    Word64::$inherent(self, rhs)
                }
            }
        )*
    };
}

word64_binop!(
    Add add => add;
    Sub sub => sub;
    Mul mul => mul;
    BitAnd bitand => and;
    BitOr bitor => or;
    BitXor bitxor => xor;
);

impl core::ops::Not for Word64 {
    type Output = Word64;

    #[inline]
    fn not(self) -> Word64 {
        Word64::not(&self)
    }
}

impl From<u32> for Word64 {
    fn from(x: u32) -> Self {
        Self::from_u32(x)
    }
}

impl From<u64> for Word64 {
    fn from(x: u64) -> Self {
        Self::from_u64(x)
    }
}

impl From<Word64> for Integer {
    fn from(x: Word64) -> Self {
        x.0
    }
}

impl fmt::Display for Word64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for Word64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for Word64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for Word64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}
