use longint_internals::*;

use crate::Int64;

/// # Bitwise
///
/// Shift amounts are masked to `0..64` like the `wrapping_sh*` functions of
/// Rust's primitives.
impl Int64 {
    #[inline]
    #[must_use]
    pub const fn not(self) -> Self {
        let (low, high) = self.to_bits();
        Self::from_bits(!low, !high)
    }

    #[inline]
    #[must_use]
    pub const fn and(self, rhs: Self) -> Self {
        let (l0, h0) = self.to_bits();
        let (l1, h1) = rhs.to_bits();
        Self::from_bits(l0 & l1, h0 & h1)
    }

    #[inline]
    #[must_use]
    pub const fn or(self, rhs: Self) -> Self {
        let (l0, h0) = self.to_bits();
        let (l1, h1) = rhs.to_bits();
        Self::from_bits(l0 | l1, h0 | h1)
    }

    #[inline]
    #[must_use]
    pub const fn xor(self, rhs: Self) -> Self {
        let (l0, h0) = self.to_bits();
        let (l1, h1) = rhs.to_bits();
        Self::from_bits(l0 ^ l1, h0 ^ h1)
    }

    /// Shift left
    #[must_use]
    pub const fn shl(self, s: u32) -> Self {
        let s = s & 63;
        let (low, high) = self.to_bits();
        if s == 0 {
            self
        } else if s < (BITS as u32) {
            Self::from_bits(low << s, (high << s) | (low >> ((BITS as u32) - s)))
        } else {
            Self::from_bits(0, low << (s - (BITS as u32)))
        }
    }

    /// Arithmetic shift right, the vacated bits are copies of the sign bit
    #[must_use]
    pub const fn shr(self, s: u32) -> Self {
        let s = s & 63;
        let (low, high) = self.to_bits();
        if s == 0 {
            self
        } else if s < (BITS as u32) {
            Self::from_bits(
                (low >> s) | (high << ((BITS as u32) - s)),
                ((high as IDigit) >> s) as Digit,
            )
        } else {
            Self::from_bits(((high as IDigit) >> (s - (BITS as u32))) as Digit, sign_of(high))
        }
    }

    /// Logical shift right, the vacated bits are zeroed
    #[must_use]
    pub const fn shr_u(self, s: u32) -> Self {
        let s = s & 63;
        let (low, high) = self.to_bits();
        if s == 0 {
            self
        } else if s < (BITS as u32) {
            Self::from_bits((low >> s) | (high << ((BITS as u32) - s)), high >> s)
        } else {
            Self::from_bits(high >> (s - (BITS as u32)), 0)
        }
    }
}
