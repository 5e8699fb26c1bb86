use longint_internals::*;

use crate::Int64;

/// # Summation
impl Int64 {
    /// Wrapping addition, with the carry between the limbs propagated
    #[inline]
    #[must_use]
    pub const fn add(self, rhs: Self) -> Self {
        let (low, carry) = widen_add(self.low_bits_unsigned(), rhs.low_bits_unsigned(), 0);
        let (high, _) = widen_add(self.high_bits_unsigned(), rhs.high_bits_unsigned(), carry);
        Self::from_bits(low, high)
    }

    /// Wrapping subtraction, defined as `self + (-rhs)`
    #[inline]
    #[must_use]
    pub const fn sub(self, rhs: Self) -> Self {
        self.add(rhs.neg())
    }

    /// Wrapping negation. `MIN_VALUE` has no positive counterpart and is its
    /// own negation.
    #[inline]
    #[must_use]
    pub const fn neg(self) -> Self {
        if self.is_min() {
            Self::MIN_VALUE
        } else {
            self.not().add(Self::ONE)
        }
    }

    /// Wrapping absolute value, `MIN_VALUE.abs() == MIN_VALUE`
    #[inline]
    #[must_use]
    pub const fn abs(self) -> Self {
        if self.is_negative() {
            self.neg()
        } else {
            self
        }
    }

    /// Returns -1, 0, or 1 depending on the sign of `self`
    #[inline]
    #[must_use]
    pub const fn signum(self) -> Self {
        if self.is_negative() {
            Self::NEG_ONE
        } else if self.is_zero() {
            Self::ZERO
        } else {
            Self::ONE
        }
    }
}
