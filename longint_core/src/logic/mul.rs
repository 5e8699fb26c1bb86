use longint_internals::*;

use crate::Int64;

/// # Multiplication
impl Int64 {
    /// Wrapping multiplication
    #[must_use]
    pub const fn mul(self, rhs: Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Self::ZERO
        }
        // `MIN_VALUE` is the only value that cannot be negated, and its product
        // only depends on the parity of the other operand
        if self.is_min() {
            return if rhs.is_odd() {
                Self::MIN_VALUE
            } else {
                Self::ZERO
            }
        } else if rhs.is_min() {
            return if self.is_odd() {
                Self::MIN_VALUE
            } else {
                Self::ZERO
            }
        }

        if self.is_negative() {
            if rhs.is_negative() {
                return self.neg().mul(rhs.neg())
            } else {
                return self.neg().mul(rhs).neg()
            }
        } else if rhs.is_negative() {
            return self.mul(rhs.neg()).neg()
        }

        // both are now nonnegative
        if self.ult(Self::TWO_PWR_24) && rhs.ult(Self::TWO_PWR_24) {
            let tmp = (self.low_bits_unsigned() as DDigit) * (rhs.low_bits_unsigned() as DDigit);
            return Self::from_u64(tmp)
        }

        //                   [rhs_hi]  [rhs_lo]
        //                   [lhs_hi]  [lhs_lo]
        //                 X___________________
        //                   [------tmp0------]
        //         [------tmp1------]
        //         [------tmp2------]
        //  (tmp3 is entirely above the 64 bit boundary)
        let (lhs_lo, lhs_hi) = self.to_bits();
        let (rhs_lo, rhs_hi) = rhs.to_bits();
        let (low, carry) = widen_mul_add(lhs_lo, rhs_lo, 0);
        let high = carry
            .wrapping_add(lhs_hi.wrapping_mul(rhs_lo))
            .wrapping_add(lhs_lo.wrapping_mul(rhs_hi));
        Self::from_bits(low, high)
    }
}
