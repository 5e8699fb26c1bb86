use core::cmp::Ordering;

use crate::Int64;

/// # Comparison
impl Int64 {
    /// `const` equality
    #[inline]
    #[must_use]
    pub const fn const_eq(self, rhs: Self) -> bool {
        let (l0, h0) = self.to_bits();
        let (l1, h1) = rhs.to_bits();
        (l0 == l1) && (h0 == h1)
    }

    /// Signed comparison. Equal values compare equal, values with differing
    /// signs are ordered by their sign, and the remaining cases are decided by
    /// the sign of `self - rhs` (which cannot overflow when the signs are the
    /// same).
    #[must_use]
    pub const fn const_cmp(self, rhs: Self) -> Ordering {
        if self.const_eq(rhs) {
            return Ordering::Equal
        }
        let lhs_neg = self.is_negative();
        let rhs_neg = rhs.is_negative();
        if lhs_neg && !rhs_neg {
            return Ordering::Less
        }
        if !lhs_neg && rhs_neg {
            return Ordering::Greater
        }
        if self.sub(rhs).is_negative() {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }

    /// Unsigned less-than
    #[inline]
    #[must_use]
    pub const fn ult(self, rhs: Self) -> bool {
        self.to_u64() < rhs.to_u64()
    }

    /// Signed less-than
    #[inline]
    #[must_use]
    pub const fn ilt(self, rhs: Self) -> bool {
        matches!(self.const_cmp(rhs), Ordering::Less)
    }

    /// Signed greater-than
    #[inline]
    #[must_use]
    pub const fn igt(self, rhs: Self) -> bool {
        matches!(self.const_cmp(rhs), Ordering::Greater)
    }

    /// Signed greater-than-or-equal
    #[inline]
    #[must_use]
    pub const fn ige(self, rhs: Self) -> bool {
        !self.ilt(rhs)
    }
}
