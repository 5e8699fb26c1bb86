use longint_core::longint_internals::*;

use super::Limbs;
use crate::Integer;

/// # Multiplication
impl Integer {
    /// Multiplication
    #[must_use]
    pub fn mul(&self, rhs: &Integer) -> Integer {
        if self.is_zero() || rhs.is_zero() {
            return Integer::ZERO
        }
        if self.is_negative() {
            if rhs.is_negative() {
                return self.neg().mul(&rhs.neg())
            } else {
                return self.neg().mul(rhs).neg()
            }
        } else if rhs.is_negative() {
            return self.mul(&rhs.neg()).neg()
        }

        // both are now positive, so the stored limbs are the magnitudes
        if (self.limbs.len() == 1) && (rhs.limbs.len() == 1) {
            return Integer::from_u64((self.limbs[0] as DDigit) * (rhs.limbs[0] as DDigit))
        }
        let mut limbs = Limbs::from_elem(0, self.limbs.len() + rhs.limbs.len());
        for (i, x) in self.limbs.iter().enumerate() {
            let mut carry = 0;
            for (j, y) in rhs.limbs.iter().enumerate() {
                let (tmp, c0) = widen_mul_add(*x, *y, carry);
                let (tmp, c1) = widen_add(tmp, limbs[i + j], 0);
                limbs[i + j] = tmp;
                carry = c0 + c1;
            }
            limbs[i + rhs.limbs.len()] = carry;
        }
        Integer::from_raw(limbs, 0)
    }

    /// Raises `self` to the power of `exp` by repeated squaring. `0^0 == 1`.
    #[must_use]
    pub fn pow(&self, mut exp: u32) -> Integer {
        let mut base = self.clone();
        let mut res = Integer::ONE;
        while exp != 0 {
            if (exp & 1) != 0 {
                res = res.mul(&base);
            }
            exp >>= 1;
            if exp != 0 {
                base = base.mul(&base);
            }
        }
        res
    }
}
