use longint_core::longint_internals::*;

use super::Limbs;
use crate::Integer;

/// # Summation
impl Integer {
    /// Addition. One limb beyond the longer operand is produced so that the
    /// carry out of the sign words ends up in a word whose most significant
    /// bit is the true sign.
    #[must_use]
    pub fn add(&self, rhs: &Integer) -> Integer {
        let len = core::cmp::max(self.limbs.len(), rhs.limbs.len()) + 1;
        let mut limbs = Limbs::with_capacity(len);
        let mut carry = 0;
        for i in 0..len {
            let (sum, c) = widen_add(self.limb(i), rhs.limb(i), carry);
            limbs.push(sum);
            carry = c;
        }
        let sign = sign_of(limbs[len - 1]);
        Integer::from_raw(limbs, sign)
    }

    /// Subtraction, the same as `self.add(&rhs.neg())`
    #[must_use]
    pub fn sub(&self, rhs: &Integer) -> Integer {
        let len = core::cmp::max(self.limbs.len(), rhs.limbs.len()) + 1;
        let mut limbs = Limbs::with_capacity(len);
        let mut borrow = 0;
        for i in 0..len {
            let (dif, b) = widen_sub(self.limb(i), rhs.limb(i), borrow);
            limbs.push(dif);
            borrow = b;
        }
        let sign = sign_of(limbs[len - 1]);
        Integer::from_raw(limbs, sign)
    }

    /// Negation, `self.not().add(&Integer::ONE)`
    #[must_use]
    pub fn neg(&self) -> Integer {
        self.not().inc()
    }

    #[must_use]
    pub fn abs(&self) -> Integer {
        if self.is_negative() {
            self.neg()
        } else {
            self.clone()
        }
    }

    /// Returns -1, 0, or 1 depending on the sign of `self`
    #[must_use]
    pub fn signum(&self) -> Integer {
        if self.is_negative() {
            Integer::NEG_ONE
        } else if self.is_zero() {
            Integer::ZERO
        } else {
            Integer::ONE
        }
    }

    /// Returns `self + 1`
    #[must_use]
    pub fn inc(&self) -> Integer {
        self.add(&Integer::ONE)
    }

    /// Returns `self - 1`
    #[must_use]
    pub fn dec(&self) -> Integer {
        self.sub(&Integer::ONE)
    }
}
