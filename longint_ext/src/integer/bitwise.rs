use longint_core::longint_internals::*;

use super::Limbs;
use crate::Integer;

/// # Bitwise
///
/// These act on the infinite two's complement representation, including the
/// sign word.
impl Integer {
    fn zip_with<F: Fn(Digit, Digit) -> Digit>(&self, rhs: &Integer, f: F) -> Integer {
        let len = core::cmp::max(self.limbs.len(), rhs.limbs.len());
        let mut limbs = Limbs::with_capacity(len);
        for i in 0..len {
            limbs.push(f(self.limb(i), rhs.limb(i)));
        }
        Integer::from_raw(limbs, f(self.sign, rhs.sign))
    }

    #[must_use]
    pub fn not(&self) -> Integer {
        Integer::from_raw(self.limbs.iter().map(|x| !x).collect(), !self.sign)
    }

    #[must_use]
    pub fn and(&self, rhs: &Integer) -> Integer {
        self.zip_with(rhs, |x, y| x & y)
    }

    #[must_use]
    pub fn or(&self, rhs: &Integer) -> Integer {
        self.zip_with(rhs, |x, y| x | y)
    }

    #[must_use]
    pub fn xor(&self, rhs: &Integer) -> Integer {
        self.zip_with(rhs, |x, y| x ^ y)
    }

    /// Shift left by `s` bits, which is multiplication by `2^s`
    #[must_use]
    pub fn shl(&self, s: usize) -> Integer {
        if self.is_zero() {
            return Integer::ZERO
        }
        let digits = digits_u(s);
        let extra = extra_u(s);
        let len = self.limbs.len() + 1;
        let mut limbs = Limbs::from_elem(0, digits);
        limbs.reserve(len);
        if extra == 0 {
            limbs.extend_from_slice(&self.limbs);
        } else {
            let mut prev = 0;
            for i in 0..len {
                let x = self.limb(i);
                limbs.push((x << extra) | (prev >> (BITS - extra)));
                prev = x;
            }
        }
        Integer::from_raw(limbs, self.sign)
    }

    /// Arithmetic shift right by `s` bits, which is floored division by `2^s`
    #[must_use]
    pub fn shr(&self, s: usize) -> Integer {
        let digits = digits_u(s);
        let extra = extra_u(s);
        if digits >= self.limbs.len() {
            return Integer::from_raw(Limbs::new(), self.sign)
        }
        let mut limbs = Limbs::with_capacity(self.limbs.len() - digits);
        for i in digits..self.limbs.len() {
            if extra == 0 {
                limbs.push(self.limbs[i]);
            } else {
                limbs.push((self.limbs[i] >> extra) | (self.limb(i + 1) << (BITS - extra)));
            }
        }
        Integer::from_raw(limbs, self.sign)
    }

    /// Keeps the least significant `bits` bits and sign extends from bit
    /// `bits - 1`. Zero `bits` produces zero.
    ///
    /// ```
    /// use longint::Integer;
    ///
    /// let x = Integer::from_u32(0xff);
    /// assert_eq!(x.truncate_signed(8), Integer::from_i32(-1));
    /// assert_eq!(x.truncate_signed(9), x);
    /// assert_eq!(Integer::from_i64(1 << 40).truncate_signed(32), Integer::ZERO);
    /// ```
    #[must_use]
    pub fn truncate_signed(&self, bits: usize) -> Integer {
        let digits = digits_u(bits);
        let extra = extra_u(bits);
        let mut limbs = Limbs::with_capacity(digits + 1);
        for i in 0..digits {
            limbs.push(self.limb(i));
        }
        if extra != 0 {
            let mask = MAX >> (BITS - extra);
            let mut x = self.limb(digits) & mask;
            if ((x >> (extra - 1)) & 1) != 0 {
                x |= !mask;
            }
            limbs.push(x);
        }
        let sign = match limbs.last() {
            Some(last) => sign_of(*last),
            None => 0,
        };
        Integer::from_raw(limbs, sign)
    }
}
