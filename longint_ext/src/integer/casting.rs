use alloc::vec::Vec;

use longint_core::longint_internals::*;

use super::Limbs;
use crate::Integer;

/// # Casting
impl Integer {
    /// Converts a double to an `Integer`, rounding toward zero. NaN and the
    /// infinities become zero.
    ///
    /// ```
    /// use longint::Integer;
    ///
    /// assert_eq!(Integer::from_f64(-2.5), Integer::from_i32(-2));
    /// assert_eq!(Integer::from_f64(1e20).to_string(), "100000000000000000000");
    /// assert_eq!(Integer::from_f64(f64::NAN), Integer::ZERO);
    /// ```
    #[must_use]
    pub fn from_f64(x: f64) -> Integer {
        if !is_finite_f64(x) {
            return Integer::ZERO
        }
        if x < 0.0 {
            return Integer::from_f64(-x).neg()
        }
        let mut limbs = Limbs::new();
        let mut x = x;
        while x >= 1.0 {
            limbs.push((x % TWO_PWR_32_DBL) as Digit);
            x = trunc_f64(x / TWO_PWR_32_DBL);
        }
        Integer::from_raw(limbs, 0)
    }

    /// Converts to the nearest double, with ties to even. Values beyond the
    /// range of `f64` become infinities.
    ///
    /// ```
    /// use longint::Integer;
    ///
    /// // 2^95 + 2^42 + 1 is just above the midpoint between two doubles
    /// let x = Integer::from_bits(&[1, 1 << 10, 1 << 31, 0]);
    /// assert_eq!(x.to_f64(), 3.961408125713218e28);
    /// assert_eq!(x.neg().to_f64(), -3.961408125713218e28);
    /// ```
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        if self.is_negative() {
            return -self.neg().to_f64()
        }
        let sig = self.significant_bits();
        if sig <= 64 {
            return self.to_u64() as f64
        }
        // the 64 most significant bits, with the lowest one acting as a sticky
        // bit for everything shifted out
        let s = sig - 64;
        let (d, e) = (digits_u(s), extra_u(s));
        let window = (self.limb(d) as u128)
            | ((self.limb(d + 1) as u128) << BITS)
            | ((self.limb(d + 2) as u128) << (2 * BITS));
        let mut top = (window >> e) as u64;
        let sticky = self.limbs[..d].iter().any(|x| *x != 0)
            || (e != 0 && (self.limb(d) & (MAX >> (BITS - e))) != 0);
        if sticky {
            top |= 1;
        }
        scale_pow2_f64(top as f64, s as i32)
    }

    /// Truncates to the least significant limb reinterpreted as signed
    #[inline]
    #[must_use]
    pub fn to_i32(&self) -> i32 {
        self.limb(0) as i32
    }

    /// Truncates to the least significant limb
    #[inline]
    #[must_use]
    pub fn to_u32(&self) -> u32 {
        self.limb(0)
    }

    /// Truncates to the least significant two limbs reinterpreted as signed
    #[inline]
    #[must_use]
    pub fn to_i64(&self) -> i64 {
        self.to_u64() as i64
    }

    /// Truncates to the least significant two limbs
    #[inline]
    #[must_use]
    pub fn to_u64(&self) -> u64 {
        ((self.limb(1) as u64) << BITS) | (self.limb(0) as u64)
    }

    /// Returns the least significant `n` limbs of the infinite two's
    /// complement representation
    #[must_use]
    pub fn to_bits(&self, n: usize) -> Vec<u32> {
        (0..n).map(|i| self.limb(i)).collect()
    }

    /// Returns `(limb(0), limb(1))`
    #[inline]
    #[must_use]
    pub fn to_limb_pair(&self) -> (u32, u32) {
        (self.limb(0), self.limb(1))
    }
}
