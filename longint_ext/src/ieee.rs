use longint_core::{decode_f32, decode_f64, longint_internals::*};

use crate::Integer;

/// # IEEE-754 bridge
impl Integer {
    /// Decomposes `x` into a signed mantissa and an exponent such that
    /// `mantissa * 2^exponent == x` for finite `x`. Subnormals have no
    /// implicit leading bit and an exponent of -1074, and both zeros decode
    /// to `(0, 0)`. Infinities and NaNs are decoded with the same formula as
    /// normal values, giving an exponent of 972.
    ///
    /// ```
    /// use longint::Integer;
    ///
    /// assert_eq!(
    ///     Integer::decode_f64(1.0),
    ///     (Integer::from_u64(1 << 52), -52)
    /// );
    /// assert_eq!(Integer::decode_f64(-0.0), (Integer::ZERO, 0));
    /// ```
    #[must_use]
    pub fn decode_f64(x: f64) -> (Integer, i32) {
        let d = decode_f64(x);
        (Integer::from_i64(d.signed_mantissa()), d.exponent)
    }

    /// The `f32` version of [Integer::decode_f64]. Subnormals have an
    /// exponent of -149.
    #[must_use]
    pub fn decode_f32(x: f32) -> (Integer, i32) {
        let d = decode_f32(x);
        (Integer::from_i64(d.signed_mantissa()), d.exponent)
    }

    /// Returns `self.to_f64() * 2^exponent`, the inverse of
    /// [Integer::decode_f64] for finite values
    #[must_use]
    pub fn encode_f64(&self, exponent: i32) -> f64 {
        scale_pow2_f64(self.to_f64(), exponent)
    }

    /// Returns `num.to_f64() / den.to_f64()`. A zero `den` gives an infinity
    /// or NaN like any other `f64` division.
    #[must_use]
    pub fn ratio_to_f64(num: &Integer, den: &Integer) -> f64 {
        num.to_f64() / den.to_f64()
    }
}
