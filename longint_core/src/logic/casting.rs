use const_fn::const_fn;
use longint_internals::*;

use crate::Int64;

/// # Conversions with `f64`
impl Int64 {
    /// Converts a double to the nearest `Int64` rounding toward zero. NaN and
    /// the infinities become zero and finite values beyond the range are
    /// clamped to `MIN_VALUE` or `MAX_VALUE`.
    #[must_use]
    #[const_fn(cfg(feature = "const_support"))]
    pub const fn from_f64(x: f64) -> Self {
        if !is_finite_f64(x) {
            Self::ZERO
        } else if x <= -TWO_PWR_63_DBL {
            Self::MIN_VALUE
        } else if (x + 1.0) >= TWO_PWR_63_DBL {
            Self::MAX_VALUE
        } else if x < 0.0 {
            Self::from_f64(-x).neg()
        } else {
            // `x < 2^63` so the high part cannot reach the sign bit
            Self::from_bits(
                (x % TWO_PWR_32_DBL) as Digit,
                (x / TWO_PWR_32_DBL) as Digit,
            )
        }
    }

    /// Converts to the nearest double. This is exact while the magnitude is
    /// at most 2^53.
    #[inline]
    #[must_use]
    #[const_fn(cfg(feature = "const_support"))]
    pub const fn to_f64(self) -> f64 {
        (self.high_bits() as f64) * TWO_PWR_32_DBL + (self.low_bits_unsigned() as f64)
    }

    /// Converts the unsigned interpretation of the bits to the nearest double
    #[inline]
    #[must_use]
    #[const_fn(cfg(feature = "const_support"))]
    pub const fn to_unsigned_f64(self) -> f64 {
        (self.high_bits_unsigned() as f64) * TWO_PWR_32_DBL + (self.low_bits_unsigned() as f64)
    }
}
