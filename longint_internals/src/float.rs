//! `f64` helpers that work without `std`. Everything here operates on the bit
//! representation, since `floor`, `log2`, and `powi` are not available in
//! `core`.

use const_fn::const_fn;

/// 2^32 as an `f64`
pub const TWO_PWR_32_DBL: f64 = 4294967296.0;

/// 2^63 as an `f64`
pub const TWO_PWR_63_DBL: f64 = 9223372036854775808.0;

/// 2^64 as an `f64`
pub const TWO_PWR_64_DBL: f64 = 18446744073709551616.0;

/// Mask of the 52 explicitly stored mantissa bits of an `f64`
pub const F64_MANTISSA_MASK: u64 = (1 << 52) - 1;

/// Bias of the `f64` exponent field
pub const F64_BIAS: i32 = 1023;

/// The exponent field of `f64` infinities and NaNs
pub const F64_EXP_MAX: u16 = (1 << 11) - 1;

/// Returns if `x` is neither an infinity nor NaN
#[inline]
#[const_fn(cfg(feature = "const_support"))]
pub const fn is_finite_f64(x: f64) -> bool {
    ((x.to_bits() >> 52) as u16 & F64_EXP_MAX) != F64_EXP_MAX
}

/// Returns `2^e` for `-1022 <= e <= 1023`. Other values of `e` produce
/// garbage.
#[inline]
#[const_fn(cfg(feature = "const_support"))]
pub const fn pow2_f64(e: i32) -> f64 {
    f64::from_bits(((e + F64_BIAS) as u64) << 52)
}

/// Returns `x * 2^e`. Results in the subnormal range can be rounded twice.
#[const_fn(cfg(feature = "const_support"))]
pub const fn scale_pow2_f64(mut x: f64, mut e: i32) -> f64 {
    while e > F64_BIAS {
        x *= pow2_f64(F64_BIAS);
        e -= F64_BIAS;
    }
    while e < 1 - F64_BIAS {
        x *= pow2_f64(1 - F64_BIAS);
        e += F64_BIAS - 1;
    }
    x * pow2_f64(e)
}

/// Returns `ceil(log2(x))` for finite `x >= 1.0`
#[inline]
#[const_fn(cfg(feature = "const_support"))]
pub const fn ceil_log2_f64(x: f64) -> i32 {
    let bits = x.to_bits();
    let exp = ((bits >> 52) as i32 & (F64_EXP_MAX as i32)) - F64_BIAS;
    if (bits & F64_MANTISSA_MASK) != 0 {
        exp + 1
    } else {
        exp
    }
}

/// Rounds a non-negative `x` toward zero. Values at or beyond 2^64 are
/// returned unchanged since they are already integral.
#[inline]
#[const_fn(cfg(feature = "const_support"))]
pub const fn trunc_f64(x: f64) -> f64 {
    if x >= TWO_PWR_64_DBL {
        x
    } else {
        (x as u64) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_helpers() {
        assert_eq!(pow2_f64(0), 1.0);
        assert_eq!(pow2_f64(32), TWO_PWR_32_DBL);
        assert_eq!(pow2_f64(-1), 0.5);
        assert_eq!(scale_pow2_f64(3.0, 0), 3.0);
        assert_eq!(scale_pow2_f64(1.0, 1024), f64::INFINITY);
        assert_eq!(scale_pow2_f64(pow2_f64(1000), -1030), pow2_f64(-30));
        assert_eq!(scale_pow2_f64(1.0, -1074), f64::from_bits(1));
        assert_eq!(ceil_log2_f64(1.0), 0);
        assert_eq!(ceil_log2_f64(2.0), 1);
        assert_eq!(ceil_log2_f64(3.0), 2);
        assert_eq!(ceil_log2_f64(TWO_PWR_63_DBL + 4096.0), 64);
        assert_eq!(trunc_f64(2.75), 2.0);
        assert!(is_finite_f64(-0.0));
        assert!(is_finite_f64(f64::MAX));
        assert!(!is_finite_f64(f64::NEG_INFINITY));
        assert!(!is_finite_f64(f64::NAN));
        assert_eq!(trunc_f64(TWO_PWR_64_DBL * 3.0), TWO_PWR_64_DBL * 3.0);
    }
}
