use const_fn::const_fn;
use longint_internals::*;

/// The raw decomposition of an IEEE-754 value, such that
/// `(-1)^negative * mantissa * 2^exponent` equals the value when it is
/// finite.
///
/// Infinities and NaNs are not special cased. Their exponent field is
/// processed like that of any normal number, so they decode with the implicit
/// leading bit set and an exponent of 972 for `f64` or 105 for `f32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decoded {
    pub negative: bool,
    pub mantissa: u64,
    pub exponent: i32,
}

impl Decoded {
    /// The mantissa with the sign applied
    #[inline]
    #[must_use]
    pub const fn signed_mantissa(self) -> i64 {
        if self.negative {
            (self.mantissa as i64).wrapping_neg()
        } else {
            self.mantissa as i64
        }
    }
}

/// Decomposes `f` into a mantissa and a power of two exponent, handling
/// subnormal values correctly. Positive and negative zero both decode to a
/// zero mantissa with a zero exponent.
///
/// ```
/// use longint::decode_f64;
///
/// let d = decode_f64(-1.5);
/// assert_eq!((d.signed_mantissa(), d.exponent), (-3 << 51, -52));
/// let d = decode_f64(f64::from_bits(1));
/// assert_eq!((d.mantissa, d.exponent), (1, -1074));
/// ```
#[const_fn(cfg(feature = "const_support"))]
pub const fn decode_f64(f: f64) -> Decoded {
    let bits = f.to_bits();
    let field = ((bits >> 52) as u16) & F64_EXP_MAX;
    let negative = (bits >> 63) != 0;
    let mantissa = bits & F64_MANTISSA_MASK;
    if field == 0 {
        if mantissa == 0 {
            Decoded {
                negative,
                mantissa: 0,
                exponent: 0,
            }
        } else {
            // denormal
            Decoded {
                negative,
                mantissa,
                exponent: 1 - F64_BIAS - 52,
            }
        }
    } else {
        // add leading 1
        Decoded {
            negative,
            mantissa: mantissa | (1 << 52),
            exponent: (field as i32) - F64_BIAS - 52,
        }
    }
}

/// The `f32` version of [decode_f64]
#[const_fn(cfg(feature = "const_support"))]
pub const fn decode_f32(f: f32) -> Decoded {
    let bits = f.to_bits();
    let field = ((bits >> 23) as u16) & ((1 << 8) - 1);
    let negative = (bits >> 31) != 0;
    let mantissa = (bits & ((1 << 23) - 1)) as u64;
    if field == 0 {
        if mantissa == 0 {
            Decoded {
                negative,
                mantissa: 0,
                exponent: 0,
            }
        } else {
            Decoded {
                negative,
                mantissa,
                exponent: 1 - 127 - 23,
            }
        }
    } else {
        Decoded {
            negative,
            mantissa: mantissa | (1 << 23),
            exponent: (field as i32) - 127 - 23,
        }
    }
}
