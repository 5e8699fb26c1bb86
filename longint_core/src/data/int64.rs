use longint_internals::*;

/// An exact 64 bit two's complement integer stored as two 32 bit limbs.
///
/// The value is `high * 2^32 + low` interpreted as a signed 64 bit two's
/// complement number. There is no redundancy in the representation, every bit
/// pattern is a distinct value, so the derived `PartialEq` and `Hash` are value
/// based.
///
/// Arithmetic wraps modulo 2^64 in the same way as the `wrapping_*` functions
/// on Rust's primitives. This is defined behavior and not an error, for
/// example `MAX_VALUE + 1 == MIN_VALUE` and `-MIN_VALUE == MIN_VALUE`.
///
/// ```
/// use longint::Int64;
///
/// let max = Int64::from_bits(0xffff_ffff, 0x7fff_ffff);
/// assert_eq!(max, Int64::MAX_VALUE);
/// assert_eq!(max + Int64::ONE, Int64::MIN_VALUE);
/// assert_eq!(Int64::MIN_VALUE.to_bits(), (0, 0x8000_0000));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Int64 {
    low: Digit,
    high: Digit,
}

/// # Construction and access
impl Int64 {
    pub const ZERO: Int64 = Int64::from_i32(0);
    pub const ONE: Int64 = Int64::from_i32(1);
    pub const NEG_ONE: Int64 = Int64::from_i32(-1);
    /// `0x7fff_ffff_ffff_ffff`
    pub const MAX_VALUE: Int64 = Int64::from_bits(MAX, MAX >> 1);
    /// `0x8000_0000_0000_0000`, which has no positive counterpart
    pub const MIN_VALUE: Int64 = Int64::from_bits(0, !(MAX >> 1));
    pub const TWO_PWR_24: Int64 = Int64::from_i32(1 << 24);

    /// The maximum number of characters `to_bytes_radix` can write, 64 binary
    /// digits plus a sign indicator
    pub const MAX_CHARS: usize = 65;

    /// Creates an `Int64` from its little endian limbs
    #[inline]
    #[must_use]
    pub const fn from_bits(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    /// Sign extends `x`
    #[inline]
    #[must_use]
    pub const fn from_i32(x: i32) -> Self {
        Self {
            low: x as Digit,
            high: sign_of(x as Digit),
        }
    }

    #[inline]
    #[must_use]
    pub const fn from_i64(x: i64) -> Self {
        Self::from_u64(x as u64)
    }

    /// Reinterprets the bits of `x`
    #[inline]
    #[must_use]
    pub const fn from_u64(x: u64) -> Self {
        Self {
            low: x as Digit,
            high: (x >> BITS) as Digit,
        }
    }

    /// Returns `(low, high)`
    #[inline]
    #[must_use]
    pub const fn to_bits(self) -> (u32, u32) {
        (self.low, self.high)
    }

    /// Returns the low limb reinterpreted as signed
    #[inline]
    #[must_use]
    pub const fn low_bits(self) -> i32 {
        self.low as IDigit
    }

    /// Returns the high limb reinterpreted as signed
    #[inline]
    #[must_use]
    pub const fn high_bits(self) -> i32 {
        self.high as IDigit
    }

    #[inline]
    #[must_use]
    pub const fn low_bits_unsigned(self) -> u32 {
        self.low
    }

    #[inline]
    #[must_use]
    pub const fn high_bits_unsigned(self) -> u32 {
        self.high
    }

    /// Truncates to the low limb, reinterpreted as signed. This is the same
    /// as an `as i32` cast.
    #[inline]
    #[must_use]
    pub const fn to_i32(self) -> i32 {
        self.low as IDigit
    }

    #[inline]
    #[must_use]
    pub const fn to_i64(self) -> i64 {
        self.to_u64() as i64
    }

    /// Reinterprets the bits as unsigned
    #[inline]
    #[must_use]
    pub const fn to_u64(self) -> u64 {
        ((self.high as u64) << BITS) | (self.low as u64)
    }

    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        (self.low == 0) && (self.high == 0)
    }

    #[inline]
    #[must_use]
    pub const fn is_negative(self) -> bool {
        (self.high as IDigit) < 0
    }

    #[inline]
    #[must_use]
    pub const fn is_odd(self) -> bool {
        (self.low & 1) != 0
    }

    /// Returns if `self` is `MIN_VALUE`
    #[inline]
    #[must_use]
    pub const fn is_min(self) -> bool {
        self.const_eq(Self::MIN_VALUE)
    }
}
