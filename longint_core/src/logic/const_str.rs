use const_fn::const_fn;
use longint_internals::*;
use FormatError::*;

use crate::Int64;

/// Divides the two limb unsigned number `(low, high)` by `div`, returning the
/// quotient and remainder
const fn short_udivide(low: Digit, high: Digit, div: Digit) -> (Digit, Digit, Digit) {
    let div = div as DDigit;
    let h = high as DDigit;
    let quo_high = h / div;
    let tmp = ((h % div) << BITS) | (low as DDigit);
    let quo_low = tmp / div;
    ((quo_low as Digit), (quo_high as Digit), (tmp % div) as Digit)
}

/// # `const` string representation conversion
///
/// Note: the allocating functions are in `longint_ext`
impl Int64 {
    /// Creates an `Int64` from its representation in the given `radix`, with
    /// an optional single leading `-`. Both cases of letters are accepted. Digits are
    /// accumulated eight at a time.
    ///
    /// # Errors
    ///
    /// See [FormatError]. `Overflow` is returned if the value does not fit in
    /// the range of a signed 64 bit integer.
    #[const_fn(cfg(feature = "const_support"))]
    pub const fn from_bytes_radix(src: &[u8], radix: u8) -> Result<Self, FormatError> {
        let negative = match verify_digits(src, radix) {
            Ok(negative) => negative,
            Err(e) => return Err(e),
        };
        let start = if negative { 1 } else { 0 };
        // the magnitude, which can reach 2^63 for negative numbers
        let mut acc: u64 = 0;
        let mut i = start;
        while i < src.len() {
            let end = if (src.len() - i) < PARSE_WINDOW {
                src.len()
            } else {
                i + PARSE_WINDOW
            };
            let mut window: u64 = 0;
            const_for!(j in {i..end} {
                // `verify_digits` checked every char
                let v = match digit_value(src[j], radix) {
                    Some(v) => v,
                    None => return Err(InvalidChar),
                };
                window = (window * (radix as u64)) + (v as u64);
            });
            acc = match acc.checked_mul(window_power(radix, end - i)) {
                Some(x) => match x.checked_add(window) {
                    Some(x) => x,
                    None => return Err(Overflow),
                },
                None => return Err(Overflow),
            };
            i = end;
        }
        let limit = if negative { 1u64 << 63 } else { (1u64 << 63) - 1 };
        if acc > limit {
            return Err(Overflow)
        }
        if negative {
            Ok(Self::from_u64(acc).neg())
        } else {
            Ok(Self::from_u64(acc))
        }
    }

    /// The same as [Int64::from_bytes_radix] on the bytes of `src`
    #[const_fn(cfg(feature = "const_support"))]
    pub const fn from_str_radix(src: &str, radix: u8) -> Result<Self, FormatError> {
        Self::from_bytes_radix(src.as_bytes(), radix)
    }

    /// Writes the signed representation of `self` in `radix` to the start of
    /// `dst` and returns the number of bytes written. Negative values get a
    /// leading `-`. `upper` selects uppercase letters. At most
    /// [Int64::MAX_CHARS] bytes are needed.
    ///
    /// # Errors
    ///
    /// `InvalidRadix`, or `Overflow` if `dst` is too short. `dst` may be
    /// partially written on error.
    #[const_fn(cfg(feature = "const_support"))]
    pub const fn to_bytes_radix(
        self,
        dst: &mut [u8],
        radix: u8,
        upper: bool,
    ) -> Result<usize, FormatError> {
        let negative = self.is_negative();
        // `MIN_VALUE.neg()` reinterpreted as unsigned is the correct magnitude
        let mag = if negative { self.neg() } else { self };
        Self::write_magnitude(mag, negative, dst, radix, upper)
    }

    /// Writes the unsigned interpretation of the bits of `self`, used by the
    /// hex, octal, and binary formatting
    #[const_fn(cfg(feature = "const_support"))]
    pub const fn to_bytes_radix_unsigned(
        self,
        dst: &mut [u8],
        radix: u8,
        upper: bool,
    ) -> Result<usize, FormatError> {
        Self::write_magnitude(self, false, dst, radix, upper)
    }

    #[const_fn(cfg(feature = "const_support"))]
    const fn write_magnitude(
        mag: Self,
        negative: bool,
        dst: &mut [u8],
        radix: u8,
        upper: bool,
    ) -> Result<usize, FormatError> {
        if let Err(e) = check_radix(radix) {
            return Err(e)
        }
        // digits in reverse order
        let mut buf = [0u8; 64];
        let mut len = 0;
        let (mut low, mut high) = mag.to_bits();
        loop {
            let (quo_low, quo_high, rem) = short_udivide(low, high, radix as Digit);
            buf[len] = digit_char(rem as u8, upper);
            len += 1;
            low = quo_low;
            high = quo_high;
            if (low == 0) && (high == 0) {
                break
            }
        }
        let total = len + (negative as usize);
        if dst.len() < total {
            return Err(Overflow)
        }
        let mut j = 0;
        if negative {
            dst[0] = b'-';
            j = 1;
        }
        const_for!(i in {0..len}.rev() {
            dst[j] = buf[i];
            j += 1;
        });
        Ok(total)
    }
}
