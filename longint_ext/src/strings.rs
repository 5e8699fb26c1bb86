use alloc::{string::String, vec::Vec};
use core::{fmt, str::FromStr};

use longint_core::longint_internals::*;

use crate::Integer;

/// Divides the little endian magnitude `mag` in place by `div` and returns the
/// remainder
fn short_udivide_assign(mag: &mut [Digit], div: Digit) -> Digit {
    let div = div as DDigit;
    let mut rem: DDigit = 0;
    for limb in mag.iter_mut().rev() {
        let tmp = (rem << BITS) | (*limb as DDigit);
        *limb = (tmp / div) as Digit;
        rem = tmp % div;
    }
    rem as Digit
}

/// # non-`const` string representation conversion
impl Integer {
    /// Parses `src` in the given `radix`, with an optional leading `-`. Only
    /// a single leading `-` is accepted, so `"--5"` is `InteriorSign`. Both
    /// cases of letters are accepted. Digits are accumulated eight at a time
    /// as `acc * radix^len + window`.
    ///
    /// # Errors
    ///
    /// See [FormatError]. `Overflow` is never returned.
    ///
    /// ```
    /// use longint::{FormatError, Integer};
    ///
    /// let x = Integer::from_str_radix("-ffffffffffffffffffff", 16).unwrap();
    /// assert_eq!(x, Integer::ONE.shl(80).dec().neg());
    /// assert_eq!(Integer::from_str_radix("12-3", 10), Err(FormatError::InteriorSign));
    /// ```
    pub fn from_str_radix(src: &str, radix: u8) -> Result<Integer, FormatError> {
        let src = src.as_bytes();
        let negative = verify_digits(src, radix)?;
        let digits = if negative { &src[1..] } else { src };
        let mut acc = Integer::ZERO;
        for window in digits.chunks(PARSE_WINDOW) {
            let mut value: DDigit = 0;
            for c in window {
                // `verify_digits` checked every char
                let v = digit_value(*c, radix).ok_or(FormatError::InvalidChar)?;
                value = (value * (radix as DDigit)) + (v as DDigit);
            }
            acc = acc
                .mul(&Integer::from_u64(window_power(radix, window.len())))
                .add(&Integer::from_u64(value));
        }
        if negative {
            Ok(acc.neg())
        } else {
            Ok(acc)
        }
    }

    /// Returns the digits of the magnitude of `self` in `radix`, without a
    /// sign indicator. The magnitude is divided by the largest `radix^k` not
    /// exceeding 2^20, and every group except the most significant one is zero
    /// padded to `k` digits.
    fn magnitude_to_vec_radix(&self, radix: u8, upper: bool) -> Result<Vec<u8>, FormatError> {
        check_radix(radix)?;
        let mut mag: Vec<Digit> = self.abs().limbs().to_vec();
        let (k, group) = output_group(radix);
        // digits in reverse order
        let mut rev = Vec::with_capacity(chars_upper_bound(self.significant_bits() + 1, radix)?);
        loop {
            while mag.last() == Some(&0) {
                mag.pop();
            }
            let mut rem = short_udivide_assign(&mut mag, group);
            let last = mag.iter().all(|x| *x == 0);
            for _ in 0..k {
                rev.push(digit_char((rem % (radix as Digit)) as u8, upper));
                rem /= radix as Digit;
                if last && (rem == 0) {
                    break
                }
            }
            if last {
                break
            }
        }
        rev.reverse();
        Ok(rev)
    }

    /// Returns the representation of `self` in `radix`, with a leading `-` if
    /// negative. Letters are lowercase.
    ///
    /// # Errors
    ///
    /// `InvalidRadix` if `radix` is not in the range `2..=36`
    ///
    /// ```
    /// use longint::Integer;
    ///
    /// let x = Integer::from_i64(-1_000_000_000_007);
    /// assert_eq!(x.to_string_radix(10).unwrap(), "-1000000000007");
    /// assert_eq!(Integer::ZERO.to_string_radix(36).unwrap(), "0");
    /// ```
    pub fn to_string_radix(&self, radix: u8) -> Result<String, FormatError> {
        self.to_string_radix_case(radix, false)
    }

    /// The same as [Integer::to_string_radix] with a choice of letter case
    pub fn to_string_radix_case(&self, radix: u8, upper: bool) -> Result<String, FormatError> {
        let mut s = String::new();
        if self.is_negative() {
            s.push('-');
        }
        let digits = self.magnitude_to_vec_radix(radix, upper)?;
        // the digits are all ASCII
        for c in digits {
            s.push(c as char);
        }
        Ok(s)
    }

    fn fmt_radix(
        &self,
        f: &mut fmt::Formatter,
        radix: u8,
        upper: bool,
        prefix: &str,
    ) -> fmt::Result {
        let digits = self
            .magnitude_to_vec_radix(radix, upper)
            .map_err(|_| fmt::Error)?;
        let s = core::str::from_utf8(&digits).map_err(|_| fmt::Error)?;
        f.pad_integral(!self.is_negative(), prefix, s)
    }
}

impl FromStr for Integer {
    type Err = FormatError;

    /// Parses a decimal string with an optional leading `-`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Integer::from_str_radix(s, 10)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 10, false, "")
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Because the sign word repeats forever, the non-decimal radixes print a
/// sign indicator and the magnitude instead of the bits
impl fmt::LowerHex for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 16, false, "0x")
    }
}

impl fmt::UpperHex for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 16, true, "0x")
    }
}

impl fmt::Octal for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 8, false, "0o")
    }
}

impl fmt::Binary for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 2, false, "0b")
    }
}
