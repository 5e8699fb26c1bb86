use core::mem::MaybeUninit;

use longint_core::longint_internals::*;
use smallvec::SmallVec;

mod bitwise;
mod casting;
mod cmp;
mod div;
mod mul;
mod std_ops;
mod sum;

/// The limb storage of an `Integer`. Two inline limbs cover the whole 64 bit
/// range without allocating.
pub(crate) type Limbs = SmallVec<[Digit; 2]>;

/// An immutable arbitrary precision signed integer.
///
/// The value is stored in two's complement form as a little endian sequence
/// of 32 bit limbs, followed by an implicit infinite repetition of the sign
/// word (`0` for nonnegative values and `u32::MAX` for negative values).
/// Limbs equal to the sign word are always trimmed from the most significant
/// end, so every value has exactly one representation and the derived
/// `PartialEq` and `Hash` are value based. Zero and minus one store no limbs
/// at all.
///
/// Every operation returns a new `Integer`. Division is the only fallible
/// arithmetic and returns [DivisionByZero].
///
/// ```
/// use longint::Integer;
///
/// let x = Integer::from_i64(-(1 << 40));
/// let y = x.mul(&x).add(&Integer::ONE);
/// assert_eq!(y.to_string(), "1208925819614629174706177");
/// assert_eq!(y.quot(&x), Ok(Integer::from_i64(-(1 << 40))));
/// assert_eq!(y.rem(&x), Ok(Integer::ONE));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Integer {
    limbs: Limbs,
    sign: Digit,
}

/// The lower bound of the values in the small integer table
const CACHE_START: i32 = -128;

/// The number of values in the small integer table
const CACHE_LEN: usize = 256;

/// `[-128, 128)` built entirely at compile time
static CACHE: [Integer; CACHE_LEN] = Integer::cache_table();

/// # Construction and access
impl Integer {
    pub const ZERO: Integer = Integer::from_i32(0);
    pub const ONE: Integer = Integer::from_i32(1);
    pub const NEG_ONE: Integer = Integer::from_i32(-1);

    /// Creates the canonical `Integer` for the two limbs `low` and `high`
    /// followed by the sign word `sign`
    const fn from_pair_with_sign(low: Digit, high: Digit, sign: Digit) -> Self {
        let len = if high != sign {
            2
        } else if low != sign {
            1
        } else {
            0
        };
        Self {
            // Safety: `len <= 2`
            limbs: unsafe { SmallVec::from_const_with_len_unchecked([low, high], len) },
            sign,
        }
    }

    const fn cache_table() -> [Integer; CACHE_LEN] {
        const UNINIT: MaybeUninit<Integer> = MaybeUninit::uninit();
        let mut table = [UNINIT; CACHE_LEN];
        const_for!(i in {0..CACHE_LEN} {
            table[i] = MaybeUninit::new(Integer::from_i32(CACHE_START + (i as i32)));
        });
        // Safety: every entry was initialized above
        unsafe {
            core::mem::transmute::<[MaybeUninit<Integer>; CACHE_LEN], [Integer; CACHE_LEN]>(table)
        }
    }

    /// Returns a reference to a shared precomputed `Integer` if `x` is in the
    /// range `-128..128`
    ///
    /// ```
    /// use longint::Integer;
    ///
    /// assert_eq!(Integer::cached(-128), Some(&Integer::from_i32(-128)));
    /// assert_eq!(Integer::cached(128), None);
    /// ```
    #[must_use]
    pub fn cached(x: i32) -> Option<&'static Integer> {
        let i = x.wrapping_sub(CACHE_START);
        if (0..(CACHE_LEN as i32)).contains(&i) {
            Some(&CACHE[i as usize])
        } else {
            None
        }
    }

    /// Builds an `Integer` from limbs and an explicit sign word, trimming
    /// redundant limbs
    pub(crate) fn from_raw(mut limbs: Limbs, sign: Digit) -> Self {
        while limbs.last() == Some(&sign) {
            limbs.pop();
        }
        Self { limbs, sign }
    }

    /// Sign extends `x`
    #[inline]
    #[must_use]
    pub const fn from_i32(x: i32) -> Self {
        let sign = sign_of(x as Digit);
        Self::from_pair_with_sign(x as Digit, sign, sign)
    }

    #[inline]
    #[must_use]
    pub const fn from_u32(x: u32) -> Self {
        Self::from_pair_with_sign(x, 0, 0)
    }

    #[inline]
    #[must_use]
    pub const fn from_i64(x: i64) -> Self {
        let high = (x >> BITS) as Digit;
        Self::from_pair_with_sign(x as Digit, high, sign_of(high))
    }

    #[inline]
    #[must_use]
    pub const fn from_u64(x: u64) -> Self {
        Self::from_pair_with_sign(x as Digit, (x >> BITS) as Digit, 0)
    }

    /// Creates an `Integer` from little endian two's complement limbs. The
    /// sign is taken from the most significant bit of the last limb, and an
    /// empty slice is zero.
    ///
    /// ```
    /// use longint::Integer;
    ///
    /// assert_eq!(Integer::from_bits(&[0xffff_fffe]), Integer::from_i32(-2));
    /// assert_eq!(Integer::from_bits(&[0xffff_fffe, 0]), Integer::from_u32(0xffff_fffe));
    /// ```
    #[must_use]
    pub fn from_bits(bits: &[u32]) -> Self {
        let sign = match bits.last() {
            Some(last) => sign_of(*last),
            None => 0,
        };
        Self::from_raw(SmallVec::from_slice(bits), sign)
    }

    /// The same as `Integer::from_bits(&[low, high])`
    #[inline]
    #[must_use]
    pub const fn from_limb_pair(low: u32, high: u32) -> Self {
        Self::from_pair_with_sign(low, high, sign_of(high))
    }

    /// Returns limb `i` of the infinite two's complement representation. Limbs
    /// beyond the stored ones are the sign word.
    #[inline]
    #[must_use]
    pub fn limb(&self, i: usize) -> u32 {
        match self.limbs.get(i) {
            Some(x) => *x,
            None => self.sign,
        }
    }

    /// Returns the stored limbs, which exclude the trailing sign words
    #[inline]
    #[must_use]
    pub fn limbs(&self) -> &[u32] {
        &self.limbs
    }

    /// Returns the sign-extension word, `0` or `u32::MAX`
    #[inline]
    #[must_use]
    pub fn sign_word(&self) -> u32 {
        self.sign
    }

    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty() && (self.sign == 0)
    }

    #[inline]
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign != 0
    }

    #[inline]
    #[must_use]
    pub fn is_odd(&self) -> bool {
        (self.limb(0) & 1) != 0
    }

    /// Returns the number of bits needed to represent `self` excluding the
    /// sign bit. This is zero for both `0` and `-1`.
    #[must_use]
    pub fn significant_bits(&self) -> usize {
        match self.limbs.last() {
            Some(top) => {
                let top_bits = BITS - ((*top ^ self.sign).leading_zeros() as usize);
                ((self.limbs.len() - 1) * BITS) + top_bits
            }
            None => 0,
        }
    }

    /// Returns bit `i` of the infinite two's complement representation
    #[inline]
    #[must_use]
    pub fn test_bit(&self, i: usize) -> bool {
        ((self.limb(digits_u(i)) >> extra_u(i)) & 1) != 0
    }

    /// Formats the raw limbs and sign word, for debugging the representation
    ///
    /// ```
    /// use longint::Integer;
    ///
    /// assert_eq!(
    ///     Integer::from_i64(-(1 << 32)).debug_limbs(),
    ///     "Integer { limbs: [0x00000000], sign: 0xffffffff }"
    /// );
    /// ```
    #[must_use]
    pub fn debug_limbs(&self) -> alloc::string::String {
        use core::fmt::Write;
        let mut s = alloc::string::String::from("Integer { limbs: [");
        for (i, limb) in self.limbs.iter().enumerate() {
            if i != 0 {
                s.push_str(", ");
            }
            // writing to a `String` cannot fail
            let _ = write!(s, "{:#010x}", limb);
        }
        let _ = write!(s, "], sign: {:#010x} }}", self.sign);
        s
    }
}

impl Default for Integer {
    fn default() -> Self {
        Self::ZERO
    }
}
