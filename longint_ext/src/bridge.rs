//! Conversions between `Integer`, `Int64`, and `Word64`

use crate::{Int64, Integer, Word64};

impl Integer {
    /// Sign extends the two limbs of `x`
    #[inline]
    #[must_use]
    pub const fn from_int64(x: Int64) -> Integer {
        let (low, high) = x.to_bits();
        Integer::from_limb_pair(low, high)
    }

    /// Truncates to the least significant 64 bits
    #[inline]
    #[must_use]
    pub fn to_int64(&self) -> Int64 {
        let (low, high) = self.to_limb_pair();
        Int64::from_bits(low, high)
    }
}

impl Word64 {
    /// Reinterprets the bits of `x` as unsigned
    ///
    /// ```
    /// use longint::{Int64, Word64};
    ///
    /// assert_eq!(Word64::from_int64(Int64::NEG_ONE), Word64::MAX);
    /// assert_eq!(Word64::MAX.to_int64(), Int64::NEG_ONE);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_int64(x: Int64) -> Word64 {
        let (low, high) = x.to_bits();
        Word64::from_parts(low, high)
    }

    /// Reinterprets the bits as signed
    #[inline]
    #[must_use]
    pub fn to_int64(&self) -> Int64 {
        self.as_integer().to_int64()
    }
}

impl From<Int64> for Integer {
    fn from(x: Int64) -> Self {
        Integer::from_int64(x)
    }
}

impl From<&Integer> for Int64 {
    /// Truncates to the least significant 64 bits
    fn from(x: &Integer) -> Self {
        x.to_int64()
    }
}

impl From<Int64> for Word64 {
    fn from(x: Int64) -> Self {
        Word64::from_int64(x)
    }
}

impl From<&Word64> for Int64 {
    fn from(x: &Word64) -> Self {
        x.to_int64()
    }
}
