use core::{
    cmp::Ordering,
    fmt,
    ops::{
        Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Mul,
        MulAssign, Neg, Not, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
    },
    str::FromStr,
};

use longint_internals::FormatError;

use crate::Int64;

impl From<i32> for Int64 {
    /// Sign extends `x`
    fn from(x: i32) -> Self {
        Self::from_i32(x)
    }
}

impl From<i64> for Int64 {
    fn from(x: i64) -> Self {
        Self::from_i64(x)
    }
}

impl From<Int64> for i64 {
    fn from(x: Int64) -> Self {
        x.to_i64()
    }
}

impl PartialOrd for Int64 {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Ord for Int64 {
    fn cmp(&self, rhs: &Self) -> Ordering {
        self.const_cmp(*rhs)
    }
}

/// Implements a wrapping binary operator for all combinations of owned and
/// borrowed operands, plus the assigning forms
macro_rules! int64_binop {
    ($($op:ident $f:ident $op_assign:ident $f_assign:ident => $inherent:ident);*;) => {
        $(
            impl $op for Int64 {
                type Output = Int64;

                #[inline]
                fn $f(self, rhs: Self) -> Self {
                    Int64::$inherent(self, rhs)
                }
            }

            impl<'a> $op<&'a Int64> for Int64 {
                type Output = Int64;

                #[inline]
                fn $f(self, rhs: &'a Self) -> Self {
                    Int64::$inherent(self, *rhs)
                }
            }

            impl<'a> $op<Int64> for &'a Int64 {
                type Output = Int64;

                #[inline]
                fn $f(self, rhs: Int64) -> Int64 {
                    Int64::$inherent(*self, rhs)
                }
            }

            impl<'a, 'b> $op<&'b Int64> for &'a Int64 {
                type Output = Int64;

                #[inline]
                fn $f(self, rhs: &'b Int64) -> Int64 {
                    Int64::$inherent(*self, *rhs)
                }
            }

            impl $op_assign for Int64 {
                #[inline]
                fn $f_assign(&mut self, rhs: Self) {
                    *self = Int64::$inherent(*self, rhs);
                }
            }

            impl<'a> $op_assign<&'a Int64> for Int64 {
                #[inline]
                fn $f_assign(&mut self, rhs: &'a Self) {
                    *self = Int64::$inherent(*self, *rhs);
                }
            }
        )*
    };
}

int64_binop!(
    Add add AddAssign add_assign => add;
    Sub sub SubAssign sub_assign => sub;
    Mul mul MulAssign mul_assign => mul;
    BitAnd bitand BitAndAssign bitand_assign => and;
    BitOr bitor BitOrAssign bitor_assign => or;
    BitXor bitxor BitXorAssign bitxor_assign => xor;
);

impl Neg for Int64 {
    type Output = Int64;

    /// Wrapping negation
    #[inline]
    fn neg(self) -> Self {
        Int64::neg(self)
    }
}

impl<'a> Neg for &'a Int64 {
    type Output = Int64;

    #[inline]
    fn neg(self) -> Int64 {
        Int64::neg(*self)
    }
}

impl Not for Int64 {
    type Output = Int64;

    #[inline]
    fn not(self) -> Self {
        Int64::not(self)
    }
}

impl<'a> Not for &'a Int64 {
    type Output = Int64;

    #[inline]
    fn not(self) -> Int64 {
        Int64::not(*self)
    }
}

impl Shl<u32> for Int64 {
    type Output = Int64;

    /// Shift left, with `s` masked to the range `0..64`
    #[inline]
    fn shl(self, s: u32) -> Self {
        Int64::shl(self, s)
    }
}

impl ShlAssign<u32> for Int64 {
    #[inline]
    fn shl_assign(&mut self, s: u32) {
        *self = Int64::shl(*self, s);
    }
}

impl Shr<u32> for Int64 {
    type Output = Int64;

    /// Arithmetic shift right, with `s` masked to the range `0..64`. Use
    /// [Int64::shr_u] for a logical shift.
    #[inline]
    fn shr(self, s: u32) -> Self {
        Int64::shr(self, s)
    }
}

impl ShrAssign<u32> for Int64 {
    #[inline]
    fn shr_assign(&mut self, s: u32) {
        *self = Int64::shr(*self, s);
    }
}

impl FromStr for Int64 {
    type Err = FormatError;

    /// Parses a decimal string with an optional leading `-`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Int64::from_str_radix(s, 10)
    }
}

impl Int64 {
    /// Writes the digits of `self` in `radix` to `f` with the padding,
    /// alignment, and prefix flags of `f` respected
    fn fmt_radix(
        self,
        f: &mut fmt::Formatter,
        radix: u8,
        upper: bool,
        prefix: &str,
    ) -> fmt::Result {
        let mut buf = [0u8; Int64::MAX_CHARS];
        let (is_nonnegative, len) = if radix == 10 {
            // the digits of the magnitude, the sign is handled by `pad_integral`
            let mag = self.abs();
            let len = mag
                .to_bytes_radix_unsigned(&mut buf, radix, upper)
                .map_err(|_| fmt::Error)?;
            (!self.is_negative(), len)
        } else {
            // like the primitive integers, other radixes show the two's complement bits
            let len = self
                .to_bytes_radix_unsigned(&mut buf, radix, upper)
                .map_err(|_| fmt::Error)?;
            (true, len)
        };
        let s = core::str::from_utf8(&buf[..len]).map_err(|_| fmt::Error)?;
        f.pad_integral(is_nonnegative, prefix, s)
    }
}

impl fmt::Display for Int64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 10, false, "")
    }
}

impl fmt::Debug for Int64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::LowerHex for Int64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 16, false, "0x")
    }
}

impl fmt::UpperHex for Int64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 16, true, "0x")
    }
}

impl fmt::Octal for Int64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 8, false, "0o")
    }
}

impl fmt::Binary for Int64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_radix(f, 2, false, "0b")
    }
}
