use const_fn::const_fn;
use longint_internals::*;

use crate::Int64;

/// # Division
///
/// `quot` and `rem` truncate toward zero, `div` and `modulo` floor toward
/// negative infinity. All of them return `Err(DivisionByZero)` if the divisor
/// is zero.
///
/// Just like the primitive `i64::wrapping_div`, `MIN_VALUE / -1` overflows
/// back to `MIN_VALUE` with a remainder of zero.
///
/// ```
/// use longint::{DivisionByZero, Int64};
///
/// let x = Int64::from_i32(-7);
/// let y = Int64::from_i32(2);
/// assert_eq!(x.quot_rem(y), Ok((Int64::from_i32(-3), Int64::from_i32(-1))));
/// assert_eq!(x.div_mod(y), Ok((Int64::from_i32(-4), Int64::from_i32(1))));
/// assert_eq!(x.quot(Int64::ZERO), Err(DivisionByZero));
/// ```
impl Int64 {
    /// The quotient for a nonzero `div`.
    ///
    /// Nonnegative operands run an approximate-and-correct loop: a double
    /// precision estimate of the quotient is taken and then lowered until
    /// multiplying it back does not exceed the remainder. Estimates beyond
    /// 2^48 are lowered in steps of their lower bits, which are not
    /// significant in a double anyway.
    #[const_fn(cfg(feature = "const_support"))]
    const fn quot_nonzero(self, div: Self) -> Self {
        if self.is_zero() {
            return Self::ZERO
        }

        if self.is_min() {
            if div.const_eq(Self::ONE) || div.const_eq(Self::NEG_ONE) {
                return Self::MIN_VALUE
            } else if div.is_min() {
                return Self::ONE
            }
            // `MIN_VALUE` cannot be negated, so divide half of it and double the
            // quotient, then correct with a division of what is left over
            let approx = self.shr(1).quot_nonzero(div).shl(1);
            if approx.is_zero() {
                return if div.is_negative() {
                    Self::ONE
                } else {
                    Self::NEG_ONE
                }
            }
            let rem = self.sub(div.mul(approx));
            return approx.add(rem.quot_nonzero(div))
        } else if div.is_min() {
            return Self::ZERO
        }

        if self.is_negative() {
            if div.is_negative() {
                return self.neg().quot_nonzero(div.neg())
            } else {
                return self.neg().quot_nonzero(div).neg()
            }
        } else if div.is_negative() {
            return self.quot_nonzero(div.neg()).neg()
        }

        let mut quo = Self::ZERO;
        let mut rem = self;
        let div_f = div.to_f64();
        while rem.ige(div) {
            let mut approx = trunc_f64(rem.to_f64() / div_f);
            if approx < 1.0 {
                approx = 1.0;
            }
            let lb = ceil_log2_f64(approx);
            let delta = if lb <= 48 { 1.0 } else { pow2_f64(lb - 48) };

            let mut approx_quo = Self::from_f64(approx);
            let mut approx_rem = approx_quo.mul(div);
            // a negative product means the estimate overflowed
            while approx_rem.is_negative() || approx_rem.igt(rem) {
                approx -= delta;
                approx_quo = Self::from_f64(approx);
                approx_rem = approx_quo.mul(div);
            }

            if approx_quo.is_zero() {
                approx_quo = Self::ONE;
                approx_rem = div;
            }

            quo = quo.add(approx_quo);
            rem = rem.sub(approx_rem);
        }
        quo
    }

    /// Truncated quotient
    #[const_fn(cfg(feature = "const_support"))]
    pub const fn quot(self, div: Self) -> Result<Self, DivisionByZero> {
        if div.is_zero() {
            return Err(DivisionByZero)
        }
        Ok(self.quot_nonzero(div))
    }

    /// Truncated remainder, which has the sign of `self` if nonzero
    #[const_fn(cfg(feature = "const_support"))]
    pub const fn rem(self, div: Self) -> Result<Self, DivisionByZero> {
        match self.quot_rem(div) {
            Ok((_, rem)) => Ok(rem),
            Err(e) => Err(e),
        }
    }

    /// Truncated quotient and remainder
    #[const_fn(cfg(feature = "const_support"))]
    pub const fn quot_rem(self, div: Self) -> Result<(Self, Self), DivisionByZero> {
        if div.is_zero() {
            return Err(DivisionByZero)
        }
        let quo = self.quot_nonzero(div);
        Ok((quo, self.sub(quo.mul(div))))
    }

    /// Floored quotient
    #[const_fn(cfg(feature = "const_support"))]
    pub const fn div(self, div: Self) -> Result<Self, DivisionByZero> {
        match self.div_mod(div) {
            Ok((quo, _)) => Ok(quo),
            Err(e) => Err(e),
        }
    }

    /// Floored remainder, which has the sign of `div` if nonzero
    #[const_fn(cfg(feature = "const_support"))]
    pub const fn modulo(self, div: Self) -> Result<Self, DivisionByZero> {
        match self.div_mod(div) {
            Ok((_, rem)) => Ok(rem),
            Err(e) => Err(e),
        }
    }

    /// Floored quotient and remainder. The truncated results are adjusted by
    /// one unit when the remainder is nonzero and its sign differs from the
    /// divisor.
    #[const_fn(cfg(feature = "const_support"))]
    pub const fn div_mod(self, div: Self) -> Result<(Self, Self), DivisionByZero> {
        let (quo, rem) = match self.quot_rem(div) {
            Ok(x) => x,
            Err(e) => return Err(e),
        };
        if !rem.is_zero() && (rem.is_negative() != div.is_negative()) {
            Ok((quo.sub(Self::ONE), rem.add(div)))
        } else {
            Ok((quo, rem))
        }
    }
}
