use longint_core::longint_internals::*;

use crate::Integer;

/// Dividends are reduced to at most this many significant bits before being
/// converted to an `f64`, which keeps the conversion finite
const DIVIDEND_BITS: usize = 1000;

/// Divisors are reduced to at most this many significant bits, which keeps
/// the conversion exact
const DIVISOR_BITS: usize = 53;

/// # Division
///
/// `quot` and `rem` truncate toward zero, `div` and `modulo` floor toward
/// negative infinity. All of them return `Err(DivisionByZero)` if the divisor
/// is zero.
///
/// ```
/// use longint::{DivisionByZero, Integer};
///
/// let x = Integer::from_i32(-7);
/// let y = Integer::from_i32(2);
/// assert_eq!(x.quot_rem(&y), Ok((Integer::from_i32(-3), Integer::from_i32(-1))));
/// assert_eq!(x.div_mod(&y), Ok((Integer::from_i32(-4), Integer::from_i32(1))));
/// assert_eq!(x.modulo(&Integer::ZERO), Err(DivisionByZero));
/// ```
impl Integer {
    /// The quotient of two positive integers with `self >= div`.
    ///
    /// A double precision estimate of the quotient is taken from the leading
    /// bits of both operands and shifted back into place, then lowered until
    /// multiplying it back does not exceed the remainder. Estimates beyond
    /// 2^48 are lowered in steps of their lower bits, which are not
    /// significant in a double anyway. Every round removes about 48 bits from
    /// the remainder.
    fn quot_positive(&self, div: &Integer) -> Integer {
        let mut quo = Integer::ZERO;
        let mut rem = self.clone();
        let div_shift = div.significant_bits().saturating_sub(DIVISOR_BITS);
        let div_f = div.shr(div_shift).to_f64();
        while rem >= *div {
            let rem_shift = core::cmp::max(
                rem.significant_bits().saturating_sub(DIVIDEND_BITS),
                div_shift,
            );
            let shift = rem_shift - div_shift;
            let mut approx = trunc_f64(rem.shr(rem_shift).to_f64() / div_f);
            if approx < 1.0 {
                approx = 1.0;
            }
            let lb = ceil_log2_f64(approx);
            let delta = if lb <= 48 { 1.0 } else { pow2_f64(lb - 48) };

            let mut approx_quo = Integer::from_f64(approx).shl(shift);
            let mut approx_rem = approx_quo.mul(div);
            while approx_rem > rem {
                approx -= delta;
                approx_quo = Integer::from_f64(approx).shl(shift);
                approx_rem = approx_quo.mul(div);
            }

            if approx_quo.is_zero() {
                approx_quo = Integer::ONE;
                approx_rem = div.clone();
            }

            quo = quo.add(&approx_quo);
            rem = rem.sub(&approx_rem);
        }
        quo
    }

    /// The truncated quotient for a nonzero `div`
    fn quot_nonzero(&self, div: &Integer) -> Integer {
        if self.is_zero() {
            return Integer::ZERO
        }
        if self.is_negative() {
            if div.is_negative() {
                return self.neg().quot_nonzero(&div.neg())
            } else {
                return self.neg().quot_nonzero(div).neg()
            }
        } else if div.is_negative() {
            return self.quot_nonzero(&div.neg()).neg()
        }
        self.quot_positive(div)
    }

    /// Truncated quotient
    pub fn quot(&self, div: &Integer) -> Result<Integer, DivisionByZero> {
        if div.is_zero() {
            return Err(DivisionByZero)
        }
        Ok(self.quot_nonzero(div))
    }

    /// Truncated remainder, `self - self.quot(div) * div`. It is zero or has
    /// the sign of `self`.
    pub fn rem(&self, div: &Integer) -> Result<Integer, DivisionByZero> {
        Ok(self.quot_rem(div)?.1)
    }

    /// Truncated quotient and remainder
    pub fn quot_rem(&self, div: &Integer) -> Result<(Integer, Integer), DivisionByZero> {
        let quo = self.quot(div)?;
        let rem = self.sub(&quo.mul(div));
        Ok((quo, rem))
    }

    /// Floored quotient. This is one less than the truncated quotient when the
    /// signs differ and the division is inexact.
    pub fn div(&self, div: &Integer) -> Result<Integer, DivisionByZero> {
        Ok(self.div_mod(div)?.0)
    }

    /// Floored remainder. It is zero or has the sign of `div`, and equals
    /// `div.add(&self.rem(div)?).rem(div)`.
    pub fn modulo(&self, div: &Integer) -> Result<Integer, DivisionByZero> {
        Ok(self.div_mod(div)?.1)
    }

    /// Floored quotient and remainder
    pub fn div_mod(&self, div: &Integer) -> Result<(Integer, Integer), DivisionByZero> {
        let (quo, rem) = self.quot_rem(div)?;
        if !rem.is_zero() && (rem.is_negative() != div.is_negative()) {
            Ok((quo.dec(), rem.add(div)))
        } else {
            Ok((quo, rem))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn huge_operands() {
        // far beyond the range of `f64`
        let x = Integer::ONE.shl(5000).sub(&Integer::from_i32(3));
        let y = Integer::ONE.shl(2500).inc();
        let (q, r) = x.quot_rem(&y).unwrap();
        assert!(r < y);
        assert!(!r.is_negative());
        assert_eq!(q.mul(&y).add(&r), x);

        let small = Integer::from_i32(7);
        let (q, r) = x.quot_rem(&small).unwrap();
        assert_eq!(q.mul(&small).add(&r), x);
        assert!(r < small);

        // equal widths
        let z = Integer::ONE.shl(3000).dec();
        let w = Integer::ONE.shl(2999).inc();
        assert_eq!(z.quot(&w), Ok(Integer::ONE));
        assert_eq!(w.quot(&z), Ok(Integer::ZERO));
    }
}
