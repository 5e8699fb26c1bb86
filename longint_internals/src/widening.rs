use crate::{DDigit, Digit, BITS};

/// Computes x + y + z and returns the widened result as a tuple. `z` is
/// intended to be a carry of 0 or 1, but any value works.
#[inline]
pub const fn widen_add(x: Digit, y: Digit, z: Digit) -> (Digit, Digit) {
    let (sum, carry0) = x.overflowing_add(y);
    let (sum, carry1) = sum.overflowing_add(z);
    (sum, (carry0 as Digit) + (carry1 as Digit))
}

/// Computes x - y - z and returns the difference with the borrow count
#[inline]
pub const fn widen_sub(x: Digit, y: Digit, z: Digit) -> (Digit, Digit) {
    let (dif, borrow0) = x.overflowing_sub(y);
    let (dif, borrow1) = dif.overflowing_sub(z);
    (dif, (borrow0 as Digit) + (borrow1 as Digit))
}

/// Computes (x * y) + z. This cannot overflow, because it returns the value
/// widened into a tuple, where the first element is the least significant part
/// of the integer and the second is the most significant.
#[inline]
pub const fn widen_mul_add(x: Digit, y: Digit, z: Digit) -> (Digit, Digit) {
    let tmp = (x as DDigit).wrapping_mul(y as DDigit).wrapping_add(z as DDigit);
    (tmp as Digit, tmp.wrapping_shr(BITS as u32) as Digit)
}
