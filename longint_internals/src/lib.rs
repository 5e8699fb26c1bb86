//! This crate contains common developer utilities for crates within the
//! `longint` system, such as the limb primitives, the error types, and macros
//! that needed a separate crate because `#[macro_export]` unconditionally
//! causes macros to be publicly accessible. Most users should never have to
//! interact with this directly, everything important is reexported by
//! `longint`.

#![cfg_attr(not(feature = "std"), no_std)]
// not const and tends to be longer
#![allow(clippy::manual_range_contains)]
#![allow(clippy::needless_range_loop)]

mod error;
mod float;
mod macros;
mod radix;
mod widening;

pub use error::{DivisionByZero, FormatError};
pub use float::*;
pub use radix::*;
pub use widening::{widen_add, widen_mul_add, widen_sub};

/// The limb type of every integer in this system of crates. The host runtimes
/// this is designed for exchange integers as 32 bit words, so unlike a general
/// purpose bigint library this is not register sized.
pub type Digit = u32;

/// Signed version of `Digit`
pub type IDigit = i32;

/// Twice the width of a `Digit`, used as the accumulator for widening
/// operations
pub type DDigit = u64;

/// Bitwidth of a `Digit`
pub const BITS: usize = Digit::BITS as usize;

/// Number of bits in a `usize`
pub const USIZE_BITS: usize = usize::BITS as usize;

/// Maximum value of a `Digit`, also the sign-extension word of negative
/// integers
pub const MAX: Digit = Digit::MAX;

/// Returns the number of extra bits given a shift of `s`
#[inline]
pub const fn extra_u(s: usize) -> usize {
    s & (BITS - 1)
}

/// Returns the number of _whole_ digits given a shift of `s`
#[inline]
pub const fn digits_u(s: usize) -> usize {
    s.wrapping_shr(BITS.trailing_zeros())
}

/// Returns the sign-extension word implied by the most significant bit of `x`
#[inline]
pub const fn sign_of(x: Digit) -> Digit {
    if (x as IDigit) < 0 {
        MAX
    } else {
        0
    }
}
