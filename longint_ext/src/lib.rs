//! Arbitrary precision integers with a fixed 64 bit bridge
//!
//! This crate contains `Integer`, an immutable arbitrary precision two's
//! complement integer, and `Word64`, the unsigned 64 bit discipline layered on
//! top of it. Together with `Int64` from `longint_core` they form the integer
//! engine that hosts without exact large integers call into. This crate is
//! separate because it requires support for `alloc`. It is intended to be used
//! through the main `longint` crate, available with the "alloc" feature.

#![no_std]
// not const and tends to be longer
#![allow(clippy::manual_range_contains)]
// We are using special indexing everywhere
#![allow(clippy::needless_range_loop)]
// the fallible and `const` versions of the operations need to be inherent
#![allow(clippy::should_implement_trait)]
#![deny(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[doc(hidden)]
pub use longint_core;
#[doc(hidden)]
pub use longint_core::longint_internals;
mod bridge;
mod ieee;
mod integer;
#[cfg(feature = "rand_support")]
mod rand;
#[cfg(feature = "serde_support")]
mod serde;
mod strings;
mod word64;
pub use integer::Integer;
pub use longint_core::{decode_f32, decode_f64, Decoded, DivisionByZero, FormatError, Int64};
pub use word64::Word64;

/// Everything needed to use the integer engine
pub mod prelude {
    pub use longint_core::prelude::*;

    pub use crate::{Integer, Word64};
}
