//! Exact 64 bit integers for runtimes without them
//!
//! This is the core library of the `longint` system of crates. This crate is
//! strictly `no-std` and `no-alloc`, not even requiring an allocator to be
//! compiled. This crate supplies the `Int64` two's complement type and the
//! IEEE-754 decompositions that `longint_ext` builds its arbitrary precision
//! bridge on.
//!
//! All arithmetic on `Int64` is wrapping like Rust's integers. The only
//! fallible operations are divisions, which return `DivisionByZero`, and
//! string conversions, which return `FormatError`.

#![no_std]
// not const and tends to be longer
#![allow(clippy::manual_range_contains)]
// the `const` versions of the operations need to be inherent
#![allow(clippy::should_implement_trait)]

pub use longint_internals;
pub use longint_internals::{DivisionByZero, FormatError};

pub(crate) mod data;
pub use data::Int64;

mod logic;
pub use logic::{decode_f32, decode_f64, Decoded};

pub mod prelude {
    pub use crate::{decode_f32, decode_f64, Decoded, DivisionByZero, FormatError, Int64};
}
