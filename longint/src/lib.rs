//! This crate compiles all the interfaces of `longint_core` and
//! `longint_ext`.
//!
//! `Int64` is always available and never allocates. `Integer` and `Word64`
//! require the "alloc" feature.

#![cfg_attr(not(feature = "std"), no_std)]

pub use longint_core::prelude::*;
#[cfg(feature = "alloc")]
pub use longint_ext::prelude::*;

pub mod prelude {
    pub use crate::*;
}
