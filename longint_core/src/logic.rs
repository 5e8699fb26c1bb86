mod bitwise;
mod casting;
mod cmp;
mod const_str;
mod div;
mod ieee;
mod mul;
#[cfg(feature = "rand_support")]
mod rand;
mod sum;

pub use ieee::{decode_f32, decode_f64, Decoded};
