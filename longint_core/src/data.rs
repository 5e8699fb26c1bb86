mod int64;
pub use int64::Int64;

#[cfg(feature = "serde_support")]
mod serde;
mod traits;
