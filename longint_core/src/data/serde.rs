use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Int64;

/// A `serde_support` impl
impl Serialize for Int64 {
    /// Serializes `self` as an `i64`
    ///
    /// ```
    /// // Example using the `ron` crate
    /// use longint::Int64;
    /// use ron::to_string;
    ///
    /// assert_eq!(to_string(&Int64::MIN_VALUE).unwrap(), "-9223372036854775808");
    /// ```
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.to_i64())
    }
}

/// A `serde_support` impl
impl<'de> Deserialize<'de> for Int64 {
    /// Deserializes from an `i64`
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Int64::from_i64(i64::deserialize(deserializer)?))
    }
}
