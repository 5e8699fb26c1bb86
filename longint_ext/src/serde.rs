use alloc::string::String;
use core::fmt;

use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::{Integer, Word64};

/// A `serde_support` impl
impl Serialize for Integer {
    /// Serializes `self` as a decimal string, which is platform independent
    /// and readable by hosts that cannot represent large integers
    ///
    /// ```
    /// // Example using the `ron` crate
    /// use longint::Integer;
    /// use ron::to_string;
    ///
    /// let x = Integer::ONE.shl(70).neg();
    /// assert_eq!(to_string(&x).unwrap(), "\"-1180591620717411303424\"");
    /// ```
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s: String = self
            .to_string_radix(10)
            .map_err(<S::Error as serde::ser::Error>::custom)?;
        serializer.serialize_str(&s)
    }
}

struct IntegerVisitor;

impl<'de> Visitor<'de> for IntegerVisitor {
    type Value = Integer;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a decimal integer string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Integer::from_str_radix(v, 10).map_err(de::Error::custom)
    }
}

/// A `serde_support` impl
impl<'de> Deserialize<'de> for Integer {
    /// Deserializes from a decimal string
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(IntegerVisitor)
    }
}

/// A `serde_support` impl
impl Serialize for Word64 {
    /// Serializes `self` as a `u64`
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.to_u64())
    }
}

/// A `serde_support` impl
impl<'de> Deserialize<'de> for Word64 {
    /// Deserializes from a `u64`
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Word64::from_u64(u64::deserialize(deserializer)?))
    }
}
