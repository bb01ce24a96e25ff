//! Serde support. Values serialize as decimal strings; plain JSON integers are accepted when
//! deserializing.

use super::{mode::Mode, Int128};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Helper type to parse decimal strings and native integers.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringifiedInt128 {
    String(String),
    Unsigned(u64),
    Signed(i64),
}

impl<M: Mode> Serialize for Int128<M> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Int128 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match StringifiedInt128::deserialize(deserializer)? {
            StringifiedInt128::String(s) => s.parse().map_err(serde::de::Error::custom),
            StringifiedInt128::Unsigned(n) => Ok(Int128::from(n)),
            StringifiedInt128::Signed(n) => Ok(Int128::from(n)),
        }
    }
}
