//! Serde support for identifiers and their parsed form.
//!
//! - [`as_pikaid`] validates identifier strings stored in plain `String`
//!   fields.
//! - [`crate::ParsedPikaid`] serializes as `{"timestamp": <RFC 3339>,
//!   "randomness": <hex>}`.

use crate::{Error, ParsedPikaid, is_valid};
use serde::ser::SerializeStruct;
use serde::{Deserializer, Serialize, Serializer};

/// `#[serde(with = "pikaid::serde::as_pikaid")]` for `String` fields that
/// must hold a syntactically valid identifier.
pub mod as_pikaid {
    use super::*;

    pub fn serialize<S>(id: &str, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if !is_valid(id) {
            return Err(serde::ser::Error::custom(Error::InvalidFormat {
                len: id.len(),
            }));
        }
        s.serialize_str(id)
    }

    pub fn deserialize<'de, D>(d: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PikaidVisitor;

        impl serde::de::Visitor<'_> for PikaidVisitor {
            type Value = String;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a 26 character lowercase base36 pikaid")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                if !is_valid(v) {
                    return Err(E::custom(Error::InvalidFormat { len: v.len() }));
                }
                Ok(v.to_owned())
            }
        }

        d.deserialize_str(PikaidVisitor)
    }
}

impl Serialize for ParsedPikaid {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = s.serialize_struct("ParsedPikaid", 2)?;
        state.serialize_field("timestamp", &self.timestamp())?;
        state.serialize_field("randomness", self.randomness())?;
        state.end()
    }
}
