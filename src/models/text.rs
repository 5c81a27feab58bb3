use std::fmt;
use std::ops::Deref;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;

use crate::encoding::try_recode;

/// A string field after encoding recovery.
///
/// Deserializing a `RecoveredText` runs the raw JSON string through
/// [`try_recode`], so every string leaf of the model is recovered at parse
/// time and an unrecoverable string fails the parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecoveredText(String);

impl RecoveredText {
    /// Wraps text that is already correctly decoded.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for RecoveredText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RecoveredText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecoveredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for RecoveredText {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RecoveredText {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<&str> for RecoveredText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl<'de> Deserialize<'de> for RecoveredText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RecoveredTextVisitor;

        impl Visitor<'_> for RecoveredTextVisitor {
            type Value = RecoveredText;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string")
            }

            fn visit_str<E>(self, raw: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                try_recode(raw)
                    .map(|text| RecoveredText(text.into_owned()))
                    .map_err(|e| E::custom(format!("unrecoverable string {:?}: {}", raw, e)))
            }
        }

        deserializer.deserialize_str(RecoveredTextVisitor)
    }
}

/// A value whose structure the model deliberately leaves open.
///
/// Fields of this type are carried verbatim and never validated; their
/// strings are not recovered either.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Unvalidated(pub serde_json::Value);

/// Names of keys a record did not declare, in document order.
///
/// Only the names are kept; the values are skipped while parsing. A non-empty
/// set makes the owning record fail schema validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnknownKeys(Vec<String>);

impl UnknownKeys {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn insert(&mut self, name: impl Into<String>) {
        self.0.push(name.into());
    }
}

impl<'de> Deserialize<'de> for UnknownKeys {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct UnknownKeysVisitor;

        impl<'de> Visitor<'de> for UnknownKeysVisitor {
            type Value = UnknownKeys;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of undeclared keys")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut keys = Vec::new();
                while let Some(key) = map.next_key::<String>()? {
                    map.next_value::<IgnoredAny>()?;
                    keys.push(key);
                }
                Ok(UnknownKeys(keys))
            }
        }

        deserializer.deserialize_map(UnknownKeysVisitor)
    }
}
