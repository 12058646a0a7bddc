//! Record ID - store-assigned positive 64-bit identifier
//!
//! Every persisted row (event, attendance, user) is keyed by a `BIGSERIAL`
//! column. The store hands out the value; the domain only carries it around.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identifier of a stored record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RecordId(i64);

impl RecordId {
    /// Create a new RecordId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Ids handed out by the store start at 1
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.0 >= 1
    }

    /// Parse from string representation, rejecting non-positive values
    pub fn parse(s: &str) -> Result<Self, RecordIdParseError> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|_| RecordIdParseError::InvalidFormat)?;
        Self::try_from_i64(value)
    }

    fn try_from_i64(value: i64) -> Result<Self, RecordIdParseError> {
        if value < 1 {
            return Err(RecordIdParseError::NotPositive);
        }
        Ok(Self(value))
    }
}

/// Error when parsing a RecordId
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RecordIdParseError {
    #[error("invalid id format")]
    InvalidFormat,

    #[error("id must be a positive integer")]
    NotPositive,
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<RecordId> for i64 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl std::str::FromStr for RecordId {
    type Err = RecordIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordId::parse(s)
    }
}

impl Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

// Accepts integers and numeric strings ("12"), both must be >= 1
impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct RecordIdVisitor;

        impl Visitor<'_> for RecordIdVisitor {
            type Value = RecordId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a positive integer id")
            }

            fn visit_i64<E>(self, value: i64) -> Result<RecordId, E>
            where
                E: de::Error,
            {
                RecordId::try_from_i64(value).map_err(de::Error::custom)
            }

            fn visit_u64<E>(self, value: u64) -> Result<RecordId, E>
            where
                E: de::Error,
            {
                let value = i64::try_from(value).map_err(de::Error::custom)?;
                self.visit_i64(value)
            }

            fn visit_str<E>(self, value: &str) -> Result<RecordId, E>
            where
                E: de::Error,
            {
                RecordId::parse(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(RecordIdVisitor)
    }
}
