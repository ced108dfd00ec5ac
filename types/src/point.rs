//! Chain points and tips.
//!
//! A point is either the chain origin or a specific slot + block hash. Both
//! wire schemas spell the origin as the bare string `"origin"`; they differ in
//! the name of the hash field (`hash` in the legacy schema, `id` in the
//! current one). Decoding accepts either spelling, encoding produces the
//! legacy spelling unless [`Point::to_current_json`] is asked for.

use serde::ser::SerializeMap;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use crate::error::DecodeError;

/// Reserved token for the start of the chain.
pub const ORIGIN: &str = "origin";

/// A position on the chain.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Point {
    /// Start of chain: no slot, no hash.
    Origin,
    /// A specific block.
    Specific { slot: u64, hash: String },
}

impl Point {
    pub fn specific(slot: u64, hash: impl Into<String>) -> Self {
        Self::Specific {
            slot,
            hash: hash.into(),
        }
    }

    pub fn is_origin(&self) -> bool {
        matches!(self, Self::Origin)
    }

    pub fn slot(&self) -> Option<u64> {
        match self {
            Self::Origin => None,
            Self::Specific { slot, .. } => Some(*slot),
        }
    }

    pub fn hash(&self) -> Option<&str> {
        match self {
            Self::Origin => None,
            Self::Specific { hash, .. } => Some(hash),
        }
    }

    /// Decode a point from either wire schema.
    ///
    /// Error paths are relative to `raw`; callers prefix them with
    /// [`DecodeError::within`].
    pub fn from_json(raw: &Value) -> Result<Self, DecodeError> {
        match raw {
            Value::String(s) if s == ORIGIN => Ok(Self::Origin),
            Value::String(s) => Err(DecodeError::InvalidPoint {
                path: String::new(),
                reason: format!("unexpected token {s:?}"),
            }),
            Value::Object(fields) => {
                let slot = match fields.get("slot") {
                    None => return Err(DecodeError::missing("slot")),
                    Some(v) => v
                        .as_u64()
                        .ok_or_else(|| DecodeError::wrong_type("slot", "unsigned integer"))?,
                };
                let (key, hash) = match (fields.get("hash"), fields.get("id")) {
                    (Some(h), _) => ("hash", h),
                    (None, Some(id)) => ("id", id),
                    (None, None) => return Err(DecodeError::missing("hash")),
                };
                let hash = hash
                    .as_str()
                    .ok_or_else(|| DecodeError::wrong_type(key, "string"))?;
                Ok(Self::specific(slot, hash))
            }
            other => Err(DecodeError::InvalidPoint {
                path: String::new(),
                reason: format!("expected \"origin\" or {{slot, hash}}, got {other}"),
            }),
        }
    }

    /// Encode in the current schema's spelling (`{slot, id}`).
    pub fn to_current_json(&self) -> Value {
        match self {
            Self::Origin => Value::String(ORIGIN.to_string()),
            Self::Specific { slot, hash } => serde_json::json!({ "slot": slot, "id": hash }),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Origin => f.write_str(ORIGIN),
            Self::Specific { slot, hash } => write!(f, "{slot}/{hash}"),
        }
    }
}

impl Serialize for Point {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Origin => serializer.serialize_str(ORIGIN),
            Self::Specific { slot, hash } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("slot", slot)?;
                map.serialize_entry("hash", hash)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Point {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Self::from_json(&raw).map_err(de::Error::custom)
    }
}

/// The node's current chain tip: a point plus, when known, its block height.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tip {
    pub point: Point,
    pub height: Option<u64>,
}

impl Tip {
    pub fn origin() -> Self {
        Self {
            point: Point::Origin,
            height: None,
        }
    }

    /// Decode a tip from either wire schema (`blockNo` legacy, `height` current).
    pub fn from_json(raw: &Value) -> Result<Self, DecodeError> {
        let point = Point::from_json(raw)?;
        let height = match raw.get("blockNo").or_else(|| raw.get("height")) {
            None | Some(Value::Null) => None,
            Some(v) => Some(
                v.as_u64()
                    .ok_or_else(|| DecodeError::wrong_type("height", "unsigned integer"))?,
            ),
        };
        Ok(Self { point, height })
    }
}

impl Serialize for Tip {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.point {
            Point::Origin => serializer.serialize_str(ORIGIN),
            Point::Specific { slot, hash } => {
                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry("slot", slot)?;
                map.serialize_entry("hash", hash)?;
                if let Some(height) = self.height {
                    map.serialize_entry("blockNo", &height)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Tip {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Self::from_json(&raw).map_err(de::Error::custom)
    }
}
