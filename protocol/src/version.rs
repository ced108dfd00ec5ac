//! Wire schema versions.
//!
//! The node has spoken two incompatible JSON schemas over time: the legacy
//! JSON-WSP envelope and the current JSON-RPC 2.0 envelope.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ProtocolError;

/// JSON-WSP version string carried by legacy envelopes.
pub const LEGACY_VERSION: &str = "1.0";

/// JSON-RPC version string carried by current envelopes.
pub const JSONRPC_VERSION: &str = "2.0";

/// Which wire schema the connected node speaks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Schema {
    /// JSON-WSP envelopes, `{"type": "jsonwsp/response", "result": ...}`.
    Legacy,
    /// JSON-RPC 2.0 envelopes, `{"jsonrpc": "2.0", "result": ...}`.
    #[default]
    Current,
}

impl Schema {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Current => "current",
        }
    }

    /// Infer the schema from a decoded response envelope, if it says.
    pub fn detect(envelope: &serde_json::Value) -> Option<Schema> {
        if envelope.get("jsonrpc").and_then(|v| v.as_str()) == Some(JSONRPC_VERSION) {
            return Some(Self::Current);
        }
        match envelope.get("type").and_then(|v| v.as_str()) {
            Some(kind) if kind.starts_with("jsonwsp/") => Some(Self::Legacy),
            _ => None,
        }
    }
}

impl FromStr for Schema {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" | "v5" => Ok(Self::Legacy),
            "current" | "v6" => Ok(Self::Current),
            other => Err(ProtocolError::UnsupportedSchema(other.to_string())),
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
