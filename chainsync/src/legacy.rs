//! Legacy chain-sync response shape.
//!
//! This is the single data model downstream consumers program against: every
//! current-schema response is translated into it (see [`crate::translate`]).
//!
//! ```text
//! {"type": "jsonwsp/response", "methodname": "RequestNext",
//!  "result": {"RollForward": {"block": {...}, "tip": {...}}}}
//! ```

use ogmios_types::{Block, Point, Tip};
use serde::{Deserialize, Serialize};

/// Legacy method name for finding an intersection.
pub const FIND_INTERSECT: &str = "FindIntersect";

/// Legacy method name for requesting the next event.
pub const REQUEST_NEXT: &str = "RequestNext";

/// Legacy response envelope type.
pub const RESPONSE_TYPE: &str = "jsonwsp/response";

/// One chain-sync event. Exactly one variant is populated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChainSyncEvent {
    IntersectionFound {
        point: Point,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tip: Option<Tip>,
    },
    IntersectionNotFound {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tip: Option<Tip>,
    },
    RollBackward {
        point: Point,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tip: Option<Tip>,
    },
    RollForward {
        block: Block,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tip: Option<Tip>,
    },
}

impl ChainSyncEvent {
    /// The wire name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::IntersectionFound { .. } => "IntersectionFound",
            Self::IntersectionNotFound { .. } => "IntersectionNotFound",
            Self::RollBackward { .. } => "RollBackward",
            Self::RollForward { .. } => "RollForward",
        }
    }

    /// The point carried by an intersection or roll-backward event.
    pub fn point(&self) -> Option<&Point> {
        match self {
            Self::IntersectionFound { point, .. } | Self::RollBackward { point, .. } => Some(point),
            _ => None,
        }
    }

    pub fn block(&self) -> Option<&Block> {
        match self {
            Self::RollForward { block, .. } => Some(block),
            _ => None,
        }
    }

    pub fn tip(&self) -> Option<&Tip> {
        match self {
            Self::IntersectionFound { tip, .. }
            | Self::IntersectionNotFound { tip }
            | Self::RollBackward { tip, .. }
            | Self::RollForward { tip, .. } => tip.as_ref(),
        }
    }

    /// Known variant names, for shape checks before decoding.
    pub(crate) const KINDS: [&'static str; 4] = [
        "IntersectionFound",
        "IntersectionNotFound",
        "RollBackward",
        "RollForward",
    ];
}

/// A complete legacy chain-sync response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyResponse {
    #[serde(rename = "type", default = "default_type")]
    pub kind: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_service")]
    pub servicename: String,
    #[serde(default)]
    pub methodname: String,
    pub result: ChainSyncEvent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflection: Option<serde_json::Value>,
}

fn default_type() -> String {
    RESPONSE_TYPE.to_string()
}

fn default_version() -> String {
    ogmios_protocol::version::LEGACY_VERSION.to_string()
}

fn default_service() -> String {
    ogmios_protocol::payload::SERVICE_NAME.to_string()
}

impl LegacyResponse {
    pub fn new(methodname: impl Into<String>, result: ChainSyncEvent) -> Self {
        Self {
            kind: default_type(),
            version: default_version(),
            servicename: default_service(),
            methodname: methodname.into(),
            result,
            reflection: None,
        }
    }

    pub fn with_reflection(mut self, reflection: Option<serde_json::Value>) -> Self {
        self.reflection = reflection;
        self
    }
}
