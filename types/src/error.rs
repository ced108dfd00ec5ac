//! Decode errors shared across the mini-protocol crates.

use thiserror::Error;

/// A required field was missing or had the wrong shape.
///
/// Every variant names the offending field as a dotted path from the root of
/// the payload (e.g. `result.block.era`), so a failure can be traced back to
/// the exact spot in the node's reply.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("missing field `{path}`")]
    MissingField { path: String },

    #[error("field `{path}`: expected {expected}")]
    WrongType { path: String, expected: &'static str },

    #[error("field `{path}`: invalid amount literal {literal:?}")]
    InvalidAmount { path: String, literal: String },

    #[error("field `{path}`: unknown era {era:?}")]
    UnknownEra { path: String, era: String },

    #[error("field `{path}`: invalid point: {reason}")]
    InvalidPoint { path: String, reason: String },

    #[error("field `{path}`: {message}")]
    Invalid { path: String, message: String },
}

impl DecodeError {
    pub fn missing(path: impl Into<String>) -> Self {
        Self::MissingField { path: path.into() }
    }

    pub fn wrong_type(path: impl Into<String>, expected: &'static str) -> Self {
        Self::WrongType {
            path: path.into(),
            expected,
        }
    }

    pub fn invalid(path: impl Into<String>, message: impl ToString) -> Self {
        Self::Invalid {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// The dotted path of the field that failed to decode.
    pub fn path(&self) -> &str {
        match self {
            Self::MissingField { path }
            | Self::WrongType { path, .. }
            | Self::InvalidAmount { path, .. }
            | Self::UnknownEra { path, .. }
            | Self::InvalidPoint { path, .. }
            | Self::Invalid { path, .. } => path,
        }
    }

    /// Prefix the path with a parent segment.
    pub fn within(self, parent: &str) -> Self {
        let join = |path: String| {
            if path.is_empty() {
                parent.to_string()
            } else {
                format!("{parent}.{path}")
            }
        };
        match self {
            Self::MissingField { path } => Self::MissingField { path: join(path) },
            Self::WrongType { path, expected } => Self::WrongType {
                path: join(path),
                expected,
            },
            Self::InvalidAmount { path, literal } => Self::InvalidAmount {
                path: join(path),
                literal,
            },
            Self::UnknownEra { path, era } => Self::UnknownEra {
                path: join(path),
                era,
            },
            Self::InvalidPoint { path, reason } => Self::InvalidPoint {
                path: join(path),
                reason,
            },
            Self::Invalid { path, message } => Self::Invalid {
                path: join(path),
                message,
            },
        }
    }
}

/// A string could not be parsed as a base-10 integer literal.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid amount literal {0:?}")]
pub struct ParseAmountError(pub String);

/// An era name outside the fixed set of protocol eras.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown era {0:?}")]
pub struct UnknownEra(pub String);
