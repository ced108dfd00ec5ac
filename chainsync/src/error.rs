use ogmios_protocol::ProtocolError;
use ogmios_types::DecodeError;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ChainSyncError {
    /// The payload is not JSON at all.
    #[error("malformed chain-sync payload: {0}")]
    Malformed(String),

    /// A required field is missing or has the wrong shape.
    #[error("chain-sync decode error: {0}")]
    Decode(#[from] DecodeError),

    /// None of the known event discriminants matched.
    #[error("unrecognized chain-sync response shape: {0}")]
    UnrecognizedResponseShape(String),
}

impl From<ProtocolError> for ChainSyncError {
    fn from(e: ProtocolError) -> Self {
        ChainSyncError::Malformed(e.to_string())
    }
}
