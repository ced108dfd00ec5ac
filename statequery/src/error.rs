use ogmios_protocol::ProtocolError;
use ogmios_types::DecodeError;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StateQueryError {
    #[error("malformed state-query payload: {0}")]
    Malformed(String),

    #[error("state-query decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The node answered with a query failure instead of a result.
    #[error("query failed: {0}")]
    QueryFailed(String),
}

impl From<ProtocolError> for StateQueryError {
    fn from(e: ProtocolError) -> Self {
        StateQueryError::Malformed(e.to_string())
    }
}
