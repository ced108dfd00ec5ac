use ogmios_protocol::ProtocolError;
use ogmios_types::DecodeError;
use thiserror::Error;

use crate::SubmitTxError;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The payload is not JSON at all.
    #[error("malformed submission payload: {0}")]
    Malformed(String),

    /// A required field is missing or has the wrong shape.
    #[error("submission decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The node rejected the transaction.
    #[error(transparent)]
    Rejected(SubmitTxError),

    /// At least one rejection message is neither a string nor an object.
    #[error("failed to extract error codes: {}", join_failures(.0))]
    ErrorCodes(Vec<String>),
}

fn join_failures(failures: &[String]) -> String {
    failures.join("; ")
}

impl From<ProtocolError> for SubmitError {
    fn from(e: ProtocolError) -> Self {
        SubmitError::Malformed(e.to_string())
    }
}

impl From<SubmitTxError> for SubmitError {
    fn from(e: SubmitTxError) -> Self {
        SubmitError::Rejected(e)
    }
}
