use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("unsupported schema: {0}")]
    UnsupportedSchema(String),

    #[error("message too large: {size} > {max}")]
    MessageTooLarge { size: usize, max: usize },

    #[error("malformed payload: {0}")]
    Malformed(String),

    #[error("failed to encode request: {0}")]
    Encode(String),
}

/// Failure reported by the transport collaborator.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("connection closed")]
    Closed,

    #[error("request {method} timed out")]
    Timeout { method: String },

    #[error("transport error: {0}")]
    Other(String),
}
