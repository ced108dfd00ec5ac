use ogmios_chainsync::ChainSyncError;
use ogmios_protocol::TransportError;
use ogmios_statequery::StateQueryError;
use ogmios_txsubmit::SubmitError;
use ogmios_types::Tip;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("config error: {0}")]
    Config(String),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("invalid signed transaction: {0}")]
    InvalidTransaction(String),

    #[error("chain-sync error: {0}")]
    ChainSync(#[from] ChainSyncError),

    #[error("submission error: {0}")]
    Submit(#[from] SubmitError),

    #[error("state-query error: {0}")]
    StateQuery(#[from] StateQueryError),

    #[error("no intersection with the node's chain")]
    IntersectionNotFound { tip: Option<Tip> },

    #[error("unexpected chain-sync event {0} for this request")]
    UnexpectedEvent(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
