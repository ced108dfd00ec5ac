//! Client façade for a node's mini-protocol interface.
//!
//! [`Client`] speaks whichever schema [`ClientOptions::schema`] names and
//! returns the shared vocabulary from `ogmios-types`, `ogmios-chainsync`,
//! `ogmios-txsubmit` and `ogmios-statequery`.

pub mod client;
pub mod config;
pub mod error;
pub mod logging;

pub use client::{signed_cbor_hex, ChainSyncHandler, Client, FollowSummary};
pub use config::ClientOptions;
pub use error::ClientError;
pub use logging::{init_logging, LogFormat};
pub use ogmios_protocol::{Schema, Transport, TransportError};
