//! Chain-sync mini-protocol.
//!
//! The node speaks either the legacy or the current schema; consumers only
//! ever see [`ChainSyncEvent`] / [`LegacyResponse`]. Current-schema replies are
//! normalized by [`translate`], which infers the event from field presence in
//! a fixed precedence order (error > intersection > direction).

pub mod current;
pub mod decode;
pub mod error;
pub mod legacy;
pub mod request;
pub mod translate;

pub use current::CurrentResponse;
pub use decode::decode_response;
pub use error::ChainSyncError;
pub use legacy::{ChainSyncEvent, LegacyResponse};
pub use translate::{decode_point, translate, translate_event};
