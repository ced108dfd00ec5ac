//! Wire protocol: schema versions, request envelopes, the payload codec and the transport seam.

pub mod codec;
pub mod error;
pub mod payload;
pub mod transport;
pub mod version;

pub use error::{ProtocolError, TransportError};
pub use payload::Request;
pub use transport::Transport;
pub use version::Schema;
