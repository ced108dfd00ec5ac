//! Local transaction submission.
//!
//! [`decode_submission`] turns either schema's reply into one
//! [`SubmissionOutcome`]: accepted (with the transaction id when the node
//! names it) or rejected with the node's raw messages.

pub mod decode;
pub mod error;
pub mod outcome;
pub mod request;

pub use decode::decode_submission;
pub use error::SubmitError;
pub use outcome::{SubmissionOutcome, SubmitTxError};
pub use request::submit_tx;
