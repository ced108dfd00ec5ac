//! Submission requests for either schema.

use ogmios_protocol::{Request, Schema};
use serde_json::json;

/// Legacy submission method.
pub const SUBMIT_TX: &str = "SubmitTx";

/// Current submission method.
pub const SUBMIT_TRANSACTION: &str = "submitTransaction";

/// Submit an already-signed transaction given as CBOR hex.
pub fn submit_tx(schema: Schema, cbor_hex: &str) -> Request {
    match schema {
        Schema::Legacy => Request::new(SUBMIT_TX, json!({ "bytes": cbor_hex })),
        Schema::Current => Request::new(
            SUBMIT_TRANSACTION,
            json!({ "transaction": { "cbor": cbor_hex } }),
        ),
    }
}
