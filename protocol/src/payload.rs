//! Request envelopes for both wire schemas.

use serde_json::{json, Value};

use crate::version::{JSONRPC_VERSION, LEGACY_VERSION};
use crate::Schema;

/// Service name carried by every legacy request.
pub const SERVICE_NAME: &str = "ogmios";

/// A mini-protocol call before it is wrapped in an envelope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub method: &'static str,
    pub params: Value,
}

impl Request {
    pub fn new(method: &'static str, params: Value) -> Self {
        Self { method, params }
    }

    /// Wrap in the envelope `schema` expects.
    pub fn into_envelope(self, schema: Schema, id: Option<Value>) -> Value {
        request(schema, self.method, self.params, id)
    }
}

/// Legacy JSON-WSP request.
///
/// `mirror` is echoed back by the node in the response's `reflection` field.
pub fn legacy_request(method: &str, args: Value, mirror: Option<Value>) -> Value {
    let mut payload = json!({
        "type": "jsonwsp/request",
        "version": LEGACY_VERSION,
        "servicename": SERVICE_NAME,
        "methodname": method,
        "args": args,
    });
    if let Some(mirror) = mirror {
        payload["mirror"] = mirror;
    }
    payload
}

/// Current JSON-RPC 2.0 request.
pub fn current_request(method: &str, params: Value, id: Option<Value>) -> Value {
    let mut payload = json!({
        "jsonrpc": JSONRPC_VERSION,
        "method": method,
    });
    if !params.is_null() {
        payload["params"] = params;
    }
    if let Some(id) = id {
        payload["id"] = id;
    }
    payload
}

/// Wrap `method` and `params` in the envelope `schema` expects.
pub fn request(schema: Schema, method: &str, params: Value, id: Option<Value>) -> Value {
    match schema {
        Schema::Legacy => legacy_request(method, params, id),
        Schema::Current => current_request(method, params, id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_envelope_shape() {
        let payload = legacy_request("SubmitTx", json!({ "bytes": "84a3" }), Some(json!(7)));
        assert_eq!(
            payload,
            json!({
                "type": "jsonwsp/request",
                "version": "1.0",
                "servicename": "ogmios",
                "methodname": "SubmitTx",
                "args": { "bytes": "84a3" },
                "mirror": 7,
            })
        );
    }

    #[test]
    fn current_envelope_shape() {
        let payload = current_request("nextBlock", Value::Null, Some(json!("req-1")));
        assert_eq!(
            payload,
            json!({ "jsonrpc": "2.0", "method": "nextBlock", "id": "req-1" })
        );
    }

    #[test]
    fn request_dispatches_on_schema() {
        let legacy = request(Schema::Legacy, "RequestNext", json!({}), None);
        assert_eq!(legacy["methodname"], "RequestNext");
        assert!(legacy.get("mirror").is_none());

        let current = request(Schema::Current, "nextBlock", json!({}), None);
        assert_eq!(current["method"], "nextBlock");
        assert_eq!(current["params"], json!({}));
    }

    #[test]
    fn request_into_envelope() {
        let req = Request::new("findIntersection", json!({ "points": ["origin"] }));
        let envelope = req.into_envelope(Schema::Current, Some(json!(1)));
        assert_eq!(envelope["params"]["points"][0], "origin");
        assert_eq!(envelope["id"], 1);
    }
}
