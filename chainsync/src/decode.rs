//! Raw payload decoding for either schema.
//!
//! Whatever the node speaks, callers get back a [`LegacyResponse`].

use ogmios_protocol::{codec, Schema};
use ogmios_types::DecodeError;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::current::CurrentResponse;
use crate::legacy::{ChainSyncEvent, LegacyResponse};
use crate::translate::translate;
use crate::ChainSyncError;

/// Decode a raw chain-sync reply in the given schema.
pub fn decode_response(schema: Schema, raw: &[u8]) -> Result<LegacyResponse, ChainSyncError> {
    let value = codec::decode_value(raw)?;
    decode_value(schema, &value)
}

/// Decode an already-parsed chain-sync reply in the given schema.
pub fn decode_value(schema: Schema, value: &Value) -> Result<LegacyResponse, ChainSyncError> {
    let response = match schema {
        Schema::Legacy => decode_legacy(value)?,
        Schema::Current => {
            let current =
                CurrentResponse::deserialize(value).map_err(|e| DecodeError::invalid("", e))?;
            translate(&current)?
        }
    };
    debug!(%schema, event = response.result.kind(), "decoded chain-sync response");
    Ok(response)
}

fn decode_legacy(value: &Value) -> Result<LegacyResponse, ChainSyncError> {
    if let Some(fault) = value.get("fault") {
        return Err(ChainSyncError::UnrecognizedResponseShape(format!(
            "node reported a fault: {fault}"
        )));
    }
    let result = value
        .get("result")
        .ok_or_else(|| DecodeError::missing("result"))?;
    let fields = result
        .as_object()
        .ok_or_else(|| DecodeError::wrong_type("result", "object"))?;

    let mut keys = fields.keys();
    match (keys.next(), keys.next()) {
        (Some(kind), None) if ChainSyncEvent::KINDS.iter().any(|k| *k == kind.as_str()) => {}
        _ => {
            let found: Vec<&str> = fields.keys().map(String::as_str).collect();
            return Err(ChainSyncError::UnrecognizedResponseShape(format!(
                "expected exactly one of {:?} under `result`, found {found:?}",
                ChainSyncEvent::KINDS
            )));
        }
    }

    LegacyResponse::deserialize(value)
        .map_err(|e| DecodeError::invalid("result", e).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ogmios_types::Point;

    #[test]
    fn not_json_is_malformed() {
        assert!(matches!(
            decode_response(Schema::Current, b"{oops"),
            Err(ChainSyncError::Malformed(_))
        ));
        assert!(matches!(
            decode_response(Schema::Legacy, b""),
            Err(ChainSyncError::Malformed(_))
        ));
    }

    #[test]
    fn current_and_legacy_agree() {
        let current = br#"{"jsonrpc":"2.0","method":"findIntersection",
            "result":{"intersection":{"slot":5,"id":"h"},"tip":{"slot":8,"id":"t","height":2}}}"#;
        let legacy = br#"{"type":"jsonwsp/response","version":"1.0","servicename":"ogmios",
            "methodname":"FindIntersect",
            "result":{"IntersectionFound":{"point":{"slot":5,"hash":"h"},"tip":{"slot":8,"hash":"t","blockNo":2}}}}"#;

        let a = decode_response(Schema::Current, current).unwrap();
        let b = decode_response(Schema::Legacy, legacy).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.result.point(), Some(&Point::specific(5, "h")));
    }

    #[test]
    fn legacy_unknown_variant_is_unrecognized() {
        let raw = br#"{"result":{"RollSideways":{}}}"#;
        assert!(matches!(
            decode_response(Schema::Legacy, raw),
            Err(ChainSyncError::UnrecognizedResponseShape(_))
        ));

        let two = br#"{"result":{"RollBackward":{"point":"origin"},"RollForward":{}}}"#;
        assert!(matches!(
            decode_response(Schema::Legacy, two),
            Err(ChainSyncError::UnrecognizedResponseShape(_))
        ));
    }

    #[test]
    fn legacy_fault_is_surfaced() {
        let raw = br#"{"type":"jsonwsp/fault","fault":{"code":"client","string":"bad"}}"#;
        assert!(matches!(
            decode_response(Schema::Legacy, raw),
            Err(ChainSyncError::UnrecognizedResponseShape(_))
        ));
    }

    #[test]
    fn legacy_wrong_field_shape_is_decode_error() {
        let raw = br#"{"result":{"RollBackward":{"point":42}}}"#;
        match decode_response(Schema::Legacy, raw).unwrap_err() {
            ChainSyncError::Decode(err) => assert_eq!(err.path(), "result"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn current_wrong_field_type_is_decode_error() {
        let raw = br#"{"jsonrpc":"2.0","result":{"direction":5}}"#;
        assert!(matches!(
            decode_response(Schema::Current, raw),
            Err(ChainSyncError::Decode(_))
        ));
    }
}
