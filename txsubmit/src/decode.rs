//! Submission-result decoding for either schema.
//!
//! Legacy replies nest failures under `result.SubmitFail` (an array of
//! messages or a single object); a `result` that is not an object, like the
//! bare `"SubmitSuccess"`, names no failure. Current replies carry a top-level `error`
//! object, or `result.transaction.id` on success.

use ogmios_protocol::{codec, Schema};
use ogmios_types::DecodeError;
use serde::Deserialize;
use serde_json::value::RawValue;
use std::collections::BTreeMap;
use tracing::debug;

use crate::{SubmissionOutcome, SubmitError, SubmitTxError};

/// Legacy name of the failure field under `result`.
pub const SUBMIT_FAIL: &str = "SubmitFail";

/// Legacy name of the success field under `result`.
pub const SUBMIT_SUCCESS: &str = "SubmitSuccess";

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    result: Option<Box<RawValue>>,
    #[serde(default)]
    error: Option<Box<RawValue>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacySuccess {
    #[serde(default)]
    tx_id: Option<String>,
}

/// Decode a raw submission reply in the given schema.
pub fn decode_submission(schema: Schema, raw: &[u8]) -> Result<SubmissionOutcome, SubmitError> {
    codec::ensure_json(raw)?;
    let envelope: Envelope = serde_json::from_slice(raw)
        .map_err(|_| DecodeError::wrong_type("", "object"))?;

    let outcome = match schema {
        Schema::Legacy => decode_legacy(envelope.result)?,
        Schema::Current => decode_current(envelope)?,
    };
    debug!(
        %schema,
        accepted = outcome.is_accepted(),
        messages = outcome.messages().len(),
        "decoded submission response"
    );
    Ok(outcome)
}

/// First significant character of a raw JSON value.
fn lead(raw: &RawValue) -> Option<char> {
    raw.get().trim_start().chars().next()
}

fn decode_legacy(result: Option<Box<RawValue>>) -> Result<SubmissionOutcome, SubmitError> {
    let Some(result) = result else {
        return Ok(SubmissionOutcome::accepted(None));
    };
    if lead(&result) != Some('{') {
        debug!(result = result.get(), "legacy submission result names no failure");
        return Ok(SubmissionOutcome::accepted(None));
    }
    let fields: BTreeMap<String, Box<RawValue>> = serde_json::from_str(result.get())
        .map_err(|e| DecodeError::invalid("result", e))?;

    let Some(fail) = fields.get(SUBMIT_FAIL) else {
        let transaction_id = legacy_transaction_id(&fields);
        if transaction_id.is_none() {
            debug!("legacy submission accepted without a transaction id");
        }
        return Ok(SubmissionOutcome::accepted(transaction_id));
    };

    match lead(fail) {
        Some('[') => {
            let messages: Vec<Box<RawValue>> = serde_json::from_str(fail.get())
                .map_err(|e| DecodeError::invalid("result.SubmitFail", e))?;
            if messages.is_empty() {
                Ok(SubmissionOutcome::accepted(None))
            } else {
                Ok(SubmissionOutcome::Rejected(SubmitTxError::new(messages)))
            }
        }
        Some('{') => Ok(SubmissionOutcome::Rejected(SubmitTxError::new(vec![
            fail.clone(),
        ]))),
        _ => Err(DecodeError::wrong_type("result.SubmitFail", "array or object").into()),
    }
}

fn legacy_transaction_id(fields: &BTreeMap<String, Box<RawValue>>) -> Option<String> {
    let success = fields.get(SUBMIT_SUCCESS)?;
    serde_json::from_str::<LegacySuccess>(success.get())
        .ok()
        .and_then(|s| s.tx_id)
}

fn decode_current(envelope: Envelope) -> Result<SubmissionOutcome, SubmitError> {
    if let Some(error) = envelope.error {
        return match lead(&error) {
            Some('{') => Ok(SubmissionOutcome::Rejected(SubmitTxError::new(vec![error]))),
            _ => Err(DecodeError::wrong_type("error", "object").into()),
        };
    }

    let result = envelope
        .result
        .ok_or_else(|| DecodeError::missing("result.transaction.id"))?;
    let result: serde_json::Value = serde_json::from_str(result.get())
        .map_err(|e| DecodeError::invalid("result", e))?;
    let id = result
        .get("transaction")
        .and_then(|tx| tx.get("id"))
        .ok_or_else(|| DecodeError::missing("result.transaction.id"))?;
    let id = id
        .as_str()
        .ok_or_else(|| DecodeError::wrong_type("result.transaction.id", "string"))?;
    Ok(SubmissionOutcome::accepted(Some(id.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy(raw: &str) -> Result<SubmissionOutcome, SubmitError> {
        decode_submission(Schema::Legacy, raw.as_bytes())
    }

    fn current(raw: &str) -> Result<SubmissionOutcome, SubmitError> {
        decode_submission(Schema::Current, raw.as_bytes())
    }

    #[test]
    fn not_json_is_malformed() {
        assert!(matches!(legacy("nope"), Err(SubmitError::Malformed(_))));
        assert!(matches!(current("{\"error\":"), Err(SubmitError::Malformed(_))));
    }

    #[test]
    fn legacy_without_submit_fail_is_accepted() {
        let outcome = legacy(r#"{"type":"jsonwsp/response","result":{}}"#).unwrap();
        assert_eq!(outcome, SubmissionOutcome::accepted(None));

        let outcome = legacy(r#"{"result":{"SubmitSuccess":{"txId":"abc"}}}"#).unwrap();
        assert_eq!(outcome.transaction_id(), Some("abc"));
    }

    #[test]
    fn legacy_bare_success_is_accepted() {
        let outcome = legacy(
            r#"{"type":"jsonwsp/response","version":"1.0","servicename":"ogmios","methodname":"SubmitTx","result":"SubmitSuccess"}"#,
        )
        .unwrap();
        assert_eq!(outcome, SubmissionOutcome::accepted(None));
        assert!(outcome.messages().is_empty());
    }

    #[test]
    fn legacy_null_submit_fail_is_decode_error() {
        match legacy(r#"{"result":{"SubmitFail":null}}"#).unwrap_err() {
            SubmitError::Decode(err) => assert_eq!(err.path(), "result.SubmitFail"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn legacy_empty_array_is_accepted() {
        let outcome = legacy(r#"{"result":{"SubmitFail":[]}}"#).unwrap();
        assert!(outcome.is_accepted());
        assert_eq!(outcome.transaction_id(), None);
    }

    #[test]
    fn legacy_array_keeps_every_message() {
        let outcome = legacy(
            r#"{"result":{"SubmitFail":[
                {"badInputs":["a#0"]},
                "noRedeemer",
                {"feeTooSmall":{"actual":1},"badInputs":[]}
            ]}}"#,
        )
        .unwrap();
        assert_eq!(outcome.messages().len(), 3);
        assert_eq!(
            outcome.error_codes().unwrap(),
            vec!["badInputs", "feeTooSmall", "noRedeemer"]
        );
        assert_eq!(outcome.messages()[1].get(), r#""noRedeemer""#);
    }

    #[test]
    fn legacy_single_object_is_one_message() {
        let outcome = legacy(r#"{"result":{"SubmitFail":{"eraMismatch":{}}}}"#).unwrap();
        assert_eq!(outcome.messages().len(), 1);
        assert!(outcome.has_error_code("eraMismatch"));
    }

    #[test]
    fn legacy_scalar_submit_fail_is_decode_error() {
        match legacy(r#"{"result":{"SubmitFail":"oops"}}"#).unwrap_err() {
            SubmitError::Decode(err) => assert_eq!(err.path(), "result.SubmitFail"),
            other => panic!("unexpected error {other:?}"),
        }
        assert!(matches!(
            legacy(r#"{"result":{"SubmitFail":7}}"#),
            Err(SubmitError::Decode(_))
        ));
    }

    #[test]
    fn current_success_reads_transaction_id() {
        let outcome = current(r#"{"jsonrpc":"2.0","method":"submitTransaction","result":{"transaction":{"id":"abc"}}}"#)
            .unwrap();
        assert_eq!(outcome, SubmissionOutcome::accepted(Some("abc".into())));
    }

    #[test]
    fn current_error_object_is_rejected() {
        let outcome = current(
            r#"{"jsonrpc":"2.0","error":{"codeA":{"message":"x"},"codeB":3},"id":null}"#,
        )
        .unwrap();
        assert_eq!(outcome.messages().len(), 1);
        assert_eq!(outcome.error_codes().unwrap(), vec!["codeA", "codeB"]);
    }

    #[test]
    fn current_error_must_be_an_object() {
        match current(r#"{"error":"boom"}"#).unwrap_err() {
            SubmitError::Decode(err) => assert_eq!(err.path(), "error"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn current_missing_or_mistyped_id_is_decode_error() {
        assert_eq!(
            current(r#"{"result":{"transaction":{}}}"#).unwrap_err(),
            SubmitError::Decode(DecodeError::missing("result.transaction.id"))
        );
        assert_eq!(
            current(r#"{"result":{"transaction":{"id":5}}}"#).unwrap_err(),
            SubmitError::Decode(DecodeError::wrong_type("result.transaction.id", "string"))
        );
        assert_eq!(
            current(r#"{"jsonrpc":"2.0"}"#).unwrap_err(),
            SubmitError::Decode(DecodeError::missing("result.transaction.id"))
        );
    }

    #[test]
    fn decoding_twice_is_stable() {
        let raw = r#"{"result":{"SubmitFail":["a","b"]}}"#;
        assert_eq!(legacy(raw).unwrap(), legacy(raw).unwrap());
    }
}
