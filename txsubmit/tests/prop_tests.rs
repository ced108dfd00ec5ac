use proptest::prelude::*;
use serde_json::json;

use ogmios_protocol::Schema;
use ogmios_txsubmit::decode_submission;

proptest! {
    /// N legacy messages come back as N messages, and the codes are their sorted union.
    #[test]
    fn legacy_messages_and_codes(codes in prop::collection::vec("[a-z][a-zA-Z]{0,12}", 1..8)) {
        let messages: Vec<_> = codes
            .iter()
            .enumerate()
            .map(|(i, code)| if i % 2 == 0 { json!(code) } else { json!({ code.as_str(): {} }) })
            .collect();
        let raw = serde_json::to_vec(&json!({ "result": { "SubmitFail": messages } })).unwrap();

        let outcome = decode_submission(Schema::Legacy, &raw).unwrap();
        prop_assert!(!outcome.is_accepted());
        prop_assert_eq!(outcome.messages().len(), codes.len());

        let mut expected = codes.clone();
        expected.sort();
        expected.dedup();
        prop_assert_eq!(outcome.error_codes().unwrap(), expected);
        for code in &codes {
            prop_assert!(outcome.has_error_code(code));
        }
    }

    /// Any transaction id on a current success reply is returned verbatim.
    #[test]
    fn current_success_id(id in "[0-9a-f]{64}") {
        let raw = serde_json::to_vec(&json!({
            "jsonrpc": "2.0",
            "method": "submitTransaction",
            "result": { "transaction": { "id": id } }
        })).unwrap();
        let outcome = decode_submission(Schema::Current, &raw).unwrap();
        prop_assert_eq!(outcome.transaction_id(), Some(id.as_str()));
    }

    /// Decoding is a pure function of the bytes.
    #[test]
    fn decoding_is_idempotent(keys in prop::collection::btree_set("[a-z]{1,10}", 1..5)) {
        let error: serde_json::Map<String, serde_json::Value> =
            keys.iter().map(|k| (k.clone(), json!({ "detail": k }))).collect();
        let raw = serde_json::to_vec(&json!({ "jsonrpc": "2.0", "error": error })).unwrap();

        let first = decode_submission(Schema::Current, &raw).unwrap();
        let second = decode_submission(Schema::Current, &raw).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.error_codes().unwrap(), keys.into_iter().collect::<Vec<_>>());
    }
}
