//! UTxO-by-address queries for either schema.

use ogmios_protocol::{codec, Request, Schema};
use ogmios_types::DecodeError;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::utxo::{CurrentUtxo, Utxo};
use crate::StateQueryError;

/// Legacy state-query method.
pub const QUERY: &str = "Query";

/// Current UTxO query method.
pub const QUERY_UTXO: &str = "queryLedgerState/utxo";

/// Ask for every unspent output locked by one of `addresses`.
pub fn utxo(schema: Schema, addresses: &[String]) -> Request {
    match schema {
        Schema::Legacy => Request::new(QUERY, json!({ "query": { "utxo": addresses } })),
        Schema::Current => Request::new(QUERY_UTXO, json!({ "addresses": addresses })),
    }
}

/// Decode a raw `utxo` reply in the given schema.
pub fn decode_utxos(schema: Schema, raw: &[u8]) -> Result<Vec<Utxo>, StateQueryError> {
    let value = codec::decode_value(raw)?;
    let utxos = match schema {
        Schema::Legacy => decode_legacy(&value)?,
        Schema::Current => decode_current(&value)?,
    };
    debug!(%schema, count = utxos.len(), "decoded utxo query response");
    Ok(utxos)
}

fn decode_legacy(value: &Value) -> Result<Vec<Utxo>, StateQueryError> {
    if let Some(fault) = value.get("fault") {
        return Err(StateQueryError::QueryFailed(fault.to_string()));
    }
    let result = value
        .get("result")
        .ok_or_else(|| DecodeError::missing("result"))?;
    if !result.is_array() {
        // e.g. "QueryUnavailableInCurrentEra" or {"eraMismatch": ...}
        return Err(StateQueryError::QueryFailed(result.to_string()));
    }
    Ok(Vec::<Utxo>::deserialize(result).map_err(|e| DecodeError::invalid("result", e))?)
}

fn decode_current(value: &Value) -> Result<Vec<Utxo>, StateQueryError> {
    if let Some(error) = value.get("error") {
        return Err(StateQueryError::QueryFailed(error.to_string()));
    }
    let result = value
        .get("result")
        .ok_or_else(|| DecodeError::missing("result"))?;
    let entries = Vec::<CurrentUtxo>::deserialize(result)
        .map_err(|e| DecodeError::invalid("result", e))?;
    Ok(entries.into_iter().map(Utxo::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ogmios_types::{Amount, TxIn};

    #[test]
    fn utxo_params_per_schema() {
        let addresses = vec!["addr1".to_string(), "addr2".to_string()];

        let legacy = utxo(Schema::Legacy, &addresses);
        assert_eq!(legacy.method, "Query");
        assert_eq!(legacy.params, json!({ "query": { "utxo": ["addr1", "addr2"] } }));

        let current = utxo(Schema::Current, &addresses);
        assert_eq!(current.method, "queryLedgerState/utxo");
        assert_eq!(current.params, json!({ "addresses": ["addr1", "addr2"] }));
    }

    #[test]
    fn both_schemas_decode_to_the_same_utxos() {
        let legacy = br#"{"type":"jsonwsp/response","result":[
            [{"txId":"tx","index":1},{"address":"addr","value":{"coins":7,"assets":{"pol.tok":3}}}]
        ]}"#;
        let current = br#"{"jsonrpc":"2.0","result":[
            {"transaction":{"id":"tx"},"index":1,"address":"addr",
             "value":{"ada":{"lovelace":7},"pol":{"tok":3}}}
        ]}"#;

        let a = decode_utxos(Schema::Legacy, legacy).unwrap();
        let b = decode_utxos(Schema::Current, current).unwrap();
        assert_eq!(a, b);
        assert_eq!(a[0].tx_in, TxIn::new("tx", 1));
        assert_eq!(a[0].tx_out.value.get("pol", "tok"), Amount::from(3u64));
    }

    #[test]
    fn node_failures_are_query_errors() {
        assert!(matches!(
            decode_utxos(Schema::Legacy, br#"{"result":"QueryUnavailableInCurrentEra"}"#),
            Err(StateQueryError::QueryFailed(_))
        ));
        assert!(matches!(
            decode_utxos(Schema::Current, br#"{"jsonrpc":"2.0","error":{"code":2000}}"#),
            Err(StateQueryError::QueryFailed(_))
        ));
    }

    #[test]
    fn bad_entries_are_decode_errors() {
        assert!(matches!(
            decode_utxos(Schema::Current, br#"{"result":[{"index":0}]}"#),
            Err(StateQueryError::Decode(_))
        ));
        assert!(matches!(
            decode_utxos(Schema::Current, b"[}"),
            Err(StateQueryError::Malformed(_))
        ));
    }
}
