//! Unspent outputs.
//!
//! A [`Utxo`] travels as a two-element array `[TxIn, TxOut]` in the legacy
//! schema; the current schema flattens both halves into one object.

use ogmios_chainsync::current::{CurrentTxIn, CurrentTxOut, TxRef};
use ogmios_types::{TxIn, TxOut};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An unspent output together with the reference that spends it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(TxIn, TxOut)", into = "(TxIn, TxOut)")]
pub struct Utxo {
    pub tx_in: TxIn,
    pub tx_out: TxOut,
}

impl Utxo {
    pub fn new(tx_in: TxIn, tx_out: TxOut) -> Self {
        Self { tx_in, tx_out }
    }
}

impl From<(TxIn, TxOut)> for Utxo {
    fn from((tx_in, tx_out): (TxIn, TxOut)) -> Self {
        Self { tx_in, tx_out }
    }
}

impl From<Utxo> for (TxIn, TxOut) {
    fn from(utxo: Utxo) -> Self {
        (utxo.tx_in, utxo.tx_out)
    }
}

/// One entry of a current-schema `utxo` result.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CurrentUtxo {
    transaction: TxRef,
    index: u32,
    address: String,
    value: BTreeMap<String, BTreeMap<String, ogmios_types::Amount>>,
    #[serde(default)]
    datum: Option<String>,
    #[serde(default)]
    datum_hash: Option<String>,
}

impl From<CurrentUtxo> for Utxo {
    fn from(entry: CurrentUtxo) -> Self {
        let tx_in = CurrentTxIn {
            transaction: entry.transaction,
            index: entry.index,
        };
        let tx_out = CurrentTxOut {
            address: entry.address,
            value: entry.value,
            datum: entry.datum,
            datum_hash: entry.datum_hash,
        };
        Utxo::new(tx_in.into(), tx_out.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ogmios_types::{Amount, Value};
    use serde_json::json;

    #[test]
    fn legacy_pair_roundtrip() {
        let utxo = Utxo::new(
            TxIn::new("hash", 0),
            TxOut {
                address: "address".into(),
                value: Value::from_coins(Amount::from(123u64)),
                datum: Some("datum".into()),
                datum_hash: None,
            },
        );
        let encoded = serde_json::to_value(&utxo).unwrap();
        assert_eq!(
            encoded,
            json!([
                { "txId": "hash", "index": 0 },
                { "address": "address", "value": { "coins": 123 }, "datum": "datum" }
            ])
        );
        let decoded: Utxo = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, utxo);
    }

    #[test]
    fn current_entry_converts() {
        let entry: CurrentUtxo = serde_json::from_value(json!({
            "transaction": { "id": "tx" },
            "index": 2,
            "address": "addr",
            "value": { "ada": { "lovelace": 5 }, "pol": { "tok": 1 } },
            "datumHash": "dh"
        }))
        .unwrap();
        let utxo = Utxo::from(entry);
        assert_eq!(utxo.tx_in, TxIn::new("tx", 2));
        assert_eq!(utxo.tx_out.value.coins(), Amount::from(5u64));
        assert_eq!(utxo.tx_out.value.get("pol", "tok"), Amount::from(1u64));
        assert_eq!(utxo.tx_out.datum_hash.as_deref(), Some("dh"));
    }
}
