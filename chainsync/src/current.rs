//! Current chain-sync response shape (JSON-RPC 2.0).
//!
//! The current schema has no single discriminant: which event a response
//! encodes follows from which optional fields of `result` are present
//! (`error`, `intersection`, `direction`). Those fields are kept as raw JSON
//! here and interpreted by [`crate::translate`], which reports precise field
//! paths when something has the wrong shape.

use ogmios_types::{
    Amount, Block, BlockBody, BlockHeader, DecodeError, Era, Transaction, TxIn, TxOut, Value,
    LOVELACE,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Current method name for finding an intersection.
pub const FIND_INTERSECTION: &str = "findIntersection";

/// Current method name for requesting the next event.
pub const NEXT_BLOCK: &str = "nextBlock";

/// Direction marker of a roll-forward event.
pub const FORWARD: &str = "forward";

/// Direction marker of a roll-backward event.
pub const BACKWARD: &str = "backward";

/// A complete current-schema chain-sync response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentResponse {
    #[serde(default)]
    pub jsonrpc: String,
    #[serde(default)]
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<CurrentResult>,
    /// JSON-RPC level error (e.g. intersection not found, carrying the tip in `data`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
}

/// The `result` object; every field is optional on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intersection: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<serde_json::Value>,
}

/// A block as the current schema encodes it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentBlock {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub era: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ancestor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<u64>,
    #[serde(default)]
    pub transactions: Vec<CurrentTransaction>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentTransaction {
    pub id: String,
    #[serde(default)]
    pub inputs: Vec<CurrentTxIn>,
    #[serde(default)]
    pub outputs: Vec<CurrentTxOut>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<CurrentFee>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// Reference to the transaction that created an output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxRef {
    pub id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentTxIn {
    pub transaction: TxRef,
    pub index: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentTxOut {
    pub address: String,
    /// Currency → asset name → quantity.
    pub value: BTreeMap<String, BTreeMap<String, Amount>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datum: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datum_hash: Option<String>,
}

/// Fee, either `{"lovelace": n}` or `{"ada": {"lovelace": n}}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentFee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lovelace: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ada: Option<BTreeMap<String, Amount>>,
}

impl CurrentFee {
    pub fn from_lovelace(amount: Amount) -> Self {
        Self {
            lovelace: Some(amount),
            ada: None,
        }
    }

    /// The fee in lovelace; an empty fee object reads as zero.
    pub fn lovelace(&self) -> Amount {
        self.lovelace
            .clone()
            .or_else(|| self.ada.as_ref().and_then(|ada| ada.get(LOVELACE).cloned()))
            .unwrap_or_default()
    }
}

impl From<CurrentTxIn> for TxIn {
    fn from(input: CurrentTxIn) -> Self {
        TxIn::new(input.transaction.id, input.index)
    }
}

impl From<CurrentTxOut> for TxOut {
    fn from(output: CurrentTxOut) -> Self {
        TxOut {
            address: output.address,
            value: Value::from_nested(output.value),
            datum: output.datum,
            datum_hash: output.datum_hash,
        }
    }
}

impl From<CurrentTransaction> for Transaction {
    fn from(tx: CurrentTransaction) -> Self {
        if tx.fee.is_none() {
            debug!(tx_id = %tx.id, "transaction carries no fee, reading it as zero");
        }
        Transaction {
            id: tx.id,
            inputs: tx.inputs.into_iter().map(TxIn::from).collect(),
            outputs: tx.outputs.into_iter().map(TxOut::from).collect(),
            fee: tx.fee.map(|fee| fee.lovelace()).unwrap_or_default(),
            metadata: tx.metadata,
        }
    }
}

impl CurrentBlock {
    /// Convert into the era-tagged block model.
    ///
    /// An era string outside the known set is an error, never a default.
    pub fn into_block(self) -> Result<Block, DecodeError> {
        let era: Era = self.era.parse().map_err(|_| DecodeError::UnknownEra {
            path: "era".to_string(),
            era: self.era.clone(),
        })?;
        let body = BlockBody {
            header_hash: self.id,
            header: BlockHeader {
                slot: self.slot,
                block_height: self.height,
                prev_hash: self.ancestor,
            },
            transactions: self.transactions.into_iter().map(Transaction::from).collect(),
        };
        Ok(Block::new(era, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fee_reads_either_spelling() {
        let flat: CurrentFee = serde_json::from_value(json!({ "lovelace": 10 })).unwrap();
        let nested: CurrentFee = serde_json::from_value(json!({ "ada": { "lovelace": 10 } })).unwrap();
        assert_eq!(flat.lovelace(), Amount::from(10u64));
        assert_eq!(nested.lovelace(), Amount::from(10u64));
        assert!(CurrentFee::default().lovelace().is_zero());
    }

    #[test]
    fn missing_fee_reads_as_zero() {
        let tx: CurrentTransaction = serde_json::from_value(json!({
            "id": "t",
            "inputs": [{ "transaction": { "id": "in" }, "index": 1 }],
            "outputs": []
        }))
        .unwrap();
        let tx = Transaction::from(tx);
        assert!(tx.fee.is_zero());
        assert_eq!(tx.inputs, vec![TxIn::new("in", 1)]);
    }

    #[test]
    fn block_converts_with_known_era() {
        let block: CurrentBlock = serde_json::from_value(json!({
            "type": "praos",
            "era": "conway",
            "id": "bid",
            "ancestor": "prev",
            "height": 5,
            "slot": 99,
            "transactions": []
        }))
        .unwrap();
        let block = block.into_block().unwrap();
        assert_eq!(block.era(), Era::Conway);
        assert_eq!(block.body().header_hash.as_deref(), Some("bid"));
        assert_eq!(block.body().header.slot, Some(99));
        assert_eq!(block.body().header.block_height, Some(5));
    }

    #[test]
    fn unknown_era_is_an_error() {
        let block: CurrentBlock =
            serde_json::from_value(json!({ "era": "atlantis", "transactions": [] })).unwrap();
        assert_eq!(
            block.into_block().unwrap_err(),
            DecodeError::UnknownEra {
                path: "era".into(),
                era: "atlantis".into()
            }
        );
    }

    #[test]
    fn output_value_keeps_every_asset() {
        let out: CurrentTxOut = serde_json::from_value(json!({
            "address": "addr",
            "value": {
                "ada": { "lovelace": 2 },
                "policy": { "a": 1, "b": "123456789012345678901234567890" }
            }
        }))
        .unwrap();
        let tx_out = TxOut::from(out);
        assert_eq!(tx_out.value.coins(), Amount::from(2u64));
        assert_eq!(
            tx_out.value.get("policy", "b").to_string(),
            "123456789012345678901234567890"
        );
        assert_eq!(tx_out.value.assets().count(), 2);
    }
}
