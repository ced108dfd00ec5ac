//! Transactions as carried inside chain-sync blocks.
//!
//! Input and output order is part of a transaction's identity: outputs are
//! referenced positionally by later inputs, so both sequences are kept exactly
//! as received.

use serde::{Deserialize, Serialize};

use crate::{Amount, Value};

/// Reference to a previously created output being spent.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TxIn {
    #[serde(rename = "txId")]
    pub tx_hash: String,
    pub index: u32,
}

impl TxIn {
    pub fn new(tx_hash: impl Into<String>, index: u32) -> Self {
        Self {
            tx_hash: tx_hash.into(),
            index,
        }
    }
}

/// A transaction output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxOut {
    pub address: String,
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datum: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datum_hash: Option<String>,
}

/// A transaction: ordered inputs, ordered outputs, and the fee paid.
///
/// Serializes in the legacy shape, with inputs/outputs/fee nested under `body`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LegacyTx", into = "LegacyTx")]
pub struct Transaction {
    pub id: String,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    pub fee: Amount,
    pub metadata: Option<serde_json::Value>,
}

impl Transaction {
    /// Total base currency produced by the outputs.
    pub fn total_output_coins(&self) -> Amount {
        self.outputs
            .iter()
            .fold(Amount::zero(), |acc, out| acc + out.value.coins())
    }
}

#[derive(Clone, Serialize, Deserialize)]
struct LegacyTx {
    id: String,
    body: LegacyTxBody,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<serde_json::Value>,
}

#[derive(Clone, Serialize, Deserialize)]
struct LegacyTxBody {
    #[serde(default)]
    inputs: Vec<TxIn>,
    #[serde(default)]
    outputs: Vec<TxOut>,
    fee: Amount,
}

impl From<LegacyTx> for Transaction {
    fn from(tx: LegacyTx) -> Self {
        Self {
            id: tx.id,
            inputs: tx.body.inputs,
            outputs: tx.body.outputs,
            fee: tx.body.fee,
            metadata: tx.metadata,
        }
    }
}

impl From<Transaction> for LegacyTx {
    fn from(tx: Transaction) -> Self {
        Self {
            id: tx.id,
            body: LegacyTxBody {
                inputs: tx.inputs,
                outputs: tx.outputs,
                fee: tx.fee,
            },
            metadata: tx.metadata,
        }
    }
}
