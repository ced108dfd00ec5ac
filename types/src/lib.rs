//! Ledger vocabulary shared by every mini-protocol crate.
//!
//! Downstream code programs against these types regardless of which wire
//! schema the connected node speaks: amounts, chain points, multi-asset
//! values, transactions, and era-tagged blocks.

pub mod amount;
pub mod block;
pub mod error;
pub mod point;
pub mod transaction;
pub mod value;

pub use amount::Amount;
pub use block::{Block, BlockBody, BlockHeader, Era};
pub use error::{DecodeError, ParseAmountError, UnknownEra};
pub use point::{Point, Tip, ORIGIN};
pub use transaction::{Transaction, TxIn, TxOut};
pub use value::{AssetId, Value, ADA, LOVELACE};
