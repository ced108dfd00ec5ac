//! Local state query.
//!
//! Only the UTxO lookup is modeled. It reuses the primitive ledger types, so
//! both schemas decode into the same [`Utxo`] values.

pub mod error;
pub mod query;
pub mod utxo;

pub use error::StateQueryError;
pub use query::{decode_utxos, utxo};
pub use utxo::Utxo;
