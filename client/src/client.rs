//! Schema-agnostic client over a [`Transport`].
//!
//! Every call builds the request for the configured schema, hands it to the
//! transport, and decodes the raw reply into the shared vocabulary. Callers
//! never see which schema the node speaks.

use ogmios_chainsync::{request as chainsync_request, ChainSyncEvent};
use ogmios_protocol::{Request, Schema, Transport};
use ogmios_statequery::Utxo;
use ogmios_txsubmit::SubmissionOutcome;
use ogmios_types::{Point, Tip};
use serde::Deserialize;
use std::ops::ControlFlow;
use tracing::{debug, info, trace};

use crate::{ClientError, ClientOptions};

/// Text envelope of a signed transaction, as written by wallet tooling.
#[derive(Deserialize)]
struct TextEnvelope {
    #[serde(rename = "cborHex", alias = "CborHex")]
    cbor_hex: String,
}

/// Receives events while [`Client::follow`] walks the chain.
pub trait ChainSyncHandler {
    /// Handle one event; `Break` stops following.
    fn on_event(&mut self, event: &ChainSyncEvent) -> ControlFlow<()>;

    /// Called every `save_interval` roll-forwards with the latest point.
    fn on_checkpoint(&mut self, _point: &Point) {}
}

/// Where [`Client::follow`] stopped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FollowSummary {
    /// Events handed to the handler, the intersection excluded.
    pub events: u64,
    /// Last point the chain was known to be at.
    pub point: Option<Point>,
    /// Latest tip the node reported.
    pub tip: Option<Tip>,
}

pub struct Client<T: Transport> {
    transport: T,
    options: ClientOptions,
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T, options: ClientOptions) -> Result<Self, ClientError> {
        let options = options.resolved();
        options.validate()?;
        Ok(Self { transport, options })
    }

    pub fn schema(&self) -> Schema {
        self.options.schema
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn call(&self, request: Request) -> Result<Vec<u8>, ClientError> {
        trace!(method = request.method, schema = %self.schema(), "sending request");
        let raw = self.transport.send_request(request.method, request.params)?;
        trace!(method = request.method, size = raw.len(), "received reply");
        Ok(raw)
    }

    /// Find the best intersection between `points` and the node's chain.
    pub fn find_intersection(&self, points: &[Point]) -> Result<ChainSyncEvent, ClientError> {
        let raw = self.call(chainsync_request::find_intersection(self.schema(), points))?;
        Ok(ogmios_chainsync::decode_response(self.schema(), &raw)?.result)
    }

    /// Request the next chain-sync event.
    pub fn next_block(&self) -> Result<ChainSyncEvent, ClientError> {
        let raw = self.call(chainsync_request::next_block(self.schema()))?;
        Ok(ogmios_chainsync::decode_response(self.schema(), &raw)?.result)
    }

    /// Submit a signed transaction.
    ///
    /// `signed` is either the CBOR as hex text or a JSON text envelope
    /// carrying it under `cborHex`.
    pub fn submit_tx(&self, signed: &[u8]) -> Result<SubmissionOutcome, ClientError> {
        let cbor_hex = signed_cbor_hex(signed)?;
        let raw = self.call(ogmios_txsubmit::submit_tx(self.schema(), &cbor_hex))?;
        let outcome = ogmios_txsubmit::decode_submission(self.schema(), &raw)?;
        match &outcome {
            SubmissionOutcome::Accepted { transaction_id } => {
                info!(tx_id = transaction_id.as_deref().unwrap_or("?"), "transaction accepted")
            }
            SubmissionOutcome::Rejected(err) => {
                info!(messages = err.messages().len(), "transaction rejected")
            }
        }
        Ok(outcome)
    }

    /// Unspent outputs locked by any of `addresses`.
    pub fn query_utxo(&self, addresses: &[String]) -> Result<Vec<Utxo>, ClientError> {
        let raw = self.call(ogmios_statequery::utxo(self.schema(), addresses))?;
        Ok(ogmios_statequery::decode_utxos(self.schema(), &raw)?)
    }

    /// Intersect at `points`, then feed every following event to `handler`
    /// until it breaks.
    pub fn follow<H: ChainSyncHandler>(
        &self,
        points: &[Point],
        handler: &mut H,
    ) -> Result<FollowSummary, ClientError> {
        let mut summary = FollowSummary::default();
        match self.find_intersection(points)? {
            ChainSyncEvent::IntersectionFound { point, tip } => {
                info!(%point, "intersection found");
                summary.point = Some(point);
                summary.tip = tip;
            }
            ChainSyncEvent::IntersectionNotFound { tip } => {
                return Err(ClientError::IntersectionNotFound { tip });
            }
            other => return Err(ClientError::UnexpectedEvent(other.kind())),
        }

        let mut since_checkpoint = 0u64;
        loop {
            let event = self.next_block()?;
            summary.events += 1;
            if let Some(tip) = event.tip() {
                summary.tip = Some(tip.clone());
            }
            match &event {
                ChainSyncEvent::RollForward { block, .. } => {
                    let header = &block.body().header;
                    if let (Some(slot), Some(hash)) = (header.slot, &block.body().header_hash) {
                        summary.point = Some(Point::specific(slot, hash.clone()));
                    }
                    since_checkpoint += 1;
                }
                ChainSyncEvent::RollBackward { point, .. } => {
                    debug!(%point, "rolled back");
                    summary.point = Some(point.clone());
                }
                other => return Err(ClientError::UnexpectedEvent(other.kind())),
            }

            let flow = handler.on_event(&event);

            if since_checkpoint >= self.options.save_interval {
                since_checkpoint = 0;
                if let Some(point) = &summary.point {
                    info!(%point, events = summary.events, "chain-sync checkpoint");
                    handler.on_checkpoint(point);
                }
            }
            if flow.is_break() {
                return Ok(summary);
            }
        }
    }
}

/// Extract and validate the CBOR hex of a signed transaction.
///
/// Accepts bare hex text or a JSON text envelope with a `cborHex` field.
pub fn signed_cbor_hex(signed: &[u8]) -> Result<String, ClientError> {
    let text = std::str::from_utf8(signed)
        .map_err(|_| ClientError::InvalidTransaction("not UTF-8 text".into()))?
        .trim();
    let cbor_hex = if text.starts_with('{') {
        serde_json::from_str::<TextEnvelope>(text)
            .map_err(|e| ClientError::InvalidTransaction(format!("text envelope: {e}")))?
            .cbor_hex
    } else {
        text.to_string()
    };
    if cbor_hex.is_empty() {
        return Err(ClientError::InvalidTransaction("empty transaction".into()));
    }
    hex::decode(&cbor_hex).map_err(|e| ClientError::InvalidTransaction(e.to_string()))?;
    Ok(cbor_hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_tx_from_hex_or_envelope() {
        assert_eq!(signed_cbor_hex(b"84a300\n").unwrap(), "84a300");
        let envelope = br#"{"type":"Tx BabbageEra","description":"","cborHex":"84a3"}"#;
        assert_eq!(signed_cbor_hex(envelope).unwrap(), "84a3");
    }

    #[test]
    fn signed_tx_must_be_hex() {
        assert!(matches!(
            signed_cbor_hex(b"xyz"),
            Err(ClientError::InvalidTransaction(_))
        ));
        assert!(matches!(
            signed_cbor_hex(b"abc"),
            Err(ClientError::InvalidTransaction(_))
        ));
        assert!(matches!(
            signed_cbor_hex(br#"{"description":"no cbor"}"#),
            Err(ClientError::InvalidTransaction(_))
        ));
        assert!(matches!(
            signed_cbor_hex(b"  "),
            Err(ClientError::InvalidTransaction(_))
        ));
    }
}
