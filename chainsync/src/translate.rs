//! Current → legacy chain-sync translation.
//!
//! A current-schema response is classified by field precedence, in this
//! fixed order:
//!
//! 1. an error marker (top-level `error` or `result.error`) → `IntersectionNotFound`;
//!    it decides the outcome even when other fields are present;
//! 2. `result.intersection` → `IntersectionFound`;
//! 3. `result.direction == "backward"` → `RollBackward`;
//! 4. `result.direction == "forward"` → `RollForward`.
//!
//! Anything else is [`ChainSyncError::UnrecognizedResponseShape`]. The
//! translator never guesses and never returns a partially populated event.

use ogmios_types::{DecodeError, Point, Tip};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::current::{CurrentBlock, CurrentResponse, BACKWARD, FIND_INTERSECTION, FORWARD, NEXT_BLOCK};
use crate::legacy::{ChainSyncEvent, LegacyResponse, FIND_INTERSECT, REQUEST_NEXT};
use crate::ChainSyncError;

/// The event a current-schema response encodes, with borrowed views of the
/// fields that event needs.
#[derive(Debug)]
enum Shape<'a> {
    IntersectionNotFound { tip: Option<&'a Value> },
    IntersectionFound { point: &'a Value, tip: Option<&'a Value> },
    RollBackward { point: Option<&'a Value>, tip: Option<&'a Value> },
    RollForward { block: Option<&'a Value>, tip: Option<&'a Value> },
}

fn classify(response: &CurrentResponse) -> Result<Shape<'_>, ChainSyncError> {
    if let Some(error) = &response.error {
        let tip = response
            .result
            .as_ref()
            .and_then(|r| r.tip.as_ref())
            .or_else(|| error.get("data").and_then(|d| d.get("tip")));
        return Ok(Shape::IntersectionNotFound { tip });
    }

    let result = response.result.as_ref().ok_or_else(|| {
        ChainSyncError::UnrecognizedResponseShape("neither `result` nor `error` present".into())
    })?;
    let tip = result.tip.as_ref();

    if let Some(error) = &result.error {
        let tip = tip.or_else(|| error.get("data").and_then(|d| d.get("tip")));
        return Ok(Shape::IntersectionNotFound { tip });
    }
    if let Some(point) = &result.intersection {
        return Ok(Shape::IntersectionFound { point, tip });
    }
    match result.direction.as_deref() {
        Some(BACKWARD) => Ok(Shape::RollBackward {
            point: result.point.as_ref(),
            tip,
        }),
        Some(FORWARD) => Ok(Shape::RollForward {
            block: result.block.as_ref(),
            tip,
        }),
        Some(other) => Err(ChainSyncError::UnrecognizedResponseShape(format!(
            "unknown direction {other:?}"
        ))),
        None => Err(ChainSyncError::UnrecognizedResponseShape(
            "result carries no error, intersection or direction".into(),
        )),
    }
}

/// Decode a chain point: the `"origin"` token or `{slot, id|hash}`.
pub fn decode_point(raw: &Value) -> Result<Point, DecodeError> {
    Point::from_json(raw)
}

fn decode_tip(raw: Option<&Value>, path: &str) -> Result<Option<Tip>, DecodeError> {
    match raw {
        None | Some(Value::Null) => Ok(None),
        Some(raw) => Tip::from_json(raw).map(Some).map_err(|e| e.within(path)),
    }
}

/// Translate a current-schema response into the event it encodes.
pub fn translate_event(response: &CurrentResponse) -> Result<ChainSyncEvent, ChainSyncError> {
    let event = match classify(response)? {
        Shape::IntersectionNotFound { tip } => ChainSyncEvent::IntersectionNotFound {
            tip: decode_tip(tip, "result.tip")?,
        },
        Shape::IntersectionFound { point, tip } => ChainSyncEvent::IntersectionFound {
            point: decode_point(point).map_err(|e| e.within("result.intersection"))?,
            tip: decode_tip(tip, "result.tip")?,
        },
        Shape::RollBackward { point, tip } => {
            let point = point.ok_or_else(|| DecodeError::missing("result.point"))?;
            ChainSyncEvent::RollBackward {
                point: decode_point(point).map_err(|e| e.within("result.point"))?,
                tip: decode_tip(tip, "result.tip")?,
            }
        }
        Shape::RollForward { block, tip } => {
            let raw = block.ok_or_else(|| DecodeError::missing("result.block"))?;
            let block = CurrentBlock::deserialize(raw)
                .map_err(|e| DecodeError::invalid("result.block", e))?
                .into_block()
                .map_err(|e| e.within("result.block"))?;
            ChainSyncEvent::RollForward {
                block,
                tip: decode_tip(tip, "result.tip")?,
            }
        }
    };
    debug!(event = event.kind(), method = %response.method, "translated chain-sync response");
    Ok(event)
}

/// Translate a current-schema response into the legacy response shape.
///
/// The request id is carried over as the legacy `reflection`.
pub fn translate(response: &CurrentResponse) -> Result<LegacyResponse, ChainSyncError> {
    let event = translate_event(response)?;
    Ok(LegacyResponse::new(legacy_method_name(&response.method), event)
        .with_reflection(response.id.clone()))
}

/// Map a current method name onto its legacy counterpart.
pub fn legacy_method_name(method: &str) -> &str {
    match method {
        FIND_INTERSECTION => FIND_INTERSECT,
        NEXT_BLOCK => REQUEST_NEXT,
        other => other,
    }
}
