//! Payload codec: bytes in, JSON out, and back.

use serde::de::IgnoredAny;
use tracing::trace;

use crate::ProtocolError;

/// Maximum payload size in bytes.
pub const MAX_MESSAGE_SIZE: usize = 16 * 1024 * 1024; // 16 MiB

/// Encode a request for transmission.
pub fn encode(message: &impl serde::Serialize) -> Result<Vec<u8>, ProtocolError> {
    let bytes = serde_json::to_vec(message).map_err(|e| ProtocolError::Encode(e.to_string()))?;
    if bytes.len() > MAX_MESSAGE_SIZE {
        return Err(ProtocolError::MessageTooLarge {
            size: bytes.len(),
            max: MAX_MESSAGE_SIZE,
        });
    }
    trace!(size = bytes.len(), "encoded request");
    Ok(bytes)
}

/// Check that `data` is a single well-formed JSON document.
pub fn ensure_json(data: &[u8]) -> Result<(), ProtocolError> {
    if data.len() > MAX_MESSAGE_SIZE {
        return Err(ProtocolError::MessageTooLarge {
            size: data.len(),
            max: MAX_MESSAGE_SIZE,
        });
    }
    serde_json::from_slice::<IgnoredAny>(data)
        .map(|_| ())
        .map_err(|e| ProtocolError::Malformed(e.to_string()))
}

/// Decode raw bytes into an untyped JSON document.
pub fn decode_value(data: &[u8]) -> Result<serde_json::Value, ProtocolError> {
    trace!(size = data.len(), "decoding payload");
    ensure_json(data)?;
    serde_json::from_slice(data).map_err(|e| ProtocolError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_non_json() {
        assert!(matches!(
            ensure_json(b"not json"),
            Err(ProtocolError::Malformed(_))
        ));
        assert!(matches!(
            ensure_json(b"{\"a\": 1} trailing"),
            Err(ProtocolError::Malformed(_))
        ));
        assert!(ensure_json(b"  {\"a\": [1, 2]}  ").is_ok());
    }

    #[test]
    fn encode_decode_value() {
        let msg = json!({ "jsonrpc": "2.0", "method": "nextBlock" });
        let bytes = encode(&msg).unwrap();
        assert_eq!(decode_value(&bytes).unwrap(), msg);
    }

    #[test]
    fn rejects_oversized_payload() {
        let big = vec![b' '; MAX_MESSAGE_SIZE + 1];
        assert!(matches!(
            ensure_json(&big),
            Err(ProtocolError::MessageTooLarge { .. })
        ));
    }
}
