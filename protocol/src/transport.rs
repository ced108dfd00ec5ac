//! The seam to the network transport.
//!
//! The transport owns the connection (WebSocket lifecycle, pipelining,
//! handshake timeout, reconnection) and the request envelope. Whatever it does
//! internally, it presents a one-request-one-response contract: hand it a
//! method and parameters, get back the raw bytes of the matching reply.

use crate::TransportError;

pub trait Transport {
    fn send_request(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<Vec<u8>, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send_request(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<Vec<u8>, TransportError> {
        (**self).send_request(method, params)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send_request(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<Vec<u8>, TransportError> {
        (**self).send_request(method, params)
    }
}
