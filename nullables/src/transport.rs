//! Nullable transport: record requests, replay scripted replies.

use ogmios_protocol::{Transport, TransportError};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::VecDeque;

/// One request as the client issued it.
#[derive(Clone, Debug, PartialEq)]
pub struct SentRequest {
    pub method: String,
    pub params: Value,
}

/// A test transport that answers from a script instead of a node.
pub struct NullTransport {
    /// All requests "sent" by the client.
    sent: RefCell<Vec<SentRequest>>,
    /// Replies to hand out, oldest first.
    replies: RefCell<VecDeque<Result<Vec<u8>, TransportError>>>,
}

impl NullTransport {
    pub fn new() -> Self {
        Self {
            sent: RefCell::new(Vec::new()),
            replies: RefCell::new(VecDeque::new()),
        }
    }

    /// Start with a fixed script of raw replies.
    pub fn with_replies<I, B>(replies: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Vec<u8>>,
    {
        let transport = Self::new();
        for reply in replies {
            transport.enqueue(reply);
        }
        transport
    }

    /// Enqueue a raw reply for the next request.
    pub fn enqueue(&self, reply: impl Into<Vec<u8>>) {
        self.replies.borrow_mut().push_back(Ok(reply.into()));
    }

    /// Enqueue a JSON reply for the next request.
    pub fn enqueue_json(&self, reply: &Value) {
        self.enqueue(reply.to_string());
    }

    /// Make the next request fail.
    pub fn enqueue_failure(&self, error: TransportError) {
        self.replies.borrow_mut().push_back(Err(error));
    }

    /// Get all sent requests (for assertions).
    pub fn sent(&self) -> Vec<SentRequest> {
        self.sent.borrow().clone()
    }

    /// Replies not yet consumed.
    pub fn pending(&self) -> usize {
        self.replies.borrow().len()
    }

    /// Clear all state.
    pub fn reset(&self) {
        self.sent.borrow_mut().clear();
        self.replies.borrow_mut().clear();
    }
}

impl Default for NullTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for NullTransport {
    fn send_request(&self, method: &str, params: Value) -> Result<Vec<u8>, TransportError> {
        self.sent.borrow_mut().push(SentRequest {
            method: method.to_string(),
            params,
        });
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(TransportError::Closed))
    }
}
