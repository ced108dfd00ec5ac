//! Nullable infrastructure for deterministic testing.
//!
//! The transport is the only external dependency of the client. This crate
//! provides a test-friendly implementation that:
//! - Replays scripted replies in order
//! - Records every request for assertions
//! - Never touches the network
//!
//! Usage: hand a [`NullTransport`] to `Client::new` in tests.

pub mod transport;

pub use transport::{NullTransport, SentRequest};
