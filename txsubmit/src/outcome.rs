//! Submission outcomes and node-reported rejections.
//!
//! Rejection messages are kept as opaque raw JSON. Codes are derived on
//! demand, so new error shapes from the node never break decoding.

use serde::de::IgnoredAny;
use serde_json::value::RawValue;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::SubmitError;

/// A structured transaction rejection reported by the node.
#[derive(Clone, Debug)]
pub struct SubmitTxError {
    messages: Vec<Box<RawValue>>,
}

impl SubmitTxError {
    pub fn new(messages: Vec<Box<RawValue>>) -> Self {
        Self { messages }
    }

    /// The raw messages, in the order the node sent them.
    pub fn messages(&self) -> &[Box<RawValue>] {
        &self.messages
    }

    /// Sorted, de-duplicated error codes across every message.
    ///
    /// A string message is itself one code; an object message contributes its
    /// top-level keys. Any other message shape fails the whole extraction.
    pub fn error_codes(&self) -> Result<Vec<String>, SubmitError> {
        let mut codes = BTreeSet::new();
        let mut failures = Vec::new();

        for (index, message) in self.messages.iter().enumerate() {
            let text = message.get();
            if text.starts_with('"') {
                match serde_json::from_str::<String>(text) {
                    Ok(code) => {
                        codes.insert(code);
                    }
                    Err(e) => failures.push(format!("message {index}: {e}")),
                }
                continue;
            }
            match serde_json::from_str::<BTreeMap<String, IgnoredAny>>(text) {
                Ok(fields) => codes.extend(fields.into_keys()),
                Err(_) => failures.push(format!(
                    "message {index}: expected a string or an object, got {text}"
                )),
            }
        }

        if !failures.is_empty() {
            return Err(SubmitError::ErrorCodes(failures));
        }
        Ok(codes.into_iter().collect())
    }

    /// Whether `code` is among the extracted codes. Extraction failure reads as `false`.
    pub fn has_error_code(&self, code: &str) -> bool {
        self.error_codes()
            .map(|codes| codes.iter().any(|c| c == code))
            .unwrap_or(false)
    }
}

impl PartialEq for SubmitTxError {
    fn eq(&self, other: &Self) -> bool {
        self.messages.len() == other.messages.len()
            && self
                .messages
                .iter()
                .zip(&other.messages)
                .all(|(a, b)| a.get() == b.get())
    }
}

impl Eq for SubmitTxError {}

impl fmt::Display for SubmitTxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SubmitTx failed: ")?;
        for (i, message) in self.messages.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(message.get())?;
        }
        Ok(())
    }
}

impl std::error::Error for SubmitTxError {}

/// The result of one submission call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The node accepted the transaction. Legacy replies may not name the id.
    Accepted { transaction_id: Option<String> },
    Rejected(SubmitTxError),
}

impl SubmissionOutcome {
    pub fn accepted(transaction_id: Option<String>) -> Self {
        Self::Accepted { transaction_id }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn transaction_id(&self) -> Option<&str> {
        match self {
            Self::Accepted { transaction_id } => transaction_id.as_deref(),
            Self::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&SubmitTxError> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected(err) => Some(err),
        }
    }

    /// Rejection messages; empty when accepted.
    pub fn messages(&self) -> &[Box<RawValue>] {
        self.rejection().map(SubmitTxError::messages).unwrap_or(&[])
    }

    /// Error codes of a rejection; empty when accepted.
    pub fn error_codes(&self) -> Result<Vec<String>, SubmitError> {
        match self {
            Self::Accepted { .. } => Ok(Vec::new()),
            Self::Rejected(err) => err.error_codes(),
        }
    }

    pub fn has_error_code(&self, code: &str) -> bool {
        self.rejection()
            .map(|err| err.has_error_code(code))
            .unwrap_or(false)
    }

    /// Treat a rejection as an error.
    pub fn into_result(self) -> Result<Option<String>, SubmitError> {
        match self {
            Self::Accepted { transaction_id } => Ok(transaction_id),
            Self::Rejected(err) => Err(err.into()),
        }
    }
}
