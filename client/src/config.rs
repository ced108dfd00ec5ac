//! Client options with TOML file support.

use ogmios_protocol::Schema;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::logging::LogFormat;
use crate::ClientError;

/// Options for a [`crate::Client`] and the transport beneath it.
///
/// Can be loaded from a TOML file via [`ClientOptions::from_toml_file`] or
/// built programmatically with the `with_*` setters. Empty or zero values
/// resolve to the defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientOptions {
    /// WebSocket endpoint of the node.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Number of chain-sync requests the transport keeps in flight.
    #[serde(default = "default_pipeline")]
    pub pipeline: usize,

    /// Number of blocks between chain-sync checkpoints.
    #[serde(default = "default_save_interval")]
    pub save_interval: u64,

    /// Handshake timeout in seconds; the transport decides when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handshake_timeout_secs: Option<u64>,

    /// Which wire schema the node speaks.
    #[serde(default)]
    pub schema: Schema,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "ws://127.0.0.1:1337";

/// Pipeline depth used when none is configured.
pub const DEFAULT_PIPELINE: usize = 50;

/// Checkpoint interval used when none is configured.
pub const DEFAULT_SAVE_INTERVAL: u64 = 2160;

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_pipeline() -> usize {
    DEFAULT_PIPELINE
}

fn default_save_interval() -> u64 {
    DEFAULT_SAVE_INTERVAL
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl ClientOptions {
    /// Load options from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ClientError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse options from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ClientError> {
        let options: Self = toml::from_str(s).map_err(|e| ClientError::Config(e.to_string()))?;
        let options = options.resolved();
        options.validate()?;
        Ok(options)
    }

    /// Serialize the options to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ClientError> {
        toml::to_string_pretty(self).map_err(|e| ClientError::Config(e.to_string()))
    }

    /// Replace empty or zero values with the defaults.
    pub fn resolved(mut self) -> Self {
        if self.endpoint.trim().is_empty() {
            self.endpoint = default_endpoint();
        }
        if self.pipeline == 0 {
            self.pipeline = DEFAULT_PIPELINE;
        }
        if self.save_interval == 0 {
            self.save_interval = DEFAULT_SAVE_INTERVAL;
        }
        if self.handshake_timeout_secs == Some(0) {
            self.handshake_timeout_secs = None;
        }
        if self.log_level.trim().is_empty() {
            self.log_level = default_log_level();
        }
        self
    }

    /// Reject options no transport could honour.
    pub fn validate(&self) -> Result<(), ClientError> {
        if !(self.endpoint.starts_with("ws://") || self.endpoint.starts_with("wss://")) {
            return Err(ClientError::Config(format!(
                "endpoint {:?} must use ws:// or wss://",
                self.endpoint
            )));
        }
        Ok(())
    }

    pub fn handshake_timeout(&self) -> Option<Duration> {
        self.handshake_timeout_secs.map(Duration::from_secs)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self.resolved()
    }

    pub fn with_pipeline(mut self, pipeline: usize) -> Self {
        self.pipeline = pipeline;
        self.resolved()
    }

    pub fn with_save_interval(mut self, blocks: u64) -> Self {
        self.save_interval = blocks;
        self.resolved()
    }

    pub fn with_handshake_timeout(mut self, timeout: Duration) -> Self {
        self.handshake_timeout_secs = Some(timeout.as_secs());
        self.resolved()
    }

    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    pub fn with_logging(mut self, format: LogFormat, level: impl Into<String>) -> Self {
        self.log_format = format;
        self.log_level = level.into();
        self.resolved()
    }
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            pipeline: DEFAULT_PIPELINE,
            save_interval: DEFAULT_SAVE_INTERVAL,
            handshake_timeout_secs: None,
            schema: Schema::default(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}
