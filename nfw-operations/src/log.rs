//! Log entry types for invocation tracking

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A record of one remote call
///
/// Entries are transient: they travel with the outcome and are emitted
/// through `tracing`, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique ID for this log entry (ULID format)
    pub id: String,

    /// When the call completed
    pub timestamp: DateTime<Utc>,

    /// Canonical op string (e.g., "delete firewall")
    pub op: String,

    /// Remote operation name (e.g., "DeleteFirewall")
    pub operation: String,

    /// The request as sent
    pub request: Value,

    /// The response, or the error report
    pub output: Value,

    /// How long the call took (milliseconds)
    pub duration_ms: u64,
}

impl LogEntry {
    /// Create a new log entry
    pub fn new(
        op: impl Into<String>,
        operation: impl Into<String>,
        request: Value,
        output: Value,
        duration_ms: u64,
    ) -> Self {
        Self {
            id: ulid::Ulid::new().to_string(),
            timestamp: Utc::now(),
            op: op.into(),
            operation: operation.into(),
            request,
            output,
            duration_ms,
        }
    }
}
