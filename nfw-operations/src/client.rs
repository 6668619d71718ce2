//! The injected client seam and its failure type

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

/// A request is a structural record of named fields
pub type Request = Map<String, Value>;

/// Client for the remote service
///
/// Implementations perform transport, signing and retries. The dispatcher
/// calls [`Client::call`] exactly once per invocation and never constructs,
/// pools or tears down the client itself.
#[async_trait]
pub trait Client: Send + Sync {
    /// Invoke the remote operation `operation` with `request`
    async fn call(&self, operation: &str, request: Request) -> Result<Value, TransportFailure>;
}

/// A failed remote call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportFailure {
    /// Original failure message
    pub message: String,
    /// Service error code, e.g. `InvalidTokenException`
    pub code: Option<String>,
    /// HTTP status, when the service answered
    pub status: Option<u16>,
    /// Clearer explanation of the failure, when one is known
    pub hint: Option<String>,
}

const NAME_RESOLUTION_MARKERS: &[&str] = &[
    "dns error",
    "failed to lookup address",
    "name or service not known",
    "nodename nor servname",
    "no such host is known",
    "temporary failure in name resolution",
];

impl TransportFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            status: None,
            hint: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Whether the failure is a host name resolution failure
    pub fn is_name_resolution(&self) -> bool {
        let message = self.message.to_ascii_lowercase();
        NAME_RESOLUTION_MARKERS.iter().any(|m| message.contains(m))
    }

    /// Attach a diagnostic hint for well-known failure shapes
    pub fn diagnosed(self) -> Self {
        if self.hint.is_some() {
            return self;
        }
        if self.is_name_resolution() {
            return self.with_hint(
                "The service endpoint host name could not be resolved. Check the region, \
                 the endpoint URL and network connectivity; the region may not offer this \
                 service.",
            );
        }
        if matches!(self.status, Some(401 | 403)) {
            return self.with_hint(
                "The request was not authorized. Check the credentials available to the \
                 endpoint or signing proxy.",
            );
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_resolution_gets_hint() {
        let failure = TransportFailure::new(
            "error sending request: dns error: failed to lookup address information",
        )
        .diagnosed();
        assert!(failure.is_name_resolution());
        assert!(failure.hint.unwrap().contains("could not be resolved"));
    }

    #[test]
    fn test_existing_hint_is_kept() {
        let failure = TransportFailure::new("dns error")
            .with_hint("custom")
            .diagnosed();
        assert_eq!(failure.hint.as_deref(), Some("custom"));
    }

    #[test]
    fn test_service_errors_have_no_hint() {
        let failure = TransportFailure::new("Update token mismatch")
            .with_code("InvalidTokenException")
            .with_status(400)
            .diagnosed();
        assert_eq!(failure.hint, None);
        assert_eq!(failure.to_string(), "Update token mismatch");
    }
}
